//! Fixed enumerations for knowledge-base records
//!
//! Every tag set is a closed enum so an invalid tag is rejected when content
//! is deserialized or parsed, never stored as an arbitrary string.

use crate::TagParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// TIME PROPHECIES
// ============================================================================

/// Category of a time prophecy, grouping it by the era it governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProphecyCategory {
    /// Pre-Israel prophecies given to the patriarchs
    Patriarchal,
    /// Captivity and sojourn prophecies
    Exile,
    /// Prophecies anchored to the Messiah's first advent
    Messianic,
    /// Prophecies spanning the church age
    ChurchEra,
    /// Prophecies terminating in judgment
    Judgment,
}

impl ProphecyCategory {
    /// All categories in presentation order.
    pub const ALL: [ProphecyCategory; 5] = [
        ProphecyCategory::Patriarchal,
        ProphecyCategory::Exile,
        ProphecyCategory::Messianic,
        ProphecyCategory::ChurchEra,
        ProphecyCategory::Judgment,
    ];

    /// Canonical tag form, matching the serialized representation.
    pub fn as_tag(&self) -> &'static str {
        match self {
            ProphecyCategory::Patriarchal => "patriarchal",
            ProphecyCategory::Exile => "exile",
            ProphecyCategory::Messianic => "messianic",
            ProphecyCategory::ChurchEra => "church-era",
            ProphecyCategory::Judgment => "judgment",
        }
    }
}

impl fmt::Display for ProphecyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

impl FromStr for ProphecyCategory {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "patriarchal" => Ok(ProphecyCategory::Patriarchal),
            "exile" => Ok(ProphecyCategory::Exile),
            "messianic" => Ok(ProphecyCategory::Messianic),
            "churchera" => Ok(ProphecyCategory::ChurchEra),
            "judgment" => Ok(ProphecyCategory::Judgment),
            _ => Err(TagParseError::new(
                "prophecy category",
                s,
                "patriarchal | exile | messianic | church-era | judgment",
            )),
        }
    }
}

/// Unit a prophetic duration is reckoned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeUnit {
    /// Literal years
    Years,
    /// Literal days
    Days,
    /// Prophetic days applied on the day-for-a-year reckoning
    DaysAsYears,
}

impl TimeUnit {
    pub fn as_tag(&self) -> &'static str {
        match self {
            TimeUnit::Years => "years",
            TimeUnit::Days => "days",
            TimeUnit::DaysAsYears => "days-as-years",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

impl FromStr for TimeUnit {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "years" => Ok(TimeUnit::Years),
            "days" => Ok(TimeUnit::Days),
            "daysasyears" => Ok(TimeUnit::DaysAsYears),
            _ => Err(TagParseError::new(
                "time unit",
                s,
                "years | days | days-as-years",
            )),
        }
    }
}

// ============================================================================
// PARALLELS
// ============================================================================

/// Thematic category of a biblical parallel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParallelCategory {
    Covenant,
    Deliverance,
    Sacrifice,
    Provision,
    Judgment,
    Kingship,
}

impl ParallelCategory {
    /// All categories in presentation order.
    pub const ALL: [ParallelCategory; 6] = [
        ParallelCategory::Covenant,
        ParallelCategory::Deliverance,
        ParallelCategory::Sacrifice,
        ParallelCategory::Provision,
        ParallelCategory::Judgment,
        ParallelCategory::Kingship,
    ];

    pub fn as_tag(&self) -> &'static str {
        match self {
            ParallelCategory::Covenant => "covenant",
            ParallelCategory::Deliverance => "deliverance",
            ParallelCategory::Sacrifice => "sacrifice",
            ParallelCategory::Provision => "provision",
            ParallelCategory::Judgment => "judgment",
            ParallelCategory::Kingship => "kingship",
        }
    }
}

impl fmt::Display for ParallelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

impl FromStr for ParallelCategory {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "covenant" => Ok(ParallelCategory::Covenant),
            "deliverance" => Ok(ParallelCategory::Deliverance),
            "sacrifice" => Ok(ParallelCategory::Sacrifice),
            "provision" => Ok(ParallelCategory::Provision),
            "judgment" => Ok(ParallelCategory::Judgment),
            "kingship" => Ok(ParallelCategory::Kingship),
            _ => Err(TagParseError::new(
                "parallel category",
                s,
                "covenant | deliverance | sacrifice | provision | judgment | kingship",
            )),
        }
    }
}

// ============================================================================
// PROPHETIC PASSAGES
// ============================================================================

/// Category of a prophetic passage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PassageCategory {
    Messianic,
    Kingdom,
    DayOfTheLord,
    Restoration,
}

impl PassageCategory {
    /// All categories in presentation order.
    pub const ALL: [PassageCategory; 4] = [
        PassageCategory::Messianic,
        PassageCategory::Kingdom,
        PassageCategory::DayOfTheLord,
        PassageCategory::Restoration,
    ];

    pub fn as_tag(&self) -> &'static str {
        match self {
            PassageCategory::Messianic => "messianic",
            PassageCategory::Kingdom => "kingdom",
            PassageCategory::DayOfTheLord => "day-of-the-lord",
            PassageCategory::Restoration => "restoration",
        }
    }
}

impl fmt::Display for PassageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

impl FromStr for PassageCategory {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "messianic" => Ok(PassageCategory::Messianic),
            "kingdom" => Ok(PassageCategory::Kingdom),
            "dayofthelord" => Ok(PassageCategory::DayOfTheLord),
            "restoration" => Ok(PassageCategory::Restoration),
            _ => Err(TagParseError::new(
                "passage category",
                s,
                "messianic | kingdom | day-of-the-lord | restoration",
            )),
        }
    }
}

/// Interpretive horizon a fulfillment belongs to.
///
/// One passage carries at most one fulfillment per layer. Ordering follows
/// the horizons chronologically: near-historical, then the intermediate
/// church-age reading, then the ultimate eschatological one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum FulfillmentLayer {
    /// Near-historical horizon, within the prophet's own era
    Near,
    /// Intermediate horizon, the church age
    Intermediate,
    /// Ultimate eschatological horizon
    Ultimate,
}

impl FulfillmentLayer {
    /// All layers in chronological order.
    pub const ALL: [FulfillmentLayer; 3] = [
        FulfillmentLayer::Near,
        FulfillmentLayer::Intermediate,
        FulfillmentLayer::Ultimate,
    ];

    pub fn as_tag(&self) -> &'static str {
        match self {
            FulfillmentLayer::Near => "near",
            FulfillmentLayer::Intermediate => "intermediate",
            FulfillmentLayer::Ultimate => "ultimate",
        }
    }
}

impl fmt::Display for FulfillmentLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

impl FromStr for FulfillmentLayer {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "near" => Ok(FulfillmentLayer::Near),
            "intermediate" => Ok(FulfillmentLayer::Intermediate),
            "ultimate" => Ok(FulfillmentLayer::Ultimate),
            _ => Err(TagParseError::new(
                "fulfillment layer",
                s,
                "near | intermediate | ultimate",
            )),
        }
    }
}

/// Normalize user-facing tag tokens for parsing.
/// Strips whitespace, underscores, and dashes, and lowercases.
fn normalize_token(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
