//! Layered lookup precedence

use patmos_kb::{knowledge, Knowledge, Layered};
use patmos_test_utils as fixtures;

#[test]
fn test_primary_misses_fall_through_to_the_fallback() {
    let overlay = Knowledge::new(fixtures::valid_tables()).expect("fixture tables are valid");
    let layered = Layered::new(&overlay, knowledge());

    // Present only in the overlay.
    assert!(layered.prophecy("@a").is_some());
    // Present only in the canonical fallback.
    let prophecy = layered.prophecy("@2300").expect("falls through");
    assert_eq!(prophecy.name, "2300 Days/Years to Sanctuary Cleansing");
    // Present in neither.
    assert!(layered.prophecy("@nowhere").is_none());
}

#[test]
fn test_primary_records_shadow_fallback_records_entirely() {
    let mut tables = fixtures::valid_tables();
    let mut override_record = fixtures::prophecy("@2300");
    override_record.name = "A seasonal reading of the 2300".to_string();
    tables.prophecies.push(override_record);

    let overlay = Knowledge::new(tables).expect("overlay tables are valid");
    let layered = Layered::new(&overlay, knowledge());

    // The overlay's record wins whole; nothing is merged from the fallback.
    let prophecy = layered.prophecy("@2300").expect("primary hit");
    assert_eq!(prophecy.name, "A seasonal reading of the 2300");

    // Keys the overlay does not define still come from the canonical set.
    assert!(layered.passage("isa-7-14").is_some());
}
