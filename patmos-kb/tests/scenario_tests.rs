//! End-to-end scenarios over the canonical tables

use patmos_kb::{knowledge, PassageCategory, SearchHit};

#[test]
fn test_prophecy_lookup_by_code() {
    let kb = knowledge();
    let prophecy = kb.prophecy("@2300").expect("@2300 is in the table");
    assert_eq!(prophecy.name, "2300 Days/Years to Sanctuary Cleansing");
}

#[test]
fn test_prophecy_lookup_miss_returns_none() {
    let kb = knowledge();
    assert!(kb.prophecy("does-not-exist").is_none());
}

#[test]
fn test_messianic_passages_are_exactly_the_tagged_set() {
    let kb = knowledge();
    let messianic = kb.passages_in(PassageCategory::Messianic);
    let ids: Vec<&str> = messianic.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["isa-7-14", "joel-2-28-32", "dan-9-24-27"]);
    assert!(!ids.contains(&"isa-11-1-10"));

    let kingdom = kb.passages_in(PassageCategory::Kingdom);
    assert!(kingdom.iter().any(|p| p.id == "isa-11-1-10"));
}

#[test]
fn test_pentecost_search_finds_the_passage_and_the_parallel() {
    let kb = knowledge();
    let lower = kb.search("pentecost");
    let upper = kb.search("PENTECOST");
    assert_eq!(lower, upper);

    let keys: Vec<&str> = lower.iter().map(SearchHit::key).collect();
    assert_eq!(keys, vec!["sinai-pentecost", "joel-2-28-32"]);
}

#[test]
fn test_related_prophecies_expand_in_declared_order() {
    let kb = knowledge();
    let related = kb.related_prophecies("@490");
    assert_eq!(related.len(), 2);
    assert_eq!(related[0].code, "@70y");
    assert_eq!(related[0].name, "70 Years of Captivity");
    assert_eq!(related[1].code, "@2300");
    assert_eq!(related[1].name, "2300 Days/Years to Sanctuary Cleansing");
}

#[test]
fn test_shared_anchor_of_the_490_and_2300() {
    // The two spans are mutually proving: same starting year, same decree.
    let kb = knowledge();
    let weeks = kb.prophecy("@490").expect("@490 present");
    let days = kb.prophecy("@2300").expect("@2300 present");
    assert_eq!(weeks.start.year, days.start.year);
    assert_eq!(weeks.start.year, -457);
}

#[test]
fn test_timeline_starts_before_the_flood_and_ends_in_the_judgment_era() {
    let kb = knowledge();
    let timeline = kb.timeline();
    let first = timeline.first().expect("timeline nonempty");
    let last = timeline.last().expect("timeline nonempty");
    assert_eq!(first.code, "@120");
    assert!(last.start.year > 0);
}
