//! Crosswalk behavior over in-memory tables.

use gem_map::{Crosswalk, MatchPipeline, normalize};
use gem_model::{CodeFamily, EquivalenceTable, GemEntry, MappingPair, NormalizedRow};

fn table(rows: &[(&str, &str, &str)]) -> EquivalenceTable {
    rows.iter()
        .map(|(source, target, flag)| GemEntry::new(*source, *target, *flag))
        .collect()
}

fn pair(code: &str, flag: &str) -> MappingPair {
    MappingPair::new(code, flag)
}

#[test]
fn forward_lookup_includes_table_row() {
    let forward = table(&[("0010", "A000", "00000"), ("0011", "A001", "10000")]);
    let crosswalk = Crosswalk::from_tables(CodeFamily::Cm, &forward, &table(&[]));

    let result = crosswalk.forward_match(&["0010"]);
    assert!(result.get("0010").unwrap().contains(&pair("A000", "00000")));
    assert!(!result.contains_key("0011"));
}

#[test]
fn backward_table_is_not_the_inverse_of_forward() {
    let forward = table(&[("0010", "A000", "00000")]);
    let backward = table(&[("A000", "0011", "10000"), ("B999", "0010", "10000")]);
    let crosswalk = Crosswalk::from_tables(CodeFamily::Cm, &forward, &backward);

    let back = crosswalk.backward_match(&["A000"]);
    let pairs = back.get("A000").unwrap();
    assert!(pairs.contains(&pair("0011", "10000")));
    assert!(!pairs.iter().any(|p| p.code == "0010"));

    let fwd = crosswalk.forward_match(&["B999"]);
    assert!(fwd.get("B999").unwrap().is_empty());
}

#[test]
fn unknown_codes_are_present_with_no_pairs() {
    let forward = table(&[("0010", "A000", "00000")]);
    let crosswalk = Crosswalk::from_tables(CodeFamily::Cm, &forward, &table(&[]));

    let result = crosswalk.forward_backward(&["0010", "XXXX"]);
    let codes: Vec<&str> = result.codes().collect();
    assert_eq!(codes, vec!["0010", "XXXX"]);
    assert!(result.get("XXXX").unwrap().is_empty());
}

#[test]
fn forward_backward_merges_both_directions() {
    let forward = table(&[("A1", "B1", "0"), ("A2", "B2", "0")]);
    let backward = table(&[("A1", "C1", "1"), ("A1", "B1", "0")]);
    let crosswalk = Crosswalk::from_tables(CodeFamily::Cm, &forward, &backward);

    let result = crosswalk.forward_backward(&["A1"]);
    let pairs: Vec<&MappingPair> = result.get("A1").unwrap().iter().collect();
    assert_eq!(pairs, vec![&pair("B1", "0"), &pair("C1", "1")]);
}

#[test]
fn expansion_surfaces_codes_sharing_a_target() {
    let forward = table(&[("123.4", "A10", "1"), ("999.9", "A10", "2")]);
    let crosswalk = Crosswalk::from_tables(CodeFamily::Cm, &forward, &table(&[]));

    let outcome = crosswalk.expand(&["123.4"]);
    let result = &outcome.result;
    assert!(result.contains_key("123.4"));
    assert!(result.contains_key("999.9"));
    assert!(result.get("123.4").unwrap().contains(&pair("A10", "1")));
    assert!(result.get("999.9").unwrap().contains(&pair("A10", "2")));
    assert!(outcome.secondary_codes.contains(&"999.9".to_string()));
}

#[test]
fn expansion_uses_backward_table_evidence() {
    let forward = table(&[("0010", "A000", "00000")]);
    let backward = table(&[("A000", "0020", "10000")]);
    let crosswalk = Crosswalk::from_tables(CodeFamily::Pcs, &forward, &backward);

    let outcome = crosswalk.run(MatchPipeline::Secondary, &["0010"]);
    assert_eq!(outcome.secondary_codes, vec!["0010", "0020"]);
    // 0020 has no forward row and is not an I10 key, so it stays empty.
    assert!(outcome.result.get("0020").unwrap().is_empty());
}

#[test]
fn expansion_stops_after_one_hop() {
    // X and Y share Z; Y and W share Q. W is two hops from X.
    let forward = table(&[
        ("X", "Z", "0"),
        ("Y", "Z", "0"),
        ("Y", "Q", "1"),
        ("W", "Q", "1"),
    ]);
    let crosswalk = Crosswalk::from_tables(CodeFamily::Cm, &forward, &table(&[]));

    let outcome = crosswalk.expand(&["X"]);
    assert!(outcome.result.contains_key("Y"));
    assert!(!outcome.result.contains_key("W"));
    assert!(outcome.result.get("Y").unwrap().contains(&pair("Q", "1")));

    // A second round from the expanded key set reaches W.
    let keys: Vec<String> = outcome.result.codes().map(str::to_string).collect();
    let again = crosswalk.expand(&keys);
    assert!(again.result.contains_key("W"));
}

#[test]
fn normalized_rows_keep_input_code() {
    let forward = table(&[("0010", "A000", "00000"), ("0010", "A001", "10000")]);
    let crosswalk = Crosswalk::from_tables(CodeFamily::Cm, &forward, &table(&[]));

    let rows = normalize(&crosswalk.forward_match(&["0010", "V0001"]));
    assert_eq!(
        rows,
        vec![
            NormalizedRow::matched("0010", "A000", "00000"),
            NormalizedRow::matched("0010", "A001", "10000"),
            NormalizedRow::unmatched("V0001"),
        ]
    );
}
