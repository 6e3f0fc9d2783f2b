//! Flattening of mapping results into output rows.

use gem_model::{MappingResult, NormalizedRow};

/// One row per `(input, related, flag)` triple, grouped by input code in key
/// order. A code with no pairs yields a single row with no related code
/// and no flag.
pub fn normalize(result: &MappingResult) -> Vec<NormalizedRow> {
    let mut rows = Vec::with_capacity(result.pair_count() + result.len());
    for (code, pairs) in result.iter() {
        if pairs.is_empty() {
            rows.push(NormalizedRow::unmatched(code));
            continue;
        }
        for pair in pairs {
            rows.push(NormalizedRow::matched(code, &pair.code, &pair.flag));
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use gem_model::MappingPair;

    use super::*;

    #[test]
    fn unmatched_code_yields_one_null_row() {
        let mut result = MappingResult::new();
        result.insert_empty("V0001");
        let rows = normalize(&result);
        assert_eq!(rows, vec![NormalizedRow::unmatched("V0001")]);
    }

    #[test]
    fn each_pair_becomes_a_row() {
        let mut result = MappingResult::new();
        result.insert_pairs(
            "0010",
            [
                MappingPair::new("A000", "00000"),
                MappingPair::new("A001", "10000"),
            ],
        );
        result.insert_empty("V0001");
        result.insert_pairs("0020", [MappingPair::new("A010", "10000")]);

        let rows = normalize(&result);
        assert_eq!(
            rows,
            vec![
                NormalizedRow::matched("0010", "A000", "00000"),
                NormalizedRow::matched("0010", "A001", "10000"),
                NormalizedRow::unmatched("V0001"),
                NormalizedRow::matched("0020", "A010", "10000"),
            ]
        );
    }
}
