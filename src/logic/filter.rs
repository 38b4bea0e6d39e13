use crate::model::Record;

/// Records whose code, name or description contains `query`, in collection order.
/// An empty query is the identity projection.
pub fn filter_records(records: &[Record], query: &str) -> Vec<Record> {
    if query.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| record.matches(query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Record> {
        vec![
            Record::new(1, "A1", "Ana", "x"),
            Record::new(2, "B2", "Bob", "accounting"),
            Record::new(3, "C3", "Carla", "Bob's manager"),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        assert_eq!(filter_records(&roster(), ""), roster());
    }

    #[test]
    fn test_matches_any_field_preserving_order() {
        let ids: Vec<_> = filter_records(&roster(), "Bob").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);

        let ids: Vec<_> = filter_records(&roster(), "C3").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_single_record_scenario() {
        let records = vec![Record::new(1, "A1", "Ana", "x")];
        assert_eq!(filter_records(&records, "Ana"), records);
        assert!(filter_records(&records, "Bob").is_empty());
        assert!(filter_records(&records, "ana").is_empty());
    }
}
