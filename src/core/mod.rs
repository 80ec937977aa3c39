// Module declarations
pub mod error;
pub mod value;
pub mod result_set;

// Re-exports for convenience
pub use error::TutorialError;
pub use value::Value;
pub use result_set::{ResultRows, SimulatedResultSet};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Integer(42).to_string(), "42");
        assert_eq!(Value::text("hello").to_string(), "hello");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::date("2024-03-15").to_string(), "2024-03-15");
        assert_eq!(Value::timestamp("2024-01-15T10:00:00Z").to_string(), "2024-01-15T10:00:00Z");
    }

    #[test]
    fn test_value_parse_fallback() {
        assert!(matches!(Value::date("2024-03-15"), Value::Date(_)));
        assert_eq!(Value::date("not a date"), Value::text("not a date"));
        assert!(matches!(Value::timestamp("2024-01-15T10:00:00Z"), Value::TimestampTz(_)));
        assert_eq!(Value::timestamp("yesterday"), Value::text("yesterday"));
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Integer(42).as_int(), Some(42));
        assert_eq!(Value::text("hello").as_int(), None);
        assert_eq!(Value::text("hello").as_text(), Some("hello"));
        assert_eq!(Value::Boolean(false).as_bool(), Some(false));
        assert_eq!(Value::Integer(1).as_bool(), None);
    }

    #[test]
    fn test_rows_from_records() {
        let rows = ResultRows::from_records(vec![
            vec![("id", Value::Integer(1)), ("name", Value::text("Alice"))],
            vec![("id", Value::Integer(2)), ("name", Value::text("Bob"))],
        ])
        .unwrap();

        assert_eq!(rows.columns(), ["id".to_string(), "name".to_string()]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.get(1, "name"), Some(&Value::text("Bob")));
        assert_eq!(rows.get(0, "missing"), None);

        let record = rows.record(0).unwrap();
        assert_eq!(record[0], ("id", &Value::Integer(1)));
        assert!(rows.record(2).is_none());
    }

    #[test]
    fn test_rows_reject_mismatched_columns() {
        let err = ResultRows::from_records(vec![
            vec![("id", Value::Integer(1)), ("name", Value::text("Alice"))],
            vec![("name", Value::text("Bob")), ("id", Value::Integer(2))],
        ])
        .unwrap_err();
        assert!(matches!(err, TutorialError::RowShapeMismatch { row: 1, .. }));

        let err = ResultRows::new(
            vec!["id".to_string()],
            vec![vec![Value::Integer(1), Value::Integer(2)]],
        )
        .unwrap_err();
        assert!(matches!(err, TutorialError::RowShapeMismatch { row: 0, .. }));
    }

    #[test]
    fn test_empty_records() {
        let rows = ResultRows::from_records(Vec::new()).unwrap();
        assert!(rows.is_empty());
        assert!(rows.columns().is_empty());
    }

    #[test]
    fn test_result_set_from_shape_error() {
        let result: SimulatedResultSet =
            ResultRows::new(vec!["a".to_string()], vec![vec![]]).into();
        assert!(result.error().is_some());
        assert!(result.rows().is_none());
        assert!(!result.is_success());
    }
}
