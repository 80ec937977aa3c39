use super::error::TutorialError;
use super::value::Value;

/// Rows of a canned result table. The column list is stored once, so every
/// row has the same columns in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRows {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl ResultRows {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self, TutorialError> {
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(TutorialError::RowShapeMismatch {
                    row: idx,
                    reason: format!("expected {} values, found {}", columns.len(), row.len()),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Builds a table from column->value records. Headers come from the first
    /// record's keys; every later record must carry the same keys in the same order.
    pub fn from_records(records: Vec<Vec<(&str, Value)>>) -> Result<Self, TutorialError> {
        let columns: Vec<String> = records
            .first()
            .map(|first| first.iter().map(|(name, _)| (*name).to_string()).collect())
            .unwrap_or_default();

        let mut rows = Vec::with_capacity(records.len());
        for (idx, record) in records.into_iter().enumerate() {
            let same_keys = record.len() == columns.len()
                && record.iter().zip(&columns).all(|((name, _), col)| *name == col);
            if !same_keys {
                let keys: Vec<&str> = record.iter().map(|(name, _)| *name).collect();
                return Err(TutorialError::RowShapeMismatch {
                    row: idx,
                    reason: format!("columns [{}] differ from [{}]", keys.join(", "), columns.join(", ")),
                });
            }
            rows.push(record.into_iter().map(|(_, value)| value).collect());
        }

        Ok(Self { columns, rows })
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row `idx` as (column, value) pairs.
    #[must_use]
    pub fn record(&self, idx: usize) -> Option<Vec<(&str, &Value)>> {
        self.rows
            .get(idx)
            .map(|row| self.columns.iter().map(String::as_str).zip(row.iter()).collect())
    }

    /// Value of `column` in row `idx`.
    #[must_use]
    pub fn get(&self, idx: usize, column: &str) -> Option<&Value> {
        let pos = self.columns.iter().position(|c| c == column)?;
        self.rows.get(idx).and_then(|row| row.get(pos))
    }
}

/// Outcome of one simulated execution. Built fresh for every call and owned
/// by the page that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulatedResultSet {
    Rows(ResultRows),
    Success,
    Error(String),
}

impl SimulatedResultSet {
    #[must_use]
    pub const fn rows(&self) -> Option<&ResultRows> {
        match self {
            Self::Rows(rows) => Some(rows),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

impl From<Result<ResultRows, TutorialError>> for SimulatedResultSet {
    fn from(result: Result<ResultRows, TutorialError>) -> Self {
        match result {
            Ok(rows) => Self::Rows(rows),
            Err(e) => Self::Error(e.to_string()),
        }
    }
}
