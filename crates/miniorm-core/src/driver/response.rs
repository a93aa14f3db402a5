/// Outcome of [`Statement::execute_update`](super::Statement::execute_update).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Response {
    /// Number of rows changed by the statement.
    pub rows_affected: u64,

    /// Key generated for the inserted row, when the statement was an INSERT
    /// that produced one.
    pub generated_id: Option<i64>,
}

impl Response {
    pub fn count(rows_affected: u64) -> Self {
        Self {
            rows_affected,
            generated_id: None,
        }
    }

    pub fn inserted(rows_affected: u64, generated_id: i64) -> Self {
        Self {
            rows_affected,
            generated_id: Some(generated_id),
        }
    }
}
