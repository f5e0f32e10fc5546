use serde::{Deserialize, Serialize};

/// Result of a write against the store.
///
/// `affected_rows` is the success signal; zero means the id matched nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationOutcome {
    pub affected_rows: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_id: Option<u64>,
}

impl MutationOutcome {
    /// Outcome of an insert, carrying the id the store assigned.
    pub fn inserted(insert_id: u64, affected_rows: u64) -> Self {
        Self {
            affected_rows,
            insert_id: Some(insert_id),
        }
    }

    /// Outcome of an update or delete.
    pub fn affected(affected_rows: u64) -> Self {
        Self {
            affected_rows,
            insert_id: None,
        }
    }
}
