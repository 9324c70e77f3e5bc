use serde::Serialize;

/// A project/task pair a user logs time against.
/// (user_id, project_number, task_number) is unique; codes are never
/// hard-deleted, only toggled via `is_active`.
#[derive(Debug, Clone, Serialize)]
pub struct ChargeCode {
    pub id: i64,
    pub user_id: i64,
    pub project_number: String,
    pub task_number: String,
    pub description: String,
    pub is_active: bool,
}

impl ChargeCode {
    /// Human-readable label used across the calendar and the week overview.
    pub fn label(&self) -> String {
        format!(
            "{}-{} {}",
            self.project_number, self.task_number, self.description
        )
    }
}
