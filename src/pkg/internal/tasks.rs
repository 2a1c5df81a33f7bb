use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::prelude::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "task_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "task_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::Medium
    }
}

/// Derived, never persisted. A completed task is never overdue, whatever
/// its due date.
pub fn is_overdue(status: TaskStatus, due_date: NaiveDate, today: NaiveDate) -> bool {
    status != TaskStatus::Completed && due_date < today
}

pub fn is_due_today(due_date: NaiveDate, today: NaiveDate) -> bool {
    due_date == today
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn pending_task_past_due_is_overdue() {
        let today = d("2025-03-11");
        assert!(is_overdue(TaskStatus::Pending, d("2025-03-10"), today));
        assert!(is_overdue(TaskStatus::InProgress, d("2025-03-10"), today));
    }

    #[test]
    fn completing_clears_overdue_without_touching_due_date() {
        let today = d("2025-03-11");
        let due = d("2025-03-10");
        assert!(is_overdue(TaskStatus::Pending, due, today));
        assert!(!is_overdue(TaskStatus::Completed, due, today));
    }

    #[test]
    fn due_today_is_calendar_day_equality() {
        let today = d("2025-03-11");
        assert!(is_due_today(d("2025-03-11"), today));
        assert!(!is_due_today(d("2025-03-12"), today));
        assert!(!is_overdue(TaskStatus::Pending, d("2025-03-11"), today));
    }
}
