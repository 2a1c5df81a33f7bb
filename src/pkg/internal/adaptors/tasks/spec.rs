use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::pkg::internal::tasks::{TaskPriority, TaskStatus};

#[derive(Serialize, Deserialize, FromRow, Debug, Clone)]
pub struct TaskEntry {
    pub id: Uuid,
    pub company_id: Option<Uuid>,
    pub coordinator_name: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, FromRow, Debug, Clone)]
pub struct TaskWithCompany {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub task: TaskEntry,
    pub company_name: Option<String>,
}

pub const TASK_COLUMNS: &str = "id, company_id, coordinator_name, title, description, due_date, \
     status, priority, created_at, updated_at";

pub const TASK_COLUMNS_QUALIFIED: &str =
    "t.id, t.company_id, t.coordinator_name, t.title, t.description, t.due_date, t.status, \
     t.priority, t.created_at, t.updated_at";
