use chrono::NaiveDate;
use sqlx::{PgConnection, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    pkg::internal::{
        adaptors::tasks::spec::{TASK_COLUMNS, TaskEntry},
        tasks::{TaskPriority, TaskStatus},
    },
    prelude::Result,
};

pub struct CreateTaskData {
    pub company_id: Option<Uuid>,
    pub coordinator_name: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub priority: TaskPriority,
}

#[derive(Default)]
pub struct PatchTaskData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

pub struct TaskMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> TaskMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        TaskMutator { pool }
    }

    pub async fn create(&mut self, task: CreateTaskData) -> Result<TaskEntry> {
        let row = sqlx::query_as::<_, TaskEntry>(&format!(
            r#"
            INSERT INTO tasks (company_id, coordinator_name, title, description, due_date, priority)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            TASK_COLUMNS
        ))
        .bind(task.company_id)
        .bind(&task.coordinator_name)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.due_date)
        .bind(task.priority)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&mut self, id: Uuid, patch: PatchTaskData) -> Result<Option<TaskEntry>> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE tasks SET updated_at = now()");
        if let Some(title) = &patch.title {
            qb.push(", title = ").push_bind(title);
        }
        if let Some(description) = &patch.description {
            qb.push(", description = ").push_bind(description);
        }
        if let Some(due_date) = patch.due_date {
            qb.push(", due_date = ").push_bind(due_date);
        }
        if let Some(status) = patch.status {
            qb.push(", status = ").push_bind(status);
        }
        if let Some(priority) = patch.priority {
            qb.push(", priority = ").push_bind(priority);
        }
        qb.push(" WHERE id = ").push_bind(id);
        qb.push(format!(" RETURNING {}", TASK_COLUMNS));
        let row = qb
            .build_query_as::<TaskEntry>()
            .fetch_optional(&mut *self.pool)
            .await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
