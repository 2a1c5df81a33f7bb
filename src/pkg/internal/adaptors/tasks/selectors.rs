use sqlx::PgConnection;
use uuid::Uuid;

use crate::{
    pkg::internal::adaptors::tasks::spec::{
        TASK_COLUMNS, TASK_COLUMNS_QUALIFIED, TaskEntry, TaskWithCompany,
    },
    prelude::Result,
};

pub struct TaskSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> TaskSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        TaskSelector { pool }
    }

    pub async fn get_all(&mut self, coordinator_name: Option<&str>) -> Result<Vec<TaskWithCompany>> {
        let rows = match coordinator_name {
            Some(coordinator_name) => {
                sqlx::query_as::<_, TaskWithCompany>(&format!(
                    "SELECT {}, c.name AS company_name
                     FROM tasks t LEFT JOIN companies c ON c.id = t.company_id
                     WHERE t.coordinator_name = $1
                     ORDER BY t.due_date",
                    TASK_COLUMNS_QUALIFIED
                ))
                .bind(coordinator_name)
                .fetch_all(&mut *self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, TaskWithCompany>(&format!(
                    "SELECT {}, c.name AS company_name
                     FROM tasks t LEFT JOIN companies c ON c.id = t.company_id
                     ORDER BY t.due_date",
                    TASK_COLUMNS_QUALIFIED
                ))
                .fetch_all(&mut *self.pool)
                .await?
            }
        };
        Ok(rows)
    }

    pub async fn get_by_id(&mut self, id: Uuid) -> Result<Option<TaskEntry>> {
        let row = sqlx::query_as::<_, TaskEntry>(&format!(
            "SELECT {} FROM tasks WHERE id = $1",
            TASK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
