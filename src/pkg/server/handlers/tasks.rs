use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use standard_error::StandardError;
use uuid::Uuid;

use crate::{
    pkg::{
        internal::{
            access::Actor,
            adaptors::tasks::{
                mutators::{CreateTaskData, PatchTaskData, TaskMutator},
                selectors::TaskSelector,
                spec::{TaskEntry, TaskWithCompany},
            },
            tasks::{TaskPriority, TaskStatus, is_due_today, is_overdue},
        },
        server::state::AppState,
    },
    prelude::Result,
};

#[derive(Deserialize)]
pub struct CreateTaskInput {
    pub company_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub priority: TaskPriority,
}

#[derive(Deserialize, Default)]
pub struct PatchTaskInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

/// Task row with its urgency flags computed against today's date.
#[derive(Serialize)]
pub struct TaskView {
    #[serde(flatten)]
    pub task: TaskWithCompany,
    pub is_overdue: bool,
    pub is_due_today: bool,
}

pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Arc<Actor>>,
) -> Result<Json<Vec<TaskView>>> {
    let mut conn = state.db_pool.acquire().await?;
    let filter = (!actor.is_admin()).then_some(actor.name.as_str());
    let tasks = TaskSelector::new(&mut conn).get_all(filter).await?;
    let today = Utc::now().date_naive();
    let views = tasks
        .into_iter()
        .map(|task| TaskView {
            is_overdue: is_overdue(task.task.status, task.task.due_date, today),
            is_due_today: is_due_today(task.task.due_date, today),
            task,
        })
        .collect();
    Ok(Json(views))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Arc<Actor>>,
    Json(input): Json<CreateTaskInput>,
) -> Result<Json<TaskEntry>> {
    if input.title.trim().is_empty() {
        return Err(StandardError::new("ERR-VALIDATION-001"));
    }
    let mut conn = state.db_pool.acquire().await?;
    let created = TaskMutator::new(&mut conn)
        .create(CreateTaskData {
            company_id: input.company_id,
            coordinator_name: actor.name.clone(),
            title: input.title,
            description: input.description,
            due_date: input.due_date,
            priority: input.priority,
        })
        .await?;
    tracing::info!("{} added task {}", &actor.name, &created.title);
    Ok(Json(created))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(_actor): Extension<Arc<Actor>>,
    Path(id): Path<Uuid>,
    Json(input): Json<PatchTaskInput>,
) -> Result<Json<TaskEntry>> {
    let mut conn = state.db_pool.acquire().await?;
    let updated = TaskMutator::new(&mut conn)
        .update(
            id,
            PatchTaskData {
                title: input.title,
                description: input.description,
                due_date: input.due_date,
                status: input.status,
                priority: input.priority,
            },
        )
        .await?
        .ok_or_else(|| StandardError::new("ERR-TASK-001"))?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(_actor): Extension<Arc<Actor>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>> {
    let mut conn = state.db_pool.acquire().await?;
    if !TaskMutator::new(&mut conn).delete(id).await? {
        return Err(StandardError::new("ERR-TASK-001"));
    }
    Ok(Json(json!({"deleted": id})))
}
