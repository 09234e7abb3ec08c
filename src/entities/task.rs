//! Task resource: model, inputs and output shape

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

use crate::core::entity::{field_contains, StoredEntity};

/// Unit of measurable construction activity within a work
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub code: i32,
    pub stage: String,
    pub group: String,
    pub name: String,
    pub unit: String,
    pub work_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskDraft {
    pub code: i32,
    pub stage: String,
    pub group: String,
    pub name: String,
    pub unit: String,
    pub work_id: Uuid,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    pub code: Option<i32>,
    pub stage: Option<String>,
    pub group: Option<String>,
    pub name: Option<String>,
    pub unit: Option<String>,
    pub work_id: Option<Uuid>,
}

impl StoredEntity for Task {
    type Draft = TaskDraft;
    type Patch = TaskPatch;

    fn resource_name() -> &'static str {
        "task"
    }

    fn resource_name_plural() -> &'static str {
        "tasks"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn build(id: Uuid, created_at: DateTime<Utc>, draft: TaskDraft) -> Self {
        Self {
            id,
            code: draft.code,
            stage: draft.stage,
            group: draft.group,
            name: draft.name,
            unit: draft.unit,
            work_id: draft.work_id,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: TaskPatch) {
        if let Some(code) = patch.code {
            self.code = code;
        }
        if let Some(stage) = patch.stage {
            self.stage = stage;
        }
        if let Some(group) = patch.group {
            self.group = group;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(unit) = patch.unit {
            self.unit = unit;
        }
        if let Some(work_id) = patch.work_id {
            self.work_id = work_id;
        }
    }

    fn matches_filter(&self, filter: &str) -> bool {
        field_contains(&self.name, filter)
            || field_contains(&self.stage, filter)
            || field_contains(&self.group, filter)
    }

    fn compare_by(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.cmp(&other.code),
            "stage" => self.stage.cmp(&other.stage),
            "group" => self.group.cmp(&other.group),
            "name" => self.name.cmp(&other.name),
            _ => self.natural_order(other),
        }
    }
}

/// Wire shape for a task
#[derive(Debug, Clone, Serialize)]
pub struct TaskOutput {
    pub id: Uuid,
    pub code: i32,
    pub stage: String,
    pub group: String,
    pub name: String,
    pub unit: String,
    pub work_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Task> for TaskOutput {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            code: t.code,
            stage: t.stage,
            group: t.group,
            name: t.name,
            unit: t.unit,
            work_id: t.work_id,
            created_at: t.created_at,
        }
    }
}
