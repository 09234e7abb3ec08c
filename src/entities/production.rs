//! Production resource: model, inputs and output shape
//!
//! A production records the execution of a task on a set of towers by a
//! set of teams. Its relations stay shallow on the wire: `teams` and
//! `towers` are plain id strings, validated as references on write but
//! never expanded on read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

use crate::core::entity::{field_contains, patch, StoredEntity};

/// Daily production record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Production {
    pub id: Uuid,
    pub status: ProductionStatus,
    pub comments: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub final_time: Option<DateTime<Utc>>,
    pub task_id: Uuid,
    pub work_id: Uuid,
    pub teams: Vec<Uuid>,
    pub towers: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductionStatus {
    #[default]
    Programmed,
    Executed,
    Suspended,
}

impl ProductionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductionStatus::Programmed => "PROGRAMMED",
            ProductionStatus::Executed => "EXECUTED",
            ProductionStatus::Suspended => "SUSPENDED",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductionDraft {
    #[serde(default)]
    pub status: ProductionStatus,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub final_time: Option<DateTime<Utc>>,
    pub task_id: Uuid,
    pub work_id: Uuid,
    #[serde(default)]
    pub teams: Vec<Uuid>,
    #[serde(default)]
    pub towers: Vec<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductionPatch {
    pub status: Option<ProductionStatus>,
    #[serde(default, deserialize_with = "patch::double_option")]
    pub comments: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    pub start_time: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    pub final_time: Option<Option<DateTime<Utc>>>,
    pub task_id: Option<Uuid>,
    pub work_id: Option<Uuid>,
    pub teams: Option<Vec<Uuid>>,
    pub towers: Option<Vec<Uuid>>,
}

impl StoredEntity for Production {
    type Draft = ProductionDraft;
    type Patch = ProductionPatch;

    fn resource_name() -> &'static str {
        "production"
    }

    fn resource_name_plural() -> &'static str {
        "productions"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn build(id: Uuid, created_at: DateTime<Utc>, draft: ProductionDraft) -> Self {
        Self {
            id,
            status: draft.status,
            comments: draft.comments,
            start_time: draft.start_time,
            final_time: draft.final_time,
            task_id: draft.task_id,
            work_id: draft.work_id,
            teams: draft.teams,
            towers: draft.towers,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: ProductionPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(comments) = patch.comments {
            self.comments = comments;
        }
        if let Some(start_time) = patch.start_time {
            self.start_time = start_time;
        }
        if let Some(final_time) = patch.final_time {
            self.final_time = final_time;
        }
        if let Some(task_id) = patch.task_id {
            self.task_id = task_id;
        }
        if let Some(work_id) = patch.work_id {
            self.work_id = work_id;
        }
        if let Some(teams) = patch.teams {
            self.teams = teams;
        }
        if let Some(towers) = patch.towers {
            self.towers = towers;
        }
    }

    fn matches_filter(&self, filter: &str) -> bool {
        field_contains(self.status.as_str(), filter)
            || self
                .comments
                .as_deref()
                .is_some_and(|c| field_contains(c, filter))
    }

    fn compare_by(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "status" => self.status.as_str().cmp(other.status.as_str()),
            "start_time" => self.start_time.cmp(&other.start_time),
            "final_time" => self.final_time.cmp(&other.final_time),
            _ => self.natural_order(other),
        }
    }
}

/// Wire shape for a production; relation ids rendered as plain strings
#[derive(Debug, Clone, Serialize)]
pub struct ProductionOutput {
    pub id: Uuid,
    pub status: ProductionStatus,
    pub comments: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub final_time: Option<DateTime<Utc>>,
    pub task_id: Uuid,
    pub work_id: Uuid,
    pub teams: Vec<String>,
    pub towers: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Production> for ProductionOutput {
    fn from(p: Production) -> Self {
        Self {
            id: p.id,
            status: p.status,
            comments: p.comments,
            start_time: p.start_time,
            final_time: p.final_time,
            task_id: p.task_id,
            work_id: p.work_id,
            teams: p.teams.iter().map(Uuid::to_string).collect(),
            towers: p.towers.iter().map(Uuid::to_string).collect(),
            created_at: p.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_ids_become_plain_strings_on_output() {
        let team_id = Uuid::new_v4();
        let production = Production::build(
            Uuid::new_v4(),
            Utc::now(),
            ProductionDraft {
                status: ProductionStatus::default(),
                comments: None,
                start_time: None,
                final_time: None,
                task_id: Uuid::new_v4(),
                work_id: Uuid::new_v4(),
                teams: vec![team_id],
                towers: vec![],
            },
        );

        let json = serde_json::to_value(ProductionOutput::from(production)).unwrap();
        assert_eq!(json["status"], "PROGRAMMED");
        assert_eq!(json["teams"], serde_json::json!([team_id.to_string()]));
        assert!(json.get("comments").unwrap().is_null());
        assert!(json.get("start_time").unwrap().is_null());
    }
}
