//! Foundation resource: model, inputs, output shape and store extension
//!
//! Foundations are only meaningful inside their tower: tower reads embed
//! them as full objects, so no summary projection exists for them.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

use crate::core::entity::{field_contains, patch, StoredEntity};
use crate::core::error::DomainResult;
use crate::core::store::EntityStore;

/// Tower foundation with its executed volumes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Foundation {
    pub id: Uuid,
    pub project: String,
    pub revision: String,
    pub description: String,
    pub excavation_volume: Option<f64>,
    pub concrete_volume: Option<f64>,
    pub backfill_volume: Option<f64>,
    pub steel_weight: Option<f64>,
    pub tower_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FoundationDraft {
    pub project: String,
    pub revision: String,
    pub description: String,
    #[serde(default)]
    pub excavation_volume: Option<f64>,
    #[serde(default)]
    pub concrete_volume: Option<f64>,
    #[serde(default)]
    pub backfill_volume: Option<f64>,
    #[serde(default)]
    pub steel_weight: Option<f64>,
    pub tower_id: Uuid,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoundationPatch {
    pub project: Option<String>,
    pub revision: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "patch::double_option")]
    pub excavation_volume: Option<Option<f64>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    pub concrete_volume: Option<Option<f64>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    pub backfill_volume: Option<Option<f64>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    pub steel_weight: Option<Option<f64>>,
    pub tower_id: Option<Uuid>,
}

impl StoredEntity for Foundation {
    type Draft = FoundationDraft;
    type Patch = FoundationPatch;

    fn resource_name() -> &'static str {
        "foundation"
    }

    fn resource_name_plural() -> &'static str {
        "foundations"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn build(id: Uuid, created_at: DateTime<Utc>, draft: FoundationDraft) -> Self {
        Self {
            id,
            project: draft.project,
            revision: draft.revision,
            description: draft.description,
            excavation_volume: draft.excavation_volume,
            concrete_volume: draft.concrete_volume,
            backfill_volume: draft.backfill_volume,
            steel_weight: draft.steel_weight,
            tower_id: draft.tower_id,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: FoundationPatch) {
        if let Some(project) = patch.project {
            self.project = project;
        }
        if let Some(revision) = patch.revision {
            self.revision = revision;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(excavation_volume) = patch.excavation_volume {
            self.excavation_volume = excavation_volume;
        }
        if let Some(concrete_volume) = patch.concrete_volume {
            self.concrete_volume = concrete_volume;
        }
        if let Some(backfill_volume) = patch.backfill_volume {
            self.backfill_volume = backfill_volume;
        }
        if let Some(steel_weight) = patch.steel_weight {
            self.steel_weight = steel_weight;
        }
        if let Some(tower_id) = patch.tower_id {
            self.tower_id = tower_id;
        }
    }

    fn matches_filter(&self, filter: &str) -> bool {
        field_contains(&self.project, filter)
            || field_contains(&self.revision, filter)
            || field_contains(&self.description, filter)
    }

    fn compare_by(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "project" => self.project.cmp(&other.project),
            "revision" => self.revision.cmp(&other.revision),
            _ => self.natural_order(other),
        }
    }
}

/// Store extension for tower-scoped foundation reads
#[async_trait]
pub trait FoundationStore: EntityStore<Foundation> {
    /// Foundations belonging to a tower, in natural order
    async fn find_by_tower(&self, tower_id: &Uuid) -> DomainResult<Vec<Foundation>>;
}

/// Wire shape for a foundation, embedded whole inside tower output
#[derive(Debug, Clone, Serialize)]
pub struct FoundationOutput {
    pub id: Uuid,
    pub project: String,
    pub revision: String,
    pub description: String,
    pub excavation_volume: Option<f64>,
    pub concrete_volume: Option<f64>,
    pub backfill_volume: Option<f64>,
    pub steel_weight: Option<f64>,
    pub tower_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Foundation> for FoundationOutput {
    fn from(f: Foundation) -> Self {
        Self {
            id: f.id,
            project: f.project,
            revision: f.revision,
            description: f.description,
            excavation_volume: f.excavation_volume,
            concrete_volume: f.concrete_volume,
            backfill_volume: f.backfill_volume,
            steel_weight: f.steel_weight,
            tower_id: f.tower_id,
            created_at: f.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_volumes_serialize_as_explicit_nulls() {
        let foundation = Foundation::build(
            Uuid::new_v4(),
            Utc::now(),
            FoundationDraft {
                project: "FUND-21".to_string(),
                revision: "0A".to_string(),
                description: "tubulao".to_string(),
                excavation_volume: Some(12.5),
                concrete_volume: None,
                backfill_volume: None,
                steel_weight: None,
                tower_id: Uuid::new_v4(),
            },
        );

        let json = serde_json::to_value(FoundationOutput::from(foundation)).unwrap();
        assert_eq!(json["excavation_volume"], 12.5);
        assert!(json.get("concrete_volume").unwrap().is_null());
        assert!(json.get("backfill_volume").unwrap().is_null());
        assert!(json.get("steel_weight").unwrap().is_null());
    }

    #[test]
    fn patch_can_clear_a_volume() {
        let mut foundation = Foundation::build(
            Uuid::new_v4(),
            Utc::now(),
            FoundationDraft {
                project: "FUND-21".to_string(),
                revision: "0A".to_string(),
                description: "tubulao".to_string(),
                excavation_volume: Some(12.5),
                concrete_volume: None,
                backfill_volume: None,
                steel_weight: None,
                tower_id: Uuid::new_v4(),
            },
        );

        foundation.apply_patch(FoundationPatch {
            excavation_volume: Some(None),
            ..Default::default()
        });
        assert_eq!(foundation.excavation_volume, None);
        assert_eq!(foundation.revision, "0A");
    }
}
