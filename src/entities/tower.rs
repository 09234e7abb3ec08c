//! Tower resource: model, inputs and composed output shape
//!
//! Tower reads embed their foundations as full objects. Foundations carry
//! no id-level indirection on the wire because nothing references them
//! outside their tower.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

use crate::core::entity::{field_contains, patch, StoredEntity};
use crate::entities::foundation::FoundationOutput;

/// Geographic position of a tower
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Transmission-line tower
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    pub id: Uuid,
    pub code: i32,
    pub tower_number: String,
    pub tower_type: String,
    pub coordinates: Coordinates,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub span: Option<f64>,
    pub embargo: Option<String>,
    pub access: Option<String>,
    pub obs: Option<String>,
    pub is_hidden: bool,
    pub work_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TowerDraft {
    pub code: i32,
    pub tower_number: String,
    #[serde(rename = "type")]
    pub tower_type: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub span: Option<f64>,
    #[serde(default)]
    pub embargo: Option<String>,
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub obs: Option<String>,
    #[serde(default)]
    pub is_hidden: bool,
    pub work_id: Uuid,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TowerPatch {
    pub code: Option<i32>,
    pub tower_number: Option<String>,
    #[serde(rename = "type")]
    pub tower_type: Option<String>,
    pub coordinates: Option<Coordinates>,
    #[serde(default, deserialize_with = "patch::double_option")]
    pub height: Option<Option<f64>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    pub weight: Option<Option<f64>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    pub span: Option<Option<f64>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    pub embargo: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    pub access: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    pub obs: Option<Option<String>>,
    pub is_hidden: Option<bool>,
    pub work_id: Option<Uuid>,
}

impl StoredEntity for Tower {
    type Draft = TowerDraft;
    type Patch = TowerPatch;

    fn resource_name() -> &'static str {
        "tower"
    }

    fn resource_name_plural() -> &'static str {
        "towers"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn build(id: Uuid, created_at: DateTime<Utc>, draft: TowerDraft) -> Self {
        Self {
            id,
            code: draft.code,
            tower_number: draft.tower_number,
            tower_type: draft.tower_type,
            coordinates: draft.coordinates,
            height: draft.height,
            weight: draft.weight,
            span: draft.span,
            embargo: draft.embargo,
            access: draft.access,
            obs: draft.obs,
            is_hidden: draft.is_hidden,
            work_id: draft.work_id,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: TowerPatch) {
        if let Some(code) = patch.code {
            self.code = code;
        }
        if let Some(tower_number) = patch.tower_number {
            self.tower_number = tower_number;
        }
        if let Some(tower_type) = patch.tower_type {
            self.tower_type = tower_type;
        }
        if let Some(coordinates) = patch.coordinates {
            self.coordinates = coordinates;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
        if let Some(weight) = patch.weight {
            self.weight = weight;
        }
        if let Some(span) = patch.span {
            self.span = span;
        }
        if let Some(embargo) = patch.embargo {
            self.embargo = embargo;
        }
        if let Some(access) = patch.access {
            self.access = access;
        }
        if let Some(obs) = patch.obs {
            self.obs = obs;
        }
        if let Some(is_hidden) = patch.is_hidden {
            self.is_hidden = is_hidden;
        }
        if let Some(work_id) = patch.work_id {
            self.work_id = work_id;
        }
    }

    fn matches_filter(&self, filter: &str) -> bool {
        field_contains(&self.tower_number, filter) || field_contains(&self.tower_type, filter)
    }

    fn compare_by(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.cmp(&other.code),
            "tower_number" => self.tower_number.cmp(&other.tower_number),
            _ => self.natural_order(other),
        }
    }
}

/// Wire shape for a tower with its foundations embedded whole
#[derive(Debug, Clone, Serialize)]
pub struct TowerOutput {
    pub id: Uuid,
    pub code: i32,
    pub tower_number: String,
    #[serde(rename = "type")]
    pub tower_type: String,
    pub coordinates: Coordinates,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub span: Option<f64>,
    pub embargo: Option<String>,
    pub access: Option<String>,
    pub obs: Option<String>,
    pub is_hidden: bool,
    pub work_id: Uuid,
    pub foundations: Vec<FoundationOutput>,
    pub created_at: DateTime<Utc>,
}

impl TowerOutput {
    /// Assemble the output shape from the stored tower plus its foundations.
    pub fn compose(tower: Tower, foundations: Vec<FoundationOutput>) -> Self {
        Self {
            id: tower.id,
            code: tower.code,
            tower_number: tower.tower_number,
            tower_type: tower.tower_type,
            coordinates: tower.coordinates,
            height: tower.height,
            weight: tower.weight,
            span: tower.span,
            embargo: tower.embargo,
            access: tower.access,
            obs: tower.obs,
            is_hidden: tower.is_hidden,
            work_id: tower.work_id,
            foundations,
            created_at: tower.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_renames_tower_type_and_coalesces_optionals() {
        let tower = Tower::build(
            Uuid::new_v4(),
            Utc::now(),
            TowerDraft {
                code: 42,
                tower_number: "42/1".to_string(),
                tower_type: "suspension".to_string(),
                coordinates: Coordinates {
                    lat: -23.55,
                    lng: -46.63,
                },
                height: None,
                weight: None,
                span: None,
                embargo: None,
                access: None,
                obs: None,
                is_hidden: false,
                work_id: Uuid::new_v4(),
            },
        );

        let json = serde_json::to_value(TowerOutput::compose(tower, vec![])).unwrap();
        assert_eq!(json["type"], "suspension");
        assert!(json.get("tower_type").is_none());
        assert!(json.get("height").unwrap().is_null());
        assert!(json.get("embargo").unwrap().is_null());
        assert_eq!(json["foundations"], serde_json::json!([]));
    }
}
