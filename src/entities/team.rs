//! Team resource: model, inputs and composed output shape
//!
//! A team stores bare employee/equipment ids; the read path expands them
//! into summary projections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

use crate::core::entity::{field_contains, StoredEntity};
use crate::entities::employee::SimpleEmployee;
use crate::entities::equipment::SimpleEquipment;

/// Field crew grouping employees and equipment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub employees: Vec<Uuid>,
    pub equipments: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamDraft {
    pub name: String,
    #[serde(default)]
    pub employees: Vec<Uuid>,
    #[serde(default)]
    pub equipments: Vec<Uuid>,
}

/// Partial update; a supplied array replaces the stored one wholesale
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamPatch {
    pub name: Option<String>,
    pub employees: Option<Vec<Uuid>>,
    pub equipments: Option<Vec<Uuid>>,
}

impl StoredEntity for Team {
    type Draft = TeamDraft;
    type Patch = TeamPatch;

    fn resource_name() -> &'static str {
        "team"
    }

    fn resource_name_plural() -> &'static str {
        "teams"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn build(id: Uuid, created_at: DateTime<Utc>, draft: TeamDraft) -> Self {
        Self {
            id,
            name: draft.name,
            employees: draft.employees,
            equipments: draft.equipments,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: TeamPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(employees) = patch.employees {
            self.employees = employees;
        }
        if let Some(equipments) = patch.equipments {
            self.equipments = equipments;
        }
    }

    fn matches_filter(&self, filter: &str) -> bool {
        field_contains(&self.name, filter)
    }

    fn compare_by(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.cmp(&other.name),
            _ => self.natural_order(other),
        }
    }
}

/// Wire shape for a team with its members expanded into summaries
#[derive(Debug, Clone, Serialize)]
pub struct TeamOutput {
    pub id: Uuid,
    pub name: String,
    pub employees: Vec<SimpleEmployee>,
    pub equipments: Vec<SimpleEquipment>,
    pub created_at: DateTime<Utc>,
}

impl TeamOutput {
    /// Assemble the output shape from the stored team plus its resolved
    /// member summaries.
    pub fn compose(
        team: Team,
        employees: Vec<SimpleEmployee>,
        equipments: Vec<SimpleEquipment>,
    ) -> Self {
        Self {
            id: team.id,
            name: team.name,
            employees,
            equipments,
            created_at: team.created_at,
        }
    }
}
