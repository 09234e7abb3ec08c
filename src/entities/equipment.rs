//! Equipment resource: model, inputs and output shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

use crate::core::entity::{field_contains, patch, StoredEntity};

/// Machine or vehicle allocated to field teams
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    pub id: Uuid,
    pub registration: String,
    pub model: String,
    pub manufacturer: String,
    pub license_plate: String,
    pub provider: String,
    pub status: EquipmentStatus,
    pub team_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EquipmentStatus {
    #[default]
    Active,
    Maintenance,
    Inactive,
}

impl EquipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Active => "ACTIVE",
            EquipmentStatus::Maintenance => "MAINTENANCE",
            EquipmentStatus::Inactive => "INACTIVE",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EquipmentDraft {
    pub registration: String,
    pub model: String,
    pub manufacturer: String,
    pub license_plate: String,
    pub provider: String,
    #[serde(default)]
    pub status: EquipmentStatus,
    #[serde(default)]
    pub team_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EquipmentPatch {
    pub registration: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub license_plate: Option<String>,
    pub provider: Option<String>,
    pub status: Option<EquipmentStatus>,
    #[serde(default, deserialize_with = "patch::double_option")]
    pub team_id: Option<Option<Uuid>>,
}

impl StoredEntity for Equipment {
    type Draft = EquipmentDraft;
    type Patch = EquipmentPatch;

    fn resource_name() -> &'static str {
        "equipment"
    }

    fn resource_name_plural() -> &'static str {
        "equipments"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn build(id: Uuid, created_at: DateTime<Utc>, draft: EquipmentDraft) -> Self {
        Self {
            id,
            registration: draft.registration,
            model: draft.model,
            manufacturer: draft.manufacturer,
            license_plate: draft.license_plate,
            provider: draft.provider,
            status: draft.status,
            team_id: draft.team_id,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: EquipmentPatch) {
        if let Some(registration) = patch.registration {
            self.registration = registration;
        }
        if let Some(model) = patch.model {
            self.model = model;
        }
        if let Some(manufacturer) = patch.manufacturer {
            self.manufacturer = manufacturer;
        }
        if let Some(license_plate) = patch.license_plate {
            self.license_plate = license_plate;
        }
        if let Some(provider) = patch.provider {
            self.provider = provider;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(team_id) = patch.team_id {
            self.team_id = team_id;
        }
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.registration.clone())
    }

    fn matches_filter(&self, filter: &str) -> bool {
        field_contains(&self.registration, filter)
            || field_contains(&self.model, filter)
            || field_contains(&self.manufacturer, filter)
            || field_contains(&self.license_plate, filter)
    }

    fn compare_by(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "registration" => self.registration.cmp(&other.registration),
            "model" => self.model.cmp(&other.model),
            "manufacturer" => self.manufacturer.cmp(&other.manufacturer),
            "license_plate" => self.license_plate.cmp(&other.license_plate),
            "provider" => self.provider.cmp(&other.provider),
            _ => self.natural_order(other),
        }
    }
}

/// Wire shape for a single equipment
#[derive(Debug, Clone, Serialize)]
pub struct EquipmentOutput {
    pub id: Uuid,
    pub registration: String,
    pub model: String,
    pub manufacturer: String,
    pub license_plate: String,
    pub provider: String,
    pub status: EquipmentStatus,
    pub team_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<Equipment> for EquipmentOutput {
    fn from(e: Equipment) -> Self {
        Self {
            id: e.id,
            registration: e.registration,
            model: e.model,
            manufacturer: e.manufacturer,
            license_plate: e.license_plate,
            provider: e.provider,
            status: e.status,
            team_id: e.team_id,
            created_at: e.created_at,
        }
    }
}

/// Read-only projection embedded in team output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleEquipment {
    pub id: Uuid,
    pub model: String,
    pub manufacturer: String,
    pub license_plate: String,
}

impl From<&Equipment> for SimpleEquipment {
    fn from(e: &Equipment) -> Self {
        Self {
            id: e.id,
            model: e.model.clone(),
            manufacturer: e.manufacturer.clone(),
            license_plate: e.license_plate.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_projects_display_fields_only() {
        let equipment = Equipment::build(
            Uuid::new_v4(),
            Utc::now(),
            EquipmentDraft {
                registration: "EQ-7".to_string(),
                model: "336DL".to_string(),
                manufacturer: "Caterpillar".to_string(),
                license_plate: "ABC1D23".to_string(),
                provider: "own fleet".to_string(),
                status: EquipmentStatus::default(),
                team_id: None,
            },
        );

        let json = serde_json::to_value(SimpleEquipment::from(&equipment)).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["id", "model", "manufacturer", "license_plate"]);
    }

    #[test]
    fn status_round_trips_screaming_case() {
        let status: EquipmentStatus = serde_json::from_str(r#""MAINTENANCE""#).unwrap();
        assert_eq!(status, EquipmentStatus::Maintenance);
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""MAINTENANCE""#);
    }
}
