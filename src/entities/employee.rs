//! Employee resource: model, inputs and output shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

use crate::core::entity::{field_contains, patch, StoredEntity};

/// Field-crew member assigned to construction works
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub registration: String,
    pub full_name: String,
    pub occupation: String,
    pub leadership: bool,
    pub status: EmployeeStatus,
    pub team_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Employment status, closed set with an explicit default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
    Vacation,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "ACTIVE",
            EmployeeStatus::Inactive => "INACTIVE",
            EmployeeStatus::Vacation => "VACATION",
        }
    }
}

/// Caller-owned fields consumed by create
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeDraft {
    pub registration: String,
    pub full_name: String,
    pub occupation: String,
    pub leadership: bool,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default)]
    pub team_id: Option<Uuid>,
}

/// Partial update; unset fields are retained
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeePatch {
    pub registration: Option<String>,
    pub full_name: Option<String>,
    pub occupation: Option<String>,
    pub leadership: Option<bool>,
    pub status: Option<EmployeeStatus>,
    #[serde(default, deserialize_with = "patch::double_option")]
    pub team_id: Option<Option<Uuid>>,
}

impl StoredEntity for Employee {
    type Draft = EmployeeDraft;
    type Patch = EmployeePatch;

    fn resource_name() -> &'static str {
        "employee"
    }

    fn resource_name_plural() -> &'static str {
        "employees"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn build(id: Uuid, created_at: DateTime<Utc>, draft: EmployeeDraft) -> Self {
        Self {
            id,
            registration: draft.registration,
            full_name: draft.full_name,
            occupation: draft.occupation,
            leadership: draft.leadership,
            status: draft.status,
            team_id: draft.team_id,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: EmployeePatch) {
        if let Some(registration) = patch.registration {
            self.registration = registration;
        }
        if let Some(full_name) = patch.full_name {
            self.full_name = full_name;
        }
        if let Some(occupation) = patch.occupation {
            self.occupation = occupation;
        }
        if let Some(leadership) = patch.leadership {
            self.leadership = leadership;
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
            || field_contains(&self.full_name, filter)
            || field_contains(&self.occupation, filter)
    }

    fn compare_by(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "registration" => self.registration.cmp(&other.registration),
            "full_name" => self.full_name.cmp(&other.full_name),
            "occupation" => self.occupation.cmp(&other.occupation),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => self.natural_order(other),
        }
    }
}

/// Wire shape for a single employee
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeOutput {
    pub id: Uuid,
    pub registration: String,
    pub full_name: String,
    pub occupation: String,
    pub leadership: bool,
    pub status: EmployeeStatus,
    pub team_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeOutput {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            registration: e.registration,
            full_name: e.full_name,
            occupation: e.occupation,
            leadership: e.leadership,
            status: e.status,
            team_id: e.team_id,
            created_at: e.created_at,
        }
    }
}

/// Read-only projection embedded in team output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleEmployee {
    pub id: Uuid,
    pub registration: String,
    pub full_name: String,
    pub occupation: String,
}

impl From<&Employee> for SimpleEmployee {
    fn from(e: &Employee) -> Self {
        Self {
            id: e.id,
            registration: e.registration.clone(),
            full_name: e.full_name.clone(),
            occupation: e.occupation.clone(),
        }
    }
}
