//! Work resource: model, inputs and output shape

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

use crate::core::entity::{field_contains, patch, StoredEntity};

/// Transmission-line construction contract
///
/// Owns tasks, towers and productions through their `work_id` back
/// references; none of them are embedded in work reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Work {
    pub id: Uuid,
    pub name: String,
    pub tension: Option<String>,
    pub extension: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkDraft {
    pub name: String,
    #[serde(default)]
    pub tension: Option<String>,
    #[serde(default)]
    pub extension: Option<f64>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkPatch {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "patch::double_option")]
    pub tension: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    pub extension: Option<Option<f64>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    pub end_date: Option<Option<NaiveDate>>,
}

impl StoredEntity for Work {
    type Draft = WorkDraft;
    type Patch = WorkPatch;

    fn resource_name() -> &'static str {
        "work"
    }

    fn resource_name_plural() -> &'static str {
        "works"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn build(id: Uuid, created_at: DateTime<Utc>, draft: WorkDraft) -> Self {
        Self {
            id,
            name: draft.name,
            tension: draft.tension,
            extension: draft.extension,
            start_date: draft.start_date,
            end_date: draft.end_date,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: WorkPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(tension) = patch.tension {
            self.tension = tension;
        }
        if let Some(extension) = patch.extension {
            self.extension = extension;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = end_date;
        }
    }

    fn matches_filter(&self, filter: &str) -> bool {
        field_contains(&self.name, filter)
    }

    fn compare_by(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.cmp(&other.name),
            "start_date" => self.start_date.cmp(&other.start_date),
            _ => self.natural_order(other),
        }
    }
}

/// Wire shape for a work
#[derive(Debug, Clone, Serialize)]
pub struct WorkOutput {
    pub id: Uuid,
    pub name: String,
    pub tension: Option<String>,
    pub extension: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl From<Work> for WorkOutput {
    fn from(w: Work) -> Self {
        Self {
            id: w.id,
            name: w.name,
            tension: w.tension,
            extension: w.extension,
            start_date: w.start_date,
            end_date: w.end_date,
            created_at: w.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optionals_coalesce_to_null_on_output() {
        let work = Work::build(
            Uuid::new_v4(),
            Utc::now(),
            WorkDraft {
                name: "LT 500kV Norte".to_string(),
                tension: Some("500kV".to_string()),
                extension: None,
                start_date: None,
                end_date: None,
            },
        );

        let json = serde_json::to_value(WorkOutput::from(work)).unwrap();
        assert_eq!(json["tension"], "500kV");
        assert!(json.get("extension").unwrap().is_null());
        assert!(json.get("start_date").unwrap().is_null());
        assert!(json.get("end_date").unwrap().is_null());
    }
}
