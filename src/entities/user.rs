//! User resource: model, inputs, output shape and store extension
//!
//! The password digest is write-only: it never appears in any output
//! shape and is skipped even when the entity itself is serialized.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

use crate::core::entity::{field_contains, patch, StoredEntity};
use crate::core::error::DomainResult;
use crate::core::store::EntityStore;

/// Backend account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Fields consumed by create; `password_hash` is the already-hashed digest
/// produced by the identity collaborator, never a plaintext password.
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub name: Option<String>,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<Option<String>>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

impl StoredEntity for User {
    type Draft = UserDraft;
    type Patch = UserPatch;

    fn resource_name() -> &'static str {
        "user"
    }

    fn resource_name_plural() -> &'static str {
        "users"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn build(id: Uuid, created_at: DateTime<Utc>, draft: UserDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            password_hash: draft.password_hash,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(password_hash) = patch.password_hash {
            self.password_hash = password_hash;
        }
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.email.clone())
    }

    fn matches_filter(&self, filter: &str) -> bool {
        field_contains(&self.email, filter)
            || self
                .name
                .as_deref()
                .is_some_and(|n| field_contains(n, filter))
    }

    fn compare_by(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "email" => self.email.cmp(&other.email),
            "name" => self.name.cmp(&other.name),
            _ => self.natural_order(other),
        }
    }
}

/// Store extension for email lookups (authentication, conflict messages)
#[async_trait]
pub trait UserStore: EntityStore<User> {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;
}

/// Wire shape for a user; carries no password material
#[derive(Debug, Clone, Serialize)]
pub struct UserOutput {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserOutput {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            created_at: u.created_at,
        }
    }
}

/// Raw inputs accepted by the user service, carrying plaintext passwords
/// that are hashed before any store call.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserInput {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserInput {
    #[serde(default, deserialize_with = "patch::double_option")]
    pub name: Option<Option<String>>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_never_serializes() {
        let user = User::build(
            Uuid::new_v4(),
            Utc::now(),
            UserDraft {
                name: None,
                email: "ana@example.com".to_string(),
                password_hash: "$argon2id$v=19$secret".to_string(),
            },
        );

        let entity_json = serde_json::to_value(&user).unwrap();
        assert!(entity_json.get("password_hash").is_none());

        let output_json = serde_json::to_value(UserOutput::from(user)).unwrap();
        assert!(output_json.get("password_hash").is_none());
        assert!(output_json.get("password").is_none());
        assert!(output_json.get("name").unwrap().is_null());
    }
}
