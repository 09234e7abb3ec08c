//! # Gridworks
//!
//! Backend core for managing transmission-line construction resources:
//! employees, equipment, teams, towers, foundations, tasks, productions,
//! works and users.
//!
//! ## Architecture
//!
//! - **`core`**: the framework layer — the [`core::StoredEntity`] trait,
//!   the [`core::EntityStore`] contract, list-parameter normalization and
//!   the [`core::DomainError`] taxonomy.
//! - **`entities`**: one module per resource with its stored model,
//!   create draft, partial patch and wire-facing output shape.
//! - **`relations`**: reference validation on writes, summary expansion
//!   on reads.
//! - **`services`**: one service per resource orchestrating stores,
//!   relation composition and output mapping.
//! - **`storage`**: the in-memory store implementation.
//! - **`auth`**: password hashing seam (argon2).
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use gridworks::prelude::*;
//! use std::sync::Arc;
//!
//! let works = Arc::new(InMemoryStore::<Work>::new());
//! let service = WorkService::new(works);
//!
//! let work = service
//!     .create(WorkDraft {
//!         name: "LT 500kV Norte".to_string(),
//!         tension: Some("500kV".to_string()),
//!         extension: None,
//!         start_date: None,
//!         end_date: None,
//!     })
//!     .await?;
//!
//! let page = service.list(ListParams::default()).await?;
//! assert_eq!(page.pagination.total, 1);
//! ```

pub mod auth;
pub mod config;
pub mod core;
pub mod entities;
pub mod relations;
pub mod services;
pub mod storage;

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber from `RUST_LOG`, defaulting to `info`.
///
/// Call once at process start; calling twice panics, so binaries own this,
/// never library code.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        DomainError, DomainResult, EntityStore, ListParams, Page, PageInput, PaginatedResponse,
        PaginationMeta, SortDir, StoredEntity,
    };

    // === Config ===
    pub use crate::config::{AppConfig, PaginationConfig};

    // === Entities ===
    pub use crate::entities::employee::{
        Employee, EmployeeDraft, EmployeeOutput, EmployeePatch, EmployeeStatus, SimpleEmployee,
    };
    pub use crate::entities::equipment::{
        Equipment, EquipmentDraft, EquipmentOutput, EquipmentPatch, EquipmentStatus,
        SimpleEquipment,
    };
    pub use crate::entities::foundation::{
        Foundation, FoundationDraft, FoundationOutput, FoundationPatch, FoundationStore,
    };
    pub use crate::entities::production::{
        Production, ProductionDraft, ProductionOutput, ProductionPatch, ProductionStatus,
    };
    pub use crate::entities::task::{Task, TaskDraft, TaskOutput, TaskPatch};
    pub use crate::entities::team::{Team, TeamDraft, TeamOutput, TeamPatch};
    pub use crate::entities::tower::{Coordinates, Tower, TowerDraft, TowerOutput, TowerPatch};
    pub use crate::entities::user::{
        CreateUserInput, UpdateUserInput, User, UserDraft, UserOutput, UserPatch, UserStore,
    };
    pub use crate::entities::work::{Work, WorkDraft, WorkOutput, WorkPatch};

    // === Services ===
    pub use crate::services::{
        EmployeeService, EquipmentService, FoundationService, ProductionService, TaskService,
        TeamService, TowerService, UserService, WorkService,
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;

    // === Auth ===
    pub use crate::auth::{Argon2Hasher, PasswordHasher};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
