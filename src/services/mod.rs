//! One service per resource
//!
//! Each service is a stateless single-pass orchestration over its stores:
//! normalize list parameters, call the store, translate absence into
//! `NotFound`, compose relations, map to the output shape. Services never
//! return raw entities.

pub mod employees;
pub mod equipments;
pub mod foundations;
pub mod productions;
pub mod tasks;
pub mod teams;
pub mod towers;
pub mod users;
pub mod works;

pub use employees::EmployeeService;
pub use equipments::EquipmentService;
pub use foundations::FoundationService;
pub use productions::ProductionService;
pub use tasks::TaskService;
pub use teams::TeamService;
pub use towers::TowerService;
pub use users::UserService;
pub use works::WorkService;
