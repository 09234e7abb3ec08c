//! Employee service

use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{DomainError, DomainResult};
use crate::core::page::{ListParams, PageInput, PaginatedResponse};
use crate::core::store::EntityStore;
use crate::entities::employee::{Employee, EmployeeDraft, EmployeeOutput, EmployeePatch};
use crate::entities::team::Team;
use crate::relations;

pub struct EmployeeService {
    employees: Arc<dyn EntityStore<Employee>>,
    teams: Arc<dyn EntityStore<Team>>,
}

impl EmployeeService {
    pub fn new(employees: Arc<dyn EntityStore<Employee>>, teams: Arc<dyn EntityStore<Team>>) -> Self {
        Self { employees, teams }
    }

    pub async fn create(&self, draft: EmployeeDraft) -> DomainResult<EmployeeOutput> {
        if let Some(team_id) = draft.team_id {
            relations::ensure_exists(self.teams.as_ref(), &team_id).await?;
        }
        let employee = self.employees.create(draft).await?;
        Ok(EmployeeOutput::from(employee))
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<EmployeeOutput> {
        let employee = self
            .employees
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found::<Employee>(id))?;
        Ok(EmployeeOutput::from(employee))
    }

    pub async fn list(&self, params: ListParams) -> DomainResult<PaginatedResponse<EmployeeOutput>> {
        let input = PageInput::normalize(params);
        let page = self.employees.list(&input).await?;
        Ok(PaginatedResponse::from_page(page, &input, EmployeeOutput::from))
    }

    pub async fn update(&self, id: Uuid, patch: EmployeePatch) -> DomainResult<EmployeeOutput> {
        if let Some(Some(team_id)) = patch.team_id {
            relations::ensure_exists(self.teams.as_ref(), &team_id).await?;
        }
        let employee = self.employees.update(&id, patch).await?;
        Ok(EmployeeOutput::from(employee))
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.employees.delete(&id).await
    }
}
