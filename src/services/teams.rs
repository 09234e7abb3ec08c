//! Team service
//!
//! Writes validate the member id arrays before the store call; reads
//! expand the stored ids into summary projections.

use futures::future;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{DomainError, DomainResult};
use crate::core::page::{ListParams, PageInput, PaginatedResponse, PaginationMeta};
use crate::core::store::EntityStore;
use crate::entities::employee::{Employee, SimpleEmployee};
use crate::entities::equipment::{Equipment, SimpleEquipment};
use crate::entities::team::{Team, TeamDraft, TeamOutput, TeamPatch};
use crate::relations;

pub struct TeamService {
    teams: Arc<dyn EntityStore<Team>>,
    employees: Arc<dyn EntityStore<Employee>>,
    equipments: Arc<dyn EntityStore<Equipment>>,
}

impl TeamService {
    pub fn new(
        teams: Arc<dyn EntityStore<Team>>,
        employees: Arc<dyn EntityStore<Employee>>,
        equipments: Arc<dyn EntityStore<Equipment>>,
    ) -> Self {
        Self {
            teams,
            employees,
            equipments,
        }
    }

    pub async fn create(&self, draft: TeamDraft) -> DomainResult<TeamOutput> {
        relations::ensure_all_exist(self.employees.as_ref(), &draft.employees).await?;
        relations::ensure_all_exist(self.equipments.as_ref(), &draft.equipments).await?;

        let team = self.teams.create(draft).await?;
        self.compose(team).await
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<TeamOutput> {
        let team = self
            .teams
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found::<Team>(id))?;
        self.compose(team).await
    }

    pub async fn list(&self, params: ListParams) -> DomainResult<PaginatedResponse<TeamOutput>> {
        let input = PageInput::normalize(params);
        let page = self.teams.list(&input).await?;

        let data = future::try_join_all(page.items.into_iter().map(|team| self.compose(team)))
            .await?;
        Ok(PaginatedResponse {
            data,
            pagination: PaginationMeta::new(input.page, input.per_page, page.total),
        })
    }

    pub async fn update(&self, id: Uuid, patch: TeamPatch) -> DomainResult<TeamOutput> {
        if let Some(employees) = &patch.employees {
            relations::ensure_all_exist(self.employees.as_ref(), employees).await?;
        }
        if let Some(equipments) = &patch.equipments {
            relations::ensure_all_exist(self.equipments.as_ref(), equipments).await?;
        }

        let team = self.teams.update(&id, patch).await?;
        self.compose(team).await
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.teams.delete(&id).await
    }

    async fn compose(&self, team: Team) -> DomainResult<TeamOutput> {
        let employees: Vec<SimpleEmployee> =
            relations::expand_summaries(self.employees.as_ref(), &team.employees).await?;
        let equipments: Vec<SimpleEquipment> =
            relations::expand_summaries(self.equipments.as_ref(), &team.equipments).await?;
        Ok(TeamOutput::compose(team, employees, equipments))
    }
}
