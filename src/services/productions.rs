//! Production service
//!
//! All four relation kinds are validated before any write; reads stay
//! shallow (ids only), so no composition step exists here.

use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{DomainError, DomainResult};
use crate::core::page::{ListParams, PageInput, PaginatedResponse};
use crate::core::store::EntityStore;
use crate::entities::production::{
    Production, ProductionDraft, ProductionOutput, ProductionPatch,
};
use crate::entities::task::Task;
use crate::entities::team::Team;
use crate::entities::tower::Tower;
use crate::entities::work::Work;
use crate::relations;

pub struct ProductionService {
    productions: Arc<dyn EntityStore<Production>>,
    tasks: Arc<dyn EntityStore<Task>>,
    works: Arc<dyn EntityStore<Work>>,
    teams: Arc<dyn EntityStore<Team>>,
    towers: Arc<dyn EntityStore<Tower>>,
}

impl ProductionService {
    pub fn new(
        productions: Arc<dyn EntityStore<Production>>,
        tasks: Arc<dyn EntityStore<Task>>,
        works: Arc<dyn EntityStore<Work>>,
        teams: Arc<dyn EntityStore<Team>>,
        towers: Arc<dyn EntityStore<Tower>>,
    ) -> Self {
        Self {
            productions,
            tasks,
            works,
            teams,
            towers,
        }
    }

    pub async fn create(&self, draft: ProductionDraft) -> DomainResult<ProductionOutput> {
        relations::ensure_exists(self.tasks.as_ref(), &draft.task_id).await?;
        relations::ensure_exists(self.works.as_ref(), &draft.work_id).await?;
        relations::ensure_all_exist(self.teams.as_ref(), &draft.teams).await?;
        relations::ensure_all_exist(self.towers.as_ref(), &draft.towers).await?;

        let production = self.productions.create(draft).await?;
        Ok(ProductionOutput::from(production))
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<ProductionOutput> {
        let production = self
            .productions
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found::<Production>(id))?;
        Ok(ProductionOutput::from(production))
    }

    pub async fn list(
        &self,
        params: ListParams,
    ) -> DomainResult<PaginatedResponse<ProductionOutput>> {
        let input = PageInput::normalize(params);
        let page = self.productions.list(&input).await?;
        Ok(PaginatedResponse::from_page(page, &input, ProductionOutput::from))
    }

    pub async fn update(&self, id: Uuid, patch: ProductionPatch) -> DomainResult<ProductionOutput> {
        if let Some(task_id) = patch.task_id {
            relations::ensure_exists(self.tasks.as_ref(), &task_id).await?;
        }
        if let Some(work_id) = patch.work_id {
            relations::ensure_exists(self.works.as_ref(), &work_id).await?;
        }
        if let Some(teams) = &patch.teams {
            relations::ensure_all_exist(self.teams.as_ref(), teams).await?;
        }
        if let Some(towers) = &patch.towers {
            relations::ensure_all_exist(self.towers.as_ref(), towers).await?;
        }

        let production = self.productions.update(&id, patch).await?;
        Ok(ProductionOutput::from(production))
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.productions.delete(&id).await
    }
}
