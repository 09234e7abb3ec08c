//! Work service

use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{DomainError, DomainResult};
use crate::core::page::{ListParams, PageInput, PaginatedResponse};
use crate::core::store::EntityStore;
use crate::entities::work::{Work, WorkDraft, WorkOutput, WorkPatch};

pub struct WorkService {
    works: Arc<dyn EntityStore<Work>>,
}

impl WorkService {
    pub fn new(works: Arc<dyn EntityStore<Work>>) -> Self {
        Self { works }
    }

    pub async fn create(&self, draft: WorkDraft) -> DomainResult<WorkOutput> {
        let work = self.works.create(draft).await?;
        Ok(WorkOutput::from(work))
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<WorkOutput> {
        let work = self
            .works
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found::<Work>(id))?;
        Ok(WorkOutput::from(work))
    }

    pub async fn list(&self, params: ListParams) -> DomainResult<PaginatedResponse<WorkOutput>> {
        let input = PageInput::normalize(params);
        let page = self.works.list(&input).await?;
        Ok(PaginatedResponse::from_page(page, &input, WorkOutput::from))
    }

    pub async fn update(&self, id: Uuid, patch: WorkPatch) -> DomainResult<WorkOutput> {
        let work = self.works.update(&id, patch).await?;
        Ok(WorkOutput::from(work))
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.works.delete(&id).await
    }
}
