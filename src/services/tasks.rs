//! Task service

use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{DomainError, DomainResult};
use crate::core::page::{ListParams, PageInput, PaginatedResponse};
use crate::core::store::EntityStore;
use crate::entities::task::{Task, TaskDraft, TaskOutput, TaskPatch};
use crate::entities::work::Work;
use crate::relations;

pub struct TaskService {
    tasks: Arc<dyn EntityStore<Task>>,
    works: Arc<dyn EntityStore<Work>>,
}

impl TaskService {
    pub fn new(tasks: Arc<dyn EntityStore<Task>>, works: Arc<dyn EntityStore<Work>>) -> Self {
        Self { tasks, works }
    }

    pub async fn create(&self, draft: TaskDraft) -> DomainResult<TaskOutput> {
        relations::ensure_exists(self.works.as_ref(), &draft.work_id).await?;

        let task = self.tasks.create(draft).await?;
        Ok(TaskOutput::from(task))
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<TaskOutput> {
        let task = self
            .tasks
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found::<Task>(id))?;
        Ok(TaskOutput::from(task))
    }

    pub async fn list(&self, params: ListParams) -> DomainResult<PaginatedResponse<TaskOutput>> {
        let input = PageInput::normalize(params);
        let page = self.tasks.list(&input).await?;
        Ok(PaginatedResponse::from_page(page, &input, TaskOutput::from))
    }

    pub async fn update(&self, id: Uuid, patch: TaskPatch) -> DomainResult<TaskOutput> {
        if let Some(work_id) = patch.work_id {
            relations::ensure_exists(self.works.as_ref(), &work_id).await?;
        }
        let task = self.tasks.update(&id, patch).await?;
        Ok(TaskOutput::from(task))
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.tasks.delete(&id).await
    }
}
