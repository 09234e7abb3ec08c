//! Equipment service

use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{DomainError, DomainResult};
use crate::core::page::{ListParams, PageInput, PaginatedResponse};
use crate::core::store::EntityStore;
use crate::entities::equipment::{Equipment, EquipmentDraft, EquipmentOutput, EquipmentPatch};
use crate::entities::team::Team;
use crate::relations;

pub struct EquipmentService {
    equipments: Arc<dyn EntityStore<Equipment>>,
    teams: Arc<dyn EntityStore<Team>>,
}

impl EquipmentService {
    pub fn new(
        equipments: Arc<dyn EntityStore<Equipment>>,
        teams: Arc<dyn EntityStore<Team>>,
    ) -> Self {
        Self { equipments, teams }
    }

    pub async fn create(&self, draft: EquipmentDraft) -> DomainResult<EquipmentOutput> {
        if let Some(team_id) = draft.team_id {
            relations::ensure_exists(self.teams.as_ref(), &team_id).await?;
        }
        let equipment = self.equipments.create(draft).await?;
        Ok(EquipmentOutput::from(equipment))
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<EquipmentOutput> {
        let equipment = self
            .equipments
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found::<Equipment>(id))?;
        Ok(EquipmentOutput::from(equipment))
    }

    pub async fn list(&self, params: ListParams) -> DomainResult<PaginatedResponse<EquipmentOutput>> {
        let input = PageInput::normalize(params);
        let page = self.equipments.list(&input).await?;
        Ok(PaginatedResponse::from_page(page, &input, EquipmentOutput::from))
    }

    pub async fn update(&self, id: Uuid, patch: EquipmentPatch) -> DomainResult<EquipmentOutput> {
        if let Some(Some(team_id)) = patch.team_id {
            relations::ensure_exists(self.teams.as_ref(), &team_id).await?;
        }
        let equipment = self.equipments.update(&id, patch).await?;
        Ok(EquipmentOutput::from(equipment))
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.equipments.delete(&id).await
    }
}
