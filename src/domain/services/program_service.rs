// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::notification::{NotificationAction, NotificationSubject};
use crate::domain::models::page::PageRequest;
use crate::domain::models::profile::ProfileWithOwner;
use crate::domain::models::program::{
    check_date_range, NewProgram, Program, ProgramChanges, ProgramFilter,
};
use crate::domain::repositories::profile_repository::ProfileRepository;
use crate::domain::repositories::program_repository::ProgramRepository;
use crate::domain::services::notification_service::NotificationService;
use crate::domain::services::visibility::{Caller, VisibilityScope};
use crate::utils::errors::DomainError;
use std::sync::Arc;
use tracing::info;

/// 项目服务
pub struct ProgramService {
    programs: Arc<dyn ProgramRepository>,
    profiles: Arc<dyn ProfileRepository>,
    notifier: Arc<NotificationService>,
}

impl ProgramService {
    pub fn new(
        programs: Arc<dyn ProgramRepository>,
        profiles: Arc<dyn ProfileRepository>,
        notifier: Arc<NotificationService>,
    ) -> Self {
        Self {
            programs,
            profiles,
            notifier,
        }
    }

    pub async fn list(
        &self,
        caller: Caller,
        filter: &ProgramFilter,
        page: PageRequest,
    ) -> Result<(Vec<Program>, u64), DomainError> {
        Ok(self.programs.list(filter, caller.scope(), page).await?)
    }

    pub async fn get(&self, caller: Caller, id: i32) -> Result<Program, DomainError> {
        self.programs
            .find(id, caller.scope())
            .await?
            .ok_or(DomainError::NotFound)
    }

    /// 在档案下创建项目，只能挂在调用者自己的档案上（管理员不受限）
    pub async fn create(&self, caller: Caller, program: NewProgram) -> Result<Program, DomainError> {
        caller.require_authenticated()?;
        self.writable_profile(caller, program.profile).await?;
        check_date_range(program.start_date, program.end_date).map_err(DomainError::Validation)?;

        let created = self.programs.create(&program).await?;
        info!(
            program_id = created.id,
            profile_id = created.profile,
            "Program created"
        );
        self.notifier
            .notify_admins(NotificationAction::Created, &subject_of(&created))
            .await?;
        Ok(created)
    }

    pub async fn update(
        &self,
        caller: Caller,
        id: i32,
        changes: ProgramChanges,
    ) -> Result<Program, DomainError> {
        caller.require_authenticated()?;
        let mut program = self.get(caller, id).await?;
        let owner = self.owner_of(program.profile).await?;
        if !caller.can_modify(owner) {
            return Err(DomainError::Forbidden);
        }
        if let Some(target) = changes.profile.filter(|p| *p != program.profile) {
            self.writable_profile(caller, target).await?;
        }

        changes.apply_to(&mut program);
        check_date_range(program.start_date, program.end_date).map_err(DomainError::Validation)?;

        let updated = self.programs.update(&program).await?;
        self.notifier
            .notify_admins(NotificationAction::Updated, &subject_of(&updated))
            .await?;
        Ok(updated)
    }

    pub async fn delete(&self, caller: Caller, id: i32) -> Result<(), DomainError> {
        caller.require_authenticated()?;
        let program = self.get(caller, id).await?;
        let owner = self.owner_of(program.profile).await?;
        if !caller.can_modify(owner) {
            return Err(DomainError::Forbidden);
        }
        self.programs.delete(id).await?;
        info!(program_id = id, "Program deleted");
        Ok(())
    }

    /// 调用者可见且可修改的档案
    async fn writable_profile(
        &self,
        caller: Caller,
        profile_id: i32,
    ) -> Result<ProfileWithOwner, DomainError> {
        let profile = self
            .profiles
            .find(profile_id, caller.scope())
            .await?
            .ok_or_else(|| missing_profile(profile_id))?;
        if !caller.can_modify(profile.profile.user_id) {
            return Err(DomainError::Forbidden);
        }
        Ok(profile)
    }

    async fn owner_of(&self, profile_id: i32) -> Result<i32, DomainError> {
        self.profiles
            .find(profile_id, VisibilityScope::Everything)
            .await?
            .map(|p| p.profile.user_id)
            .ok_or(DomainError::NotFound)
    }
}

pub(crate) fn missing_profile(profile_id: i32) -> DomainError {
    DomainError::Validation(format!(
        "Invalid pk \"{}\" - object does not exist.",
        profile_id
    ))
}

pub(crate) fn subject_of(program: &Program) -> NotificationSubject {
    NotificationSubject::Program {
        title: program.title.clone(),
    }
}
