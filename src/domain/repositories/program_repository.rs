// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page::PageRequest;
use crate::domain::models::program::{NewProgram, Program, ProgramFilter};
use crate::domain::services::visibility::VisibilityScope;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 项目仓库特质
///
/// 项目的所有者是其档案的所有者，可见范围据此判断
#[async_trait]
pub trait ProgramRepository: Send + Sync {
    async fn create(&self, program: &NewProgram) -> Result<Program, RepositoryError>;
    async fn find(
        &self,
        id: i32,
        scope: VisibilityScope,
    ) -> Result<Option<Program>, RepositoryError>;
    async fn list(
        &self,
        filter: &ProgramFilter,
        scope: VisibilityScope,
        page: PageRequest,
    ) -> Result<(Vec<Program>, u64), RepositoryError>;
    /// 保存可编辑字段，不修改审核状态
    async fn update(&self, program: &Program) -> Result<Program, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    /// 批量设置审核状态，返回实际存在的项目
    async fn set_approved(
        &self,
        ids: &[i32],
        approved: bool,
    ) -> Result<Vec<Program>, RepositoryError>;
    async fn count_pending(&self) -> Result<u64, RepositoryError>;
}
