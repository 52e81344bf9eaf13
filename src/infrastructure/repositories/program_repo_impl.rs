// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::scope::program_condition;
use crate::domain::models::page::PageRequest;
use crate::domain::models::program::{NewProgram, Program, ProgramFilter, ProgramSortKey};
use crate::domain::repositories::program_repository::ProgramRepository;
use crate::domain::services::visibility::VisibilityScope;
use crate::infrastructure::database::entities::program;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::sync::Arc;

/// 项目仓库实现
#[derive(Clone)]
pub struct ProgramRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl ProgramRepoImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProgramRepository for ProgramRepoImpl {
    async fn create(&self, new_program: &NewProgram) -> Result<Program, RepositoryError> {
        let model = program::ActiveModel {
            profile_id: Set(new_program.profile),
            title: Set(new_program.title.clone()),
            description: Set(new_program.description.clone()),
            target_audience: Set(new_program.target_audience.clone()),
            start_date: Set(new_program.start_date),
            end_date: Set(new_program.end_date),
            funding: Set(new_program.funding),
            is_approved: Set(false),
            ..Default::default()
        };
        Ok(model.insert(self.db.as_ref()).await?.into())
    }

    async fn find(
        &self,
        id: i32,
        scope: VisibilityScope,
    ) -> Result<Option<Program>, RepositoryError> {
        let model = program::Entity::find_by_id(id)
            .filter(program_condition(scope))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn list(
        &self,
        filter: &ProgramFilter,
        scope: VisibilityScope,
        page: PageRequest,
    ) -> Result<(Vec<Program>, u64), RepositoryError> {
        let mut query = program::Entity::find().filter(program_condition(scope));
        if let Some(title) = &filter.title {
            query = query.filter(program::Column::Title.eq(title.as_str()));
        }
        if let Some(profile_id) = filter.profile {
            query = query.filter(program::Column::ProfileId.eq(profile_id));
        }

        let total = query.clone().count(self.db.as_ref()).await?;

        for (key, ascending) in &filter.ordering.0 {
            let column = match key {
                ProgramSortKey::StartDate => program::Column::StartDate,
                ProgramSortKey::EndDate => program::Column::EndDate,
            };
            let order = if *ascending { Order::Asc } else { Order::Desc };
            query = query.order_by(column, order);
        }

        let programs = query
            .order_by_asc(program::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((programs, total))
    }

    async fn update(&self, updated: &Program) -> Result<Program, RepositoryError> {
        let mut model = program::Entity::find_by_id(updated.id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into_active_model();
        model.profile_id = Set(updated.profile);
        model.title = Set(updated.title.clone());
        model.description = Set(updated.description.clone());
        model.target_audience = Set(updated.target_audience.clone());
        model.start_date = Set(updated.start_date);
        model.end_date = Set(updated.end_date);
        model.funding = Set(updated.funding);

        Ok(model.update(self.db.as_ref()).await?.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = program::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn set_approved(
        &self,
        ids: &[i32],
        approved: bool,
    ) -> Result<Vec<Program>, RepositoryError> {
        program::Entity::update_many()
            .col_expr(program::Column::IsApproved, Expr::value(approved))
            .filter(program::Column::Id.is_in(ids.to_vec()))
            .exec(self.db.as_ref())
            .await?;

        let programs = program::Entity::find()
            .filter(program::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(program::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(programs.into_iter().map(Into::into).collect())
    }

    async fn count_pending(&self) -> Result<u64, RepositoryError> {
        Ok(program::Entity::find()
            .filter(program::Column::IsApproved.eq(false))
            .count(self.db.as_ref())
            .await?)
    }
}

impl From<program::Model> for Program {
    fn from(model: program::Model) -> Self {
        Self {
            id: model.id,
            profile: model.profile_id,
            title: model.title,
            description: model.description,
            target_audience: model.target_audience,
            start_date: model.start_date,
            end_date: model.end_date,
            funding: model.funding,
            is_approved: model.is_approved,
        }
    }
}
