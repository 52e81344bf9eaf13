// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::program::{NewProgram, ProgramChanges, ProgramFilter, ProgramOrdering};
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

/// 创建项目或整体替换项目 (PUT) 的请求体
#[derive(Debug, Deserialize, Validate)]
pub struct ProgramRequest {
    pub profile: i32,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1, max = 255))]
    pub target_audience: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub funding: bool,
}

impl From<ProgramRequest> for NewProgram {
    fn from(req: ProgramRequest) -> Self {
        Self {
            profile: req.profile,
            title: req.title,
            description: req.description,
            target_audience: req.target_audience,
            start_date: req.start_date,
            end_date: req.end_date,
            funding: req.funding,
        }
    }
}

impl From<ProgramRequest> for ProgramChanges {
    fn from(req: ProgramRequest) -> Self {
        Self {
            profile: Some(req.profile),
            title: Some(req.title),
            description: Some(req.description),
            target_audience: Some(req.target_audience),
            start_date: Some(req.start_date),
            end_date: Some(req.end_date),
            funding: Some(req.funding),
        }
    }
}

/// 部分修改项目 (PATCH) 的请求体
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ProgramPatchRequest {
    pub profile: Option<i32>,
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub target_audience: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub funding: Option<bool>,
}

impl From<ProgramPatchRequest> for ProgramChanges {
    fn from(req: ProgramPatchRequest) -> Self {
        Self {
            profile: req.profile,
            title: req.title,
            description: req.description,
            target_audience: req.target_audience,
            start_date: req.start_date,
            end_date: req.end_date,
            funding: req.funding,
        }
    }
}

/// 项目列表查询参数
#[derive(Debug, Default, Deserialize)]
pub struct ProgramListQuery {
    pub title: Option<String>,
    pub profile: Option<i32>,
    pub ordering: Option<String>,
}

impl From<ProgramListQuery> for ProgramFilter {
    fn from(query: ProgramListQuery) -> Self {
        Self {
            ordering: ProgramOrdering::parse(query.ordering.as_deref()),
            title: query.title,
            profile: query.profile,
        }
    }
}
