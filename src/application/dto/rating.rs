// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::rating::RatingFilter;
use serde::Deserialize;
use validator::Validate;

/// 创建评分的请求体，评分人总是当前用户
#[derive(Debug, Deserialize, Validate)]
pub struct RatingRequest {
    pub rated_profile: i32,
    #[validate(range(min = 1, max = 5, message = "Ensure rating is between 1 and 5."))]
    pub rating: i32,
    pub comment: Option<String>,
}

/// 修改评分的请求体
#[derive(Debug, Default, Deserialize, Validate)]
pub struct RatingPatchRequest {
    #[validate(range(min = 1, max = 5, message = "Ensure rating is between 1 and 5."))]
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

/// 评分列表查询参数
#[derive(Debug, Default, Deserialize)]
pub struct RatingListQuery {
    pub rated_profile: Option<i32>,
    pub rated_by: Option<i32>,
}

impl From<RatingListQuery> for RatingFilter {
    fn from(query: RatingListQuery) -> Self {
        Self {
            rated_profile: query.rated_profile,
            rated_by: query.rated_by,
        }
    }
}
