// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 评分下限
pub const MIN_SCORE: i32 = 1;
/// 评分上限
pub const MAX_SCORE: i32 = 5;

/// 组织之间的评分
///
/// 同一用户只能给另一用户评分一次。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: i32,
    pub rated_user: i32,
    pub rated_profile: i32,
    pub rated_by: i32,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// 待创建的评分
#[derive(Debug, Clone, PartialEq)]
pub struct NewRating {
    pub rated_user: i32,
    pub rated_profile: i32,
    pub rated_by: i32,
    pub rating: i32,
    pub comment: Option<String>,
}

/// 评分列表过滤条件
#[derive(Debug, Clone, Default)]
pub struct RatingFilter {
    pub rated_profile: Option<i32>,
    pub rated_by: Option<i32>,
}
