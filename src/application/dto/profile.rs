// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::profile::{ProfileFields, ProfileFilter, ProfileOrdering};
use serde::Deserialize;
use validator::Validate;

/// 创建或修改档案的请求体
///
/// `is_approved`、`rating` 与所有者由服务端决定，请求中出现时被忽略
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ProfileRequest {
    #[validate(length(max = 100))]
    pub country: Option<String>,
    #[validate(length(max = 100))]
    pub state: Option<String>,
    #[validate(length(max = 100))]
    pub city: Option<String>,
    pub address: Option<String>,
    #[validate(email(message = "Enter a valid email address."))]
    pub company_email: Option<String>,
    #[validate(length(max = 20))]
    pub company_phone: Option<String>,
    #[validate(url(message = "Enter a valid URL."))]
    pub company_website: Option<String>,
    #[validate(length(max = 300))]
    pub description: Option<String>,
}

impl From<ProfileRequest> for ProfileFields {
    fn from(req: ProfileRequest) -> Self {
        Self {
            country: req.country,
            state: req.state,
            city: req.city,
            address: req.address,
            company_email: req.company_email,
            company_phone: req.company_phone,
            company_website: req.company_website,
            description: req.description,
        }
    }
}

/// 档案列表查询参数
#[derive(Debug, Default, Deserialize)]
pub struct ProfileListQuery {
    pub state: Option<String>,
    pub city: Option<String>,
    pub ordering: Option<String>,
}

impl From<ProfileListQuery> for ProfileFilter {
    fn from(query: ProfileListQuery) -> Self {
        Self {
            ordering: ProfileOrdering::parse(query.ordering.as_deref()),
            state: query.state,
            city: query.city,
        }
    }
}
