// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::social_link::Platform;
use crate::domain::services::social_link_service::SocialLinkChanges;
use crate::utils::errors::DomainError;
use serde::Deserialize;
use validator::Validate;

/// 创建社交链接的请求体
#[derive(Debug, Deserialize, Validate)]
pub struct SocialLinkRequest {
    pub profile: i32,
    pub platform: String,
    #[validate(url(message = "Enter a valid URL."), length(max = 200))]
    pub url: String,
}

impl SocialLinkRequest {
    pub fn platform(&self) -> Result<Platform, DomainError> {
        self.platform.parse().map_err(DomainError::Validation)
    }
}

/// 部分修改社交链接的请求体
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SocialLinkPatchRequest {
    pub profile: Option<i32>,
    pub platform: Option<String>,
    #[validate(url(message = "Enter a valid URL."), length(max = 200))]
    pub url: Option<String>,
}

impl TryFrom<SocialLinkPatchRequest> for SocialLinkChanges {
    type Error = DomainError;

    fn try_from(req: SocialLinkPatchRequest) -> Result<Self, Self::Error> {
        let platform = req
            .platform
            .as_deref()
            .map(str::parse::<Platform>)
            .transpose()
            .map_err(DomainError::Validation)?;
        Ok(Self {
            profile: req.profile,
            platform,
            url: req.url,
        })
    }
}

/// 社交链接列表查询参数
#[derive(Debug, Default, Deserialize)]
pub struct SocialLinkListQuery {
    pub profile: Option<i32>,
}
