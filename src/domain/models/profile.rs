// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::user::User;
use serde::{Deserialize, Serialize};

/// 组织公开档案
///
/// 受审核开关 `is_approved` 控制，未审核的档案只有所有者和管理员可见。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i32,
    pub user_id: i32,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub company_email: Option<String>,
    pub company_phone: Option<String>,
    pub company_website: Option<String>,
    pub description: Option<String>,
    /// 收到评分的平均值，保留一位小数
    pub rating: Option<f64>,
    pub is_approved: bool,
}

/// 档案连同所有者
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileWithOwner {
    #[serde(flatten)]
    pub profile: Profile,
    pub user: User,
}

/// 档案中可由所有者编辑的字段
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFields {
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub company_email: Option<String>,
    pub company_phone: Option<String>,
    pub company_website: Option<String>,
    pub description: Option<String>,
}

impl ProfileFields {
    /// 将字段整体写入档案 (PUT 语义)
    pub fn replace_on(self, profile: &mut Profile) {
        profile.country = self.country;
        profile.state = self.state;
        profile.city = self.city;
        profile.address = self.address;
        profile.company_email = self.company_email;
        profile.company_phone = self.company_phone;
        profile.company_website = self.company_website;
        profile.description = self.description;
    }

    /// 只覆盖提供了的字段 (PATCH 语义)
    pub fn merge_onto(self, profile: &mut Profile) {
        if self.country.is_some() {
            profile.country = self.country;
        }
        if self.state.is_some() {
            profile.state = self.state;
        }
        if self.city.is_some() {
            profile.city = self.city;
        }
        if self.address.is_some() {
            profile.address = self.address;
        }
        if self.company_email.is_some() {
            profile.company_email = self.company_email;
        }
        if self.company_phone.is_some() {
            profile.company_phone = self.company_phone;
        }
        if self.company_website.is_some() {
            profile.company_website = self.company_website;
        }
        if self.description.is_some() {
            profile.description = self.description;
        }
    }
}

/// 档案排序方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileOrdering {
    /// 按组织名称升序
    #[default]
    OrganizationName,
    OrganizationType,
    OrganizationTypeDesc,
}

impl ProfileOrdering {
    /// 解析 `ordering` 查询参数，无法识别的字段回退到默认排序
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("organization_type") | Some("user__organization_type") => {
                ProfileOrdering::OrganizationType
            }
            Some("-organization_type") | Some("-user__organization_type") => {
                ProfileOrdering::OrganizationTypeDesc
            }
            _ => ProfileOrdering::OrganizationName,
        }
    }
}

/// 档案列表过滤条件
#[derive(Debug, Clone, Default)]
pub struct ProfileFilter {
    pub state: Option<String>,
    pub city: Option<String>,
    pub ordering: ProfileOrdering,
}

/// 计算评分平均值，保留一位小数
pub fn average_rating(scores: &[i32]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let sum: i64 = scores.iter().map(|s| i64::from(*s)).sum();
    let mean = sum as f64 / scores.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}
