// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ESO 组织类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrganizationType {
    /// Financial Management Services
    #[serde(rename = "FMS")]
    FinancialManagement,
    /// Legal Services
    #[serde(rename = "LS")]
    Legal,
    /// Investment-Readiness Services
    #[serde(rename = "IRS")]
    InvestmentReadiness,
    /// Management Consulting
    #[serde(rename = "MC")]
    ManagementConsulting,
    /// Other Relevant Services
    #[serde(rename = "ORS")]
    Other,
}

impl OrganizationType {
    /// 数据库中存储的短代码
    pub fn code(&self) -> &'static str {
        match self {
            OrganizationType::FinancialManagement => "FMS",
            OrganizationType::Legal => "LS",
            OrganizationType::InvestmentReadiness => "IRS",
            OrganizationType::ManagementConsulting => "MC",
            OrganizationType::Other => "ORS",
        }
    }

    /// 人类可读的名称
    pub fn label(&self) -> &'static str {
        match self {
            OrganizationType::FinancialManagement => "Financial Management Services",
            OrganizationType::Legal => "Legal Services",
            OrganizationType::InvestmentReadiness => "Investment-Readiness Services",
            OrganizationType::ManagementConsulting => "Management Consulting",
            OrganizationType::Other => "Other Relevant Services",
        }
    }
}

impl fmt::Display for OrganizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for OrganizationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FMS" => Ok(OrganizationType::FinancialManagement),
            "LS" => Ok(OrganizationType::Legal),
            "IRS" => Ok(OrganizationType::InvestmentReadiness),
            "MC" => Ok(OrganizationType::ManagementConsulting),
            "ORS" => Ok(OrganizationType::Other),
            other => Err(format!("Unknown organization type: {}", other)),
        }
    }
}

/// 用户（ESO 账号）
///
/// 以邮箱作为登录标识。密码哈希不属于该结构，序列化时不会泄露。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub organization_name: String,
    pub organization_type: Option<OrganizationType>,
    pub whatsapp_number: Option<String>,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub date_joined: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

/// 待创建的用户
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub organization_name: String,
    pub organization_type: Option<OrganizationType>,
    pub whatsapp_number: Option<String>,
    pub is_staff: bool,
    pub is_superuser: bool,
}

/// 用户列表查询条件
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    pub is_active: Option<bool>,
    pub is_staff: Option<bool>,
    /// 在邮箱和组织名中模糊搜索
    pub search: Option<String>,
}

/// 规范化邮箱：域名部分转为小写
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}
