// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 档案名下的项目
///
/// 与档案分开审核，审核状态由 `is_approved` 表示。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: i32,
    /// 所属档案 ID
    pub profile: i32,
    pub title: String,
    pub description: String,
    pub target_audience: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub funding: bool,
    pub is_approved: bool,
}

/// 待创建的项目
#[derive(Debug, Clone, PartialEq)]
pub struct NewProgram {
    pub profile: i32,
    pub title: String,
    pub description: String,
    pub target_audience: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub funding: bool,
}

/// 项目可编辑字段的修改，`None` 表示保持不变
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgramChanges {
    pub profile: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub target_audience: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub funding: Option<bool>,
}

impl ProgramChanges {
    /// 将修改写入项目，审核状态保持不变
    pub fn apply_to(self, program: &mut Program) {
        if let Some(profile) = self.profile {
            program.profile = profile;
        }
        if let Some(title) = self.title {
            program.title = title;
        }
        if let Some(description) = self.description {
            program.description = description;
        }
        if let Some(target_audience) = self.target_audience {
            program.target_audience = target_audience;
        }
        if let Some(start_date) = self.start_date {
            program.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            program.end_date = end_date;
        }
        if let Some(funding) = self.funding {
            program.funding = funding;
        }
    }
}

/// 项目排序字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramSortKey {
    StartDate,
    EndDate,
}

/// 项目排序方式，默认按开始日期、结束日期升序
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramOrdering(pub Vec<(ProgramSortKey, bool)>);

impl Default for ProgramOrdering {
    fn default() -> Self {
        Self(vec![
            (ProgramSortKey::StartDate, true),
            (ProgramSortKey::EndDate, true),
        ])
    }
}

impl ProgramOrdering {
    /// 解析逗号分隔的 `ordering` 参数，例如 `-end_date,start_date`
    ///
    /// 未知字段被忽略；若没有可用字段则使用默认排序
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        let keys: Vec<(ProgramSortKey, bool)> = raw
            .split(',')
            .filter_map(|part| {
                let part = part.trim();
                let (ascending, name) = match part.strip_prefix('-') {
                    Some(name) => (false, name),
                    None => (true, part),
                };
                match name {
                    "start_date" => Some((ProgramSortKey::StartDate, ascending)),
                    "end_date" => Some((ProgramSortKey::EndDate, ascending)),
                    _ => None,
                }
            })
            .collect();

        if keys.is_empty() {
            Self::default()
        } else {
            Self(keys)
        }
    }
}

/// 项目列表过滤条件
#[derive(Debug, Clone, Default)]
pub struct ProgramFilter {
    pub title: Option<String>,
    pub profile: Option<i32>,
    pub ordering: ProgramOrdering,
}

/// 检查日期区间，结束日期不能早于开始日期
pub fn check_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), String> {
    if end < start {
        return Err("end_date must not be earlier than start_date".to_string());
    }
    Ok(())
}
