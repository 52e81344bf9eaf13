// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::PaginationSettings;
use crate::domain::models::page::PageRequest;
use crate::utils::errors::DomainError;
use serde::{Deserialize, Serialize};

/// 分页查询参数
///
/// 使用字符串接收，非法页码按超出范围处理
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl PageQuery {
    /// 解析为分页请求
    ///
    /// `page_size` 缺省或非法时使用默认值，超过上限时截断
    pub fn resolve(&self, settings: &PaginationSettings) -> Result<PageRequest, DomainError> {
        let page = match self.page.as_deref() {
            None | Some("") => 1,
            Some(raw) => match raw.parse::<u64>() {
                Ok(page) if page >= 1 => page,
                _ => return Err(DomainError::InvalidPage),
            },
        };
        let page_size = self
            .page_size
            .as_deref()
            .and_then(|raw| raw.parse::<u64>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(settings.default_page_size)
            .min(settings.max_page_size);

        let request = PageRequest { page, page_size };
        // offsets past i64 can never hold rows
        request.checked_offset().ok_or(DomainError::InvalidPage)?;
        Ok(request)
    }
}

/// 分页响应
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    /// 构造分页响应，上一页与下一页链接保留原有的查询参数
    ///
    /// # 参数
    ///
    /// * `results` - 当前页数据
    /// * `total` - 总条数
    /// * `page` - 分页请求
    /// * `path` - 请求路径
    /// * `query` - 原始查询字符串
    pub fn new(
        results: Vec<T>,
        total: u64,
        page: PageRequest,
        path: &str,
        query: Option<&str>,
    ) -> Self {
        let last = page.page_count(total);
        let next = (page.page < last).then(|| page_link(path, query, Some(page.page + 1)));
        let previous = (page.page > 1).then(|| {
            // first page link carries no page parameter
            let target = if page.page == 2 { None } else { Some(page.page - 1) };
            page_link(path, query, target)
        });

        Self {
            count: total,
            next,
            previous,
            results,
        }
    }
}

fn page_link(path: &str, query: Option<&str>, page: Option<u64>) -> String {
    let mut pairs: Vec<(String, String)> = query
        .and_then(|q| serde_urlencoded::from_str::<Vec<(String, String)>>(q).ok())
        .unwrap_or_default()
        .into_iter()
        .filter(|(key, _)| key != "page")
        .collect();
    if let Some(page) = page {
        pairs.push(("page".to_string(), page.to_string()));
    }

    match serde_urlencoded::to_string(&pairs) {
        Ok(encoded) if !encoded.is_empty() => format!("{}?{}", path, encoded),
        _ => path.to_string(),
    }
}
