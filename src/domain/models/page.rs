// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 分页请求，页码从 1 开始
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// 数据库偏移量，溢出时返回 `None`
    pub fn checked_offset(&self) -> Option<u64> {
        (self.page - 1)
            .checked_mul(self.page_size)
            .filter(|offset| *offset <= i64::MAX as u64)
    }

    /// 数据库偏移量
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }

    /// 给定总条数时的总页数，空结果也算一页
    pub fn page_count(&self, total: u64) -> u64 {
        if total == 0 {
            1
        } else {
            total.div_ceil(self.page_size)
        }
    }

    /// 页码是否超出范围
    pub fn is_out_of_range(&self, total: u64) -> bool {
        self.page > self.page_count(total)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, 10)
    }
}
