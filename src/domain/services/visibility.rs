// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::User;
use crate::utils::errors::DomainError;

/// 请求的调用者
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caller {
    /// 未登录
    Anonymous,
    /// 普通登录用户
    Member(i32),
    /// 管理员
    Staff(i32),
}

impl Caller {
    pub fn from_user(user: &User) -> Self {
        if user.is_staff {
            Caller::Staff(user.id)
        } else {
            Caller::Member(user.id)
        }
    }

    pub fn user_id(&self) -> Option<i32> {
        match self {
            Caller::Anonymous => None,
            Caller::Member(id) | Caller::Staff(id) => Some(*id),
        }
    }

    pub fn is_staff(&self) -> bool {
        matches!(self, Caller::Staff(_))
    }

    /// 调用者在查询中可见的范围
    pub fn scope(&self) -> VisibilityScope {
        match self {
            Caller::Anonymous => VisibilityScope::ApprovedOnly,
            Caller::Member(id) => VisibilityScope::ApprovedOrOwnedBy(*id),
            Caller::Staff(_) => VisibilityScope::Everything,
        }
    }

    /// 是否可以修改某条记录：所有者或管理员
    pub fn can_modify(&self, owner_id: i32) -> bool {
        match self {
            Caller::Anonymous => false,
            Caller::Member(id) => *id == owner_id,
            Caller::Staff(_) => true,
        }
    }

    /// 写操作要求登录，返回调用者的用户 ID
    pub fn require_authenticated(&self) -> Result<i32, DomainError> {
        self.user_id().ok_or(DomainError::Unauthenticated)
    }

    /// 管理操作要求管理员身份
    pub fn require_staff(&self) -> Result<i32, DomainError> {
        match self {
            Caller::Anonymous => Err(DomainError::Unauthenticated),
            Caller::Member(_) => Err(DomainError::Forbidden),
            Caller::Staff(id) => Ok(*id),
        }
    }
}

/// 受审核记录的可见范围
///
/// 仓库实现据此构造查询条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityScope {
    /// 只有已审核的记录
    ApprovedOnly,
    /// 已审核的记录，加上该用户拥有的记录
    ApprovedOrOwnedBy(i32),
    /// 全部记录
    Everything,
}
