// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// 仓库层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(DbErr),

    /// 记录未找到
    #[error("Record not found")]
    NotFound,

    /// 违反唯一约束
    #[error("Record already exists: {0}")]
    AlreadyExists(String),

    /// 存储的数据无法映射回领域模型
    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                RepositoryError::AlreadyExists(detail)
            }
            _ => RepositoryError::Database(err),
        }
    }
}

/// 领域层错误类型
#[derive(Error, Debug)]
pub enum DomainError {
    /// 需要登录
    #[error("Authentication credentials were not provided.")]
    Unauthenticated,

    /// 凭证无效
    #[error("Invalid token.")]
    InvalidToken,

    /// 无权限
    #[error("You do not have permission to perform this action.")]
    Forbidden,

    /// 资源不存在或调用者不可见
    #[error("Not found.")]
    NotFound,

    /// 分页页码超出范围
    #[error("Invalid page.")]
    InvalidPage,

    /// 输入校验失败
    #[error("{0}")]
    Validation(String),

    /// 与现有数据冲突
    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => DomainError::NotFound,
            RepositoryError::AlreadyExists(detail) => DomainError::Conflict(detail),
            other => DomainError::Repository(other),
        }
    }
}

/// 邮件发送错误类型
#[derive(Error, Debug)]
pub enum MailError {
    #[error("Mail transport error: {0}")]
    Transport(String),

    #[error("Mail relay rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Mail backend misconfigured: {0}")]
    Misconfigured(String),
}
