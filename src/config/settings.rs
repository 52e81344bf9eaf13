// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、数据库、邮件、分页、指标和初始管理员等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 邮件配置
    pub email: EmailSettings,
    /// 分页配置
    pub pagination: PaginationSettings,
    /// 指标配置
    pub metrics: MetricsSettings,
    /// 启动时创建的超级管理员
    #[serde(default)]
    pub bootstrap: BootstrapSettings,
}

/// 数据库配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 邮件后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailBackend {
    /// 只写日志，不实际发送
    Log,
    /// 通过 HTTP 邮件中继发送
    Http,
}

/// 邮件配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct EmailSettings {
    /// 邮件后端
    pub backend: EmailBackend,
    /// 默认发件人地址
    pub from_address: String,
    /// HTTP 中继地址 (backend=http 时使用)
    pub relay_url: Option<String>,
    /// HTTP 中继密钥
    pub relay_api_key: Option<String>,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

/// 分页配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationSettings {
    /// 默认每页条数
    pub default_page_size: u64,
    /// 每页最大条数
    pub max_page_size: u64,
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用 Prometheus 导出
    pub enabled: bool,
    /// 导出器监听地址
    pub listen_addr: String,
}

/// 初始超级管理员配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BootstrapSettings {
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 按以下顺序叠加配置源：内置默认值、`config/default`、
    /// `config/<APP_ENVIRONMENT>`，最后是 `ESO__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("ESO").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 只使用内置默认值构建配置，测试中使用
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            // Default DB settings
            .set_default("database.url", "sqlite://eso.db?mode=rwc")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default Email settings
            .set_default("email.backend", "log")?
            .set_default("email.from_address", "support@esonigeria.com")?
            .set_default("email.timeout_secs", 10)?
            // Default Pagination settings
            .set_default("pagination.default_page_size", 10)?
            .set_default("pagination.max_page_size", 50)?
            // Default Metrics settings
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")
    }
}
