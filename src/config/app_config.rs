// ==========================================
// 库存补货系统 - 应用配置
// ==========================================
// 来源: 环境变量 (缺省值见下)
// - INVENTORY_REORDER_DB_PATH : 数据库文件 (默认用户数据目录)
// - INVENTORY_REORDER_HOST    : 监听地址 (默认 0.0.0.0)
// - PORT                      : 监听端口 (默认 5050)
// - INVENTORY_REORDER_LOCALE  : 消息语言 (zh-CN / en, 默认 zh-CN)
// - INVENTORY_REORDER_LOG     : 默认日志过滤器 (默认 info, RUST_LOG 优先)
// - INVENTORY_REORDER_LOG_FORMAT : 日志格式 (text / json, 默认 text)
// ==========================================

use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

use crate::i18n;
use crate::logging::LogFormat;

pub const ENV_DB_PATH: &str = "INVENTORY_REORDER_DB_PATH";
pub const ENV_HOST: &str = "INVENTORY_REORDER_HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_LOCALE: &str = "INVENTORY_REORDER_LOCALE";
pub const ENV_LOG: &str = "INVENTORY_REORDER_LOG";
pub const ENV_LOG_FORMAT: &str = "INVENTORY_REORDER_LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5050;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// 配置错误
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("端口配置无效 ({key}={value}): {message}")]
    InvalidPort {
        key: String,
        value: String,
        message: String,
    },

    #[error("不支持的语言: {0}（仅支持 zh-CN / en）")]
    UnsupportedLocale(String),

    #[error("不支持的日志格式: {0}（仅支持 text / json）")]
    UnsupportedLogFormat(String),
}

// ==========================================
// AppConfig - 应用配置
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub db_path: String,
    pub host: String,
    pub port: u16,
    pub locale: String,
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// 从进程环境变量加载
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    /// 从键值表加载（便于测试）
    ///
    /// 空白值视同未设置
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            vars.get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match get(ENV_PORT) {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidPort {
                key: ENV_PORT.to_string(),
                value: raw.clone(),
                message: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let locale = get(ENV_LOCALE).unwrap_or_else(|| i18n::DEFAULT_LOCALE.to_string());
        if !i18n::is_supported(&locale) {
            return Err(ConfigError::UnsupportedLocale(locale));
        }

        let log_format = match get(ENV_LOG_FORMAT) {
            Some(raw) => LogFormat::parse(&raw).ok_or(ConfigError::UnsupportedLogFormat(raw))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            db_path: get(ENV_DB_PATH).unwrap_or_else(get_default_db_path),
            host: get(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            locale,
            log_filter: get(ENV_LOG).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            log_format,
        })
    }

    /// 监听地址 host:port
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 默认数据库路径
///
/// 优先用户数据目录（dev 构建使用独立目录），取不到时回退到当前目录
pub fn get_default_db_path() -> String {
    let mut path = PathBuf::from("./inventory.db");

    if let Some(data_dir) = dirs::data_dir() {
        #[cfg(debug_assertions)]
        let dir = data_dir.join("inventory-reorder-dev");

        #[cfg(not(debug_assertions))]
        let dir = data_dir.join("inventory-reorder");

        // 目录创建失败时沿用回退路径
        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("inventory.db");
        }
    }

    path.to_string_lossy().to_string()
}
