//! 应用运行配置加载。

use std::env;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env: {0}")]
    Missing(String),
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// API 后端模式：本地 mock 数据或 AWS 远端占位。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiMode {
    Mock,
    Aws,
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    pub api_mode: ApiMode,
    pub mock_latency_ms: u64,
    pub fixture_seed: Option<u64>,
    pub snapshot_path: Option<String>,
    pub aws_endpoint: Option<String>,
    pub aws_token: Option<String>,
    pub session_ttl_seconds: u64,
}

impl AppConfig {
    /// 从环境变量读取配置。
    ///
    /// aws 模式要求 RMS_AWS_ENDPOINT 与 RMS_AWS_TOKEN 均存在。
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_addr = env::var("RMS_HTTP_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let api_mode = read_api_mode("RMS_API_MODE")?;
        let mock_latency_ms = read_u64_with_default("RMS_MOCK_LATENCY_MS", 300)?;
        let fixture_seed = read_optional_u64("RMS_FIXTURE_SEED")?;
        let snapshot_path = read_optional("RMS_SNAPSHOT_PATH");
        let aws_endpoint = read_optional("RMS_AWS_ENDPOINT");
        let aws_token = read_optional("RMS_AWS_TOKEN");
        let session_ttl_seconds = read_u64_with_default("RMS_SESSION_TTL_SECONDS", 8 * 3600)?;

        if api_mode == ApiMode::Aws {
            if aws_endpoint.is_none() {
                return Err(ConfigError::Missing("RMS_AWS_ENDPOINT".to_string()));
            }
            if aws_token.is_none() {
                return Err(ConfigError::Missing("RMS_AWS_TOKEN".to_string()));
            }
        }

        Ok(Self {
            http_addr,
            api_mode,
            mock_latency_ms,
            fixture_seed,
            snapshot_path,
            aws_endpoint,
            aws_token,
            session_ttl_seconds,
        })
    }
}

/// 读取 API 模式（缺省为 mock）。
fn read_api_mode(key: &str) -> Result<ApiMode, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(ApiMode::Mock),
    };
    match value.to_ascii_lowercase().as_str() {
        "mock" | "" => Ok(ApiMode::Mock),
        "aws" => Ok(ApiMode::Aws),
        _ => Err(ConfigError::Invalid(key.to_string(), value)),
    }
}

fn read_u64_with_default(key: &str, default: u64) -> Result<u64, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<u64>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

fn read_optional_u64(key: &str) -> Result<Option<u64>, ConfigError> {
    match env::var(key) {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(key.to_string(), value)),
        Err(_) => Ok(None),
    }
}
