//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 启动器环境变量（`PORT`、`DEBUG`）
//! 2. 前缀环境变量（`DATATAP_`）
//! 3. 配置文件（datatap.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File, Map};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["datatap", "datatap.local"];

/// 前缀环境变量
const ENV_PREFIX: &str = "DATATAP";

/// 启动器读取的端口变量
const PORT_VAR: &str = "PORT";

/// 启动器读取的调试开关变量
const DEBUG_VAR: &str = "DEBUG";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. `PORT` / `DEBUG` 环境变量
/// 2. 前缀环境变量（前缀 `DATATAP_`，层级分隔符 `__`）
/// 3. 配置文件（指定路径，或 datatap.toml / datatap.local.toml）
/// 4. 默认值
///
/// # 环境变量示例
/// - `PORT=8080`
/// - `DEBUG=yes`
/// - `DATATAP_SERVER__HOST=127.0.0.1`
/// - `DATATAP_LOG__JSON=true`
pub fn load_config(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_config_from_env(config_path, std::env::vars().collect())
}

/// 使用给定的环境变量集合加载配置
pub fn load_config_from_env(
    config_path: Option<&Path>,
    env: Map<String, String>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?
        .set_default("server.workers", 4)?
        .set_default("service.name", "Datatap REST API")?
        .set_default("debug", false)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 前缀环境变量
    // 例如: DATATAP_SERVER__PORT=8080 -> server.port
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(Some(env.clone())),
    );

    // 4. 启动器变量（最高优先级）
    let port = env.get(PORT_VAR).map(|raw| parse_port(raw)).transpose()?;
    let debug = env.get(DEBUG_VAR).map(|raw| parse_debug_flag(raw));
    builder = builder
        .set_override_option("server.port", port.map(i64::from))?
        .set_override_option("debug", debug)?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 解析 `PORT`
fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|e| ConfigError::ValidationError(format!("Invalid {} value '{}': {}", PORT_VAR, raw, e)))
}

/// 解析 `DEBUG`：true / 1 / yes（不区分大小写）视为开启
fn parse_debug_flag(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.server.workers == 0 {
        return Err(ConfigError::ValidationError(
            "Worker count cannot be 0".to_string(),
        ));
    }

    if config.service.name.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Service name cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Service: {}", config.service.name);
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Workers: {}", config.server.workers);
    tracing::info!("Debug: {}", config.debug);
    tracing::info!("Log Level: {}", config.effective_log_level());
    tracing::info!("Log JSON: {}", config.log.json);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn missing_file() -> &'static Path {
        Path::new("__datatap_test_no_such_dir__/datatap")
    }

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        // 使用显式空配置文件，避免读取工作目录下的 datatap.toml
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "# empty").unwrap();
        load_config_from_env(Some(file.path()), env(pairs))
    }

    #[test]
    fn test_defaults_without_env() {
        let config = load(&[]).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert!(!config.debug);
    }

    #[test]
    fn test_port_variable_overrides() {
        let config = load(&[("PORT", "8081")]).unwrap();
        assert_eq!(config.server.port, 8081);
    }

    #[test]
    fn test_port_variable_beats_prefixed_variable() {
        let config = load(&[("PORT", "8081"), ("DATATAP_SERVER__PORT", "9000")]).unwrap();
        assert_eq!(config.server.port, 8081);
    }

    #[test]
    fn test_prefixed_variables() {
        let config = load(&[
            ("DATATAP_SERVER__HOST", "127.0.0.1"),
            ("DATATAP_SERVER__PORT", "9000"),
            ("DATATAP_LOG__JSON", "true"),
        ])
        .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert!(config.log.json);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(matches!(
            load(&[("PORT", "not-a-port")]),
            Err(ConfigError::ValidationError(_))
        ));
        assert!(load(&[("PORT", "0")]).is_err());
    }

    #[test]
    fn test_debug_flag_values() {
        for raw in ["true", "TRUE", "1", "yes", "Yes"] {
            assert!(load(&[("DEBUG", raw)]).unwrap().debug, "{raw}");
        }
        for raw in ["false", "0", "no", "", "on"] {
            assert!(!load(&[("DEBUG", raw)]).unwrap().debug, "{raw}");
        }
    }

    #[test]
    fn test_config_file_values() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 7000\nworkers = 2\n\n[service]\nname = \"Lab API\"\n\n[log]\nlevel = \"warn\""
        )
        .unwrap();

        let config = load_config_from_env(Some(file.path()), env(&[])).unwrap();
        assert_eq!(config.server.port, 7000);
        assert_eq!(config.server.workers, 2);
        assert_eq!(config.service.name, "Lab API");
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_required_file_must_exist() {
        assert!(load_config_from_env(Some(missing_file()), env(&[])).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_workers() {
        let mut config = AppConfig::default();
        config.server.workers = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_service_name() {
        let mut config = AppConfig::default();
        config.service.name = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }
}
