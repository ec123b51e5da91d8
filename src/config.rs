use config::{Config, ConfigBuilder, ConfigError, File};
use config::builder::DefaultState;
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "order-cleaner";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3333;
const DEFAULT_BODY_LIMIT_BYTES: usize = 2 * 1024 * 1024;
const DEFAULT_LOG_LEVEL: &str = "info";

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 请求体上限
    pub body_limit_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 未设置 RUST_LOG 时使用
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            },
            logging: LoggingConfig {
                level: DEFAULT_LOG_LEVEL.to_string(),
            },
        }
    }
}

impl AppConfig {
    /// 加载配置: 内置默认值 < order-cleaner.toml < 环境变量
    pub fn load() -> Result<Self, ConfigError> {
        defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.body_limit_bytes", std::env::var("BODY_LIMIT_BYTES").ok())?
            .set_override_option("logging.level", std::env::var("LOG_LEVEL").ok())?
            .build()?
            .try_deserialize()
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.host", DEFAULT_HOST)?
        .set_default("server.port", i64::from(DEFAULT_PORT))?
        .set_default("server.body_limit_bytes", DEFAULT_BODY_LIMIT_BYTES as i64)?
        .set_default("logging.level", DEFAULT_LOG_LEVEL)
}
