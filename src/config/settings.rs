use config::{Config, ConfigError, Environment, File};
use painel_api::HttpConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub connect_timeout_seconds: u64,
    pub cookie: Option<String>, // Cookie de sessão repassado sem interpretação
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
}

impl ApiSettings {
    pub fn http_config(&self) -> HttpConfig {
        let config = HttpConfig::new(self.base_url.clone())
            .with_timeouts(self.timeout_seconds, self.connect_timeout_seconds);

        match &self.cookie {
            Some(cookie) if !cookie.is_empty() => config.with_cookie(cookie.clone()),
            _ => config,
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load("config", &run_mode)
    }

    /// Carrega as configurações a partir de um diretório e de um modo de execução
    pub fn load(config_dir: &str, run_mode: &str) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("api.base_url", painel_api::DEFAULT_BASE_URL)?
            .set_default("api.timeout_seconds", 30_i64)?
            .set_default("api.connect_timeout_seconds", 5_i64)?
            .set_default("log.level", "info")?
            // Arquivo de configuração base
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false));

        // Variáveis de ambiente específicas
        if let Ok(base_url) = std::env::var("PAINEL_API_BASE_URL") {
            builder = builder.set_override("api.base_url", base_url)?;
        }
        if let Ok(cookie) = std::env::var("PAINEL_API_COOKIE") {
            builder = builder.set_override("api.cookie", cookie)?;
        }

        builder = builder.add_source(Environment::with_prefix("PAINEL").separator("__"));

        let s = builder.build()?;

        s.try_deserialize()
    }
}
