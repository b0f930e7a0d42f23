use std::env;
use std::path::Path;

use secrecy::SecretString;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{Result, SqlMorphError};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Bind address for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
        }
    }
}

/// Connection settings for the completion endpoint. The API key is never
/// serialized or logged.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: SecretString,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

/// Immutable service settings, loaded once at boot and passed by reference
/// to whichever component needs them.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub llm: LlmConfig,
}

/// On-disk shape of `sqlmorph.toml`. Credentials are deliberately not part
/// of the file format.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawSettings {
    server: ServerConfig,
    llm: RawLlmConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawLlmConfig {
    base_url: String,
    model: String,
    timeout_secs: u64,
}

impl Default for RawLlmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Load configuration with the following precedence:
    /// 1. Environment variables (including a `.env` file if present)
    /// 2. `sqlmorph.toml` in the current directory
    /// 3. Defaults
    ///
    /// Fails if `OPENAI_API_KEY` is absent: the service refuses to start
    /// without a credential for the completion endpoint.
    pub fn load() -> Result<Self> {
        load_dotenv();

        let raw = load_config_file()?;
        let raw = apply_env_overrides(raw);
        let api_key = env::var("OPENAI_API_KEY").ok();

        let settings = Self::from_parts(raw, api_key)?;
        info!(
            host = %settings.server.host,
            port = settings.server.port,
            model = %settings.llm.model,
            "configuration loaded"
        );
        Ok(settings)
    }

    fn from_parts(raw: RawSettings, api_key: Option<String>) -> Result<Self> {
        let api_key = api_key.filter(|k| !k.is_empty()).ok_or_else(|| {
            SqlMorphError::Configuration(
                "OPENAI_API_KEY environment variable is required".into(),
            )
        })?;

        if raw.llm.timeout_secs == 0 {
            return Err(SqlMorphError::Configuration(
                "llm.timeout_secs must be greater than zero".into(),
            ));
        }

        Ok(Self {
            server: raw.server,
            llm: LlmConfig {
                api_key: SecretString::from(api_key),
                base_url: raw.llm.base_url,
                model: raw.llm.model,
                timeout_secs: raw.llm.timeout_secs,
            },
        })
    }
}

fn load_dotenv() {
    if Path::new(".env").exists() {
        if let Err(e) = dotenv::from_filename(".env") {
            warn!("failed to load .env file: {}", e);
        }
    }
}

fn load_config_file() -> Result<RawSettings> {
    let path = Path::new("sqlmorph.toml");
    if !path.exists() {
        return Ok(RawSettings::default());
    }

    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| SqlMorphError::Configuration(format!("failed to parse sqlmorph.toml: {e}")))
}

fn apply_env_overrides(mut raw: RawSettings) -> RawSettings {
    if let Ok(host) = env::var("SQLMORPH_HOST") {
        raw.server.host = host;
    }
    if let Ok(port) = env::var("SQLMORPH_PORT") {
        if let Ok(port) = port.parse() {
            raw.server.port = port;
        }
    }
    if let Ok(url) = env::var("SQLMORPH_BASE_URL") {
        raw.llm.base_url = url;
    }
    if let Ok(model) = env::var("SQLMORPH_MODEL") {
        raw.llm.model = model;
    }
    if let Ok(timeout) = env::var("SQLMORPH_TIMEOUT_SECS") {
        if let Ok(secs) = timeout.parse() {
            raw.llm.timeout_secs = secs;
        }
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn missing_api_key_fails_validation() {
        let err = Settings::from_parts(RawSettings::default(), None).unwrap_err();
        assert!(matches!(err, SqlMorphError::Configuration(_)));

        let err = Settings::from_parts(RawSettings::default(), Some(String::new())).unwrap_err();
        assert!(matches!(err, SqlMorphError::Configuration(_)));
    }

    #[test]
    fn defaults_apply_when_only_api_key_is_given() {
        let settings =
            Settings::from_parts(RawSettings::default(), Some("sk-test".into())).unwrap();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.llm.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.llm.model, DEFAULT_MODEL);
        assert_eq!(settings.llm.api_key.expose_secret(), "sk-test");
    }

    #[test]
    fn toml_sections_parse_with_partial_overrides() {
        let raw: RawSettings = toml::from_str(
            r#"
            [server]
            port = 9100

            [llm]
            model = "gpt-4o"
            "#,
        )
        .unwrap();
        let settings = Settings::from_parts(raw, Some("sk-test".into())).unwrap();
        assert_eq!(settings.server.port, 9100);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.llm.model, "gpt-4o");
        assert_eq!(settings.llm.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut raw = RawSettings::default();
        raw.llm.timeout_secs = 0;
        let err = Settings::from_parts(raw, Some("sk-test".into())).unwrap_err();
        assert!(matches!(err, SqlMorphError::Configuration(_)));
    }
}
