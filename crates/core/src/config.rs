use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_MYMEMORY_URL: &str = "https://api.mymemory.translated.net";
pub const DEFAULT_LIBRETRANSLATE_URL: &str = "https://libretranslate.de";
pub const DEFAULT_GOOGLE_TRANSLATE_URL: &str = "https://translate.googleapis.com";
pub const PREFERRED_LANGUAGE_KEY: &str = "preferred-language";
pub const PREFS_DIR_NAME: &str = "dairy-translate";
pub const PREFS_FILE_NAME: &str = "preferences.json";
pub const ENV_MYMEMORY_URL: &str = "DAIRY_MYMEMORY_URL";
pub const ENV_LIBRETRANSLATE_URL: &str = "DAIRY_LIBRETRANSLATE_URL";
pub const ENV_GOOGLE_TRANSLATE_URL: &str = "DAIRY_GOOGLE_TRANSLATE_URL";
pub const ENV_PREFS_PATH: &str = "DAIRY_PREFS_PATH";
pub const ENV_TRANSLATE_TIMEOUT_MS: &str = "DAIRY_TRANSLATE_TIMEOUT_MS";

/// Base URLs of the three translation providers, in the order they are tried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderEndpoints {
    pub mymemory: Url,
    pub libretranslate: Url,
    pub google: Url,
}

impl ProviderEndpoints {
    pub fn new(mymemory: &str, libretranslate: &str, google: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            mymemory: parse_endpoint("mymemory", mymemory)?,
            libretranslate: parse_endpoint("libretranslate", libretranslate)?,
            google: parse_endpoint("google", google)?,
        })
    }

    /// Points every provider at the same server.
    pub fn all_at(base: &str) -> Result<Self, ConfigError> {
        Self::new(base, base, base)
    }
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self::new(
            DEFAULT_MYMEMORY_URL,
            DEFAULT_LIBRETRANSLATE_URL,
            DEFAULT_GOOGLE_TRANSLATE_URL,
        )
        .expect("default provider urls are valid")
    }
}

fn parse_endpoint(name: &'static str, value: &str) -> Result<Url, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidEndpoint {
            name,
            reason: "empty url".to_owned(),
        });
    }
    Url::parse(value.trim()).map_err(|e| ConfigError::InvalidEndpoint {
        name,
        reason: e.to_string(),
    })
}

/// Joins a provider base URL with an API path, keeping any path prefix the
/// base already carries.
pub(crate) fn endpoint_url(base: &Url, path: &str) -> Result<Url, url::ParseError> {
    let joined = format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoints: ProviderEndpoints,
    pub prefs_path: PathBuf,
    /// Per-request provider timeout. `None` lets a request wait indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoints: ProviderEndpoints::default(),
            prefs_path: default_prefs_path(),
            request_timeout: None,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported language code: {0:?}")]
    UnknownLanguage(String),
    #[error("invalid {name} endpoint: {reason}")]
    InvalidEndpoint { name: &'static str, reason: String },
    #[error("request timeout must be > 0 ms")]
    ZeroTimeout,
    #[error("request timeout is not a number of milliseconds: {0:?}")]
    InvalidTimeout(String),
}

pub fn default_prefs_path() -> PathBuf {
    let mut dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    dir.push(PREFS_DIR_NAME);
    dir.push(PREFS_FILE_NAME);
    dir
}

pub fn parse_timeout_ms(raw: &str) -> Result<Duration, ConfigError> {
    let ms: u64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidTimeout(raw.to_owned()))?;
    if ms == 0 {
        return Err(ConfigError::ZeroTimeout);
    }
    Ok(Duration::from_millis(ms))
}

pub trait Env {
    fn var(&self, key: &str) -> Option<String>;
}

#[derive(Clone, Debug, Default)]
pub struct StdEnv;

impl Env for StdEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[derive(Clone, Debug, Default)]
pub struct MapEnv {
    vars: std::collections::BTreeMap<String, String>,
}

impl MapEnv {
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl Env for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

pub fn resolve_string_with_default(
    cli_value: Option<String>,
    env_key: &str,
    env: &impl Env,
    default: &str,
) -> String {
    match cli_value {
        Some(v) => v,
        None => env.var(env_key).unwrap_or_else(|| default.to_owned()),
    }
}

pub fn resolve_optional_string(
    cli_value: Option<String>,
    env_key: &str,
    env: &impl Env,
) -> Option<String> {
    match cli_value {
        Some(v) => Some(v),
        None => env.var(env_key),
    }
}

pub fn resolve_timeout(
    cli_value: Option<u64>,
    env_key: &str,
    env: &impl Env,
) -> Result<Option<Duration>, ConfigError> {
    match cli_value {
        Some(0) => Err(ConfigError::ZeroTimeout),
        Some(ms) => Ok(Some(Duration::from_millis(ms))),
        None => env.var(env_key).map(|v| parse_timeout_ms(&v)).transpose(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints_parse() {
        let endpoints = ProviderEndpoints::default();
        assert_eq!(endpoints.mymemory.host_str(), Some("api.mymemory.translated.net"));
        assert_eq!(endpoints.libretranslate.host_str(), Some("libretranslate.de"));
        assert_eq!(endpoints.google.host_str(), Some("translate.googleapis.com"));
    }

    #[test]
    fn empty_endpoint_is_rejected() {
        let err = ProviderEndpoints::new("", DEFAULT_LIBRETRANSLATE_URL, DEFAULT_GOOGLE_TRANSLATE_URL)
            .expect_err("empty url");
        assert!(matches!(err, ConfigError::InvalidEndpoint { name: "mymemory", .. }));
    }

    #[test]
    fn endpoint_url_keeps_base_path_prefix() {
        let base = Url::parse("http://localhost:5000/libre/").expect("url");
        let url = endpoint_url(&base, "translate").expect("joined");
        assert_eq!(url.as_str(), "http://localhost:5000/libre/translate");

        let bare = Url::parse("http://127.0.0.1:1234").expect("url");
        let url = endpoint_url(&bare, "/get").expect("joined");
        assert_eq!(url.as_str(), "http://127.0.0.1:1234/get");
    }

    #[test]
    fn resolve_string_with_default_cli_takes_precedence() {
        let env = MapEnv::default().with_var(ENV_MYMEMORY_URL, "env");
        let v = resolve_string_with_default(Some("cli".to_owned()), ENV_MYMEMORY_URL, &env, "def");
        assert_eq!(v, "cli");
    }

    #[test]
    fn resolve_string_with_default_env_used_when_cli_missing() {
        let env = MapEnv::default().with_var(ENV_MYMEMORY_URL, "env");
        let v = resolve_string_with_default(None, ENV_MYMEMORY_URL, &env, "def");
        assert_eq!(v, "env");
    }

    #[test]
    fn resolve_string_with_default_default_used_when_both_missing() {
        let env = MapEnv::default();
        let v = resolve_string_with_default(None, ENV_MYMEMORY_URL, &env, "def");
        assert_eq!(v, "def");
    }

    #[test]
    fn timeout_is_off_unless_configured() {
        let env = MapEnv::default();
        assert_eq!(resolve_timeout(None, ENV_TRANSLATE_TIMEOUT_MS, &env), Ok(None));
    }

    #[test]
    fn timeout_from_env_is_parsed_and_validated() {
        let env = MapEnv::default().with_var(ENV_TRANSLATE_TIMEOUT_MS, "2500");
        assert_eq!(
            resolve_timeout(None, ENV_TRANSLATE_TIMEOUT_MS, &env),
            Ok(Some(Duration::from_millis(2500)))
        );

        let env = MapEnv::default().with_var(ENV_TRANSLATE_TIMEOUT_MS, "0");
        assert_eq!(
            resolve_timeout(None, ENV_TRANSLATE_TIMEOUT_MS, &env),
            Err(ConfigError::ZeroTimeout)
        );

        let env = MapEnv::default().with_var(ENV_TRANSLATE_TIMEOUT_MS, "soon");
        assert!(matches!(
            resolve_timeout(None, ENV_TRANSLATE_TIMEOUT_MS, &env),
            Err(ConfigError::InvalidTimeout(_))
        ));
    }

    #[test]
    fn default_prefs_path_ends_with_file_name() {
        let path = default_prefs_path();
        assert!(path.ends_with(format!("{PREFS_DIR_NAME}/{PREFS_FILE_NAME}")));
    }
}
