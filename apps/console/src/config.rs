use serde::{Deserialize, Serialize};

const DEFAULT_PLAYBACK_INTERVAL_MS: u32 = 400;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppProfile {
    Dev,
    Prod,
}

impl AppProfile {
    pub fn from_env(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("prod") | Some("production") => Self::Prod,
            _ => Self::Dev,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub profile: AppProfile,
    /// Engine filter to preselect on the cross-engine pages, if any.
    pub default_engine: Option<String>,
    /// Delay between replayed alerts in the demo playback.
    pub playback_interval_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: AppProfile::Dev,
            default_engine: None,
            playback_interval_ms: DEFAULT_PLAYBACK_INTERVAL_MS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        crate::config::load_dotenv();

        let mut config = Self::default();

        config.profile = AppProfile::from_env(read_env("AEGIS_PROFILE"));

        if let Some(engine) = read_env("AEGIS_DEFAULT_ENGINE") {
            config.default_engine = Some(engine);
        }

        if let Some(ms) =
            read_env("AEGIS_PLAYBACK_INTERVAL_MS").and_then(|value| value.parse::<u32>().ok())
        {
            config.playback_interval_ms = ms.max(50);
        }

        config
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| option_env_from_build(key).map(|s| s.to_string()))
}

fn option_env_from_build(key: &str) -> Option<&'static str> {
    match key {
        "AEGIS_PROFILE" => option_env!("AEGIS_PROFILE"),
        "AEGIS_DEFAULT_ENGINE" => option_env!("AEGIS_DEFAULT_ENGINE"),
        "AEGIS_PLAYBACK_INTERVAL_MS" => option_env!("AEGIS_PLAYBACK_INTERVAL_MS"),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    if let Err(err) = dotenvy::dotenv() {
        if !matches!(err, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            tracing::warn!("failed to load .env: {err}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn load_dotenv() {}
