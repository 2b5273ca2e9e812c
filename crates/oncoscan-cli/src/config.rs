use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use oncoscan_client::ClientConfig;
use oncoscan_core::routes::DEFAULT_PREDICTION_ENDPOINT;

/// Version written into every saved config. Files claiming a higher
/// version come from a newer build and are refused.
const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OncoscanConfig {
    #[serde(default = "current_version")]
    pub config_version: u32,
    pub endpoint: String,
    /// `None` waits for the prediction service indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Opaque token from the auth service. Its presence is all the route
    /// guard looks at.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub session_token: Option<String>,
    pub updated_at: jiff::Timestamp,
}

fn current_version() -> u32 {
    CURRENT_VERSION
}

impl Default for OncoscanConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            endpoint: DEFAULT_PREDICTION_ENDPOINT.to_string(),
            request_timeout_secs: None,
            session_token: None,
            updated_at: jiff::Timestamp::now(),
        }
    }
}

impl OncoscanConfig {
    pub fn is_authenticated(&self) -> bool {
        self.session_token.is_some()
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self.endpoint.clone(),
            timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Redacted config info safe to print.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigInfo {
    pub endpoint: String,
    pub request_timeout_secs: Option<u64>,
    pub signed_in: bool,
    pub session_hint: Option<String>,
    pub updated_at: String,
}

/// Directory holding `config.json`. `ONCOSCAN_CONFIG_DIR` overrides the
/// platform default.
pub fn config_dir() -> eyre::Result<PathBuf> {
    if let Some(dir) = std::env::var_os("ONCOSCAN_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.oncoscan.cli"))
}

pub fn has_config(dir: &Path) -> bool {
    dir.join(CONFIG_FILE).exists()
}

pub fn load_config(dir: &Path) -> eyre::Result<OncoscanConfig> {
    let path = dir.join(CONFIG_FILE);
    let contents = std::fs::read(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Look at the version on its own first, so a file from a newer build is
    // refused with a clear message instead of a field-level parse error.
    let tag: VersionTag = serde_json::from_slice(&contents)?;
    if let Some(version) = tag.config_version
        && version > u64::from(CURRENT_VERSION)
    {
        return Err(eyre::eyre!(
            "config_version {version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update oncoscan."
        ));
    }

    Ok(serde_json::from_slice(&contents)?)
}

#[derive(Deserialize)]
struct VersionTag {
    #[serde(default)]
    config_version: Option<u64>,
}

/// Load the saved config, or defaults when none has been saved yet.
pub fn load_or_default(dir: &Path) -> eyre::Result<OncoscanConfig> {
    if has_config(dir) {
        load_config(dir)
    } else {
        tracing::debug!(dir = %dir.display(), "no config found, using defaults");
        Ok(OncoscanConfig::default())
    }
}

/// Replace the saved config. The file is written next to its final
/// location and renamed into place, readable only by the owner.
pub fn save_config(dir: &Path, config: &OncoscanConfig) -> eyre::Result<()> {
    std::fs::create_dir_all(dir)?;

    let stamped = OncoscanConfig {
        config_version: CURRENT_VERSION,
        ..config.clone()
    };

    let mut staged = tempfile::NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut staged, &stamped)?;
    staged.as_file().sync_all()?;

    let path = dir.join(CONFIG_FILE);
    staged
        .persist(&path)
        .map_err(|e| eyre::eyre!("failed to store config at {}: {}", path.display(), e.error))?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn delete_config(dir: &Path) -> eyre::Result<()> {
    let path = dir.join(CONFIG_FILE);
    match std::fs::remove_file(&path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "config deleted");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(eyre::eyre!("failed to delete config at {}: {e}", path.display())),
    }
}

pub fn config_info(config: &OncoscanConfig) -> ConfigInfo {
    ConfigInfo {
        endpoint: config.endpoint.clone(),
        request_timeout_secs: config.request_timeout_secs,
        signed_in: config.is_authenticated(),
        session_hint: config.session_token.as_deref().map(redact_token),
        updated_at: config.updated_at.to_string(),
    }
}

fn redact_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{prefix}...{suffix}")
}
