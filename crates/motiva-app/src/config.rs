use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use motiva_email::client::EmailConfig;

pub const DEFAULT_API_BASE_URL: &str = "https://api.motiva.app";
pub const DEFAULT_CHECKOUT_URL: &str = "https://buy.stripe.com/6oU5kbdZy3Jkce61b50Jq00";

/// Client configuration. Missing file means defaults; the email section is
/// optional and delivery is skipped without it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub checkout_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            checkout_url: DEFAULT_CHECKOUT_URL.to_string(),
            email: None,
        }
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.motiva.app").join("config.json"))
}

/// Load the config, falling back to defaults when the file is absent.
/// `MOTIVA_API_BASE_URL` and `MOTIVA_CHECKOUT_URL` override either way.
pub fn load_config(path: &Path) -> eyre::Result<AppConfig> {
    let mut config = if path.exists() {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
        serde_json::from_str(&contents)
            .map_err(|e| eyre::eyre!("malformed config at {}: {e}", path.display()))?
    } else {
        AppConfig::default()
    };

    if let Ok(url) = env::var("MOTIVA_API_BASE_URL")
        && !url.trim().is_empty()
    {
        config.api_base_url = url;
    }
    if let Ok(url) = env::var("MOTIVA_CHECKOUT_URL")
        && !url.trim().is_empty()
    {
        config.checkout_url = url;
    }

    Ok(config)
}

/// Write the config atomically with owner-only permissions: the email
/// section can carry account keys.
pub fn save_config(path: &Path, config: &AppConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path has no parent directory"))?;
    std::fs::create_dir_all(dir)?;

    let json = serde_json::to_string_pretty(config)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
