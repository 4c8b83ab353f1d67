use anyhow::{Result, bail};

use super::{AppConfig, defaults};

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if cfg.store.path.as_os_str().is_empty() {
        errors.push("store.path must not be empty".to_string());
    }

    if cfg.auth.jwt_secret.trim().is_empty() {
        errors.push("auth.jwt_secret must not be empty".to_string());
    }

    if cfg.auth.polka_api_key.trim().is_empty() {
        errors.push("auth.polka_api_key must not be empty".to_string());
    }

    if !cfg!(debug_assertions) {
        if cfg.auth.jwt_secret == defaults::DEV_JWT_SECRET {
            errors.push("auth.jwt_secret must be set in release builds".to_string());
        }
        if cfg.auth.polka_api_key == defaults::DEV_POLKA_API_KEY {
            errors.push("auth.polka_api_key must be set in release builds".to_string());
        }
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}
