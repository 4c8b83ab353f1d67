use ::config as config_rs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Deserializes a config type from `PREFIX`-prefixed variables, nested with
/// `SEPARATOR` (`APP_STORE__PATH` lands in `store.path`).
pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "APP";
    const SEPARATOR: &'static str = "__";

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Reads the process environment after loading `.env` from the working
    /// directory, if there is one.
    fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_source(Self::environment())
    }

    /// Reads an explicit set of variables instead of the process environment.
    fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: config_rs::Map<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::from_source(Self::environment().source(Some(vars)))
    }

    fn environment() -> config_rs::Environment {
        config_rs::Environment::with_prefix(Self::PREFIX)
            .prefix_separator("_")
            .separator(Self::SEPARATOR)
            .try_parsing(true)
    }

    fn from_source(source: config_rs::Environment) -> Result<Self> {
        let cfg = config_rs::Config::builder()
            .add_source(source)
            .build()
            .context("failed to read environment variables for config")?
            .try_deserialize::<Self>()
            .context("failed to deserialize environment into config")?;

        cfg.validate()?;
        Ok(cfg)
    }
}
