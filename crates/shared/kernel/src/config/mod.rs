use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "FOLIO";
/// Separator between nested keys in environment variable names.
pub const ENV_SEPARATOR: &str = "__";

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

fn format_context(context: &Option<Cow<'static, str>>) -> String {
    context.as_ref().map_or_else(String::new, |c| format!(" ({c})"))
}

trait ConfigResultExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T>;
}

impl<T> ConfigResultExt<T> for std::result::Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Defaults**: Fields missing from every source fall back to `T`'s serde defaults.
/// 2. **Base File**: Loads settings from `path` when given. The format (TOML, YAML, JSON, ...)
///    is inferred from the extension. A named file that does not exist is an error.
/// 3. **Environment Overrides**: Overlays values from environment variables prefixed with `FOLIO__`.
///    Nested structures are accessed using double underscores (e.g., `FOLIO__DOCUMENT__TITLE`
///    maps to `document.title`).
///
/// # Errors
/// This function will return an error if:
/// * The specified configuration file cannot be found or parsed.
/// * The merged settings do not match the structure of type `T`.
///
/// # Example
/// ```rust,no_run
/// use folio_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     title: String,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T>
where
    T: DeserializeOwned,
{
    load_layered(path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
}

fn load_layered<T>(path: Option<impl AsRef<Path>>, env: Environment) -> Result<T>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = path {
        let path = path.as_ref();
        info!("Loading config from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    } else {
        debug!("No config file given, using defaults and environment");
    }

    let config = builder
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
