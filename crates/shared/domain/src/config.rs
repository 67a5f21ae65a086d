use serde::Deserialize;
use std::path::PathBuf;

/// Host document around the profile view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    pub title: String,
    pub lang: String,
    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,
}

/// Log output shared by every host. Console logs always go to stderr.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Extra filter directives such as `folio_kernel=debug`.
    pub filter: Option<String>,
    /// Rolling file output; `None` keeps logging on the console only.
    pub file: Option<LogFileConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogFileConfig {
    pub dir: PathBuf,
    pub rotation: LogRotation,
    pub max_files: usize,
    pub json: bool,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

/// Settings for the static render CLI.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Destination file; `None` writes to stdout.
    pub output: Option<PathBuf>,
    pub document: DocumentConfig,
    pub log: LogConfig,
}

/// Settings for the desktop window host.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub document: DocumentConfig,
    pub log: LogConfig,
}

// --- Default ---

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: "CI/CD Pipeline Portfolio".to_owned(),
            lang: "en".to_owned(),
            stylesheets: Vec::new(),
            scripts: Vec::new(),
        }
    }
}

impl Default for LogFileConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from("logs"), rotation: LogRotation::Daily, max_files: 10, json: false }
    }
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            title: "David Vizena | Portfolio".to_owned(),
            width: 1200.0,
            height: 800.0,
            document: DocumentConfig::default(),
            log: LogConfig::default(),
        }
    }
}
