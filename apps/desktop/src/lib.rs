use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use folio_domain::config::{DesktopConfig, DocumentConfig};

const VIEWPORT_META: &str =
    r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#;

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
    document: DocumentConfig,
}

impl From<DesktopConfig> for DesktopApp {
    fn from(config: DesktopConfig) -> Self {
        let DesktopConfig { title, width, height, document, log: _ } = config;
        Self { title, width, height, document }
    }
}

impl DesktopApp {
    /// Markup injected into the webview `head`: the viewport meta plus configured assets.
    #[must_use]
    pub fn custom_head(&self) -> String {
        format!("{VIEWPORT_META}{}", folio_profile::render_head_assets(&self.document))
    }

    /// Opens the window and mounts `root`; blocks until the window is closed.
    pub fn launch(self, root: fn() -> Element) {
        tracing::info!(title = %self.title, width = self.width, height = self.height, "Opening window");

        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let cfg = Config::default().with_window(window).with_custom_head(self.custom_head());

        LaunchBuilder::desktop().with_cfg(cfg).launch(root);
    }
}
