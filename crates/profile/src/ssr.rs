use crate::view::StaticProfileView;
use dioxus::prelude::*;
use folio_domain::config::DocumentConfig;

const DOCTYPE: &str = "<!DOCTYPE html>";
const VIEWPORT: &str = "width=device-width, initial-scale=1.0";

/// Serializes [`StaticProfileView`] on its own, without hydration markers.
#[must_use]
pub fn render_fragment() -> String {
    let mut dom = VirtualDom::new(StaticProfileView);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Serializes a complete HTML5 page with the view mounted under `div#main`.
///
/// Stylesheets become `link rel="stylesheet"` tags and scripts become `script src` tags,
/// both in configuration order.
#[must_use]
pub fn render_document(config: &DocumentConfig) -> String {
    let DocumentConfig { title: page_title, lang, stylesheets, scripts } = config;

    // dioxus-html has no `html` element, so the root tag is written by hand.
    let page = dioxus_ssr::render_element(rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: VIEWPORT }
            title { "{page_title}" }
            {asset_tags(stylesheets, scripts)}
        }
        body {
            div { id: "main", StaticProfileView {} }
        }
    });

    format!(r#"{DOCTYPE}<html lang="{}">{page}</html>"#, escape_attribute(lang))
}

/// Serializes only the configured stylesheet and script tags, for hosts that own the `head`.
#[must_use]
pub fn render_head_assets(config: &DocumentConfig) -> String {
    dioxus_ssr::render_element(asset_tags(&config.stylesheets, &config.scripts))
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn asset_tags(stylesheets: &[String], scripts: &[String]) -> Element {
    rsx! {
        for href in stylesheets {
            link { key: "{href}", rel: "stylesheet", href: "{href}" }
        }
        for src in scripts {
            script { key: "{src}", src: "{src}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_is_stable_across_renders() {
        let first = render_fragment();
        for _ in 0..8 {
            assert_eq!(render_fragment(), first);
        }
    }

    #[test]
    fn fragment_has_no_hydration_markers() {
        let html = render_fragment();
        assert!(!html.contains("data-node-hydration"));
    }

    #[test]
    fn document_starts_with_doctype_and_lang() {
        let config = DocumentConfig { lang: "en-US".to_owned(), ..DocumentConfig::default() };
        let html = render_document(&config);
        assert!(html.starts_with("<!DOCTYPE html><html"));
        assert!(html.contains(r#"lang="en-US""#));
        assert!(html.contains("<title>CI/CD Pipeline Portfolio</title>"));
        assert!(html.contains(r#"<div id="main">"#));
        assert!(html.ends_with("</body></html>"));
        assert_eq!(html.matches("<html").count(), 1);
    }

    #[test]
    fn lang_from_config_cannot_break_out_of_the_attribute() {
        let config = DocumentConfig {
            lang: r#"en"><script>alert(1)</script>"#.to_owned(),
            ..DocumentConfig::default()
        };
        let html = render_document(&config);
        assert!(html.starts_with(
            r#"<!DOCTYPE html><html lang="en&quot;&gt;&lt;script&gt;alert(1)&lt;/script&gt;">"#
        ));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn attribute_escaping_covers_quotes_and_ampersands() {
        assert_eq!(escape_attribute("a&b'c"), "a&amp;b&#39;c");
        assert_eq!(escape_attribute("en-US"), "en-US");
    }

    #[test]
    fn assets_keep_configuration_order() {
        let config = DocumentConfig {
            stylesheets: vec!["/a.css".to_owned(), "/b.css".to_owned()],
            scripts: vec!["https://cdn.tailwindcss.com".to_owned()],
            ..DocumentConfig::default()
        };

        let head = render_head_assets(&config);
        let a = head.find("/a.css").expect("first stylesheet");
        let b = head.find("/b.css").expect("second stylesheet");
        let script = head.find("cdn.tailwindcss.com").expect("script");
        assert!(a < b && b < script, "unexpected order in {head}");
        assert_eq!(head.matches(r#"rel="stylesheet""#).count(), 2);
    }

    #[test]
    fn no_assets_render_no_tags() {
        let head = render_head_assets(&DocumentConfig::default());
        assert!(!head.contains("<link"));
        assert!(!head.contains("<script"));
    }
}
