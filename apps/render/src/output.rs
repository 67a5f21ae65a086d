use folio_domain::Badge;
use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Failures while emitting rendered output.
#[derive(Debug, thiserror::Error)]
pub(crate) enum OutputError {
    #[error("Output error{}: {source}", format_context(.context))]
    Io { source: io::Error, context: Option<Cow<'static, str>> },
}

fn format_context(context: &Option<Cow<'static, str>>) -> String {
    context.as_ref().map_or_else(String::new, |c| format!(" ({c})"))
}

trait IoResultExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, OutputError>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, OutputError> {
        self.map_err(|source| OutputError::Io { source, context: Some(context.into()) })
    }
}

/// Writes `html` to `path`, creating missing parent directories, or to stdout when `None`.
#[instrument(skip(html), fields(bytes = html.len()))]
pub(crate) fn write_markup(html: &str, path: Option<&Path>) -> Result<(), OutputError> {
    let Some(path) = path else {
        debug!("Writing markup to stdout");
        return write_stdout(html.as_bytes());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .context(format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(path, html).context(format!("Failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());

    Ok(())
}

/// One `label<TAB>tone` line per badge.
pub(crate) fn badge_lines(badges: &[Badge]) -> String {
    badges.iter().map(|b| format!("{}\t{}\n", b.label, b.tone)).collect()
}

pub(crate) fn write_stdout(bytes: &[u8]) -> Result<(), OutputError> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(bytes).context("Failed to write to stdout")?;
    stdout.flush().context("Failed to flush stdout")
}
