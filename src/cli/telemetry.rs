use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Base filter: the chosen level for this crate, quieter transport crates.
/// `RUST_LOG` directives are applied on top.
///
/// # Errors
/// Returns an error if a directive cannot be parsed.
pub fn filter(verbosity_level: Option<Level>) -> Result<EnvFilter> {
    let verbosity_level = verbosity_level.unwrap_or(Level::ERROR);

    Ok(EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy()
        .add_directive("hyper=error".parse()?)
        .add_directive("hyper_util=error".parse()?)
        .add_directive("reqwest=error".parse()?))
}

/// Initialize logging. Output goes to stderr so command results on stdout
/// stay machine readable.
///
/// # Errors
///
/// Returns an error if the subscriber cannot be installed
pub fn init(verbosity_level: Option<Level>) -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(false)
        .with_target(false);

    let subscriber = Registry::default()
        .with(fmt_layer)
        .with(filter(verbosity_level)?);
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_filter_defaults_to_error() -> Result<()> {
        temp_env::with_var("RUST_LOG", None::<&str>, || {
            let filter = filter(None)?;
            assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
            Ok(())
        })
    }

    #[test]
    fn test_filter_uses_verbosity() -> Result<()> {
        temp_env::with_var("RUST_LOG", None::<&str>, || {
            let filter = filter(Some(Level::DEBUG))?;
            assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
            Ok(())
        })
    }
}
