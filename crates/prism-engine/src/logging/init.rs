use std::sync::Once;

/// Environment variable consulted for a filter before `RUST_LOG`.
pub const LOG_ENV: &str = "PRISM_LOG";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "debug",
/// "prism_scene=trace,wgpu_core=warn"). When unset, `PRISM_LOG` and then
/// `RUST_LOG` are tried before falling back to `info` with the chatty wgpu
/// internals capped at `warn`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    /// Prefix records with a timestamp.
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: true,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match resolve_filter(config.env_filter, |name| std::env::var(name).ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder
                    .filter_level(log::LevelFilter::Info)
                    .filter_module("wgpu_core", log::LevelFilter::Warn)
                    .filter_module("wgpu_hal", log::LevelFilter::Warn)
                    .filter_module("naga", log::LevelFilter::Warn);
            }
        }

        builder.write_style(config.write_style);
        if !config.timestamps {
            builder.format_timestamp(None);
        }

        if let Err(err) = builder.try_init() {
            // Another logger was installed first (e.g. by a test harness).
            eprintln!("prism: logger already initialized: {err}");
            return;
        }

        log::debug!("logging initialized");
    });
}

/// Picks the filter string: explicit config, then `PRISM_LOG`, then `RUST_LOG`.
fn resolve_filter<F>(explicit: Option<String>, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    explicit
        .or_else(|| lookup(LOG_ENV))
        .or_else(|| lookup("RUST_LOG"))
        .filter(|f| !f.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| pairs.iter().find(|(k, _)| *k == name).map(|(_, v)| v.to_string())
    }

    #[test]
    fn explicit_filter_wins() {
        let got = resolve_filter(Some("trace".into()), env(&[("PRISM_LOG", "warn")]));
        assert_eq!(got.as_deref(), Some("trace"));
    }

    #[test]
    fn prism_log_before_rust_log() {
        let got = resolve_filter(None, env(&[("RUST_LOG", "error"), ("PRISM_LOG", "debug")]));
        assert_eq!(got.as_deref(), Some("debug"));
    }

    #[test]
    fn rust_log_as_last_resort() {
        let got = resolve_filter(None, env(&[("RUST_LOG", "error")]));
        assert_eq!(got.as_deref(), Some("error"));
    }

    #[test]
    fn blank_filter_means_default() {
        assert_eq!(resolve_filter(None, env(&[("PRISM_LOG", "  ")])), None);
        assert_eq!(resolve_filter(None, env(&[])), None);
    }
}
