use std::sync::Once;

/// Filter used when neither the config nor `RUST_LOG` names one.
const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Logger configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter syntax, e.g. "info" or "lightgt_engine=debug,wgpu_core=warn".
    pub env_filter: Option<String>,

    /// ANSI coloring of the output.
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = filter_directives(config.env_filter, std::env::var("RUST_LOG").ok());

        env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .init();

        log::debug!("logging initialized with filter {filter:?}");
    });
}

/// Configured filter, then `RUST_LOG`, then [`DEFAULT_FILTER`].
fn filter_directives(configured: Option<String>, env: Option<String>) -> String {
    configured
        .or(env)
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_filter_wins_over_env() {
        let directives = filter_directives(Some("debug".into()), Some("trace".into()));
        assert_eq!(directives, "debug");
    }

    #[test]
    fn env_filter_used_when_unconfigured() {
        let directives = filter_directives(None, Some("lightgt_engine=trace".into()));
        assert_eq!(directives, "lightgt_engine=trace");
    }

    #[test]
    fn default_filter_quiets_wgpu_internals() {
        let directives = filter_directives(None, None);
        assert!(directives.starts_with("info,"));
        for module in ["wgpu_core", "wgpu_hal", "naga"] {
            assert!(directives.contains(&format!("{module}=warn")));
        }
    }
}
