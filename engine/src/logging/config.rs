use std::collections::HashMap;
use std::str::FromStr;
use tracing::Level;

/// Per-scope level filter, parsed from strings like `warn,teleport=debug,input=trace`.
#[derive(Debug, Clone)]
pub struct LogConfig {
    global_level: Level,
    scope_levels: HashMap<String, Level>,
}

impl LogConfig {
    pub fn new() -> Self {
        Self {
            global_level: Level::WARN,
            scope_levels: HashMap::new(),
        }
    }

    pub fn from_env(env_var_name: &str) -> Self {
        match std::env::var(env_var_name) {
            Ok(value) => Self::parse(&value),
            Err(_) => Self::new(),
        }
    }

    /// Unknown levels are skipped; later entries override earlier ones.
    pub fn parse(config_str: &str) -> Self {
        let mut config = Self::new();

        for part in config_str.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part.split_once('=') {
                Some((scope, level)) => {
                    if let Ok(level) = Level::from_str(level.trim()) {
                        config.scope_levels.insert(scope.trim().to_string(), level);
                    }
                }
                None => {
                    if let Ok(level) = Level::from_str(part) {
                        config.global_level = level;
                    }
                }
            }
        }

        config
    }

    pub fn level_for(&self, scope: &str) -> Level {
        self.scope_levels
            .get(scope)
            .copied()
            .unwrap_or(self.global_level)
    }

    pub fn should_log(&self, scope: &str, level: Level) -> bool {
        level <= self.level_for(scope)
    }

    pub fn set_global_level(&mut self, level: Level) {
        self.global_level = level;
    }

    pub fn set_scope_level(&mut self, scope: impl Into<String>, level: Level) {
        self.scope_levels.insert(scope.into(), level);
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize logging from the given environment variable, e.g. `init_logging("GLADE_LOG")`.
///
/// The fmt subscriber itself still honours `RUST_LOG`; the scope filter is layered
/// on top by the `scoped_log!` family of macros. Subscribers are written to stderr
/// so runtimes can keep stdout for machine-readable output.
pub fn init_logging(env_var_name: &str) -> LogConfig {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trace")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let config = LogConfig::from_env(env_var_name);
    if !super::set_log_config(config.clone()) {
        tracing::debug!("log config already installed, ignoring {}", env_var_name);
    }
    config
}
