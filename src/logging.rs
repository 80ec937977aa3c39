// Logging - tracing-subscriber writing compact events to stderr.
// RUST_LOG, when set, replaces the configured level entirely.

use crate::core::TutorialError;
use tracing_subscriber::EnvFilter;

/// Third-party targets that are too chatty at debug level.
const QUIET_TARGETS: &[(&str, &str)] = &[("rustyline", "warn")];

/// Filter directives for `level`, with noisy crates held back.
#[must_use]
pub fn filter_directives(level: &str) -> String {
    let mut directives = vec![level.to_string()];
    for (target, lvl) in QUIET_TARGETS {
        directives.push(format!("{target}={lvl}"));
    }
    directives.join(",")
}

pub fn build_filter(level: &str) -> Result<EnvFilter, TutorialError> {
    let directives = filter_directives(level);
    EnvFilter::try_new(&directives)
        .map_err(|e| TutorialError::Logging(format!("invalid log filter '{directives}': {e}")))
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_logging(level: &str) -> Result<(), TutorialError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| TutorialError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives() {
        assert_eq!(filter_directives("debug"), "debug,rustyline=warn");
    }

    #[test]
    fn test_build_filter() {
        assert!(build_filter("info").is_ok());
        assert!(build_filter("pgtutor=trace").is_ok());
        assert!(matches!(build_filter("not a level!!"), Err(TutorialError::Logging(_))));
    }
}
