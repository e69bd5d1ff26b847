use tracing_subscriber::{filter::LevelFilter, prelude::*};

use crate::shell::Environment;

/// Installs the global subscriber. Records emitted through `log` by the
/// shared components are forwarded into it as well.
pub fn setup(environment: Environment) {
    tracing_subscriber::registry()
        .with(level_filter(environment))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn level_filter(environment: Environment) -> LevelFilter {
    match environment {
        Environment::Development => LevelFilter::DEBUG,
        Environment::Production => LevelFilter::INFO,
    }
}
