use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::shell::Environment;

#[instrument(skip(path), err(Debug))]
pub async fn load_config<P: Into<PathBuf>>(path: P) -> Result<Config, Box<dyn std::error::Error>> {
    let path = path.into();
    let config = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config)?;
    Ok(config)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub environment: Environment,

    /// The page built by Trunk, with an empty `<main></main>` mount point.
    #[serde(default = "default_template")]
    pub template: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default = "default_routes")]
    pub routes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            environment: Environment::default(),
            template: default_template(),
            output: default_output(),
            routes: default_routes(),
        }
    }
}

fn default_title() -> String {
    "Alex Time".into()
}

fn default_template() -> PathBuf {
    "dist/index.html".into()
}

fn default_output() -> PathBuf {
    "dist".into()
}

fn default_routes() -> Vec<String> {
    vec!["/".into(), "/-/not-found".into()]
}
