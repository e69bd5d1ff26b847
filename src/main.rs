use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use alex_time::config::{self, Config};
use alex_time::{page, shell, telemetry, Environment};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => config::load_config(path).await?,
        None => Config::default(),
    };
    args.apply(&mut config);

    telemetry::setup(config.environment);
    info!("{}", *shell::BANNER);

    let template = tokio::fs::read_to_string(&config.template).await?;
    let pages = page::prerender(&config, &template).await?;

    println!(
        "Prerendered {} {} pages into {}",
        pages.len(),
        config.environment,
        config.output.display()
    );

    Ok(())
}

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// The path to a configuration file describing the pages to prerender.
    #[clap(short, long, value_parser)]
    config: Option<String>,

    /// Overrides the environment the pages are prepared for.
    #[clap(short, long, value_enum)]
    environment: Option<Environment>,

    /// Overrides the page template built by Trunk.
    #[clap(short, long)]
    template: Option<PathBuf>,

    /// Overrides the directory the pages are written into.
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// The routes to prerender, replacing those in the configuration file.
    routes: Vec<String>,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(environment) = self.environment {
            config.environment = environment;
        }

        if let Some(template) = &self.template {
            config.template = template.clone();
        }

        if let Some(output) = &self.output {
            config.output = output.clone();
        }

        if !self.routes.is_empty() {
            config.routes = self.routes.clone();
        }
    }
}
