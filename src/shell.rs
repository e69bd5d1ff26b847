use std::fmt::Display;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::route::Route;

/// The element the application is mounted into.
pub const MOUNT_POINT: &str = "body > main";

/// Set on the mount point by the prerenderer, naming the path its markup
/// was rendered for.
pub const PRERENDERED_ATTRIBUTE: &str = "data-prerendered";

lazy_static! {
    pub static ref BANNER: String = format!(
        "ALEX/OS {} (c) {}",
        version!("v"),
        chrono::Utc::now().year()
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

/// How the application takes over its mount point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    /// Discard whatever is in the mount point and render from scratch.
    Render,
    /// Attach to markup that was prerendered for the page at the current
    /// path.
    Hydrate,
}

impl Environment {
    /// The environment this build was compiled for, taken from
    /// `ALEX_TIME_ENV` at build time or the build profile otherwise.
    pub fn current() -> Self {
        Self::from_flag(option_env!("ALEX_TIME_ENV"))
    }

    /// Only an explicit `development` selects development; every other value
    /// is treated as a production build.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("development") => Self::Development,
            Some(_) => Self::Production,
            None if cfg!(debug_assertions) => Self::Development,
            None => Self::Production,
        }
    }

    pub fn log_level(&self) -> log::Level {
        match self {
            Self::Development => log::Level::Debug,
            Self::Production => log::Level::Info,
        }
    }

    /// Prerendered markup is only reused when it shows the same page as the
    /// location, so `/7.5` and `/7.5/` share their markup.
    pub fn entry_point(&self, prerendered: Option<&str>, location: &str) -> EntryPoint {
        match (self, prerendered) {
            (Self::Production, Some(path)) if Route::resolve(path) == Route::resolve(location) => {
                EntryPoint::Hydrate
            }
            _ => EntryPoint::Render,
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Mounts the router into [`MOUNT_POINT`] using the entry point that fits
/// the environment and whatever markup is already on the page.
#[cfg(feature = "wasm")]
pub fn start(environment: Environment) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsValue;

    use crate::client::App;

    if environment == Environment::Development {
        console_error_panic_hook::set_once();
    }

    wasm_logger::init(wasm_logger::Config::new(environment.log_level()));
    log::info!("{}", *BANNER);

    let root = gloo::utils::document()
        .query_selector(MOUNT_POINT)?
        .ok_or_else(|| JsValue::from_str(&format!("mount point `{MOUNT_POINT}` not found")))?;

    let location = gloo::utils::window().location().pathname()?;
    let prerendered = root.get_attribute(PRERENDERED_ATTRIBUTE);

    match environment.entry_point(prerendered.as_deref(), &location) {
        EntryPoint::Hydrate => {
            log::debug!("Hydrating markup prerendered for {location}");
            yew::Renderer::<App>::with_root(root).hydrate();
        }
        EntryPoint::Render => {
            log::debug!("Rendering {location} in {environment} mode");
            root.set_inner_html("");
            yew::Renderer::<App>::with_root(root).render();
        }
    }

    Ok(())
}
