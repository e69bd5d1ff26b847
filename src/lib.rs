#[macro_use]
extern crate lazy_static;

#[macro_use]
mod macros;

pub mod client;
pub mod components;
pub mod formatters;
pub mod hours;
pub mod route;
pub mod shell;

#[cfg(feature = "cli")]
pub mod config;
#[cfg(feature = "cli")]
pub mod page;
#[cfg(feature = "cli")]
pub mod telemetry;

// Export components for both SSR and WASM usage
pub use client::{App, ServerApp, ServerAppProps};
pub use components::*;
pub use hours::{Hours, CONVERSION_FACTOR};
pub use route::Route;
pub use shell::Environment;

// Main entry point for trunk
#[cfg(feature = "wasm")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    shell::start(Environment::current())
}
