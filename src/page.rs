use std::collections::HashSet;
use std::error::Error;
use std::path::{Component, Path, PathBuf};

use futures::future::try_join_all;
use tracing::{info, instrument, warn};
use yew::ServerRenderer;

use crate::client::{ServerApp, ServerAppProps};
use crate::config::Config;
use crate::route::Route;
use crate::shell::{Environment, BANNER, PRERENDERED_ATTRIBUTE};

/// Renders the hydratable markup of the page at `path`.
pub async fn render_route(path: &str) -> String {
    let path = path.to_string();
    ServerRenderer::<ServerApp>::with_props(move || ServerAppProps { path: path.into() })
        .hydratable(true)
        .render()
        .await
}

/// Prerenders every configured route into the output directory, returning
/// the files that were written.
///
/// Each file is written once. When several routes map onto the same file,
/// the first of them is rendered and the rest are skipped.
#[instrument(skip(config, template), fields(environment = %config.environment), err(Debug))]
pub async fn prerender(config: &Config, template: &str) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut claimed = HashSet::new();
    let mut pages = Vec::with_capacity(config.routes.len());

    for route in config.routes.iter() {
        let path = output_path(&config.output, route)?;
        if claimed.insert(path.clone()) {
            pages.push((route.as_str(), path));
        } else {
            warn!(route, path = %path.display(), "Skipping route whose page is already prerendered");
        }
    }

    try_join_all(
        pages
            .into_iter()
            .map(|(route, path)| prerender_route(config, template, route, path)),
    )
    .await
}

async fn prerender_route(
    config: &Config,
    template: &str,
    route: &str,
    path: PathBuf,
) -> Result<PathBuf, Box<dyn Error>> {
    // Development builds always render from scratch, so there is nothing
    // worth hydrating.
    let content = match config.environment {
        Environment::Production => Some(render_route(route).await),
        Environment::Development => None,
    };

    let html = assemble(template, &config.title, route, content.as_deref())?;

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&path, html).await?;

    info!(route, path = %path.display(), "Prerendered page");
    Ok(path)
}

/// Where the page for `route` lives, so that a static file host serves it for
/// that URL. Unknown routes become the host's `404.html`.
pub fn output_path(output: &Path, route: &str) -> Result<PathBuf, Box<dyn Error>> {
    match Route::resolve(route) {
        Route::Home => Ok(output.join("index.html")),
        Route::Seeded { hours } => {
            let mut components = Path::new(&hours).components();
            match (components.next(), components.next()) {
                (Some(Component::Normal(segment)), None) => {
                    Ok(output.join(segment).join("index.html"))
                }
                _ => Err(format!(
                    "The route '{route}' does not map to a page inside the output directory."
                )
                .into()),
            }
        }
        Route::NotFound => Ok(output.join("404.html")),
    }
}

/// Fills the page template with the title, the build banner and the markup
/// prerendered for `route`. Without `content` the mount point is left empty.
///
/// Templates which have already been filled can be filled again.
pub fn assemble(
    template: &str,
    title: &str,
    route: &str,
    content: Option<&str>,
) -> Result<String, Box<dyn Error>> {
    let mount = match content {
        Some(content) => format!(
            r#"<main {PRERENDERED_ATTRIBUTE}="{}">{content}</main>"#,
            escape(route)
        ),
        None => "<main></main>".to_string(),
    };

    let html = replace_element(template, "main", &mount)
        .ok_or("The page template does not contain a <main> mount point.")?;

    let html = replace_element(&html, "title", &format!("<title>{}</title>", escape(title)))
        .unwrap_or(html);

    let banner = format!("<!-- {} -->", *BANNER);
    if html.contains(&banner) {
        Ok(html)
    } else {
        Ok(html.replacen("<head>", &format!("<head>{banner}"), 1))
    }
}

fn replace_element(html: &str, tag: &str, replacement: &str) -> Option<String> {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");

    let start = html.match_indices(&open).map(|(i, _)| i).find(|&i| {
        html[i + open.len()..]
            .starts_with(|c: char| c == '>' || c.is_ascii_whitespace())
    })?;
    let end = start + html[start..].find(&close)? + close.len();

    Some(format!("{}{replacement}{}", &html[..start], &html[end..]))
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
