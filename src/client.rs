use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::*;

use crate::route::RouteSwitch;

/// The browser application, routed on the live location.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <RouteSwitch />
        </BrowserRouter>
    }
}

// SSR-compatible version that routes on a fixed path
#[derive(Properties, PartialEq, Debug)]
pub struct ServerAppProps {
    pub path: AttrValue,
}

#[function_component(ServerApp)]
pub fn server_app(props: &ServerAppProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    history.push(props.path.to_string());

    html! {
        <Router history={history}>
            <RouteSwitch />
        </Router>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use yew::ServerRenderer;

    use super::*;

    async fn render(path: &'static str) -> String {
        ServerRenderer::<ServerApp>::with_props(move || ServerAppProps { path: path.into() })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn test_root_renders_empty_converter() {
        let body = render("/").await;

        assert!(body.contains("<article>"), "missing converter in {body}");
        assert!(body.contains(r#"type="number""#));
        assert!(body.contains(r#"step="0.5""#));
        assert!(body.contains(r#"min="0""#));
        assert!(body.contains(r#"max="10""#));
        assert!(!body.contains("converted"), "unexpected conversion in {body}");
    }

    #[tokio::test]
    async fn test_seeded_route_renders_conversion() {
        let body = render("/7.5").await;
        assert!(
            body.contains("Alex time converted to real world time is 20.4 hours"),
            "missing conversion in {body}"
        );

        let body = render("/5").await;
        assert!(body.contains("is 13.6 hours"), "missing conversion in {body}");

        let body = render("/10").await;
        assert!(body.contains("is 27.2 hours"), "missing conversion in {body}");
    }

    #[tokio::test]
    async fn test_seeded_route_with_trailing_slash() {
        let body = render("/7.5/").await;
        assert!(body.contains("is 20.4 hours"), "missing conversion in {body}");

        let body = render("/%207").await;
        assert!(body.contains("is 19.0 hours"), "missing conversion in {body}");
    }

    #[tokio::test]
    async fn test_unparsable_seed_hides_conversion() {
        for path in ["/abc", "/0", "/-3"] {
            let body = render(path).await;
            assert!(body.contains(r#"type="number""#), "missing input for {path}");
            assert!(!body.contains("converted"), "unexpected conversion for {path}");
        }
    }

    #[tokio::test]
    async fn test_nested_route_renders_not_found() {
        let body = render("/anything/else").await;

        assert!(body.contains("NOT FOUND"), "missing not found message in {body}");
        assert!(body.contains(r#"style="color: red;""#));
        assert!(!body.contains("<input"), "unexpected converter in {body}");
    }
}
