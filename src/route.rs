use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{NotFound, TimeConverter};

/// The pages of the application.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/:hours")]
    Seeded { hours: String },
    // Two segments, so this can never be mistaken for a seeded converter.
    #[not_found]
    #[at("/-/not-found")]
    NotFound,
}

impl Route {
    /// Picks the page shown at a location path.
    ///
    /// A single trailing slash is ignored, and the seed of a single-segment
    /// path is percent-decoded. Every path with more than one segment is
    /// [`Route::NotFound`].
    pub fn resolve(path: &str) -> Self {
        let path = path
            .strip_suffix('/')
            .filter(|trimmed| !trimmed.is_empty())
            .unwrap_or(path);

        match path.strip_prefix('/') {
            Some("") => Route::Home,
            Some(segment) if !segment.contains('/') => Route::Seeded {
                hours: decode_segment(segment),
            },
            _ => Route::NotFound,
        }
    }
}

// Malformed escapes and non UTF-8 results leave the segment as it was typed.
fn decode_segment(segment: &str) -> String {
    let bytes = segment.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());

    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            decoded.push(bytes[i]);
            i += 1;
            continue;
        }

        let byte = bytes
            .get(i + 1..i + 3)
            .filter(|hex| hex.iter().all(u8::is_ascii_hexdigit))
            .and_then(|hex| std::str::from_utf8(hex).ok())
            .and_then(|hex| u8::from_str_radix(hex, 16).ok());

        match byte {
            Some(byte) => {
                decoded.push(byte);
                i += 3;
            }
            None => return segment.to_string(),
        }
    }

    String::from_utf8(decoded).unwrap_or_else(|_| segment.to_string())
}

pub fn switch(route: Route) -> Html {
    // Keyed by path so that moving between seeded routes remounts the
    // converter with fresh state.
    let key = route.to_path();

    match route {
        Route::Home => html! { <TimeConverter key={key} /> },
        Route::Seeded { hours } => html! {
            <TimeConverter key={key} time={Some(AttrValue::from(hours))} />
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

/// Renders the page for the location of the surrounding router.
#[function_component(RouteSwitch)]
pub fn route_switch() -> Html {
    let route = use_location()
        .map(|location| Route::resolve(location.path()))
        .unwrap_or(Route::Home);

    switch(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(hours: &str) -> Route {
        Route::Seeded {
            hours: hours.to_string(),
        }
    }

    #[test]
    fn test_root() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve("//"), Route::Home);
    }

    #[test]
    fn test_single_segment() {
        assert_eq!(Route::resolve("/7.5"), seeded("7.5"));
        assert_eq!(Route::resolve("/soon"), seeded("soon"));
        assert_eq!(Route::resolve("/-3"), seeded("-3"));
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(Route::resolve("/7.5/"), seeded("7.5"));
        assert_eq!(Route::resolve("/7.5//"), Route::NotFound);
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(Route::resolve("/%207"), seeded(" 7"));
        assert_eq!(Route::resolve("/7%2E5"), seeded("7.5"));
        assert_eq!(Route::resolve("/caf%C3%A9"), seeded("café"));
    }

    #[test]
    fn test_malformed_escapes_are_kept() {
        assert_eq!(Route::resolve("/50%"), seeded("50%"));
        assert_eq!(Route::resolve("/%zz7"), seeded("%zz7"));
        assert_eq!(Route::resolve("/%+17"), seeded("%+17"));
        assert_eq!(Route::resolve("/%FF"), seeded("%FF"));
    }

    #[test]
    fn test_multiple_segments() {
        assert_eq!(Route::resolve("/anything/else"), Route::NotFound);
        assert_eq!(Route::resolve("/7.5/hours"), Route::NotFound);
        assert_eq!(Route::resolve("/-/not-found"), Route::NotFound);
        assert_eq!(Route::resolve("/7.5/hours/"), Route::NotFound);
    }

    #[test]
    fn test_to_path() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(seeded("5").to_path(), "/5");
        assert_eq!(Route::NotFound.to_path(), "/-/not-found");
    }
}
