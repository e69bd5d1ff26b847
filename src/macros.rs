/// Expands to the crate version, optionally with a prefix, e.g. `version!("v")`
/// gives `"v0.1.0"`.
macro_rules! version {
    () => {
        env!("CARGO_PKG_VERSION")
    };
    ($prefix:literal) => {
        concat!($prefix, env!("CARGO_PKG_VERSION"))
    };
}
