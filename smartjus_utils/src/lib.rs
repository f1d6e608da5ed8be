pub mod http;
mod macros;

/// Returns the version of the SmartJus backend.
pub fn smartjus_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
