use anyhow::Context;
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Allow browsers on the given origins to submit leads. Does nothing if
/// `allowed_origins` is empty.
pub fn add<S: Clone + Send + Sync + 'static>(
    allowed_origins: &[String],
) -> anyhow::Result<impl FnOnce(Router<S>) -> Router<S>> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid cors origin {origin:?}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(move |router: Router<S>| {
        if origins.is_empty() {
            return router;
        }

        router.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([Method::POST])
                .allow_headers([CONTENT_TYPE]),
        )
    })
}
