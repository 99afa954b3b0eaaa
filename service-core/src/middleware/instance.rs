use axum::{
    extract::{Request, State},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

pub const SERVED_BY_HEADER: HeaderName = HeaderName::from_static("x-served-by");

/// Header value naming the instance that handled a request.
#[derive(Debug, Clone)]
pub struct ServedBy(pub HeaderValue);

impl ServedBy {
    /// Falls back to `unknown` when the name is not a valid header value.
    pub fn new(instance: &str) -> Self {
        Self(
            HeaderValue::from_str(instance)
                .unwrap_or_else(|_| HeaderValue::from_static("unknown")),
        )
    }
}

/// Stamp every response with `x-served-by` so callers behind a load balancer
/// can see which replica answered.
pub async fn served_by_middleware(
    State(served_by): State<ServedBy>,
    req: Request,
    next: Next,
) -> Response {
    let mut response = next.run(req).await;
    response
        .headers_mut()
        .insert(SERVED_BY_HEADER, served_by.0.clone());
    response
}
