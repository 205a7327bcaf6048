use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use contracts::shared::format::format_number_with_decimals;

/// `duration | body size | status method path`, sizes grouped like amounts
fn format_line(status: StatusCode, method: &Method, path: &str, millis: u128, size: usize) -> String {
    format!(
        "{:>5}ms | {:>12} | {} {:>6} {}",
        millis,
        format_number_with_decimals(size as f64, 0),
        status.as_u16(),
        method.as_str(),
        path
    )
}

/// One log line per request; the response body is buffered to report its size
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{} {} {}: response body unreadable: {}",
                parts.status.as_u16(),
                method,
                path,
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let line = format_line(
        parts.status,
        &method,
        &path,
        start.elapsed().as_millis(),
        bytes.len(),
    );
    if parts.status.is_success() {
        tracing::info!("{}", line);
    } else {
        tracing::warn!("{}", line);
    }

    Response::from_parts(parts, Body::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_size_uses_comma_grouping() {
        let line = format_line(StatusCode::OK, &Method::GET, "/api/finance/leads", 12, 1_234_567);
        assert!(line.contains("1,234,567"));
        assert!(!line.contains("1.234.567"));
        assert!(line.ends_with("200    GET /api/finance/leads"));
    }

    #[test]
    fn small_bodies_are_not_grouped() {
        let line = format_line(StatusCode::NOT_FOUND, &Method::DELETE, "/x", 0, 999);
        assert!(line.contains(" 999 |"));
        assert!(line.contains("404 DELETE /x"));
    }
}
