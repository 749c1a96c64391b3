use reqwest::{header::CONTENT_TYPE, Response};

/// Adds content type checks to `reqwest::Response`.
pub trait ResponseExt {
    /// Returns true if the response has a `Content-Type` header indicating it is HTML.
    fn is_html(&self) -> bool;

    /// Returns true if the response has an `image/*` `Content-Type` header.
    fn is_image(&self) -> bool;
}

impl ResponseExt for Response {
    fn is_html(&self) -> bool {
        content_type(self)
            .map(|t| t.starts_with("text/html"))
            .unwrap_or(false)
    }

    fn is_image(&self) -> bool {
        content_type(self)
            .map(|t| t.starts_with("image/"))
            .unwrap_or(false)
    }
}

fn content_type(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|content_type| content_type.to_str().ok())
}
