//! # API Forwarding Module
//!
//! The console talks to its REST API through the host that served it, so the
//! browser only ever sees one origin. Every request under `/api` is replayed
//! against the configured upstream and the upstream answer is relayed back
//! unchanged (status, `Content-Type`, body).

mod forward;

use actix_web::web::{route, scope};
use actix_web::Scope;

/// Prefix shared by the console and the upstream API.
const API_PATH: &str = "/api";

/// Where `/api` requests are sent, with the pooled client used to send them.
pub struct Upstream {
    client: reqwest::Client,
    base: String,
}

impl Upstream {
    pub fn new(base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Upstream URL for a console request path (which includes `/api`).
    pub fn url_for(&self, path: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}{}", self.base, path)
        } else {
            format!("{}{}?{}", self.base, path, query)
        }
    }
}

/// Configures the `/api` scope.
///
/// *   **`* /api/{tail}`**: any method, forwarded by `forward::process`.
///     An unreachable upstream answers `502 Bad Gateway`.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/{tail:.*}", route().to(forward::process))
}
