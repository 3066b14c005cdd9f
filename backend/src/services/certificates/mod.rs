//! # Certificate Service Module
//!
//! Renders certificate records as printable PDF documents.

mod pdf;

use std::path::PathBuf;

use actix_web::web::{post, scope};
use actix_web::Scope;

use crate::config::Config;

/// The base path for console-side certificate endpoints.
const API_PATH: &str = "/console/certificates";

/// Where certificate fonts are loaded from.
#[derive(Debug, Clone)]
pub struct FontSource {
    pub dir: PathBuf,
    pub family: String,
}

impl From<&Config> for FontSource {
    fn from(config: &Config) -> Self {
        Self {
            dir: config.fonts_dir.clone(),
            family: config.font_family.clone(),
        }
    }
}

/// Configures the certificate routes.
///
/// *   **`POST /pdf`**:
///     - **Handler**: `pdf::process`
///     - **Description**: Takes a certificate record as JSON and returns it
///       rendered as a one-page PDF attachment. Answers
///       `503 Service Unavailable` when the document cannot be produced,
///       typically because the configured fonts are missing.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/pdf", post().to(pdf::process))
}
