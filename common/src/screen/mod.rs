//! Client-side state of one CRUD screen.
//!
//! A screen mirrors one REST collection. [`ScreenState`] holds the record
//! list, the form being edited and the page-level error, and exposes one
//! transition per user action or network outcome. The frontend component
//! performs the requests and feeds their outcomes back in; nothing here
//! touches the network.
//!
//! Screens that reference other entities by name also load [`Lookups`]
//! (dropdown options). Lookup failures never reach the user.

mod lookups;
mod state;

pub use lookups::{LookupKind, LookupOption, Lookups};
pub use state::{FetchTicket, Method, ScreenState, Submission};

/// Page-level messages. Wording is shared by every screen.
pub mod messages {
    use crate::model::Entity;

    pub fn fetch_failed<E: Entity>() -> String {
        format!("Failed to fetch {}. Please try again later.", E::PLURAL)
    }

    pub fn save_failed<E: Entity>() -> String {
        format!("Failed to save {}. Please try again.", E::SINGULAR.to_lowercase())
    }

    pub fn delete_failed<E: Entity>() -> String {
        format!("Failed to delete {}. Please try again.", E::SINGULAR.to_lowercase())
    }

    pub fn download_failed<E: Entity>() -> String {
        format!("Failed to download {}. Please try again.", E::SINGULAR.to_lowercase())
    }

    pub const IMPORT_FAILED: &str =
        "Failed to process the uploaded file. Please check the file format and try again.";

    pub fn loading<E: Entity>() -> String {
        format!("Loading {}...", E::PLURAL)
    }

    pub fn empty<E: Entity>() -> String {
        format!("No {} found.", E::PLURAL)
    }
}
