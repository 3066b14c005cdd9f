use yew::NodeRef;

use common::screen::{Lookups, ScreenState};

use super::entity::ScreenEntity;

/// Runtime data of one mounted CRUD screen.
pub struct CrudScreen<S: ScreenEntity> {
    /// Store, form and page message.
    pub state: ScreenState<S>,

    /// Dropdown sources; empty until (and unless) their fetch succeeds.
    pub lookups: Lookups,

    /// Hidden file input behind the import button.
    pub file_input_ref: NodeRef,

    /// An import is being read or submitted.
    pub importing: bool,

    /// Id of the record whose document is being downloaded.
    pub downloading: Option<String>,

    /// Guard for the one-time initial fetch.
    pub loaded: bool,
}

impl<S: ScreenEntity> CrudScreen<S> {
    pub fn new() -> Self {
        Self {
            state: ScreenState::new(),
            lookups: Lookups::default(),
            file_input_ref: NodeRef::default(),
            importing: false,
            downloading: None,
            loaded: false,
        }
    }
}
