//! What a concrete entity contributes to the generic CRUD screen.

use yew::prelude::*;

use common::import::ImportError;
use common::model::Entity;
use common::screen::{LookupKind, Lookups};

use super::fields::FormEdit;

/// Bulk import offered next to the submit button.
pub struct Import<E> {
    pub button_label: &'static str,
    /// `accept` attribute of the file input.
    pub accept: &'static str,
    /// Endpoint taking the parsed records as one JSON array.
    pub bulk_path: &'static str,
    pub parse: fn(&str, &[u8]) -> Result<Vec<E>, ImportError>,
}

pub trait ScreenEntity: Entity {
    /// Reference lists loaded alongside the main list.
    const LOOKUPS: &'static [LookupKind] = &[];

    /// Table headers, without the trailing "Actions" column.
    const COLUMNS: &'static [&'static str];

    const IMPORT: Option<Import<Self>> = None;

    /// Endpoint rendering one record as a downloadable document.
    const DOCUMENT_PATH: Option<&'static str> = None;

    /// Inputs of the create/edit form.
    fn form_fields(form: &Self, lookups: &Lookups, edit: &Callback<FormEdit<Self>>) -> Html;

    /// `<td>` cells of one table row, matching [`Self::COLUMNS`].
    fn row_cells(&self) -> Html;
}
