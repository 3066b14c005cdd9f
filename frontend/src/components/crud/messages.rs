use thiserror::Error;

use common::import::ImportError;
use common::model::Record;
use common::screen::{FetchTicket, LookupKind};

use crate::gateway::{Document, GatewayError};

use super::fields::FormEdit;

pub enum Msg<E> {
    Fetch,
    Fetched {
        ticket: FetchTicket,
        result: Result<Vec<Record<E>>, GatewayError>,
    },
    /// Body of a lookup fetch, `None` when it failed.
    LookupLoaded(LookupKind, Option<String>),
    EditForm(FormEdit<E>),
    Edit(Record<E>),
    CancelEdit,
    Submit,
    Submitted(Result<(), GatewayError>),
    Delete(String),
    Deleted(Result<(), GatewayError>),
    Import(web_sys::File),
    Imported(Result<usize, ImportFailure>),
    Download(Record<E>),
    Downloaded(Result<Document, GatewayError>),
}

#[derive(Debug, Error)]
pub enum ImportFailure {
    #[error("could not read {file}: {message}")]
    Read { file: String, message: String },

    #[error(transparent)]
    Parse(#[from] ImportError),

    #[error(transparent)]
    Submit(#[from] GatewayError),
}
