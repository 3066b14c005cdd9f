//! Update function for the generic CRUD screen.
//!
//! Elm-style: mutate the state for `msg`, spawn the network call when one is
//! due and report its outcome back through the component link. Returns
//! whether the view must re-render.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::gateway;

use super::entity::ScreenEntity;
use super::helpers::{read_bytes, save_document, show_toast};
use super::messages::{ImportFailure, Msg};
use super::state::CrudScreen;

pub fn update<S: ScreenEntity>(
    screen: &mut CrudScreen<S>,
    ctx: &Context<CrudScreen<S>>,
    msg: Msg<S>,
) -> bool {
    match msg {
        Msg::Fetch => {
            let ticket = screen.state.begin_fetch();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = gateway::list::<S>().await;
                link.send_message(Msg::Fetched { ticket, result });
            });
            true
        }
        Msg::Fetched { ticket, result } => match result {
            Ok(records) => screen.state.fetch_succeeded(ticket, records),
            Err(err) => {
                error!(format!("Error fetching {}: {}", S::PLURAL, err));
                screen.state.fetch_failed(ticket)
            }
        },
        Msg::LookupLoaded(kind, body) => {
            screen.lookups.load(kind, body.as_deref());
            true
        }
        Msg::EditForm(edit) => {
            let mut form = screen.state.form.clone();
            edit(&mut form);
            screen.state.update_form(form);
            true
        }
        Msg::Edit(record) => {
            screen.state.edit(record);
            true
        }
        Msg::CancelEdit => {
            screen.state.cancel_edit();
            true
        }
        Msg::Submit => {
            let submission = screen.state.begin_submit();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = gateway::submit(&submission).await;
                link.send_message(Msg::Submitted(result));
            });
            true
        }
        Msg::Submitted(Ok(())) => {
            screen.state.submit_succeeded();
            ctx.link().send_message(Msg::Fetch);
            true
        }
        Msg::Submitted(Err(err)) => {
            error!(format!("Error saving {}: {}", S::SINGULAR, err));
            screen.state.submit_failed();
            true
        }
        Msg::Delete(id) => {
            let path = screen.state.begin_delete(&id);
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = gateway::delete(&path).await;
                link.send_message(Msg::Deleted(result));
            });
            true
        }
        Msg::Deleted(Ok(())) => {
            ctx.link().send_message(Msg::Fetch);
            false
        }
        Msg::Deleted(Err(err)) => {
            error!(format!("Error deleting {}: {}", S::SINGULAR, err));
            screen.state.delete_failed();
            true
        }
        Msg::Import(file) => {
            let Some(import) = S::IMPORT else {
                return false;
            };
            screen.state.begin_import();
            screen.importing = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let file_name = file.name();
                let result = async {
                    let bytes = read_bytes(file).await.map_err(|err| ImportFailure::Read {
                        file: file_name.clone(),
                        message: err.to_string(),
                    })?;
                    let records = (import.parse)(&file_name, &bytes)?;
                    gateway::bulk_create(import.bulk_path, &records).await?;
                    Ok::<usize, ImportFailure>(records.len())
                }
                .await;
                link.send_message(Msg::Imported(result));
            });
            true
        }
        Msg::Imported(result) => {
            screen.importing = false;
            if let Some(input) = screen.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                // Picking the same file again must fire `change`.
                input.set_value("");
            }
            match result {
                Ok(count) => {
                    show_toast(&format!("Imported {} {}.", count, S::PLURAL));
                    ctx.link().send_message(Msg::Fetch);
                }
                Err(err) => {
                    error!(format!("Error processing file: {}", err));
                    screen.state.import_failed();
                }
            }
            true
        }
        Msg::Download(record) => {
            let Some(path) = S::DOCUMENT_PATH else {
                return false;
            };
            screen.state.begin_download();
            screen.downloading = Some(record.id.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = gateway::download(path, &record).await;
                link.send_message(Msg::Downloaded(result));
            });
            true
        }
        Msg::Downloaded(result) => {
            screen.downloading = None;
            let saved = result
                .map_err(|err| err.to_string())
                .and_then(|document| {
                    save_document(&document)
                        .map(|()| document.file_name)
                        .map_err(|err| format!("{:?}", err))
                });
            match saved {
                Ok(file_name) => show_toast(&format!("Downloaded {}.", file_name)),
                Err(err) => {
                    error!(format!("Error downloading {}: {}", S::SINGULAR, err));
                    screen.state.download_failed();
                }
            }
            true
        }
    }
}

/// Loads every lookup list the screen declares. Failures are logged and
/// leave the list empty.
pub fn load_lookups<S: ScreenEntity>(ctx: &Context<CrudScreen<S>>) {
    for &kind in S::LOOKUPS {
        let link = ctx.link().clone();
        spawn_local(async move {
            let body = match gateway::fetch_text(kind.resource()).await {
                Ok(body) => Some(body),
                Err(err) => {
                    error!(format!("Error fetching {}: {}", kind.resource(), err));
                    None
                }
            };
            link.send_message(Msg::LookupLoaded(kind, body));
        });
    }
}
