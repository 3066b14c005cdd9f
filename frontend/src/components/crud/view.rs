//! View rendering for the generic CRUD screen: page title, the create/edit
//! form card, the page message and the record table.

use yew::html::Scope;
use yew::prelude::*;

use common::model::Record;
use common::screen::messages;

use super::entity::ScreenEntity;
use super::messages::Msg;
use super::state::CrudScreen;

pub fn view<S: ScreenEntity>(screen: &CrudScreen<S>, ctx: &Context<CrudScreen<S>>) -> Html {
    let link = ctx.link();

    html! {
        <div class="screen">
            <h2 class="screen-title">{ S::TITLE }</h2>
            { build_form_card(screen, link) }
            if let Some(error) = &screen.state.error {
                <p class="page-error">{ error.clone() }</p>
            }
            <div class="card list-card">
                <h3 class="card-header">{ S::list_heading() }</h3>
                { build_table(screen, link) }
            </div>
        </div>
    }
}

fn build_form_card<S: ScreenEntity>(screen: &CrudScreen<S>, link: &Scope<CrudScreen<S>>) -> Html {
    let state = &screen.state;
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let edit = link.callback(Msg::EditForm);

    html! {
        <div class="card">
            <h3 class="card-title">{ state.heading() }</h3>
            <form class="entity-form" {onsubmit}>
                <div class="form-grid">
                    { S::form_fields(&state.form, &screen.lookups, &edit) }
                </div>
                <div class="form-actions">
                    <button type="submit" class="btn primary">{ state.submit_label() }</button>
                    if state.is_editing() {
                        <button type="button" class="btn" onclick={link.callback(|_| Msg::CancelEdit)}>
                            { "Cancel" }
                        </button>
                    }
                    { build_import_control(screen, link) }
                </div>
            </form>
        </div>
    }
}

fn build_import_control<S: ScreenEntity>(
    screen: &CrudScreen<S>,
    link: &Scope<CrudScreen<S>>,
) -> Html {
    let Some(import) = S::IMPORT else {
        return Html::default();
    };
    let onchange = link.batch_callback(|e: Event| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        input.files().and_then(|files| files.get(0)).map(Msg::Import)
    });

    html! {
        <div class="import-control">
            <label class={classes!("btn", "success", screen.importing.then_some("busy"))}>
                <span>{ if screen.importing { "Importing..." } else { import.button_label } }</span>
                <input
                    ref={screen.file_input_ref.clone()}
                    type="file"
                    accept={import.accept}
                    class="hidden"
                    disabled={screen.importing}
                    {onchange}
                />
            </label>
        </div>
    }
}

fn build_table<S: ScreenEntity>(screen: &CrudScreen<S>, link: &Scope<CrudScreen<S>>) -> Html {
    let state = &screen.state;
    if state.loading {
        return html! { <p class="list-placeholder">{ messages::loading::<S>() }</p> };
    }
    if state.records.is_empty() {
        return html! { <p class="list-placeholder">{ messages::empty::<S>() }</p> };
    }

    html! {
        <div class="table-scroll">
            <table class="records">
                <thead>
                    <tr>
                        { for S::COLUMNS.iter().map(|title| html! { <th>{ *title }</th> }) }
                        <th>{ "Actions" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for state.records.iter().map(|record| build_row(screen, link, record)) }
                </tbody>
            </table>
        </div>
    }
}

fn build_row<S: ScreenEntity>(
    screen: &CrudScreen<S>,
    link: &Scope<CrudScreen<S>>,
    record: &Record<S>,
) -> Html {
    let on_edit = {
        let record = record.clone();
        link.callback(move |_| Msg::Edit(record.clone()))
    };
    let on_delete = {
        let id = record.id.clone();
        link.callback(move |_| Msg::Delete(id.clone()))
    };
    let editing = screen
        .state
        .editing
        .as_ref()
        .is_some_and(|current| current.id == record.id);

    html! {
        <tr key={record.id.clone()} class={classes!(editing.then_some("editing"))}>
            { record.data.row_cells() }
            <td class="actions">
                <button class="icon-btn edit" title="Edit" onclick={on_edit}>
                    <i class="material-icons">{ "edit" }</i>
                </button>
                <button class="icon-btn delete" title="Delete" onclick={on_delete}>
                    <i class="material-icons">{ "delete" }</i>
                </button>
                if S::DOCUMENT_PATH.is_some() {
                    { build_download_button(screen, link, record) }
                }
            </td>
        </tr>
    }
}

fn build_download_button<S: ScreenEntity>(
    screen: &CrudScreen<S>,
    link: &Scope<CrudScreen<S>>,
    record: &Record<S>,
) -> Html {
    let busy = screen.downloading.as_deref() == Some(record.id.as_str());
    let on_download = {
        let record = record.clone();
        link.callback(move |_| Msg::Download(record.clone()))
    };
    html! {
        <button class="icon-btn download" title="Download" disabled={busy} onclick={on_download}>
            <i class="material-icons">{ if busy { "hourglass_empty" } else { "download" } }</i>
        </button>
    }
}
