//! Form inputs shared by the entity screens.
//!
//! An input never holds state of its own: on every change it emits a
//! [`FormEdit`] that the screen applies to its current form. Edits that
//! finish later (photo reads) therefore land on the form as it is then, not
//! as it was when the file was picked.

use std::rc::Rc;
use std::str::FromStr;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::Choice;
use common::screen::LookupOption;

use super::helpers::read_data_url;

/// One change to the form under edit.
pub type FormEdit<E> = Box<dyn FnOnce(&mut E)>;

type Setter<E, V> = Rc<dyn Fn(&mut E, V)>;

fn edit_with<E: 'static, V: 'static>(set: &Setter<E, V>, value: V) -> FormEdit<E> {
    let set = Rc::clone(set);
    Box::new(move |form: &mut E| set(form, value))
}

/// A required single-line input of HTML type `kind`.
pub fn input<E: 'static>(
    edit: &Callback<FormEdit<E>>,
    kind: &'static str,
    placeholder: &'static str,
    value: &str,
    set: impl Fn(&mut E, String) + 'static,
) -> Html {
    let set: Setter<E, String> = Rc::new(set);
    let oninput = edit.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        edit_with(&set, input.value())
    });
    html! {
        <input type={kind} class="field" {placeholder} value={value.to_string()} {oninput} required={true} />
    }
}

pub fn text<E: 'static>(
    edit: &Callback<FormEdit<E>>,
    placeholder: &'static str,
    value: &str,
    set: impl Fn(&mut E, String) + 'static,
) -> Html {
    input(edit, "text", placeholder, value, set)
}

/// Numeric input; text that does not parse reads as zero.
pub fn number<E: 'static, N>(
    edit: &Callback<FormEdit<E>>,
    placeholder: &'static str,
    value: N,
    set: impl Fn(&mut E, N) + 'static,
) -> Html
where
    N: FromStr + ToString + Default + 'static,
{
    let set: Setter<E, N> = Rc::new(set);
    let oninput = edit.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        edit_with(&set, input.value().trim().parse().unwrap_or_default())
    });
    html! {
        <input type="number" class="field" {placeholder} value={value.to_string()} {oninput} required={true} />
    }
}

pub fn text_area<E: 'static>(
    edit: &Callback<FormEdit<E>>,
    placeholder: &'static str,
    value: &str,
    set: impl Fn(&mut E, String) + 'static,
) -> Html {
    let set: Setter<E, String> = Rc::new(set);
    let oninput = edit.reform(move |e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        edit_with(&set, area.value())
    });
    html! {
        <textarea class="field wide" rows="3" {placeholder} value={value.to_string()} {oninput} />
    }
}

/// A field the user cannot type into; its value is derived elsewhere.
pub fn read_only(placeholder: &'static str, value: &str) -> Html {
    html! {
        <input type="text" class="field" {placeholder} value={value.to_string()} readonly={true} />
    }
}

/// Dropdown over a lookup list. Options flagged unknown are values the
/// record still holds but the list no longer contains.
pub fn lookup_select<E: 'static>(
    edit: &Callback<FormEdit<E>>,
    placeholder: &'static str,
    options: Vec<LookupOption>,
    value: &str,
    set: impl Fn(&mut E, String) + 'static,
) -> Html {
    let set: Setter<E, String> = Rc::new(set);
    let onchange = edit.reform(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        edit_with(&set, select.value())
    });
    html! {
        <select class="field" {onchange} required={true}>
            <option value="" selected={value.is_empty()}>{ placeholder }</option>
            { for options.into_iter().map(|option| {
                let selected = option.name == value;
                let class = classes!((!option.known).then_some("orphan"));
                html! {
                    <option value={option.name.clone()} {selected} {class}>{ option.name }</option>
                }
            }) }
        </select>
    }
}

/// Dropdown over a [`Choice`], bound to the stored wire string. With a
/// placeholder the field can be unset. A stored value outside the known
/// options is kept as an extra option so an untouched form sends it back.
pub fn choice_select<E: 'static, C: Choice>(
    edit: &Callback<FormEdit<E>>,
    placeholder: Option<&'static str>,
    value: &str,
    set: impl Fn(&mut E, String) + 'static,
) -> Html {
    let set: Setter<E, String> = Rc::new(set);
    let onchange = edit.reform(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        edit_with(&set, select.value())
    });
    let known = C::from_wire(value).is_some();
    let stray = (!known && !(value.is_empty() && placeholder.is_some())).then(|| value.to_string());
    html! {
        <select class="field" {onchange} required={true}>
            if let Some(placeholder) = placeholder {
                <option value="" selected={value.is_empty()}>{ placeholder }</option>
            }
            if let Some(stray) = stray {
                <option value={stray.clone()} selected={true} class="orphan">{ stray }</option>
            }
            { for C::ALL.iter().map(|&choice| html! {
                <option value={choice.wire()} selected={C::from_wire(value) == Some(choice)}>{ choice.label() }</option>
            }) }
        </select>
    }
}

/// Image picker storing the picked file as a data URL.
pub fn photo_upload<E: 'static>(
    edit: &Callback<FormEdit<E>>,
    button_label: &'static str,
    uploaded_label: &'static str,
    present: bool,
    set: impl Fn(&mut E, Option<String>) + 'static,
) -> Html {
    let set: Setter<E, Option<String>> = Rc::new(set);
    let edit = edit.clone();
    let onchange = Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let edit = edit.clone();
        let set = Rc::clone(&set);
        spawn_local(async move {
            match read_data_url(file).await {
                Ok(url) => edit.emit(edit_with(&set, Some(url))),
                Err(err) => gloo_console::error!(format!("Error reading photo: {err}")),
            }
        });
    });
    html! {
        <div class="upload-row">
            <label class="btn upload">
                <span>{ button_label }</span>
                <input type="file" accept="image/*" class="hidden" {onchange} />
            </label>
            if present {
                <span class="uploaded">{ uploaded_label }</span>
            }
        </div>
    }
}
