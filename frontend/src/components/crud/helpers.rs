//! Browser-side utilities for the CRUD screens: toasts, file reading and
//! saving downloaded documents.

use base64::{engine::general_purpose, Engine as _};
use gloo_file::futures::read_as_bytes;
use gloo_file::{Blob, File, FileReadError, ObjectUrl};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlAnchorElement, HtmlElement};

use crate::gateway::Document;

/// Displays a temporary notification at the bottom of the screen. The toast
/// removes itself after three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                html_toast.set_class_name("toast");
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

pub async fn read_bytes(file: web_sys::File) -> Result<Vec<u8>, FileReadError> {
    read_as_bytes(&File::from(file)).await
}

/// Reads a picked file as a `data:` URL.
pub async fn read_data_url(file: web_sys::File) -> Result<String, FileReadError> {
    let file = File::from(file);
    let mime = match file.raw_mime_type() {
        mime if mime.is_empty() => "application/octet-stream".to_string(),
        mime => mime,
    };
    let bytes = read_as_bytes(&file).await?;
    Ok(format!(
        "data:{};base64,{}",
        mime,
        general_purpose::STANDARD.encode(bytes)
    ))
}

/// Hands `document` to the browser as a file download.
pub fn save_document(document: &Document) -> Result<(), JsValue> {
    let page = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let blob = Blob::new_with_options(document.bytes.as_slice(), Some("application/pdf"));
    let url = ObjectUrl::from(blob);

    let anchor: HtmlAnchorElement = page.create_element("a")?.unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(&document.file_name);
    anchor.click();

    // The URL is revoked on drop; give the download time to start.
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(1000).await;
        drop(url);
    });
    Ok(())
}
