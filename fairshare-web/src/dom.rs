//! Small browser interop helpers shared by the components.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlAnchorElement, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is
/// unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser
/// window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Offer `contents` to the user as a JSON download named `file_name`.
///
/// Uses a data-URL anchor so no object URLs need revoking.
///
/// # Errors
/// Returns an error if the anchor element cannot be created or attached.
pub fn download_json(file_name: &str, contents: &str) -> Result<(), JsValue> {
    let encoded = String::from(js_sys::encode_uri_component(contents));
    let href = format!("data:application/json;charset=utf-8,{encoded}");

    let anchor: HtmlAnchorElement = document().create_element("a")?.dyn_into()?;
    anchor.set_href(&href);
    anchor.set_download(file_name);

    let body = document()
        .body()
        .ok_or_else(|| JsValue::from_str("document body missing"))?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}

/// Read a user-chosen file as text.
///
/// # Errors
/// Returns an error if the file cannot be read or is not text.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn read_file_text(file: &web_sys::File) -> Result<String, JsValue> {
    let text = JsFuture::from(file.text()).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("file content is not text"))
}

/// Copy plain text to the clipboard, ignoring failures; the affordance is
/// cosmetic and the UI reverts on its own.
pub fn copy_text(text: &str) {
    let _ = window().navigator().clipboard().write_text(text);
}
