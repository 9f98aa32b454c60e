//! Save a stored file through the browser.

use crate::store::UploadedFile;

/// Offer `file` as a download. Outside the browser there is nowhere to save
/// to, so this only logs.
pub fn save_file(file: &UploadedFile) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = browser::save(file) {
            tracing::warn!("Failed to save {}: {:?}", file.name, e);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("Download of {} skipped outside the browser", file.name);
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};

    use crate::store::UploadedFile;

    /// Time the browser gets to start reading the blob.
    const REVOKE_AFTER_MS: i32 = 10_000;

    pub fn save(file: &UploadedFile) -> Result<(), JsValue> {
        let bytes = js_sys::Uint8Array::from(&file.data[..]);
        let parts = js_sys::Array::new();
        parts.push(&bytes.buffer());

        let options = web_sys::BlobPropertyBag::new();
        if let Some(ref content_type) = file.content_type {
            options.set_type(content_type);
        }
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
        anchor.set_href(&url);
        anchor.set_download(&file.name);
        anchor.click();

        // Revoking inside the click handler cancels the download in some browsers
        let revoke = Closure::once_into_js(move || {
            if let Err(e) = web_sys::Url::revoke_object_url(&url) {
                tracing::warn!("Failed to revoke {}: {:?}", url, e);
            }
        });
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            revoke.unchecked_ref(),
            REVOKE_AFTER_MS,
        )?;
        Ok(())
    }
}
