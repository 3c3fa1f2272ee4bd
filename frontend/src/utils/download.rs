use wasm_bindgen::JsCast;

use super::storage;

/// Blob-backed object URL that is revoked when dropped.
#[derive(Debug, PartialEq, Eq)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Result<Self, String> {
        storage::window()?;
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes).into());
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Failed to create object URL".to_string())?;
        Ok(Self { url })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Keeps the URL alive long enough for another tab to load it.
    pub fn release_after(self, millis: u32) {
        gloo_timers::callback::Timeout::new(millis, move || drop(self)).forget();
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        {
            let _ = web_sys::Url::revoke_object_url(&self.url);
        }
    }
}

pub fn trigger_blob_download(filename: &str, bytes: &[u8], mime_type: &str) -> Result<(), String> {
    let url = ObjectUrl::from_bytes(bytes, mime_type)?;
    trigger_url_download(filename, url.as_str())
}

pub fn trigger_url_download(filename: &str, href: &str) -> Result<(), String> {
    let document = storage::window()?.document().ok_or("No document")?;
    let element = document
        .create_element("a")
        .map_err(|_| "Failed to create link".to_string())?;
    let a = element
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Failed to cast anchor".to_string())?;
    a.set_href(href);
    a.set_download(filename);
    a.set_attribute("style", "display: none").ok();
    document
        .body()
        .ok_or("No body")?
        .append_child(&a)
        .map_err(|_| "Append failed".to_string())?;
    a.click();
    a.remove();
    Ok(())
}

pub fn open_in_new_tab(bytes: &[u8], mime_type: &str) -> Result<(), String> {
    let url = ObjectUrl::from_bytes(bytes, mime_type)?;
    storage::window()?
        .open_with_url_and_target(url.as_str(), "_blank")
        .map_err(|_| "Failed to open a new tab".to_string())?;
    url.release_after(60_000);
    Ok(())
}
