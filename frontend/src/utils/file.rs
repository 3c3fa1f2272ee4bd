use wasm_bindgen::JsCast;

use crate::api::FileUpload;

pub fn selected_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    let input = ev
        .target()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    input.files()?.get(0)
}

pub async fn read_file(file: &web_sys::File) -> Result<FileUpload, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| format!("Failed to read {}", file.name()))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let mime_type = file.type_();
    Ok(FileUpload {
        file_name: file.name(),
        mime_type: if mime_type.is_empty() {
            "application/octet-stream".to_string()
        } else {
            mime_type
        },
        bytes,
    })
}
