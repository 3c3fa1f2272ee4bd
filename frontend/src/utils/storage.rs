use web_sys::{Storage, Window};

/// Browser window. Host builds have no DOM, so this is always an error there.
pub fn window() -> Result<Window, String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err("No window object".to_string())
    }
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}
