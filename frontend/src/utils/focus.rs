/// Index of the control that should take focus after `current`, or `None` on the last one.
pub fn next_focus_index(current: usize, total: usize) -> Option<usize> {
    let next = current.checked_add(1)?;
    (next < total).then_some(next)
}

/// Enter moves focus to the next form control instead of submitting, except on the last control.
pub fn advance_focus_on_enter(ev: &web_sys::KeyboardEvent) {
    if ev.key() != "Enter" {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let Some(target) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let Some(form) = target
            .closest("form")
            .ok()
            .flatten()
            .and_then(|f| f.dyn_into::<web_sys::HtmlFormElement>().ok())
        else {
            return;
        };
        let controls = form.elements();
        let total = controls.length() as usize;
        let current = (0..controls.length()).find(|idx| {
            controls
                .item(*idx)
                .is_some_and(|el| el.is_same_node(Some(target.as_ref())))
        });
        let Some(next) = current.and_then(|idx| next_focus_index(idx as usize, total)) else {
            return;
        };
        if let Some(el) = controls
            .item(next as u32)
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            ev.prevent_default();
            let _ = el.focus();
        }
    }
}
