//! "Copy" buttons: write a value (student id, login, link) to the clipboard
//! and confirm with a toast.

use crate::shared::toast;
use sms_ui_core::toast::CLIPBOARD_COPIED;
use sms_ui_core::UiConfig;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Copy `text` and show the success toast once the browser confirms the
/// write. A refused write (no permission, insecure context) is only logged.
pub fn copy_with_toast(text: &str, config: Rc<UiConfig>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let pending = window.navigator().clipboard().write_text(text);

    spawn_local(async move {
        match JsFuture::from(pending).await {
            Ok(_) => {
                let (message, kind) = CLIPBOARD_COPIED;
                toast::show_toast(&config, message, Some(kind.as_str()), None);
            }
            Err(err) => log::warn!("clipboard write refused: {err:?}"),
        }
    });
}
