//! Toast notifications.
//!
//! Toasts raised from page code are rendered by a small leptos component
//! mounted into `.toast-container` the first time one is shown. Toasts the
//! server rendered into the page are faded out after a delay.

use crate::shared::dom;
use crate::shared::timer::after;
use leptos::prelude::*;
use sms_ui_core::toast::{leaving_style, ToastId, ToastKind, ToastQueue};
use sms_ui_core::UiConfig;
use std::cell::Cell;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const CONTAINER_CLASS: &str = "toast-container";

thread_local! {
    static SERVICE: Cell<Option<ToastService>> = const { Cell::new(None) };
}

/// Handle to the mounted toast host.
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
    fade_ms: u32,
}

impl ToastService {
    /// Show a toast and schedule its fade-out and removal.
    pub fn show(&self, message: &str, kind: ToastKind, duration_ms: u32) -> ToastId {
        let mut id = 0;
        self.queue.update(|q| id = q.push(message, kind));

        let svc = *self;
        after(duration_ms, move || {
            svc.queue.update(|q| {
                q.start_leaving(id);
            });
            after(svc.fade_ms, move || svc.dismiss(id));
        });
        id
    }

    pub fn dismiss(&self, id: ToastId) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

#[component]
fn ToastHost(fade_ms: u32) -> impl IntoView {
    let service = ToastService {
        queue: RwSignal::new(ToastQueue::new()),
        fade_ms,
    };
    SERVICE.with(|s| s.set(Some(service)));
    let queue = service.queue;

    view! {
        <For
            each=move || queue.with(|q| q.ids())
            key=|id| *id
            children=move |id| {
                let toast = queue.with_untracked(|q| q.get(id).cloned());
                toast.map(|toast| {
                    let style = move || {
                        let leaving = queue.with(|q| q.get(id).map(|t| t.leaving).unwrap_or(false));
                        if leaving {
                            leaving_style(fade_ms)
                        } else {
                            "cursor:pointer;".to_string()
                        }
                    };
                    view! {
                        <div
                            class=toast.kind.css_class()
                            style=style
                            on:click=move |_| service.dismiss(id)
                        >
                            {toast.text()}
                        </div>
                    }
                })
            }
        />
    }
}

/// The toast host, mounting it on first use.
pub fn service(config: &UiConfig) -> Option<ToastService> {
    if let Some(svc) = SERVICE.with(|s| s.get()) {
        return Some(svc);
    }

    // Монтируем хост в существующий .toast-container (или создаём его)
    let container = ensure_container()?;
    let fade_ms = config.toast_fade_ms;
    leptos::mount::mount_to(container, move || view! { <ToastHost fade_ms=fade_ms /> }).forget();
    SERVICE.with(|s| s.get())
}

/// Show a toast; `kind` names one of success/error/warning/info.
pub fn show_toast(config: &UiConfig, message: &str, kind: Option<&str>, duration_ms: Option<u32>) {
    let kind = kind.map(ToastKind::parse).unwrap_or_default();
    let duration_ms = duration_ms.unwrap_or(config.toast_duration_ms);
    match service(config) {
        Some(svc) => {
            svc.show(message, kind, duration_ms);
        }
        None => log::warn!("toast dropped, no document body: {message}"),
    }
}

fn ensure_container() -> Option<HtmlElement> {
    let document = dom::document()?;
    if let Some(existing) = document.query_selector(".toast-container").ok().flatten() {
        return existing.dyn_into::<HtmlElement>().ok();
    }

    let container = document.create_element("div").ok()?;
    container.set_class_name(CONTAINER_CLASS);
    document.body()?.append_child(&container).ok()?;
    container.dyn_into::<HtmlElement>().ok()
}

/// Fade out the toasts the server rendered with the page, one after another.
pub fn auto_hide_rendered(config: &UiConfig) {
    let delay = config.rendered_toast_delay_ms;
    let stagger = config.rendered_toast_stagger_ms;
    let fade = config.rendered_toast_fade_ms;

    let rendered = dom::query_all(".toast");
    if rendered.is_empty() {
        return;
    }

    after(delay, move || {
        for (i, toast) in rendered.into_iter().enumerate() {
            let offset = stagger.saturating_mul(i as u32);
            after(offset, move || {
                dom::set_style(&toast, "transition", &format!("all {fade}ms ease"));
                dom::set_style(&toast, "opacity", "0");
                dom::set_style(&toast, "transform", "translateX(100%)");
                after(fade, move || toast.remove());
            });
        }
    });
}
