//! Certificate Modal Component
//!
//! Overlay showing a certificate image. The page owns whether it is open;
//! this component only reports close requests.

use dioxus::prelude::*;

use super::button::CloseButton;

/// Certificate Modal
///
/// # Example
///
/// ```rust,ignore
/// let mut modal = use_signal(CertificateModalState::default);
///
/// rsx! {
///     CertificateModal {
///         open: modal.read().is_open(),
///         src: modal.read().certificate().unwrap_or_default().to_string(),
///         on_close: move |_| modal.write().close(),
///     }
/// }
/// ```
#[component]
pub fn CertificateModal(
    /// Whether to show the modal
    open: bool,
    /// Certificate image URL
    src: String,
    #[props(default = "Certificate".to_string())]
    title: String,
    /// Callback when the modal asks to be closed
    on_close: EventHandler<()>,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "certificate-modal",
                role: "dialog",
                "aria-label": "{title}",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    CloseButton { onclick: move |_| on_close.call(()) }
                }

                img { class: "certificate-image", src: "{src}", alt: "{title}" }
            }
        }
    }
}
