//! Home page - hero and the achievements carousel.
//!
//! The page owns the certificate modal. The carousel only asks for it to
//! open; closing goes through the modal's own callback.

use dioxus::prelude::*;
use folio_core::CertificateModalState;
use folio_ui::{Carousel, CertificateModal, CounterButton};

use crate::components::{NavHeader, NavLocation};
use crate::context::use_site_content;

#[component]
pub fn Home() -> Element {
    let content = use_site_content();
    let mut modal = use_signal(CertificateModalState::default);

    let site = content.read();
    let (open, src) = {
        let state = modal.read();
        (
            state.is_open(),
            state.certificate().unwrap_or_default().to_string(),
        )
    };

    rsx! {
        NavHeader { current: NavLocation::Home }

        main { class: "page home",
            header { class: "hero",
                h1 { class: "page-title", "{site.profile.name}" }
                if !site.profile.tagline.is_empty() {
                    p { class: "tagline", "{site.profile.tagline}" }
                }
                CounterButton { label: "Wave".to_string() }
            }

            Carousel {
                slides: site.achievements.clone(),
                config: site.carousel.clone(),
                title: "Achievements".to_string(),
                on_open_certificate: move |url: String| {
                    tracing::debug!(%url, "opening certificate");
                    modal.write().open(url);
                },
            }
        }

        CertificateModal {
            open: open,
            src: src,
            on_close: move |_| modal.write().close(),
        }
    }
}
