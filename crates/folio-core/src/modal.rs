//! Certificate modal state
//!
//! Owned by the page. The carousel only emits
//! [`CarouselEffect::OpenCertificate`](crate::CarouselEffect); the page
//! applies it here and the modal's close button clears it.

use crate::carousel::CarouselEffect;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CertificateModalState {
    certificate: Option<String>,
}

impl CertificateModalState {
    pub fn open(&mut self, url: impl Into<String>) {
        self.certificate = Some(url.into());
    }

    pub fn close(&mut self) {
        self.certificate = None;
    }

    pub fn apply(&mut self, effect: CarouselEffect) {
        match effect {
            CarouselEffect::OpenCertificate(url) => self.open(url),
        }
    }

    pub fn is_open(&self) -> bool {
        self.certificate.is_some()
    }

    pub fn certificate(&self) -> Option<&str> {
        self.certificate.as_deref()
    }
}
