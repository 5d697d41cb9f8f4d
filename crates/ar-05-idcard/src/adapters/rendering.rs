//! Rendering adapters.
//!
//! `StubRenderer` stands in for the real PDF/PNG pipeline: deterministic
//! file references, plus a failure switch so outage handling can be tested.

use crate::domain::card::{ArtifactRefs, CredentialArtifact};
use crate::domain::errors::RenderError;
use crate::ports::outbound::RenderingService;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

#[derive(Default)]
pub struct StubRenderer {
    failing: AtomicBool,
    renders: AtomicU64,
}

impl StubRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a rendering outage.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn render_count(&self) -> u64 {
        self.renders.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RenderingService for StubRenderer {
    async fn render(&self, card: &CredentialArtifact) -> Result<ArtifactRefs, RenderError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RenderError::Unavailable("renderer offline".into()));
        }
        self.renders.fetch_add(1, Ordering::SeqCst);
        Ok(ArtifactRefs {
            pdf: format!("cards/{}.pdf", card.card_id),
            png: format!("cards/{}.png", card.card_id),
        })
    }
}
