//! Multibuy Core
//!
//! Platform-agnostic selection and cart logic for the Multibuy product
//! page: catalog data, single-active bundle selection, per-item option
//! collection, the append-only cart, and notice timing. No DOM and no
//! wasm-specific dependencies; the web crate layers presentation on
//! top of this one.

pub mod cart;
pub mod catalog;
pub mod notice;
pub mod options;
pub mod selection;

// Re-export commonly used types
pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, CatalogError, CatalogLoadError, ProductOption};
pub use notice::{
    ENTER_DELAY_MS, FADE_OUT_MS, Notice, NoticePhase, NoticeSchedule, Severity,
};
pub use options::{ChoiceKind, ChoiceSource, ItemOptions, collect_options};
pub use selection::{SelectOutcome, Selection};

/// Trait for abstracting the timestamp source.
/// Cart lines record their creation time through this seam so tests
/// can inject a deterministic clock.
pub trait Clock {
    /// Current UTC time as an ISO-8601 string.
    fn now_iso(&self) -> String;
}

/// Wall-clock implementation used by the running page.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_iso(&self) -> String {
        chrono::Utc::now()
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }
}
