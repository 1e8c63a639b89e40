pub mod bridge;
pub mod session;

pub use bridge::{PageState, TestBridge};
pub use session::{BrowserConfig, BrowserKind, new_session};
