mod probe;
mod session;

pub use probe::FocusProbe;
pub use session::{BrowserConfig, BrowserKind, new_session};
