pub mod capabilities;
pub mod detect;

pub use capabilities::{TerminalCapabilities, TreeChars};
pub use detect::TerminalDetector;
