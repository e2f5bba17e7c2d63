// module declaration
pub mod core;
pub mod mint;
pub mod network;
pub mod ui_state;

// export App and related types
pub use core::{App, MessageType};
