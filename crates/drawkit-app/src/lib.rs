//! drawkit application shell
//!
//! Routes pointer and key input through the core interactors and replays
//! recorded gesture scripts.

pub mod event_handler;
pub mod input;
pub mod script;

pub use event_handler::EventHandler;
pub use input::{KeyAction, KeyEvent, PointerEvent, ToolKind};
pub use script::{shapes_to_json, Script, ScriptError, ScriptEvent, SeedShape};
