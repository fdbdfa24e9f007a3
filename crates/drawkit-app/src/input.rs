//! Input events fed to the event handler.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Tools the surrounding application can pick. The core never chooses one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    #[default]
    Select,
    Rectangle,
    Line,
    Text,
    Eraser,
}

/// Pointer event type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
    /// Press and release in place, without a drag.
    Click { position: Point },
}

/// Keyboard event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(String),
}

/// What a key does, by its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Delete,
    NudgeLeft,
    NudgeRight,
    NudgeUp,
    NudgeDown,
    Escape,
    Confirm,
}

impl KeyAction {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Delete" | "Backspace" => Some(KeyAction::Delete),
            "ArrowLeft" => Some(KeyAction::NudgeLeft),
            "ArrowRight" => Some(KeyAction::NudgeRight),
            "ArrowUp" => Some(KeyAction::NudgeUp),
            "ArrowDown" => Some(KeyAction::NudgeDown),
            "Escape" => Some(KeyAction::Escape),
            "Enter" => Some(KeyAction::Confirm),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(KeyAction::from_key("Backspace"), Some(KeyAction::Delete));
        assert_eq!(KeyAction::from_key("ArrowUp"), Some(KeyAction::NudgeUp));
        assert_eq!(KeyAction::from_key("q"), None);
    }

    #[test]
    fn test_tool_names() {
        let tool: ToolKind = serde_json::from_str("\"eraser\"").unwrap();
        assert_eq!(tool, ToolKind::Eraser);
        assert_eq!(ToolKind::default(), ToolKind::Select);
    }
}
