//! Gesture scripts: a drawing surface, starting shapes and an event list,
//! replayed through the [`EventHandler`].
//!
//! ```json
//! {
//!   "bounds": [0, 0, 400, 300],
//!   "shapes": [{"rectangle": [20, 20, 80, 40]}, {"line": [10, 200, 120, 260]}],
//!   "events": [
//!     {"tool": "rectangle"},
//!     {"down": [100, 100]}, {"move": [150, 130]}, {"up": [180, 160]},
//!     {"key": "ArrowLeft"}
//!   ]
//! }
//! ```
//!
//! Points are `[x, y]` or `{"x", "y"}`; rectangles are `[x, y, dx, dy]` or
//! an object; lines are `[x1, y1, x2, y2]` or `{"start", "end"}`.

use std::path::Path;

use drawkit_core::geometry::{point_from_value, rect_from_value};
use drawkit_core::shapes::{Line, Rectangle, Shape, Text};
use drawkit_core::{ConfigError, GeometryError, InteractionConfig, Segment};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::event_handler::EventHandler;
use crate::input::{KeyEvent, PointerEvent, ToolKind};

/// Script errors.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for script operations.
pub type ScriptResult<T> = Result<T, ScriptError>;

/// A shape present before the first event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedShape {
    Rectangle(Value),
    Line(Value),
    Text { rect: Value, content: String },
}

impl SeedShape {
    pub fn build(&self) -> ScriptResult<Shape> {
        let shape = match self {
            SeedShape::Rectangle(rect) => Rectangle::new(rect_from_value(rect)?).into(),
            SeedShape::Line(line) => Line::new(Segment::try_from(line)?).into(),
            SeedShape::Text { rect, content } => {
                Text::new(rect_from_value(rect)?, content.clone()).into()
            }
        };
        Ok(shape)
    }
}

/// One scripted input.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptEvent {
    Tool(ToolKind),
    Down(Value),
    Move(Value),
    Up(Value),
    Click(Value),
    Key(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub bounds: Value,
    #[serde(default)]
    pub config: Option<InteractionConfig>,
    #[serde(default)]
    pub shapes: Vec<SeedShape>,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    pub fn from_json(json: &str) -> ScriptResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> ScriptResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Replay the script. A `config` inside the script wins over `fallback`.
    pub fn run(&self, fallback: InteractionConfig) -> ScriptResult<EventHandler> {
        let config = self.config.unwrap_or(fallback);
        config.validate()?;
        let bounds = rect_from_value(&self.bounds)?;
        let mut handler = EventHandler::new(bounds, config);
        for shape in &self.shapes {
            handler.shapes.add_shape(shape.build()?);
        }
        log::info!(
            "Replaying {} events over {} shapes",
            self.events.len(),
            handler.shapes.len()
        );

        for event in &self.events {
            match event {
                ScriptEvent::Tool(tool) => handler.set_tool(*tool),
                ScriptEvent::Down(at) => handler.handle_pointer(PointerEvent::Down {
                    position: point_from_value(at)?,
                }),
                ScriptEvent::Move(at) => handler.handle_pointer(PointerEvent::Move {
                    position: point_from_value(at)?,
                }),
                ScriptEvent::Up(at) => handler.handle_pointer(PointerEvent::Up {
                    position: point_from_value(at)?,
                }),
                ScriptEvent::Click(at) => handler.handle_pointer(PointerEvent::Click {
                    position: point_from_value(at)?,
                }),
                ScriptEvent::Key(key) => handler.handle_key(&KeyEvent::Pressed(key.clone())),
            }
        }
        Ok(handler)
    }
}

/// The collection back to front, as pretty JSON.
pub fn shapes_to_json(handler: &EventHandler) -> ScriptResult<String> {
    let shapes: Vec<&Shape> = handler.shapes.shapes_ordered().collect();
    Ok(serde_json::to_string_pretty(&shapes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawkit_core::ShapeKind;
    use kurbo::Rect;
    use std::io::Write;

    const SCRIPT: &str = r#"{
        "bounds": [0, 0, 300, 300],
        "shapes": [
            {"rectangle": {"x": 200, "y": 200, "dx": 50, "dy": 50}},
            {"text": {"rect": [10, 250, 60, 20], "content": "note"}}
        ],
        "events": [
            {"tool": "rectangle"},
            {"click": [100, 100]},
            {"tool": "line"},
            {"down": {"x": 10, "y": 10}},
            {"move": [40, 40]},
            {"up": [400, 60]}
        ]
    }"#;

    #[test]
    fn test_run_script() {
        let script = Script::from_json(SCRIPT).unwrap();
        let handler = script.run(InteractionConfig::default()).unwrap();
        let kinds: Vec<_> = handler.shapes.shapes_ordered().map(Shape::kind).collect();
        assert_eq!(
            kinds,
            vec![ShapeKind::Rectangle, ShapeKind::Text, ShapeKind::Rectangle, ShapeKind::Line]
        );
        let created: Vec<_> = handler.shapes.shapes_ordered().skip(2).collect();
        assert_eq!(created[0].bounds(), Rect::new(52.0, 76.0, 148.0, 124.0));
        assert_eq!(created[1].geometry(), Rect::new(10.0, 10.0, 300.0, 60.0));
        assert!(shapes_to_json(&handler).unwrap().contains("note"));
    }

    #[test]
    fn test_script_config_wins() {
        let script = Script::from_json(
            r#"{
                "bounds": [0, 0, 300, 300],
                "config": {"default_shape_size": {"width": 20.0, "height": 10.0}},
                "events": [{"tool": "rectangle"}, {"click": [100, 100]}]
            }"#,
        )
        .unwrap();
        let handler = script.run(InteractionConfig::default()).unwrap();
        let shape = handler.shapes.shapes_ordered().next().unwrap();
        assert_eq!(shape.bounds(), Rect::new(90.0, 95.0, 110.0, 105.0));
    }

    #[test]
    fn test_bad_point_is_rejected() {
        let script = Script::from_json(
            r#"{"bounds": [0, 0, 10, 10], "events": [{"down": "here"}]}"#,
        )
        .unwrap();
        assert!(matches!(
            script.run(InteractionConfig::default()),
            Err(ScriptError::Geometry(_))
        ));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let script = Script::from_json(
            r#"{"bounds": [0, 0, 10, 10], "config": {"grab_handle_size": -1.0}}"#,
        )
        .unwrap();
        assert!(matches!(
            script.run(InteractionConfig::default()),
            Err(ScriptError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", SCRIPT).unwrap();
        let script = Script::load(file.path()).unwrap();
        assert_eq!(script.events.len(), 6);
        assert!(matches!(Script::load("/nonexistent/script.json"), Err(ScriptError::Io(_))));
    }
}
