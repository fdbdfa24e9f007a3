//! Event handling for tool interactions.
//!
//! The handler owns the shape collection and at most one live interactor.
//! It picks the interactor from the active tool and the hit-test result,
//! feeds it pointer samples, and commits whatever the interactor announces
//! when the gesture ends.

use std::sync::mpsc::{self, Receiver, Sender};

use drawkit_core::shapes::{Line, Rectangle, Text};
use drawkit_core::{
    for_hit, ChannelObserver, EraseInteractor, GestureOutcome, HitTester, InteractionConfig,
    Interactor, Interest, KeyboardInteractor, NewLineInteractor, NewShapeInteractor, Segment,
    ShapeCollection, ShapeId,
};
use kurbo::{Point, Rect};

use crate::input::{KeyAction, KeyEvent, PointerEvent, ToolKind};

/// Content given to text boxes created with the text tool.
pub const DEFAULT_TEXT: &str = "Text";

/// What to do with a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Commit {
    /// Add a new shape of the tool's kind.
    Create(ToolKind),
    /// Replace the geometry of an existing shape.
    Update(ShapeId),
    /// Remove every shape touching the region.
    Erase,
}

struct Gesture {
    interactor: Box<dyn Interactor>,
    commit: Commit,
}

/// Owns the collection and drives one gesture at a time.
pub struct EventHandler {
    pub shapes: ShapeCollection,
    pub tool: ToolKind,
    config: InteractionConfig,
    tester: HitTester,
    gesture: Option<Gesture>,
    sender: Sender<GestureOutcome>,
    outcomes: Receiver<GestureOutcome>,
}

impl EventHandler {
    pub fn new(bounds: Rect, config: InteractionConfig) -> Self {
        let (sender, outcomes) = mpsc::channel();
        Self {
            shapes: ShapeCollection::new(bounds),
            tool: ToolKind::default(),
            tester: HitTester::new(&config),
            config,
            gesture: None,
            sender,
            outcomes,
        }
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// Whether a gesture is in progress.
    pub fn is_manipulating(&self) -> bool {
        self.gesture.is_some()
    }

    /// Live geometry of the current gesture, for previews.
    pub fn preview(&self) -> Option<Rect> {
        self.gesture.as_ref().map(|g| g.interactor.preview())
    }

    /// Switch tools. A gesture in progress is abandoned.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.cancel();
        self.tool = tool;
        log::debug!("Tool set to {:?}", tool);
    }

    /// Abandon the current gesture, if any.
    pub fn cancel(&mut self) {
        if let Some(gesture) = self.gesture.as_mut() {
            gesture.interactor.escape();
        }
        self.settle();
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position } => self.handle_press(position),
            PointerEvent::Move { position } => {
                if let Some(gesture) = self.gesture.as_mut() {
                    gesture.interactor.interaction_update(position);
                }
            }
            PointerEvent::Up { position } => {
                if let Some(gesture) = self.gesture.as_mut() {
                    gesture.interactor.interaction_end(position);
                }
            }
            PointerEvent::Click { position } => self.handle_click(position),
        }
        self.settle();
    }

    pub fn handle_key(&mut self, event: &KeyEvent) {
        let KeyEvent::Pressed(key) = event;
        let Some(action) = KeyAction::from_key(key) else {
            log::debug!("Key {:?} not bound", key);
            return;
        };
        let step = self.config.nudge_step;
        match action {
            KeyAction::Escape => self.cancel(),
            KeyAction::Confirm => {
                if let Some(gesture) = self.gesture.as_mut() {
                    gesture.interactor.confirm();
                }
            }
            // Keyboard edits wait until no gesture is live.
            _ if self.gesture.is_some() => {
                log::debug!("Key {:?} ignored during a gesture", key);
            }
            KeyAction::Delete => {
                KeyboardInteractor::new(&mut self.shapes).delete();
            }
            KeyAction::NudgeLeft => {
                KeyboardInteractor::new(&mut self.shapes).move_left(step);
            }
            KeyAction::NudgeRight => {
                KeyboardInteractor::new(&mut self.shapes).move_right(step);
            }
            KeyAction::NudgeUp => {
                KeyboardInteractor::new(&mut self.shapes).move_up(step);
            }
            KeyAction::NudgeDown => {
                KeyboardInteractor::new(&mut self.shapes).move_down(step);
            }
        }
        self.settle();
    }

    fn handle_press(&mut self, point: Point) {
        if self.gesture.is_some() {
            log::debug!("Press ignored: a gesture is already live");
            return;
        }
        let bounds = self.shapes.bounds;
        let tool = self.tool;
        let gesture = match tool {
            ToolKind::Select => self.press_select(point),
            ToolKind::Rectangle | ToolKind::Text => Some(Gesture {
                interactor: Box::new(NewShapeInteractor::new(bounds, &self.config)),
                commit: Commit::Create(tool),
            }),
            ToolKind::Line => Some(Gesture {
                interactor: Box::new(NewLineInteractor::new(bounds)),
                commit: Commit::Create(ToolKind::Line),
            }),
            ToolKind::Eraser => Some(Gesture {
                interactor: Box::new(EraseInteractor::new(bounds, &self.config)),
                commit: Commit::Erase,
            }),
        };
        if let Some(mut gesture) = gesture {
            self.subscribe(gesture.interactor.as_mut());
            gesture.interactor.interaction_start(point);
            self.gesture = Some(gesture);
        }
    }

    /// Select what was hit and start moving or resizing it.
    fn press_select(&mut self, point: Point) -> Option<Gesture> {
        let hit = self.shapes.hit_test(&self.tester, point);
        let Some(id) = hit.shape else {
            self.shapes.clear_selection();
            return None;
        };
        let shape = self.shapes.get_shape(id)?;
        let was_selected = shape.is_selected();
        let interactor = for_hit(&hit, shape, self.shapes.bounds, point, &self.config);
        if !was_selected {
            self.shapes.select_only(id);
        }
        interactor.map(|interactor| Gesture {
            interactor,
            commit: Commit::Update(id),
        })
    }

    fn handle_click(&mut self, point: Point) {
        if self.gesture.is_some() {
            log::debug!("Click ignored: a gesture is already live");
            return;
        }
        let tool = self.tool;
        match tool {
            ToolKind::Rectangle | ToolKind::Text => {
                let mut interactor = NewShapeInteractor::new(self.shapes.bounds, &self.config);
                self.subscribe(&mut interactor);
                interactor.click(point);
                self.gesture = Some(Gesture {
                    interactor: Box::new(interactor),
                    commit: Commit::Create(tool),
                });
            }
            _ => {
                self.handle_press(point);
                if let Some(gesture) = self.gesture.as_mut() {
                    gesture.interactor.interaction_end(point);
                }
            }
        }
    }

    fn subscribe(&self, interactor: &mut dyn Interactor) {
        let notifier = interactor.notifier();
        notifier.subscribe(
            Interest::InteractionComplete,
            ChannelObserver(self.sender.clone()),
        );
        notifier.subscribe(
            Interest::InteractionAbandoned,
            ChannelObserver(self.sender.clone()),
        );
    }

    /// Commit announced outcomes and drop a finished gesture.
    fn settle(&mut self) {
        let Some(gesture) = self.gesture.as_ref() else {
            return;
        };
        let commit = gesture.commit;
        while let Ok(outcome) = self.outcomes.try_recv() {
            match outcome {
                GestureOutcome::Completed(rect) => self.commit(commit, rect),
                GestureOutcome::Abandoned => log::debug!("Gesture abandoned, nothing committed"),
            }
        }
        if self.gesture.as_ref().is_some_and(|g| g.interactor.is_finished()) {
            self.gesture = None;
        }
    }

    fn commit(&mut self, commit: Commit, rect: Rect) {
        match commit {
            Commit::Create(ToolKind::Rectangle) => {
                let id = self.shapes.add_shape(Rectangle::new(rect));
                log::info!("Created rectangle {}", id);
            }
            Commit::Create(ToolKind::Text) => {
                let id = self.shapes.add_shape(Text::new(rect, DEFAULT_TEXT));
                log::info!("Created text {}", id);
            }
            Commit::Create(ToolKind::Line) => {
                let id = self.shapes.add_shape(Line::new(Segment::from_rect(rect)));
                log::info!("Created line {}", id);
            }
            Commit::Create(tool) => log::debug!("Tool {:?} creates nothing", tool),
            Commit::Update(id) => {
                self.shapes.commit(id, rect);
            }
            Commit::Erase => {
                let doomed = self.shapes.shapes_in_rect(rect);
                for &id in &doomed {
                    self.shapes.remove_shape(id);
                }
                log::info!("Erased {} shapes", doomed.len());
            }
        }
    }
}
