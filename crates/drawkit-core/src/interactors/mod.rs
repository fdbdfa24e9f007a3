//! Per-gesture state machines.
//!
//! An interactor is built when a gesture starts and dropped when it ends. It
//! turns clipped pointer samples into a working rectangle (or line, carried
//! as an unnormalized line rect) and, when the gesture ends, announces the
//! final geometry through its [`GestureNotifier`]. Interactors never touch
//! the shape collection; whoever subscribed commits the result.

mod endpoint;
mod erase;
mod moving;
mod new_shape;
mod resize;

pub use endpoint::LineEndpointInteractor;
pub use erase::EraseInteractor;
pub use moving::{MoveInteractor, MoveLineInteractor};
pub use new_shape::{NewLineInteractor, NewShapeInteractor};
pub use resize::{CornerResizeInteractor, EdgeResizeInteractor};

use crate::config::InteractionConfig;
use crate::geometry::{clip_point, Corner, Edge, Endpoint, RectExt, Segment};
use crate::hit_test::{HitKind, HitTestResult};
use crate::notify::Notifier;
use crate::shapes::Shape;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// What observers can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interest {
    InteractionComplete,
    InteractionAbandoned,
}

/// Payload delivered when a gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureOutcome {
    /// Final geometry. Lines arrive as a line rect, start at `(x0, y0)`.
    Completed(Rect),
    Abandoned,
}

impl GestureOutcome {
    pub fn interest(&self) -> Interest {
        match self {
            GestureOutcome::Completed(_) => Interest::InteractionComplete,
            GestureOutcome::Abandoned => Interest::InteractionAbandoned,
        }
    }

    pub fn rect(&self) -> Option<Rect> {
        match self {
            GestureOutcome::Completed(rect) => Some(*rect),
            GestureOutcome::Abandoned => None,
        }
    }

    /// The completed geometry read as a line.
    pub fn line(&self) -> Option<Segment> {
        self.rect().map(Segment::from_rect)
    }
}

pub type GestureNotifier = Notifier<Interest, GestureOutcome>;

/// Where a gesture is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GesturePhase {
    /// Built, waiting for `interaction_start`.
    #[default]
    Idle,
    /// Receiving updates.
    Active,
    /// Completed or abandoned. Further events are ignored.
    Finished,
}

/// Common interface of every gesture.
pub trait Interactor {
    fn interaction_start(&mut self, point: Point);

    fn interaction_update(&mut self, point: Point);

    /// Final sample. Completes the gesture.
    fn interaction_end(&mut self, point: Point);

    /// Abandon without geometry.
    fn escape(&mut self);

    /// Complete with the current geometry, as if the pointer were released
    /// where it last was.
    fn confirm(&mut self);

    /// Current working geometry, possibly unnormalized during a drag.
    fn rectangle(&self) -> Rect;

    /// Current working geometry read as a line.
    fn line(&self) -> Segment {
        Segment::from_rect(self.rectangle())
    }

    /// Current geometry with `x0 <= x1` and `y0 <= y1`, for live previews.
    fn preview(&self) -> Rect {
        self.rectangle().normalized()
    }

    fn phase(&self) -> GesturePhase;

    fn is_finished(&self) -> bool {
        self.phase() == GesturePhase::Finished
    }

    /// Where completion and abandonment are announced.
    fn notifier(&mut self) -> &mut GestureNotifier;
}

/// Phase bookkeeping, clipping and notification shared by the interactors.
#[derive(Debug, Default)]
pub(crate) struct GestureCore {
    bounds: Rect,
    phase: GesturePhase,
    notifier: GestureNotifier,
}

impl GestureCore {
    pub(crate) fn new(bounds: Rect) -> Self {
        Self {
            bounds: bounds.normalized(),
            phase: GesturePhase::Idle,
            notifier: GestureNotifier::new(),
        }
    }

    /// Built already active, for gestures whose construction is the press.
    pub(crate) fn active(bounds: Rect) -> Self {
        Self {
            phase: GesturePhase::Active,
            ..Self::new(bounds)
        }
    }

    pub(crate) fn bounds(&self) -> Rect {
        self.bounds
    }

    pub(crate) fn clip(&self, point: Point) -> Point {
        clip_point(self.bounds, point)
    }

    pub(crate) fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub(crate) fn notifier(&mut self) -> &mut GestureNotifier {
        &mut self.notifier
    }

    /// Idle to Active. False (and nothing changes) in any other phase.
    pub(crate) fn begin(&mut self) -> bool {
        match self.phase {
            GesturePhase::Idle => {
                self.phase = GesturePhase::Active;
                true
            }
            phase => {
                log::debug!("Gesture start ignored in {:?} phase", phase);
                false
            }
        }
    }

    /// Whether an update, end or confirm may be applied.
    pub(crate) fn is_active(&self, event: &str) -> bool {
        if self.phase == GesturePhase::Active {
            true
        } else {
            log::debug!("Gesture {} ignored in {:?} phase", event, self.phase);
            false
        }
    }

    pub(crate) fn complete(&mut self, rect: Rect) {
        self.phase = GesturePhase::Finished;
        log::debug!("Gesture complete: {:?}", rect);
        let outcome = GestureOutcome::Completed(rect);
        self.notifier.notify(&outcome.interest(), &outcome);
    }

    /// Abandon from Idle or Active.
    pub(crate) fn abandon(&mut self) {
        if self.phase == GesturePhase::Finished {
            log::debug!("Gesture escape ignored after finish");
            return;
        }
        self.phase = GesturePhase::Finished;
        log::debug!("Gesture abandoned");
        let outcome = GestureOutcome::Abandoned;
        self.notifier.notify(&outcome.interest(), &outcome);
    }
}

/// Build the move or resize interactor a hit calls for.
///
/// `point` is the press position and `bounds` the drawing surface. Returns
/// `None` for a miss, or for a handle the shape kind does not have.
pub fn for_hit(
    hit: &HitTestResult,
    shape: &Shape,
    bounds: Rect,
    point: Point,
    config: &InteractionConfig,
) -> Option<Box<dyn Interactor>> {
    if let Some(segment) = shape.segment() {
        return match hit.kind {
            HitKind::Line | HitKind::Border => {
                Some(Box::new(MoveLineInteractor::new(bounds, segment, point)))
            }
            HitKind::Start => Some(Box::new(LineEndpointInteractor::new(
                bounds,
                segment,
                Endpoint::Start,
            ))),
            HitKind::End => Some(Box::new(LineEndpointInteractor::new(
                bounds,
                segment,
                Endpoint::End,
            ))),
            _ => None,
        };
    }

    let geometry = shape.bounds();
    match hit.kind {
        HitKind::None | HitKind::Line | HitKind::Start | HitKind::End => None,
        HitKind::Border => Some(Box::new(MoveInteractor::new(bounds, geometry, point))),
        kind => {
            let handle = kind.handle()?;
            if let Ok(edge) = Edge::try_from(handle) {
                Some(Box::new(EdgeResizeInteractor::new(bounds, geometry, edge, config)))
            } else {
                let corner = Corner::try_from(handle).ok()?;
                Some(Box::new(CornerResizeInteractor::new(bounds, geometry, corner, config)))
            }
        }
    }
}
