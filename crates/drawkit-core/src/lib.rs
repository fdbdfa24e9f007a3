//! drawkit core library
//!
//! Shape geometry and pointer interaction engine: primitives, hit testing,
//! per-gesture interactors, keyboard nudging and completion notification.

pub mod collection;
pub mod config;
pub mod geometry;
pub mod interactors;
pub mod keyboard;
pub mod notify;
pub mod shapes;

pub use collection::ShapeCollection;
pub use config::{ConfigError, InteractionConfig};
pub use geometry::{
    clip_point, create_around, grab_handles_around, Corner, Edge, Endpoint, GeometryError,
    GrabHandle, Handle, RectExt, Segment,
};
pub use hit_test::{HitKind, HitTestResult, HitTester};
pub use interactors::{
    for_hit, CornerResizeInteractor, EdgeResizeInteractor, EraseInteractor, GestureNotifier,
    GestureOutcome, GesturePhase, Interactor, Interest, LineEndpointInteractor, MoveInteractor,
    MoveLineInteractor, NewLineInteractor, NewShapeInteractor,
};
pub use keyboard::KeyboardInteractor;
pub use notify::{ChannelObserver, Notifier, Observer, ObserverId};
pub use shapes::{Shape, ShapeId, ShapeKind, ShapeTrait};
