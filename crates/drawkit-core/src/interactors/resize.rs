//! Resizing a rectangle by one of its edges or corners.

use super::{GestureCore, GestureNotifier, GesturePhase, Interactor, NewShapeInteractor};
use crate::config::InteractionConfig;
use crate::geometry::{Corner, Edge, Handle, RectExt};
use kurbo::{Point, Rect, Size};

/// Drags one edge while the opposite edge stays where it was at press time.
///
/// Every update is normalized and grown to the minimum size, since a single
/// edge can cross its opposite on the first sample.
#[derive(Debug)]
pub struct EdgeResizeInteractor {
    core: GestureCore,
    edge: Edge,
    original: Rect,
    rect: Rect,
    min_size: Size,
}

impl EdgeResizeInteractor {
    /// Built on the press, so it starts active.
    pub fn new(bounds: Rect, geometry: Rect, edge: Edge, config: &InteractionConfig) -> Self {
        let original = geometry.normalized();
        Self {
            core: GestureCore::active(bounds),
            edge,
            original,
            rect: original,
            min_size: config.min_shape_size,
        }
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    fn drag_to(&mut self, point: Point) {
        let p = self.core.clip(point);
        let o = self.original;
        let moved = match self.edge {
            Edge::Left => Rect::new(p.x, o.y0, o.x1, o.y1),
            Edge::Right => Rect::new(o.x0, o.y0, p.x, o.y1),
            Edge::Top => Rect::new(o.x0, p.y, o.x1, o.y1),
            Edge::Bottom => Rect::new(o.x0, o.y0, o.x1, p.y),
        };
        self.rect = moved
            .normalized()
            .ensure_viable_size(self.min_size)
            .shifted_inside(self.core.bounds());
        log::trace!("Edge resize {:?}: {:?}", self.edge, self.rect);
    }
}

impl Interactor for EdgeResizeInteractor {
    fn interaction_start(&mut self, _point: Point) {
        self.core.begin();
    }

    fn interaction_update(&mut self, point: Point) {
        if self.core.is_active("update") {
            self.drag_to(point);
        }
    }

    fn interaction_end(&mut self, point: Point) {
        if self.core.is_active("end") {
            self.drag_to(point);
            self.core.complete(self.rect);
        }
    }

    fn escape(&mut self) {
        self.core.abandon();
    }

    fn confirm(&mut self) {
        if self.core.is_active("confirm") {
            self.core.complete(self.rect);
        }
    }

    fn rectangle(&self) -> Rect {
        self.rect
    }

    fn phase(&self) -> GesturePhase {
        self.core.phase()
    }

    fn notifier(&mut self) -> &mut GestureNotifier {
        self.core.notifier()
    }
}

/// Drags one corner while the opposite corner stays pinned.
///
/// This is a new-shape gesture started at the opposite corner and already
/// dragged to the grabbed one; every event is forwarded to it.
#[derive(Debug)]
pub struct CornerResizeInteractor {
    corner: Corner,
    inner: NewShapeInteractor,
}

impl CornerResizeInteractor {
    /// Built on the press, so it starts active.
    pub fn new(bounds: Rect, geometry: Rect, corner: Corner, config: &InteractionConfig) -> Self {
        let geometry = geometry.normalized();
        let handle = Handle::from(corner);
        let mut inner = NewShapeInteractor::new(bounds, config);
        inner.interaction_start(geometry.anchor(handle.opposite()));
        inner.interaction_update(geometry.anchor(handle));
        Self { corner, inner }
    }

    pub fn corner(&self) -> Corner {
        self.corner
    }
}

impl Interactor for CornerResizeInteractor {
    /// The press already happened at construction.
    fn interaction_start(&mut self, _point: Point) {}

    fn interaction_update(&mut self, point: Point) {
        self.inner.interaction_update(point);
    }

    fn interaction_end(&mut self, point: Point) {
        self.inner.interaction_end(point);
    }

    fn escape(&mut self) {
        self.inner.escape();
    }

    fn confirm(&mut self) {
        self.inner.confirm();
    }

    fn rectangle(&self) -> Rect {
        self.inner.rectangle()
    }

    fn phase(&self) -> GesturePhase {
        self.inner.phase()
    }

    fn notifier(&mut self) -> &mut GestureNotifier {
        self.inner.notifier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactors::{GestureOutcome, Interest};
    use crate::notify::ChannelObserver;
    use std::sync::mpsc;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 300.0, 300.0);
    const SHAPE: Rect = Rect::new(100.0, 100.0, 200.0, 150.0);

    fn edge(edge: Edge) -> EdgeResizeInteractor {
        EdgeResizeInteractor::new(BOUNDS, SHAPE, edge, &InteractionConfig::default())
    }

    fn corner(corner: Corner) -> CornerResizeInteractor {
        CornerResizeInteractor::new(BOUNDS, SHAPE, corner, &InteractionConfig::default())
    }

    #[test]
    fn test_each_edge_moves_alone() {
        let mut left = edge(Edge::Left);
        left.interaction_update(Point::new(50.0, 10.0));
        assert_eq!(left.rectangle(), Rect::new(50.0, 100.0, 200.0, 150.0));

        let mut right = edge(Edge::Right);
        right.interaction_update(Point::new(260.0, 290.0));
        assert_eq!(right.rectangle(), Rect::new(100.0, 100.0, 260.0, 150.0));

        let mut top = edge(Edge::Top);
        top.interaction_update(Point::new(0.0, 20.0));
        assert_eq!(top.rectangle(), Rect::new(100.0, 20.0, 200.0, 150.0));

        let mut bottom = edge(Edge::Bottom);
        bottom.interaction_update(Point::new(0.0, 400.0));
        assert_eq!(bottom.rectangle(), Rect::new(100.0, 100.0, 200.0, 300.0));
    }

    #[test]
    fn test_edge_crossing_is_normalized_every_update() {
        let mut right = edge(Edge::Right);
        right.interaction_update(Point::new(40.0, 120.0));
        assert_eq!(right.rectangle(), Rect::new(40.0, 100.0, 100.0, 150.0));
        // Back and forth is computed from the original, not the last sample.
        right.interaction_update(Point::new(180.0, 120.0));
        assert_eq!(right.rectangle(), Rect::new(100.0, 100.0, 180.0, 150.0));
    }

    #[test]
    fn test_edge_enforces_minimum_size_live() {
        let mut bottom = edge(Edge::Bottom);
        bottom.interaction_update(Point::new(150.0, 104.0));
        assert_eq!(bottom.rectangle(), Rect::new(100.0, 94.0, 200.0, 110.0));
    }

    #[test]
    fn test_edge_end_notifies() {
        let mut left = edge(Edge::Left);
        let (tx, rx) = mpsc::channel();
        left.notifier()
            .subscribe(Interest::InteractionComplete, ChannelObserver(tx));
        left.interaction_start(Point::new(100.0, 125.0));
        left.interaction_end(Point::new(80.0, 125.0));
        assert_eq!(
            rx.try_recv().unwrap(),
            GestureOutcome::Completed(Rect::new(80.0, 100.0, 200.0, 150.0))
        );
        assert!(left.is_finished());
    }

    #[test]
    fn test_corner_pins_opposite_corner() {
        let mut top_left = corner(Corner::TopLeft);
        assert_eq!(top_left.rectangle(), Rect::new(200.0, 150.0, 100.0, 100.0));
        top_left.interaction_update(Point::new(60.0, 40.0));
        assert_eq!(top_left.rectangle(), Rect::new(200.0, 150.0, 60.0, 40.0));
        top_left.interaction_end(Point::new(60.0, 40.0));
        assert_eq!(top_left.rectangle(), Rect::new(60.0, 40.0, 200.0, 150.0));

        let mut bottom_left = corner(Corner::BottomLeft);
        bottom_left.interaction_end(Point::new(90.0, 170.0));
        assert_eq!(bottom_left.rectangle(), Rect::new(90.0, 100.0, 200.0, 170.0));
    }

    #[test]
    fn test_corner_crossing_and_minimum() {
        let mut bottom_right = corner(Corner::BottomRight);
        bottom_right.interaction_end(Point::new(50.0, 105.0));
        // Crossed horizontally, too short vertically.
        assert_eq!(bottom_right.rectangle(), Rect::new(50.0, 94.5, 100.0, 110.5));
    }

    #[test]
    fn test_corner_forwards_notifications() {
        let mut top_right = corner(Corner::TopRight);
        let (tx, rx) = mpsc::channel();
        top_right
            .notifier()
            .subscribe(Interest::InteractionAbandoned, ChannelObserver(tx));
        assert_eq!(top_right.phase(), GesturePhase::Active);
        top_right.interaction_start(Point::new(0.0, 0.0));
        top_right.escape();
        assert_eq!(rx.try_recv().unwrap(), GestureOutcome::Abandoned);
        assert!(top_right.is_finished());
        assert_eq!(top_right.corner(), Corner::TopRight);
    }
}
