//! Geometric primitives: clipping, normalization and grab-handle placement.
//!
//! Points, vectors, sizes and rectangles are kurbo values. A kurbo [`Rect`]
//! stores two independent corners, so a rectangle that is being dragged in the
//! negative direction can hold a negative width or height until it is
//! normalized. [`RectExt`] adds the operations the interaction engine needs on
//! top of kurbo, and [`Segment`] is the line primitive.

use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A side must be at least this many grab handles long before a mid-edge
/// handle is placed on it.
pub const MIN_RELATIVE_SIZE_FOR_MID_HANDLES: f64 = 6.0;

/// Errors raised when a primitive cannot be built from an external value.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("Unrecognized {kind} value: {value}")]
    Unrecognized { kind: &'static str, value: String },
    /// Extents so large that a corner overflows.
    #[error("Non-finite coordinate in {0} value")]
    NonFinite(&'static str),
}

/// Result type for primitive construction.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Grab handle positions on a rectangle or a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// Start point of a line.
    Start,
    /// End point of a line.
    End,
}

impl Handle {
    /// Mid-edge handles, in hit-test precedence order.
    pub const EDGES: [Handle; 4] = [Handle::Left, Handle::Right, Handle::Top, Handle::Bottom];

    /// Corner handles, in hit-test precedence order.
    pub const CORNERS: [Handle; 4] = [
        Handle::TopLeft,
        Handle::TopRight,
        Handle::BottomLeft,
        Handle::BottomRight,
    ];

    /// Line endpoint handles, in hit-test precedence order.
    pub const ENDPOINTS: [Handle; 2] = [Handle::Start, Handle::End];

    /// The handle on the far side of the rectangle.
    pub fn opposite(self) -> Handle {
        match self {
            Handle::Left => Handle::Right,
            Handle::Right => Handle::Left,
            Handle::Top => Handle::Bottom,
            Handle::Bottom => Handle::Top,
            Handle::TopLeft => Handle::BottomRight,
            Handle::TopRight => Handle::BottomLeft,
            Handle::BottomLeft => Handle::TopRight,
            Handle::BottomRight => Handle::TopLeft,
            Handle::Start => Handle::End,
            Handle::End => Handle::Start,
        }
    }
}

/// Rectangle edges that can be dragged on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Rectangle corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Line endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    Start,
    End,
}

impl From<Edge> for Handle {
    fn from(edge: Edge) -> Self {
        match edge {
            Edge::Left => Handle::Left,
            Edge::Right => Handle::Right,
            Edge::Top => Handle::Top,
            Edge::Bottom => Handle::Bottom,
        }
    }
}

impl From<Corner> for Handle {
    fn from(corner: Corner) -> Self {
        match corner {
            Corner::TopLeft => Handle::TopLeft,
            Corner::TopRight => Handle::TopRight,
            Corner::BottomLeft => Handle::BottomLeft,
            Corner::BottomRight => Handle::BottomRight,
        }
    }
}

impl From<Endpoint> for Handle {
    fn from(endpoint: Endpoint) -> Self {
        match endpoint {
            Endpoint::Start => Handle::Start,
            Endpoint::End => Handle::End,
        }
    }
}

impl TryFrom<Handle> for Edge {
    type Error = Handle;

    fn try_from(handle: Handle) -> Result<Self, Handle> {
        match handle {
            Handle::Left => Ok(Edge::Left),
            Handle::Right => Ok(Edge::Right),
            Handle::Top => Ok(Edge::Top),
            Handle::Bottom => Ok(Edge::Bottom),
            other => Err(other),
        }
    }
}

impl TryFrom<Handle> for Corner {
    type Error = Handle;

    fn try_from(handle: Handle) -> Result<Self, Handle> {
        match handle {
            Handle::TopLeft => Ok(Corner::TopLeft),
            Handle::TopRight => Ok(Corner::TopRight),
            Handle::BottomLeft => Ok(Corner::BottomLeft),
            Handle::BottomRight => Ok(Corner::BottomRight),
            other => Err(other),
        }
    }
}

impl TryFrom<Handle> for Endpoint {
    type Error = Handle;

    fn try_from(handle: Handle) -> Result<Self, Handle> {
        match handle {
            Handle::Start => Ok(Endpoint::Start),
            Handle::End => Ok(Endpoint::End),
            other => Err(other),
        }
    }
}

/// A grab handle: its kind and the hit area centered on its anchor point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrabHandle {
    pub kind: Handle,
    pub area: Rect,
}

impl GrabHandle {
    /// Point the handle is centered on.
    pub fn anchor(&self) -> Point {
        self.area.center()
    }
}

/// Clamp without panicking on inverted or NaN limits.
fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// Clamp a point into `bounds`, independently per axis.
pub fn clip_point(bounds: Rect, point: Point) -> Point {
    let bounds = bounds.abs();
    Point::new(
        clamp(point.x, bounds.x0, bounds.x1),
        clamp(point.y, bounds.y0, bounds.y1),
    )
}

/// Build a rectangle of the given size centered on `center`.
pub fn create_around(center: Point, size: Size) -> Rect {
    Rect::new(
        center.x - size.width / 2.0,
        center.y - size.height / 2.0,
        center.x + size.width / 2.0,
        center.y + size.height / 2.0,
    )
}

/// Build the grab handles for `rect`.
///
/// The four corner handles are always present. Top and bottom mid handles are
/// added when the rectangle is wide enough, left and right mid handles when it
/// is tall enough. The order is fixed: corners, then top/bottom, then
/// left/right.
pub fn grab_handles_around(rect: Rect, handle: Size) -> Vec<GrabHandle> {
    let rect = rect.abs();
    let mut handles: Vec<GrabHandle> = Handle::CORNERS
        .iter()
        .map(|&kind| GrabHandle {
            kind,
            area: create_around(rect.anchor(kind), handle),
        })
        .collect();

    if rect.is_wide_enough_for_mid_handle(handle) {
        for kind in [Handle::Top, Handle::Bottom] {
            handles.push(GrabHandle {
                kind,
                area: create_around(rect.anchor(kind), handle),
            });
        }
    }
    if rect.is_tall_enough_for_mid_handle(handle) {
        for kind in [Handle::Left, Handle::Right] {
            handles.push(GrabHandle {
                kind,
                area: create_around(rect.anchor(kind), handle),
            });
        }
    }
    handles
}

/// Is `point` within `tolerance` of `anchor` on both axes independently?
pub fn is_within(anchor: Point, point: Point, tolerance: Size) -> bool {
    (point.x - anchor.x).abs() <= tolerance.width && (point.y - anchor.y).abs() <= tolerance.height
}

/// Extra rectangle operations used by hit testing and interactors.
pub trait RectExt: Sized {
    /// Clamp every coordinate into `bounds`, per axis.
    fn clip_to(self, bounds: Rect) -> Rect;

    /// Reorder the corners so that `x0 <= x1` and `y0 <= y1`.
    fn normalized(self) -> Rect;

    /// Grow any dimension below the minimum to exactly the minimum, keeping
    /// the midpoint of that axis where it was.
    fn ensure_viable_size(self, min: Size) -> Rect;

    /// Translate (never resize) so the rectangle lies inside `bounds` where it
    /// fits.
    fn shifted_inside(self, bounds: Rect) -> Rect;

    /// Point a given handle is anchored on.
    fn anchor(&self, handle: Handle) -> Point;

    fn top_left(&self) -> Point;
    fn top_right(&self) -> Point;
    fn bottom_left(&self) -> Point;
    fn bottom_right(&self) -> Point;
    fn top_mid(&self) -> Point;
    fn bottom_mid(&self) -> Point;
    fn left_mid(&self) -> Point;
    fn right_mid(&self) -> Point;

    fn is_wide_enough_for_mid_handle(&self, handle: Size) -> bool;
    fn is_tall_enough_for_mid_handle(&self, handle: Size) -> bool;

    /// Whether `handle` is shown for this rectangle at the given handle size.
    fn shows_handle(&self, handle: Handle, size: Size) -> bool;

    /// Closed containment (edges included).
    fn contains_closed(&self, point: Point) -> bool;

    /// Closed containment of a whole rectangle.
    fn contains_rect(&self, other: Rect) -> bool;

    /// Is `point` on the given handle, with half-handle Chebyshev tolerance?
    fn is_on_handle(&self, handle: Handle, point: Point, size: Size) -> bool;

    fn is_on_left_border(&self, point: Point, tolerance: Size) -> bool;
    fn is_on_right_border(&self, point: Point, tolerance: Size) -> bool;
    fn is_on_top_border(&self, point: Point, tolerance: Size) -> bool;
    fn is_on_bottom_border(&self, point: Point, tolerance: Size) -> bool;

    /// Is `point` within `tolerance` of any of the four edges?
    fn is_on_border(&self, point: Point, tolerance: Size) -> bool;
}

impl RectExt for Rect {
    fn clip_to(self, bounds: Rect) -> Rect {
        let bounds = bounds.abs();
        Rect::new(
            clamp(self.x0, bounds.x0, bounds.x1),
            clamp(self.y0, bounds.y0, bounds.y1),
            clamp(self.x1, bounds.x0, bounds.x1),
            clamp(self.y1, bounds.y0, bounds.y1),
        )
    }

    fn normalized(self) -> Rect {
        Rect::new(
            self.x0.min(self.x1),
            self.y0.min(self.y1),
            self.x0.max(self.x1),
            self.y0.max(self.y1),
        )
    }

    fn ensure_viable_size(self, min: Size) -> Rect {
        let mut rect = self;
        if rect.width() < min.width {
            let mid = (rect.x0 + rect.x1) / 2.0;
            rect.x0 = mid - min.width / 2.0;
            rect.x1 = mid + min.width / 2.0;
        }
        if rect.height() < min.height {
            let mid = (rect.y0 + rect.y1) / 2.0;
            rect.y0 = mid - min.height / 2.0;
            rect.y1 = mid + min.height / 2.0;
        }
        rect
    }

    fn shifted_inside(self, bounds: Rect) -> Rect {
        let bounds = bounds.abs();
        let rect = self.normalized();
        let shift = |lo: f64, hi: f64, min: f64, max: f64| {
            if hi - lo > max - min {
                0.0
            } else if lo < min {
                min - lo
            } else if hi > max {
                max - hi
            } else {
                0.0
            }
        };
        let dx = shift(rect.x0, rect.x1, bounds.x0, bounds.x1);
        let dy = shift(rect.y0, rect.y1, bounds.y0, bounds.y1);
        rect + Vec2::new(dx, dy)
    }

    fn anchor(&self, handle: Handle) -> Point {
        match handle {
            Handle::Left => self.left_mid(),
            Handle::Right => self.right_mid(),
            Handle::Top => self.top_mid(),
            Handle::Bottom => self.bottom_mid(),
            Handle::TopLeft | Handle::Start => self.top_left(),
            Handle::TopRight => self.top_right(),
            Handle::BottomLeft => self.bottom_left(),
            Handle::BottomRight | Handle::End => self.bottom_right(),
        }
    }

    fn top_left(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    fn top_right(&self) -> Point {
        Point::new(self.x1, self.y0)
    }

    fn bottom_left(&self) -> Point {
        Point::new(self.x0, self.y1)
    }

    fn bottom_right(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    fn top_mid(&self) -> Point {
        Point::new((self.x0 + self.x1) / 2.0, self.y0)
    }

    fn bottom_mid(&self) -> Point {
        Point::new((self.x0 + self.x1) / 2.0, self.y1)
    }

    fn left_mid(&self) -> Point {
        Point::new(self.x0, (self.y0 + self.y1) / 2.0)
    }

    fn right_mid(&self) -> Point {
        Point::new(self.x1, (self.y0 + self.y1) / 2.0)
    }

    fn is_wide_enough_for_mid_handle(&self, handle: Size) -> bool {
        self.width().abs() >= MIN_RELATIVE_SIZE_FOR_MID_HANDLES * handle.width
    }

    fn is_tall_enough_for_mid_handle(&self, handle: Size) -> bool {
        self.height().abs() >= MIN_RELATIVE_SIZE_FOR_MID_HANDLES * handle.height
    }

    fn shows_handle(&self, handle: Handle, size: Size) -> bool {
        match handle {
            Handle::Top | Handle::Bottom => self.is_wide_enough_for_mid_handle(size),
            Handle::Left | Handle::Right => self.is_tall_enough_for_mid_handle(size),
            _ => true,
        }
    }

    fn contains_closed(&self, point: Point) -> bool {
        let r = self.normalized();
        point.x >= r.x0 && point.x <= r.x1 && point.y >= r.y0 && point.y <= r.y1
    }

    fn contains_rect(&self, other: Rect) -> bool {
        let other = other.normalized();
        self.contains_closed(other.top_left()) && self.contains_closed(other.bottom_right())
    }

    fn is_on_handle(&self, handle: Handle, point: Point, size: Size) -> bool {
        let half = Size::new(size.width / 2.0, size.height / 2.0);
        is_within(self.anchor(handle), point, half)
    }

    fn is_on_left_border(&self, point: Point, tolerance: Size) -> bool {
        (point.x - self.x0).abs() <= tolerance.width
            && point.y >= self.y0 - tolerance.height
            && point.y <= self.y1 + tolerance.height
    }

    fn is_on_right_border(&self, point: Point, tolerance: Size) -> bool {
        (point.x - self.x1).abs() <= tolerance.width
            && point.y >= self.y0 - tolerance.height
            && point.y <= self.y1 + tolerance.height
    }

    fn is_on_top_border(&self, point: Point, tolerance: Size) -> bool {
        (point.y - self.y0).abs() <= tolerance.height
            && point.x >= self.x0 - tolerance.width
            && point.x <= self.x1 + tolerance.width
    }

    fn is_on_bottom_border(&self, point: Point, tolerance: Size) -> bool {
        (point.y - self.y1).abs() <= tolerance.height
            && point.x >= self.x0 - tolerance.width
            && point.x <= self.x1 + tolerance.width
    }

    fn is_on_border(&self, point: Point, tolerance: Size) -> bool {
        let r = self.normalized();
        r.is_on_left_border(point, tolerance)
            || r.is_on_right_border(point, tolerance)
            || r.is_on_top_border(point, tolerance)
            || r.is_on_bottom_border(point, tolerance)
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Read a segment out of a "line rect": `(x0, y0)` is the start and
    /// `(x1, y1)` the end. The rect is not normalized, so direction survives.
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(Point::new(rect.x0, rect.y0), Point::new(rect.x1, rect.y1))
    }

    /// The inverse of [`Segment::from_rect`].
    pub fn as_rect(&self) -> Rect {
        Rect::new(self.start.x, self.start.y, self.end.x, self.end.y)
    }

    /// Axis-aligned box around both endpoints.
    pub fn bounding_rect(&self) -> Rect {
        self.as_rect().normalized()
    }

    pub fn translate(&self, delta: Vec2) -> Self {
        Self::new(self.start + delta, self.end + delta)
    }

    pub fn with_start(&self, start: Point) -> Self {
        Self::new(start, self.end)
    }

    pub fn with_end(&self, end: Point) -> Self {
        Self::new(self.start, end)
    }

    /// Point a line handle is anchored on.
    pub fn anchor(&self, handle: Handle) -> Option<Point> {
        match handle {
            Handle::Start => Some(self.start),
            Handle::End => Some(self.end),
            _ => None,
        }
    }

    /// Shortest distance from `point` to the segment.
    pub fn distance_to(&self, point: Point) -> f64 {
        let seg = self.end - self.start;
        let pv = point - self.start;
        let len_sq = seg.hypot2();
        if len_sq < f64::EPSILON {
            return pv.hypot();
        }
        let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
        let proj = self.start + seg * t;
        (point - proj).hypot()
    }
}

impl Segment {
    /// Does the segment touch or cross `rect`?
    pub fn intersects_rect(&self, rect: Rect) -> bool {
        let rect = rect.normalized();
        if rect.contains_closed(self.start) || rect.contains_closed(self.end) {
            return true;
        }
        let edges = [
            (rect.top_left(), rect.top_right()),
            (rect.top_right(), rect.bottom_right()),
            (rect.bottom_right(), rect.bottom_left()),
            (rect.bottom_left(), rect.top_left()),
        ];
        edges
            .iter()
            .any(|&(c, d)| segments_intersect(self.start, self.end, c, d))
    }
}

/// Test if two segments (a-b) and (c-d) intersect.
fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let cross = |o: Point, p: Point, q: Point| -> f64 {
        (p.x - o.x) * (q.y - o.y) - (p.y - o.y) * (q.x - o.x)
    };
    let d1 = cross(c, d, a);
    let d2 = cross(c, d, b);
    let d3 = cross(a, b, c);
    let d4 = cross(a, b, d);
    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }
    // Collinear: an endpoint lying on the other segment.
    let on_segment = |p: Point, q: Point, r: Point| -> bool {
        r.x >= p.x.min(q.x) && r.x <= p.x.max(q.x) && r.y >= p.y.min(q.y) && r.y <= p.y.max(q.y)
    };
    (d1.abs() < 1e-10 && on_segment(c, d, a))
        || (d2.abs() < 1e-10 && on_segment(c, d, b))
        || (d3.abs() < 1e-10 && on_segment(a, b, c))
        || (d4.abs() < 1e-10 && on_segment(a, b, d))
}

impl From<Segment> for kurbo::Line {
    fn from(segment: Segment) -> Self {
        kurbo::Line::new(segment.start, segment.end)
    }
}

impl From<kurbo::Line> for Segment {
    fn from(line: kurbo::Line) -> Self {
        Segment::new(line.p0, line.p1)
    }
}

fn unrecognized(kind: &'static str, value: &Value) -> GeometryError {
    GeometryError::Unrecognized {
        kind,
        value: value.to_string(),
    }
}

/// Pull `N` numbers out of a JSON array, or out of an object by key.
fn numbers<const N: usize>(value: &Value, keys: [&str; N]) -> Option<[f64; N]> {
    let mut out = [0.0; N];
    match value {
        Value::Array(items) if items.len() == N => {
            for (slot, item) in out.iter_mut().zip(items) {
                *slot = item.as_f64()?;
            }
        }
        Value::Object(map) => {
            for (slot, key) in out.iter_mut().zip(keys) {
                *slot = map.get(key)?.as_f64()?;
            }
        }
        _ => return None,
    }
    Some(out)
}

/// Build a point from `{"x", "y"}` or `[x, y]`.
pub fn point_from_value(value: &Value) -> GeometryResult<Point> {
    let [x, y] = numbers(value, ["x", "y"]).ok_or_else(|| unrecognized("point", value))?;
    Ok(Point::new(x, y))
}

/// Build a rectangle from `{"x", "y", "dx", "dy"}`, `{"x0", "y0", "x1", "y1"}`
/// or `[x, y, dx, dy]`. Negative extents are kept as given; extents whose
/// corner overflows are rejected.
pub fn rect_from_value(value: &Value) -> GeometryResult<Rect> {
    let rect = if let Some([x, y, dx, dy]) = numbers(value, ["x", "y", "dx", "dy"]) {
        Rect::new(x, y, x + dx, y + dy)
    } else if let Some([x0, y0, x1, y1]) = numbers(value, ["x0", "y0", "x1", "y1"]) {
        Rect::new(x0, y0, x1, y1)
    } else {
        return Err(unrecognized("rectangle", value));
    };
    if [rect.x0, rect.y0, rect.x1, rect.y1].iter().all(|c| c.is_finite()) {
        Ok(rect)
    } else {
        Err(GeometryError::NonFinite("rectangle"))
    }
}

impl TryFrom<&Value> for Segment {
    type Error = GeometryError;

    /// Accepts `{"start": point, "end": point}` or `[x1, y1, x2, y2]`.
    fn try_from(value: &Value) -> GeometryResult<Self> {
        if let Some([x1, y1, x2, y2]) = numbers(value, ["x1", "y1", "x2", "y2"]) {
            return Ok(Segment::new(Point::new(x1, y1), Point::new(x2, y2)));
        }
        match (value.get("start"), value.get("end")) {
            (Some(start), Some(end)) => Ok(Segment::new(
                point_from_value(start)?,
                point_from_value(end)?,
            )),
            _ => Err(unrecognized("line", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clip_rect_inside_is_identity() {
        let bounds = Rect::new(0.0, 0.0, 300.0, 300.0);
        let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
        assert_eq!(rect.clip_to(bounds), rect);
    }

    #[test]
    fn test_clip_rect_clamps_each_coordinate() {
        let bounds = Rect::new(50.0, 50.0, 300.0, 300.0);
        let rect = Rect::new(10.0, 251.0, 400.0, 351.0);
        let clipped = rect.clip_to(bounds);
        assert_eq!(clipped, Rect::new(50.0, 251.0, 300.0, 300.0));
        assert!(bounds.contains_rect(clipped));
    }

    #[test]
    fn test_clip_keeps_direction() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let rect = Rect::new(80.0, 80.0, -20.0, 10.0);
        assert_eq!(rect.clip_to(bounds), Rect::new(80.0, 80.0, 0.0, 10.0));
    }

    #[test]
    fn test_clip_point() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(clip_point(bounds, Point::new(-5.0, 20.0)), Point::new(0.0, 20.0));
        assert_eq!(clip_point(bounds, Point::new(120.0, 70.0)), Point::new(100.0, 50.0));
        assert_eq!(clip_point(bounds, Point::new(40.0, 30.0)), Point::new(40.0, 30.0));
    }

    #[test]
    fn test_normalize() {
        let rect = Rect::new(100.0, 80.0, 20.0, 10.0);
        let norm = rect.normalized();
        assert_eq!(norm, Rect::new(20.0, 10.0, 100.0, 80.0));
        assert_eq!(norm.normalized(), norm);
    }

    #[test]
    fn test_ensure_viable_size_grows_around_midpoint() {
        let rect = Rect::new(10.0, 10.0, 14.0, 60.0);
        let grown = rect.ensure_viable_size(Size::new(16.0, 16.0));
        assert!((grown.width() - 16.0).abs() < f64::EPSILON);
        assert!((grown.center().x - 12.0).abs() < f64::EPSILON);
        // Tall enough already: untouched.
        assert!((grown.y0 - 10.0).abs() < f64::EPSILON);
        assert!((grown.y1 - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ensure_viable_size_never_shrinks() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        assert_eq!(rect.ensure_viable_size(Size::new(16.0, 16.0)), rect);
    }

    #[test]
    fn test_shifted_inside() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let rect = Rect::new(-8.0, 92.0, 8.0, 108.0);
        assert_eq!(rect.shifted_inside(bounds), Rect::new(0.0, 84.0, 16.0, 100.0));
        // Too large to fit: left alone on that axis.
        let wide = Rect::new(-10.0, 10.0, 150.0, 20.0);
        assert_eq!(wide.shifted_inside(bounds), wide);
    }

    #[test]
    fn test_create_around() {
        let rect = create_around(Point::new(100.0, 100.0), Size::new(96.0, 48.0));
        assert_eq!(rect, Rect::new(52.0, 76.0, 148.0, 124.0));
    }

    #[test]
    fn test_corners_and_midpoints() {
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        assert_eq!(rect.top_left(), Point::new(0.0, 0.0));
        assert_eq!(rect.top_right(), Point::new(100.0, 0.0));
        assert_eq!(rect.bottom_left(), Point::new(0.0, 40.0));
        assert_eq!(rect.bottom_right(), Point::new(100.0, 40.0));
        assert_eq!(rect.top_mid(), Point::new(50.0, 0.0));
        assert_eq!(rect.bottom_mid(), Point::new(50.0, 40.0));
        assert_eq!(rect.left_mid(), Point::new(0.0, 20.0));
        assert_eq!(rect.right_mid(), Point::new(100.0, 20.0));
    }

    #[test]
    fn test_grab_handles_small_rect_has_corners_only() {
        let handle = Size::new(8.0, 8.0);
        let handles = grab_handles_around(Rect::new(0.0, 0.0, 47.0, 47.0), handle);
        assert_eq!(handles.len(), 4);
        assert!(handles.iter().all(|h| Handle::CORNERS.contains(&h.kind)));
    }

    #[test]
    fn test_grab_handles_wide_rect_adds_top_and_bottom() {
        let handle = Size::new(8.0, 8.0);
        let handles = grab_handles_around(Rect::new(0.0, 0.0, 48.0, 20.0), handle);
        let kinds: Vec<Handle> = handles.iter().map(|h| h.kind).collect();
        assert_eq!(
            kinds,
            vec![
                Handle::TopLeft,
                Handle::TopRight,
                Handle::BottomLeft,
                Handle::BottomRight,
                Handle::Top,
                Handle::Bottom,
            ]
        );
        assert_eq!(handles[4].anchor(), Point::new(24.0, 0.0));
    }

    #[test]
    fn test_grab_handles_large_rect_has_all_eight() {
        let handle = Size::new(8.0, 8.0);
        let handles = grab_handles_around(Rect::new(0.0, 0.0, 100.0, 100.0), handle);
        assert_eq!(handles.len(), 8);
        assert_eq!(handles[6].kind, Handle::Left);
        assert_eq!(handles[7].kind, Handle::Right);
        assert!((handles[0].area.width() - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_handle_tolerance_is_per_axis() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let size = Size::new(8.0, 8.0);
        // Corner of the tolerance square: Euclidean distance > 4, still a hit.
        assert!(rect.is_on_handle(Handle::TopLeft, Point::new(4.0, 4.0), size));
        assert!(!rect.is_on_handle(Handle::TopLeft, Point::new(4.5, 0.0), size));
    }

    #[test]
    fn test_border_tolerance() {
        let rect = Rect::new(10.0, 10.0, 110.0, 60.0);
        let tol = Size::new(4.0, 4.0);
        assert!(rect.is_on_border(Point::new(13.0, 30.0), tol));
        assert!(rect.is_on_border(Point::new(60.0, 64.0), tol));
        assert!(!rect.is_on_border(Point::new(60.0, 30.0), tol));
        assert!(!rect.is_on_border(Point::new(60.0, 65.0), tol));
    }

    #[test]
    fn test_segment_distance() {
        let seg = Segment::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!((seg.distance_to(Point::new(50.0, 3.0)) - 3.0).abs() < f64::EPSILON);
        assert!((seg.distance_to(Point::new(103.0, 4.0)) - 5.0).abs() < 1e-9);
        let dot = Segment::new(Point::new(5.0, 5.0), Point::new(5.0, 5.0));
        assert!((dot.distance_to(Point::new(8.0, 9.0)) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_segment_rect_round_trip_keeps_direction() {
        let seg = Segment::new(Point::new(90.0, 10.0), Point::new(10.0, 50.0));
        let rect = seg.as_rect();
        assert!(rect.width() < 0.0);
        assert_eq!(Segment::from_rect(rect), seg);
        assert_eq!(seg.bounding_rect(), Rect::new(10.0, 10.0, 90.0, 50.0));
    }

    #[test]
    fn test_segment_intersects_rect() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        let crossing = Segment::new(Point::new(0.0, 15.0), Point::new(30.0, 15.0));
        let inside = Segment::new(Point::new(12.0, 12.0), Point::new(18.0, 18.0));
        let outside = Segment::new(Point::new(0.0, 0.0), Point::new(30.0, 5.0));
        assert!(crossing.intersects_rect(rect));
        assert!(inside.intersects_rect(rect));
        assert!(!outside.intersects_rect(rect));
    }

    #[test]
    fn test_handle_conversions() {
        assert_eq!(Edge::try_from(Handle::Top), Ok(Edge::Top));
        assert_eq!(Corner::try_from(Handle::Top), Err(Handle::Top));
        assert_eq!(Handle::from(Corner::BottomLeft).opposite(), Handle::TopRight);
        assert_eq!(Endpoint::try_from(Handle::End), Ok(Endpoint::End));
    }

    #[test]
    fn test_values_build_primitives() {
        assert_eq!(
            point_from_value(&json!({"x": 1.0, "y": 2.0})),
            Ok(Point::new(1.0, 2.0))
        );
        assert_eq!(point_from_value(&json!([3, 4])), Ok(Point::new(3.0, 4.0)));
        assert_eq!(
            rect_from_value(&json!({"x": 52, "y": 76, "dx": 96, "dy": 48})),
            Ok(Rect::new(52.0, 76.0, 148.0, 124.0))
        );
        assert_eq!(
            rect_from_value(&json!({"x0": 1, "y0": 2, "x1": 3, "y1": 4})),
            Ok(Rect::new(1.0, 2.0, 3.0, 4.0))
        );
        let seg = Segment::try_from(&json!({"start": [0, 0], "end": {"x": 5, "y": 6}}));
        assert_eq!(seg, Ok(Segment::new(Point::ZERO, Point::new(5.0, 6.0))));
    }

    #[test]
    fn test_unrecognized_values_are_rejected() {
        assert!(matches!(
            point_from_value(&json!("origin")),
            Err(GeometryError::Unrecognized { kind: "point", .. })
        ));
        assert!(rect_from_value(&json!([1, 2, 3])).is_err());
        assert!(Segment::try_from(&json!({"start": [0, 0]})).is_err());
    }

    #[test]
    fn test_overflowing_rect_is_rejected() {
        assert_eq!(
            rect_from_value(&json!([1e308, 0, 1e308, 10])),
            Err(GeometryError::NonFinite("rectangle"))
        );
        assert!(rect_from_value(&json!({"x0": 1e308, "y0": 0, "x1": 1e308, "y1": 1})).is_ok());
    }
}
