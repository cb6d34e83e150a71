//! Pure geometry helpers for element manipulation and hit testing.

use crate::element::{Element, MIN_ELEMENT_SIZE};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Axis-aligned frame in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    /// Create a new frame.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the frame of an element (rotation not applied).
    pub fn of_element(element: &Element) -> Self {
        Self::new(element.x, element.y, element.width, element.height)
    }

    /// Get the frame as a kurbo Rect.
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Width / height ratio.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// The eight compass resize handles around an element frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// Minimal axis-aligned rectangle enclosing all element frames.
///
/// Rotation is ignored; the box is computed from the raw frames. Returns
/// None for an empty input.
pub fn bounding_box<'a>(elements: impl IntoIterator<Item = &'a Element>) -> Option<Rect> {
    let mut result: Option<Rect> = None;
    for element in elements {
        let rect = element.rect();
        result = Some(match result {
            Some(r) => r.union(rect),
            None => rect,
        });
    }
    result
}

/// Snap a value to the nearest grid line.
pub fn snap_to_grid(value: f64, grid_size: f64) -> f64 {
    (value / grid_size).round() * grid_size
}

/// Correct candidate dimensions to honor a target aspect ratio.
///
/// If the candidate is relatively too wide, width is derived from height;
/// otherwise height is derived from width.
pub fn constrain_aspect_ratio(width: f64, height: f64, aspect_ratio: f64) -> (f64, f64) {
    if width / height > aspect_ratio {
        (height * aspect_ratio, height)
    } else {
        (width, width / aspect_ratio)
    }
}

/// Rotate a point around a pivot by an angle in degrees.
pub fn rotate_point(point: Point, pivot: Point, degrees: f64) -> Point {
    let radians = degrees.to_radians();
    let (sin, cos) = radians.sin_cos();
    let dx = point.x - pivot.x;
    let dy = point.y - pivot.y;
    Point::new(
        cos * dx - sin * dy + pivot.x,
        sin * dx + cos * dy + pivot.y,
    )
}

/// Test whether a point lies inside a rectangle rotated around its center.
///
/// The point is rotated by the negative of the rectangle's rotation, then
/// tested against the axis-aligned rectangle (edges inclusive).
pub fn point_in_rotated_rect(point: Point, rect: Rect, rotation_degrees: f64) -> bool {
    let local = rotate_point(point, rect.center(), -rotation_degrees);
    local.x >= rect.x0 && local.x <= rect.x1 && local.y >= rect.y0 && local.y <= rect.y1
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (b - a).hypot()
}

/// Angle from one point to another, in degrees (atan2 convention).
pub fn angle(from: Point, to: Point) -> f64 {
    (to.y - from.y).atan2(to.x - from.x).to_degrees()
}

/// Compute the new frame for a handle drag.
///
/// Corner handles adjust two dimensions plus the origin on the adjacent
/// sides; edge handles adjust one dimension, moving the origin only on the
/// near edge. With `preserve_aspect`, the starting frame's aspect ratio is
/// reapplied before clamping. The minimum-size floor is applied last and
/// wins over the aspect lock at extreme drags.
pub fn resize_frame(
    frame: Frame,
    handle: ResizeHandle,
    dx: f64,
    dy: f64,
    preserve_aspect: bool,
) -> Frame {
    let aspect_ratio = frame.aspect_ratio();
    let Frame {
        mut x,
        mut y,
        mut width,
        mut height,
    } = frame;

    match handle {
        ResizeHandle::NorthWest => {
            x += dx;
            y += dy;
            width -= dx;
            height -= dy;
        }
        ResizeHandle::North => {
            y += dy;
            height -= dy;
        }
        ResizeHandle::NorthEast => {
            y += dy;
            width += dx;
            height -= dy;
        }
        ResizeHandle::East => {
            width += dx;
        }
        ResizeHandle::SouthEast => {
            width += dx;
            height += dy;
        }
        ResizeHandle::South => {
            height += dy;
        }
        ResizeHandle::SouthWest => {
            x += dx;
            width -= dx;
            height += dy;
        }
        ResizeHandle::West => {
            x += dx;
            width -= dx;
        }
    }

    if preserve_aspect {
        let (w, h) = constrain_aspect_ratio(width, height, aspect_ratio);
        width = w;
        height = h;
    }

    width = width.max(MIN_ELEMENT_SIZE);
    height = height.max(MIN_ELEMENT_SIZE);

    Frame {
        x,
        y,
        width,
        height,
    }
}
