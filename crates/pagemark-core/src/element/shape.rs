//! Shape element payload.

use super::Color;
use serde::{Deserialize, Serialize};

/// Geometric kind of a shape element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Ellipse,
    Line,
    Arrow,
}

/// Payload of a shape element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeProps {
    pub kind: ShapeKind,
    /// Fill color (None = no fill).
    pub fill: Option<Color>,
    pub stroke: Color,
    pub stroke_width: f64,
    /// Corner radius for rectangles (0 = sharp corners).
    pub corner_radius: f64,
}

impl ShapeProps {
    /// Default stroke width for new shapes.
    pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

    /// Create a shape payload with default styling.
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            fill: None,
            stroke: Color::black(),
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
            corner_radius: 0.0,
        }
    }
}
