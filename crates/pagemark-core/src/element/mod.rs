//! Element model for the canvas document.

mod image;
mod shape;
mod text;

pub use image::ImageProps;
pub use shape::{ShapeKind, ShapeProps};
pub use text::{
    FontStyle, FontWeight, TextAlign, TextProps, TextUpdate, TranslationStatus, VerticalAlign,
};

use kurbo::{Point, Rect};
use peniko::Color as PenikoColor;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// Minimum width/height an element may be resized to.
pub const MIN_ELEMENT_SIZE: f64 = 20.0;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Parse a CSS hex color string (#rgb, #rrggbb, #rrggbbaa).
    /// Returns None for anything else.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?.trim();
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Self::new(r, g, b, 255))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b, 255))
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self::new(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Format as a CSS hex string (#rrggbb, or #rrggbbaa when not opaque).
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<PenikoColor> for Color {
    fn from(color: PenikoColor) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Color> for PenikoColor {
    fn from(color: Color) -> Self {
        PenikoColor::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Per-variant payload of an element.
///
/// The tag is the only place an element's variant lives; base-attribute
/// updates cannot touch it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementPayload {
    Text(TextProps),
    Image(ImageProps),
    Shape(ShapeProps),
}

impl ElementPayload {
    /// Variant name as used in serialized form.
    pub fn kind(&self) -> &'static str {
        match self {
            ElementPayload::Text(_) => "text",
            ElementPayload::Image(_) => "image",
            ElementPayload::Shape(_) => "shape",
        }
    }
}

/// One positioned, styled visual object on the canvas.
///
/// Elements are plain values: a clone is a deep, independent snapshot,
/// which is what the history engine stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub(crate) id: ElementId,
    /// Left edge of the frame.
    pub x: f64,
    /// Top edge of the frame.
    pub y: f64,
    /// Frame width; stays >= MIN_ELEMENT_SIZE after any resize.
    pub width: f64,
    /// Frame height; stays >= MIN_ELEMENT_SIZE after any resize.
    pub height: f64,
    /// Rotation in degrees around the frame center.
    pub rotation: f64,
    /// Opacity in [0, 1].
    pub opacity: f64,
    pub visible: bool,
    pub locked: bool,
    /// Paint-order key, maintained by the document store.
    pub(crate) z_index: usize,
    pub(crate) payload: ElementPayload,
}

impl Element {
    pub(crate) fn new(id: ElementId, z_index: usize, new: NewElement) -> Self {
        Self {
            id,
            x: new.x,
            y: new.y,
            width: new.width,
            height: new.height,
            rotation: new.rotation,
            opacity: new.opacity,
            visible: new.visible,
            locked: new.locked,
            z_index,
            payload: new.payload,
        }
    }

    /// Get the unique identifier.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Get the paint-order key (higher paints on top).
    pub fn z_index(&self) -> usize {
        self.z_index
    }

    /// Get the variant payload.
    pub fn payload(&self) -> &ElementPayload {
        &self.payload
    }

    /// Get the frame as a kurbo Rect.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Get the frame center.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if this element is a text element.
    pub fn is_text(&self) -> bool {
        matches!(self.payload, ElementPayload::Text(_))
    }

    /// Get the text payload if this is a text element.
    pub fn as_text(&self) -> Option<&TextProps> {
        match &self.payload {
            ElementPayload::Text(t) => Some(t),
            _ => None,
        }
    }

    pub(crate) fn as_text_mut(&mut self) -> Option<&mut TextProps> {
        match &mut self.payload {
            ElementPayload::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Get the image payload if this is an image element.
    pub fn as_image(&self) -> Option<&ImageProps> {
        match &self.payload {
            ElementPayload::Image(i) => Some(i),
            _ => None,
        }
    }

    /// Get the shape payload if this is a shape element.
    pub fn as_shape(&self) -> Option<&ShapeProps> {
        match &self.payload {
            ElementPayload::Shape(s) => Some(s),
            _ => None,
        }
    }
}

/// Field set for creating an element; the document store assigns the id
/// and z-index.
#[derive(Debug, Clone)]
pub struct NewElement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub opacity: f64,
    pub visible: bool,
    pub locked: bool,
    pub payload: ElementPayload,
}

impl NewElement {
    /// Create with the given frame and payload; other attributes default.
    pub fn new(x: f64, y: f64, width: f64, height: f64, payload: ElementPayload) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
            opacity: 1.0,
            visible: true,
            locked: false,
            payload,
        }
    }
}

/// Partial update over an element's base attributes.
///
/// `None` fields are left unchanged. There is deliberately no payload
/// field here; variant content is updated through the typed per-variant
/// operations on the document store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElementUpdate {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub opacity: Option<f64>,
    pub visible: Option<bool>,
    pub locked: Option<bool>,
}

impl ElementUpdate {
    pub(crate) fn apply(&self, element: &mut Element) {
        if let Some(x) = self.x {
            element.x = x;
        }
        if let Some(y) = self.y {
            element.y = y;
        }
        if let Some(width) = self.width {
            element.width = width;
        }
        if let Some(height) = self.height {
            element.height = height;
        }
        if let Some(rotation) = self.rotation {
            element.rotation = rotation;
        }
        if let Some(opacity) = self.opacity {
            element.opacity = opacity;
        }
        if let Some(visible) = self.visible {
            element.visible = visible;
        }
        if let Some(locked) = self.locked {
            element.locked = locked;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#000000"), Some(Color::black()));
        assert_eq!(Color::from_hex("#fff"), Some(Color::white()));
        assert_eq!(
            Color::from_hex("#ff000080"),
            Some(Color::new(255, 0, 0, 128))
        );
        assert_eq!(Color::from_hex("red"), None);
        assert_eq!(Color::from_hex("#12345"), None);
    }

    #[test]
    fn test_color_hex_roundtrip() {
        let color = Color::new(18, 52, 86, 255);
        assert_eq!(color.to_hex(), "#123456");
        assert_eq!(Color::from_hex(&color.to_hex()), Some(color));

        let translucent = Color::new(18, 52, 86, 128);
        assert_eq!(Color::from_hex(&translucent.to_hex()), Some(translucent));
    }

    #[test]
    fn test_element_rect() {
        let el = Element::new(
            Uuid::new_v4(),
            0,
            NewElement::new(
                10.0,
                20.0,
                100.0,
                50.0,
                ElementPayload::Shape(ShapeProps::new(ShapeKind::Rectangle)),
            ),
        );
        let rect = el.rect();
        assert!((rect.x0 - 10.0).abs() < f64::EPSILON);
        assert!((rect.y0 - 20.0).abs() < f64::EPSILON);
        assert!((rect.x1 - 110.0).abs() < f64::EPSILON);
        assert!((rect.y1 - 70.0).abs() < f64::EPSILON);
        assert!((el.center().x - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_update_merges_only_set_fields() {
        let mut el = Element::new(
            Uuid::new_v4(),
            0,
            NewElement::new(
                0.0,
                0.0,
                100.0,
                100.0,
                ElementPayload::Shape(ShapeProps::new(ShapeKind::Ellipse)),
            ),
        );
        let update = ElementUpdate {
            x: Some(25.0),
            locked: Some(true),
            ..Default::default()
        };
        update.apply(&mut el);
        assert!((el.x - 25.0).abs() < f64::EPSILON);
        assert!(el.locked);
        // Untouched fields keep their values
        assert!((el.width - 100.0).abs() < f64::EPSILON);
        assert!(el.visible);
    }

    #[test]
    fn test_payload_kind() {
        let payload = ElementPayload::Image(ImageProps::new("page.png", 640, 480));
        assert_eq!(payload.kind(), "image");
    }

    #[test]
    fn test_element_serde_roundtrip() {
        let el = Element::new(
            Uuid::new_v4(),
            3,
            NewElement::new(
                5.0,
                6.0,
                120.0,
                40.0,
                ElementPayload::Text(TextProps::new("Hi", None)),
            ),
        );
        let json = serde_json::to_string(&el).unwrap();
        assert!(json.contains("\"type\":\"text\""));

        let back: Element = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id(), el.id());
        assert_eq!(back.z_index(), 3);
        assert_eq!(back.as_text().map(|t| t.content.as_str()), Some("Hi"));
    }
}
