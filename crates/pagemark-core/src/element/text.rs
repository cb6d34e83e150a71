//! Text element payload.

use super::Color;
use serde::{Deserialize, Serialize};

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical text alignment within the element frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// Font weight options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Font style options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Review state of a translated text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationStatus {
    #[default]
    Pending,
    Translated,
    Reviewed,
}

impl TranslationStatus {
    /// Get display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            TranslationStatus::Pending => "Pending",
            TranslationStatus::Translated => "Translated",
            TranslationStatus::Reviewed => "Reviewed",
        }
    }
}

/// Payload of a text element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextProps {
    /// Editable display text.
    pub content: String,
    /// Source text as detected/imported; kept untouched so the original
    /// wording stays available throughout the translation workflow.
    pub original_content: String,
    /// Translated text, if different from the display content.
    pub translated_content: String,
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub align: TextAlign,
    pub vertical_align: VerticalAlign,
    pub fill: Color,
    /// Outline color (None = no outline).
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    /// Line height as a multiple of the font size.
    pub line_height: f64,
    pub status: TranslationStatus,
}

impl TextProps {
    /// Default font family for new text elements.
    pub const DEFAULT_FONT_FAMILY: &'static str = "Arial";
    /// Default font size in pixels.
    pub const DEFAULT_FONT_SIZE: f64 = 16.0;
    /// Default line height multiplier.
    pub const DEFAULT_LINE_HEIGHT: f64 = 1.2;

    /// Create text properties with default typography.
    ///
    /// `original_content` falls back to `content` when not supplied.
    pub fn new(content: impl Into<String>, original_content: Option<String>) -> Self {
        let content = content.into();
        let original_content = original_content.unwrap_or_else(|| content.clone());
        Self {
            content,
            original_content,
            translated_content: String::new(),
            font_family: Self::DEFAULT_FONT_FAMILY.to_string(),
            font_size: Self::DEFAULT_FONT_SIZE,
            font_weight: FontWeight::default(),
            font_style: FontStyle::default(),
            align: TextAlign::default(),
            vertical_align: VerticalAlign::default(),
            fill: Color::black(),
            stroke: None,
            stroke_width: 0.0,
            line_height: Self::DEFAULT_LINE_HEIGHT,
            status: TranslationStatus::default(),
        }
    }
}

/// Partial update over a text payload; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextUpdate {
    pub content: Option<String>,
    pub translated_content: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    pub align: Option<TextAlign>,
    pub vertical_align: Option<VerticalAlign>,
    pub fill: Option<Color>,
    pub stroke: Option<Option<Color>>,
    pub stroke_width: Option<f64>,
    pub line_height: Option<f64>,
    pub status: Option<TranslationStatus>,
}

impl TextUpdate {
    pub(crate) fn apply(&self, text: &mut TextProps) {
        if let Some(content) = &self.content {
            text.content = content.clone();
        }
        if let Some(translated) = &self.translated_content {
            text.translated_content = translated.clone();
        }
        if let Some(family) = &self.font_family {
            text.font_family = family.clone();
        }
        if let Some(size) = self.font_size {
            text.font_size = size;
        }
        if let Some(weight) = self.font_weight {
            text.font_weight = weight;
        }
        if let Some(style) = self.font_style {
            text.font_style = style;
        }
        if let Some(align) = self.align {
            text.align = align;
        }
        if let Some(vertical) = self.vertical_align {
            text.vertical_align = vertical;
        }
        if let Some(fill) = self.fill {
            text.fill = fill;
        }
        if let Some(stroke) = self.stroke {
            text.stroke = stroke;
        }
        if let Some(width) = self.stroke_width {
            text.stroke_width = width;
        }
        if let Some(line_height) = self.line_height {
            text.line_height = line_height;
        }
        if let Some(status) = self.status {
            text.status = status;
        }
    }
}
