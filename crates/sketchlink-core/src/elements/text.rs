//! Text element.

use super::{clamp_font_size, Color, ElementId, ElementPatch};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Font style options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
}

impl FontStyle {
    /// Toggle bold on or off: bold becomes normal, anything else becomes bold.
    pub fn toggle_bold(self) -> Self {
        match self {
            FontStyle::Bold => FontStyle::Normal,
            _ => FontStyle::Bold,
        }
    }

    /// Toggle italic on or off: italic becomes normal, anything else becomes italic.
    pub fn toggle_italic(self) -> Self {
        match self {
            FontStyle::Italic => FontStyle::Normal,
            _ => FontStyle::Italic,
        }
    }
}

/// Text decoration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
}

impl TextDecoration {
    /// Toggle underline on or off.
    pub fn toggle_underline(self) -> Self {
        match self {
            TextDecoration::Underline => TextDecoration::None,
            TextDecoration::None => TextDecoration::Underline,
        }
    }
}

/// A text element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    /// Unique id, assigned by the document store on add.
    #[serde(default)]
    pub(crate) id: ElementId,
    /// Text anchor position.
    pub position: Point,
    /// The text content.
    pub text: String,
    /// Font size in pixels, kept between [`super::FONT_SIZE_MIN`] and
    /// [`super::FONT_SIZE_MAX`].
    ///
    /// Stored as `f64`: resize gestures scale the size by a fractional
    /// factor, so fractional values are expected.
    pub font_size: f64,
    /// Font style.
    #[serde(default)]
    pub font_style: FontStyle,
    /// Text decoration.
    #[serde(default)]
    pub text_decoration: TextDecoration,
    /// Fill color (None = renderer default).
    pub fill: Option<Color>,
    /// Whether the element responds to drag gestures.
    pub draggable: bool,
    /// Rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
}

impl TextElement {
    /// Default font size.
    pub const DEFAULT_FONT_SIZE: f64 = 20.0;

    /// Create a new text element.
    pub fn new(position: Point, text: impl Into<String>) -> Self {
        Self {
            id: ElementId::new(),
            position,
            text: text.into(),
            font_size: Self::DEFAULT_FONT_SIZE,
            font_style: FontStyle::default(),
            text_decoration: TextDecoration::default(),
            fill: Some(Color::black()),
            draggable: true,
            rotation: 0.0,
        }
    }

    /// Set the font size (clamped).
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = clamp_font_size(size);
        self
    }

    pub(crate) fn apply(&mut self, patch: &ElementPatch) {
        if let Some(text) = &patch.text {
            self.text = text.clone();
        }
        if let Some(font_size) = patch.font_size {
            self.font_size = clamp_font_size(font_size);
        }
        if let Some(font_style) = patch.font_style {
            self.font_style = font_style;
        }
        if let Some(text_decoration) = patch.text_decoration {
            self.text_decoration = text_decoration;
        }
    }
}
