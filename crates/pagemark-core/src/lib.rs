//! Pagemark Core Library
//!
//! Platform-agnostic document, selection, history, and geometry logic for
//! the Pagemark canvas editor. Rendering, export, keyboard dispatch, and
//! persistence are external collaborators; this crate owns the element
//! model and the state machines they drive.

pub mod assets;
pub mod document;
pub mod element;
pub mod geometry;
pub mod history;
pub mod selection;
pub mod settings;

pub use assets::{AssetError, ImageSource, LoadedImage, MemoryImageSource};
pub use document::{DocumentStore, TextOptions};
pub use element::{
    Color, Element, ElementId, ElementPayload, ElementUpdate, FontStyle, FontWeight, ImageProps,
    NewElement, ShapeKind, ShapeProps, TextAlign, TextProps, TextUpdate, TranslationStatus,
    VerticalAlign, MIN_ELEMENT_SIZE,
};
pub use geometry::{Frame, ResizeHandle};
pub use history::{ActionKind, HistoryAction, HistoryStore, MAX_HISTORY};
pub use selection::{SelectionStore, ToolKind};
pub use settings::{EditorSettings, SettingsStore, SettingsUpdate, Theme};
