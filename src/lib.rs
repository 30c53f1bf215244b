//! # Slint Slide Editor Library
//!
//! Document model and editor state for building slide/presentation editors
//! with Slint. The library owns the presentation, keeps its ordering
//! invariants and drives the canvas viewport; the `.slint` front end renders
//! from `VecModel`s the library keeps in sync.
//!
//! ## Features
//!
//! - **Typed Content Blocks** - Text, titles, tables, buttons, cards, grids, images and spacers
//! - **Consistent Ordering** - Every insert, move and delete re-stamps content order `0..n`
//! - **Snapshot Documents** - Each mutation publishes a new `Rc<Presentation>`
//! - **Canvas Viewport** - Clamped zoom, pointer panning and grid snapping on drop
//! - **Presentation Mode** - Fullscreen playback that refuses to run without fullscreen
//! - **Pluggable Collaborators** - Persistence, uploads and fullscreen behind traits
//!
//! ## Rust Helpers
//!
//! - [`SlideEditorController`] - Clonable facade to hand to Slint callbacks
//! - [`DocumentStore`] - Slide and content mutations with index tracking
//! - [`Viewport`] - Zoom/pan state and screen↔canvas conversion
//! - [`PresentationModeController`] - `Editing`/`Presenting` state machine
//! - [`ModelBindings`] - Sync slide and content lists into Slint models
//! - [`generate_grid_commands`] - Generate SVG path for grid rendering
//! - [`snap_to_grid`] - Round coordinates to the drop grid
//!
//! The library never installs a `tracing` subscriber; that is left to the
//! application.

pub mod assets;
pub mod autoplay;
pub mod bindings;
pub mod config;
pub mod content;
pub mod controller;
pub mod drag;
pub mod error;
pub mod grid;
pub mod ordering;
pub mod persistence;
pub mod presentation;
pub mod presentation_mode;
pub mod selection;
pub mod slide;
pub mod store;
pub mod theme;
pub mod viewport;

pub use assets::{AssetKind, AssetLibrary, AssetRef, AssetUploader, DirectoryUploader};
pub use autoplay::{next_slide_index, AutoAdvance};
pub use bindings::{contents_model, slides_model, ModelBindings};
pub use config::EditorConfig;
pub use content::{
    create_default_content, generate_id, merge_content_update, ButtonContent, ButtonVariant,
    CardContent, Content, ContentBody, ContentPatch, ContentType, GridContent, GridItem,
    ImageContent, LinkTarget, ObjectFit, SpacerContent, TableCell, TableContent, TableRow,
    TextContent, TitleContent,
};
pub use controller::{Change, SlideEditorController, WeakSlideEditorController};
pub use drag::{DragCommit, DragGesture, DragTarget};
pub use error::{EditorError, Result};
pub use grid::{generate_grid_commands, snap_point, snap_to_grid, snapped_drop_position};
pub use hit_test::{elements_in_selection_box, find_element_at, ElementGeometry};
pub use ordering::{is_contiguous, move_item, reindex, track_index_after_move, Ordered};
pub use persistence::{JsonDirectoryRepository, MemoryRepository, PresentationRepository};
pub use presentation::Presentation;
pub use presentation_mode::{
    FullscreenCapability, NoFullscreen, PresentationMode, PresentationModeController,
    WindowFullscreen,
};
pub use selection::ElementSelection;
pub use slide::{Background, ElementPatch, Point, Size, Slide, SlideElement, SlidePatch, SlideType};
pub use store::DocumentStore;
pub use theme::{Theme, ThemeColor, ThemeColors, ThemeDraft, ThemePatch, ThemeRegistry};
pub use viewport::{is_pan_button, ViewTransform, Viewport};
