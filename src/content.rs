//! Typed content blocks placed on a slide.
//!
//! A [`Content`] is a common header (`id`, `order`) plus one [`ContentBody`]
//! variant. The content type is derived from the body, so it cannot drift
//! from the fields that are actually present, and [`merge_content_update`]
//! has no way to change it.
//!
//! # Example
//!
//! ```
//! use slint_slide_editor::{create_default_content, merge_content_update, ContentPatch, ContentType};
//!
//! let table = create_default_content(ContentType::Table, 0);
//! let patch = ContentPatch {
//!     content_type: Some(ContentType::Text), // ignored
//!     caption: Some("Results".into()),
//!     ..Default::default()
//! };
//! let updated = merge_content_update(&table, &patch);
//! assert_eq!(updated.content_type(), ContentType::Table);
//! assert_eq!(updated.id(), table.id());
//! ```

use crate::error::EditorError;
use crate::ordering::Ordered;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Fresh random identifier used for content, cells, slides and elements.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Closed set of content block kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Title,
    Table,
    Button,
    Card,
    Grid,
    Image,
    Spacer,
}

impl ContentType {
    pub const ALL: [ContentType; 8] = [
        ContentType::Text,
        ContentType::Title,
        ContentType::Table,
        ContentType::Button,
        ContentType::Card,
        ContentType::Grid,
        ContentType::Image,
        ContentType::Spacer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Title => "title",
            ContentType::Table => "table",
            ContentType::Button => "button",
            ContentType::Card => "card",
            ContentType::Grid => "grid",
            ContentType::Image => "image",
            ContentType::Spacer => "spacer",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = EditorError;

    /// Parse a user supplied tag. This is the only place an unknown content
    /// type can appear.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| EditorError::UnknownContentType(s.to_string()))
    }
}

// ============================================================================
// Table / grid building blocks
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    pub id: String,
    pub content: String,
}

impl TableCell {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub id: String,
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// A row of `cell_count` empty cells.
    pub fn with_cells(cell_count: usize) -> Self {
        Self {
            id: generate_id(),
            cells: (0..cell_count).map(|_| TableCell::new("")).collect(),
        }
    }
}

/// An item placed in a [`GridContent`]. Grid lines are 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_start: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_start: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_span: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_span: Option<u32>,
}

impl GridItem {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            content_id: None,
            content: Some(content.into()),
            col_start: None,
            row_start: None,
            col_span: Some(1),
            row_span: Some(1),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Secondary,
    Destructive,
    Ghost,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    #[serde(rename = "_blank")]
    Blank,
    #[serde(rename = "_self")]
    SelfFrame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    Cover,
    Contain,
    Fill,
    ScaleDown,
    None,
}

// ============================================================================
// Variants
// ============================================================================
//
// Every variant struct is `#[serde(default)]` with a `Default` equal to the
// editor's default block, so partially specified input still produces a
// complete variant.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextContent {
    pub content: String,
}

impl Default for TextContent {
    fn default() -> Self {
        Self {
            content: "New text block...".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleContent {
    pub content: String,
    /// Heading level, 1 through 6.
    pub level: u8,
}

impl Default for TitleContent {
    fn default() -> Self {
        Self {
            content: "New Title".to_string(),
            level: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableContent {
    pub headers: Vec<TableCell>,
    pub rows: Vec<TableRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub has_header: bool,
}

impl Default for TableContent {
    fn default() -> Self {
        Self {
            headers: vec![TableCell::new("Header 1"), TableCell::new("Header 2")],
            rows: vec![TableRow::with_cells(2)],
            caption: None,
            has_header: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonContent {
    pub text: String,
    pub url: String,
    pub variant: ButtonVariant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<LinkTarget>,
}

impl Default for ButtonContent {
    fn default() -> Self {
        Self {
            text: "Click Me".to_string(),
            url: "#".to_string(),
            variant: ButtonVariant::Default,
            target: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
}

impl Default for CardContent {
    fn default() -> Self {
        Self {
            title: Some("Card Title".to_string()),
            content: "Card content...".to_string(),
            image_url: None,
            footer: None,
            link_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridContent {
    pub columns: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    pub items: Vec<GridItem>,
}

impl Default for GridContent {
    fn default() -> Self {
        Self {
            columns: 2,
            rows: Some(2),
            gap: Some(8.0),
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageContent {
    pub src: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_fit: Option<ObjectFit>,
}

impl Default for ImageContent {
    fn default() -> Self {
        Self {
            src: String::new(),
            alt: "Placeholder image".to_string(),
            caption: None,
            object_fit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacerContent {
    pub height: f32,
}

impl Default for SpacerContent {
    fn default() -> Self {
        Self { height: 20.0 }
    }
}

/// The type specific part of a content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBody {
    Text(TextContent),
    Title(TitleContent),
    Table(TableContent),
    Button(ButtonContent),
    Card(CardContent),
    Grid(GridContent),
    Image(ImageContent),
    Spacer(SpacerContent),
}

impl ContentBody {
    /// Default body for a content type.
    pub fn default_for(content_type: ContentType) -> Self {
        match content_type {
            ContentType::Text => ContentBody::Text(TextContent::default()),
            ContentType::Title => ContentBody::Title(TitleContent::default()),
            ContentType::Table => ContentBody::Table(TableContent::default()),
            ContentType::Button => ContentBody::Button(ButtonContent::default()),
            ContentType::Card => ContentBody::Card(CardContent::default()),
            ContentType::Grid => ContentBody::Grid(GridContent::default()),
            ContentType::Image => ContentBody::Image(ImageContent::default()),
            ContentType::Spacer => ContentBody::Spacer(SpacerContent::default()),
        }
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            ContentBody::Text(_) => ContentType::Text,
            ContentBody::Title(_) => ContentType::Title,
            ContentBody::Table(_) => ContentType::Table,
            ContentBody::Button(_) => ContentType::Button,
            ContentBody::Card(_) => ContentType::Card,
            ContentBody::Grid(_) => ContentType::Grid,
            ContentBody::Image(_) => ContentType::Image,
            ContentBody::Spacer(_) => ContentType::Spacer,
        }
    }
}

/// One content block of a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    id: String,
    order: usize,
    #[serde(flatten)]
    body: ContentBody,
}

impl Content {
    /// Wrap an existing body under a fresh id.
    pub fn new(body: ContentBody, order: usize) -> Self {
        Self {
            id: generate_id(),
            order,
            body,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn content_type(&self) -> ContentType {
        self.body.content_type()
    }

    pub fn body(&self) -> &ContentBody {
        &self.body
    }

    /// Short human readable label, used for slide thumbnails and lists.
    pub fn summary(&self) -> String {
        match &self.body {
            ContentBody::Text(text) => text.content.clone(),
            ContentBody::Title(title) => title.content.clone(),
            ContentBody::Table(table) => table
                .caption
                .clone()
                .unwrap_or_else(|| format!("Table {}x{}", table.headers.len(), table.rows.len())),
            ContentBody::Button(button) => button.text.clone(),
            ContentBody::Card(card) => card.title.clone().unwrap_or_else(|| card.content.clone()),
            ContentBody::Grid(grid) => format!("Grid ({} columns)", grid.columns),
            ContentBody::Image(image) => image.alt.clone(),
            ContentBody::Spacer(spacer) => format!("Spacer {}px", spacer.height),
        }
    }
}

impl Ordered for Content {
    fn order(&self) -> usize {
        self.order
    }

    fn set_order(&mut self, order: usize) {
        self.order = order;
    }
}

/// Build a fully populated block of `content_type` at `order`.
pub fn create_default_content(content_type: ContentType, order: usize) -> Content {
    Content::new(ContentBody::default_for(content_type), order)
}

/// Partial update for a content block.
///
/// Fields that do not belong to the target variant are ignored, and so are
/// `id`, `content_type` and `order`: identity and type never change through a
/// patch, and position only changes through reordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentPatch {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<ContentType>,
    pub order: Option<usize>,

    /// Text, title and card body text.
    pub content: Option<String>,
    pub level: Option<u8>,

    pub headers: Option<Vec<TableCell>>,
    pub rows: Option<Vec<TableRow>>,
    /// Table or image caption.
    pub caption: Option<String>,
    pub has_header: Option<bool>,

    pub text: Option<String>,
    pub url: Option<String>,
    pub variant: Option<ButtonVariant>,
    pub target: Option<LinkTarget>,

    pub title: Option<String>,
    pub image_url: Option<String>,
    pub footer: Option<String>,
    pub link_url: Option<String>,

    pub columns: Option<u32>,
    pub grid_rows: Option<u32>,
    pub gap: Option<f32>,
    pub items: Option<Vec<GridItem>>,

    pub src: Option<String>,
    pub alt: Option<String>,
    pub object_fit: Option<ObjectFit>,

    pub height: Option<f32>,
}

fn set<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

/// Like [`set`], but an empty list keeps the current value.
fn set_non_empty<T: Clone>(target: &mut Vec<T>, value: &Option<Vec<T>>) {
    if let Some(value) = value.as_ref().filter(|v| !v.is_empty()) {
        *target = value.clone();
    }
}

fn set_opt<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
    if value.is_some() {
        *target = value.clone();
    }
}

impl ContentPatch {
    /// Apply the fields relevant to `body`'s variant.
    pub fn apply_to(&self, body: &mut ContentBody) {
        match body {
            ContentBody::Text(text) => set(&mut text.content, &self.content),
            ContentBody::Title(title) => {
                set(&mut title.content, &self.content);
                if let Some(level) = self.level {
                    title.level = level.clamp(1, 6);
                }
            }
            ContentBody::Table(table) => {
                set_non_empty(&mut table.headers, &self.headers);
                set_non_empty(&mut table.rows, &self.rows);
                set_opt(&mut table.caption, &self.caption);
                set(&mut table.has_header, &self.has_header);
            }
            ContentBody::Button(button) => {
                set(&mut button.text, &self.text);
                set(&mut button.url, &self.url);
                set(&mut button.variant, &self.variant);
                set_opt(&mut button.target, &self.target);
            }
            ContentBody::Card(card) => {
                set_opt(&mut card.title, &self.title);
                set(&mut card.content, &self.content);
                set_opt(&mut card.image_url, &self.image_url);
                set_opt(&mut card.footer, &self.footer);
                set_opt(&mut card.link_url, &self.link_url);
            }
            ContentBody::Grid(grid) => {
                if let Some(columns) = self.columns {
                    grid.columns = columns.max(1);
                }
                set_opt(&mut grid.rows, &self.grid_rows);
                set_opt(&mut grid.gap, &self.gap);
                set(&mut grid.items, &self.items);
            }
            ContentBody::Image(image) => {
                set(&mut image.src, &self.src);
                set(&mut image.alt, &self.alt);
                set_opt(&mut image.caption, &self.caption);
                set_opt(&mut image.object_fit, &self.object_fit);
            }
            ContentBody::Spacer(spacer) => {
                if let Some(height) = self.height {
                    spacer.height = height.max(0.0);
                }
            }
        }
    }
}

/// Apply `patch` to a copy of `existing`, keeping its id, type and order.
pub fn merge_content_update(existing: &Content, patch: &ContentPatch) -> Content {
    let mut merged = existing.clone();
    patch.apply_to(&mut merged.body);
    merged
}
