//! Slides and their free-form canvas elements.

use crate::content::{generate_id, Content};
use crate::error::EditorError;
use crate::ordering::reindex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideType {
    Title,
    #[default]
    Content,
    Gallery,
    Blank,
    Text,
    Image,
}

impl SlideType {
    pub const ALL: [SlideType; 6] = [
        SlideType::Title,
        SlideType::Content,
        SlideType::Gallery,
        SlideType::Blank,
        SlideType::Text,
        SlideType::Image,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlideType::Title => "title",
            SlideType::Content => "content",
            SlideType::Gallery => "gallery",
            SlideType::Blank => "blank",
            SlideType::Text => "text",
            SlideType::Image => "image",
        }
    }
}

impl fmt::Display for SlideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlideType {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SlideType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| EditorError::UnknownSlideType(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Background {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
}

/// A positioned element on the drag and drop canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideElement {
    pub id: String,
    #[serde(rename = "type")]
    pub element_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub position: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<String, String>,
}

impl SlideElement {
    pub fn new(element_type: impl Into<String>, position: Point) -> Self {
        Self {
            id: generate_id(),
            element_type: element_type.into(),
            content: None,
            position,
            size: None,
            style: BTreeMap::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Some(Size::new(width, height));
        self
    }

    /// Bounding rect `(x, y, width, height)`; unsized elements are points.
    pub fn rect(&self) -> (f32, f32, f32, f32) {
        let size = self.size.unwrap_or_default();
        (self.position.x, self.position.y, size.width, size.height)
    }

    /// Merge `patch`; the id and element type are kept.
    pub fn apply(&mut self, patch: &ElementPatch) {
        if let Some(content) = &patch.content {
            self.content = Some(content.clone());
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(size) = patch.size {
            self.size = Some(size);
        }
        for (key, value) in &patch.style {
            self.style.insert(key.clone(), value.clone());
        }
    }
}

/// Partial update for a [`SlideElement`]. Style entries are merged key by key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementPatch {
    pub content: Option<String>,
    pub position: Option<Point>,
    pub size: Option<Size>,
    pub style: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(rename = "type", default)]
    pub slide_type: SlideType,
    #[serde(default)]
    pub content: Vec<Content>,
    #[serde(default)]
    pub elements: Vec<SlideElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Slide {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            title: title.into(),
            subtitle: None,
            slide_type: SlideType::Content,
            content: Vec::new(),
            elements: Vec::new(),
            background: None,
            notes: None,
        }
    }

    /// A new slide with `patch` merged over the defaults.
    pub fn from_patch(patch: &SlidePatch, default_title: &str) -> Self {
        let mut slide = Self::new(default_title);
        slide.apply(patch);
        slide
    }

    /// Merge `patch` into this slide. The id never changes, and replaced
    /// content is reindexed by position.
    pub fn apply(&mut self, patch: &SlidePatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(subtitle) = &patch.subtitle {
            self.subtitle = Some(subtitle.clone());
        }
        if let Some(slide_type) = patch.slide_type {
            self.slide_type = slide_type;
        }
        if let Some(content) = &patch.content {
            self.content = content.clone();
            reindex(&mut self.content);
        }
        if let Some(elements) = &patch.elements {
            self.elements = elements.clone();
        }
        if let Some(background) = &patch.background {
            self.background = Some(background.clone());
        }
        if let Some(notes) = &patch.notes {
            self.notes = Some(notes.clone());
        }
    }

    pub fn content_by_id(&self, id: &str) -> Option<&Content> {
        self.content.iter().find(|c| c.id() == id)
    }

    pub fn element_by_id(&self, id: &str) -> Option<&SlideElement> {
        self.elements.iter().find(|e| e.id == id)
    }
}

/// Partial update for a [`Slide`]. A supplied `id` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlidePatch {
    pub id: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(rename = "type")]
    pub slide_type: Option<SlideType>,
    pub content: Option<Vec<Content>>,
    pub elements: Option<Vec<SlideElement>>,
    pub background: Option<Background>,
    pub notes: Option<String>,
}

impl SlidePatch {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}
