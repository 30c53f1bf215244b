//! Presentation themes.
//!
//! Three built-in themes ship with the editor and cannot be edited or
//! removed. Custom themes get a generated id on creation.

use crate::content::generate_id;
use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME_ID: &str = "default";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColor {
    pub name: String,
    /// CSS hex color, `#rrggbb`.
    pub value: String,
}

impl ThemeColor {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parse `value` into a Slint color. `None` for anything but `#rrggbb`
    /// or `#rgb`.
    pub fn to_color(&self) -> Option<slint::Color> {
        parse_hex_color(&self.value)
    }
}

fn parse_hex_color(value: &str) -> Option<slint::Color> {
    let hex = value.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(slint::Color::from_rgb_u8(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some(slint::Color::from_rgb_u8(short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: ThemeColor,
    pub secondary: ThemeColor,
    pub accent: ThemeColor,
    pub background: ThemeColor,
    pub text: ThemeColor,
    pub surface: ThemeColor,
}

impl ThemeColors {
    fn from_values(values: [&str; 6]) -> Self {
        let [primary, secondary, accent, background, text, surface] = values;
        Self {
            primary: ThemeColor::new("Primary", primary),
            secondary: ThemeColor::new("Secondary", secondary),
            accent: ThemeColor::new("Accent", accent),
            background: ThemeColor::new("Background", background),
            text: ThemeColor::new("Text", text),
            surface: ThemeColor::new("Surface", surface),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_font_family: Option<String>,
    pub base_font_size: String,
    pub heading_scale: f32,
}

impl Typography {
    fn with_family(font_family: &str) -> Self {
        Self {
            font_family: font_family.to_string(),
            title_font_family: None,
            base_font_size: "16px".to_string(),
            heading_scale: 1.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    pub base: f32,
    pub scale: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self { base: 8.0, scale: 1.5 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub colors: ThemeColors,
    pub typography: Typography,
    pub spacing: Spacing,
    pub border_radius: String,
    pub is_custom: bool,
}

impl Theme {
    pub fn builtin() -> Vec<Theme> {
        vec![
            Theme {
                id: DEFAULT_THEME_ID.to_string(),
                name: "Default".to_string(),
                colors: ThemeColors::from_values(["#3b82f6", "#10b981", "#8b5cf6", "#ffffff", "#1f2937", "#f9fafb"]),
                typography: Typography::with_family("Inter, sans-serif"),
                spacing: Spacing::default(),
                border_radius: "0.5rem".to_string(),
                is_custom: false,
            },
            Theme {
                id: "dark".to_string(),
                name: "Dark Mode".to_string(),
                colors: ThemeColors::from_values(["#60a5fa", "#34d399", "#a78bfa", "#111827", "#f9fafb", "#1f2937"]),
                typography: Typography::with_family("Inter, sans-serif"),
                spacing: Spacing::default(),
                border_radius: "0.5rem".to_string(),
                is_custom: false,
            },
            Theme {
                id: "minimal".to_string(),
                name: "Minimal".to_string(),
                colors: ThemeColors::from_values(["#000000", "#4b5563", "#ef4444", "#ffffff", "#1f2937", "#f9fafb"]),
                typography: Typography::with_family("system-ui, sans-serif"),
                spacing: Spacing::default(),
                border_radius: "0.25rem".to_string(),
                is_custom: false,
            },
        ]
    }
}

/// Everything about a theme except its identity, for creating custom themes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDraft {
    pub name: String,
    pub colors: ThemeColors,
    pub typography: Typography,
    pub spacing: Spacing,
    pub border_radius: String,
}

impl From<&Theme> for ThemeDraft {
    fn from(theme: &Theme) -> Self {
        Self {
            name: theme.name.clone(),
            colors: theme.colors.clone(),
            typography: theme.typography.clone(),
            spacing: theme.spacing,
            border_radius: theme.border_radius.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemePatch {
    pub name: Option<String>,
    pub colors: Option<ThemeColors>,
    pub typography: Option<Typography>,
    pub spacing: Option<Spacing>,
    pub border_radius: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: Vec<Theme>,
    current_id: String,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self {
            themes: Theme::builtin(),
            current_id: DEFAULT_THEME_ID.to_string(),
        }
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == id)
    }

    /// The selected theme, or the first theme if the selection vanished.
    pub fn current(&self) -> &Theme {
        self.get(&self.current_id).unwrap_or(&self.themes[0])
    }

    /// Select `id`. Unknown ids are ignored.
    pub fn set_current(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            tracing::warn!(theme_id = %id, "Ignoring unknown theme");
            return false;
        }
        self.current_id = id.to_string();
        true
    }

    /// Add a custom theme and make it current. Returns its new id.
    pub fn add_custom(&mut self, draft: ThemeDraft) -> String {
        let id = generate_id();
        self.themes.push(Theme {
            id: id.clone(),
            name: draft.name,
            colors: draft.colors,
            typography: draft.typography,
            spacing: draft.spacing,
            border_radius: draft.border_radius,
            is_custom: true,
        });
        self.current_id = id.clone();
        id
    }

    /// Merge `patch` into a custom theme. Built-in themes are read-only.
    pub fn update(&mut self, id: &str, patch: ThemePatch) -> bool {
        let Some(theme) = self.themes.iter_mut().find(|t| t.id == id && t.is_custom) else {
            tracing::warn!(theme_id = %id, "Cannot update theme: not a custom theme");
            return false;
        };
        if let Some(name) = patch.name {
            theme.name = name;
        }
        if let Some(colors) = patch.colors {
            theme.colors = colors;
        }
        if let Some(typography) = patch.typography {
            theme.typography = typography;
        }
        if let Some(spacing) = patch.spacing {
            theme.spacing = spacing;
        }
        if let Some(border_radius) = patch.border_radius {
            theme.border_radius = border_radius;
        }
        true
    }

    /// Remove a custom theme. If it was current, the default theme takes
    /// over.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.themes.len();
        self.themes.retain(|t| !(t.id == id && t.is_custom));
        if self.themes.len() == before {
            tracing::warn!(theme_id = %id, "Cannot delete theme: not a custom theme");
            return false;
        }
        if self.current_id == id {
            self.current_id = DEFAULT_THEME_ID.to_string();
        }
        true
    }
}
