use serde::{Deserialize, Serialize};

use super::is_unassigned;

fn is_false(value: &bool) -> bool {
    !*value
}

/// Reference to media hosted by the remote service or an external URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnfurledMedia {
    pub url: String,
}

impl UnfurledMedia {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Markdown text block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDisplay {
    #[serde(rename = "id", default, skip_serializing_if = "is_unassigned")]
    pub unique_id: i32,
    pub content: String,
}

impl TextDisplay {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            unique_id: 0,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    #[serde(rename = "id", default, skip_serializing_if = "is_unassigned")]
    pub unique_id: i32,
    pub media: UnfurledMedia,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub spoiler: bool,
}

impl Thumbnail {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            unique_id: 0,
            media: UnfurledMedia::new(url),
            description: None,
            spoiler: false,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One entry of a [`MediaGallery`]. Items are plain data, not components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub media: UnfurledMedia,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub spoiler: bool,
}

impl MediaItem {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            media: UnfurledMedia::new(url),
            description: None,
            spoiler: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaGallery {
    #[serde(rename = "id", default, skip_serializing_if = "is_unassigned")]
    pub unique_id: i32,
    #[serde(default)]
    pub items: Vec<MediaItem>,
}

impl MediaGallery {
    pub fn new(items: impl IntoIterator<Item = MediaItem>) -> Self {
        Self {
            unique_id: 0,
            items: items.into_iter().collect(),
        }
    }
}

/// An attached file rendered inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDisplay {
    #[serde(rename = "id", default, skip_serializing_if = "is_unassigned")]
    pub unique_id: i32,
    pub file: UnfurledMedia,
    #[serde(default, skip_serializing_if = "is_false")]
    pub spoiler: bool,
}

impl FileDisplay {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            unique_id: 0,
            file: UnfurledMedia::new(url),
            spoiler: false,
        }
    }
}
