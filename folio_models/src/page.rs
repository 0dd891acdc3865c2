use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a page known to the site.
///
/// External navigation input (query parameters) is normalized through
/// [`PageKey::resolve`]; everything the site does not know falls back to
/// [`PageKey::Home`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKey {
    #[default]
    Home,
    Skills,
    Projects,
    Experience,
    Education,
    Contact,
    Message,
}

impl PageKey {
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::Skills,
        Self::Projects,
        Self::Experience,
        Self::Education,
        Self::Contact,
        Self::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Contact => "contact",
            Self::Message => "message",
        }
    }

    /// Maps an external page identifier to a known key, falling back to
    /// [`PageKey::Home`] if the value is absent or not recognized.
    pub fn resolve(requested: Option<&str>) -> Self {
        requested
            .and_then(|key| key.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for PageKey {
    type Err = UnknownPageKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or(UnknownPageKey)
    }
}

impl std::fmt::Display for PageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown page key")]
pub struct UnknownPageKey;

/// One entry of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub key: PageKey,
    pub emoji: &'static str,
    pub label: &'static str,
}

/// Content payload of a single page, rendered by the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub key: PageKey,
    pub title: String,
    pub blocks: Vec<ContentBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        #[serde(skip_serializing_if = "Option::is_none")]
        heading: Option<String>,
        body: String,
    },
    Tags {
        heading: String,
        tags: Vec<String>,
    },
    Links {
        links: Vec<Link>,
    },
    Entries {
        entries: Vec<Entry>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve_to_themselves() {
        for key in PageKey::ALL {
            assert_eq!(PageKey::resolve(Some(key.as_str())), key);
        }
    }

    #[test]
    fn unknown_keys_resolve_to_home() {
        for requested in [None, Some(""), Some("about"), Some("HOME"), Some("home ")] {
            assert_eq!(PageKey::resolve(requested), PageKey::Home);
        }
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&PageKey::Experience).unwrap();
        assert_eq!(json, "\"experience\"");
    }
}
