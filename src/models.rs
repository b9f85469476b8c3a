//! Frontend Models
//!
//! Data structures matching the API's resources, plus the owned form drafts
//! the admin views edit.

use serde::{Deserialize, Serialize};

/// Row of the site information table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoEntry {
    pub id: u32,
    pub name: String,
    pub information: String,
}

/// Well-known information rows
pub const INFO_INDEX_TITLES: &str = "index_titles";
pub const INFO_JOURNEY: &str = "journey";

/// Find an information row by name, skipping empty ones
pub fn find_info<'a>(entries: &'a [InfoEntry], name: &str) -> Option<&'a InfoEntry> {
    entries
        .iter()
        .find(|entry| entry.name == name && !entry.information.is_empty())
}

/// Portfolio project (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: u32,
    pub name: String,
    pub date: String,
    pub technologies: String,
    pub description: String,
    pub code_uri: Option<String>,
    pub live_uri: Option<String>,
    pub image_uri: Option<String>,
    pub image_alt: Option<String>,
}

/// About page category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AboutKind {
    #[default]
    Knowledge,
    Badge,
    Certificate,
}

impl AboutKind {
    pub const ALL: [AboutKind; 3] = [AboutKind::Knowledge, AboutKind::Badge, AboutKind::Certificate];

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(AboutKind::Knowledge),
            2 => Some(AboutKind::Badge),
            3 => Some(AboutKind::Certificate),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            AboutKind::Knowledge => 1,
            AboutKind::Badge => 2,
            AboutKind::Certificate => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AboutKind::Knowledge => "Knowledge",
            AboutKind::Badge => "Badges",
            AboutKind::Certificate => "Certificates",
        }
    }
}

/// About page entry (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutItem {
    pub id: u32,
    pub item_type: u8,
    pub name: String,
    pub date: String,
    pub description: String,
    pub link: Option<String>,
    pub image_uri: Option<String>,
    pub image_alt: Option<String>,
}

impl AboutItem {
    pub fn kind(&self) -> Option<AboutKind> {
        AboutKind::from_code(self.item_type)
    }
}

/// Contact link (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactItem {
    pub id: u32,
    pub name: String,
    pub account: String,
    pub link: Option<String>,
    pub image_uri: Option<String>,
    pub image_alt: Option<String>,
}

/// Message left through the public contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: u32,
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub reply: String,
    pub date: String,
    pub read: bool,
}

/// Admin account (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
}

// ========================
// Form Drafts
// ========================

/// `None` for an empty form field
pub fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkDraft {
    pub name: String,
    pub date: String,
    pub technologies: String,
    pub description: String,
    pub code_uri: String,
    pub live_uri: String,
    pub image_uri: String,
    pub image_alt: String,
}

impl From<&WorkItem> for WorkDraft {
    fn from(item: &WorkItem) -> Self {
        Self {
            name: item.name.clone(),
            date: item.date.clone(),
            technologies: item.technologies.clone(),
            description: item.description.clone(),
            code_uri: item.code_uri.clone().unwrap_or_default(),
            live_uri: item.live_uri.clone().unwrap_or_default(),
            image_uri: item.image_uri.clone().unwrap_or_default(),
            image_alt: item.image_alt.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AboutDraft {
    pub kind: AboutKind,
    pub name: String,
    pub date: String,
    pub description: String,
    pub link: String,
    pub image_uri: String,
    pub image_alt: String,
}

impl From<&AboutItem> for AboutDraft {
    fn from(item: &AboutItem) -> Self {
        Self {
            kind: item.kind().unwrap_or_default(),
            name: item.name.clone(),
            date: item.date.clone(),
            description: item.description.clone(),
            link: item.link.clone().unwrap_or_default(),
            image_uri: item.image_uri.clone().unwrap_or_default(),
            image_alt: item.image_alt.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub account: String,
    pub link: String,
    pub image_uri: String,
    pub image_alt: String,
}

impl From<&ContactItem> for ContactDraft {
    fn from(item: &ContactItem) -> Self {
        Self {
            name: item.name.clone(),
            account: item.account.clone(),
            link: item.link.clone().unwrap_or_default(),
            image_uri: item.image_uri.clone().unwrap_or_default(),
            image_alt: item.image_alt.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageDraft {
    pub subject: String,
    pub message: String,
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_kind_codes() {
        for kind in AboutKind::ALL {
            assert_eq!(AboutKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(AboutKind::from_code(0), None);
        assert_eq!(AboutKind::from_code(4), None);
    }

    #[test]
    fn test_work_item_null_optionals_deserialize() {
        let json = r#"{"id":3,"name":"Site","date":"2023","technologies":"Rust","description":"d",
            "code_uri":null,"live_uri":null,"image_uri":null,"image_alt":null}"#;
        let item: WorkItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.code_uri, None);
        assert_eq!(WorkDraft::from(&item).code_uri, "");
    }

    #[test]
    fn test_find_info_skips_empty_rows() {
        let entries = vec![
            InfoEntry { id: 1, name: INFO_JOURNEY.into(), information: String::new() },
            InfoEntry { id: 2, name: INFO_JOURNEY.into(), information: "Started in 2019".into() },
        ];
        assert_eq!(find_info(&entries, INFO_JOURNEY).map(|e| e.id), Some(2));
        assert!(find_info(&entries, INFO_INDEX_TITLES).is_none());
    }
}
