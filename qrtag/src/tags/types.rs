// This file is part of the product QR Tracker.
// SPDX-FileCopyrightText: 2026 QR Tracker contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use serde::Deserialize;
use std::fmt;

pub const MAX_TAG_ID_CHARS: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    InvalidTagId,
    MissingField(&'static str),
    NotRegistered(String),
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagError::InvalidTagId => write!(f, "Invalid tag identifier"),
            TagError::MissingField(field) => write!(f, "Missing required field: {}", field),
            TagError::NotRegistered(id) => write!(f, "Tag '{}' is not registered", id),
        }
    }
}

impl std::error::Error for TagError {}

/// Opaque identifier naming one physical tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagId(String);

impl TagId {
    pub fn parse(raw: &str) -> Result<Self, TagError> {
        if raw.trim().is_empty() || raw.chars().count() > MAX_TAG_ID_CHARS {
            return Err(TagError::InvalidTagId);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of the view page for this tag, percent-encoded for use in links and redirects.
    pub fn view_path(&self) -> String {
        format!("/tag/{}", urlencoding::encode(&self.0))
    }

    pub fn edit_path(&self) -> String {
        format!("{}/edit", self.view_path())
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Owner contact details attached to one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    pub name: String,
    pub phone: String,
    message: Option<String>,
}

impl ContactRecord {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, message: Option<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            message: message.filter(|value| !value.is_empty()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Fields as submitted by the registration and edit forms.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactForm {
    pub fn from_record(record: &ContactRecord) -> Self {
        Self {
            name: Some(record.name.clone()),
            phone: Some(record.phone.clone()),
            message: record.message.clone(),
        }
    }

    /// Builds the record to store. `name` and `phone` must contain more than
    /// whitespace; values are kept exactly as submitted.
    pub fn to_record(&self) -> Result<ContactRecord, TagError> {
        let name = required_field("name", self.name.as_deref())?;
        let phone = required_field("phone", self.phone.as_deref())?;
        Ok(ContactRecord::new(name, phone, self.message.clone()))
    }
}

fn required_field(field: &'static str, value: Option<&str>) -> Result<String, TagError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.to_string()),
        _ => Err(TagError::MissingField(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: Option<&str>, phone: Option<&str>, message: Option<&str>) -> ContactForm {
        ContactForm {
            name: name.map(str::to_string),
            phone: phone.map(str::to_string),
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn tag_id_rejects_blank_and_oversized_values() {
        assert_eq!(TagId::parse(""), Err(TagError::InvalidTagId));
        assert_eq!(TagId::parse("   "), Err(TagError::InvalidTagId));
        let long = "x".repeat(MAX_TAG_ID_CHARS + 1);
        assert_eq!(TagId::parse(&long), Err(TagError::InvalidTagId));
        assert!(TagId::parse(&"x".repeat(MAX_TAG_ID_CHARS)).is_ok());
    }

    #[test]
    fn tag_id_paths_are_percent_encoded() {
        let id = TagId::parse("bag 7/a").unwrap();
        assert_eq!(id.view_path(), "/tag/bag%207%2Fa");
        assert_eq!(id.edit_path(), "/tag/bag%207%2Fa/edit");
        assert_eq!(id.as_str(), "bag 7/a");
    }

    #[test]
    fn form_keeps_submitted_values_verbatim() {
        let record = form(Some("  Alice  "), Some(" 555 "), Some("  hi  "))
            .to_record()
            .unwrap();
        assert_eq!(record.name, "  Alice  ");
        assert_eq!(record.phone, " 555 ");
        assert_eq!(record.message(), Some("  hi  "));
    }

    #[test]
    fn form_treats_empty_message_as_absent() {
        let record = form(Some("Bob"), Some("555-0200"), Some("")).to_record().unwrap();
        assert_eq!(record.message(), None);
        let record = form(Some("Bob"), Some("555-0200"), None).to_record().unwrap();
        assert_eq!(record.message(), None);
    }

    #[test]
    fn form_requires_name_and_phone() {
        assert_eq!(
            form(None, Some("555"), None).to_record(),
            Err(TagError::MissingField("name"))
        );
        assert_eq!(
            form(Some("Alice"), Some(" "), None).to_record(),
            Err(TagError::MissingField("phone"))
        );
    }

    #[test]
    fn form_accepts_long_values() {
        let long_phone = "5".repeat(500);
        let long_message = "m".repeat(5000);
        let record = form(Some("Alice"), Some(&long_phone), Some(&long_message))
            .to_record()
            .unwrap();
        assert_eq!(record.phone, long_phone);
        assert_eq!(record.message(), Some(long_message.as_str()));
    }

    #[test]
    fn phone_is_kept_as_opaque_text() {
        let record = form(Some("Alice"), Some("call the front desk"), None)
            .to_record()
            .unwrap();
        assert_eq!(record.phone, "call the front desk");
    }
}
