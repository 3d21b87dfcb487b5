// This file is part of the product QR Tracker.
// SPDX-FileCopyrightText: 2026 QR Tracker contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::tags::{ContactForm, ContactRecord, TagId};
use minijinja::{Value, context};

const EXAMPLE_TAG_IDS: [&str; 2] = ["tag001", "tag002"];

// Tag paths are percent-encoded and contain no markup characters.
fn tag_path(path: String) -> Value {
    Value::from_safe_string(path)
}

#[derive(Debug, Clone)]
pub struct ErrorPageContext {
    app_name: String,
}

impl ErrorPageContext {
    pub fn new(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            app_name => &self.app_name
        }
    }
}

#[derive(Debug, Clone)]
pub struct HomePageContext {
    app_name: String,
    description: String,
}

impl HomePageContext {
    pub fn new(app_name: &str, description: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            description: description.to_string(),
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            app_name => &self.app_name,
            description => &self.description,
            example_ids => EXAMPLE_TAG_IDS.to_vec()
        }
    }
}

pub struct TagDetailsContext<'a> {
    app_name: &'a str,
    tag_id: &'a TagId,
    record: &'a ContactRecord,
}

impl<'a> TagDetailsContext<'a> {
    pub fn new(app_name: &'a str, tag_id: &'a TagId, record: &'a ContactRecord) -> Self {
        Self {
            app_name,
            tag_id,
            record,
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            app_name => self.app_name,
            tag_id => self.tag_id.as_str(),
            edit_path => tag_path(self.tag_id.edit_path()),
            name => &self.record.name,
            phone => &self.record.phone,
            message => self.record.message()
        }
    }
}

/// Shared by the registration and edit forms.
pub struct TagFormContext<'a> {
    app_name: &'a str,
    tag_id: &'a TagId,
    form: &'a ContactForm,
    error: Option<String>,
}

impl<'a> TagFormContext<'a> {
    pub fn new(app_name: &'a str, tag_id: &'a TagId, form: &'a ContactForm) -> Self {
        Self {
            app_name,
            tag_id,
            form,
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl ToString) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn to_value(&self) -> Value {
        context! {
            app_name => self.app_name,
            tag_id => self.tag_id.as_str(),
            view_path => tag_path(self.tag_id.view_path()),
            edit_path => tag_path(self.tag_id.edit_path()),
            name => self.form.name.as_deref().unwrap_or_default(),
            phone => self.form.phone.as_deref().unwrap_or_default(),
            message => self.form.message.as_deref().unwrap_or_default(),
            error => &self.error
        }
    }
}
