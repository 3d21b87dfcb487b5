// This file is part of the product QR Tracker.
// SPDX-FileCopyrightText: 2026 QR Tracker contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::store::{MemoryTagStore, TagStore};
use super::types::{ContactRecord, TagError, TagId};
use log::info;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Unregistered,
    Registered(ContactRecord),
}

/// Register, view and edit operations for tags.
pub struct TagLifecycle {
    store: Arc<dyn TagStore>,
}

impl TagLifecycle {
    pub fn new(store: Arc<dyn TagStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTagStore::new()))
    }

    pub fn resolve(&self, id: &TagId) -> Resolution {
        match self.store.get(id) {
            Some(record) => Resolution::Registered(record),
            None => Resolution::Unregistered,
        }
    }

    /// Stores the record whether or not the tag was already registered.
    pub fn register(&self, id: &TagId, record: ContactRecord) {
        self.upsert(id, record);
        info!("Registered tag {}", id);
    }

    /// Current record to pre-fill the edit form, or `None` when the tag has
    /// never been registered and the caller should fall back to the view.
    pub fn edit_form(&self, id: &TagId) -> Option<ContactRecord> {
        self.store.get(id)
    }

    /// Replaces the record of a registered tag.
    pub fn update(&self, id: &TagId, record: ContactRecord) -> Result<(), TagError> {
        // Records are never removed, so the tag stays registered between the check and the write.
        if self.store.get(id).is_none() {
            return Err(TagError::NotRegistered(id.to_string()));
        }
        self.upsert(id, record);
        info!("Updated tag {}", id);
        Ok(())
    }

    pub fn registered_count(&self) -> usize {
        self.store.len()
    }

    fn upsert(&self, id: &TagId, record: ContactRecord) {
        self.store.put(id.clone(), record);
    }
}

impl Default for TagLifecycle {
    fn default() -> Self {
        Self::in_memory()
    }
}
