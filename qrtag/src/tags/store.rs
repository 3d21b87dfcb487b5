// This file is part of the product QR Tracker.
// SPDX-FileCopyrightText: 2026 QR Tracker contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::types::{ContactRecord, TagId};
use std::collections::HashMap;
use std::sync::RwLock;

/// Storage for contact records keyed by tag identifier.
///
/// `put` replaces any existing record wholesale. Implementations must serialize
/// writes so concurrent workers never interleave a partial update.
pub trait TagStore: Send + Sync {
    fn get(&self, id: &TagId) -> Option<ContactRecord>;
    fn put(&self, id: TagId, record: ContactRecord);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-lifetime store; contents are lost on restart.
#[derive(Default)]
pub struct MemoryTagStore {
    records: RwLock<HashMap<TagId, ContactRecord>>,
}

impl MemoryTagStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TagStore for MemoryTagStore {
    fn get(&self, id: &TagId) -> Option<ContactRecord> {
        match self.records.read() {
            Ok(guard) => guard.get(id).cloned(),
            Err(poisoned) => {
                log::error!("MemoryTagStore lock poisoned on read; recovering");
                poisoned.into_inner().get(id).cloned()
            }
        }
    }

    fn put(&self, id: TagId, record: ContactRecord) {
        match self.records.write() {
            Ok(mut guard) => {
                guard.insert(id, record);
            }
            Err(poisoned) => {
                log::error!("MemoryTagStore lock poisoned on write; recovering");
                poisoned.into_inner().insert(id, record);
            }
        }
    }

    fn len(&self) -> usize {
        match self.records.read() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn id(raw: &str) -> TagId {
        TagId::parse(raw).expect("tag id")
    }

    #[test]
    fn get_on_empty_store_is_absent() {
        let store = MemoryTagStore::new();
        assert!(store.get(&id("tag001")).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn put_replaces_existing_record() {
        let store = MemoryTagStore::new();
        store.put(
            id("tag001"),
            ContactRecord::new("Alice", "555-0100", Some("Reward if found".to_string())),
        );
        store.put(id("tag001"), ContactRecord::new("Alice B.", "555-0199", None));

        let record = store.get(&id("tag001")).expect("record");
        assert_eq!(record.name, "Alice B.");
        assert_eq!(record.phone, "555-0199");
        assert_eq!(record.message(), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn identifiers_are_case_sensitive() {
        let store = MemoryTagStore::new();
        store.put(id("Tag001"), ContactRecord::new("Alice", "555-0100", None));
        assert!(store.get(&id("tag001")).is_none());
    }

    #[test]
    fn concurrent_writers_leave_one_whole_record() {
        let store = Arc::new(MemoryTagStore::new());
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let store = store.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        store.put(
                            id("shared"),
                            ContactRecord::new(format!("owner-{}", n), format!("phone-{}", n), None),
                        );
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("writer thread");
        }

        let record = store.get(&id("shared")).expect("record");
        let suffix = record.name.trim_start_matches("owner-");
        assert_eq!(record.phone, format!("phone-{}", suffix));
        assert_eq!(store.len(), 1);
    }
}
