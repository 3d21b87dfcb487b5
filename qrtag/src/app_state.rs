// This file is part of the product QR Tracker.
// SPDX-FileCopyrightText: 2026 QR Tracker contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::sync::Arc;

use crate::public::error::ErrorRenderer;
use crate::tags::{MemoryTagStore, TagLifecycle, TagStore};
use crate::templates::{MiniJinjaEngine, TemplateEngine};

pub struct AppState {
    pub templates: Arc<dyn TemplateEngine>,
    pub error_renderer: ErrorRenderer,
    pub lifecycle: TagLifecycle,
}

impl AppState {
    pub fn new(app_name: &str, store: Arc<dyn TagStore>) -> Self {
        Self {
            templates: Arc::new(MiniJinjaEngine::new()),
            error_renderer: ErrorRenderer::new(app_name.to_string()),
            lifecycle: TagLifecycle::new(store),
        }
    }

    /// State backed by a fresh, empty in-memory store.
    pub fn in_memory(app_name: &str) -> Self {
        Self::new(app_name, Arc::new(MemoryTagStore::new()))
    }
}
