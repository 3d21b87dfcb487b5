// This file is part of the product QR Tracker.
// SPDX-FileCopyrightText: 2026 QR Tracker contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::web;

pub mod handlers;
pub mod lifecycle;
pub mod store;
pub mod types;

pub use lifecycle::{Resolution, TagLifecycle};
pub use store::{MemoryTagStore, TagStore};
pub use types::{ContactForm, ContactRecord, TagError, TagId};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/tag/{id}")
            .route(web::get().to(handlers::view_tag))
            .route(web::post().to(handlers::register_tag)),
    )
    .service(
        web::resource("/tag/{id}/edit")
            .route(web::get().to(handlers::edit_tag_form))
            .route(web::post().to(handlers::update_tag)),
    );
}
