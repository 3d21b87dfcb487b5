// This file is part of the product QR Tracker.
// SPDX-FileCopyrightText: 2026 QR Tracker contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::{error, page};
use crate::app_state::AppState;
use crate::config::ValidatedConfig;
use crate::headers::{CacheDirective, set_cache_directive};
use crate::templates::HomePageContext;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Result, web};

pub async fn index(
    req: HttpRequest,
    config: web::Data<ValidatedConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    set_cache_directive(&req, CacheDirective::StaticHtml);
    let context = HomePageContext::new(&config.app.name, &config.app.description).to_value();
    page::serve_page(&app_state, StatusCode::OK, "home.html", context)
}

pub async fn not_found(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    error::serve_404(
        &app_state.error_renderer,
        Some(app_state.templates.as_ref()),
    )
}
