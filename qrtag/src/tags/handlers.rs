// This file is part of the product QR Tracker.
// SPDX-FileCopyrightText: 2026 QR Tracker contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::lifecycle::Resolution;
use super::types::{ContactForm, TagError, TagId};
use crate::app_state::AppState;
use crate::headers::{CacheDirective, set_cache_directive};
use crate::public::{error, page};
use crate::templates::{TagDetailsContext, TagFormContext};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Result, web};
use log::{debug, warn};

const REGISTER_TEMPLATE: &str = "tags/register.html";
const EDIT_TEMPLATE: &str = "tags/edit.html";
const DETAILS_TEMPLATE: &str = "tags/details.html";

pub async fn view_tag(
    req: HttpRequest,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    set_cache_directive(&req, CacheDirective::NoStore);
    let id = match TagId::parse(&path) {
        Ok(id) => id,
        Err(_) => return serve_invalid_tag(&app_state),
    };

    let app_name = app_state.error_renderer.app_name();
    match app_state.lifecycle.resolve(&id) {
        Resolution::Unregistered => {
            debug!("Tag {} is not registered; presenting registration form", id);
            let form = ContactForm::default();
            let context = TagFormContext::new(app_name, &id, &form).to_value();
            page::serve_page(&app_state, StatusCode::OK, REGISTER_TEMPLATE, context)
        }
        Resolution::Registered(record) => {
            let context = TagDetailsContext::new(app_name, &id, &record).to_value();
            page::serve_page(&app_state, StatusCode::OK, DETAILS_TEMPLATE, context)
        }
    }
}

pub async fn register_tag(
    req: HttpRequest,
    path: web::Path<String>,
    form: web::Form<ContactForm>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    set_cache_directive(&req, CacheDirective::NoStore);
    let id = match TagId::parse(&path) {
        Ok(id) => id,
        Err(_) => return serve_invalid_tag(&app_state),
    };
    let form = form.into_inner();

    let record = match form.to_record() {
        Ok(record) => record,
        Err(err) => return serve_rejected_form(&app_state, REGISTER_TEMPLATE, &id, &form, err),
    };

    app_state.lifecycle.register(&id, record);
    Ok(page::redirect(&id.view_path()))
}

pub async fn edit_tag_form(
    req: HttpRequest,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    set_cache_directive(&req, CacheDirective::NoStore);
    let id = match TagId::parse(&path) {
        Ok(id) => id,
        Err(_) => return serve_invalid_tag(&app_state),
    };

    let Some(record) = app_state.lifecycle.edit_form(&id) else {
        debug!("Edit requested for unregistered tag {}; redirecting", id);
        return Ok(page::redirect(&id.view_path()));
    };

    let form = ContactForm::from_record(&record);
    let context =
        TagFormContext::new(app_state.error_renderer.app_name(), &id, &form).to_value();
    page::serve_page(&app_state, StatusCode::OK, EDIT_TEMPLATE, context)
}

pub async fn update_tag(
    req: HttpRequest,
    path: web::Path<String>,
    form: web::Form<ContactForm>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    set_cache_directive(&req, CacheDirective::NoStore);
    let id = match TagId::parse(&path) {
        Ok(id) => id,
        Err(_) => return serve_invalid_tag(&app_state),
    };
    let form = form.into_inner();

    let record = match form.to_record() {
        Ok(record) => record,
        Err(err) => return serve_rejected_form(&app_state, EDIT_TEMPLATE, &id, &form, err),
    };

    if let Err(err) = app_state.lifecycle.update(&id, record) {
        warn!("Rejected edit submission: {}", err);
    }
    Ok(page::redirect(&id.view_path()))
}

fn serve_rejected_form(
    app_state: &AppState,
    template_name: &str,
    id: &TagId,
    form: &ContactForm,
    err: TagError,
) -> Result<HttpResponse> {
    debug!("Rejected submission for tag {}: {}", id, err);
    let context = TagFormContext::new(app_state.error_renderer.app_name(), id, form)
        .with_error(&err)
        .to_value();
    page::serve_page(app_state, StatusCode::BAD_REQUEST, template_name, context)
}

fn serve_invalid_tag(app_state: &AppState) -> Result<HttpResponse> {
    error::serve_404(
        &app_state.error_renderer,
        Some(app_state.templates.as_ref()),
    )
}
