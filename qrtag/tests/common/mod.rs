// This file is part of the product QR Tracker.
// SPDX-FileCopyrightText: 2026 QR Tracker contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use qrtag::app_state::AppState;
use qrtag::config::ValidatedConfig;
use qrtag::headers;
use qrtag::public;
use qrtag::tags;
use qrtag::util::TestConfigBuilder;
use std::sync::Arc;

pub const APP_NAME: &str = "QR Tracker";

pub struct TestHarness {
    pub config: Arc<ValidatedConfig>,
    pub app_state: Arc<AppState>,
}

impl TestHarness {
    pub fn new() -> Self {
        let config = Arc::new(TestConfigBuilder::new().with_app_name(APP_NAME).build());
        let app_state = Arc::new(AppState::in_memory(&config.app.name));
        Self { config, app_state }
    }
}

pub fn build_test_app(
    harness: &TestHarness,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    App::new()
        .app_data(web::Data::from(harness.config.clone()))
        .app_data(web::Data::from(harness.app_state.clone()))
        .wrap(headers::Headers)
        .configure(tags::configure)
        .configure(public::configure)
        .default_service(web::to(public::handlers::not_found))
}

pub fn form_body(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn form_post(uri: &str, fields: &[(&str, &str)]) -> test::TestRequest {
    test::TestRequest::post()
        .uri(uri)
        .insert_header(("Content-Type", "application/x-www-form-urlencoded"))
        .set_payload(form_body(fields))
}

pub fn location(resp: &ServiceResponse) -> String {
    resp.headers()
        .get("Location")
        .expect("location header")
        .to_str()
        .expect("location string")
        .to_string()
}

pub async fn read_html(resp: ServiceResponse) -> String {
    let body = test::read_body(resp).await;
    String::from_utf8_lossy(&body).to_string()
}

pub fn assert_redirects_to(resp: &ServiceResponse, expected: &str) {
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(resp), expected);
}
