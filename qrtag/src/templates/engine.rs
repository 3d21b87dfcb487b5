// This file is part of the product QR Tracker.
// SPDX-FileCopyrightText: 2026 QR Tracker contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use minijinja::{Environment, Value, default_auto_escape_callback};

pub trait TemplateEngine: Send + Sync {
    fn render(&self, template_name: &str, context: Value) -> Result<String, minijinja::Error>;
}

pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(default_auto_escape_callback);
        env.set_loader(embedded_template_loader);
        Self { env }
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render(&self, template_name: &str, context: Value) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template_name)?;
        tmpl.render(context)
    }
}

/// Template loader for minijinja that loads from embedded sources
fn embedded_template_loader(name: &str) -> Result<Option<String>, minijinja::Error> {
    let template_content = match name {
        // Page shell shared by every page
        "layout.html" => Some(include_str!("../public/templates/layout.html")),
        "home.html" => Some(include_str!("../public/templates/home.html")),

        // Error pages
        "error_404.html" => Some(include_str!("../public/templates/error_404.html")),
        "error_500.html" => Some(include_str!("../public/templates/error_500.html")),

        // Tag pages
        "tags/register.html" => Some(include_str!("../tags/templates/register.html")),
        "tags/details.html" => Some(include_str!("../tags/templates/details.html")),
        "tags/edit.html" => Some(include_str!("../tags/templates/edit.html")),

        _ => None,
    };

    Ok(template_content.map(|s| s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn unknown_template_is_an_error() {
        let engine = MiniJinjaEngine::new();
        assert!(engine.render("missing.html", context! {}).is_err());
    }

    #[test]
    fn layout_wraps_page_content() {
        let engine = MiniJinjaEngine::new();
        let html = engine
            .render(
                "home.html",
                context! {
                    app_name => "QR Tracker",
                    description => "Find owners",
                    example_ids => vec!["tag001", "tag002"],
                },
            )
            .expect("render home");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>QR Tracker</title>"));
        assert!(html.contains("class=\"card\""));
        assert!(html.contains("Find owners"));
        assert!(html.contains("<code>/tag/tag001</code>"));
    }
}
