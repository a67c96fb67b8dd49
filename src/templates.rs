//! HTML pages, rendered with Handlebars from templates compiled into the
//! binary.

use std::fmt;
use std::sync::Arc;

use axum::response::Html;
use handlebars::{Handlebars, TemplateError};
use serde::Serialize;
use shipboard_core::AppError;

pub const LOGIN: &str = "login";
pub const REGISTER: &str = "register";
pub const CLIP: &str = "clip";

const LAYOUT: &str = "layout";

#[derive(Clone)]
pub struct Templates {
    registry: Arc<Handlebars<'static>>,
}

impl Templates {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();

        registry.register_partial(LAYOUT, include_str!("../templates/layout.hbs"))?;
        registry.register_template_string(LOGIN, include_str!("../templates/login.hbs"))?;
        registry.register_template_string(REGISTER, include_str!("../templates/register.hbs"))?;
        registry.register_template_string(CLIP, include_str!("../templates/clip.hbs"))?;

        Ok(Self {
            registry: Arc::new(registry),
        })
    }

    /// Renders `name` with `data`. A rendering failure is a 500.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<Html<String>, AppError> {
        self.registry
            .render(name, data)
            .map(Html)
            .map_err(AppError::internal)
    }
}

impl fmt::Debug for Templates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Templates")
            .field("registered", &self.registry.get_templates().len())
            .finish()
    }
}
