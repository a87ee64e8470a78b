//! The lifecycle every component shares.
//!
//! A component is an immutable configuration object. [`render`] drives it
//! through the same steps every time:
//!
//! 1. [`Component::validate`] - any violation aborts the render
//! 2. [`Component::wrap_rule`] - optional structural rewrite of the child content
//! 3. [`Component::render_options`] - classes, `data` and `aria` merged with the caller's
//! 4. [`Component::template`] - the markup itself

use polaris_common::{AttributeMap, BaseAttributes, ClassList, ConfigError, RenderOptions, ValidationErrors};
use polaris_html::{wrap_children, WrapError, WrapRule};
use std::fmt;
use thiserror::Error;
use tracing::{debug, instrument};

pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that stop a component from rendering
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Parse error: {0}")]
    Wrap(#[from] WrapError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl RenderError {
    /// The structured violations, if this is a validation failure
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            RenderError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Capability interface implemented by every component
pub trait Component: fmt::Debug + Send + Sync {
    /// Registry name, e.g. `button`
    fn name(&self) -> &'static str;

    /// The caller's `data`, `aria` and html option namespaces
    fn base(&self) -> &BaseAttributes;

    /// Check every option against its domain
    fn validate(&self) -> ValidationErrors {
        ValidationErrors::new()
    }

    fn classes(&self) -> ClassList {
        ClassList::new()
    }

    /// Computed `data-*` entries; caller entries win on collision
    fn additional_data(&self) -> AttributeMap {
        AttributeMap::new()
    }

    /// Computed `aria-*` entries; caller entries win on collision
    fn additional_aria(&self) -> AttributeMap {
        AttributeMap::new()
    }

    /// Root element attributes outside the `data`/`aria` namespaces
    fn tag_attributes(&self) -> AttributeMap {
        AttributeMap::new()
    }

    /// Structural rule applied to the child content before templating
    fn wrap_rule(&self) -> Option<WrapRule> {
        None
    }

    fn render_options(&self) -> RenderOptions {
        self.base()
            .render_options(self.classes(), self.additional_data(), self.additional_aria())
    }

    /// Final root element attributes: computed ones, then tag attributes, then html options
    fn attributes(&self) -> AttributeMap {
        self.render_options().to_attributes(&self.tag_attributes())
    }

    /// Produce markup around already-rendered child `content`
    fn template(&self, options: &RenderOptions, content: &str) -> RenderResult<String>;
}

/// Validate, post-process and render `component` around `content`.
///
/// Nothing is rendered when validation fails; the error lists every violated field.
#[instrument(skip_all, fields(component = component.name(), content_len = content.len()))]
pub fn render<C: Component + ?Sized>(component: &C, content: &str) -> RenderResult<String> {
    let mut errors = component.validate();
    component.base().validate_names(&mut errors);
    errors.into_result()?;

    let content = match component.wrap_rule() {
        Some(rule) => wrap_children(content, &rule)?,
        None => content.to_string(),
    };

    let options = component.render_options();
    let html = component.template(&options, &content)?;

    debug!(len = html.len(), "Rendered component");
    Ok(html)
}
