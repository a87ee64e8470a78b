use crate::markup::escape_html;
use scraper::{ElementRef, Html, Node, Selector};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

pub type WrapResult<T> = Result<T, WrapError>;

/// Errors that abort post-processing of a rendered fragment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WrapError {
    #[error("Invalid exclusion selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Container class must be a single non-blank class name, got '{0}'")]
    InvalidContainerClass(String),

    #[error("Fragment is not well-formed HTML ({count} parse errors): {message}")]
    Parse { message: String, count: usize },

    #[error("Parsed fragment has no root element")]
    MissingRoot,
}

/// Which top-level children get wrapped, and in what container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrapRule {
    pub container_class: String,

    #[serde(default)]
    pub additional_classes: Vec<String>,

    /// CSS selector; matching children stay unwrapped
    #[serde(default)]
    pub exclusion: Option<String>,
}

impl WrapRule {
    pub fn new(container_class: impl Into<String>) -> Self {
        Self {
            container_class: container_class.into(),
            additional_classes: Vec::new(),
            exclusion: None,
        }
    }

    pub fn with_additional_class(mut self, class: impl Into<String>) -> Self {
        self.additional_classes.push(class.into());
        self
    }

    pub fn with_exclusion(mut self, selector: impl Into<String>) -> Self {
        self.exclusion = Some(selector.into());
        self
    }

    /// Class attribute of a new container: the container class, then the additional ones
    pub fn container_class_attribute(&self) -> String {
        std::iter::once(self.container_class.as_str())
            .chain(
                self.additional_classes
                    .iter()
                    .map(String::as_str)
                    .filter(|class| !class.trim().is_empty()),
            )
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Wrap every top-level element of `fragment` in a container `div`, unless it
/// already carries the container class or matches the rule's exclusion.
///
/// Text and comment nodes are never wrapped, and the relative order of all
/// top-level nodes is preserved. Running the wrapper on its own output is a
/// no-op since every container carries the container class.
///
/// Markup the parser would have to repair (stray end tags, table rows
/// outside a table, ...) is rejected with [`WrapError::Parse`] instead of
/// being rewritten.
#[instrument(skip_all, fields(container = %rule.container_class, len = fragment.len()))]
pub fn wrap_children(fragment: &str, rule: &WrapRule) -> WrapResult<String> {
    if fragment.trim().is_empty() {
        return Ok(fragment.to_string());
    }

    let container_class = rule.container_class.trim();
    if container_class.is_empty() || container_class.split_whitespace().count() > 1 {
        return Err(WrapError::InvalidContainerClass(rule.container_class.clone()));
    }

    let exclusion = rule
        .exclusion
        .as_deref()
        .filter(|selector| !selector.trim().is_empty())
        .map(parse_selector)
        .transpose()?;

    let mut document = Html::parse_fragment(fragment);
    if let Some(message) = document.errors.first() {
        return Err(WrapError::Parse {
            message: message.to_string(),
            count: document.errors.len(),
        });
    }
    let root_id = document.root_element().id();

    let targets: Vec<_> = {
        let children: Vec<ElementRef> = document
            .root_element()
            .children()
            .filter_map(ElementRef::wrap)
            .collect();
        let excluded = match &exclusion {
            Some(selector) => excluded_children(fragment, selector, children.len())?,
            None => vec![false; children.len()],
        };

        children
            .iter()
            .zip(excluded)
            .filter(|(element, excluded)| {
                !excluded && !element.value().classes().any(|class| class == container_class)
            })
            .map(|(element, _)| element.id())
            .collect()
    };

    debug!(wrapped = targets.len(), "Wrapping top-level children");

    let container = container_node(&rule.container_class_attribute())?;
    for target in targets {
        let mut node = document.tree.get_mut(target).ok_or(WrapError::MissingRoot)?;
        let container_id = node.insert_before(container.clone()).id();
        document
            .tree
            .get_mut(container_id)
            .ok_or(WrapError::MissingRoot)?
            .append_id(target);
    }

    let root = document
        .tree
        .get(root_id)
        .and_then(ElementRef::wrap)
        .ok_or(WrapError::MissingRoot)?;

    Ok(root.inner_html())
}

/// Exclusion matches for each top-level element, evaluated with the elements
/// parented by `body` so selectors such as `body > span` apply.
fn excluded_children(fragment: &str, selector: &Selector, expected: usize) -> WrapResult<Vec<bool>> {
    let markup = format!("<!DOCTYPE html><html><head></head><body>{}</body></html>", fragment);
    let document = Html::parse_document(&markup);

    let body = document
        .root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "body")
        .ok_or(WrapError::MissingRoot)?;

    let excluded: Vec<bool> = body
        .children()
        .filter_map(ElementRef::wrap)
        .map(|element| selector.matches(&element))
        .collect();

    if excluded.len() != expected {
        return Err(WrapError::Parse {
            message: format!("expected {} top-level elements, found {}", expected, excluded.len()),
            count: document.errors.len(),
        });
    }

    Ok(excluded)
}

fn parse_selector(selector: &str) -> WrapResult<Selector> {
    Selector::parse(selector).map_err(|err| WrapError::InvalidSelector {
        selector: selector.to_string(),
        message: err.to_string(),
    })
}

/// A detached `div` element node carrying `class_attribute`, built by the parser itself
fn container_node(class_attribute: &str) -> WrapResult<Node> {
    let markup = format!("<div class=\"{}\"></div>", escape_html(class_attribute));
    let template = Html::parse_fragment(&markup);

    template
        .root_element()
        .first_child()
        .map(|node| node.value().clone())
        .ok_or(WrapError::MissingRoot)
}
