use crate::classes::ClassList;
use crate::error::ValidationErrors;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single attribute value as supplied by a caller or computed by a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Number(i64),
    Text(String),
}

impl AttrValue {
    /// Blank text never reaches the rendered markup
    pub fn is_blank(&self) -> bool {
        matches!(self, AttrValue::Text(text) if text.trim().is_empty())
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(value) => write!(f, "{}", value),
            AttrValue::Number(value) => write!(f, "{}", value),
            AttrValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Number(value)
    }
}

/// One attribute namespace (`data`, `aria` or html options)
pub type AttributeMap = BTreeMap<String, AttrValue>;

/// HTML attribute name rules: non-empty, no whitespace, controls, quotes, `<`, `>`, `/` or `=`
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

/// Merge `computed` with `caller`; the caller's entry wins on every key collision
pub fn merge_caller_wins(computed: AttributeMap, caller: &AttributeMap) -> AttributeMap {
    let mut merged = computed;
    merged.extend(caller.iter().map(|(key, value)| (key.clone(), value.clone())));
    merged
}

/// The three attribute namespaces every component accepts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaseAttributes {
    pub data: AttributeMap,
    pub aria: AttributeMap,
    pub html_options: AttributeMap,
}

impl BaseAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn with_aria(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.aria.insert(key.into(), value.into());
        self
    }

    pub fn with_html_option(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.html_options.insert(key.into(), value.into());
        self
    }

    /// Report keys that cannot be written as attribute names
    pub fn validate_names(&self, errors: &mut ValidationErrors) {
        for (field, map) in [("data", &self.data), ("aria", &self.aria), ("html_options", &self.html_options)] {
            for key in map.keys().filter(|key| !is_valid_attribute_name(key)) {
                errors.add(field, format!("{:?} is not a valid attribute name", key));
            }
        }
    }

    /// Combine the caller's namespaces with what a component computed for itself
    pub fn render_options(
        &self,
        classes: ClassList,
        additional_data: AttributeMap,
        additional_aria: AttributeMap,
    ) -> RenderOptions {
        RenderOptions {
            class: classes.compact(),
            data: merge_caller_wins(additional_data, &self.data),
            aria: merge_caller_wins(additional_aria, &self.aria),
            html: self.html_options.clone(),
        }
    }
}

/// Resolved attributes a component template consumes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub class: ClassList,
    pub data: AttributeMap,
    pub aria: AttributeMap,
    pub html: AttributeMap,
}

impl RenderOptions {
    /// Flatten into root-element attributes.
    ///
    /// Precedence from lowest to highest: `class`, `data-*` and `aria-*`,
    /// then `tag_attributes`, then the caller's html options.
    pub fn to_attributes(&self, tag_attributes: &AttributeMap) -> AttributeMap {
        let mut attributes = AttributeMap::new();

        if !self.class.is_empty() {
            attributes.insert("class".to_string(), AttrValue::Text(self.class.to_string()));
        }
        for (key, value) in &self.data {
            attributes.insert(format!("data-{}", key), AttrValue::Text(value.to_string()));
        }
        for (key, value) in &self.aria {
            attributes.insert(format!("aria-{}", key), AttrValue::Text(value.to_string()));
        }

        attributes.extend(tag_attributes.iter().map(|(k, v)| (k.clone(), v.clone())));
        attributes.extend(self.html.iter().map(|(k, v)| (k.clone(), v.clone())));
        attributes
    }
}
