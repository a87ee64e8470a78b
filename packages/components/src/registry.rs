use crate::button::Button;
use crate::button_group::ButtonGroup;
use crate::component::{render, Component, RenderResult};
use crate::labelled::Labelled;
use polaris_common::{AttributeMap, BaseAttributes, ConfigError, ConfigResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Names accepted in [`ComponentSpec::component`]
pub const COMPONENT_NAMES: &[&str] = &["button", "button_group", "labelled"];

/// Untyped description of a component, as loaded from JSON.
///
/// ```json
/// {
///   "component": "button",
///   "options": { "primary": true, "url": "/orders" },
///   "aria": { "haspopup": "menu" },
///   "content": "Orders"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ComponentSpec {
    pub component: String,

    #[serde(default)]
    pub options: Value,

    #[serde(default)]
    pub data: AttributeMap,

    #[serde(default)]
    pub aria: AttributeMap,

    #[serde(default)]
    pub html_options: AttributeMap,

    /// Already-rendered child markup
    #[serde(default)]
    pub content: String,

    /// Nested components, rendered after `content`
    #[serde(default)]
    pub children: Vec<ComponentSpec>,
}

impl ComponentSpec {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            ..Default::default()
        }
    }

    pub fn attributes(&self) -> BaseAttributes {
        BaseAttributes {
            data: self.data.clone(),
            aria: self.aria.clone(),
            html_options: self.html_options.clone(),
        }
    }
}

/// Resolve the component name and build it from its options.
///
/// Unknown option keys are rejected here; option values are only checked
/// when the component is rendered.
pub fn build_component(spec: &ComponentSpec) -> ConfigResult<Box<dyn Component>> {
    let base = spec.attributes();

    let component: Box<dyn Component> = match spec.component.as_str() {
        "button" => Box::new(Button::with_attributes(parse_options(spec)?, base)),
        "button_group" => Box::new(ButtonGroup::with_attributes(parse_options(spec)?, base)),
        "labelled" => Box::new(Labelled::with_attributes(parse_options(spec)?, base)),
        other => return Err(ConfigError::UnknownComponent(other.to_string())),
    };

    debug!(component = %spec.component, "Built component");
    Ok(component)
}

/// Build and render `spec`, children first
pub fn render_spec(spec: &ComponentSpec) -> RenderResult<String> {
    let component = build_component(spec)?;

    let mut content = spec.content.clone();
    for child in &spec.children {
        content.push_str(&render_spec(child)?);
    }

    render(component.as_ref(), &content)
}

fn parse_options<T: DeserializeOwned>(spec: &ComponentSpec) -> ConfigResult<T> {
    let options = match &spec.options {
        Value::Null => Value::Object(Default::default()),
        other => other.clone(),
    };
    serde_json::from_value(options).map_err(|err| ConfigError::invalid_options(&spec.component, err))
}
