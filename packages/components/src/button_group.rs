use crate::component::{Component, RenderResult};
use polaris_common::{
    camelize, validate_inclusion, AttrValue, AttributeMap, BaseAttributes, ClassList,
    RenderOptions, ValidationErrors,
};
use polaris_html::{content_tag, WrapRule};
use serde::{Deserialize, Serialize};

pub const ALLOWED_SPACING: &[&str] = &["extraTight", "tight", "loose"];

pub const ITEM_CLASS: &str = "Polaris-ButtonGroup__Item";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ButtonGroupOptions {
    pub segmented: bool,
    pub full_width: bool,
    pub connected_top: bool,
    /// One of [`ALLOWED_SPACING`]
    pub spacing: Option<String>,
    pub no_wrap: bool,
}

/// Lays out buttons side by side; every top-level child is wrapped in an item container
#[derive(Debug, Clone)]
pub struct ButtonGroup {
    options: ButtonGroupOptions,
    base: BaseAttributes,
}

impl ButtonGroup {
    pub fn new(options: ButtonGroupOptions) -> Self {
        Self::with_attributes(options, BaseAttributes::default())
    }

    pub fn with_attributes(options: ButtonGroupOptions, base: BaseAttributes) -> Self {
        Self { options, base }
    }

    pub fn options(&self) -> &ButtonGroupOptions {
        &self.options
    }
}

impl Component for ButtonGroup {
    fn name(&self) -> &'static str {
        "button_group"
    }

    fn base(&self) -> &BaseAttributes {
        &self.base
    }

    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        validate_inclusion(&mut errors, "spacing", self.options.spacing.as_deref(), ALLOWED_SPACING);
        errors
    }

    fn classes(&self) -> ClassList {
        let options = &self.options;
        let mut classes = ClassList::new();

        classes.push("Polaris-ButtonGroup");
        if let Some(spacing) = options.spacing.as_deref().filter(|s| !s.trim().is_empty()) {
            classes.push(format!("Polaris-ButtonGroup--spacing{}", camelize(spacing)));
        }
        classes.push_if(options.segmented, "Polaris-ButtonGroup--segmented");
        classes.push_if(options.full_width, "Polaris-ButtonGroup--fullWidth");
        classes.push_if(options.no_wrap, "Polaris-ButtonGroup--noWrap");

        classes
    }

    fn additional_data(&self) -> AttributeMap {
        let options = &self.options;
        let mut data = AttributeMap::new();

        data.insert("buttongroup-segmented".to_string(), AttrValue::Bool(options.segmented));
        data.insert("buttongroup-connected-top".to_string(), AttrValue::Bool(options.connected_top));
        data.insert("buttongroup-full-width".to_string(), AttrValue::Bool(options.full_width));
        data.insert("buttongroup-no-wrap".to_string(), AttrValue::Bool(options.no_wrap));

        data
    }

    fn wrap_rule(&self) -> Option<WrapRule> {
        Some(WrapRule::new(ITEM_CLASS))
    }

    fn template(&self, options: &RenderOptions, content: &str) -> RenderResult<String> {
        Ok(content_tag("div", &options.to_attributes(&self.tag_attributes()), content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::render;

    #[test]
    fn test_children_are_wrapped_in_items() {
        let group = ButtonGroup::new(ButtonGroupOptions::default());
        let html = render(&group, "<button>One</button><button>Two</button>").unwrap();

        assert_eq!(
            html,
            "<div class=\"Polaris-ButtonGroup\" \
             data-buttongroup-connected-top=\"false\" \
             data-buttongroup-full-width=\"false\" \
             data-buttongroup-no-wrap=\"false\" \
             data-buttongroup-segmented=\"false\">\
             <div class=\"Polaris-ButtonGroup__Item\"><button>One</button></div>\
             <div class=\"Polaris-ButtonGroup__Item\"><button>Two</button></div>\
             </div>"
        );
    }

    #[test]
    fn test_existing_items_are_left_alone() {
        let group = ButtonGroup::new(ButtonGroupOptions::default());
        let content = "<div class=\"Polaris-ButtonGroup__Item Polaris-ButtonGroup__Item--plain\"><a>Plain</a></div>";

        let html = render(&group, content).unwrap();
        assert!(html.contains(content));
        assert_eq!(html.matches(ITEM_CLASS).count(), 2);
    }

    #[test]
    fn test_classes_and_data() {
        let group = ButtonGroup::new(ButtonGroupOptions {
            segmented: true,
            spacing: Some("extraTight".to_string()),
            ..Default::default()
        });

        assert_eq!(
            group.classes().to_string(),
            "Polaris-ButtonGroup Polaris-ButtonGroup--spacingExtraTight Polaris-ButtonGroup--segmented"
        );
        assert_eq!(
            group.attributes().get("data-buttongroup-segmented"),
            Some(&AttrValue::from("true"))
        );
    }

    #[test]
    fn test_invalid_spacing() {
        let errors = ButtonGroup::new(ButtonGroupOptions {
            spacing: Some("wide".to_string()),
            ..Default::default()
        })
        .validate();
        assert_eq!(errors.get("spacing"), &["wide is not a valid spacing".to_string()]);
    }
}
