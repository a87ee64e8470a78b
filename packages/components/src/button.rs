use crate::component::{Component, RenderResult};
use polaris_common::{
    boolean_attribute, camelize, is_present, validate_boolean, validate_inclusion, AttrValue,
    AttributeMap, BaseAttributes, ClassList, OptionValue, RenderOptions, ValidationErrors,
};
use polaris_html::MarkupBuilder;
use serde::{Deserialize, Serialize};

pub const ALLOWED_ALIGNMENT: &[&str] = &["left", "center", "right"];
pub const ALLOWED_DISCLOSURES: &[&str] = &["down", "up", "select"];
pub const ALLOWED_SIZES: &[&str] = &["slim", "medium", "large"];

/// Options accepted by [`Button`]. Every field defaults to blank / `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ButtonOptions {
    pub accessibility_label: String,
    pub aria_controls: String,
    pub aria_described_by: String,
    /// `true`, `false` or blank
    pub aria_expanded: OptionValue,
    pub destructive: bool,
    pub disabled: bool,
    /// One of [`ALLOWED_DISCLOSURES`]
    pub disclosure: Option<String>,
    pub download: bool,
    /// Open the link in a new tab
    pub external: bool,
    pub full_width: bool,
    pub id: String,
    pub loading: bool,
    pub monochrome: bool,
    pub outline: bool,
    pub plain: bool,
    /// `true`, `false` or blank
    pub pressed: OptionValue,
    pub primary: bool,
    pub role: String,
    /// One of [`ALLOWED_SIZES`]
    pub size: Option<String>,
    pub submit: bool,
    /// One of [`ALLOWED_ALIGNMENT`]
    pub text_align: Option<String>,
    /// Renders the button as a link when present
    pub url: String,
}

/// Rendered shape of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Link,
    Button,
}

impl ButtonKind {
    pub fn tag(self) -> &'static str {
        match self {
            ButtonKind::Link => "a",
            ButtonKind::Button => "button",
        }
    }
}

/// An actionable element: a `<button>`, or an `<a>` when a URL is given
#[derive(Debug, Clone)]
pub struct Button {
    options: ButtonOptions,
    base: BaseAttributes,
    kind: ButtonKind,
}

impl Button {
    pub fn new(options: ButtonOptions) -> Self {
        Self::with_attributes(options, BaseAttributes::default())
    }

    pub fn with_attributes(options: ButtonOptions, base: BaseAttributes) -> Self {
        let kind = if is_present(Some(&options.url)) {
            ButtonKind::Link
        } else {
            ButtonKind::Button
        };

        Self {
            options,
            base,
            kind,
        }
    }

    pub fn kind(&self) -> ButtonKind {
        self.kind
    }

    pub fn options(&self) -> &ButtonOptions {
        &self.options
    }

    /// SVG path of the disclosure arrow, if one was requested
    pub fn disclosure_icon(&self) -> Option<&'static str> {
        match self.options.disclosure.as_deref() {
            Some("down") => Some(r#"<path d="M5 8l5 5 5-5H5z"></path>"#),
            Some("up") => Some(r#"<path d="M15 12l-5-5-5 5h10z"></path>"#),
            Some("select") => Some(r#"<path d="M10 16l-4-4h8l-4 4zm0-12l4 4H6l4-4z"></path>"#),
            _ => None,
        }
    }
}

impl Component for Button {
    fn name(&self) -> &'static str {
        "button"
    }

    fn base(&self) -> &BaseAttributes {
        &self.base
    }

    fn validate(&self) -> ValidationErrors {
        let options = &self.options;
        let mut errors = ValidationErrors::new();

        validate_inclusion(&mut errors, "disclosure", options.disclosure.as_deref(), ALLOWED_DISCLOSURES);
        validate_inclusion(&mut errors, "size", options.size.as_deref(), ALLOWED_SIZES);
        validate_inclusion(&mut errors, "text_align", options.text_align.as_deref(), ALLOWED_ALIGNMENT);
        validate_boolean(&mut errors, "aria_expanded", &options.aria_expanded);
        validate_boolean(&mut errors, "pressed", &options.pressed);

        // A link has no submit semantics
        if options.submit && self.kind == ButtonKind::Link {
            errors.add("submit", "cannot be combined with url");
        }

        errors
    }

    fn classes(&self) -> ClassList {
        let options = &self.options;
        let mut classes = ClassList::new();

        classes.push("Polaris-Button");
        classes.push_if(options.destructive, "Polaris-Button--destructive");
        classes.push_if(options.disabled, "Polaris-Button--disabled");
        classes.push_if(options.full_width, "Polaris-Button--fullWidth");
        classes.push_if(options.monochrome, "Polaris-Button--monochrome");
        classes.push_if(options.outline, "Polaris-Button--outline");
        classes.push_if(options.plain, "Polaris-Button--plain");
        classes.push_if(options.primary, "Polaris-Button--primary");

        if let Some(size) = options.size.as_deref().filter(|s| !s.trim().is_empty()) {
            classes.push(format!("Polaris-Button--size{}", camelize(size)));
        }
        if let Some(align) = options.text_align.as_deref().filter(|s| !s.trim().is_empty()) {
            classes.push(format!("Polaris-Button--textAlign{}", camelize(align)));
        }

        classes
    }

    fn additional_aria(&self) -> AttributeMap {
        let options = &self.options;
        let mut aria = AttributeMap::new();

        let mut insert_present = |key: &str, value: &str| {
            if is_present(Some(value)) {
                aria.insert(key.to_string(), AttrValue::from(value));
            }
        };
        insert_present("label", &options.accessibility_label);
        insert_present("controls", &options.aria_controls);
        insert_present("describedby", &options.aria_described_by);

        if let Some(expanded) = boolean_attribute(&options.aria_expanded) {
            aria.insert("expanded".to_string(), AttrValue::Text(expanded));
        }
        if let Some(pressed) = boolean_attribute(&options.pressed) {
            aria.insert("pressed".to_string(), AttrValue::Text(pressed));
        }
        if options.loading {
            aria.insert("busy".to_string(), AttrValue::from("true"));
        }

        aria
    }

    fn tag_attributes(&self) -> AttributeMap {
        let options = &self.options;
        let mut attrs = AttributeMap::new();

        attrs.insert(
            "disabled".to_string(),
            AttrValue::Bool(options.disabled || options.loading),
        );
        if is_present(Some(&options.role)) {
            attrs.insert("role".to_string(), AttrValue::from(options.role.as_str()));
        }
        if is_present(Some(&options.id)) {
            attrs.insert("id".to_string(), AttrValue::from(options.id.as_str()));
        }

        match self.kind {
            ButtonKind::Link => {
                attrs.insert("href".to_string(), AttrValue::from(options.url.as_str()));
                if options.external {
                    attrs.insert("target".to_string(), AttrValue::from("_blank"));
                }
                if options.download {
                    attrs.insert("download".to_string(), AttrValue::Bool(true));
                }
            }
            ButtonKind::Button => {
                let button_type = if options.submit { "submit" } else { "button" };
                attrs.insert("type".to_string(), AttrValue::from(button_type));
            }
        }

        attrs
    }

    fn template(&self, options: &RenderOptions, content: &str) -> RenderResult<String> {
        let tag = self.kind.tag();
        let mut html = MarkupBuilder::new();

        html.open(tag, &options.to_attributes(&self.tag_attributes()))
            .open_with_class("span", "Polaris-Button__Content");

        if self.options.loading {
            html.open_with_class("span", "Polaris-Button__Spinner")
                .open_with_class("span", "Polaris-Spinner Polaris-Spinner--sizeSmall")
                .close("span")
                .close("span");
        }

        if !content.trim().is_empty() {
            html.open_with_class("span", "Polaris-Button__Text")
                .raw(content)
                .close("span");
        }

        if let Some(path) = self.disclosure_icon() {
            html.open_with_class("span", "Polaris-Button__Icon")
                .open_with_class("span", "Polaris-Icon")
                .raw(r#"<svg viewBox="0 0 20 20" class="Polaris-Icon__Svg" focusable="false" aria-hidden="true">"#)
                .raw(path)
                .raw("</svg>")
                .close("span")
                .close("span");
        }

        html.close("span").close(tag);
        Ok(html.finish())
    }
}
