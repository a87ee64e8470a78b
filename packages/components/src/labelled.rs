use crate::button::{Button, ButtonOptions};
use crate::component::{render, Component, RenderResult};
use polaris_common::{
    is_present, validate_integer, validate_type, AttrValue, AttributeMap, BaseAttributes,
    ClassList, OptionValue, RenderOptions, ValidationErrors,
};
use polaris_html::{escape_html, MarkupBuilder};
use serde::{Deserialize, Serialize};

/// Secondary action shown next to a field label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Action {
    pub content: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub accessibility_label: Option<String>,
    #[serde(default)]
    pub external: bool,
}

/// Options accepted by [`Labelled`].
///
/// `form` and `attr` bind the field to a host form object: `form` is the
/// object name, `attr` the attribute being edited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct LabelledOptions {
    pub form: String,
    pub attr: String,
    pub id: String,
    pub label: String,
    /// Shown only when it is a non-blank string
    pub error: OptionValue,
    /// Must describe an [`Action`]
    pub action: OptionValue,
    pub help_text: String,
    pub label_hidden: bool,
    /// Position inside a collection of fields; must be an integer
    pub index: OptionValue,
}

/// Attributes handed to the label of a form-bound field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelAttrs {
    pub form: String,
    pub attr: String,
    pub hidden: bool,
    pub index: Option<i64>,
}

/// A form field wrapper with label, optional action, error and help text
#[derive(Debug, Clone)]
pub struct Labelled {
    options: LabelledOptions,
    base: BaseAttributes,
}

impl Labelled {
    pub fn new(options: LabelledOptions) -> Self {
        Self::with_attributes(options, BaseAttributes::default())
    }

    pub fn with_attributes(options: LabelledOptions, base: BaseAttributes) -> Self {
        Self { options, base }
    }

    pub fn options(&self) -> &LabelledOptions {
        &self.options
    }

    pub fn label_attrs(&self) -> LabelAttrs {
        LabelAttrs {
            form: self.options.form.clone(),
            attr: self.options.attr.clone(),
            hidden: false,
            index: self.index(),
        }
    }

    pub fn index(&self) -> Option<i64> {
        self.options.index.as_i64()
    }

    pub fn action(&self) -> Option<Action> {
        serde_json::from_value(self.options.action.clone()).ok()
    }

    /// The error message, when it is a non-blank string
    pub fn error(&self) -> Option<&str> {
        self.options
            .error
            .as_str()
            .filter(|error| !error.trim().is_empty())
    }

    pub fn has_error(&self) -> bool {
        self.error().is_some()
    }

    /// Explicit `id`, else `<form>_<attr>` or `<form>_<index>_<attr>`
    pub fn field_id(&self) -> String {
        if is_present(Some(&self.options.id)) {
            return self.options.id.clone();
        }

        let form = &self.options.form;
        let attr = &self.options.attr;
        match self.index() {
            Some(index) => format!("{}_{}_{}", form, index, attr),
            None => format!("{}_{}", form, attr),
        }
    }

    pub fn label_id(&self) -> String {
        format!("{}Label", self.field_id())
    }

    pub fn error_id(&self) -> String {
        format!("{}Error", self.field_id())
    }

    pub fn help_text_id(&self) -> String {
        format!("{}HelpText", self.field_id())
    }

    /// Ids the bound input should list in `aria-describedby`
    pub fn described_by(&self) -> Option<String> {
        let mut ids = Vec::new();
        if self.has_error() {
            ids.push(self.error_id());
        }
        if is_present(Some(&self.options.help_text)) {
            ids.push(self.help_text_id());
        }
        (!ids.is_empty()).then(|| ids.join(" "))
    }

    fn render_action(&self, html: &mut MarkupBuilder) -> RenderResult<()> {
        let Some(action) = self.action() else {
            return Ok(());
        };

        let button = Button::new(ButtonOptions {
            plain: true,
            url: action.url.unwrap_or_default(),
            external: action.external,
            accessibility_label: action.accessibility_label.unwrap_or_default(),
            ..Default::default()
        });

        html.open_with_class("div", "Polaris-Labelled__Action")
            .raw(&render(&button, &escape_html(&action.content))?)
            .close("div");
        Ok(())
    }
}

impl Component for Labelled {
    fn name(&self) -> &'static str {
        "labelled"
    }

    fn base(&self) -> &BaseAttributes {
        &self.base
    }

    fn validate(&self) -> ValidationErrors {
        let options = &self.options;
        let mut errors = ValidationErrors::new();

        if !is_present(Some(&options.form)) {
            errors.add("form", "can't be blank");
        }
        if !is_present(Some(&options.attr)) {
            errors.add("attr", "can't be blank");
        }
        validate_type::<Action>(&mut errors, "action", "Action", &options.action);
        validate_integer(&mut errors, "index", &options.index);

        errors
    }

    fn classes(&self) -> ClassList {
        let mut classes = ClassList::new();
        classes.push_if(self.options.label_hidden, "Polaris-Labelled--hidden");
        classes
    }

    fn additional_data(&self) -> AttributeMap {
        let mut data = AttributeMap::new();
        data.insert("field".to_string(), AttrValue::Text(self.field_id()));
        data
    }

    fn additional_aria(&self) -> AttributeMap {
        let mut aria = AttributeMap::new();
        if let Some(ids) = self.described_by() {
            aria.insert("describedby".to_string(), AttrValue::Text(ids));
        }
        aria
    }

    fn template(&self, options: &RenderOptions, content: &str) -> RenderResult<String> {
        let field_id = self.field_id();
        let mut html = MarkupBuilder::new();

        html.open("div", &options.to_attributes(&self.tag_attributes()))
            .open_with_class("div", "Polaris-Labelled__LabelWrapper")
            .open_with_class("div", "Polaris-Label");

        let mut label = AttributeMap::new();
        label.insert("class".to_string(), AttrValue::from("Polaris-Label__Text"));
        label.insert("for".to_string(), AttrValue::Text(field_id.clone()));
        label.insert("id".to_string(), AttrValue::Text(self.label_id()));
        html.open("label", &label)
            .text(&self.options.label)
            .close("label")
            .close("div");

        self.render_action(&mut html)?;
        html.close("div");

        html.raw(content);

        if let Some(error) = self.error() {
            let mut inline_error = AttributeMap::new();
            inline_error.insert("class".to_string(), AttrValue::from("Polaris-InlineError"));
            inline_error.insert("id".to_string(), AttrValue::Text(self.error_id()));

            html.open_with_class("div", "Polaris-Labelled__Error")
                .open("div", &inline_error)
                .text(error)
                .close("div")
                .close("div");
        }

        if is_present(Some(&self.options.help_text)) {
            let mut help = AttributeMap::new();
            help.insert("class".to_string(), AttrValue::from("Polaris-Labelled__HelpText"));
            help.insert("id".to_string(), AttrValue::Text(self.help_text_id()));

            html.open("div", &help).text(&self.options.help_text).close("div");
        }

        html.close("div");
        Ok(html.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(options: LabelledOptions) -> Labelled {
        Labelled::new(LabelledOptions {
            form: "product".to_string(),
            attr: "title".to_string(),
            label: "Title".to_string(),
            ..options
        })
    }

    #[test]
    fn test_field_id_from_form_binding() {
        assert_eq!(field(LabelledOptions::default()).field_id(), "product_title");

        let indexed = field(LabelledOptions {
            index: json!(2),
            ..Default::default()
        });
        assert_eq!(indexed.field_id(), "product_2_title");

        let explicit = field(LabelledOptions {
            id: "custom".to_string(),
            ..Default::default()
        });
        assert_eq!(explicit.field_id(), "custom");
        assert_eq!(explicit.error_id(), "customError");
    }

    #[test]
    fn test_label_attrs() {
        let labelled = field(LabelledOptions {
            index: json!(1),
            ..Default::default()
        });

        assert_eq!(
            labelled.label_attrs(),
            LabelAttrs {
                form: "product".to_string(),
                attr: "title".to_string(),
                hidden: false,
                index: Some(1),
            }
        );
    }

    #[test]
    fn test_validation() {
        assert!(field(LabelledOptions::default()).validate().is_empty());

        let errors = Labelled::new(LabelledOptions {
            action: json!("Edit"),
            index: json!("first"),
            ..Default::default()
        })
        .validate();

        assert_eq!(errors.get("form"), &["can't be blank".to_string()]);
        assert_eq!(errors.get("attr"), &["can't be blank".to_string()]);
        assert_eq!(errors.get("action"), &["is not a valid Action".to_string()]);
        assert_eq!(errors.get("index"), &["must be an integer".to_string()]);
    }

    #[test]
    fn test_index_beyond_i64_is_rejected() {
        let labelled = field(LabelledOptions {
            index: json!(u64::MAX),
            ..Default::default()
        });

        assert_eq!(labelled.validate().get("index"), &["must be an integer".to_string()]);
        assert!(render(&labelled, "").is_err());
    }

    #[test]
    fn test_error_only_when_string() {
        assert!(!field(LabelledOptions {
            error: json!(true),
            ..Default::default()
        })
        .has_error());

        assert!(!field(LabelledOptions {
            error: json!(" "),
            ..Default::default()
        })
        .has_error());

        assert_eq!(
            field(LabelledOptions {
                error: json!("Title is required"),
                ..Default::default()
            })
            .error(),
            Some("Title is required")
        );
    }

    #[test]
    fn test_described_by() {
        let labelled = field(LabelledOptions {
            error: json!("Required"),
            help_text: "Shown to customers".to_string(),
            ..Default::default()
        });
        assert_eq!(
            labelled.described_by().as_deref(),
            Some("product_titleError product_titleHelpText")
        );
        assert_eq!(field(LabelledOptions::default()).described_by(), None);

        assert_eq!(
            labelled.render_options().aria.get("describedby"),
            Some(&AttrValue::from("product_titleError product_titleHelpText"))
        );
        assert!(field(LabelledOptions::default()).additional_aria().is_empty());
    }

    #[test]
    fn test_hidden_label_class() {
        let classes = field(LabelledOptions {
            label_hidden: true,
            ..Default::default()
        })
        .classes();
        assert_eq!(classes.to_string(), "Polaris-Labelled--hidden");
        assert!(field(LabelledOptions::default()).classes().is_empty());
    }

    #[test]
    fn test_render_minimal() {
        let html = render(&field(LabelledOptions::default()), "<input id=\"product_title\">").unwrap();

        assert_eq!(
            html,
            "<div data-field=\"product_title\">\
             <div class=\"Polaris-Labelled__LabelWrapper\">\
             <div class=\"Polaris-Label\">\
             <label class=\"Polaris-Label__Text\" for=\"product_title\" id=\"product_titleLabel\">Title</label>\
             </div></div>\
             <input id=\"product_title\">\
             </div>"
        );
    }

    #[test]
    fn test_render_with_action_error_and_help() {
        let html = render(
            &field(LabelledOptions {
                error: json!("Can't be <empty>"),
                help_text: "Max 255 characters".to_string(),
                action: json!({ "content": "Edit", "url": "/edit" }),
                ..Default::default()
            }),
            "",
        )
        .unwrap();

        assert!(html.contains("<div class=\"Polaris-Labelled__Action\"><a class=\"Polaris-Button Polaris-Button--plain\" href=\"/edit\">"));
        assert!(html.contains("<div class=\"Polaris-InlineError\" id=\"product_titleError\">Can&#39;t be &lt;empty&gt;</div>"));
        assert!(html.contains("<div class=\"Polaris-Labelled__HelpText\" id=\"product_titleHelpText\">Max 255 characters</div>"));
    }
}
