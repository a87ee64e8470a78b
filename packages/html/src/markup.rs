use polaris_common::{is_valid_attribute_name, AttrValue, AttributeMap};

/// Incremental HTML writer used by component templates
#[derive(Debug, Default)]
pub struct MarkupBuilder {
    buffer: String,
}

impl MarkupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opening tag with escaped attributes
    pub fn open(&mut self, tag: &str, attributes: &AttributeMap) -> &mut Self {
        self.buffer.push('<');
        self.buffer.push_str(tag);
        write_attributes(&mut self.buffer, attributes);
        self.buffer.push('>');
        self
    }

    /// Opening tag carrying only a class attribute
    pub fn open_with_class(&mut self, tag: &str, class: &str) -> &mut Self {
        self.open(tag, &class_attribute(class))
    }

    pub fn close(&mut self, tag: &str) -> &mut Self {
        if !is_void_element(tag) {
            self.buffer.push_str("</");
            self.buffer.push_str(tag);
            self.buffer.push('>');
        }
        self
    }

    /// Already-rendered markup, inserted as-is
    pub fn raw(&mut self, html: &str) -> &mut Self {
        self.buffer.push_str(html);
        self
    }

    /// Text content, escaped
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(&escape_html(text));
        self
    }

    /// A complete element whose content is already-rendered markup
    pub fn element(&mut self, tag: &str, attributes: &AttributeMap, inner: &str) -> &mut Self {
        self.open(tag, attributes).raw(inner).close(tag)
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

/// Render a single element around already-rendered `inner` markup
pub fn content_tag(tag: &str, attributes: &AttributeMap, inner: &str) -> String {
    let mut builder = MarkupBuilder::new();
    builder.element(tag, attributes, inner);
    builder.finish()
}

/// Attribute map with just `class`
pub fn class_attribute(class: &str) -> AttributeMap {
    let mut attributes = AttributeMap::new();
    attributes.insert("class".to_string(), AttrValue::from(class));
    attributes
}

fn write_attributes(buffer: &mut String, attributes: &AttributeMap) {
    for (name, value) in attributes {
        if !is_valid_attribute_name(name) {
            continue;
        }
        match value {
            // Boolean attributes are present or absent, never "false"
            AttrValue::Bool(false) => continue,
            AttrValue::Bool(true) => {
                buffer.push_str(&format!(" {}=\"{}\"", name, escape_html(name)));
            }
            AttrValue::Number(number) => {
                buffer.push_str(&format!(" {}=\"{}\"", name, number));
            }
            AttrValue::Text(text) => {
                buffer.push_str(&format!(" {}=\"{}\"", name, escape_html(text)));
            }
        }
    }
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}
