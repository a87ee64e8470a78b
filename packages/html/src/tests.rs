use crate::markup::class_attribute;
use crate::{content_tag, escape_html, wrap_children, MarkupBuilder, WrapError, WrapRule};
use polaris_common::{AttrValue, AttributeMap};

#[test]
fn test_wrap_end_to_end() {
    let fragment = "<div>A</div><div class='card'>B</div><div>C</div>";
    let rule = WrapRule::new("card").with_additional_class("highlight");

    let html = wrap_children(fragment, &rule).expect("Failed to wrap");

    assert_eq!(
        html,
        "<div class=\"card highlight\"><div>A</div></div>\
         <div class=\"card\">B</div>\
         <div class=\"card highlight\"><div>C</div></div>"
    );
}

#[test]
fn test_wrap_without_additional_classes() {
    let html = wrap_children("<span>One</span>", &WrapRule::new("item")).unwrap();
    assert_eq!(html, "<div class=\"item\"><span>One</span></div>");
}

#[test]
fn test_blank_fragment_is_returned_unchanged() {
    let rule = WrapRule::new("item");
    assert_eq!(wrap_children("", &rule).unwrap(), "");
    assert_eq!(wrap_children("  \n ", &rule).unwrap(), "  \n ");
}

#[test]
fn test_text_and_comments_are_not_wrapped() {
    let fragment = "Hello <!-- note --><b>bold</b>";
    let html = wrap_children(fragment, &WrapRule::new("item")).unwrap();

    assert_eq!(html, "Hello <!-- note --><div class=\"item\"><b>bold</b></div>");
}

#[test]
fn test_exclusion_selector_keeps_matching_children() {
    let fragment = "<button>Save</button><hr class=\"divider\"><button>Cancel</button>";
    let rule = WrapRule::new("item").with_exclusion(".divider");

    let html = wrap_children(fragment, &rule).unwrap();

    assert_eq!(
        html,
        "<div class=\"item\"><button>Save</button></div>\
         <hr class=\"divider\">\
         <div class=\"item\"><button>Cancel</button></div>"
    );
}

#[test]
fn test_exclusion_selector_by_tag_and_attribute() {
    let fragment = "<p>text</p><input type=\"hidden\"><a data-skip>link</a>";
    let rule = WrapRule::new("item").with_exclusion("input, [data-skip]");

    let html = wrap_children(fragment, &rule).unwrap();

    assert_eq!(
        html,
        "<div class=\"item\"><p>text</p></div><input type=\"hidden\"><a data-skip=\"\">link</a>"
    );
}

#[test]
fn test_only_direct_children_are_wrapped() {
    let fragment = "<ul><li>one</li><li>two</li></ul>";
    let html = wrap_children(fragment, &WrapRule::new("item")).unwrap();

    assert_eq!(html, "<div class=\"item\"><ul><li>one</li><li>two</li></ul></div>");
}

#[test]
fn test_invalid_exclusion_selector_is_an_error() {
    let rule = WrapRule::new("item").with_exclusion("::::");
    let err = wrap_children("<div>x</div>", &rule).unwrap_err();

    assert!(matches!(err, WrapError::InvalidSelector { ref selector, .. } if selector == "::::"));
}

#[test]
fn test_blank_exclusion_is_ignored() {
    let rule = WrapRule::new("item").with_exclusion("  ");
    let html = wrap_children("<div>x</div>", &rule).unwrap();
    assert_eq!(html, "<div class=\"item\"><div>x</div></div>");
}

#[test]
fn test_invalid_container_class_is_an_error() {
    let err = wrap_children("<div>x</div>", &WrapRule::new(" ")).unwrap_err();
    assert_eq!(err, WrapError::InvalidContainerClass(" ".to_string()));

    let err = wrap_children("<div>x</div>", &WrapRule::new("a b")).unwrap_err();
    assert_eq!(err, WrapError::InvalidContainerClass("a b".to_string()));
}

#[test]
fn test_additional_classes_are_escaped() {
    let rule = WrapRule::new("item").with_additional_class("x\"y");
    let html = wrap_children("<i>z</i>", &rule).unwrap();
    assert_eq!(html, "<div class=\"item x&quot;y\"><i>z</i></div>");
}

#[test]
fn test_content_tag_with_attributes() {
    let mut attributes = AttributeMap::new();
    attributes.insert("class".to_string(), AttrValue::from("Polaris-Button"));
    attributes.insert("disabled".to_string(), AttrValue::Bool(true));
    attributes.insert("hidden".to_string(), AttrValue::Bool(false));
    attributes.insert("tabindex".to_string(), AttrValue::Number(-1));
    attributes.insert("title".to_string(), AttrValue::from("Say \"hi\""));

    let html = content_tag("button", &attributes, "Save");

    assert_eq!(
        html,
        "<button class=\"Polaris-Button\" disabled=\"disabled\" tabindex=\"-1\" title=\"Say &quot;hi&quot;\">Save</button>"
    );
}

#[test]
fn test_invalid_attribute_names_are_never_written() {
    let mut attributes = AttributeMap::new();
    attributes.insert("id".to_string(), AttrValue::from("save"));
    attributes.insert("x\"><script>alert(1)</script".to_string(), AttrValue::from("y"));
    attributes.insert("a b".to_string(), AttrValue::Bool(true));

    assert_eq!(content_tag("span", &attributes, ""), "<span id=\"save\"></span>");
}

#[test]
fn test_void_elements_have_no_closing_tag() {
    let mut builder = MarkupBuilder::new();
    builder
        .open_with_class("div", "wrap")
        .open("br", &AttributeMap::new())
        .close("br")
        .text("a < b")
        .close("div");

    assert_eq!(builder.finish(), "<div class=\"wrap\"><br>a &lt; b</div>");
}

#[test]
fn test_escape_html() {
    assert_eq!(escape_html("<a href='x'>&</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&lt;/a&gt;");
}

#[test]
fn test_class_attribute() {
    let attributes = class_attribute("one two");
    assert_eq!(attributes.get("class"), Some(&AttrValue::from("one two")));
}

#[test]
fn test_table_rows_outside_a_table_are_a_parse_error() {
    let err = wrap_children("<tr><td>x</td></tr><li>y</li>", &WrapRule::new("item")).unwrap_err();

    assert!(matches!(err, WrapError::Parse { count, .. } if count > 0));
}

#[test]
fn test_stray_end_tag_is_a_parse_error() {
    let err = wrap_children("<div>a</div></section><div>b</div>", &WrapRule::new("item")).unwrap_err();
    assert!(matches!(err, WrapError::Parse { .. }));
}

#[test]
fn test_complete_table_is_wrapped_whole() {
    let html = wrap_children("<table><tbody><tr><td>x</td></tr></tbody></table>", &WrapRule::new("item")).unwrap();
    assert_eq!(
        html,
        "<div class=\"item\"><table><tbody><tr><td>x</td></tr></tbody></table></div>"
    );
}

#[test]
fn test_exclusion_sees_children_under_body() {
    let rule = WrapRule::new("item").with_exclusion("body > span");
    let html = wrap_children("<div>a</div><span>b</span>", &rule).unwrap();

    assert_eq!(html, "<div class=\"item\"><div>a</div></div><span>b</span>");
}

#[test]
fn test_exclusion_with_sibling_combinator() {
    let rule = WrapRule::new("item").with_exclusion("hr + p");
    let html = wrap_children("<p>a</p><hr><p>b</p>", &rule).unwrap();

    assert_eq!(
        html,
        "<div class=\"item\"><p>a</p></div><div class=\"item\"><hr></div><p>b</p>"
    );
}
