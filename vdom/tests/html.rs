use vdom::{to_html, Element, EventKind, Html};

#[test]
fn test_attributes_sorted_then_class_style_data() {
    let el = Element::button()
        .attr("type", "button")
        .flag("disabled")
        .attr("id", "picker")
        .class("btn")
        .style_prop("display", "none")
        .data("type", "option")
        .text("Go");

    assert_eq!(
        to_html(&el),
        "<button disabled id=\"picker\" type=\"button\" class=\"btn\" \
         style=\"display: none;\" data-type=\"option\">Go</button>"
    );
}

#[test]
fn test_void_elements_self_close() {
    let el = Element::svg().child(Element::polygon().attr("points", "0 1 2"));
    assert_eq!(to_html(&el), "<svg><polygon points=\"0 1 2\" /></svg>");
}

#[test]
fn test_handlers_and_refs_are_not_markup() {
    let el = Element::span().node_ref("label").on(EventKind::Click, |_| {});
    assert_eq!(to_html(&el), "<span></span>");
}

#[test]
fn test_nbsp_and_escaping() {
    let el = Element::span().text("\u{a0}");
    assert_eq!(to_html(&el), "<span>&nbsp;</span>");

    let el = Element::input().attr("value", "\"<x>\"");
    assert_eq!(to_html(&el), "<input value=\"&quot;&lt;x&gt;&quot;\" />");
}

#[test]
fn test_display_matches_to_html() {
    let el = Element::ul().child(Element::li().data("type", "optgroup").text("Fruit"));
    assert_eq!(format!("{}", Html(&el)), to_html(&el));
    assert_eq!(
        to_html(&el),
        "<ul><li data-type=\"optgroup\">Fruit</li></ul>"
    );
}
