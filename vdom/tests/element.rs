use vdom::{find_all_by_ref, find_by_ref, find_element, AttrValue, ClassList, Content, Element};

// ============================================================================
// Builder
// ============================================================================

#[test]
fn test_child_appends_in_order() {
    let root = Element::ul()
        .child(Element::li().text("a"))
        .child(Element::li().text("b"))
        .children(vec![Element::li().text("c")]);

    let texts: Vec<String> = root.children_slice().iter().map(|c| c.text_content()).collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
}

#[test]
fn test_child_replaces_text_content() {
    let el = Element::span().text("old").child(Element::span().text("new"));
    assert!(matches!(el.content, Content::Children(ref c) if c.len() == 1));
    assert_eq!(el.text_content(), "new");
}

#[test]
fn test_flag_if_adds_and_removes() {
    let on = Element::button().flag_if("disabled", true);
    assert_eq!(on.get_attr("disabled"), Some(&AttrValue::Flag));

    let off = on.flag_if("disabled", false);
    assert!(!off.has_attr("disabled"));
}

#[test]
fn test_attr_opt_skips_none() {
    let el = Element::button()
        .attr_opt("id", Some("picker"))
        .attr_opt::<&str>("name", None);
    assert_eq!(el.attr_value("id"), Some("picker"));
    assert!(!el.has_attr("name"));
}

#[test]
fn test_class_merges_without_duplicates() {
    let el = Element::div()
        .class("relative w-full")
        .classes(ClassList::parse("w-full z-10"));
    assert_eq!(el.classes.to_string(), "relative w-full z-10");
    assert!(el.has_class("z-10"));
}

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::div();
    let b = Element::div();
    assert_ne!(a.id, b.id);
    assert!(a.id.starts_with("div-"));
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_find_by_ref_depth_first() {
    let root = Element::div().node_ref("wrapper").child(
        Element::div()
            .child(Element::span().node_ref("label").text("first"))
            .child(Element::span().node_ref("label").text("second")),
    );

    let found = find_by_ref(&root, "label").unwrap();
    assert_eq!(found.text_content(), "first");
    assert_eq!(find_all_by_ref(&root, "label").len(), 2);
    assert!(find_by_ref(&root, "missing").is_none());
}

#[test]
fn test_find_element_by_id() {
    let root = Element::div()
        .id("root")
        .child(Element::div().child(Element::span().id("deep").text("x")));

    assert_eq!(find_element(&root, "deep").map(|e| e.tag.as_str()), Some("span"));
    assert!(find_element(&root, "nope").is_none());
}

#[test]
fn test_class_list_deserializes_string_or_array() {
    let one: ClassList = serde_json::from_str("\"a b\"").unwrap();
    let many: ClassList = serde_json::from_str("[\"a\", \"b c\"]").unwrap();
    assert_eq!(one.to_string(), "a b");
    assert_eq!(many.to_string(), "a b c");
}
