use super::*;

fn fixture() -> MemoryDocument {
    let body = NodeSpec::new("body", Rect::new(0.0, 0.0, 800.0, 600.0)).with_child(
        NodeSpec::new("div", Rect::new(50.0, 40.0, 450.0, 340.0))
            .with_id("wrapper")
            .with_position(CssPosition::Relative)
            .with_border(2.0, 3.0)
            .with_child(
                NodeSpec::new("button", Rect::new(100.0, 100.0, 200.0, 150.0)).with_id("anchor"),
            )
            .with_child(
                NodeSpec::new("div", Rect::new(0.0, 0.0, 60.0, 20.0))
                    .with_id("menu")
                    .with_class("dropdown"),
            ),
    );
    MemoryDocument::from_spec(&body).unwrap()
}

#[test]
fn selectors_resolve_in_document_order() {
    let doc = fixture();
    let wrapper = doc.query_selector("#wrapper").unwrap();
    assert_eq!(doc.get_by_id("wrapper"), Some(wrapper));
    assert_eq!(doc.query_selector("div"), Some(wrapper));
    assert_eq!(doc.query_selector(".dropdown"), doc.get_by_id("menu"));
    assert_eq!(doc.query_selector("BUTTON"), doc.get_by_id("anchor"));
    assert_eq!(doc.query_selector("#missing"), None);
    assert_eq!(doc.query_selector("  "), None);
}

#[test]
fn tree_links_and_measurements_are_exposed() {
    let doc = fixture();
    let wrapper = doc.get_by_id("wrapper").unwrap();
    let anchor = doc.get_by_id("anchor").unwrap();
    assert_eq!(doc.parent(anchor), Some(wrapper));
    assert_eq!(doc.parent(wrapper), Some(doc.body_id()));
    assert_eq!(doc.parent(doc.body_id()), None);
    assert_eq!(doc.client_offset(wrapper), Vec2::new(2.0, 3.0));
    assert_eq!(doc.computed_position(wrapper), Some(CssPosition::Relative));
    assert_eq!(doc.bounding_rect(anchor), Some(Rect::new(100.0, 100.0, 200.0, 150.0)));
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut doc = fixture();
    let body = doc.body_id();
    let err = doc.append(body, &NodeSpec::default().with_id("menu")).unwrap_err();
    assert!(err.to_string().contains("duplicate element id"));
}

#[test]
fn failed_append_leaves_document_unchanged() {
    let mut doc = fixture();
    let body = doc.body_id();
    let subtree = NodeSpec::default()
        .with_id("parent")
        .with_child(NodeSpec::default().with_id("dup"))
        .with_child(NodeSpec::default().with_id("dup"));
    assert!(doc.append(body, &subtree).is_err());
    assert_eq!(doc.get_by_id("parent"), None);
    assert_eq!(doc.get_by_id("dup"), None);

    let bad_leaf = NodeSpec::default().with_id("parent").with_child(NodeSpec {
        rect: Some(DomRect::new(0.0, 0.0, 5.0, f64::NAN)),
        ..NodeSpec::default()
    });
    assert!(doc.append(body, &bad_leaf).is_err());
    assert_eq!(doc.get_by_id("parent"), None);

    let good = NodeSpec::default()
        .with_id("parent")
        .with_child(NodeSpec::default().with_id("dup"));
    let parent = doc.append(body, &good).unwrap();
    assert_eq!(doc.get_by_id("parent"), Some(parent));
    assert_eq!(doc.parent(doc.get_by_id("dup").unwrap()), Some(parent));
}

#[test]
fn set_rect_and_new_reject_inverted_or_non_finite_rects() {
    let mut doc = fixture();
    let menu = doc.get_by_id("menu").unwrap();
    let before = doc.bounding_rect(menu);
    assert!(doc.set_rect(menu, Some(Rect::new(60.0, 0.0, 0.0, 20.0))).is_err());
    assert!(doc.set_rect(menu, Some(Rect::new(f64::NAN, 0.0, 0.0, 20.0))).is_err());
    assert_eq!(doc.bounding_rect(menu), before);
    doc.set_rect(menu, Some(Rect::new(5.0, 5.0, 65.0, 25.0))).unwrap();
    assert_eq!(doc.bounding_rect(menu), Some(Rect::new(5.0, 5.0, 65.0, 25.0)));

    assert!(MemoryDocument::new(Rect::new(0.0, 600.0, 800.0, 0.0)).is_err());
    assert!(MemoryDocument::new(Rect::new(0.0, 0.0, 800.0, 600.0)).is_ok());
}

#[test]
fn invalid_rects_and_unknown_parents_are_rejected() {
    let mut doc = fixture();
    let bad = NodeSpec {
        rect: Some(DomRect::new(0.0, 0.0, -1.0, 5.0)),
        ..NodeSpec::default()
    };
    assert!(doc.append(doc.body_id(), &bad).is_err());
    assert!(doc.append(NodeId(99), &NodeSpec::default()).is_err());
    assert!(doc.set_rect(NodeId(99), None).is_err());
    assert!(MemoryDocument::from_spec(&NodeSpec::default()).is_err());
}

#[test]
fn apply_style_is_recorded_per_node() {
    let mut doc = fixture();
    let menu = doc.get_by_id("menu").unwrap();
    assert!(doc.style(menu).is_none());
    let style = StyleRecord::absolute(crate::foundation::core::Point::new(1.0, 2.0));
    doc.apply_style(menu, &style);
    assert_eq!(doc.style(menu), Some(&style));
}

#[test]
fn spec_deserializes_from_json() {
    let spec: NodeSpec = serde_json::from_str(
        r#"{
            "tag": "body",
            "rect": {"left": 0, "top": 0, "width": 300, "height": 200},
            "children": [
                {"tag": "div", "id": "root", "position": "relative", "border": [1, 1]}
            ]
        }"#,
    )
    .unwrap();
    let doc = MemoryDocument::from_spec(&spec).unwrap();
    let root = doc.get_by_id("root").unwrap();
    assert_eq!(doc.bounding_rect(root), None);
    assert_eq!(doc.computed_position(root), Some(CssPosition::Relative));
}
