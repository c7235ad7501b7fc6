//! Integration tests for the LayoutBuilder API
//!
//! These tests verify that the public API works end to end, from diagram
//! JSON to positions, anchors and bounds.

use lumo::{
    LayoutBuilder, LumoError,
    config::AppConfig,
    geometry::{Point, Size},
    graph::{Edge, GraphError, LayoutEngine, Node},
    layout::DEFAULT_BOUNDS,
};

const AUTH_FLOW: &str = r#"{
    "title": "OAuth authorization code flow",
    "nodes": [
        { "id": "user", "label": "User", "type": "actor" },
        { "id": "client", "label": "Client App", "type": "process" },
        { "id": "auth", "label": "Authorization Server", "type": "process" },
        { "id": "token", "label": "Access Token", "type": "data" },
        { "id": "api", "label": "Resource API", "type": "process" }
    ],
    "edges": [
        { "from": "user", "to": "client", "label": "signs in" },
        { "from": "client", "to": "auth", "label": "redirect" },
        { "from": "auth", "to": "token", "animated": true },
        { "from": "token", "to": "api" },
        { "from": "client", "to": "api" }
    ]
}"#;

#[test]
fn test_builder_api_exists() {
    // Just verify the API compiles and can be constructed
    let _builder = LayoutBuilder::default();
}

#[test]
fn test_parse_simple_diagram() {
    let builder = LayoutBuilder::default();
    let result = builder.parse(AUTH_FLOW);
    assert!(
        result.is_ok(),
        "Should parse valid diagram: {:?}",
        result.err()
    );

    let diagram = result.unwrap();
    assert_eq!(diagram.title(), Some("OAuth authorization code flow"));
    assert_eq!(diagram.nodes().len(), 5);
    assert_eq!(diagram.edges().len(), 5);
    assert!(diagram.layout().is_none());
}

#[test]
fn test_layout_auth_flow() {
    let builder = LayoutBuilder::default();
    let diagram = builder.parse(AUTH_FLOW).expect("Failed to parse diagram");
    let layout = builder.layout(&diagram);

    assert_eq!(layout.engine(), LayoutEngine::Hierarchical);
    assert!(!layout.is_fallback());

    // client→api is a shortcut; api still sits below token.
    let levels = layout.levels().expect("hierarchical layout has levels");
    assert_eq!(levels["user"], 0);
    assert_eq!(levels["client"], 1);
    assert_eq!(levels["auth"], 2);
    assert_eq!(levels["token"], 3);
    assert_eq!(levels["api"], 4);

    for edge in diagram.edges() {
        assert!(layout.edge_anchors(edge).is_some(), "{edge:?} has no anchors");
    }
}

#[test]
fn test_cyclic_diagram_falls_back_to_radial() {
    let source = r#"{
        "nodes": [
            { "id": "plan", "label": "Plan" },
            { "id": "build", "label": "Build" },
            { "id": "review", "label": "Review" }
        ],
        "edges": [
            { "from": "plan", "to": "build" },
            { "from": "build", "to": "review" },
            { "from": "review", "to": "plan" }
        ]
    }"#;

    let builder = LayoutBuilder::default();
    let diagram = builder.parse(source).expect("Failed to parse diagram");
    let layout = builder.layout(&diagram);

    assert_eq!(layout.engine(), LayoutEngine::Radial);
    assert!(layout.is_fallback());
    assert_eq!(layout.positions().len(), 3);
    assert!(layout.levels().is_none());
}

#[test]
fn test_diagram_hint_wins_over_config() {
    let source = r#"{
        "nodes": [{ "id": "a", "label": "A" }, { "id": "b", "label": "B" }],
        "edges": [{ "from": "a", "to": "b" }],
        "layout": "radial"
    }"#;

    let builder = LayoutBuilder::default();
    let diagram = builder.parse(source).expect("Failed to parse diagram");
    let layout = builder.layout(&diagram);

    assert_eq!(layout.engine(), LayoutEngine::Radial);
    assert!(!layout.is_fallback());
}

#[test]
fn test_builder_with_config() {
    let source = r#"{
        "nodes": [{ "id": "a", "label": "A" }, { "id": "b", "label": "B" }],
        "edges": [{ "from": "a", "to": "b" }]
    }"#;
    let config: AppConfig = serde_json::from_str(
        r#"{ "layout": { "node_width": 100, "node_height": 40, "vertical_gap": 20 } }"#,
    )
    .expect("Failed to parse config");

    let builder = LayoutBuilder::new(config);
    let diagram = builder.parse(source).expect("Failed to parse diagram");
    let layout = builder.layout(&diagram);

    assert_eq!(layout.node_size(), Size::new(100.0, 40.0));
    assert_eq!(layout.position("a"), Some(Point::new(0.0, 0.0)));
    assert_eq!(layout.position("b"), Some(Point::new(0.0, 60.0)));
}

#[test]
fn test_config_default_engine() {
    let config: AppConfig = serde_json::from_str(r#"{ "layout": { "engine": "radial" } }"#)
        .expect("Failed to parse config");
    let builder = LayoutBuilder::new(config);

    let layout = builder.layout_with(&[Node::new("a", "A")], &[], None);
    assert_eq!(layout.engine(), LayoutEngine::Radial);

    let layout = builder.layout_with(&[Node::new("a", "A")], &[], Some(LayoutEngine::Hierarchical));
    assert_eq!(layout.engine(), LayoutEngine::Hierarchical);
}

#[test]
fn test_parse_invalid_json_returns_error() {
    let builder = LayoutBuilder::default();
    let result = builder.parse("{ \"nodes\": [ this is not json ] }");

    let err = result.expect_err("Should return error for invalid JSON");
    assert!(matches!(err, LumoError::Parse { .. }), "{err:?}");
    assert!(err.parse_offset().is_some());
}

#[test]
fn test_parse_unknown_node_type_returns_error() {
    let builder = LayoutBuilder::default();
    let result = builder.parse(r#"{ "nodes": [{ "id": "a", "label": "A", "type": "cloud" }] }"#);
    assert!(matches!(result, Err(LumoError::Parse { .. })));
}

#[test]
fn test_parse_duplicate_ids_returns_error() {
    let source = r#"{
        "nodes": [{ "id": "a", "label": "A" }, { "id": "a", "label": "Again" }]
    }"#;

    let builder = LayoutBuilder::default();
    let err = builder.parse(source).expect_err("Duplicate ids should fail");
    assert!(matches!(
        err,
        LumoError::Graph(GraphError::DuplicateNodeId(ref id)) if id == "a"
    ));
}

#[test]
fn test_dangling_edges_are_accepted_but_not_anchored() {
    let source = r#"{
        "nodes": [{ "id": "a", "label": "A" }],
        "edges": [{ "from": "a", "to": "ghost" }]
    }"#;

    let builder = LayoutBuilder::default();
    let diagram = builder.parse(source).expect("Dangling edges should parse");
    let layout = builder.layout(&diagram);

    assert_eq!(layout.positions().len(), 1);
    assert!(layout.edge_anchors(&diagram.edges()[0]).is_none());
}

#[test]
fn test_empty_diagram() {
    let builder = LayoutBuilder::default();
    let diagram = builder.parse("{}").expect("Empty object is a valid diagram");
    let layout = builder.layout(&diagram);

    assert!(layout.positions().is_empty());
    assert_eq!(layout.bounds(), DEFAULT_BOUNDS);
}

#[test]
fn test_free_functions_match_builder() {
    let nodes = [Node::new("a", "A"), Node::new("b", "B"), Node::new("c", "C")];
    let edges = [Edge::new("a", "b"), Edge::new("a", "c")];

    let positions = lumo::hierarchical_layout(&nodes, &edges).expect("acyclic");
    let layout = LayoutBuilder::default().layout_with(&nodes, &edges, None);
    assert_eq!(&positions, layout.positions());

    let bounds = lumo::svg_bounds(&positions);
    assert_eq!(bounds, layout.bounds());

    let anchor = lumo::rect_edge(positions["a"], positions["b"]);
    let anchors = layout.edge_anchors(&edges[0]).expect("both endpoints placed");
    assert_eq!(anchor, anchors.source());
}

#[test]
fn test_hierarchical_layout_reports_cycle() {
    let nodes = [Node::new("a", "A"), Node::new("b", "B")];
    let edges = [Edge::new("a", "b"), Edge::new("b", "a")];

    let cycle = lumo::hierarchical_layout(&nodes, &edges).expect_err("cyclic");
    assert_eq!(cycle.total(), 2);
    assert_eq!(
        lumo::compute_layout(&nodes, &edges, None).positions(),
        &lumo::radial_layout(&nodes)
    );
}

#[test]
fn test_builder_reusability() {
    let builder = LayoutBuilder::default();

    let first = builder.parse(AUTH_FLOW).expect("Failed to parse first diagram");
    let second = builder
        .parse(r#"{ "nodes": [{ "id": "solo", "label": "Solo" }] }"#)
        .expect("Failed to parse second diagram");

    let first_layout = builder.layout(&first);
    let second_layout = builder.layout(&second);
    assert_eq!(first_layout.positions().len(), 5);
    assert_eq!(second_layout.positions().len(), 1);

    // Same input, same output.
    assert_eq!(builder.layout(&first), first_layout);
}
