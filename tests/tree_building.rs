//! Tree reconstruction from whole dumps

use std::fs;
use tsdump::tsdump::building::{build_tree, TreeBuilder};
use tsdump::{convert, BuildError, ConvertOptions, Converter, DecodedLine, LinePolicy, Node, Span};

fn read_fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    fs::read_to_string(path).expect("Failed to read fixture")
}

fn kinds(nodes: &[Node]) -> Vec<&str> {
    nodes.iter().map(|n| n.kind.as_str()).collect()
}

#[test]
fn test_three_line_module() {
    let source = "module: module [0, 0] - [2, 0]\n  function: foo [0, 0] - [1, 3]\n    identifier: foo [0, 9] - [0, 12]\n";
    let tree = convert(source).unwrap();

    assert_eq!(tree.kind, "module");
    assert_eq!(tree.name, None);
    assert_eq!(tree.span, Some(Span::new(0, 0, 2, 0)));

    assert_eq!(tree.children.len(), 1);
    let function = &tree.children[0];
    assert_eq!(function.kind, "function");
    assert_eq!(function.name.as_deref(), Some("foo"));
    assert_eq!(function.span, Some(Span::new(0, 0, 1, 3)));

    assert_eq!(function.children.len(), 1);
    let identifier = &function.children[0];
    assert_eq!(identifier.kind, "identifier");
    assert_eq!(identifier.name.as_deref(), Some("foo"));
    assert_eq!(identifier.span, Some(Span::new(0, 9, 0, 12)));
    assert!(identifier.is_leaf());
}

#[test]
fn test_dedent_attaches_to_grandparent_level() {
    // depths 0, 1, 2, 1
    let source = "a: a [0, 0] - [9, 0]\n  b: b [0, 0] - [1, 0]\n    c: c [0, 0] - [0, 5]\n  d: d [2, 0] - [3, 0]\n";
    let tree = convert(source).unwrap();

    assert_eq!(kinds(&tree.children), vec!["b", "d"]);
    assert_eq!(kinds(&tree.children[0].children), vec!["c"]);
    assert!(tree.children[1].is_leaf());
}

#[test]
fn test_names_only_when_they_differ() {
    let source = "module: module [0, 0] - [1, 0]\n  call: print [0, 0] - [0, 5]\n";
    let tree = convert(source).unwrap();
    let value = serde_json::to_value(&tree).unwrap();

    assert!(value.get("name").is_none());
    assert_eq!(value["children"][0]["name"], "print");
}

#[test]
fn test_only_blank_lines() {
    assert_eq!(convert(&read_fixture("blank.treesitter")), Err(BuildError::EmptyTree));
    assert_eq!(convert(""), Err(BuildError::EmptyTree));
}

#[test]
fn test_only_malformed_lines() {
    assert_eq!(convert("nothing here\nor: here\n"), Err(BuildError::EmptyTree));
}

#[test]
fn test_fixture_structure() {
    let tree = convert(&read_fixture("meta.nix.treesitter")).unwrap();

    assert_eq!(tree.kind, "source_code");
    assert_eq!(kinds(&tree.children), vec!["function_expression", "comment"]);
    assert_eq!(tree.node_count(), 17);
    assert_eq!(tree.depth(), 7);

    let bindings: Vec<_> = tree.find_by_kind("binding").collect();
    assert_eq!(bindings.len(), 2);
    assert_eq!(
        kinds(&bindings[1].children),
        vec!["attrpath", "variable_expression", "ERROR"]
    );

    let error = &bindings[1].children[2];
    assert_eq!(error.name, None);
    assert_eq!(error.span, None);

    let names: Vec<_> = tree
        .find_by_kind("identifier")
        .filter_map(|n| n.name.as_deref())
        .collect();
    assert_eq!(names, vec!["pkgs", "description", "name", "pname"]);
}

#[test]
fn test_fixture_strict_policy() {
    let converter = Converter::new(ConvertOptions {
        line_policy: LinePolicy::Strict,
        ..ConvertOptions::default()
    });
    let err = converter.convert(&read_fixture("meta.nix.treesitter")).unwrap_err();
    assert_eq!(
        err,
        BuildError::MalformedLine {
            line_number: 11,
            content: "            MISSING".to_string()
        }
    );
}

#[test]
fn test_builder_is_incremental() {
    let mut builder = TreeBuilder::new();
    builder.push(DecodedLine::new(0, "module", "module"));
    builder.push(DecodedLine::new(1, "import", "os"));
    builder.push(DecodedLine::new(1, "import", "sys"));
    let tree = builder.finish().unwrap();

    let names: Vec<_> = tree.children.iter().map(|n| n.display_name()).collect();
    assert_eq!(names, vec!["os", "sys"]);
}

#[test]
fn test_build_tree_from_records() {
    let records = vec![
        DecodedLine::new(0, "a", "a"),
        DecodedLine::new(1, "b", "b"),
        DecodedLine::new(2, "c", "c"),
        DecodedLine::new(3, "d", "d"),
        DecodedLine::new(1, "e", "e"),
        DecodedLine::new(2, "f", "f"),
    ];
    let tree = build_tree(records).unwrap();
    assert_eq!(kinds(&tree.children), vec!["b", "e"]);
    assert_eq!(kinds(&tree.children[1].children), vec!["f"]);
}
