use miniyaml::error::ErrorKind;
use miniyaml::{Mapping, Node, dump};

#[test]
fn test_simple_mapping() {
    let mut hash = Mapping::new();
    hash.insert(
        "Q".to_string(),
        Node::from("Where does Thursday come before Wednesday? In the dictionary. :P"),
    );

    let expected = "---\nQ: \"Where does Thursday come before Wednesday? In the dictionary. :P\"\n";
    assert_eq!(dump(&Node::Mapping(hash)).unwrap(), expected);
}

#[test]
fn test_nested_mapping() {
    let mut inner = Mapping::new();
    inner.insert(
        "read_ahead".to_string(),
        Node::from("All generalizations are false, including this one"),
    );
    let mut hash = Mapping::new();
    hash.insert("nice-one".to_string(), Node::Mapping(inner));

    let expected = "---\nnice-one:\n  read_ahead: \"All generalizations are false, including this one\"\n";
    assert_eq!(dump(&Node::Mapping(hash)).unwrap(), expected);
}

#[test]
fn test_sequence_inside_nested_mapping() {
    let mut inner = Mapping::new();
    inner.insert(
        "contains_array".to_string(),
        Node::from(vec![
            "Jack and Jill went up the hill",
            "To fetch a pail of water.",
            "Jack fell down and broke his crown,",
            "And Jill came tumbling after.",
        ]),
    );
    let mut hash = Mapping::new();
    hash.insert("nested_hash".to_string(), Node::Mapping(inner));

    let expected = concat!(
        "---\n",
        "nested_hash:\n",
        "  contains_array:\n",
        "  - \"Jack and Jill went up the hill\"\n",
        "  - \"To fetch a pail of water.\"\n",
        "  - \"Jack fell down and broke his crown,\"\n",
        "  - \"And Jill came tumbling after.\"\n",
    );
    assert_eq!(dump(&Node::Mapping(hash)).unwrap(), expected);
}

#[test]
fn test_empty_sequence() {
    let mut hash = Mapping::new();
    hash.insert("empty_array".to_string(), Node::Sequence(Vec::new()));

    assert_eq!(dump(&Node::Mapping(hash)).unwrap(), "---\nempty_array: []\n");
}

#[test]
fn test_empty_root_mapping() {
    assert_eq!(dump(&Node::Mapping(Mapping::new())).unwrap(), "---\n");
}

#[test]
fn test_empty_nested_mapping() {
    let mut hash = Mapping::new();
    hash.insert("build".to_string(), Node::Mapping(Mapping::new()));

    assert_eq!(dump(&Node::Mapping(hash)).unwrap(), "---\nbuild:\n");
}

#[test]
fn test_key_with_colons_stays_bare() {
    let mut hash = Mapping::new();
    hash.insert(
        "BUNDLE_MIRROR__HTTPS://RUBYGEMS__ORG/".to_string(),
        Node::from("http://example-mirror.rubygems.org"),
    );

    let expected =
        "---\nBUNDLE_MIRROR__HTTPS://RUBYGEMS__ORG/: \"http://example-mirror.rubygems.org\"\n";
    assert_eq!(dump(&Node::Mapping(hash)).unwrap(), expected);
}

#[test]
fn test_scalar_escaping() {
    let mut hash = Mapping::new();
    hash.insert("quote".to_string(), Node::from("say \"hello\""));
    hash.insert("path".to_string(), Node::from("C:\\Users\\test"));
    hash.insert("multiline".to_string(), Node::from("line1\nline2"));
    hash.insert("tabbed".to_string(), Node::from("a\tb"));

    let expected = concat!(
        "---\n",
        "quote: \"say \\\"hello\\\"\"\n",
        "path: \"C:\\\\Users\\\\test\"\n",
        "multiline: \"line1\\nline2\"\n",
        "tabbed: \"a\\tb\"\n",
    );
    assert_eq!(dump(&Node::Mapping(hash)).unwrap(), expected);
}

#[test]
fn test_deterministic_output() {
    let mut inner = Mapping::new();
    inner.insert("b".to_string(), Node::from("2"));
    inner.insert("a".to_string(), Node::from("1"));
    let mut hash = Mapping::new();
    hash.insert("zebra".to_string(), Node::Mapping(inner));
    hash.insert("apple".to_string(), Node::from(vec!["x", "y"]));
    let root = Node::Mapping(hash);

    let first = dump(&root).unwrap();
    let second = dump(&root).unwrap();
    assert_eq!(first, second);
    // insertion order is preserved, not sorted
    assert_eq!(
        first,
        "---\nzebra:\n  b: \"2\"\n  a: \"1\"\napple:\n- \"x\"\n- \"y\"\n"
    );
}

#[test]
fn test_non_mapping_root_is_rejected() {
    let err = dump(&Node::from("just a string")).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidInput));

    let err = dump(&Node::from(vec!["a", "b"])).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidInput));
}

#[test]
fn test_non_scalar_sequence_element_is_rejected() {
    let mut hash = Mapping::new();
    hash.insert(
        "nested".to_string(),
        Node::Sequence(vec![Node::Mapping(Mapping::new())]),
    );

    let err = dump(&Node::Mapping(hash)).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidInput));
}

#[test]
fn test_control_character_is_rejected() {
    let mut hash = Mapping::new();
    hash.insert("beep".to_string(), Node::from("\u{7}"));

    let err = dump(&Node::Mapping(hash)).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Encoding));
}
