//! Tests for the query parser.

use super::*;

// ==================== Sigil Tests ====================

#[test]
fn test_classify_two_char_sigils_first() {
    assert_eq!(classify("~@old"), QueryToken::FolderExclude("old"));
    assert_eq!(classify("~#old"), QueryToken::TagExclude("old"));
    assert_eq!(classify("@work"), QueryToken::Folder("work"));
    assert_eq!(classify("#urgent"), QueryToken::Tag("urgent"));
}

#[test]
fn test_classify_tilde_alone_is_search() {
    assert_eq!(classify("~home"), QueryToken::Search("~home"));
    assert_eq!(classify("~"), QueryToken::Search("~"));
}

#[test]
fn test_classify_bare_sigil_has_empty_value() {
    assert_eq!(classify("@"), QueryToken::Folder(""));
    assert_eq!(classify("#"), QueryToken::Tag(""));
}

// ==================== Parameter Tests ====================

#[test]
fn test_param_split_once_on_equals() {
    assert_eq!(
        classify(">q=a=b"),
        QueryToken::Param {
            key: "q",
            value: Some("a=b"),
        }
    );
}

#[test]
fn test_param_without_equals_has_no_value() {
    let query = parse_query(">verbose");
    assert_eq!(query.params, vec![QueryParam::new("verbose", None::<String>)]);
}

#[test]
fn test_param_with_empty_value() {
    let query = parse_query(">key=");
    assert_eq!(query.params, vec![QueryParam::new("key", Some(""))]);
}

#[test]
fn test_params_keep_order_and_duplicates() {
    let query = parse_query(">a=1 >b=2 >a=3");
    let pairs: Vec<(&str, Option<&str>)> = query
        .params
        .iter()
        .map(|p| (p.key.as_str(), p.value.as_deref()))
        .collect();
    assert_eq!(pairs, vec![("a", Some("1")), ("b", Some("2")), ("a", Some("3"))]);
}

// ==================== Full Query Tests ====================

#[test]
fn test_parse_mixed_query() {
    let query = parse_query("hello @work #urgent ~#old >limit=10 world");

    assert_eq!(query.search, "hello world ");
    assert_eq!(query.search_text(), "hello world");
    assert_eq!(query.folder, vec!["work"]);
    assert!(query.folders_exclude.is_empty());
    assert_eq!(query.tags, vec!["urgent"]);
    assert_eq!(query.tags_exclude, vec!["old"]);
    assert_eq!(query.params, vec![QueryParam::new("limit", Some("10"))]);
}

#[test]
fn test_parse_preserves_order_within_category() {
    let query = parse_query("#b @y #a ~@z @x ~@w");
    assert_eq!(query.tags, vec!["b", "a"]);
    assert_eq!(query.folder, vec!["y", "x"]);
    assert_eq!(query.folders_exclude, vec!["z", "w"]);
}

#[test]
fn test_parse_folder_path_kept_whole() {
    let query = parse_query("@Work/Scripts/Bash");
    assert_eq!(query.folder, vec!["Work/Scripts/Bash"]);
}

// ==================== Edge Cases ====================

#[test]
fn test_parse_empty_string() {
    let query = parse_query("");
    assert!(query.is_empty());
    assert_eq!(query.search, "");
}

#[test]
fn test_parse_whitespace_only() {
    assert!(parse_query("   ").is_empty());
}

#[test]
fn test_parse_repeated_spaces_keep_empty_terms() {
    assert_eq!(parse_query("a  b").search, "a  b ");

    let query = parse_query("  foo   bar  ");
    assert_eq!(query.search, "foo   bar ");
    assert_eq!(query.search_text(), "foo   bar");
}

#[test]
fn test_parse_repeated_spaces_around_sigils() {
    let query = parse_query("#x  @y");
    assert_eq!(query.tags, vec!["x"]);
    assert_eq!(query.folder, vec!["y"]);
    assert_eq!(query.search, " ");
}

#[test]
fn test_parse_tabs_are_not_separators() {
    let query = parse_query("foo\t#bar");
    assert_eq!(query.search, "foo\t#bar ");
    assert!(query.tags.is_empty());
}

#[test]
fn test_query_result_serializes_camel_case() {
    let value = serde_json::to_value(parse_query("~@a >k")).unwrap();
    assert_eq!(value["foldersExclude"], serde_json::json!(["a"]));
    assert_eq!(value["params"], serde_json::json!([{"k": null}]));
    assert_eq!(value["search"], "");
}

#[test]
fn test_params_serialize_as_single_key_maps() {
    let value = serde_json::to_value(parse_query(">limit=10 >a=1 >a=2")).unwrap();
    assert_eq!(
        value["params"],
        serde_json::json!([{"limit": "10"}, {"a": "1"}, {"a": "2"}])
    );
}
