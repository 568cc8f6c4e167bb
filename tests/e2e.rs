use jsonslice as js;
use pretty_assertions::assert_eq;

fn extract(json: &str, path: &str) -> String {
    let out = js::extract(json.as_bytes(), path).unwrap();
    String::from_utf8(out.into_owned()).unwrap()
}

const STORE: &str = r#"{
  "store": {
    "book": [
      {"category": "reference", "author": "Nigel Rees", "price": 8.95},
      {"category": "fiction", "author": "Evelyn Waugh", "price": 12.99},
      {"category": "fiction", "author": "Herman Melville", "isbn": "0-553-21311-3", "price": 8.99}
    ],
    "bicycle": {"color": "red", "price": 19.95, "sold": false, "owner": null}
  },
  "expensive": 10
}"#;

#[test]
fn test_example_member_value() {
    assert_eq!(extract(STORE, "$.expensive"), "10");
    assert_eq!(extract(STORE, "$.store.bicycle.color"), r#""red""#);
    assert_eq!(extract(STORE, "$.store.bicycle.sold"), "false");
    assert_eq!(extract(STORE, "$.store.bicycle.owner"), "null");
}

#[test]
fn test_example_number_text_is_preserved() {
    let json = r#"{"a": 1.50, "b": -0e+10, "c": 12345678901234567890123}"#;
    assert_eq!(extract(json, "$.a"), "1.50");
    assert_eq!(extract(json, "$.b"), "-0e+10");
    assert_eq!(extract(json, "$.c"), "12345678901234567890123");
}

#[test]
fn test_example_index() {
    assert_eq!(
        extract(STORE, "$.store.book[1].author"),
        r#""Evelyn Waugh""#
    );
    assert_eq!(
        extract(STORE, "$.store.book[-1].isbn"),
        r#""0-553-21311-3""#
    );
    assert_eq!(extract(r#"{"arr":[10,20,30]}"#, "$.arr[-1]"), "30");
    assert_eq!(extract(r#"[10,20,30]"#, "$[0]"), "10");
}

#[test]
fn test_example_object_keeps_formatting() {
    assert_eq!(
        extract(STORE, "$.store.bicycle"),
        r#"{"color": "red", "price": 19.95, "sold": false, "owner": null}"#
    );
}

#[test]
fn test_example_slice() {
    let json = r#"{"arr":[1,2,3,4]}"#;
    assert_eq!(extract(json, "$.arr[1:3]"), "[2,3]");
    assert_eq!(extract(json, "$.arr[2:]"), "[3,4]");
    assert_eq!(extract(json, "$.arr[:-2]"), "[1,2]");
    assert_eq!(extract(json, "$.arr[-1:]"), "[4]");
    assert_eq!(extract(r#"{"arr":[10,20,30]}"#, "$.arr[2:3]"), "[30]");
}

#[test]
fn test_example_slice_of_objects() {
    assert_eq!(
        extract(STORE, "$.store.book[0:1]"),
        r#"[{"category": "reference", "author": "Nigel Rees", "price": 8.95}]"#
    );
}

#[test]
fn test_example_root_is_whole_document() {
    let json = " \n {\"a\": [1, 2]}\n, ";
    assert_eq!(extract(json, "$"), "{\"a\": [1, 2]}");
}

#[test]
fn test_example_compiled_path_reuse() {
    let path: js::JsonPath = "$.id".parse().unwrap();
    let docs = [r#"{"id": 1}"#, r#"{"x": true, "id": "two"}"#];
    let ids: Vec<_> = docs
        .iter()
        .map(|d| path.get(d.as_bytes()).unwrap().into_owned())
        .collect();
    assert_eq!(ids, vec![b"1".to_vec(), br#""two""#.to_vec()]);
}

#[test]
fn test_example_extractor_options() {
    let extractor = js::Extractor::new(js::Options::default().with_max_segments(2));
    assert_eq!(&*extractor.extract(br#"{"a":{"b":1}}"#, "$.a").unwrap(), br#"{"b":1}"#);
    assert!(extractor.extract(br#"{"a":{"b":1}}"#, "$.a.b").is_err());
}
