use jsonslice as js;
use pretty_assertions::assert_eq;

fn nested_test_json() -> &'static str {
    r#"{
        "departments": [
            {
                "team": [
                    {
                        "name": "Alice Johnson",
                        "info": {
                            "position": "Software Engineer",
                            "age": 29,
                            "email": "alice.johnson@example.com"
                        }
                    },
                    {
                        "name": "Bob Smith",
                        "info": {
                            "position": "UI/UX Designer",
                            "age": 34,
                            "email": "bob.smith@example.com"
                        }
                    }
                ]
            },
            {
                "team": [
                    {
                        "name": "Carol Lee",
                        "info": {
                            "position": "Project Manager",
                            "age": 41,
                            "email": "carol.lee@example.com"
                        }
                    },
                    {
                        "name": "David Kim",
                        "info": {
                            "position": "QA Engineer",
                            "age": 27,
                            "email": "david.kim@example.com"
                        }
                    }
                ]
            }
        ]
    }"#
}

fn extract(json: &str, path: &str) -> String {
    let out = js::extract(json.as_bytes(), path).unwrap();
    String::from_utf8(out.into_owned()).unwrap()
}

#[test]
fn test_nested_specific_name() {
    assert_eq!(
        extract(nested_test_json(), "$.departments[0].team[0].name"),
        r#""Alice Johnson""#
    );
    assert_eq!(
        extract(nested_test_json(), "$.departments[-1].team[-1].info.age"),
        "27"
    );
}

#[test]
fn test_nested_siblings_are_skipped_whole() {
    assert_eq!(
        extract(nested_test_json(), "$.departments[1].team[0].info.email"),
        r#""carol.lee@example.com""#
    );
    assert_eq!(extract(nested_test_json(), "$.departments.length()"), "2");
}

#[test]
fn test_nested_brackets_inside_strings() {
    let json = r#"{"a": {"s": "}]}}", "t": ["[", "{\"", "\\"]}, "b": [{"x": "]"}, 2]}"#;
    assert_eq!(extract(json, "$.b[1]"), "2");
    assert_eq!(extract(json, "$.a.t[2]"), r#""\\""#);
    assert_eq!(extract(json, "$.a.t[1]"), r#""{\"""#);
    assert_eq!(extract(json, "$.b[0].x"), r#""]""#);
}

#[test]
fn test_nested_escaped_quote_in_key() {
    let json = r#"{"a\"b": {"c": 1}, "a": 2}"#;
    assert_eq!(extract(json, "$.a"), "2");
    assert_eq!(extract(json, r#"$.a\"b.c"#), "1");
}

#[test]
fn test_nested_deep_arrays() {
    let depth = 200;
    let json = format!(
        "{{\"deep\": {}7{}, \"after\": true}}",
        "[".repeat(depth),
        "]".repeat(depth)
    );
    assert_eq!(extract(&json, "$.after"), "true");
    assert_eq!(extract(&json, "$.deep.size()"), (2 * depth + 1).to_string());
}
