use serde_json::Value;

use crate::fruit::NewFruit;

use super::ParseError;

/// Parses an import document into the fruits it describes, in document order.
///
/// # Errors
///
/// - [`ParseError::InvalidJson`] if `contents` is not JSON at all.
/// - [`ParseError::NotAnArray`] if the top-level value is not an array.
/// - [`ParseError::InvalidFruit`] for the first element that is not an object
///   or whose `name` is missing or null.
///
/// The only check on `name` is that it is there. Numbers, booleans and other
/// non-string values are stored as their JSON text, so `42` becomes `"42"`.
///
/// # Examples
///
/// ```
/// use fruitbasket_core::import::parse_fruits;
///
/// let fruits = parse_fruits(r#"[{"name":"Apple"},{"name":"Pear"}]"#).unwrap();
/// assert_eq!(fruits.len(), 2);
/// assert_eq!(fruits[1].name, "Pear");
/// ```
pub fn parse_fruits(contents: &str) -> Result<Vec<NewFruit>, ParseError> {
    let document: Value =
        serde_json::from_str(contents).map_err(|e| ParseError::InvalidJson(e.to_string()))?;

    let items = match document {
        Value::Array(items) => items,
        other => return Err(ParseError::NotAnArray(describe(&other))),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            to_new_fruit(item).map_err(|reason| ParseError::InvalidFruit { index, reason })
        })
        .collect()
}

fn to_new_fruit(item: Value) -> Result<NewFruit, String> {
    let mut fields = match item {
        Value::Object(fields) => fields,
        other => return Err(format!("expected an object, found {}", describe(&other))),
    };

    match fields.remove("name") {
        None => Err("missing field `name`".to_string()),
        Some(Value::Null) => Err("field `name` is null".to_string()),
        Some(Value::String(name)) => Ok(NewFruit::new(name)),
        Some(other) => Ok(NewFruit::new(other.to_string())),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_document() {
        let fruits = parse_fruits(r#"[{"name":"Apple"},{"name":"Pear"}]"#).unwrap();
        assert_eq!(fruits, vec![NewFruit::new("Apple"), NewFruit::new("Pear")]);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_fruits("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_keeps_duplicates_and_blank_names() {
        let fruits = parse_fruits(r#"[{"name":"Kiwi"},{"name":"Kiwi"},{"name":""}]"#).unwrap();
        assert_eq!(
            fruits,
            vec![NewFruit::new("Kiwi"), NewFruit::new("Kiwi"), NewFruit::new("")]
        );
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_fruits(r#"[{"name":"Apple"},"#);
        assert!(matches!(result, Err(ParseError::InvalidJson(_))));
    }

    #[test]
    fn test_parse_empty_file_is_invalid_json() {
        assert!(matches!(parse_fruits(""), Err(ParseError::InvalidJson(_))));
    }

    #[test]
    fn test_parse_object_is_not_an_array() {
        let result = parse_fruits(r#"{"name":"Apple"}"#);
        assert_eq!(result, Err(ParseError::NotAnArray("an object")));
    }

    #[test]
    fn test_parse_missing_name_reports_index() {
        let result = parse_fruits(r#"[{"name":"Apple"},{"colour":"green"}]"#);
        match result {
            Err(ParseError::InvalidFruit { index, reason }) => {
                assert_eq!(index, 1);
                assert!(reason.contains("name"));
            }
            other => panic!("Expected InvalidFruit, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_stringifies_non_string_names() {
        let fruits =
            parse_fruits(r#"[{"name":"Apple"},{"name":42},{"name":true},{"name":1.5}]"#).unwrap();
        assert_eq!(
            fruits,
            vec![
                NewFruit::new("Apple"),
                NewFruit::new("42"),
                NewFruit::new("true"),
                NewFruit::new("1.5"),
            ]
        );
    }

    #[test]
    fn test_parse_null_name_is_invalid() {
        let result = parse_fruits(r#"[{"name":"Apple"},{"name":null}]"#);
        assert_eq!(
            result,
            Err(ParseError::InvalidFruit {
                index: 1,
                reason: "field `name` is null".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_non_object_element() {
        let result = parse_fruits(r#"["Apple"]"#);
        assert!(matches!(
            result,
            Err(ParseError::InvalidFruit { index: 0, .. })
        ));
    }
}
