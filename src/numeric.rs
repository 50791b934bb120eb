use serde_json::Value;

/// Reads a JSON value as a finite number.
///
/// Numbers and numeric strings (surrounding whitespace allowed) are
/// accepted. Everything else, including empty strings, `"NaN"` and
/// infinities, yields `None`.
pub fn parse_finite(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            text.parse::<f64>().ok()?
        }
        _ => return None,
    };
    number.is_finite().then_some(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_finite(Some(&json!(42))), Some(42.0));
        assert_eq!(parse_finite(Some(&json!(-1.5))), Some(-1.5));
        assert_eq!(parse_finite(Some(&json!("3600000"))), Some(3_600_000.0));
        assert_eq!(parse_finite(Some(&json!(" 2.5 "))), Some(2.5));
        assert_eq!(parse_finite(Some(&json!("1e3"))), Some(1000.0));
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(parse_finite(None), None);
        assert_eq!(parse_finite(Some(&Value::Null)), None);
        assert_eq!(parse_finite(Some(&json!(""))), None);
        assert_eq!(parse_finite(Some(&json!("   "))), None);
        assert_eq!(parse_finite(Some(&json!("abc"))), None);
        assert_eq!(parse_finite(Some(&json!("NaN"))), None);
        assert_eq!(parse_finite(Some(&json!("inf"))), None);
        assert_eq!(parse_finite(Some(&json!(true))), None);
        assert_eq!(parse_finite(Some(&json!([1]))), None);
        assert_eq!(parse_finite(Some(&json!({"value": 1}))), None);
    }
}
