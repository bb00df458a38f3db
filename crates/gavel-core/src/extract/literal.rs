//! Lenient parser for flat object literals.
//!
//! Judge models emit dictionaries in whatever dialect they feel like: strict
//! JSON, Python-style literals with single quotes, bare (unquoted) keys, or
//! a mix. This parser accepts all of those for *flat* objects only; the
//! caller guarantees the input contains no nested braces.

use serde_json::{Map, Number, Value};

/// Parse a `{...}` substring into a key/value map, trying strict JSON first
/// and falling back to the literal dialect. Returns `None` for anything that
/// is not a non-empty flat object.
pub(crate) fn parse_flat_object(input: &str) -> Option<Map<String, Value>> {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(input) {
        if !map.is_empty() {
            return Some(map);
        }
        return None;
    }
    parse_literal(input)
}

fn parse_literal(input: &str) -> Option<Map<String, Value>> {
    let inner = input.trim().strip_prefix('{')?.strip_suffix('}')?;
    let chars: Vec<char> = inner.chars().collect();
    let mut pos = 0usize;
    let mut map = Map::new();

    skip_ws(&chars, &mut pos);
    while pos < chars.len() {
        let key = match parse_token(&chars, &mut pos, ':')? {
            Value::String(s) => s,
            other => other.to_string(),
        };
        skip_ws(&chars, &mut pos);
        if chars.get(pos) != Some(&':') {
            return None;
        }
        pos += 1;
        skip_ws(&chars, &mut pos);
        let value = parse_token(&chars, &mut pos, ',')?;
        map.insert(key, value);

        skip_ws(&chars, &mut pos);
        match chars.get(pos) {
            Some(&',') => {
                pos += 1;
                skip_ws(&chars, &mut pos);
            }
            None => break,
            Some(_) => return None,
        }
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// One key or value: a quoted string (either quote style, backslash escapes)
/// or a bare token running up to `stop` or end of input.
fn parse_token(chars: &[char], pos: &mut usize, stop: char) -> Option<Value> {
    match chars.get(*pos) {
        Some(&q) if q == '\'' || q == '"' => parse_quoted(chars, pos, q),
        Some(_) => {
            let start = *pos;
            while *pos < chars.len() && chars[*pos] != stop {
                *pos += 1;
            }
            let raw: String = chars[start..*pos].iter().collect();
            coerce_bare(raw.trim())
        }
        None => None,
    }
}

fn parse_quoted(chars: &[char], pos: &mut usize, quote: char) -> Option<Value> {
    *pos += 1;
    let mut out = String::new();
    while let Some(&c) = chars.get(*pos) {
        *pos += 1;
        if c == quote {
            return Some(Value::String(out));
        }
        if c == '\\' {
            let escaped = chars.get(*pos)?;
            *pos += 1;
            out.push(match escaped {
                'n' => '\n',
                't' => '\t',
                'r' => '\r',
                other => *other,
            });
        } else {
            out.push(c);
        }
    }
    // Unterminated string.
    None
}

/// Interpret an unquoted token: booleans, null/None, numbers, else a string.
fn coerce_bare(raw: &str) -> Option<Value> {
    if raw.is_empty() {
        return None;
    }
    match raw {
        "true" | "True" => return Some(Value::Bool(true)),
        "false" | "False" => return Some(Value::Bool(false)),
        "null" | "None" => return Some(Value::Null),
        _ => {}
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Some(Value::Number(n.into()));
    }
    if let Ok(f) = raw.parse::<f64>() {
        if let Some(n) = Number::from_f64(f) {
            return Some(Value::Number(n));
        }
    }
    Some(Value::String(raw.to_string()))
}

fn skip_ws(chars: &[char], pos: &mut usize) {
    while chars.get(*pos).is_some_and(|c| c.is_whitespace()) {
        *pos += 1;
    }
}
