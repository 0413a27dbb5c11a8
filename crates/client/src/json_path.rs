//! Path-style access into JSON documents.
//!
//! Expressions are dot-separated object keys, each optionally followed by one
//! or more `[index]` subscripts: `data.headers[0].name`, `data[0].empNumber`,
//! `[2]`. The empty expression addresses the root.
//!
//! Malformed expressions (unbalanced brackets, non-numeric subscripts, empty
//! keys between dots) resolve to `None`; lookup never panics.

use serde_json::Value;

#[derive(Debug, PartialEq, Eq)]
enum Step<'a> {
    Key(&'a str),
    Index(usize),
}

fn parse(expr: &str) -> Option<Vec<Step<'_>>> {
    let mut steps = Vec::new();
    if expr.is_empty() {
        return Some(steps);
    }

    for (position, segment) in expr.split('.').enumerate() {
        let (key, mut rest) = match segment.find('[') {
            Some(open) => segment.split_at(open),
            None => (segment, ""),
        };

        if key.is_empty() {
            // A bare subscript is only meaningful at the start: `[0].id`.
            if rest.is_empty() || position > 0 {
                return None;
            }
        } else {
            if key.contains(']') {
                return None;
            }
            steps.push(Step::Key(key));
        }

        while !rest.is_empty() {
            let inner = rest.strip_prefix('[')?;
            let close = inner.find(']')?;
            let index: usize = inner[..close].trim().parse().ok()?;
            steps.push(Step::Index(index));
            rest = &inner[close + 1..];
        }
    }

    Some(steps)
}

/// Resolve `expr` against `root`.
///
/// Returns `None` when the expression is malformed or any step does not exist.
/// A step that exists but holds JSON `null` resolves to `Some(&Value::Null)`.
pub fn lookup<'a>(root: &'a Value, expr: &str) -> Option<&'a Value> {
    let steps = parse(expr.trim())?;
    steps.iter().try_fold(root, |node, step| match step {
        Step::Key(key) => node.as_object()?.get(*key),
        Step::Index(index) => node.as_array()?.get(*index),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report() -> Value {
        json!({
            "data": {
                "headers": [
                    {"name": "Leave Type", "prop": "leaveType", "pin": null},
                    {"name": "Entitlements", "prop": "entitlementDays"}
                ]
            },
            "meta": {"total": 2}
        })
    }

    #[test]
    fn test_nested_key_and_index() {
        let doc = report();
        assert_eq!(
            lookup(&doc, "data.headers[0].name"),
            Some(&json!("Leave Type"))
        );
        assert_eq!(
            lookup(&doc, "data.headers[1].prop"),
            Some(&json!("entitlementDays"))
        );
        assert_eq!(lookup(&doc, "meta.total"), Some(&json!(2)));
    }

    #[test]
    fn test_present_null_is_distinct_from_absent() {
        let doc = report();
        assert_eq!(lookup(&doc, "data.headers[0].pin"), Some(&Value::Null));
        assert_eq!(lookup(&doc, "data.headers[1].pin"), None);
    }

    #[test]
    fn test_out_of_range_and_wrong_type() {
        let doc = report();
        assert_eq!(lookup(&doc, "data.headers[5]"), None);
        assert_eq!(lookup(&doc, "data[0]"), None);
        assert_eq!(lookup(&doc, "meta.total.value"), None);
    }

    #[test]
    fn test_root_and_leading_subscript() {
        let doc = json!([{"id": 7}, {"id": 9}]);
        assert_eq!(lookup(&doc, ""), Some(&doc));
        assert_eq!(lookup(&doc, "[1].id"), Some(&json!(9)));
    }

    #[test]
    fn test_consecutive_subscripts() {
        let doc = json!({"grid": [[1, 2], [3, 4]]});
        assert_eq!(lookup(&doc, "grid[1][0]"), Some(&json!(3)));
    }

    #[test]
    fn test_malformed_expressions_are_none() {
        let doc = report();
        for expr in [
            "data..headers",
            "data.headers[",
            "data.headers[x]",
            "data.headers]0[",
            "data.[0]",
            "data.headers[0]name",
            ".data",
        ] {
            assert_eq!(lookup(&doc, expr), None, "expression {expr:?}");
        }
    }
}
