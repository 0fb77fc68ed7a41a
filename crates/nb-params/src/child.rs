//! Child lookup in list-children and append responses.

use serde_json::Value;

use crate::error::ParamsError;

/// Find the first child of `block_type`, optionally with a matching title.
///
/// `response` is either the `results` array itself or a response object
/// carrying one. An object without `results` has no children.
pub fn find_child<'a>(
    response: &'a Value,
    block_type: &str,
    title: Option<&str>,
) -> Result<Option<&'a Value>, ParamsError> {
    let children: &[Value] = match response {
        Value::Array(children) => children,
        Value::Object(object) => object
            .get("results")
            .and_then(Value::as_array)
            .map_or(&[][..], Vec::as_slice),
        Value::Null => return Err(ParamsError::UnexpectedResponse("null")),
        Value::Bool(_) => return Err(ParamsError::UnexpectedResponse("bool")),
        Value::Number(_) => return Err(ParamsError::UnexpectedResponse("number")),
        Value::String(_) => return Err(ParamsError::UnexpectedResponse("string")),
    };

    Ok(children.iter().find(|child| {
        child.get("type").and_then(Value::as_str) == Some(block_type)
            && title.is_none_or(|title| {
                child
                    .get(block_type)
                    .and_then(|body| body.get("title"))
                    .and_then(Value::as_str)
                    == Some(title)
            })
    }))
}
