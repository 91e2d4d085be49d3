//! # Entities
//!
//! Validating value objects for use-case input and repository output.
//! Each one is built from a loosely-typed JSON payload and either holds
//! exactly its required string fields or fails with a `Validation` error.
//! No trimming or casing is applied; validation is presence + type only.

mod comment;
mod reply;
mod thread;

pub use comment::{CreateComment, CreatedComment, DeleteComment};
pub use reply::{CreateReply, CreatedReply, DeleteReply};
pub use thread::{CreateThread, CreatedThread};

use crate::error::{AppError, Result};
use serde_json::Value;

/// Absent, `null` and `""` all count as a missing property.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Pulls the required `fields` out of `payload` as strings, in order.
///
/// All fields are checked for presence before any is checked for type, so
/// a payload that is both incomplete and mistyped reports the missing
/// property.
pub(crate) fn required_strings<const N: usize>(
    entity: &'static str,
    payload: &Value,
    fields: [&str; N],
) -> Result<[String; N]> {
    let values = fields.map(|field| payload.get(field).filter(|v| !is_blank(v)));
    if values.iter().any(Option::is_none) {
        return Err(AppError::missing_property(entity));
    }

    let mut out: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, value) in out.iter_mut().zip(values) {
        match value {
            Some(Value::String(s)) => *slot = s.clone(),
            _ => return Err(AppError::invalid_data_type(entity)),
        }
    }
    Ok(out)
}

/// Reads a reference id used for an existence check ahead of validation.
/// Anything that is not a string becomes `""`, which no row matches.
pub(crate) fn reference_id<'a>(payload: &'a Value, field: &str) -> &'a str {
    payload.get(field).and_then(Value::as_str).unwrap_or_default()
}
