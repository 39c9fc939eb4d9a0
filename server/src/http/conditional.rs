//! Conditional GET handling for proxied objects.

use crate::storage::ObjectMetadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Client copy is current; answer 304 without a body.
    NotModified,
    /// Send the full object.
    Deliver,
}

/// Compare the client's `If-None-Match` against the object's current `ETag`.
///
/// Matching is byte-for-byte: no weak-validator normalization, no list
/// splitting and no `*`. An object without an `ETag` is always delivered.
pub fn evaluate(client_validator: Option<&str>, metadata: &ObjectMetadata) -> Evaluation {
    match (client_validator, metadata.etag.as_deref()) {
        (Some(client), Some(etag)) if !client.is_empty() && client == etag => {
            Evaluation::NotModified
        }
        _ => Evaluation::Deliver,
    }
}
