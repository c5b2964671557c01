use serde_json::Value;
use thiserror::Error;

use crate::entity::{EntityKind, EntityRecord};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("missing API token")]
    MissingToken,
    #[error("invalid API token: {0}")]
    InvalidToken(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("management API returned non-success status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Source of child entities for one level of the hierarchy.
///
/// Implementations are blocking: each call completes or fails before the
/// traversal moves on.
pub trait EntityFetcher {
    fn fetch_children(
        &self,
        kind: EntityKind,
        parent_fqn: &str,
    ) -> Result<Vec<EntityRecord>, FetchError>;
}

impl<T: EntityFetcher + ?Sized> EntityFetcher for &T {
    fn fetch_children(
        &self,
        kind: EntityKind,
        parent_fqn: &str,
    ) -> Result<Vec<EntityRecord>, FetchError> {
        (**self).fetch_children(kind, parent_fqn)
    }
}

/// Extracts the entity list for `kind` from a decoded listing response.
///
/// A response without the list key is an empty listing.
pub fn parse_listing(kind: EntityKind, payload: Value) -> Result<Vec<EntityRecord>, FetchError> {
    let Value::Object(mut object) = payload else {
        return Err(FetchError::InvalidResponse(format!(
            "{} listing is not a JSON object",
            kind
        )));
    };
    let items = match object.remove(kind.list_key()) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(FetchError::InvalidResponse(format!(
                "{} listing field '{}' is not an array",
                kind,
                kind.list_key()
            )));
        }
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if item.is_object() {
                Ok(EntityRecord::new(item))
            } else {
                Err(FetchError::InvalidResponse(format!(
                    "{} listing entry {} is not a JSON object",
                    kind, index
                )))
            }
        })
        .collect()
}
