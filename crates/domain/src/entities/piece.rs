//! Piece entity - An equippable component owned by the piece catalogue.

use serde::{Deserialize, Serialize};

use crate::ids::PieceId;

/// An equippable component.
///
/// Characters hold pieces by value once materialized, but the piece catalogue
/// remains the owner; stats and visuals live in `attributes`, which the engine
/// never inspects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    #[serde(default)]
    pub name: String,
    /// Opaque stat/visual payload (JSON - acceptable for catalogue data)
    #[serde(default)]
    pub attributes: serde_json::Value,
}

impl Piece {
    pub fn new(id: PieceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            attributes: serde_json::Value::Null,
        }
    }

    pub fn with_attributes(mut self, attributes: serde_json::Value) -> Self {
        self.attributes = attributes;
        self
    }
}
