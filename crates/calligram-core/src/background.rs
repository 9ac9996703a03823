//! Background configuration: which base shape the text is laid over and
//! how it is painted.

use serde::{Deserialize, Serialize};

/// The base shape drawn behind the text items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Dragees,
    Cup,
    Coin,
    Lotus,
}

impl ShapeKind {
    pub fn all() -> [ShapeKind; 4] {
        [Self::Dragees, Self::Cup, Self::Coin, Self::Lotus]
    }

    /// Parse a shape key as it appears in saved documents. Unknown keys
    /// fall back to the default shape rather than failing the load.
    pub fn from_key(key: &str) -> ShapeKind {
        match key {
            "cup" => Self::Cup,
            "coin" => Self::Coin,
            "lotus" => Self::Lotus,
            _ => Self::Dragees,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Dragees => "dragees",
            Self::Cup => "cup",
            Self::Coin => "coin",
            Self::Lotus => "lotus",
        }
    }
}

/// What the canvas shows behind the text layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Background {
    pub shape: ShapeKind,
    /// Fill color of the shape, any CSS color string.
    pub color: String,
    /// Filling flavor label. Carried through documents untouched; the
    /// editor itself does not interpret it.
    pub filling: String,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Dragees,
            color: "#8b4513".to_string(),
            filling: "none".to_string(),
        }
    }
}
