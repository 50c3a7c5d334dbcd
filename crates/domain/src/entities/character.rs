//! Character entity - A playable fighter on the roster
//!
//! Characters are authored outside this service. The engine only ever loads
//! them, rewrites their descriptive fields and swaps their equipped pieces.

use serde::{Deserialize, Serialize};

use crate::entities::Piece;
use crate::error::DomainError;
use crate::ids::CharacterId;
use crate::value_objects::Power;

/// A playable fighter.
///
/// # Simple Data Struct
///
/// All fields are public: there is no invalid combination of values. The one
/// invariant (the id never changes after creation) is upheld by the use cases,
/// which only ever mutate a loaded record in place.
///
/// `pieces` distinguishes "never assigned" (`None`) from "explicitly cleared"
/// (`Some(vec![])`). Both states survive a save/load round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    /// Ordered ability list; never absent, possibly empty.
    #[serde(default)]
    pub powers: Vec<Power>,
    #[serde(default)]
    pub pieces: Option<Vec<Piece>>,
    pub image_url: String,
    /// Position in the roster screen.
    pub display_order: i32,
    /// Artwork used in-match, as opposed to the roster portrait.
    pub game_image_url: String,
}

impl Character {
    pub fn new(id: CharacterId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            difficulty: Difficulty::default(),
            powers: Vec::new(),
            pieces: None,
            image_url: String::new(),
            display_order: 0,
            game_image_url: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_powers(mut self, powers: Vec<Power>) -> Self {
        self.powers = powers;
        self
    }

    pub fn with_pieces(mut self, pieces: Option<Vec<Piece>>) -> Self {
        self.pieces = pieces;
        self
    }

    pub fn with_images(
        mut self,
        image_url: impl Into<String>,
        game_image_url: impl Into<String>,
    ) -> Self {
        self.image_url = image_url.into();
        self.game_image_url = game_image_url.into();
        self
    }

    pub fn with_display_order(mut self, display_order: i32) -> Self {
        self.display_order = display_order;
        self
    }

    /// Number of equipped pieces; unset counts as zero.
    pub fn piece_count(&self) -> usize {
        self.pieces.as_ref().map_or(0, Vec::len)
    }
}

/// How demanding a fighter is to play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = DomainError;

    /// Accepts the English labels plus the Spanish ones used by the content
    /// team ("Fácil", "Media", "Difícil", "Alta"...), ignoring case and accents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| match c {
                'á' => 'a',
                'é' => 'e',
                'í' => 'i',
                'ó' => 'o',
                'ú' => 'u',
                other => other,
            })
            .collect();

        match folded.as_str() {
            "easy" | "facil" | "baja" => Ok(Self::Easy),
            "medium" | "media" | "normal" => Ok(Self::Medium),
            "hard" | "dificil" | "alta" => Ok(Self::Hard),
            _ => Err(DomainError::parse(format!("Unknown difficulty: {s}"))),
        }
    }
}
