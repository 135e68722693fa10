//! Public API surface for the catalog backend.
//!
//! This file consolidates the domain entity and the DTO types exchanged with
//! HTTP clients. All types derive Serialize/Deserialize for JSON serialization.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Game identifier (UUID v4, assigned by the create operation).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GameId(pub Uuid);

impl GameId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        GameId(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for GameId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(GameId)
    }
}

impl From<Uuid> for GameId {
    fn from(value: Uuid) -> Self {
        GameId(value)
    }
}

/// A stored game record.
///
/// `id` never changes after creation; every other field is overwritten as a
/// whole by an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    pub description: String,
    pub grade: i32,
    pub image: String,
}

impl Game {
    /// Build a new game from create input, assigning a fresh identifier.
    pub fn from_create(input: CreateGameDto) -> Self {
        Self {
            id: GameId::generate(),
            name: input.name,
            description: input.description,
            grade: input.grade,
            image: input.image,
        }
    }

    /// Replace every descriptive field with the update input.
    pub fn apply_update(&mut self, input: UpdateGameDto) {
        self.name = input.name;
        self.description = input.description;
        self.grade = input.grade;
        self.image = input.image;
    }

    /// Project into the read model.
    pub fn as_dto(&self) -> GameDto {
        GameDto::from(self)
    }
}

/// Case-insensitive substring test used by both name filters.
pub fn name_matches(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(&needle.to_lowercase())
}

/// Read model returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDto {
    pub id: GameId,
    pub name: String,
    pub description: String,
    pub grade: i32,
    pub image: String,
}

impl From<Game> for GameDto {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            name: game.name,
            description: game.description,
            grade: game.grade,
            image: game.image,
        }
    }
}

impl From<&Game> for GameDto {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id,
            name: game.name.clone(),
            description: game.description.clone(),
            grade: game.grade,
            image: game.image.clone(),
        }
    }
}

/// Request body for creating a game. The identifier is always server-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGameDto {
    pub name: String,
    pub description: String,
    pub grade: i32,
    pub image: String,
}

/// Request body for replacing a game's descriptive fields.
///
/// The target is addressed by the path parameter, never by the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGameDto {
    pub name: String,
    pub description: String,
    pub grade: i32,
    pub image: String,
}

/// Borrowed view over the descriptive fields of either input shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameFields<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub grade: i32,
    pub image: &'a str,
}

impl CreateGameDto {
    pub fn fields(&self) -> GameFields<'_> {
        GameFields {
            name: &self.name,
            description: &self.description,
            grade: self.grade,
            image: &self.image,
        }
    }
}

impl UpdateGameDto {
    pub fn fields(&self) -> GameFields<'_> {
        GameFields {
            name: &self.name,
            description: &self.description,
            grade: self.grade,
            image: &self.image,
        }
    }
}
