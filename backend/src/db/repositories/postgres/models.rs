use diesel::prelude::*;
use uuid::Uuid;

use super::schema::games;
use crate::api::{Game, GameId};

/// Row shape of the `games` table, used for reads, inserts and full updates.
#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = games)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GameRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub grade: i32,
    pub image: String,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        Game {
            id: GameId(row.id),
            name: row.name,
            description: row.description,
            grade: row.grade,
            image: row.image,
        }
    }
}

impl From<&Game> for GameRow {
    fn from(game: &Game) -> Self {
        GameRow {
            id: game.id.value(),
            name: game.name.clone(),
            description: game.description.clone(),
            grade: game.grade,
            image: game.image.clone(),
        }
    }
}
