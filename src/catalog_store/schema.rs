//! SQLite schema definitions for the holodex catalog database.
//!
//! A generic `items` table holds every catalog entry; `characters`,
//! `planets` and `starships` are 1-to-(0 or 1) extension tables whose
//! primary key is also a foreign key into `items`. Users and their
//! favorites live in the same database.

use crate::sqlite_column;
use crate::sqlite_persistence::{
    Column, ForeignKey, ForeignKeyOnChange, SqlType, Table, VersionedSchema,
};

const ITEM_FK: ForeignKey = ForeignKey {
    foreign_table: "items",
    foreign_column: "id",
    on_delete: ForeignKeyOnChange::NoAction,
};

const USER_FK: ForeignKey = ForeignKey {
    foreign_table: "users",
    foreign_column: "id",
    on_delete: ForeignKeyOnChange::NoAction,
};

/// Root catalog entity. `type` is one of 'Character', 'Planet',
/// 'Starship' or NULL.
const ITEMS_TABLE: Table = Table {
    name: "items",
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("name", &SqlType::Text, non_null = true, is_unique = true),
        sqlite_column!("img", &SqlType::Text, non_null = true),
        sqlite_column!("description", &SqlType::Text, non_null = true),
        sqlite_column!("type", &SqlType::Text),
    ],
    indices: &[],
    unique_constraints: &[],
};

/// Character extension table, keyed by the parent item id.
const CHARACTERS_TABLE: Table = Table {
    name: "characters",
    columns: &[
        sqlite_column!(
            "id",
            &SqlType::Integer,
            is_primary_key = true,
            foreign_key = Some(&ITEM_FK)
        ),
        sqlite_column!("height", &SqlType::Integer, non_null = true),
        sqlite_column!("mass", &SqlType::Integer, non_null = true),
        sqlite_column!("hair_color", &SqlType::Text, non_null = true),
        sqlite_column!("skin_color", &SqlType::Text, non_null = true),
        sqlite_column!("eye_color", &SqlType::Text, non_null = true),
        sqlite_column!("birth_year", &SqlType::Text, non_null = true),
        sqlite_column!("gender", &SqlType::Text, non_null = true),
        sqlite_column!("created", &SqlType::Text, non_null = true),
        sqlite_column!("edited", &SqlType::Text, non_null = true),
        sqlite_column!("homeworld", &SqlType::Text, non_null = true),
    ],
    indices: &[],
    unique_constraints: &[],
};

/// Planet extension table, keyed by the parent item id.
const PLANETS_TABLE: Table = Table {
    name: "planets",
    columns: &[
        sqlite_column!(
            "id",
            &SqlType::Integer,
            is_primary_key = true,
            foreign_key = Some(&ITEM_FK)
        ),
        sqlite_column!("diameter", &SqlType::Text, non_null = true),
        sqlite_column!("rotation_period", &SqlType::Integer, non_null = true),
        sqlite_column!("orbital_period", &SqlType::Integer, non_null = true),
        sqlite_column!("gravity", &SqlType::Text, non_null = true),
        sqlite_column!("population", &SqlType::Integer, non_null = true),
        sqlite_column!("climate", &SqlType::Text, non_null = true),
        sqlite_column!("terrain", &SqlType::Text, non_null = true),
        sqlite_column!("surface_water", &SqlType::Integer, non_null = true), // boolean
        sqlite_column!("created", &SqlType::Text, non_null = true),
        sqlite_column!("edited", &SqlType::Text, non_null = true),
    ],
    indices: &[],
    unique_constraints: &[],
};

/// Starship extension table, keyed by the parent item id.
const STARSHIPS_TABLE: Table = Table {
    name: "starships",
    columns: &[
        sqlite_column!(
            "id",
            &SqlType::Integer,
            is_primary_key = true,
            foreign_key = Some(&ITEM_FK)
        ),
        sqlite_column!("model", &SqlType::Text, non_null = true),
        sqlite_column!("starship_class", &SqlType::Text, non_null = true),
        sqlite_column!("cost_in_credits", &SqlType::Integer, non_null = true),
        sqlite_column!("length", &SqlType::Integer, non_null = true),
        sqlite_column!("crew", &SqlType::Integer, non_null = true),
        sqlite_column!("passengers", &SqlType::Integer, non_null = true),
        sqlite_column!("max_atmosphere_speed", &SqlType::Integer, non_null = true),
        sqlite_column!("hyperdrive_rating", &SqlType::Text, non_null = true),
        sqlite_column!("mglt", &SqlType::Integer, non_null = true),
        sqlite_column!("cargo_capacity", &SqlType::Integer, non_null = true),
        sqlite_column!("consumables", &SqlType::Text, non_null = true),
        sqlite_column!("created", &SqlType::Text, non_null = true),
        sqlite_column!("edited", &SqlType::Text, non_null = true),
    ],
    indices: &[],
    unique_constraints: &[],
};

// Passwords are stored in plain text to match the observable behavior of
// the system this replaces. DO NOT treat this as acceptable for real
// deployments; see DESIGN.md.
const USERS_TABLE: Table = Table {
    name: "users",
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("username", &SqlType::Text, non_null = true),
        sqlite_column!("password", &SqlType::Text, non_null = true),
        sqlite_column!("email", &SqlType::Text, non_null = true, is_unique = true),
    ],
    indices: &[],
    unique_constraints: &[],
};

/// Many-to-many link between users and items.
const FAVORITES_TABLE: Table = Table {
    name: "favorites",
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!(
            "user_id",
            &SqlType::Integer,
            non_null = true,
            foreign_key = Some(&USER_FK)
        ),
        sqlite_column!(
            "item_id",
            &SqlType::Integer,
            non_null = true,
            foreign_key = Some(&ITEM_FK)
        ),
    ],
    indices: &[("idx_favorites_user", "user_id")],
    unique_constraints: &[],
};

pub const CATALOG_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 0,
    tables: &[
        ITEMS_TABLE,
        CHARACTERS_TABLE,
        PLANETS_TABLE,
        STARSHIPS_TABLE,
        USERS_TABLE,
        FAVORITES_TABLE,
    ],
    migration: None,
}];
