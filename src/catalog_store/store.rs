//! SQLite-backed catalog store implementation.
//!
//! One shared connection guards every read and write; each write is an
//! immediate single-row commit. The schema is created on first open and
//! structurally validated on every subsequent open.

use super::models::*;
use super::schema::CATALOG_VERSIONED_SCHEMAS;
use super::trait_def::CatalogStore;
use crate::sqlite_persistence::BASE_DB_VERSION;
use anyhow::{bail, Context, Result};
use rusqlite::{params, Connection, Row};
use serde_json::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub struct SqliteCatalogStore {
    conn: Arc<Mutex<Connection>>,
}

fn migrate_if_needed(conn: &mut Connection) -> Result<()> {
    let latest_version = CATALOG_VERSIONED_SCHEMAS.len() - 1;
    let latest_schema = &CATALOG_VERSIONED_SCHEMAS[latest_version];

    let table_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
            [],
            |r| r.get(0),
        )
        .unwrap_or(0);

    if table_count == 0 {
        info!("Creating catalog db schema at version {}", latest_version);
        latest_schema.create(conn)?;
        return Ok(());
    }

    let db_version: i64 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;
    if db_version < BASE_DB_VERSION as i64 {
        bail!("Database has tables but no recognized schema version");
    }
    let mut current_version = (db_version - BASE_DB_VERSION as i64) as usize;

    if current_version < latest_version {
        let tx = conn.transaction()?;
        for schema in CATALOG_VERSIONED_SCHEMAS.iter().skip(current_version + 1) {
            if let Some(migration_fn) = schema.migration {
                info!(
                    "Migrating catalog db from version {} to {}",
                    current_version, schema.version
                );
                migration_fn(&tx)?;
                current_version = schema.version;
            }
        }
        tx.pragma_update(None, "user_version", BASE_DB_VERSION + current_version)?;
        tx.commit()?;
    }

    latest_schema.validate(conn)?;
    Ok(())
}

fn map_item(row: &Row) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        name: row.get(1)?,
        img: row.get(2)?,
        description: row.get(3)?,
        item_type: ItemType::from_value(row.get::<_, Option<String>>(4)?.as_deref()),
    })
}

fn map_character(row: &Row) -> rusqlite::Result<Character> {
    Ok(Character {
        id: row.get(0)?,
        name: row.get(1)?,
        height: row.get(2)?,
        mass: row.get(3)?,
        hair_color: row.get(4)?,
        skin_color: row.get(5)?,
        eye_color: row.get(6)?,
        birth_year: row.get(7)?,
        gender: row.get(8)?,
        created: row.get(9)?,
        edited: row.get(10)?,
        homeworld: row.get(11)?,
    })
}

fn map_planet(row: &Row) -> rusqlite::Result<Planet> {
    Ok(Planet {
        id: row.get(0)?,
        name: row.get(1)?,
        diameter: row.get(2)?,
        rotation_period: row.get(3)?,
        orbital_period: row.get(4)?,
        gravity: row.get(5)?,
        population: row.get(6)?,
        climate: row.get(7)?,
        terrain: row.get(8)?,
        surface_water: row.get::<_, i64>(9)? != 0,
        created: row.get(10)?,
        edited: row.get(11)?,
    })
}

fn map_starship(row: &Row) -> rusqlite::Result<Starship> {
    Ok(Starship {
        id: row.get(0)?,
        name: row.get(1)?,
        model: row.get(2)?,
        starship_class: row.get(3)?,
        cost_in_credits: row.get(4)?,
        length: row.get(5)?,
        crew: row.get(6)?,
        passengers: row.get(7)?,
        max_atmosphere_speed: row.get(8)?,
        hyperdrive_rating: row.get(9)?,
        mglt: row.get(10)?,
        cargo_capacity: row.get(11)?,
        consumables: row.get(12)?,
        created: row.get(13)?,
        edited: row.get(14)?,
    })
}

fn map_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        password: row.get(2)?,
        email: row.get(3)?,
    })
}

fn map_favorite(row: &Row) -> rusqlite::Result<Favorite> {
    Ok(Favorite {
        item_id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        img: row.get(3)?,
        item_type: ItemType::from_value(row.get::<_, Option<String>>(4)?.as_deref()),
    })
}

const SELECT_CHARACTER: &str = "SELECT c.id, i.name, c.height, c.mass, c.hair_color, c.skin_color,
            c.eye_color, c.birth_year, c.gender, c.created, c.edited, c.homeworld
     FROM characters c JOIN items i ON i.id = c.id";

const SELECT_PLANET: &str = "SELECT p.id, i.name, p.diameter, p.rotation_period, p.orbital_period,
            p.gravity, p.population, p.climate, p.terrain, p.surface_water, p.created, p.edited
     FROM planets p JOIN items i ON i.id = p.id";

const SELECT_STARSHIP: &str = "SELECT s.id, i.name, s.model, s.starship_class, s.cost_in_credits,
            s.length, s.crew, s.passengers, s.max_atmosphere_speed, s.hyperdrive_rating,
            s.mglt, s.cargo_capacity, s.consumables, s.created, s.edited
     FROM starships s JOIN items i ON i.id = s.id";

const SELECT_FAVORITE: &str = "SELECT f.item_id, i.name, i.description, i.img, i.type
     FROM favorites f JOIN items i ON i.id = f.item_id";

impl SqliteCatalogStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let mut conn = Connection::open_with_flags(
            db_path.as_ref(),
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI
                | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .context("Failed to open catalog database")?;

        migrate_if_needed(&mut conn)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        // Per-connection pragma, create() only sets it for the creating
        // connection.
        conn.pragma_update(None, "foreign_keys", "ON")?;

        let item_count: i64 = conn
            .query_row("SELECT COUNT(*) FROM items", [], |r| r.get(0))
            .unwrap_or(0);
        let user_count: i64 = conn
            .query_row("SELECT COUNT(*) FROM users", [], |r| r.get(0))
            .unwrap_or(0);
        info!(
            "Opened holodex catalog: {} items, {} users",
            item_count, user_count
        );

        Ok(SqliteCatalogStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn list<T, F>(&self, sql: &str, map: F, serialize: fn(&T) -> Value) -> Result<Vec<Value>>
    where
        F: Fn(&Row) -> rusqlite::Result<T>,
    {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
            .query_map(params![], |row| map(row).map(|model| serialize(&model)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn by_id<T, F>(
        &self,
        sql: &str,
        id: i64,
        map: F,
        serialize: fn(&T) -> Value,
    ) -> Result<Option<Value>>
    where
        F: Fn(&Row) -> rusqlite::Result<T>,
    {
        let conn = self.conn.lock().unwrap();
        match conn.query_row(sql, params![id], |row| map(row).map(|model| serialize(&model))) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl CatalogStore for SqliteCatalogStore {
    fn get_item_list(&self) -> Result<Vec<Value>> {
        self.list(
            "SELECT id, name, img, description, type FROM items",
            map_item,
            Item::serialize,
        )
    }

    fn get_item_by_id(&self, id: i64) -> Result<Option<Value>> {
        self.by_id(
            "SELECT id, name, img, description, type FROM items WHERE id = ?1",
            id,
            map_item,
            Item::serialize,
        )
    }

    fn add_new_item(&self, item: NewItem) -> Result<Value> {
        let item_type = ItemType::from_value(item.item_type.as_deref());
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO items (name, img, description, type) VALUES (?1, ?2, ?3, ?4)",
            params![item.name, item.img, item.description, item_type.as_value()],
        )
        .context("Failed to insert item")?;
        let inserted = Item {
            id: conn.last_insert_rowid(),
            name: item.name,
            img: item.img,
            description: item.description,
            item_type,
        };
        Ok(inserted.serialize())
    }

    fn get_character_list(&self) -> Result<Vec<Value>> {
        self.list(SELECT_CHARACTER, map_character, Character::serialize)
    }

    fn get_character_by_id(&self, id: i64) -> Result<Option<Value>> {
        self.by_id(
            &format!("{} WHERE c.id = ?1", SELECT_CHARACTER),
            id,
            map_character,
            Character::serialize,
        )
    }

    fn get_planet_list(&self) -> Result<Vec<Value>> {
        self.list(SELECT_PLANET, map_planet, Planet::serialize)
    }

    fn get_planet_by_id(&self, id: i64) -> Result<Option<Value>> {
        self.by_id(
            &format!("{} WHERE p.id = ?1", SELECT_PLANET),
            id,
            map_planet,
            Planet::serialize,
        )
    }

    fn get_starship_list(&self) -> Result<Vec<Value>> {
        self.list(SELECT_STARSHIP, map_starship, Starship::serialize)
    }

    fn get_starship_by_id(&self, id: i64) -> Result<Option<Value>> {
        self.by_id(
            &format!("{} WHERE s.id = ?1", SELECT_STARSHIP),
            id,
            map_starship,
            Starship::serialize,
        )
    }

    fn get_user_list(&self) -> Result<Vec<Value>> {
        self.list(
            "SELECT id, username, password, email FROM users",
            map_user,
            User::serialize,
        )
    }

    fn get_user_by_id(&self, id: i64) -> Result<Option<Value>> {
        self.by_id(
            "SELECT id, username, password, email FROM users WHERE id = ?1",
            id,
            map_user,
            User::serialize,
        )
    }

    fn get_user_favorites(&self, user_id: i64) -> Result<Vec<Value>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!("{} WHERE f.user_id = ?1", SELECT_FAVORITE))?;
        let rows = stmt
            .query_map(params![user_id], |row| {
                map_favorite(row).map(|favorite| favorite.serialize())
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn add_user_favorite(&self, favorite: NewFavorite) -> Result<Value> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO favorites (user_id, item_id) VALUES (?1, ?2)",
            params![favorite.user_id, favorite.item_id],
        )
        .context("Failed to insert favorite")?;
        let favorite_id = conn.last_insert_rowid();
        let inserted = conn.query_row(
            &format!("{} WHERE f.id = ?1", SELECT_FAVORITE),
            params![favorite_id],
            |row| map_favorite(row).map(|favorite| favorite.serialize()),
        )?;
        Ok(inserted)
    }
}
