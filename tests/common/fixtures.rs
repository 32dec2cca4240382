//! Test fixture creation for the catalog database
//!
//! Seeds the database with direct SQL inserts: extension tables and
//! users have no create endpoints, so the HTTP surface cannot populate
//! them.

use super::constants::*;
use anyhow::Result;
use holodex_server::catalog_store::SqliteCatalogStore;
use rusqlite::{params, Connection};
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary catalog database seeded with one character, one
/// planet, one starship (each with its parent item), one untyped item
/// and two users.
///
/// Returns (temp_dir, catalog_db_path).
pub fn create_test_catalog() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let catalog_db_path = dir.path().join("catalog.db");

    // Initialize the store (creates schema)
    let _store = SqliteCatalogStore::new(&catalog_db_path)?;

    let conn = Connection::open(&catalog_db_path)?;
    conn.pragma_update(None, "foreign_keys", "ON")?;

    // Items: ids are assigned sequentially, matching the constants.
    let items = [
        (ITEM_LUKE_NAME, "luke.jpg", "Jedi from Tatooine", Some("Character")),
        (ITEM_TATOOINE_NAME, "tatooine.jpg", "A desert planet", Some("Planet")),
        (ITEM_XWING_NAME, "xwing.jpg", "Rebel starfighter", Some("Starship")),
        (ITEM_KYBER_NAME, "kyber.jpg", "Lightsaber crystal", None),
    ];
    for (name, img, description, item_type) in items {
        conn.execute(
            "INSERT INTO items (name, img, description, type) VALUES (?1, ?2, ?3, ?4)",
            params![name, img, description, item_type],
        )?;
    }

    conn.execute(
        "INSERT INTO characters (id, height, mass, hair_color, skin_color, eye_color,
                                 birth_year, gender, created, edited, homeworld)
         VALUES (?1, 172, 77, 'blond', 'fair', 'blue', '19BBY', 'male',
                 '2014-12-09', '2014-12-20', 'Tatooine')",
        params![ITEM_LUKE_ID],
    )?;

    conn.execute(
        "INSERT INTO planets (id, diameter, rotation_period, orbital_period, gravity,
                              population, climate, terrain, surface_water, created, edited)
         VALUES (?1, '10465', 23, 304, '1 standard', 200000, 'arid', 'desert', 0,
                 '2014-12-09', '2014-12-20')",
        params![ITEM_TATOOINE_ID],
    )?;

    conn.execute(
        "INSERT INTO starships (id, model, starship_class, cost_in_credits, length, crew,
                                passengers, max_atmosphere_speed, hyperdrive_rating, mglt,
                                cargo_capacity, consumables, created, edited)
         VALUES (?1, 'T-65 X-wing', 'Starfighter', 149999, 12, 1, 0, 1050, '1.0', 100,
                 110, '1 week', '2014-12-12', '2014-12-20')",
        params![ITEM_XWING_ID],
    )?;

    for (username, email) in [
        (USER_1_NAME, "luke@rebellion.org"),
        (USER_2_NAME, "leia@rebellion.org"),
    ] {
        conn.execute(
            "INSERT INTO users (username, password, email) VALUES (?1, 'open-sesame', ?2)",
            params![username, email],
        )?;
    }

    Ok((dir, catalog_db_path))
}
