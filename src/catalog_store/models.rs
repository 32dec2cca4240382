//! Row models for the holodex catalog.
//!
//! Every model exposes a `serialize()` producing the flat JSON object
//! that goes straight into the HTTP response body. Extension rows
//! (character, planet, starship) pull their `name` from the parent item,
//! favorites denormalize the linked item entirely.

use serde::Deserialize;
use serde_json::{json, Value};

/// Item specialization marker stored in the `type` column.
///
/// The textual enum value is what travels over the wire and into the
/// database; an unrecognized string degrades to `Null` instead of
/// failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemType {
    Character,
    Planet,
    Starship,
    Null,
}

impl ItemType {
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("Character") => ItemType::Character,
            Some("Planet") => ItemType::Planet,
            Some("Starship") => ItemType::Starship,
            _ => ItemType::Null,
        }
    }

    /// The enum's string value; `Null` has none.
    pub fn as_value(&self) -> Option<&'static str> {
        match self {
            ItemType::Character => Some("Character"),
            ItemType::Planet => Some("Planet"),
            ItemType::Starship => Some("Starship"),
            ItemType::Null => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub img: String,
    pub description: String,
    pub item_type: ItemType,
}

impl Item {
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "img": self.img,
            "description": self.description,
            "type": self.item_type.as_value(),
        })
    }
}

#[derive(Clone, Debug)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub height: i64,
    pub mass: i64,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    pub created: String,
    pub edited: String,
    pub homeworld: String,
}

impl Character {
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "height": self.height,
            "mass": self.mass,
            "hair_color": self.hair_color,
            "skin_color": self.skin_color,
            "eye_color": self.eye_color,
            "birth_year": self.birth_year,
            "gender": self.gender,
            "created": self.created,
            "edited": self.edited,
            "homeworld": self.homeworld,
        })
    }
}

#[derive(Clone, Debug)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub diameter: String,
    pub rotation_period: i64,
    pub orbital_period: i64,
    pub gravity: String,
    pub population: i64,
    pub climate: String,
    pub terrain: String,
    pub surface_water: bool,
    pub created: String,
    pub edited: String,
}

impl Planet {
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "diameter": self.diameter,
            "rotation_period": self.rotation_period,
            "orbital_period": self.orbital_period,
            "gravity": self.gravity,
            "population": self.population,
            "climate": self.climate,
            "terrain": self.terrain,
            "surface_water": self.surface_water,
            "created": self.created,
            "edited": self.edited,
        })
    }
}

#[derive(Clone, Debug)]
pub struct Starship {
    pub id: i64,
    pub name: String,
    pub model: String,
    pub starship_class: String,
    pub cost_in_credits: i64,
    pub length: i64,
    pub crew: i64,
    pub passengers: i64,
    pub max_atmosphere_speed: i64,
    pub hyperdrive_rating: String,
    pub mglt: i64,
    pub cargo_capacity: i64,
    pub consumables: String,
    pub created: String,
    pub edited: String,
}

impl Starship {
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "model": self.model,
            "starship_class": self.starship_class,
            "cost_in_credits": self.cost_in_credits,
            "length": self.length,
            "crew": self.crew,
            "passengers": self.passengers,
            "max_atmosphere_speed": self.max_atmosphere_speed,
            "hyperdrive_rating": self.hyperdrive_rating,
            "MGLT": self.mglt,
            "cargo_capacity": self.cargo_capacity,
            "consumables": self.consumables,
            "created": self.created,
            "edited": self.edited,
        })
    }
}

#[derive(Clone, Debug)]
pub struct User {
    pub id: i64,
    pub username: String,
    // Held for row mapping, deliberately never serialized.
    pub password: String,
    pub email: String,
}

impl User {
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "username": self.username,
            "email": self.email,
        })
    }
}

/// A favorite, already denormalized against the linked item.
#[derive(Clone, Debug)]
pub struct Favorite {
    pub item_id: i64,
    pub name: String,
    pub description: String,
    pub img: String,
    pub item_type: ItemType,
}

impl Favorite {
    /// The `id` field carries the linked item's id, not the favorite
    /// row's own id.
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.item_id,
            "name": self.name,
            "description": self.description,
            "img": self.img,
            "type": self.item_type.as_value(),
        })
    }
}

/// Request payload for `POST /item`.
#[derive(Debug, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub img: String,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
}

/// Request payload for `POST /user/favorite`.
#[derive(Debug, Deserialize)]
pub struct NewFavorite {
    pub user_id: i64,
    pub item_id: i64,
}
