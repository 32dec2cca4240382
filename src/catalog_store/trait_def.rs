//! CatalogStore trait definition.
//!
//! The stateless query facade between the HTTP handlers and storage:
//! one operation per endpoint need, each a single fetch-and-serialize or
//! insert-commit-serialize step. Missing rows are `Ok(None)`, never
//! errors; constraint violations (duplicate item name, dangling
//! favorite references) surface as store errors.

use anyhow::Result;
use serde_json::Value;

use super::models::{NewFavorite, NewItem};

pub trait CatalogStore: Send + Sync {
    // =========================================================================
    // Items
    // =========================================================================

    /// All items, serialized, in storage order.
    fn get_item_list(&self) -> Result<Vec<Value>>;

    /// A single item by id, or `None` when absent.
    fn get_item_by_id(&self, id: i64) -> Result<Option<Value>>;

    /// Insert a new item and return its serialized row. An unrecognized
    /// type string is coerced to NULL, not rejected.
    fn add_new_item(&self, item: NewItem) -> Result<Value>;

    // =========================================================================
    // Extension entities (read only, no create endpoints exist)
    // =========================================================================

    fn get_character_list(&self) -> Result<Vec<Value>>;
    fn get_character_by_id(&self, id: i64) -> Result<Option<Value>>;

    fn get_planet_list(&self) -> Result<Vec<Value>>;
    fn get_planet_by_id(&self, id: i64) -> Result<Option<Value>>;

    fn get_starship_list(&self) -> Result<Vec<Value>>;
    fn get_starship_by_id(&self, id: i64) -> Result<Option<Value>>;

    // =========================================================================
    // Users & favorites
    // =========================================================================

    fn get_user_list(&self) -> Result<Vec<Value>>;
    fn get_user_by_id(&self, id: i64) -> Result<Option<Value>>;

    /// All favorites of a user, each denormalized against the linked item.
    fn get_user_favorites(&self, user_id: i64) -> Result<Vec<Value>>;

    /// Insert a favorite and return its serialized (denormalized) row.
    /// Referential integrity is left to the store's foreign keys.
    fn add_user_favorite(&self, favorite: NewFavorite) -> Result<Value>;
}
