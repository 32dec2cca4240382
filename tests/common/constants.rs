//! Shared constants for the seeded test catalog
#![allow(dead_code)] // Not every test binary uses every constant

// Items (ids follow seeding order in fixtures.rs)
pub const ITEM_LUKE_ID: i64 = 1;
pub const ITEM_LUKE_NAME: &str = "Luke Skywalker";
pub const ITEM_TATOOINE_ID: i64 = 2;
pub const ITEM_TATOOINE_NAME: &str = "Tatooine";
pub const ITEM_XWING_ID: i64 = 3;
pub const ITEM_XWING_NAME: &str = "X-wing";
pub const ITEM_KYBER_ID: i64 = 4;
pub const ITEM_KYBER_NAME: &str = "Kyber Crystal";

// Users
pub const USER_1_ID: i64 = 1;
pub const USER_1_NAME: &str = "luke";
pub const USER_2_ID: i64 = 2;
pub const USER_2_NAME: &str = "leia";

// Timeouts
pub const REQUEST_TIMEOUT_SECS: u64 = 5;
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;
