//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all holodex-server endpoints.
//!
//! When API routes or request formats change, update only this file.
#![allow(dead_code)] // Not every test binary uses every endpoint

use super::constants::*;
use reqwest::Response;
use serde_json::json;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("GET request failed")
    }

    // ========================================================================
    // Item Endpoints
    // ========================================================================

    /// GET /item
    pub async fn get_items(&self) -> Response {
        self.get("/item").await
    }

    /// GET /item/{id}
    pub async fn get_item(&self, id: i64) -> Response {
        self.get(&format!("/item/{}", id)).await
    }

    /// POST /item
    pub async fn create_item(
        &self,
        name: &str,
        description: &str,
        img: &str,
        item_type: Option<&str>,
    ) -> Response {
        self.client
            .post(format!("{}/item", self.base_url))
            .json(&json!({
                "name": name,
                "description": description,
                "img": img,
                "type": item_type,
            }))
            .send()
            .await
            .expect("POST /item failed")
    }

    // ========================================================================
    // Extension Entity Endpoints
    // ========================================================================

    /// GET /character
    pub async fn get_characters(&self) -> Response {
        self.get("/character").await
    }

    /// GET /character/{id}
    pub async fn get_character(&self, id: i64) -> Response {
        self.get(&format!("/character/{}", id)).await
    }

    /// GET /planet
    pub async fn get_planets(&self) -> Response {
        self.get("/planet").await
    }

    /// GET /planet/{id}
    pub async fn get_planet(&self, id: i64) -> Response {
        self.get(&format!("/planet/{}", id)).await
    }

    /// GET /starship
    pub async fn get_starships(&self) -> Response {
        self.get("/starship").await
    }

    /// GET /starship/{id}
    pub async fn get_starship(&self, id: i64) -> Response {
        self.get(&format!("/starship/{}", id)).await
    }

    // ========================================================================
    // User & Favorite Endpoints
    // ========================================================================

    /// GET /user
    pub async fn get_users(&self) -> Response {
        self.get("/user").await
    }

    /// GET /user/{id}
    pub async fn get_user(&self, id: i64) -> Response {
        self.get(&format!("/user/{}", id)).await
    }

    /// GET /user/favorite?user_id={user_id}
    pub async fn get_favorites(&self, user_id: i64) -> Response {
        self.get(&format!("/user/favorite?user_id={}", user_id))
            .await
    }

    /// GET /user/favorite without the user_id parameter
    pub async fn get_favorites_without_user_id(&self) -> Response {
        self.get("/user/favorite").await
    }

    /// POST /user/favorite
    pub async fn create_favorite(&self, user_id: i64, item_id: i64) -> Response {
        self.client
            .post(format!("{}/user/favorite", self.base_url))
            .json(&json!({
                "user_id": user_id,
                "item_id": item_id,
            }))
            .send()
            .await
            .expect("POST /user/favorite failed")
    }
}
