#![allow(dead_code)]

use alias_shortener::application::services::AliasRegistry;
use alias_shortener::infrastructure::persistence::{SqliteUrlRepository, connect_pool};
use alias_shortener::routes::app_router;
use alias_shortener::state::{AppState, BasicCredentials};
use alias_shortener::utils::alias_generator::AliasGenerator;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use sqlx::SqlitePool;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "secret";

/// Opens a private in-memory database.
pub async fn memory_pool() -> SqlitePool {
    connect_pool(":memory:", 1).await.unwrap()
}

/// Builds a registry over `pool`, creating the schema.
pub async fn create_test_registry(pool: SqlitePool) -> AliasRegistry {
    let repo = Arc::new(SqliteUrlRepository::new(Arc::new(pool)));
    AliasRegistry::init(repo).await.unwrap()
}

pub async fn create_test_state(pool: SqlitePool) -> AppState {
    let registry = create_test_registry(pool).await;

    AppState::new(
        Arc::new(registry),
        BasicCredentials {
            user: TEST_USER.to_string(),
            password: TEST_PASSWORD.to_string(),
        },
    )
}

/// Full application router with every middleware, served in-process.
pub fn create_test_server(state: AppState) -> TestServer {
    let app = app_router(state, Duration::from_secs(4));
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

/// Generator returning a fixed sequence of aliases, then repeating the last.
pub struct FixedAliasGenerator {
    aliases: Mutex<VecDeque<String>>,
    last: Mutex<String>,
}

impl FixedAliasGenerator {
    pub fn new(aliases: &[&str]) -> Self {
        Self {
            aliases: Mutex::new(aliases.iter().map(|a| a.to_string()).collect()),
            last: Mutex::new(aliases.last().map(|a| a.to_string()).unwrap_or_default()),
        }
    }
}

impl AliasGenerator for FixedAliasGenerator {
    fn generate(&self, _length: usize) -> String {
        match self.aliases.lock().unwrap().pop_front() {
            Some(alias) => alias,
            None => self.last.lock().unwrap().clone(),
        }
    }
}

pub async fn insert_record(pool: &SqlitePool, alias: &str, url: &str) {
    sqlx::query("INSERT INTO url (alias, url) VALUES (?, ?)")
        .bind(alias)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_records(pool: &SqlitePool, alias: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url WHERE alias = ?")
        .bind(alias)
        .fetch_one(pool)
        .await
        .unwrap()
}
