// tests/common/mod.rs

#![allow(dead_code)]

use sqlx::{AnyPool, any::AnyPoolOptions};
use trivia_api::{
    db::{self, Backend},
    routes,
    state::AppState,
};

pub struct TestApp {
    pub address: String,
    pub pool: AnyPool,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

/// In-memory SQLite pool with the schema applied.
/// A single connection that never expires keeps the in-memory database alive.
pub async fn test_pool() -> AnyPool {
    sqlx::any::install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite database");

    db::migrate(&pool, Backend::Sqlite)
        .await
        .expect("Failed to migrate database");

    pool
}

pub fn test_state(pool: AnyPool) -> AppState {
    AppState {
        pool,
        backend: Backend::Sqlite,
    }
}

/// Spawns the app on a random port for testing.
pub async fn spawn_app() -> TestApp {
    let pool = test_pool().await;
    let app = routes::create_router(test_state(pool.clone()));

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    // Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address,
        pool,
        client: reqwest::Client::new(),
    }
}

pub async fn seed_category(pool: &AnyPool, id: i64, name: &str) {
    sqlx::query("INSERT INTO categories (id, type) VALUES ($1, $2)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .expect("Failed to seed category");
}

pub async fn seed_question(
    pool: &AnyPool,
    question: &str,
    answer: &str,
    category: i64,
    difficulty: i64,
) -> i64 {
    sqlx::query_scalar("INSERT INTO questions (question, answer, category, difficulty) VALUES ($1, $2, $3, $4) RETURNING id")
        .bind(question)
        .bind(answer)
        .bind(category)
        .bind(difficulty)
        .fetch_one(pool)
        .await
        .expect("Failed to seed question")
}

/// Seeds `{1: Science, 2: Art}`.
pub async fn seed_science_and_art(pool: &AnyPool) {
    seed_category(pool, 1, "Science").await;
    seed_category(pool, 2, "Art").await;
}
