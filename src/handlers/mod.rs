// src/handlers/mod.rs

pub mod categories;
pub mod fallback;
pub mod health;
pub mod questions;
pub mod quizzes;
