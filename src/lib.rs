// src/lib.rs

pub mod common;
pub mod config;
pub mod models;
pub mod schema;
pub mod services;

pub use common::error::AppError;
