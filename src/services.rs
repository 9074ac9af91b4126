// src/services.rs

pub mod payload_service;

pub use payload_service::Operation;
