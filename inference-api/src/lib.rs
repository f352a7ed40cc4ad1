//! Inference API - HTTP backend for the chat surface
//!
//! Serves `POST /api/infer`, the single endpoint the chat UI talks to.

pub mod api;
pub mod config;
