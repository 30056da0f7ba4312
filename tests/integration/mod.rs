//! Integration tests for the Model Router
//!
//! These tests drive the complete router, including authentication, routing
//! by model prefix and the error mapping, over mock provider adapters.

mod auth;
mod chat_completions;
mod health;
mod models;
mod providers;
