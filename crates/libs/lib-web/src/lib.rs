//! # Web Library
//!
//! HTTP handlers, middleware, routes, and use-case services of the gym
//! check-in API.

pub mod handlers;
pub mod middleware;
pub mod server;
pub mod services;

pub use server::{create_router, start_server, AppState, ServerConfig};
