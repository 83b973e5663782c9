//! HTTP API: server, routing, request guard, and page rendering.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
