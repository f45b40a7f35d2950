//! # Tavola
//!
//! Backend for a small restaurant's public website: customers submit
//! orders, table bookings, and contact messages over HTTP; staff list
//! them and move orders and bookings through their statuses from an
//! admin dashboard. Records live in three flat JSON array files, one per
//! entity type. Deliberately no database: the restaurant takes a few
//! dozen orders a day.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (server.rs, routes.rs, wired by main.rs)        │
//! │  - Parses bodies, builds response envelopes, CORS           │
//! │  - The ONLY place that knows about axum                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - FrontDesk facade: submit / list / set-status             │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract RecordStore trait                               │
//! │  - JsonFileStore (production), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result` types, and never touches a request, a response, or stdout.
//! The HTTP layer stays thin enough that every behavior worth testing is
//! reachable through [`api::FrontDesk`] with the in-memory store.
//!
//! ## Module Overview
//!
//! - [`api`]: The [`api::FrontDesk`] facade — entry point for all operations
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Record`, `Entity`)
//! - [`config`]: Configuration loading
//! - [`state`]: Shared handler state, built at startup
//! - [`routes`]: HTTP handlers
//! - [`server`]: Router assembly and the serve loop
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;
