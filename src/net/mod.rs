//! Networking modules for the blogging backend's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls and `types` defines the shared wire
//! schema.

pub mod api;
pub mod types;
