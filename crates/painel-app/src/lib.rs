//! Salvo HTTP application for the panel: depot-injection handlers for
//! configuration, store, and gateway, plus the REST routes.

pub mod app;
pub mod config;
pub mod error;
pub mod gateway_handler;
pub mod store_handler;
