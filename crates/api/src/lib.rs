//! Tailbook web application library.
//!
//! Exposes the building blocks (config, state, record service, upload
//! storage, views, routes) so integration tests and the binary entrypoint
//! can both access them.

pub mod config;
pub mod error;
pub mod flash;
pub mod handlers;
pub mod records;
pub mod routes;
pub mod state;
pub mod storage;
pub mod views;
