//! Todo Board Frontend
//!
//! Two independent boards mounted into existing page markup:
//! a static board seeded from built-in records, and a saved board
//! persisted in `localStorage`.

pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod rows;
pub mod storage;
