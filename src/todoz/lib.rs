//! # Todoz Architecture
//!
//! Todoz is a small task list manager: add, edit, complete, and delete short
//! text items, keep them between sessions, and export them as a CSV document
//! that spreadsheets import cleanly. The library does all of that; the `todoz`
//! binary is one thin client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, cli/)                         │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Holds the current collection, persists successors        │
//! │  - Turns storage trouble into a non-fatal error flag        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per intent, collection in, successor out      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (validation, lifecycle, csv, export, id, clock)       │
//! │  - Pure transforms over immutable values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Copy-on-Write Collections
//!
//! A [`model::Collection`] is never edited in place. Each intent produces a
//! successor, which the API swaps in with a single assignment. Untouched
//! items are shared between predecessor and successor.
//!
//! ## Module Overview
//!
//! - [`api`]: The coordinator, entry point for all operations
//! - [`commands`]: Business logic for each intent
//! - [`lifecycle`]: create / update / remove
//! - [`validation`]: Title rules
//! - [`csv`]: CSV document and filename
//! - [`export`]: Export trigger and download sinks
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Item`, `Collection`, filters, stats
//! - [`index`]: Display indexes and selectors
//! - [`config`]: Configuration management
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod clock;
pub mod commands;
pub mod config;
pub mod csv;
pub mod error;
pub mod export;
pub mod id;
pub mod index;
pub mod lifecycle;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;
