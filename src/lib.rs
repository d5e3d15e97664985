//! # jotfile
//!
//! Crash-safe plain-file note storage with pluggable strategies. jotfile is
//! a storage library that happens to ship a small CLI, not the other way
//! around: everything from [`store::NoteStore`] inward takes plain Rust
//! arguments, returns plain `Result` types, and never assumes a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  CLI (cli, wired by main.rs)                              │
//! │  - argument parsing, table rendering, exit codes          │
//! └───────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  Storage contract (store::NoteStore)                      │
//! │  - create / get / get_all / count / update / delete       │
//! │  - three strategies: memory, per-record files, aggregate  │
//! └───────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  Codecs (codec) + atomic replace (store::atomic)          │
//! │  - injected serialization seams                           │
//! │  - backup-write-restore full-file rewrite                 │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! The shell owns exactly one strategy instance at a time, constructed
//! explicitly from the per-directory [`config::JotConfig`]; when the file
//! strategy cannot come up, it falls back to [`store::MemoryStore`] with an
//! explicit "nothing will be saved" warning. There are no process-wide
//! registries or singletons.
//!
//! ## Module overview
//!
//! - [`model`]: the [`model::Note`] entity
//! - [`store`]: the contract, the three strategies, atomic replace, lock
//! - [`codec`]: aggregate and per-record serialization seams
//! - [`config`]: per-directory strategy selection (`jotfile.toml`)
//! - [`schema`]: static field schema for tabular display
//! - [`error`]: the [`error::StoreError`] taxonomy
//! - [`logging`]: stderr log bootstrap for the binary
//! - `cli`: argument parsing and rendering for the binary

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod schema;
pub mod store;

pub use config::{JotConfig, StorageKind};
pub use error::{Result, StoreError};
pub use model::Note;
pub use store::{open_store, DirLock, DirStore, FileStore, MemoryStore, NoteStore};
