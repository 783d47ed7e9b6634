//! # Roster Architecture
//!
//! Roster is a **UI-agnostic record-keeping library**: a small personal
//! store of people records (name, email, age, salary, gender) persisted
//! as a line-oriented text file, with a CLI client on top.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, validates input, renders tables        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Repository (repo.rs)                                       │
//! │  - Owns the record set, the id counter, the backing file    │
//! │  - Every mutation is followed by a full file rewrite        │
//! │  - Hands out snapshots, never live references               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Line Format (format.rs)                                    │
//! │  - Pure text ↔ record translation                           │
//! │  - Accepts three historical layouts, writes one             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Tolerant Reads, Strict Writes
//!
//! A store file may have been hand-edited or written by an older version.
//! Loading therefore never fails on a bad line — it is dropped (with a
//! log line) and loading continues. Writing is the opposite: the file is
//! regenerated deterministically from memory on every mutation, always in
//! the current layout, always behind a write-then-rename so no reader
//! observes a partial file.
//!
//! Validation follows the same split: the CLI validates everything a user
//! types ([`validate`]), while the repository trusts its inputs and
//! tolerates whatever legacy data it finds on disk.
//!
//! ## Module Overview
//!
//! - [`repo`]: The repository — record set, id assignment, persistence
//! - [`format`]: Line-level parsing and serialization of the store file
//! - [`model`]: Core data types ([`model::Record`], [`model::RecordFields`])
//! - [`validate`]: Caller-side field validation
//! - [`stats`]: Read-only aggregate statistics over a snapshot
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli` (binary only): argument parsing and table rendering

pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod repo;
pub mod stats;
pub mod validate;
