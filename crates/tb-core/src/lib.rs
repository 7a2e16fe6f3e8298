//! # tb-core
//!
//! Core types for Taskboard.
//!
//! This crate provides the foundational types shared across all Taskboard crates:
//! - Entity structs (tasks, rewards, creation requests, transaction entries)
//! - The `TaskStatus` state machine and the accept/complete guards
//! - The transaction-log projection over task records
//! - Cross-cutting error types and the error taxonomy
//! - JSON response envelopes shared by the HTTP API and the CLI
//!
//! Nothing in here performs I/O.

pub mod entities;
pub mod enums;
pub mod errors;
pub mod projection;
pub mod responses;
pub mod transitions;

pub use errors::{ConflictKind, CoreError, ErrorKind};
