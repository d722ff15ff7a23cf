//! Core types shared across Roster facilities
//!
//! This crate provides the canonical field keys and event names used by
//! both the error facility and the logging facility. It has no dependencies
//! so every other crate in the workspace can use it.

pub mod schema;
