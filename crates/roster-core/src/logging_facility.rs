//! Structured logging shared by every roster crate
//!
//! Binaries call `init` once with the `Profile` from their configuration.
//! Operation boundaries are logged with `log_op_start!`, `log_op_end!` and
//! `log_op_error!`; the field and event names come from
//! `roster_core::schema` (re-exported from `roster-core-types`).
//!
//! ```rust
//! use roster_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! Only the outermost command layer emits boundary events. The store reports
//! statement-level details with `tracing::debug!` and `tracing::trace!`.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
