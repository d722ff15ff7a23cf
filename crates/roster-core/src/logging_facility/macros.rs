//! Operation boundary macros
//!
//! Every roster command reports one `start` event and then exactly one of
//! `end` or `end_error`. Field and event names come from
//! `roster_core::schema`, so callers only need `roster-core` and `tracing`.

/// Log the start of an operation
///
/// Extra fields follow the operation name in `tracing` syntax.
///
/// ```
/// # use roster_core::log_op_start;
/// let review_id = 7;
/// log_op_start!("review_show", review_id = review_id);
/// log_op_start!("review_create", year = 2022, employee_id = 1);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($($field)*)?
        )
    };
}

/// Log the successful end of an operation
///
/// `duration_ms` is required; further fields may follow it.
///
/// ```
/// # use roster_core::log_op_end;
/// log_op_end!("review_delete", duration_ms = 3, rows_affected = 1);
/// log_op_end!("review_list", duration_ms = 12, row_count = 40);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        )
    };
}

/// Log the failed end of an operation
///
/// The error may be a `RosterError` or an `ExError`; its kind and stable
/// code are recorded as `err.kind` and `err.code`.
///
/// ```
/// # use roster_core::{log_op_error, RosterError};
/// let err = RosterError::UnknownEmployee { employee_id: 99 };
/// log_op_error!("review_create", err, duration_ms = 2, employee_id = 99);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($($field)*)?
        );
    }};
}
