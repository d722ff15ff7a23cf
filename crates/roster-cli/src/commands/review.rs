//! Review commands
//!
//! Each command opens a fresh `ReviewRepo` over the shared connection, so
//! every invocation starts with an empty identity cache. Command handlers
//! own the start/end logging for their operation.

use std::time::Instant;

use clap::Args;
use roster_core::{log_op_end, log_op_error, log_op_start};
use roster_core::{ExError, ExErrorKind, Review};
use roster_store::{ReviewRepo, SqliteEmployeeDirectory};
use rusqlite::Connection;
use serde::Serialize;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Review year (2000 or later)
    #[arg(long)]
    pub year: i64,

    /// Review summary
    #[arg(long)]
    pub summary: String,

    /// Reviewed employee id
    #[arg(long)]
    pub employee: i64,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: i64,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub id: i64,

    #[arg(long)]
    pub year: Option<i64>,

    #[arg(long)]
    pub summary: Option<String>,

    #[arg(long)]
    pub employee: Option<i64>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: i64,
}

/// Run `f` between start and end events for `op`
pub(crate) fn logged<T>(
    op: &'static str,
    f: impl FnOnce() -> Result<T, ExError>,
) -> Result<T, ExError> {
    let start = Instant::now();
    log_op_start!(op);

    let result = f();
    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            log_op_end!(op, duration_ms = duration_ms);
        }
        Err(e) => {
            log_op_error!(op, e.clone(), duration_ms = duration_ms);
        }
    }
    result
}

fn repo(conn: &Connection) -> ReviewRepo<'_, SqliteEmployeeDirectory<'_>> {
    ReviewRepo::new(conn, SqliteEmployeeDirectory::new(conn))
}

fn not_found(op: &str, id: i64) -> ExError {
    ExError::new(ExErrorKind::NotFound)
        .with_op(op)
        .with_entity_id(id.to_string())
        .with_message(format!("Review {} not found", id))
}

fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ExError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub(crate) fn init_tables(conn: &Connection) -> Result<(), ExError> {
    SqliteEmployeeDirectory::new(conn).ensure_table()?;
    repo(conn).create_table()
}

pub(crate) fn create_review(conn: &Connection, args: &CreateArgs) -> Result<Review, ExError> {
    let mut repo = repo(conn);
    let review = repo.create(args.year, args.summary.as_str(), args.employee)?;
    Ok(review.clone())
}

pub(crate) fn find_review(conn: &Connection, id: i64) -> Result<Review, ExError> {
    repo(conn)
        .find_by_id(id)?
        .cloned()
        .ok_or_else(|| not_found("review_show", id))
}

pub(crate) fn list_reviews(conn: &Connection) -> Result<Vec<Review>, ExError> {
    let mut repo = repo(conn);
    let reviews = repo.get_all()?.into_iter().cloned().collect();
    Ok(reviews)
}

pub(crate) fn update_review(conn: &Connection, args: &UpdateArgs) -> Result<Review, ExError> {
    if args.year.is_none() && args.summary.is_none() && args.employee.is_none() {
        return Err(ExError::new(ExErrorKind::InvalidInput)
            .with_op("review_update")
            .with_message("Nothing to update: pass --year, --summary or --employee"));
    }

    let mut repo = repo(conn);
    let review = repo
        .find_by_id(args.id)?
        .ok_or_else(|| not_found("review_update", args.id))?;

    if let Some(year) = args.year {
        review.set_year(year)?;
    }
    if let Some(summary) = &args.summary {
        review.set_summary(summary.as_str())?;
    }
    if let Some(employee_id) = args.employee {
        repo.set_employee_id(args.id, employee_id)?;
    }

    repo.update_cached(args.id)?;
    repo.get(args.id)
        .cloned()
        .ok_or_else(|| not_found("review_update", args.id))
}

pub(crate) fn delete_review(conn: &Connection, id: i64) -> Result<usize, ExError> {
    let (rows, _) = repo(conn).delete(id)?;
    if rows == 0 {
        return Err(not_found("review_delete", id));
    }
    Ok(rows)
}

pub fn init(conn: &Connection) -> CmdResult {
    logged("review_init", || init_tables(conn))?;
    println!("Reviews table ready");
    Ok(())
}

pub fn drop_table(conn: &Connection) -> CmdResult {
    logged("review_drop", || repo(conn).drop_table())?;
    println!("Reviews table dropped");
    Ok(())
}

pub fn create(conn: &Connection, args: CreateArgs) -> CmdResult {
    let review = logged("review_create", || create_review(conn, &args))?;
    println!("Review created:");
    println!("  {}", review);
    Ok(())
}

pub fn show(conn: &Connection, args: ShowArgs) -> CmdResult {
    let review = logged("review_show", || find_review(conn, args.id))?;
    if args.json {
        println!("{}", render_json(&review)?);
    } else {
        println!("{}", review);
    }
    Ok(())
}

pub fn list(conn: &Connection, args: ListArgs) -> CmdResult {
    let reviews = logged("review_list", || list_reviews(conn))?;
    if args.json {
        println!("{}", render_json(&reviews)?);
    } else if reviews.is_empty() {
        println!("No reviews");
    } else {
        for review in &reviews {
            println!("{}", review);
        }
    }
    Ok(())
}

pub fn update(conn: &Connection, args: UpdateArgs) -> CmdResult {
    let review = logged("review_update", || update_review(conn, &args))?;
    println!("Review updated:");
    println!("  {}", review);
    Ok(())
}

pub fn delete(conn: &Connection, args: DeleteArgs) -> CmdResult {
    logged("review_delete", || delete_review(conn, args.id))?;
    println!("Review {} deleted", args.id);
    Ok(())
}
