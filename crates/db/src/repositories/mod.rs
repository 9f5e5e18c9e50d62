//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod staff_repo;
pub mod user_repo;

pub use staff_repo::StaffRepo;
pub use user_repo::UserRepo;

/// PostgreSQL `unique_violation` SQLSTATE.
const UNIQUE_VIOLATION: &str = "23505";

/// Whether `err` is a unique-constraint violation on the named constraint.
pub fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
                && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}
