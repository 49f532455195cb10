pub mod reservation;
pub mod room;
pub mod time_column;

use eyre::WrapErr;
use meetingroom_core::errors::BookingResult;
use sqlx::{pool::PoolConnection, Postgres};

use crate::DbPool;

/// Checks a connection out of the pool for the duration of one operation
///
/// The connection goes back to the pool when the guard is dropped, on the
/// error path as well as on success.
pub(crate) async fn acquire(pool: &DbPool) -> BookingResult<PoolConnection<Postgres>> {
    let conn = pool
        .acquire()
        .await
        .wrap_err("Failed to acquire database connection")?;

    Ok(conn)
}
