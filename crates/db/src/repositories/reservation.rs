use crate::models::DbReservation;
use crate::repositories::{acquire, time_column::decode_time};
use crate::DbPool;
use chrono::NaiveDate;
use eyre::WrapErr;
use meetingroom_core::{
    errors::BookingResult,
    models::reservation::{CreateReservationRequest, ReservationId},
};
use sqlx::{postgres::PgRow, Row};

fn row_to_reservation(row: &PgRow) -> BookingResult<DbReservation> {
    Ok(DbReservation {
        reserve_id: row.try_get("reserve_id").wrap_err("reserve_id")?,
        room_id: row.try_get("room_id").wrap_err("room_id")?,
        room_name: row.try_get("room_name").wrap_err("room_name")?,
        meeting_name: row.try_get("meeting_name").wrap_err("meeting_name")?,
        date: row.try_get::<NaiveDate, _>("date").wrap_err("date")?,
        reserver: row.try_get("reserver").wrap_err("reserver")?,
        start_time: decode_time(row, "start_time")?,
        end_time: decode_time(row, "end_time")?,
    })
}

/// Lists live reservations on a date, joined with their room names
///
/// The date is bound as text and cast by Postgres, so a malformed value
/// comes back as a database error. Rows keep whatever order the planner
/// produces.
pub async fn get_reservations_by_date(
    pool: &DbPool,
    date: &str,
) -> BookingResult<Vec<DbReservation>> {
    let mut conn = acquire(pool).await?;

    let rows = sqlx::query(
        r#"
        SELECT
            a.reserveId AS reserve_id,
            a.roomId AS room_id,
            b.roomName AS room_name,
            a.meetingName AS meeting_name,
            a.date,
            a.reserver,
            a.start_time,
            a.end_time
        FROM t_reservation a
        JOIN m_meetingroom b ON a.roomId = b.roomId
        WHERE a.date = $1::date
        AND a.deleteFlg = 0
        "#,
    )
    .bind(date)
    .fetch_all(&mut *conn)
    .await
    .wrap_err_with(|| format!("Failed to load reservations for {}", date))?;

    tracing::debug!("Found {} reservations on {}", rows.len(), date);
    rows.iter().map(row_to_reservation).collect()
}

/// Inserts a reservation as given and returns its id
///
/// Every field is bound as text and cast by Postgres, so a room id of `2` or
/// `"2"` both work while anything unconvertible, or missing, fails the
/// insert. Nothing is checked against existing bookings; overlapping
/// reservations for the same room are accepted.
pub async fn create_reservation(
    pool: &DbPool,
    request: &CreateReservationRequest,
) -> BookingResult<ReservationId> {
    let mut conn = acquire(pool).await?;

    let id = sqlx::query_scalar::<_, ReservationId>(
        r#"
        INSERT INTO t_reservation (
            roomId,
            meetingName,
            date,
            reserver,
            start_time,
            end_time
        ) VALUES (
            $1::int, $2, $3::date, $4, $5::time, $6::time
        )
        RETURNING reserveId
        "#,
    )
    .bind(request.room_id.as_ref().map(ToString::to_string))
    .bind(&request.meeting_name)
    .bind(&request.date)
    .bind(&request.reserver)
    .bind(&request.start_time)
    .bind(&request.end_time)
    .fetch_one(&mut *conn)
    .await
    .wrap_err("Failed to insert reservation")?;

    tracing::debug!(
        "Reservation created: id={}, room={:?}, date={:?}",
        id, request.room_id, request.date
    );
    Ok(id)
}

/// Flags a reservation as deleted and returns the number of rows touched
///
/// Unknown ids are not an error; they simply affect zero rows. The id is
/// compared as `BIGINT`, so ids past the range of the column match nothing.
pub async fn soft_delete_reservation(pool: &DbPool, id: i64) -> BookingResult<u64> {
    let mut conn = acquire(pool).await?;

    let result = sqlx::query(
        r#"
        UPDATE t_reservation
        SET deleteFlg = 1,
            updateTime = NOW()
        WHERE reserveId = $1::bigint
        "#,
    )
    .bind(id)
    .execute(&mut *conn)
    .await
    .wrap_err_with(|| format!("Failed to delete reservation {}", id))?;

    Ok(result.rows_affected())
}
