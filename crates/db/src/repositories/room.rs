use crate::models::{DbBusinessHours, DbRoom};
use crate::repositories::{acquire, time_column::decode_time};
use crate::DbPool;
use eyre::WrapErr;
use meetingroom_core::errors::BookingResult;

pub async fn list_rooms(pool: &DbPool) -> BookingResult<Vec<DbRoom>> {
    let mut conn = acquire(pool).await?;

    let rooms = sqlx::query_as::<_, DbRoom>(
        r#"
        SELECT roomId AS room_id, roomName AS room_name
        FROM m_meetingroom
        "#,
    )
    .fetch_all(&mut *conn)
    .await
    .wrap_err("Failed to list meeting rooms")?;

    tracing::debug!("Loaded {} meeting rooms", rooms.len());
    Ok(rooms)
}

/// Fetches the first business-hours row, if the table has one
pub async fn get_business_hours(pool: &DbPool) -> BookingResult<Option<DbBusinessHours>> {
    let mut conn = acquire(pool).await?;

    let row = sqlx::query(
        r#"
        SELECT start_time, end_time
        FROM m_reservation_time
        LIMIT 1
        "#,
    )
    .fetch_optional(&mut *conn)
    .await
    .wrap_err("Failed to load business hours")?;

    let Some(row) = row else {
        tracing::debug!("m_reservation_time is empty");
        return Ok(None);
    };

    Ok(Some(DbBusinessHours {
        start_time: decode_time(&row, "start_time")?,
        end_time: decode_time(&row, "end_time")?,
    }))
}
