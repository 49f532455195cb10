use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

/// Creates the reservation tables when they are missing
///
/// Production databases are provisioned elsewhere; this exists for local
/// setups and the integration tests. Existing tables are left untouched.
pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Meeting rooms
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS m_meetingroom (
            roomId SERIAL PRIMARY KEY,
            roomName VARCHAR(255) NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Business hours, a single row is expected
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS m_reservation_time (
            start_time TIME NOT NULL,
            end_time TIME NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Reservations
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS t_reservation (
            reserveId SERIAL PRIMARY KEY,
            roomId INTEGER NOT NULL REFERENCES m_meetingroom(roomId),
            meetingName VARCHAR(255) NOT NULL,
            date DATE NOT NULL,
            reserver VARCHAR(255) NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            deleteFlg SMALLINT NOT NULL DEFAULT 0,
            updateTime TIMESTAMP WITH TIME ZONE NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_t_reservation_date ON t_reservation(date);")
        .execute(pool)
        .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
