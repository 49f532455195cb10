use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    /// A time-of-day arrived in a shape the normalizer cannot read.
    #[error("Unsupported time format: {0}")]
    UnsupportedTimeFormat(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),
}

pub type BookingResult<T> = Result<T, BookingError>;
