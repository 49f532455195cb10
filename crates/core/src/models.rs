pub mod reservation;
pub mod room;
