//! # Meeting Room Core
//!
//! Domain types shared by the database and API crates: the error taxonomy,
//! time-of-day normalization, the 30-minute slot generator and the wire
//! models served over HTTP.

pub mod errors;
pub mod models;
pub mod slots;
pub mod time;
