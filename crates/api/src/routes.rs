pub mod health;
pub mod init_data;
pub mod reservation;
