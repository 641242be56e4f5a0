pub mod config;
pub mod contract;
pub mod define;
pub mod domino;
pub mod habit;
pub mod init;
pub mod objective;
pub mod plan;
pub mod session;
pub mod status;
