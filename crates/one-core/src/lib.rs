pub mod config;
pub mod contract;
pub mod domino;
pub mod error;
pub mod habit;
pub mod io;
pub mod objective;
pub mod paths;
pub mod planning;
pub mod roadmap;
pub mod session;
pub mod state;
pub mod types;

pub use error::{OneError, Result};
