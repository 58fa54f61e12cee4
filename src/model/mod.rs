pub mod aesthetic;
pub mod board;
pub mod config;
pub mod pin;
pub mod seed;

pub use aesthetic::*;
pub use board::*;
pub use config::*;
pub use pin::*;
