pub mod boards;
pub mod catalog;
pub mod ids;
pub mod query;
pub mod session;
pub mod upload;
