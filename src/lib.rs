pub mod application;
pub mod cli;
pub mod domain;

pub use application::VendingService;
pub use domain::*;
