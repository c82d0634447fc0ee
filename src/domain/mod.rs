pub mod errors;
pub mod ports;
pub mod quote;
pub mod repositories;
pub mod user;
