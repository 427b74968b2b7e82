pub mod analysis;
pub mod capture;
pub mod common;
