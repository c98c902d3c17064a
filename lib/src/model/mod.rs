pub mod data;
pub mod errors;
