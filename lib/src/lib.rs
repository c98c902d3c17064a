//! Конвертер экспортов приложений учёта топлива в резервную копию Fuelio.

pub mod backup;
pub mod console;
pub mod model;
pub mod parser;
pub mod provider;
