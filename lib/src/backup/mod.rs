pub mod builder;

pub use builder::{BackupBuilder, ToBackupRecord};
