use std::fs::File;
use std::io::{BufWriter, Write, stdout};

use tracing::debug;

use crate::backup::BackupBuilder;
use crate::console::commands::Resource;
use crate::model::errors::IoErr;

fn write(resource: &Resource) -> Result<Box<dyn Write>, IoErr> {
    match resource {
        Resource::Console => Ok(Box::new(stdout())),
        Resource::File { path } => {
            let file = File::create(path).map_err(|e| IoErr::OutputErr {
                msg: format!("{}: {}", path.display(), e),
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
    }
}

/// Записывает готовую резервную копию в ресурс.
pub fn write_to_resource(builder: BackupBuilder, resource: &Resource) -> Result<(), IoErr> {
    let data_to_write = builder.into_bytes()?;
    let mut output = write(resource)?;

    output
        .write_all(&data_to_write)
        .map_err(|e| IoErr::OutputErr { msg: e.to_string() })?;

    output
        .flush()
        .map_err(|e| IoErr::OutputErr { msg: e.to_string() })?;

    debug!(bytes = data_to_write.len(), ?resource, "backup written");
    Ok(())
}
