use std::path::PathBuf;

use lib::console::commands::Resource;
use lib::model::data::{FormData, ProviderKind};
use lib::model::errors::CommonErr;
use lib::parser::io::reader::read;
use lib::parser::io::writer::write_to_resource;
use lib::provider::{Converter, provider_for};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct ConvertLogicResult {
    pub output: Resource,
}

#[derive(Error, Clone, Debug)]
pub enum ConvertLogicErr {
    #[error("{err}")]
    Prepare { err: CommonErr },
}

/// Выходной ресурс по умолчанию: `<имя выходного файла>.csv` в текущем каталоге.
pub fn default_output(provider: &dyn Converter) -> Resource {
    Resource::File {
        path: PathBuf::from(format!("{}.csv", provider.output_file_name())),
    }
}

pub fn process_convert_logic(
    from: &Resource,
    to: Option<&Resource>,
    kind: ProviderKind,
    form: &FormData,
) -> Result<ConvertLogicResult, ConvertLogicErr> {
    let provider = provider_for(kind);

    // ввод читается и закрывается целиком до записи результата
    let backup = read(from, provider.as_ref(), form)
        .map_err(|err| ConvertLogicErr::Prepare { err })?;

    let output = to.cloned().unwrap_or_else(|| default_output(provider.as_ref()));
    write_to_resource(backup, &output)
        .map_err(|err| ConvertLogicErr::Prepare { err: err.into() })?;

    Ok(ConvertLogicResult { output })
}
