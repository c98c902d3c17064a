use crate::model::data::ProviderKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Converts fuel tracking exports into a Fuelio backup", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resource {
    Console,
    File { path: PathBuf },
}

pub fn parse_resource(s: &str) -> Result<Resource, String> {
    if s == "console" {
        Ok(Resource::Console)
    } else if let Some(path) = s.strip_prefix("file:") {
        if path.is_empty() {
            return Err("File resource needs a path: 'file:<path>'".into());
        }
        Ok(Resource::File { path: path.into() })
    } else {
        Err("Resource must be 'console' or 'file:<path>'".into())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Конвертирует один экспорт в резервную копию Fuelio
    ConvertCommand {
        #[arg(long, required = true, value_parser = parse_resource)]
        from: Resource,

        /// По умолчанию `<имя выходного файла источника>.csv` в текущем каталоге
        #[arg(long, value_parser = parse_resource)]
        to: Option<Resource>,

        #[arg(long, value_enum, default_value_t = ProviderKind::Fuellog)]
        provider: ProviderKind,

        /// Имя автомобиля вместо "марка модель" из файла
        #[arg(long)]
        car_name: Option<String>,
    },

    /// Печатает зарегистрированные источники
    ListProvidersCommand,
}
