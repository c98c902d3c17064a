use std::fs::File;
use std::io::{BufReader, Read, stdin};

use tracing::debug;

use crate::backup::BackupBuilder;
use crate::console::commands::Resource;
use crate::model::data::FormData;
use crate::model::errors::{CommonErr, IoErr};
use crate::provider::Converter;

/// Открывает источник данных для чтения.
///
/// # Возвращает
/// * `Ok(Box<dyn Read>)` — stdin или буферизованный файл
/// * `Err(IoErr::InputErr)` — файл не удалось открыть
pub fn open(resource: &Resource) -> Result<Box<dyn Read>, IoErr> {
    match resource {
        Resource::Console => Ok(Box::new(stdin())),
        Resource::File { path } => {
            let file = File::open(path).map_err(|e| IoErr::InputErr {
                msg: format!("{}: {}", path.display(), e),
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Читает ресурс целиком и конвертирует его выбранным источником.
///
/// Входной поток закрывается до возврата, в том числе при ошибке.
pub fn read(
    resource: &Resource,
    provider: &dyn Converter,
    form: &FormData,
) -> Result<BackupBuilder, CommonErr> {
    let input = open(resource)?;
    debug!(provider = provider.name(), ?resource, "processing input");
    provider.process(input, form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::errors::ImportErr;
    use crate::provider::MockConverter;
    use std::io::Write;

    #[test]
    fn test_read_passes_file_content_to_provider() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "## vehicles").unwrap();

        let mut provider = MockConverter::new();
        provider.expect_name().return_const("mock");
        provider
            .expect_process()
            .times(1)
            .returning(|mut input, form| {
                let mut content = String::new();
                input.read_to_string(&mut content).unwrap();
                assert_eq!(content, "## vehicles");
                assert_eq!(form.car_name.as_deref(), Some("Civic"));
                Ok(BackupBuilder::new())
            });

        let resource = Resource::File {
            path: file.path().to_path_buf(),
        };
        let form = FormData {
            car_name: Some("Civic".into()),
        };
        assert!(read(&resource, &provider, &form).is_ok());
    }

    #[test]
    fn test_read_propagates_provider_error() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let mut provider = MockConverter::new();
        provider.expect_name().return_const("mock");
        provider
            .expect_process()
            .returning(|_, _| Err(ImportErr::format("bad").into()));

        let resource = Resource::File {
            path: file.path().to_path_buf(),
        };
        let err = read(&resource, &provider, &FormData::default()).err().unwrap();
        assert_eq!(err, CommonErr::Import(ImportErr::format("bad")));
    }

    #[test]
    fn test_read_file_not_found_returns_error() {
        let mut provider = MockConverter::new();
        provider.expect_process().never();

        let resource = Resource::File {
            path: "/this/path/does/not/exist.csv".into(),
        };
        let result = read(&resource, &provider, &FormData::default());

        assert!(matches!(result, Err(CommonErr::IO(IoErr::InputErr { .. }))));
    }
}
