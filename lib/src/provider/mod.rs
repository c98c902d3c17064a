use std::io::Read;

use clap::ValueEnum;

use crate::backup::BackupBuilder;
use crate::model::data::{FormData, ProviderKind};
use crate::model::errors::CommonErr;

pub mod fuellog;

use fuellog::FuellogProvider;

/// Источник данных, который умеет превращать экспорт стороннего приложения
/// в резервную копию Fuelio.
///
/// Новый формат добавляется отдельной реализацией трейта и вариантом
/// [`ProviderKind`]; сам конвейер записи при этом не меняется.
#[cfg_attr(test, mockall::automock)]
pub trait Converter {
    /// Короткое машинное имя (используется в командной строке).
    fn name(&self) -> &'static str;

    /// Человекочитаемое название источника.
    fn title(&self) -> &'static str;

    /// Имя выходного файла без расширения.
    fn output_file_name(&self) -> String;

    fn stylesheet_location(&self) -> Option<&'static str>;

    /// Конвертирует весь входной поток.
    ///
    /// # Errors
    /// [`CommonErr::Import`] при неверной структуре файла или неподдерживаемых
    /// единицах; в этом случае результат нужно отбросить целиком.
    fn process(&self, input: Box<dyn Read>, form: &FormData) -> Result<BackupBuilder, CommonErr>;
}

pub fn provider_for(kind: ProviderKind) -> Box<dyn Converter> {
    match kind {
        ProviderKind::Fuellog => Box::new(FuellogProvider),
    }
}

/// Все зарегистрированные источники в порядке объявления.
pub fn providers() -> Vec<Box<dyn Converter>> {
    ProviderKind::value_variants()
        .iter()
        .map(|kind| provider_for(*kind))
        .collect()
}
