use crate::model::data::{ConsumptionUnit, DistanceUnit, VolumeUnit};
use crate::model::errors::ImportErr;
use crate::parser::numeric::coerce_int;

// Коды единиц Fuel Log (explanations.txt из экспорта приложения).
// Неподдерживаемые единицы всегда дают ошибку, приближать их нельзя.

pub fn distance_unit(raw: &str) -> Result<DistanceUnit, ImportErr> {
    match coerce_int(raw) {
        1 => Ok(DistanceUnit::Kilometers),
        2 => Ok(DistanceUnit::Miles),
        3 => Err(ImportErr::unit(format!(
            "Hours as distance units are not supported (code {})",
            raw
        ))),
        _ => Err(ImportErr::unit(format!("Unsupported distance unit: {}", raw))),
    }
}

pub fn volume_unit(raw: &str) -> Result<VolumeUnit, ImportErr> {
    match coerce_int(raw) {
        1 => Ok(VolumeUnit::Litres),
        2 => Ok(VolumeUnit::GallonsUs),
        3 => Ok(VolumeUnit::GallonsUk),
        4 => Err(ImportErr::unit(format!(
            "kWh as volume unit is not supported (code {})",
            raw
        ))),
        5 => Err(ImportErr::unit(format!(
            "Kilogram as volume unit is not supported (code {})",
            raw
        ))),
        6 => Err(ImportErr::unit(format!(
            "Gasoline Gallon Equivalent as volume unit is not supported (code {})",
            raw
        ))),
        _ => Err(ImportErr::unit(format!("Unsupported volume unit: {}", raw))),
    }
}

/// Коды 5-12, 14-17 и 19-48 (l/km, gal/mi, kWh/..., kg/..., gge/..., .../h)
/// известны, но в целевом формате им нет соответствия.
pub fn consumption_unit(raw: &str) -> Result<ConsumptionUnit, ImportErr> {
    match coerce_int(raw) {
        1 => Ok(ConsumptionUnit::LPer100Km),
        2 => Ok(ConsumptionUnit::MpgUs),
        3 => Ok(ConsumptionUnit::MpgUk),
        4 => Ok(ConsumptionUnit::KmPerL),
        13 => Ok(ConsumptionUnit::KmPerGalUs),
        18 => Ok(ConsumptionUnit::KmPerGalUk),
        _ => Err(ImportErr::unit(format!(
            "Unsupported fuel consumption unit: {}",
            raw
        ))),
    }
}
