use std::fmt;

use clap::ValueEnum;

/// Формат даты, который целевое приложение использует при импорте CSV.
pub const IMPORT_CSV_DATE_FORMAT: &str = "dd.MM.yyyy";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Kilometers,
    Miles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeUnit {
    Litres,
    GallonsUs,
    GallonsUk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumptionUnit {
    LPer100Km,
    MpgUs,
    MpgUk,
    KmPerL,
    KmPerGalUs,
    KmPerGalUk,
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DistanceUnit::Kilometers => "kilometers",
            DistanceUnit::Miles => "miles",
        })
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VolumeUnit::Litres => "litres",
            VolumeUnit::GallonsUs => "gallons_us",
            VolumeUnit::GallonsUk => "gallons_uk",
        })
    }
}

impl fmt::Display for ConsumptionUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConsumptionUnit::LPer100Km => "L_PER_100KM",
            ConsumptionUnit::MpgUs => "MPG_US",
            ConsumptionUnit::MpgUk => "MPG_UK",
            ConsumptionUnit::KmPerL => "KM_PER_L",
            ConsumptionUnit::KmPerGalUs => "KM_PER_GAL_US",
            ConsumptionUnit::KmPerGalUk => "KM_PER_GAL_UK",
        })
    }
}

/// Автомобиль, под которым импортируется журнал заправок.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub name: String,
    pub description: String,
    pub distance_unit: DistanceUnit,
    pub volume_unit: VolumeUnit,
    pub consumption_unit: ConsumptionUnit,
    pub csv_date_format: Option<String>,
}

impl Vehicle {
    pub fn new(
        name: String,
        description: String,
        distance_unit: DistanceUnit,
        volume_unit: VolumeUnit,
        consumption_unit: ConsumptionUnit,
    ) -> Self {
        Vehicle {
            name,
            description,
            distance_unit,
            volume_unit,
            consumption_unit,
            csv_date_format: Some(IMPORT_CSV_DATE_FORMAT.to_string()),
        }
    }
}

/// Одна запись журнала заправок.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FuelLogEntry {
    pub date: String,
    pub odometer: f64,
    pub fuel: f64,
    pub full_fillup: bool,
    pub price: f64,
    pub consumption: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: String,
    pub notes: String,
    pub missed_entries: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostCategory {
    pub id: u32,
    pub name: String,
    pub priority: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cost {
    pub title: String,
    pub date: String,
    pub odometer: f64,
    pub category_id: u32,
    pub notes: String,
    pub amount: f64,
    pub flag: bool,
    pub id: u32,
    pub read: bool,
    pub remind_odometer: Option<f64>,
    pub remind_date: Option<String>,
}

/// Данные формы, которые пользователь передаёт вместе с файлом.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub car_name: Option<String>,
}

/// Зарегистрированные источники данных.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Fuellog,
}
