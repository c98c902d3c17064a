use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};

use crate::model::data::{Cost, CostCategory, FuelLogEntry, Vehicle};
use crate::model::errors::IoErr;

/// Ширина строки-маркера секции: `## Vehicle,,,,,,,,,,,`.
const MARKER_WIDTH: usize = 12;

const VEHICLE_HEADERS: &[&str] = &[
    "Name",
    "Description",
    "DistUnit",
    "FuelUnit",
    "ConsumptionUnit",
    "ImportCSVDateFormat",
    "VIN",
    "Insurance",
    "Plate",
    "Make",
    "Model",
    "Year",
];

const LOG_HEADERS: &[&str] = &[
    "Data",
    "Odo(km)",
    "Fuel(litres)",
    "Full",
    "Price(optional)",
    "l/100km(optional)",
    "latitude(optional)",
    "longitude(optional)",
    "City(optional)",
    "Notes(optional)",
    "Missed",
];

const COST_CATEGORY_HEADERS: &[&str] = &["CostTypeID", "Name", "priority"];

const COST_HEADERS: &[&str] = &[
    "CostTitle",
    "Date",
    "Odo",
    "CostTypeID",
    "Notes",
    "Cost",
    "flag",
    "idR",
    "read",
    "RemindOdo",
    "RemindDate",
];

/// Преобразование сущности в строку резервной копии в каноническом порядке полей.
pub trait ToBackupRecord {
    fn to_record(&self) -> Vec<String>;
}

impl ToBackupRecord for Vehicle {
    fn to_record(&self) -> Vec<String> {
        let mut record = vec![
            self.name.clone(),
            self.description.clone(),
            self.distance_unit.to_string(),
            self.volume_unit.to_string(),
            self.consumption_unit.to_string(),
            self.csv_date_format.clone().unwrap_or_default(),
        ];
        // VIN, Insurance, Plate, Make, Model, Year
        record.resize(VEHICLE_HEADERS.len(), String::new());
        record
    }
}

impl ToBackupRecord for FuelLogEntry {
    fn to_record(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.odometer.to_string(),
            self.fuel.to_string(),
            flag(self.full_fillup),
            self.price.to_string(),
            optional(self.consumption),
            optional(self.latitude),
            optional(self.longitude),
            self.city.clone(),
            self.notes.clone(),
            self.missed_entries.to_string(),
        ]
    }
}

impl ToBackupRecord for CostCategory {
    fn to_record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.priority.to_string(),
        ]
    }
}

impl ToBackupRecord for Cost {
    fn to_record(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.date.clone(),
            self.odometer.to_string(),
            self.category_id.to_string(),
            self.notes.clone(),
            self.amount.to_string(),
            flag(self.flag),
            self.id.to_string(),
            flag(self.read),
            optional(self.remind_odometer),
            self.remind_date.clone().unwrap_or_default(),
        ]
    }
}

fn flag(value: bool) -> String {
    String::from(if value { "1" } else { "0" })
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Накопитель резервной копии Fuelio в памяти.
///
/// Только дописывает: каждая секция — строка-маркер, заголовок и строки
/// данных. Порядок секций определяет вызывающий код.
pub struct BackupBuilder {
    writer: Writer<Vec<u8>>,
    rows_written: usize,
}

impl Default for BackupBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BackupBuilder {
    pub fn new() -> Self {
        let writer = WriterBuilder::new()
            .delimiter(b',')
            .flexible(true)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        BackupBuilder {
            writer,
            rows_written: 0,
        }
    }

    pub fn write_vehicle_header(&mut self) -> Result<(), IoErr> {
        self.write_section("Vehicle", VEHICLE_HEADERS)
    }

    pub fn write_vehicle(&mut self, vehicle: &Vehicle) -> Result<(), IoErr> {
        self.write_entity(vehicle)
    }

    pub fn write_fuel_log_header(&mut self) -> Result<(), IoErr> {
        self.write_section("Log", LOG_HEADERS)
    }

    pub fn write_fuel_log(&mut self, entry: &FuelLogEntry) -> Result<(), IoErr> {
        self.write_entity(entry)
    }

    pub fn write_cost_categories_header(&mut self) -> Result<(), IoErr> {
        self.write_section("CostCategories", COST_CATEGORY_HEADERS)
    }

    pub fn write_cost_category(&mut self, category: &CostCategory) -> Result<(), IoErr> {
        self.write_entity(category)
    }

    pub fn write_costs_header(&mut self) -> Result<(), IoErr> {
        self.write_section("Costs", COST_HEADERS)
    }

    pub fn write_cost(&mut self, cost: &Cost) -> Result<(), IoErr> {
        self.write_entity(cost)
    }

    /// Количество строк данных (без маркеров и заголовков).
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn into_bytes(self) -> Result<Vec<u8>, IoErr> {
        self.writer
            .into_inner()
            .map_err(|e| IoErr::OutputErr { msg: e.to_string() })
    }

    pub fn into_string(self) -> Result<String, IoErr> {
        let bytes = self.into_bytes()?;
        String::from_utf8(bytes).map_err(|e| IoErr::OutputErr { msg: e.to_string() })
    }

    fn write_section(&mut self, name: &str, headers: &[&str]) -> Result<(), IoErr> {
        let mut marker = vec![String::new(); MARKER_WIDTH];
        marker[0] = format!("## {}", name);
        self.write_fields(&marker)?;
        self.write_fields(headers)
    }

    fn write_entity<T: ToBackupRecord>(&mut self, entity: &T) -> Result<(), IoErr> {
        self.write_fields(&entity.to_record())?;
        self.rows_written += 1;
        Ok(())
    }

    fn write_fields<I, F>(&mut self, fields: I) -> Result<(), IoErr>
    where
        I: IntoIterator<Item = F>,
        F: AsRef<[u8]>,
    {
        self.writer
            .write_record(fields)
            .map_err(|e| IoErr::OutputErr { msg: e.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::data::{ConsumptionUnit, DistanceUnit, VolumeUnit};

    fn civic() -> Vehicle {
        Vehicle::new(
            "Honda Civic".into(),
            "note".into(),
            DistanceUnit::Kilometers,
            VolumeUnit::Litres,
            ConsumptionUnit::LPer100Km,
        )
    }

    #[test]
    fn test_vehicle_section() {
        let mut out = BackupBuilder::new();
        out.write_vehicle_header().unwrap();
        out.write_vehicle(&civic()).unwrap();

        let text = out.into_string().unwrap();
        let expected = "## Vehicle,,,,,,,,,,,\n\
Name,Description,DistUnit,FuelUnit,ConsumptionUnit,ImportCSVDateFormat,VIN,Insurance,Plate,Make,Model,Year\n\
Honda Civic,note,kilometers,litres,L_PER_100KM,dd.MM.yyyy,,,,,,\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_fuel_log_row() {
        let mut out = BackupBuilder::new();
        out.write_fuel_log_header().unwrap();
        out.write_fuel_log(&FuelLogEntry {
            date: "2021-2-1".into(),
            odometer: 1000.0,
            fuel: 40.0,
            full_fillup: true,
            price: 50.5,
            notes: "fill".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(out.rows_written(), 1);

        let text = out.into_string().unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "## Log,,,,,,,,,,,");
        assert_eq!(
            lines[1],
            "Data,Odo(km),Fuel(litres),Full,Price(optional),l/100km(optional),latitude(optional),longitude(optional),City(optional),Notes(optional),Missed"
        );
        assert_eq!(lines[2], "2021-2-1,1000,40,1,50.5,,,,,fill,0");
    }

    #[test]
    fn test_fields_quoted_when_needed() {
        let mut out = BackupBuilder::new();
        out.write_fuel_log(&FuelLogEntry {
            date: "2020-1-1".into(),
            full_fillup: false,
            notes: "said \"hi\", then\nleft".into(),
            ..Default::default()
        })
        .unwrap();

        let text = out.into_string().unwrap();
        assert_eq!(
            text,
            "2020-1-1,0,0,0,0,,,,,\"said \"\"hi\"\", then\nleft\",0\n"
        );
    }

    #[test]
    fn test_cost_sections_headers() {
        let mut out = BackupBuilder::new();
        out.write_cost_categories_header().unwrap();
        out.write_cost_category(&CostCategory {
            id: 1,
            name: "Service".into(),
            priority: 0,
        })
        .unwrap();
        out.write_costs_header().unwrap();
        out.write_cost(&Cost {
            title: "Oil".into(),
            date: "2020-01-01".into(),
            odometer: 1200.0,
            category_id: 1,
            notes: String::new(),
            amount: 30.0,
            flag: false,
            id: 7,
            read: true,
            remind_odometer: None,
            remind_date: None,
        })
        .unwrap();

        let text = out.into_string().unwrap();
        let expected = "## CostCategories,,,,,,,,,,,\n\
CostTypeID,Name,priority\n\
1,Service,0\n\
## Costs,,,,,,,,,,,\n\
CostTitle,Date,Odo,CostTypeID,Notes,Cost,flag,idR,read,RemindOdo,RemindDate\n\
Oil,2020-01-01,1200,1,,30,0,7,1,,\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_builder_is_empty() {
        assert_eq!(BackupBuilder::new().into_string().unwrap(), "");
    }
}
