//! Импорт экспорта приложения Fuel Log.
//!
//! Файл состоит из двух секций: `## vehicles` (автомобили и их единицы
//! измерения) и секции заправок. Импортируется ровно один автомобиль:
//! первый с километрами/литрами/л на 100 км, иначе первый в файле.

use std::collections::HashMap;
use std::io::Read;

use tracing::{debug, info, warn};

use crate::backup::BackupBuilder;
use crate::model::data::{FormData, FuelLogEntry, Vehicle};
use crate::model::errors::{CommonErr, ImportErr};
use crate::parser::date::normalize_date;
use crate::parser::numeric::coerce_f64;
use crate::parser::section_reader::{ColumnCount, HeaderSchema, Row, SectionReader};
use crate::parser::units::{consumption_unit, distance_unit, volume_unit};
use crate::provider::Converter;

const VEHICLES_MARKER: &str = "## vehicles";

// "make","model","note","distance","volume","consumption"
const VEHICLES_HEADER: HeaderSchema = HeaderSchema {
    section: "vehicles",
    first_column: "make",
    columns: ColumnCount::AtLeast(6),
};

// "make","model","date","mileage","fuel","price","partial","note"
const FILLUPS_HEADER: HeaderSchema = HeaderSchema {
    section: "fillups",
    first_column: "make",
    columns: ColumnCount::Exactly(8),
};

/// Коды км / л / л на 100 км.
const PREFERRED_UNITS: [&str; 3] = ["1", "1", "1"];

#[derive(Debug, Clone, Copy, Default)]
pub struct FuellogProvider;

impl Converter for FuellogProvider {
    fn name(&self) -> &'static str {
        "fuellog"
    }

    fn title(&self) -> &'static str {
        "Fuel Log"
    }

    fn output_file_name(&self) -> String {
        self.title().to_string()
    }

    fn stylesheet_location(&self) -> Option<&'static str> {
        None
    }

    fn process(&self, input: Box<dyn Read>, form: &FormData) -> Result<BackupBuilder, CommonErr> {
        let mut reader = SectionReader::new(input);
        let mut out = BackupBuilder::new();

        reader.expect_marker(VEHICLES_MARKER)?;

        let registry = read_vehicles(&mut reader)?;
        let (key, vehicle) = select_vehicle(&registry, form)?;
        out.write_vehicle_header()?;
        out.write_vehicle(&vehicle)?;

        let imported = import_fillups(&mut reader, &mut out, &key)?;

        // у Fuel Log нет расходов, секции остаются пустыми
        out.write_cost_categories_header()?;
        out.write_costs_header()?;

        info!(vehicle = %vehicle.name, fillups = imported, "fuel log import finished");
        Ok(out)
    }
}

/// Автомобили из секции `## vehicles`.
///
/// Содержимое по ключу перезаписывается последней строкой, а выбор
/// автомобиля зависит только от порядка первого появления ключей.
#[derive(Debug, Default)]
struct VehicleRegistry {
    order: Vec<String>,
    rows: HashMap<String, Row>,
    preferred: Option<String>,
}

impl VehicleRegistry {
    fn insert(&mut self, row: Row) {
        let key = vehicle_key(&row);

        if self.preferred.is_none() && has_preferred_units(&row) {
            self.preferred = Some(key.clone());
        }
        if !self.rows.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.rows.insert(key, row);
    }

    fn selected_key(&self) -> Option<&str> {
        self.preferred
            .as_deref()
            .or_else(|| self.order.first().map(String::as_str))
    }

    fn get(&self, key: &str) -> Option<&Row> {
        self.rows.get(key)
    }

    fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn field(row: &Row, idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

fn vehicle_key(row: &Row) -> String {
    format!("{}.{}", field(row, 0), field(row, 1))
}

fn has_preferred_units(row: &Row) -> bool {
    (3..6)
        .map(|idx| field(row, idx))
        .eq(PREFERRED_UNITS.iter().copied())
}

fn read_vehicles<R: Read>(reader: &mut SectionReader<R>) -> Result<VehicleRegistry, ImportErr> {
    reader.expect_header(&VEHICLES_HEADER)?;

    let mut registry = VehicleRegistry::default();
    for row in reader.section_rows() {
        registry.insert(row?);
    }

    if registry.is_empty() {
        return Err(ImportErr::format("No vehicles in file"));
    }
    Ok(registry)
}

fn select_vehicle(registry: &VehicleRegistry, form: &FormData) -> Result<(String, Vehicle), ImportErr> {
    if registry.preferred.is_none() {
        warn!("no vehicle uses kilometers/litres/l per 100km, importing the first one");
    }

    let key = registry
        .selected_key()
        .ok_or_else(|| ImportErr::format("No vehicles in file"))?
        .to_string();
    let row = registry
        .get(&key)
        .ok_or_else(|| ImportErr::format(format!("Vehicle '{}' is missing", key)))?;

    let mut vehicle = build_vehicle(row)?;
    if let Some(name) = form.car_name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        vehicle.name = name.to_string();
    }

    info!(key = %key, vehicle = %vehicle.name, "selected vehicle");
    Ok((key, vehicle))
}

fn build_vehicle(row: &Row) -> Result<Vehicle, ImportErr> {
    let name = format!("{} {}", field(row, 0), field(row, 1)).trim().to_string();
    Ok(Vehicle::new(
        name,
        field(row, 2).to_string(),
        distance_unit(field(row, 3))?,
        volume_unit(field(row, 4))?,
        consumption_unit(field(row, 5))?,
    ))
}

fn import_fillups<R: Read>(
    reader: &mut SectionReader<R>,
    out: &mut BackupBuilder,
    selected_key: &str,
) -> Result<usize, CommonErr> {
    reader.expect_header(&FILLUPS_HEADER)?;
    out.write_fuel_log_header()?;

    let mut imported = 0;
    let mut rows = reader.section_rows();
    for row in rows.by_ref() {
        let row = row?;
        if vehicle_key(&row) != selected_key {
            debug!(key = %vehicle_key(&row), "skipping fillup of another vehicle");
            continue;
        }
        out.write_fuel_log(&build_fuel_log_entry(&row))?;
        imported += 1;
    }
    if let Some(marker) = rows.next_marker() {
        warn!(
            marker = %marker.first().map(String::as_str).unwrap_or(""),
            "fillups section ended at a marker row, remaining rows are ignored"
        );
    }
    Ok(imported)
}

fn build_fuel_log_entry(row: &Row) -> FuelLogEntry {
    FuelLogEntry {
        date: normalize_date(field(row, 2)),
        odometer: coerce_f64(field(row, 3)),
        fuel: coerce_f64(field(row, 4)),
        price: coerce_f64(field(row, 5)),
        // в Fuel Log "1" означает неполную заправку
        full_fillup: field(row, 6) != "1",
        notes: field(row, 7).to_string(),
        ..Default::default()
    }
}
