use std::io::Write;

use lib::console::commands::Resource;
use lib::model::data::{FormData, ProviderKind};
use lib::model::errors::{CommonErr, ImportErr};
use lib::parser::io::reader::read;
use lib::parser::io::writer::write_to_resource;
use lib::provider::provider_for;

const EXPORT: &str = "## vehicles
make,model,note,distance,volume,consumption
Honda,Civic,note,1,1,1
Ford,Focus,,2,2,2

## fillups
make,model,date,mileage,fuel,price,partial,note
Honda,Civic,1/2/2021,1000,40,50,0,fill
Ford,Focus,2/2/2021,5000,11,20,0,skipped
Honda,Civic,15/02/2021,1500.5,20.25,26.1,1,\"half, then \"\"more\"\"\"
";

const EXPECTED: &str = "## Vehicle,,,,,,,,,,,
Name,Description,DistUnit,FuelUnit,ConsumptionUnit,ImportCSVDateFormat,VIN,Insurance,Plate,Make,Model,Year
Honda Civic,note,kilometers,litres,L_PER_100KM,dd.MM.yyyy,,,,,,
## Log,,,,,,,,,,,
Data,Odo(km),Fuel(litres),Full,Price(optional),l/100km(optional),latitude(optional),longitude(optional),City(optional),Notes(optional),Missed
2021-2-1,1000,40,1,50,,,,,fill,0
2021-02-15,1500.5,20.25,0,26.1,,,,,\"half, then \"\"more\"\"\",0
## CostCategories,,,,,,,,,,,
CostTypeID,Name,priority
## Costs,,,,,,,,,,,
CostTitle,Date,Odo,CostTypeID,Notes,Cost,flag,idR,read,RemindOdo,RemindDate
";

fn input_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn converts_fuel_log_export_into_backup_file() {
    let input = input_file(EXPORT);
    let out_dir = tempfile::tempdir().unwrap();
    let out_path = out_dir.path().join("Fuel Log.csv");

    let provider = provider_for(ProviderKind::Fuellog);
    let from = Resource::File {
        path: input.path().to_path_buf(),
    };
    let builder = match read(&from, provider.as_ref(), &FormData::default()) {
        Ok(builder) => builder,
        Err(e) => panic!("conversion failed: {}", e),
    };
    assert_eq!(builder.rows_written(), 3);

    write_to_resource(builder, &Resource::File { path: out_path.clone() }).unwrap();
    assert_eq!(std::fs::read_to_string(&out_path).unwrap(), EXPECTED);
}

#[test]
fn rejects_vehicle_with_hours_as_distance() {
    let input = input_file(
        "## vehicles\nmake,model,note,distance,volume,consumption\nJohn Deere,5055E,,3,1,1\n",
    );
    let provider = provider_for(ProviderKind::Fuellog);
    let from = Resource::File {
        path: input.path().to_path_buf(),
    };

    match read(&from, provider.as_ref(), &FormData::default()) {
        Err(CommonErr::Import(ImportErr::InvalidUnit { msg })) => assert!(msg.contains('3')),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("conversion should fail"),
    }
}
