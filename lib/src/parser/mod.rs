pub mod date;
pub mod io;
pub mod numeric;
pub mod section_reader;
pub mod units;
