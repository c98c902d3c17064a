use std::io::Read;

use csv::{ByteRecord, ByteRecordsIntoIter, ReaderBuilder};
use tracing::debug;

use crate::model::errors::ImportErr;

/// Одна разобранная строка CSV.
pub type Row = Vec<String>;

/// Сколько колонок должно быть в заголовке секции.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnCount {
    AtLeast(usize),
    Exactly(usize),
}

impl ColumnCount {
    fn accepts(&self, len: usize) -> bool {
        match *self {
            ColumnCount::AtLeast(n) => len >= n,
            ColumnCount::Exactly(n) => len == n,
        }
    }
}

/// Ожидаемая форма заголовка секции.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSchema {
    pub section: &'static str,
    pub first_column: &'static str,
    pub columns: ColumnCount,
}

/// Последовательный разбор файла, состоящего из секций вида
///
/// ```text
/// ## vehicles
/// make,model,...
/// <строки данных>
/// ## fillups
/// make,model,...
/// <строки данных>
/// ```
///
/// Пустые строки пропускаются. Поля не в UTF-8 (например, заметки в Latin-1)
/// декодируются с заменой неверных байтов на `U+FFFD`. Секция заканчивается
/// концом файла или строкой, первое поле которой начинается с `#`.
pub struct SectionReader<R: Read> {
    records: ByteRecordsIntoIter<R>,
    rows_read: usize,
}

impl<R: Read> SectionReader<R> {
    pub fn new(reader: R) -> Self {
        let records = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(b',')
            .from_reader(reader)
            .into_byte_records();

        SectionReader {
            records,
            rows_read: 0,
        }
    }

    /// Следующая непустая строка или `None` в конце файла.
    pub fn next_row(&mut self) -> Result<Option<Row>, ImportErr> {
        for result in self.records.by_ref() {
            let record = result.map_err(|e| ImportErr::format(format!("CSV parse error: {}", e)))?;
            if is_blank(&record) {
                debug!(line = record.position().map(|p| p.line()), "skipping blank row");
                continue;
            }

            let mut row: Row = record
                .iter()
                .map(|f| String::from_utf8_lossy(f).into_owned())
                .collect();
            if self.rows_read == 0 {
                if let Some(first) = row.first_mut() {
                    if let Some(stripped) = first.strip_prefix('\u{feff}') {
                        *first = stripped.to_string();
                    }
                }
            }
            self.rows_read += 1;
            return Ok(Some(row));
        }
        Ok(None)
    }

    /// Читает строку-маркер секции и проверяет её первое поле.
    pub fn expect_marker(&mut self, marker: &str) -> Result<(), ImportErr> {
        match self.next_row()? {
            Some(row) if row.first().map(String::as_str) == Some(marker) => Ok(()),
            Some(row) => Err(ImportErr::format(format!(
                "Expected section marker '{}', got '{}'",
                marker,
                row.first().map(String::as_str).unwrap_or("")
            ))),
            None => Err(ImportErr::format(format!(
                "Expected section marker '{}', got end of file",
                marker
            ))),
        }
    }

    /// Читает заголовок секции и сверяет его со схемой.
    pub fn expect_header(&mut self, schema: &HeaderSchema) -> Result<Row, ImportErr> {
        let header = self.next_row()?.ok_or_else(|| {
            ImportErr::format(format!("Missing {} header", schema.section))
        })?;

        let first = header.first().map(String::as_str).unwrap_or("");
        if first != schema.first_column {
            return Err(ImportErr::format(format!(
                "Invalid {} header: expected first column '{}', got '{}'",
                schema.section, schema.first_column, first
            )));
        }
        if !schema.columns.accepts(header.len()) {
            return Err(ImportErr::format(format!(
                "Invalid {} header: expected {:?} columns, got {}",
                schema.section,
                schema.columns,
                header.len()
            )));
        }
        Ok(header)
    }

    /// Строки данных текущей секции. Маркер следующей секции поглощается.
    pub fn section_rows(&mut self) -> SectionRows<'_, R> {
        SectionRows {
            reader: self,
            finished: false,
            next_marker: None,
        }
    }
}

pub struct SectionRows<'a, R: Read> {
    reader: &'a mut SectionReader<R>,
    finished: bool,
    next_marker: Option<Row>,
}

impl<R: Read> SectionRows<'_, R> {
    /// Маркер, на котором закончилась секция (`None`, если дошли до конца файла).
    pub fn next_marker(&self) -> Option<&Row> {
        self.next_marker.as_ref()
    }
}

impl<R: Read> Iterator for SectionRows<'_, R> {
    type Item = Result<Row, ImportErr>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.reader.next_row() {
            Ok(Some(row)) if is_marker(&row) => {
                self.finished = true;
                self.next_marker = Some(row);
                None
            }
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Пустой считается только строка из одного поля без содержимого;
/// строка вида `,,,,` остаётся строкой данных.
fn is_blank(record: &ByteRecord) -> bool {
    record.len() == 1 && record[0].trim_ascii().is_empty()
}

fn is_marker(row: &Row) -> bool {
    row.first().is_some_and(|f| f.starts_with('#'))
}
