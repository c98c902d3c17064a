use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommonErr {
    /// Ошибка ввода-вывода (открытие входного файла, запись результата и т.д.)
    #[error("io error: {0}")]
    IO(#[from] IoErr),

    /// Ошибка разбора исходного файла или конвертации единиц
    #[error("import error: {0}")]
    Import(#[from] ImportErr),
}

/// Ошибки, связанные с операциями ввода-вывода.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IoErr {
    /// Ошибка при чтении входных данных
    #[error("io -> input error: {msg}")]
    InputErr { msg: String },

    /// Ошибка при записи выходных данных
    #[error("io -> output error: {msg}")]
    OutputErr { msg: String },
}

/// Ошибки конвертации. Любая из них прерывает всю конвертацию,
/// частично записанный результат нужно отбросить.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportErr {
    /// Структура файла не совпадает с ожидаемыми секциями/заголовками
    #[error("invalid file format: {msg}")]
    InvalidFormat { msg: String },

    /// Единица измерения не поддерживается целевым форматом
    #[error("invalid unit: {msg}")]
    InvalidUnit { msg: String },
}

impl ImportErr {
    pub fn format(msg: impl Into<String>) -> Self {
        ImportErr::InvalidFormat { msg: msg.into() }
    }

    pub fn unit(msg: impl Into<String>) -> Self {
        ImportErr::InvalidUnit { msg: msg.into() }
    }
}
