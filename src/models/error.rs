use crate::models::LogicalField;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Schema Error: no column found for {field} under any known header name")]
    Schema { field: LogicalField },
    #[error("Parser Error: {0}")]
    Parser(String),
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::Parser(err.to_string())
    }
}
