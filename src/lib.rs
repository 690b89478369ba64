use std::fmt::{Display, Formatter};

pub mod dataset;
pub mod geojson;
pub mod html;
pub mod server;

pub type MyResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Debug)]
pub enum MyError {
    DataSourceMissing,
    MalformedHeader,
    MalformedPayload { column: &'static str, reason: String },
    UuidNotFound,
    InvalidDataset { rows: usize },
    Io(std::io::Error),
}

impl Display for MyError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), std::fmt::Error> {
        match self {
            MyError::DataSourceMissing => write!(f, "Data file not found"),
            MyError::MalformedHeader => write!(
                f,
                "Invalid CSV format. Expected: uuid,old_geojson,new_geojson"
            ),
            MyError::MalformedPayload { column, reason } => {
                write!(f, "Invalid JSON in column {}: {}", column, reason)
            }
            MyError::UuidNotFound => write!(f, "UUID not found"),
            MyError::InvalidDataset { rows } => write!(f, "{} invalid rows in dataset", rows),
            MyError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for MyError {}

impl From<std::io::Error> for MyError {
    fn from(err: std::io::Error) -> MyError {
        MyError::Io(err)
    }
}
