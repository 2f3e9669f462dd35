use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("report read error: {0}")]
    ReportRead(String),

    #[error("report parse error: {0}")]
    ReportParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
