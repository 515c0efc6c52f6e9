use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorkboardError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid endpoint '{0}': {1}")]
    InvalidEndpoint(String, String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid grouping '{0}'")]
    InvalidGroupBy(String),

    #[error("invalid ordering '{0}'")]
    InvalidSortBy(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CorkboardError>;
