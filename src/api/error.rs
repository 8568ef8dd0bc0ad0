use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} answered with status {status}")]
    Status { status: u16, url: String },
    #[error("cannot build a backend url from '{0}'")]
    Url(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
