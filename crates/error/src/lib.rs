use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("environment variable {0} is not set")]
    Configuration(&'static str),
    #[error("news endpoint responded with {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("translate failed: {0}")]
    Translation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
