pub mod io;
pub mod rds;

pub use crate::rds::{generate, generate_with_rng, RdsOptions};

pub type RdsResult<T> = Result<T, RdsError>;

#[derive(thiserror::Error, Debug)]
pub enum RdsError {
    #[error("invalid depth map: {0}")]
    InvalidInput(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
