use thiserror::Error;

#[derive(Error, Debug)]
pub enum Gf127Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("arithmetic error: {0}")]
    ArithmeticError(String),
}

pub type Result<T> = std::result::Result<T, Gf127Error>;
