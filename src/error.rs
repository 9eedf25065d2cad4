use thiserror::Error;

pub type CResult<T> = Result<T, ConvertError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("cannot construct an optional box for type {type_name}")]
    TypeConstruction { type_name: String },
}
