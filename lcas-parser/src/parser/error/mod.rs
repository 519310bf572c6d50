pub mod kind;

pub use lcas_error::Error;
