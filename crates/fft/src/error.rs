use ark_serialize::SerializationError;
use field::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("domain size must be positive")]
    EmptyDomain,
    #[error(
        "required root of unity does not exist: size {min_size} rounds up to 2^{log_size}, \
         field 2-adicity is {max_order_root}"
    )]
    TooLarge {
        min_size: usize,
        log_size: u32,
        max_order_root: u32,
    },
    #[error("{0} is not invertible")]
    NotInvertible(&'static str),
    #[error("cardinality {0} is not a power of two")]
    InvalidCardinality(u64),
    #[error("generator square root does not have order 2 * {cardinality}")]
    InvalidGenerator { cardinality: usize },
    #[error("serialization error: {0}")]
    Serialization(#[from] SerializationError),
    #[error("field configuration error: {0}")]
    Config(#[from] ConfigError),
}
