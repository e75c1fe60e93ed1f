mod types;

pub use types::{GeneratorError, TransformError};
