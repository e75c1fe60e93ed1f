pub mod constants;
pub mod density;
pub mod errors;
pub mod generator;
pub mod transform;
pub mod validation;

// 公開API
pub use constants::{DENSITIES, ICON_FILE_NAME, OUTPUT_DIR, SOURCE_DIMENSION, SOURCE_PATH};
pub use density::Density;
pub use errors::{GeneratorError, TransformError};
pub use generator::{generate_icons, GeneratedIcon, GeneratorConfig, Progress};
pub use transform::{decode_image, encode_png, resize_image};
pub use validation::{check_png_support, validate_source};
