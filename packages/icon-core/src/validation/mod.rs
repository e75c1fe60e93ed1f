pub mod capability;
pub mod source;

pub use capability::check_png_support;
pub use source::{is_expected_source_dimensions, validate_source};
