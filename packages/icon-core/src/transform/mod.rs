pub mod decode;
pub mod encode;
pub mod resize;

pub use decode::decode_image;
pub use encode::encode_png;
pub use resize::resize_image;
