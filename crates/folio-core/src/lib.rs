pub mod catalog;
pub mod clock;
pub mod constants;
pub mod contact;
pub mod field;
pub mod page;
pub mod pointer;

pub use catalog::*;
pub use clock::*;
pub use constants::*;
pub use contact::*;
pub use field::*;
pub use page::*;
pub use pointer::*;

// Shader bundled as a string constant
pub static FIELD_WGSL: &str = include_str!("../shaders/field.wgsl");
