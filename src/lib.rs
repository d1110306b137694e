pub mod average;
pub mod color;
pub mod decode;
pub mod error;
pub mod shade;
