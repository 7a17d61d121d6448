pub mod convert;
pub mod session;
pub mod units;

pub use convert::{ConvertError, Converter};
