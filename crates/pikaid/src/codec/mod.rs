mod format;
mod generator;
mod parsed;

pub use format::*;
pub use generator::*;
pub use parsed::*;
