mod alphabet;
mod capability;
mod engine;
mod interface;
#[cfg(feature = "long-division")]
mod long_division;
#[cfg(feature = "native-bigint")]
mod native;

pub use alphabet::*;
pub use capability::*;
pub use engine::*;
pub use interface::*;
#[cfg_attr(docsrs, doc(cfg(feature = "long-division")))]
#[cfg(feature = "long-division")]
pub use long_division::*;
#[cfg_attr(docsrs, doc(cfg(feature = "native-bigint")))]
#[cfg(feature = "native-bigint")]
pub use native::*;
