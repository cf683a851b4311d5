mod device;
mod types;

pub use device::*;
pub use types::*;
