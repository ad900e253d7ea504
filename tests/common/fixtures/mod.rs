mod spatial;
mod vehicles;

pub use spatial::*;
pub use vehicles::*;
