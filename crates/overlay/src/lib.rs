pub mod buffer;
pub mod markers;
pub mod symbology;

pub use buffer::*;
pub use markers::*;
pub use symbology::*;
