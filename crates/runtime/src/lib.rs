pub mod alert_bus;
pub mod alerts;
pub mod refresh;
pub mod tick;

pub use alert_bus::*;
pub use alerts::*;
pub use refresh::*;
pub use tick::*;
