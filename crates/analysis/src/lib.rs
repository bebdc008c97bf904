pub mod coverage;
pub mod proximity;
pub mod summary;

pub use coverage::*;
pub use proximity::*;
pub use summary::*;
