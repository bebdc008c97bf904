pub mod facility;
pub mod ingest;
pub mod rainfall;
pub mod zone;

pub use facility::*;
pub use rainfall::*;
pub use zone::*;
