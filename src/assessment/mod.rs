pub mod progress;
pub mod storage;
pub mod types;

pub use progress::{is_complete, progress, SectionProgress};
pub use storage::load_responses;
pub use types::{Dimension, ResponseSet, Section, TechnicalAnswer};
