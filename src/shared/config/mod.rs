pub mod global;
pub mod model;

pub use global::CONFIG;
pub use model::{FetchConfig, LoggingConfig, Settings};
