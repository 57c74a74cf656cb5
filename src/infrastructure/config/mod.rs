//! Infrastructure configuration modules.

pub mod journal;
pub mod logging;
pub mod settings;
pub mod storage;

pub use settings::Config;
