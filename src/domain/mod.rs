//! Domain layer - Dictionary records, part-of-speech mapping and archive naming

pub mod pos_map;
pub mod record;
pub mod version;

pub use record::{transform, DictionaryRecord, GoogleEntry, MsimeEntry};
