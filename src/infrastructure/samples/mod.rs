//! Sample Loaders
//!
//! Turn on-disk sample files into [`Record`](crate::domain::value_objects::Record)s.
//! Both loaders return the full replacement sample set; callers never merge.

mod delimited;
mod json;

pub use self::delimited::{load_csv, DEFAULT_CSV_ROWS};
pub use self::json::load_json;
