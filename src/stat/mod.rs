mod file_type;
mod labels;
mod record;


pub use file_type::{FileType, ModeBits};
pub use labels::{FileTypeLabels, UNKNOWN_LABEL};
pub use record::{BasicStat, BasicStatJson, UnixtimeUs};
