mod path;


pub use path::{PathSanitizer, Step};
