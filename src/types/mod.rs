//! Value types the document format can represent beyond plain text.

mod filename;
mod tribool;
mod vector;
mod version;

pub use self::filename::FileName;
pub use self::tribool::Tribool;
pub use self::vector::{ParseVectorError, Vector2};
pub use self::version::{ParseVersionError, Version};
