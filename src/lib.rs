pub mod constants;
pub mod diag;
pub mod error;
pub mod options;
pub mod read;
pub mod text;
pub mod tree;
pub mod types;
pub mod write;

pub use crate::diag::{Message, MessageQueue, MessageSink, NullSink, Severity, Warning};
pub use crate::error::{Error, Result};
pub use crate::options::ReaderOptions;
pub use crate::read::{
    classify, Anomalies, Anomaly, ClassifiedLine, EnumReader, LineError, LineReader, Reader,
    ReadableValue,
};
pub use crate::tree::{read_tree, Node};
pub use crate::types::{FileName, Tribool, Vector2, Version};
pub use crate::write::{WritableValue, Writer};
