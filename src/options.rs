use std::fmt;
use std::sync::Arc;

use crate::diag::{MessageSink, NullSink};
use crate::types::Version;

/// Options for constructing a [`Reader`](crate::Reader).
#[derive(Clone)]
pub struct ReaderOptions {
    /// Lenient mode: suppress anomaly warnings (space indentation,
    /// missing separators, unexpected keys) and skip unrecognized
    /// structure silently.
    pub lenient: bool,
    /// Version of the running application. When set, a document declaring
    /// a newer version queues a non-fatal notice on the sink.
    pub app_version: Option<Version>,
    /// Receiver for out-of-band messages (the aggregated warning report,
    /// the newer-version notice).
    pub sink: Arc<dyn MessageSink>,
}

impl ReaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    pub fn with_app_version(mut self, version: Version) -> Self {
        self.app_version = Some(version);
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn MessageSink>) -> Self {
        self.sink = sink;
        self
    }
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            lenient: false,
            app_version: None,
            sink: Arc::new(NullSink),
        }
    }
}

impl fmt::Debug for ReaderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReaderOptions")
            .field("lenient", &self.lenient)
            .field("app_version", &self.app_version)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_builder() {
        let options = ReaderOptions::new()
            .with_lenient(true)
            .with_app_version(Version::new(2, 0, 0));
        assert!(options.lenient);
        assert_eq!(options.app_version, Some(Version::new(2, 0, 0)));
    }

    #[rstest::rstest]
    fn test_default_is_strict_without_version_check() {
        let options = ReaderOptions::default();
        assert!(!options.lenient);
        assert_eq!(options.app_version, None);
    }
}
