use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Write handle sharing a `Logger`'s destination.
///
/// Lets code that expects a plain `io::Write` (encoders, dump routines)
/// target the same sink as the logger without going through the
/// timestamp/level formatting path. Each `write` call takes the logger's
/// lock, but nothing frames the bytes into lines; raw output may interleave
/// with formatted lines at call-boundary granularity.
#[derive(Clone)]
pub struct RawWriter {
    sink: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl RawWriter {
    pub(crate) fn new(sink: Arc<Mutex<Box<dyn Write + Send>>>) -> Self {
        RawWriter { sink }
    }
}

impl Write for RawWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sink.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink.lock().flush()
    }
}
