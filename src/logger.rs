use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use parking_lot::Mutex;

use crate::writer::RawWriter;

type Sink = Box<dyn Write + Send>;
type WriteErrorHook = Box<dyn Fn(&io::Error) + Send + Sync>;

/// Thread-safe two-level logger writing timestamped lines to a single sink.
///
/// Each emitted line has the form `<RFC3339-timestamp> [LEVEL] <message>`.
/// Newlines and carriage returns inside the message are escaped to `\n` and
/// `\r` so a hostile argument cannot inject fake log lines.
pub struct Logger {
    sink: Arc<Mutex<Sink>>,
    on_write_error: Option<WriteErrorHook>,
}

impl Logger {
    pub fn new<W: Write + Send + 'static>(sink: W) -> Self {
        Logger {
            sink: Arc::new(Mutex::new(Box::new(sink))),
            on_write_error: None,
        }
    }

    /// Logger targeting the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Installs a callback invoked when the sink rejects a write.
    ///
    /// Without a hook, write failures are dropped: emission never fails and
    /// never panics, so logging cannot take down caller code.
    pub fn on_write_error<F>(mut self, hook: F) -> Self
    where
        F: Fn(&io::Error) + Send + Sync + 'static,
    {
        self.on_write_error = Some(Box::new(hook));
        self
    }

    /// Emits one info-level line. See the `info!` macro for variadic use.
    pub fn info(&self, args: fmt::Arguments) {
        self.emit("INFO", args);
    }

    /// Emits one error-level line. The level tag is the only difference
    /// from `info`; there is no routing or filtering by severity.
    pub fn error(&self, args: fmt::Arguments) {
        self.emit("ERROR", args);
    }

    fn emit(&self, level: &str, args: fmt::Arguments) {
        let msg = escape(&args.to_string());
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

        let mut sink = self.sink.lock();
        if let Err(e) = writeln!(sink, "{} [{}] {}", timestamp, level, msg) {
            if let Some(hook) = &self.on_write_error {
                hook(&e);
            }
        }
        let _ = sink.flush();
    }

    /// Returns a handle writing raw bytes to the same destination,
    /// bypassing the timestamp, level tag, and escaping.
    pub fn writer(&self) -> RawWriter {
        RawWriter::new(Arc::clone(&self.sink))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::stdout()
    }
}

/// Replaces literal newlines and carriage returns with their two-character
/// escape sequences, keeping every emitted line on a single physical line.
fn escape(msg: &str) -> String {
    msg.replace('\n', "\\n").replace('\r', "\\r")
}
