mod logger;
mod writer;

pub use logger::Logger;
pub use writer::RawWriter;

/// Formats and emits an info-level line through a `Logger`.
///
/// `info!(logger, "hello {}", name)` is equivalent to
/// `logger.info(format_args!("hello {}", name))`.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(format_args!($($arg)*))
    };
}

/// Formats and emits an error-level line through a `Logger`.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(format_args!($($arg)*))
    };
}
