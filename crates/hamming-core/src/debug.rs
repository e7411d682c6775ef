use core::fmt;
use std::fs::OpenOptions;
use std::sync::Once;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::fmt::format::{self, FormatEvent, FormatFields};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, fmt as tracingfmt};

/// if `cond` is false, logs a warning with your message.
#[macro_export]
macro_rules! assert_warn {
    ($cond:expr, $($arg:tt)+) => {{
        if !$cond {
            tracing::warn!(
                target: module_path!(),
                "assertion warning: `{}` failed: {} at {}:{}",
                stringify!($cond),
                format_args!($($arg)+),
                file!(),
                line!(),
            );
        }
    }};
}

struct AlignedFormatter {
    ansi: bool,
}

/// Turns "crates/hamming-codec/src/decoder.rs" into "[codec] decoder.rs" and
/// "crates/hamming-codec/src/sub/x.rs" into "[codec/sub] x.rs"
fn short_location(file_path: &str) -> String {
    let Some(src_idx) = file_path.find("/src/") else {
        return file_path.to_string();
    };
    let before_src = &file_path[..src_idx];
    let after_src = &file_path[src_idx + 5..];

    let crate_name = match before_src.rfind("hamming-") {
        Some(idx) => &before_src[idx + 8..],
        None => before_src.rsplit('/').next().unwrap_or("unknown"),
    };

    match after_src.rsplit_once('/') {
        Some((module_path, filename)) => {
            let first_module = module_path.split('/').next().unwrap_or("");
            format!("[{}/{}] {}", crate_name, first_module, filename)
        }
        None => format!("[{}] {}", crate_name, after_src),
    }
}

impl<S, N> FormatEvent<S, N> for AlignedFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: format::Writer<'_>, event: &tracing::Event<'_>) -> fmt::Result {
        let metadata = event.metadata();

        let (color_level, color_reset) = if self.ansi {
            match *metadata.level() {
                tracing::Level::ERROR => ("\x1b[31m", "\x1b[0m"),
                tracing::Level::WARN => ("\x1b[33m", "\x1b[0m"),
                tracing::Level::INFO => ("\x1b[32m", "\x1b[0m"),
                tracing::Level::DEBUG => ("\x1b[34m", "\x1b[0m"),
                tracing::Level::TRACE => ("\x1b[35m", "\x1b[0m"),
            }
        } else {
            ("", "")
        };

        // Format: "LEVEL [crate/module] file:line: message"
        let location = format!(
            "{}{:<5}{} {}:{}:",
            color_level,
            metadata.level(),
            color_reset,
            short_location(metadata.file().unwrap_or("unknown")),
            metadata.line().unwrap_or(0)
        );

        let mut message_buf = String::new();
        ctx.field_format().format_fields(format::Writer::new(&mut message_buf), event)?;

        let padding = if self.ansi { 50 } else { 41 };
        write!(writer, "{:<width$} {}", location, message_buf, width = padding)?;
        writeln!(writer)
    }
}

static INIT_LOG: Once = Once::new();

/// Sets up logging with maximum verbosity (trace level)
/// Mainly for unit tests
pub fn setup_logging_verbose() {
    setup_logging(EnvFilter::new("trace"), None);
}

/// Sets up default logging to stdout and optionally, a verbose log file
/// Returns a guard, that needs to be kept alive for logging to file to work
pub fn setup_logging_default(verbose_logfile: Option<String>) -> Option<WorkerGuard> {
    let logfile_and_filter = verbose_logfile.map(|file| (file, get_default_logfile_filter()));
    setup_logging(get_default_stdout_filter(), logfile_and_filter)
}

pub fn get_default_stdout_filter() -> EnvFilter {
    // The codec traces every call; only detected errors show up at debug
    EnvFilter::new("info")
        .add_directive(directive("hamming_codec=info"))
        .add_directive(directive("hamming_tool=info"))
}

fn get_default_logfile_filter() -> EnvFilter {
    EnvFilter::new("debug").add_directive(directive("hamming_codec=trace"))
}

fn directive(s: &str) -> Directive {
    // Only called with the literals above
    s.parse().unwrap_or_else(|_| LevelFilter::INFO.into())
}

/// Sets up logging to stdout and optionally, a verbose log file
/// If an output file is requested, returns Some<WorkerGuard>. Keep this value alive
/// or logging to file may cease working. If no output file is provided, or it cannot
/// be opened, returns None.
fn setup_logging(stdout_filter: EnvFilter, outfile: Option<(String, EnvFilter)>) -> Option<WorkerGuard> {
    let file_writer = outfile.and_then(|(path, filter)| {
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => Some((tracing_appender::non_blocking(file), filter)),
            Err(e) => {
                eprintln!("Failed to open log file {}: {}", path, e);
                None
            }
        }
    });

    match file_writer {
        Some(((writer, guard), outfile_filter)) => {
            INIT_LOG.call_once(|| {
                let file_layer = tracingfmt::layer()
                    .event_format(AlignedFormatter { ansi: false })
                    .with_writer(writer)
                    .with_ansi(false);
                let stdout_layer = tracingfmt::layer().event_format(AlignedFormatter { ansi: true });

                tracing_subscriber::registry()
                    .with(file_layer.with_filter(outfile_filter))
                    .with(stdout_layer.with_filter(stdout_filter))
                    .init();
            });
            Some(guard)
        }
        None => {
            INIT_LOG.call_once(|| {
                let stdout_layer = tracingfmt::layer().event_format(AlignedFormatter { ansi: true });
                tracing_subscriber::registry()
                    .with(stdout_layer.with_filter(stdout_filter))
                    .init();
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_location() {
        assert_eq!(short_location("crates/hamming-codec/src/decoder.rs"), "[codec] decoder.rs");
        assert_eq!(short_location("crates/hamming-core/src/sub/x.rs"), "[core/sub] x.rs");
        assert_eq!(short_location("bins/hamming-tool/src/main.rs"), "[tool] main.rs");
        assert_eq!(short_location("main.rs"), "main.rs");
    }

    #[test]
    fn test_setup_twice() {
        setup_logging_verbose();
        setup_logging_verbose();
        assert_warn!(1 + 1 == 2, "arithmetic");
        tracing::trace!("logging initialised");
    }
}
