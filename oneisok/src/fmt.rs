//! Compact event format for terminal output

use owo_colors::OwoColorize as _;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Prints `<Level>: <message> <fields>` with a colored level prefix
pub struct StatusFormatter;

impl<S, N> FormatEvent<S, N> for StatusFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        match *event.metadata().level() {
            Level::ERROR => write!(writer, "{} ", "Error:".red().bold())?,
            Level::WARN => write!(writer, "{} ", "Warning:".yellow().bold())?,
            Level::INFO => write!(writer, "{} ", "Info:".blue().bold())?,
            Level::DEBUG => write!(writer, "{} ", "Debug:".dimmed())?,
            Level::TRACE => write!(writer, "{} ", "Trace:".dimmed())?,
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
