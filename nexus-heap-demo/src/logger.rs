use log::{Level, LevelFilter};

/// Installs a stderr logger. `verbose` enables trace output from the
/// collections (capacity changes, rejected inserts).
pub fn install_logger(verbose: bool) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{color_start}[{filename}:{lineno}] {prefix}{message}\x1b[0m",
                color_start = match record.level() {
                    Level::Error => "\x1b[1;31m",
                    Level::Warn => "\x1b[1;33m",
                    _ => "\x1b[34m",
                },
                prefix = match record.level() {
                    Level::Error => "Error: ",
                    Level::Warn => "Warn: ",
                    _ => "",
                },
                filename = record.file().unwrap_or_else(|| record.target()),
                lineno = record.line().unwrap_or(0),
            ))
        })
        .level(if verbose {
            LevelFilter::Trace
        } else {
            LevelFilter::Info
        })
        .chain(std::io::stderr())
        .apply()
}
