use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

/// Logger which writes diagnostics to stderr, kept apart from the shell's own output
pub struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let _ = writeln!(std::io::stderr(), "{}", format_record(record));
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn format_record(record: &Record) -> String {
    format!("[{} {}] {}", record.level(), record.target(), record.args())
}

/// Installs the logger; a second call leaves the first level in place
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use log::Level;

    use super::*;

    #[test]
    fn formats_level_target_and_message() {
        let line = format_record(
            &Record::builder()
                .args(format_args!("launched 'ls' as process {}", 42))
                .level(Level::Debug)
                .target("jjsh::exec::launcher")
                .build(),
        );
        assert_eq!(line, "[DEBUG jjsh::exec::launcher] launched 'ls' as process 42");
    }
}
