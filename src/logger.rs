//! # Logger
//! src/logger.rs
//!
//! Backend mínimo para la fachada `log`: escribe en stderr para no mezclar
//! los mensajes de diagnóstico con la salida del programa (stdout).

use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::str::FromStr;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr(),
                "[{:<5}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Parsea un nivel (`off`, `error`, `warn`, `info`, `debug`, `trace`)
pub fn parse_level(level: &str) -> Result<LevelFilter, String> {
    LevelFilter::from_str(level.trim()).map_err(|_| {
        format!(
            "Invalid log level '{}' (expected off, error, warn, info, debug or trace)",
            level
        )
    })
}

/// Instala el logger global con el nivel indicado
///
/// Solo puede llamarse una vez por proceso.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
