// Copyright 2025 Google LLC.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Routes the `log` crate's macros to the serial logger, for firmware and
//! libraries already written against that facade.

use crate::severity::Severity;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static FACADE: Facade = Facade;

struct Facade;

impl Log for Facade {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        // `log` has no fatal level; its extra verbosity folds into Debug.
        let level = match record.level() {
            Level::Error => Severity::Error,
            Level::Warn => Severity::Warn,
            Level::Info => Severity::Info,
            Level::Debug | Level::Trace => Severity::Debug,
        };
        crate::__log(
            level,
            record.file().unwrap_or("?"),
            record.line().unwrap_or(0),
            record.target(),
            *record.args(),
        );
    }

    fn flush(&self) {}
}

/// Installs the bridge as the `log` crate's logger.
pub fn init(max_level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&FACADE)?;
    log::set_max_level(max_level);
    Ok(())
}
