// Copyright 2025 Google LLC.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use crate::buffer::Scratch;
use crate::severity::Severity;
use crate::transmit::{Timeout, Transmit};
use core::fmt::{self, Write};
use spin::mutex::SpinMutex;

/// Bound on each of the three writes a logging call performs.
const TRANSMIT_TIMEOUT: Timeout = Timeout::DEFAULT;

static LOGGER: SpinMutex<Option<Logger<&'static mut (dyn Transmit + Send)>>> =
    SpinMutex::new(None);

/// A severity-filtered logger owning a scratch buffer and a transmit
/// channel.
///
/// Most firmware uses the process-wide instance through [`init`] and the
/// logging macros; constructing one directly is the test seam, and suits
/// a single context that wants its own channel.
pub struct Logger<T> {
    threshold: Severity,
    scratch: Scratch,
    tx: T,
}

impl<T: Transmit> Logger<T> {
    /// Wraps `tx`, emitting everything from [`Severity::Debug`] up.
    pub fn new(tx: T) -> Self {
        Self {
            threshold: Severity::Debug,
            scratch: Scratch::new(),
            tx,
        }
    }

    /// Sets the minimum severity that produces output. Takes effect on the
    /// next logging call.
    pub fn set_threshold(&mut self, threshold: Severity) {
        self.threshold = threshold;
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    pub fn enabled(&self, level: Severity) -> bool {
        level >= self.threshold
    }

    /// Formats and transmits one message: level tag, then
    /// `[<file>:<line>][<function>]:<message>`, then a newline, as three
    /// sequential writes. Below the threshold this is a no-op. Transmit
    /// outcomes are discarded; a logging call never fails.
    pub fn log(
        &mut self,
        level: Severity,
        file: &str,
        line: u32,
        function: &str,
        args: fmt::Arguments,
    ) {
        if !self.enabled(level) {
            return;
        }
        let file = file.rsplit(['/', '\\']).next().unwrap_or(file);
        self.scratch.clear();
        let _ = write!(self.scratch, "[{file}:{line}][{function}]:");
        let _ = self.scratch.write_fmt(args);
        let _ = self.tx.transmit(level.tag().as_bytes(), TRANSMIT_TIMEOUT);
        let _ = self.tx.transmit(self.scratch.as_bytes(), TRANSMIT_TIMEOUT);
        let _ = self.tx.transmit(b"\n", TRANSMIT_TIMEOUT);
    }
}

/// Installs the process-wide logger over the given channel.
///
/// The channel is owned by platform bring-up code and lives for the rest
/// of the program; call this once before the first logging macro. Macros
/// invoked earlier are silently dropped.
pub fn init(tx: &'static mut (dyn Transmit + Send), threshold: Severity) {
    let mut logger = Logger::new(tx);
    logger.set_threshold(threshold);
    LOGGER.lock().replace(logger);
}

/// Sets the minimum severity emitted by the process-wide logger.
pub fn set_threshold(threshold: Severity) {
    if let Some(logger) = LOGGER.lock().as_mut() {
        logger.set_threshold(threshold);
    }
}

#[doc(hidden)]
pub fn __log(level: Severity, file: &str, line: u32, function: &str, args: fmt::Arguments) {
    if !crate::ENABLED {
        return;
    }
    if let Some(logger) = LOGGER.lock().as_mut() {
        logger.log(level, file, line, function, args);
    }
}
