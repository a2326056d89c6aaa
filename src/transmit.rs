// Copyright 2025 Google LLC.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use embedded_io::{Write, WriteReady};

/// Upper bound on the readiness polls spent inside one [`Transmit::transmit`]
/// call before the write is abandoned.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Timeout(pub u32);

impl Timeout {
    pub const DEFAULT: Self = Timeout(100_000);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransmitError {
    /// The poll budget ran out before the channel accepted every byte.
    TimedOut,
    /// The underlying channel reported an error or stopped accepting data.
    Failed,
}

/// A serial transmit channel.
///
/// The logger treats delivery as fire-and-forget and discards the outcome;
/// the `Result` exists so adapters and tests can observe it.
pub trait Transmit {
    fn transmit(&mut self, bytes: &[u8], timeout: Timeout) -> Result<(), TransmitError>;
}

impl<T: Transmit + ?Sized> Transmit for &mut T {
    fn transmit(&mut self, bytes: &[u8], timeout: Timeout) -> Result<(), TransmitError> {
        (**self).transmit(bytes, timeout)
    }
}

/// Adapts a serial driver to [`Transmit`] by polling its readiness.
///
/// Works with any driver exposing the `embedded_io` write traits (PL011,
/// 16550, ...). Each transmit call spends at most `timeout` readiness
/// polls across the whole byte sequence, then gives up.
pub struct PolledWriter<W> {
    inner: W,
}

impl<W: Write + WriteReady> PolledWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write + WriteReady> Transmit for PolledWriter<W> {
    fn transmit(&mut self, bytes: &[u8], timeout: Timeout) -> Result<(), TransmitError> {
        let mut budget = timeout.0;
        let mut remaining = bytes;
        while !remaining.is_empty() {
            while !self.inner.write_ready().map_err(|_| TransmitError::Failed)? {
                if budget == 0 {
                    return Err(TransmitError::TimedOut);
                }
                budget -= 1;
            }
            match self.inner.write(remaining) {
                Ok(0) | Err(_) => return Err(TransmitError::Failed),
                Ok(n) => remaining = &remaining[n..],
            }
        }
        self.inner.flush().map_err(|_| TransmitError::Failed)
    }
}
