//! Leveled logging over a serial console for bare-metal firmware.
//!
//! The platform owns and initialises the UART; this crate is handed a
//! [`Transmit`] channel once at startup and from then on formats messages
//! into a fixed scratch buffer and writes them out, gated by a runtime
//! severity threshold. Logging is best-effort: transmit failures and
//! overlong messages are absorbed, never surfaced to the caller.
//!
//! The process-wide logger is guarded by a spin mutex. A context that can
//! preempt a lock holder, such as an interrupt handler, must not log.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

mod buffer;
pub mod facade;
mod logger;
mod macros;
mod severity;
mod transmit;

pub use buffer::BUFFER_SIZE;
pub use logger::{Logger, init, set_threshold};
pub use severity::Severity;
pub use transmit::{PolledWriter, Timeout, Transmit, TransmitError};

#[doc(hidden)]
pub use logger::__log;

/// Compile-time switch for the whole facility.
///
/// Building with the `off` feature turns this constant false, at which
/// point every logging macro call site and the logger entry point fold
/// away to nothing, arguments unevaluated.
#[cfg(not(feature = "off"))]
pub const ENABLED: bool = true;
#[cfg(feature = "off")]
pub const ENABLED: bool = false;
