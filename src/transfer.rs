//! Busy/idle handoff between the updating context and the transfer
//! completion context.
//!
//! The state lives in a [`TransferSignal`], normally a `static`, guarded by
//! `critical-section`. Every transition is a read-modify-write inside one
//! critical section, so a completion raised from an interrupt between a
//! check and a set cannot be lost.

use core::cell::Cell;
use core::fmt::Debug;

use critical_section::Mutex;

/// Starts a background transfer of timing slots to the LED line.
///
/// This is the seam to the timer/PWM/DMA layer. Implementations must return
/// promptly and let the transfer run on; once it finishes they must cause
/// exactly one [`TransferCompleter::notify_complete`] per successful start.
///
/// `slots` keeps its address and contents until that completion, so a DMA
/// channel may keep reading from `slots.as_ptr()` after this call returns.
pub trait TransferStart {
    type Error: Debug;

    fn start_transfer(&mut self, slots: &[u16]) -> Result<(), Self::Error>;
}

/// Transfer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferState {
    /// No transfer outstanding; the timing buffer may be rewritten
    Idle,
    /// A transfer owns the timing buffer
    Busy,
}

/// Shared transfer state of one LED string.
pub struct TransferSignal {
    state: Mutex<Cell<TransferState>>,
}

impl TransferSignal {
    /// Create a new idle signal.
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(Cell::new(TransferState::Idle)),
        }
    }

    /// Get a completion handle for this signal.
    ///
    /// Hand it to the interrupt handler that observes the end of the
    /// transfer.
    pub const fn completer(&self) -> TransferCompleter<'_> {
        TransferCompleter { signal: self }
    }

    pub fn state(&self) -> TransferState {
        critical_section::with(|cs| self.state.borrow(cs).get())
    }

    pub fn is_busy(&self) -> bool {
        self.state() == TransferState::Busy
    }

    /// Claim the timing buffer: Idle -> Busy.
    ///
    /// Returns `false` without changing anything if a transfer is already
    /// outstanding.
    pub fn try_begin(&self) -> bool {
        critical_section::with(|cs| {
            let state = self.state.borrow(cs);
            if state.get() == TransferState::Busy {
                return false;
            }
            state.set(TransferState::Busy);
            true
        })
    }

    /// Spin until the signal is idle, then claim it.
    ///
    /// No timeout: callers that must not block should check
    /// [`TransferSignal::is_busy`] first.
    pub fn wait_and_begin(&self) {
        while !self.try_begin() {
            core::hint::spin_loop();
        }
    }

    /// Mark the outstanding transfer finished: Busy -> Idle.
    ///
    /// Does nothing when already idle, so duplicate completions are harmless.
    pub fn complete(&self) {
        critical_section::with(|cs| {
            let state = self.state.borrow(cs);
            if state.get() == TransferState::Busy {
                state.set(TransferState::Idle);
            }
        });
    }

    /// Release a claim whose transfer never started.
    pub(crate) fn abort(&self) {
        self.complete();
    }
}

impl Default for TransferSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Completion handle for a [`TransferSignal`].
///
/// Lightweight and `Copy`; safe to use from interrupt context since it
/// neither blocks nor allocates.
#[derive(Clone, Copy)]
pub struct TransferCompleter<'a> {
    signal: &'a TransferSignal,
}

impl TransferCompleter<'_> {
    /// Report that the transfer finished.
    pub fn notify_complete(&self) {
        self.signal.complete();
    }
}
