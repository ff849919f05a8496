// SPDX-License-Identifier: Apache-2.0 OR MIT
// Thread-affinity routing: per-thread default log via thread-local storage

use std::cell::RefCell;

use crate::error::{LogError, Result};
use crate::facility;
use crate::log::LogHandle;

thread_local! {
    /// This thread's current log association. Mutated only by the owning
    /// thread, so there is no cross-thread contention.
    static THREAD_LOG: RefCell<Option<LogHandle>> = const { RefCell::new(None) };
}

/// Associate the calling thread with a log.
///
/// Subsequent calls from this thread that omit an explicit handle resolve to
/// it. Fails when the facility has not been initialized.
pub fn thread_log_set(handle: LogHandle) -> Result<()> {
    if !facility::is_initialized() {
        return Err(LogError::NotInitialized);
    }
    THREAD_LOG.with(|slot| *slot.borrow_mut() = Some(handle));
    Ok(())
}

/// Clear the calling thread's log association.
///
/// Subsequent resolution falls back to the global log if one exists, else to
/// raw stdout writing that bypasses all filtering.
pub fn thread_log_unset() {
    THREAD_LOG.with(|slot| *slot.borrow_mut() = None);
}

/// Resolve the calling thread's current log.
///
/// Returns the thread's association if set, otherwise the global log.
/// Returns None when the facility was never initialized, which distinguishes
/// "never initialized" from "deliberately unset with no global log".
pub fn thread_log_get() -> Option<LogHandle> {
    if !facility::is_initialized() {
        return None;
    }
    THREAD_LOG
        .with(|slot| slot.borrow().clone())
        .or_else(facility::global_log)
}
