// SPDX-License-Identifier: Apache-2.0 OR MIT
// Process-wide facility state: lifecycle refcount, global log slot,
// global filter tables, stderr mirroring, flush-all

use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock, Weak};

use crate::component::Component;
use crate::error::Result;
use crate::log::{FilterTable, Log, LogHandle, UNSET};
use crate::severity::Severity;

/// Reference count of initialize() calls; zero means uninitialized.
static INIT_REFCOUNT: AtomicUsize = AtomicUsize::new(0);

/// Global filter tables, consulted by logs without a per-log setting.
static GLOBAL_FILTERS: FilterTable = FilterTable::new();

/// Process-global log, the fallback when a thread has no associated log.
static GLOBAL_LOG: RwLock<Option<LogHandle>> = RwLock::new(None);

/// Every live log, for flush-all and forced shutdown.
static LOG_REGISTRY: Mutex<Vec<Weak<Log>>> = Mutex::new(Vec::new());

/// Minimum severity mirrored to stderr; UNSET disables mirroring.
static STDERR_MIRROR_LEVEL: AtomicU8 = AtomicU8::new(UNSET);

/// Initialize the process-wide facility.
///
/// Reference-counted: may be called once per independent user (e.g. two
/// libraries in one process); each successful call must be balanced by one
/// [`shutdown`].
pub fn initialize() -> Result<()> {
    INIT_REFCOUNT.fetch_add(1, Ordering::AcqRel);
    Ok(())
}

/// Shut down the process-wide facility.
///
/// Decrements the reference count; only when it reaches zero are global
/// resources released, after flushing and closing every open file sink.
/// `force` bypasses the count for abnormal teardown.
pub fn shutdown(force: bool) {
    let release = if force {
        INIT_REFCOUNT.store(0, Ordering::Release);
        true
    } else {
        // Saturating: an unbalanced shutdown must not wrap the count.
        INIT_REFCOUNT
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| {
                Some(count.saturating_sub(1))
            })
            .unwrap_or(0)
            <= 1
    };

    if release {
        flush_all_file_logs();
        *GLOBAL_LOG.write().unwrap() = None;
        LOG_REGISTRY.lock().unwrap().clear();
        GLOBAL_FILTERS.clear();
        STDERR_MIRROR_LEVEL.store(UNSET, Ordering::Relaxed);
    }
}

/// True when at least one initialize() has not yet been balanced.
pub fn is_initialized() -> bool {
    INIT_REFCOUNT.load(Ordering::Acquire) > 0
}

/// Install (or clear) the process-global log.
pub fn set_global_log(handle: Option<LogHandle>) {
    *GLOBAL_LOG.write().unwrap() = handle;
}

/// Current process-global log, if one is installed.
pub fn global_log() -> Option<LogHandle> {
    GLOBAL_LOG.read().unwrap().clone()
}

/// Enable or disable a component globally.
///
/// Affects every log without a per-log setting for that component,
/// including logs created before this call.
pub fn component_enable_global(component: Component, enable: bool) {
    GLOBAL_FILTERS.set_enabled(component, enable);
}

/// Set the global minimum severity for a component.
pub fn level_set_global(component: Component, level: Severity) {
    GLOBAL_FILTERS.set_level(component, level);
}

/// Remove the global enable setting for a component (fall back to enabled).
pub fn component_enable_clear_global(component: Component) {
    GLOBAL_FILTERS.clear_enabled(component);
}

/// Remove the global severity setting for a component (fall back to each
/// log's default severity).
pub fn level_clear_global(component: Component) {
    GLOBAL_FILTERS.clear_level(component);
}

pub(crate) fn global_component_enabled(component: Component) -> Option<bool> {
    GLOBAL_FILTERS.enabled(component)
}

pub(crate) fn global_level(component: Component) -> Option<Severity> {
    GLOBAL_FILTERS.level(component)
}

/// Mirror entries at or above `level` to stderr, in addition to each log's
/// own sink. Disabled when `enable` is false.
pub fn stderr_enable(enable: bool, level: Severity) {
    let value = if enable { level.as_u8() } else { UNSET };
    STDERR_MIRROR_LEVEL.store(value, Ordering::Relaxed);
}

pub(crate) fn stderr_mirrors(severity: Severity) -> bool {
    match Severity::from_u8(STDERR_MIRROR_LEVEL.load(Ordering::Relaxed)) {
        Some(threshold) => severity >= threshold,
        None => false,
    }
}

/// Register a newly created log for flush-all and forced shutdown.
pub(crate) fn register_log(handle: &LogHandle) {
    let mut registry = LOG_REGISTRY.lock().unwrap();
    registry.retain(|weak| weak.strong_count() > 0);
    registry.push(std::sync::Arc::downgrade(handle));
}

/// Drop the registry entry for a destroyed log.
pub(crate) fn unregister_log(handle: &LogHandle) {
    let target = std::sync::Arc::as_ptr(handle);
    LOG_REGISTRY
        .lock()
        .unwrap()
        .retain(|weak| weak.strong_count() > 0 && weak.as_ptr() != target);
}

/// Flush every live file-backed log.
pub fn flush_all_file_logs() {
    let logs: Vec<LogHandle> = {
        let registry = LOG_REGISTRY.lock().unwrap();
        registry.iter().filter_map(Weak::upgrade).collect()
    };
    for log in logs {
        if log.is_file() {
            log.flush();
        }
    }
}
