// SPDX-License-Identifier: Apache-2.0 OR MIT
// Call-site macros: thread-routed and handle-directed emission, multiline
// sessions, sampled logging

/// Log a message to the calling thread's resolved log.
///
/// Resolution order: the thread's associated log, else the global log, else
/// raw stdout. Provenance (module path and line) is attached automatically.
///
/// # Examples
/// ```ignore
/// log_thread!(Severity::Warning, "queue depth {} over limit", depth);
/// ```
#[macro_export]
macro_rules! log_thread {
    ($severity:expr, $($arg:tt)*) => {
        $crate::log_thread_component!($severity, $crate::Component::Generic, $($arg)*)
    };
}

/// Log a message for a specific component to the calling thread's resolved
/// log.
///
/// # Examples
/// ```ignore
/// log_thread_component!(Severity::Debug, Component::Probe, "probe state {state:?}");
/// ```
#[macro_export]
macro_rules! log_thread_component {
    ($severity:expr, $component:expr, $($arg:tt)*) => {
        $crate::emit(
            $crate::thread_log_get().as_ref(),
            $component,
            $severity,
            Some($crate::Provenance::new(module_path!(), line!())),
            format_args!($($arg)*),
        )
    };
}

/// Log a message to an explicit log handle.
///
/// # Examples
/// ```ignore
/// log_handle!(connection_log, Severity::Info, "payload accepted");
/// ```
#[macro_export]
macro_rules! log_handle {
    ($handle:expr, $severity:expr, $($arg:tt)*) => {
        $crate::emit(
            Some(&$handle),
            $crate::Component::Generic,
            $severity,
            Some($crate::Provenance::new(module_path!(), line!())),
            format_args!($($arg)*),
        )
    };
}

/// Begin a multiline session targeting the calling thread's resolved log.
///
/// # Examples
/// ```ignore
/// let mut session = multiline_begin!(Severity::Info);
/// session.append(format_args!("table:"));
/// session.append(format_args!("  {row}"));
/// session.end();
/// ```
#[macro_export]
macro_rules! multiline_begin {
    ($severity:expr) => {
        $crate::multiline_begin!($severity, $crate::Component::Generic)
    };
    ($severity:expr, $component:expr) => {
        $crate::MultilineSession::begin(
            $crate::thread_log_get().as_ref(),
            $component,
            $severity,
            Some(module_path!()),
            line!(),
        )
    };
}

/// Conditionally log every Nth occurrence to the global log.
///
/// The counter is static per call site, incremented atomically each time the
/// condition holds. When the interval is greater than 1, each emission is
/// preceded by an Info line reporting the occurrences observed so far.
///
/// # Examples
/// ```ignore
/// log_when!(Severity::Warning, queue_full, 100, "ingress queue full");
/// ```
#[macro_export]
macro_rules! log_when {
    ($severity:expr, $condition:expr, $every:expr, $($arg:tt)*) => {
        $crate::sampled_log_to!($crate::global_log(), $severity, $condition, $every, $($arg)*)
    };
}

/// Conditionally log every Nth occurrence to the calling thread's resolved
/// log. See [`log_when!`].
#[macro_export]
macro_rules! log_thread_when {
    ($severity:expr, $condition:expr, $every:expr, $($arg:tt)*) => {
        $crate::sampled_log_to!($crate::thread_log_get(), $severity, $condition, $every, $($arg)*)
    };
}

/// Shared expansion for the sampled-logging macros. Not part of the public
/// API surface; use [`log_when!`] or [`log_thread_when!`].
#[doc(hidden)]
#[macro_export]
macro_rules! sampled_log_to {
    ($target:expr, $severity:expr, $condition:expr, $every:expr, $($arg:tt)*) => {{
        static OCCURRENCES: $crate::SampleCounter = $crate::SampleCounter::new();
        if $condition {
            let count = OCCURRENCES.record();
            let every: u64 = $every;
            if $crate::SampleCounter::should_emit(count, every) {
                let target = $target;
                if every > 1 {
                    $crate::emit(
                        target.as_ref(),
                        $crate::Component::Generic,
                        $crate::Severity::Info,
                        Some($crate::Provenance::new(module_path!(), line!())),
                        format_args!("The following message has occurred [{count}] times."),
                    );
                }
                $crate::emit(
                    target.as_ref(),
                    $crate::Component::Generic,
                    $severity,
                    Some($crate::Provenance::new(module_path!(), line!())),
                    format_args!($($arg)*),
                );
            }
        }
    }};
}

/// Log with fatal severity to the calling thread's resolved log
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => { $crate::log_thread!($crate::Severity::Fatal, $($arg)*) };
}

/// Log with critical severity to the calling thread's resolved log
#[macro_export]
macro_rules! log_critical {
    ($($arg:tt)*) => { $crate::log_thread!($crate::Severity::Critical, $($arg)*) };
}

/// Log with error severity to the calling thread's resolved log
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log_thread!($crate::Severity::Error, $($arg)*) };
}

/// Log with warning severity to the calling thread's resolved log
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => { $crate::log_thread!($crate::Severity::Warning, $($arg)*) };
}

/// Log with info severity to the calling thread's resolved log
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log_thread!($crate::Severity::Info, $($arg)*) };
}

/// Log with verbose severity to the calling thread's resolved log
#[macro_export]
macro_rules! log_verbose {
    ($($arg:tt)*) => { $crate::log_thread!($crate::Severity::Verbose, $($arg)*) };
}

/// Log with debug severity to the calling thread's resolved log
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log_thread!($crate::Severity::Debug, $($arg)*) };
}
