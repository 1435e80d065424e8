//! Leveled logging macros
//!
//! `log_<level>!` logs through the process-wide dispatcher, `log_<level>_to!`
//! through an explicit `&Dispatcher`. Both take `format!`-style arguments and
//! capture the call site.
//!
//! - Debug..Error discard the result
//! - `log_critical!` evaluates to `Result<(), CriticalError>` for use with `?`
//! - `log_fatal!` never returns

// ============================================================================
// 1. GENERIC INTERNAL MACROS
// ============================================================================

/// Call site of the macro invocation
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(module_path!(), file!(), line!())
    };
}

/// Emit a formatted message on a dispatcher, evaluating to the emit result
#[macro_export]
macro_rules! emit_log {
    ($dispatcher:expr, $lvl:expr, $($arg:tt)+) => {
        $dispatcher.emit($lvl, &format!($($arg)+), $crate::call_site!())
    };
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS
// ============================================================================

/// Debug on an explicit dispatcher, result discarded
#[macro_export]
macro_rules! log_debug_to {
    ($d:expr, $($arg:tt)+) => {{
        let _ = $crate::emit_log!($d, $crate::Severity::Debug, $($arg)+);
    }};
}

/// Info on an explicit dispatcher, result discarded
#[macro_export]
macro_rules! log_info_to {
    ($d:expr, $($arg:tt)+) => {{
        let _ = $crate::emit_log!($d, $crate::Severity::Info, $($arg)+);
    }};
}

/// Warning on an explicit dispatcher, result discarded
#[macro_export]
macro_rules! log_warn_to {
    ($d:expr, $($arg:tt)+) => {{
        let _ = $crate::emit_log!($d, $crate::Severity::Warning, $($arg)+);
    }};
}

/// Error on an explicit dispatcher, result discarded
#[macro_export]
macro_rules! log_error_to {
    ($d:expr, $($arg:tt)+) => {{
        let _ = $crate::emit_log!($d, $crate::Severity::Error, $($arg)+);
    }};
}

/// Critical on an explicit dispatcher.
///
/// Evaluates to `Result<(), CriticalError>`, `Err` once every applicable
/// target has written, so callers can propagate it with `?`.
#[macro_export]
macro_rules! log_critical_to {
    ($d:expr, $($arg:tt)+) => {
        $crate::emit_log!($d, $crate::Severity::Critical, $($arg)+)
    };
}

/// Fatal on an explicit dispatcher.
///
/// Writes, flushes every target and exits the process; evaluates to `!`.
#[macro_export]
macro_rules! log_fatal_to {
    ($d:expr, $($arg:tt)+) => {
        $d.emit_fatal(&format!($($arg)+), $crate::call_site!())
    };
}

// ============================================================================
// 3. PROCESS-WIDE VARIANTS
// ============================================================================

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        $crate::log_debug_to!($crate::global(), $($arg)+)
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        $crate::log_info_to!($crate::global(), $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => {
        $crate::log_warn_to!($crate::global(), $($arg)+)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        $crate::log_error_to!($crate::global(), $($arg)+)
    };
}

/// Critical on the process-wide dispatcher; evaluates to the emit result
#[macro_export]
macro_rules! log_critical {
    ($($arg:tt)+) => {
        $crate::log_critical_to!($crate::global(), $($arg)+)
    };
}

/// Fatal on the process-wide dispatcher; never returns
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)+) => {
        $crate::log_fatal_to!($crate::global(), $($arg)+)
    };
}
