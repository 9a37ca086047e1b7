//! Logging macros taking a `Code`, a message, an optional `span = ...`, and
//! `"key" => value` context pairs whose values only need `Display`

/// Attach `"key" => value` pairs to an event
#[doc(hidden)]
#[macro_export]
macro_rules! __log_context {
    ($event:expr $(, $key:expr => $value:expr)*) => {{
        #[allow(unused_mut)]
        let mut event = $event;
        $(
            event = event.with_context($key, &format!("{}", $value));
        )*
        event
    }};
}

#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr, span = $span:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::logging::log_event($crate::__log_context!(
            $crate::logging::LogEvent::error($code, $message).with_span($span)
            $(, $key => $value)*
        ))
    };

    ($code:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::logging::log_event($crate::__log_context!(
            $crate::logging::LogEvent::error($code, $message)
            $(, $key => $value)*
        ))
    };
}

/// Warning with a registered code; a lone message uses the generic code
#[macro_export]
macro_rules! log_warning {
    ($message:expr) => {
        $crate::logging::log_event($crate::logging::LogEvent::warning($message))
    };

    ($code:expr, $message:expr, span = $span:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::logging::log_event($crate::__log_context!(
            $crate::logging::LogEvent::warning_with_code($code, $message).with_span($span)
            $(, $key => $value)*
        ))
    };

    ($code:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::logging::log_event($crate::__log_context!(
            $crate::logging::LogEvent::warning_with_code($code, $message)
            $(, $key => $value)*
        ))
    };
}

#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::logging::log_event($crate::__log_context!(
            $crate::logging::LogEvent::success($code, $message)
            $(, $key => $value)*
        ))
    };
}

#[macro_export]
macro_rules! log_info {
    ($message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::logging::log_event($crate::__log_context!(
            $crate::logging::LogEvent::info($message)
            $(, $key => $value)*
        ))
    };
}

/// Skips building the event entirely unless debug output is enabled
#[macro_export]
macro_rules! log_debug {
    ($message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        if $crate::logging::debug_enabled() {
            $crate::logging::log_event($crate::__log_context!(
                $crate::logging::LogEvent::debug($message)
                $(, $key => $value)*
            ))
        }
    };
}

/// Debug logging compiled out of release builds
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::log_debug!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::logging::{codes, LogEvent};

    #[test]
    fn test_context_macro_formats_display_values() {
        let event = crate::__log_context!(
            LogEvent::info("tokens"),
            "count" => 42,
            "state" => "START"
        );
        assert_eq!(event.context.get("count").map(String::as_str), Some("42"));
        assert_eq!(event.context.get("state").map(String::as_str), Some("START"));
    }

    #[test]
    fn test_macros_are_safe_without_global_logger() {
        log_error!(codes::system::INTERNAL_ERROR, "no logger installed", "depth" => 5);
        log_warning!(codes::lexical::EMPTY_CHAR, "Character is empty");
        log_warning!("plain warning");
        log_success!(codes::success::TOKENIZATION_COMPLETE, "done");
        log_info!("info", "k" => 1);
        log_debug!("debug");
    }
}
