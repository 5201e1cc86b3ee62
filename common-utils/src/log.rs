use std::{
    io,
    sync::atomic::{AtomicBool, Ordering},
};

pub const DUMP_PREFIX: &str = "sysconf-dump: ";

// skipped parameters are not reported unless someone asks for it
pub static CONSOLE_LOG_ENABLED: AtomicBool = AtomicBool::new(false);

pub fn enable_console_log() {
    CONSOLE_LOG_ENABLED.store(true, Ordering::Relaxed);
}

pub fn console_log_enabled() -> bool {
    CONSOLE_LOG_ENABLED.load(Ordering::Relaxed)
}

#[macro_export]
macro_rules! println_impl {
    ($print_macro:ident, $prefix:ident, $fmt:expr, $($args:tt)*) => {{
        let res: anyhow::Result<()> = if $crate::log::console_log_enabled() {
            $crate::$print_macro!(concat!("{}", $fmt), $crate::log::$prefix, $($args)*)
        } else {
            Ok(())
        }.map_err(|e| e.into());
        res
    }};
    ($print_macro:ident, $prefix:ident, $fmt:expr) => {
        $crate::println_impl!($print_macro, $prefix, $fmt, )
    };
}

#[macro_export]
macro_rules! dump_eprintln {
    ($($arg:tt)*) => {
        _ = $crate::println_impl!(safe_eprintln, DUMP_PREFIX, $($arg)*)
    };
}

#[derive(Debug)]
pub struct PrintError(pub io::Error);

impl std::fmt::Display for PrintError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for PrintError {}

impl PrintError {
    pub fn broken_pipe(&self) -> bool {
        self.0.kind() == io::ErrorKind::BrokenPipe
    }
}

#[macro_export]
macro_rules! safe_println {
    ($($arg:tt)*) => {{
        use std::io::Write;
        writeln!(std::io::stdout(), $($arg)*).map_err($crate::log::PrintError)
    }};
}

#[macro_export]
macro_rules! safe_eprintln {
    ($($arg:tt)*) => {{
        use std::io::Write;
        writeln!(std::io::stderr(), $($arg)*).map_err($crate::log::PrintError)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broken_pipe_detection() {
        let err = PrintError(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(err.broken_pipe());

        let err = PrintError(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(!err.broken_pipe());
    }

    #[test]
    fn test_print_error_display() {
        let err = PrintError(io::Error::other("stdout closed"));
        assert_eq!(err.to_string(), "stdout closed");
    }

    #[test]
    fn test_console_log_switch() {
        // silent by default, so logging is a no-op that still succeeds
        assert!(crate::println_impl!(safe_eprintln, DUMP_PREFIX, "skipping {}", 23).is_ok());

        enable_console_log();
        assert!(console_log_enabled());
        assert!(crate::println_impl!(safe_eprintln, DUMP_PREFIX, "done").is_ok());
    }
}
