/// Prints to stdout when the given opts ask for verbosity, and always sends the message to the
/// debug log.
#[macro_export]
macro_rules! verbose {
    ($opts:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::log::debug!("{}", message);
        if $opts.verbose {
            println!("{}", message);
        }
    }};
}
