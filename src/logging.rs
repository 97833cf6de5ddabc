//! Feature-gated debug output
//!
//! `esp32-log` prints through `esp-println`, `log` goes through the `log`
//! facade. With neither enabled the arguments are still type-checked.

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "esp32-log")]
        ::esp_println::println!($($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
        #[cfg(not(any(feature = "esp32-log", feature = "log")))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

pub(crate) use debug;
