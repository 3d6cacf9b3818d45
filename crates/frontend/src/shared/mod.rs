pub mod api_utils;
pub mod debounce;
pub mod export;
pub mod icons;
pub mod log_line;
pub mod poll;
