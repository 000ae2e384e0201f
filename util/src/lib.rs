pub mod config;
pub mod logging;
pub mod str_util;
pub mod units;
