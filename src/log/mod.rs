//! Parsing for process monitor logs (`log_pid_<pid>_name_<process>.txt`).

pub mod parse;
pub mod row;

pub use parse::parse_log_file;
pub use row::SeriesSet;
