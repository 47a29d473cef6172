//! Operator command line: `recruit-admin <resource> <operation>`. Every
//! command signs in first when `--email`/`--password` are given and prints
//! its result as pretty JSON on stdout.

pub mod actions;
pub mod globals;
pub mod telemetry;

pub mod commands;
pub mod dispatch;

mod start;
pub use self::start::start;
