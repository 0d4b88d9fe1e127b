//! filebrowse: a launcher plugin that describes itself with a manifest and
//! lists directories as actionable JSON items.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
