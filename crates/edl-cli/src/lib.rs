//! `pfd-edl` command-line interface.

pub mod cli;
pub mod run;
