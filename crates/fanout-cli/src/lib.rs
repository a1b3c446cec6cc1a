//! # fanout-cli
//!
//! CLI output, report files, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;

pub use presenter::CLIResultPresenter;
