//! # fibdemo-cli
//!
//! Report and JSON presenters, console styling, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{JsonPresenter, ReportPresenter};
