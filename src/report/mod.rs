//! Campaign report persistence.
//!
//! A report is a single markdown file combining the campaign inputs with
//! whichever artifacts were generated. Reports are named
//! `campaign_plan_<YYYYMMDD_HHMMSS>.md`, so two saves within the same second
//! target the same file and the later one replaces the earlier.

mod listing;
mod writer;

pub use listing::{SavedReport, list_reports};
pub use writer::{Clock, SystemClock, render_report, report_filename, write_report};
