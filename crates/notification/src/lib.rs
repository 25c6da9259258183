use chrono::{Datelike, Local};

pub mod contact;
pub mod enquiry;
mod service;

pub use service::*;

pub(crate) fn current_year() -> i32 {
    Local::now().year()
}

/// Local submission time as shown to the academy staff.
pub(crate) fn submitted_at() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S IST").to_string()
}
