//! roleready-report — Markdown and HTML renderings of assessment reports.

pub mod html;
pub mod markdown;
