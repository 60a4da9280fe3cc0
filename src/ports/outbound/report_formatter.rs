use crate::application::read_models::ReportView;
use crate::shared::Result;

/// ReportFormatter port for rendering a report view
///
/// Implementations produce the final text (JSON, Markdown, ...) that an
/// `OutputPresenter` writes out.
pub trait ReportFormatter {
    fn format(&self, report: &ReportView) -> Result<String>;
}
