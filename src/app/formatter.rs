use crate::app::models::ScanResult;

pub struct OutputGenerator;

impl OutputGenerator {
    pub fn format_total(result: &ScanResult) -> String {
        format!("Total lines: {}", result.total_lines)
    }

    pub fn format_breakdown(result: &ScanResult) -> String {
        format!(
            "Counted {} files, skipped {}, failed {}",
            result.files_counted, result.files_skipped, result.files_failed
        )
    }
}
