//! Terminal output formatter

use super::RankReport;

pub fn format_reports(reports: &[RankReport]) -> String {
    let mut output = String::new();

    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        output.push_str(&report.title());
        output.push('\n');

        for (page, rank) in &report.ranks {
            output.push_str(&format!("  {page}: {rank:.4}\n"));
        }
    }

    output
}
