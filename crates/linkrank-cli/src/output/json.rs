//! JSON output formatter

use super::RankReport;

pub fn format_reports(reports: &[RankReport]) -> String {
    serde_json::to_string_pretty(reports).unwrap_or_else(|_| "[]".to_string()) + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_reports_round_trip_as_json() {
        let ranks: HashMap<String, f64> = [
            ("a.html".to_string(), 0.6),
            ("b.html".to_string(), 0.4),
        ]
        .into_iter()
        .collect();

        let out = format_reports(&[
            RankReport::sampling(0.85, 100, ranks.clone()),
            RankReport::iteration(0.85, ranks),
        ]);

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["estimator"], "sampling");
        assert_eq!(parsed[0]["samples"], 100);
        assert_eq!(parsed[1]["estimator"], "iteration");
        assert!(parsed[1].get("samples").is_none());
        assert_eq!(parsed[1]["ranks"]["a.html"], 0.6);
    }
}
