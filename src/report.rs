//! Report composition.
//!
//! The composer is a pure function: given the per-site results and a
//! timestamp it always produces byte-identical output. That determinism is
//! what makes it testable without any network access.

use chrono::{DateTime, FixedOffset};

use crate::config::{REPORT_TIME_FORMAT, REPORT_TZ_OFFSET_SECS};
use crate::models::{RunReport, SiteResult};

/// Sentence used when every site is healthy.
const NO_ISSUES_SENTENCE: &str = "All monitored sites are healthy.";

/// Prefix for each issue line inside a site block.
const ISSUE_BULLET: &str = "- ";

/// The fixed timezone reports are rendered in (JST, UTC+9).
pub fn report_timezone() -> FixedOffset {
    // 9 hours east is always a representable offset
    FixedOffset::east_opt(REPORT_TZ_OFFSET_SECS).expect("JST offset is valid")
}

/// Folds per-site results into a single run report.
///
/// The header carries the check timestamp (JST, `YYYY/MM/DD HH:MM`) and the
/// number of sites checked. With zero issues the body ends with a fixed
/// "all healthy" sentence; otherwise it lists one block per affected site, in
/// input order, each block being the URL line followed by one bulleted line
/// per issue, blocks separated by a blank line.
pub fn compose(results: &[SiteResult], checked_at: DateTime<FixedOffset>) -> RunReport {
    let issue_count = results.iter().filter(|r| r.has_issues()).count();

    let mut body = format!(
        "\nCheck time: {}\nSites checked: {}\n",
        checked_at.format(REPORT_TIME_FORMAT),
        results.len()
    );

    if issue_count == 0 {
        body.push_str(NO_ISSUES_SENTENCE);
    } else {
        body.push_str(&format!("{issue_count} site(s) reported issues.\n"));
        for result in results.iter().filter(|r| r.has_issues()) {
            body.push('\n');
            body.push_str(&result.url);
            body.push('\n');
            for issue in result.issues() {
                body.push_str(ISSUE_BULLET);
                body.push_str(issue);
                body.push('\n');
            }
        }
    }

    RunReport {
        checked_at,
        total_sites: results.len(),
        issue_count,
        body,
    }
}
