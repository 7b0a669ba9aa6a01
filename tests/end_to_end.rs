//! End-to-end tests for the full check-and-report pipeline.
//!
//! These tests drive `run_checks` with a mock notification endpoint and
//! verify the composed report that arrives there. Monitored sites point at
//! ports nothing listens on, so every check resolves locally without real
//! network access.

use httptest::{matchers::*, responders::*, Expectation, Server};

use sitewatch::{run_checks, Config, SiteCheckConfig};

/// Returns a 127.0.0.1 URL with a port nothing is listening on.
fn dead_site_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind should succeed");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

fn test_config(notify_server: &Server) -> Config {
    Config {
        notify_url: notify_server.url("/notify").to_string(),
        timeout_seconds: 5,
        max_concurrency: 2,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_empty_site_list_sends_no_issues_report() {
    let notify = Server::run();
    notify.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/notify"),
            request::headers(contains(("authorization", "Bearer test-token"))),
            request::body(url_decoded(contains((
                "message",
                matches("(?s)Sites checked: 0\n.*All monitored sites are healthy\\.$"),
            )))),
        ])
        .times(1)
        .respond_with(status_code(200)),
    );

    let sites = SiteCheckConfig {
        line_token: "test-token".to_string(),
        websites: Vec::new(),
        basic_auth: None,
    };

    let outcome = run_checks(&test_config(&notify), &sites)
        .await
        .expect("run should complete");
    assert_eq!(outcome.status_code, 200);
    assert_eq!(outcome.body, "Website check completed.");
}

#[tokio::test]
async fn test_unreachable_site_is_reported_with_ssl_line_first() {
    let notify = Server::run();
    // Both checks fail for a dead port; the SSL line must precede the
    // reachability line inside the site's block.
    notify.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/notify"),
            request::body(url_decoded(contains((
                "message",
                matches(
                    "(?s)Sites checked: 1\n1 site\\(s\\) reported issues\\.\n\
                     .*- SSL certificate is invalid\n- Site is unreachable"
                ),
            )))),
        ])
        .times(1)
        .respond_with(status_code(200)),
    );

    let site = dead_site_url();
    let sites = SiteCheckConfig {
        line_token: "test-token".to_string(),
        websites: vec![site.clone()],
        basic_auth: None,
    };

    let outcome = run_checks(&test_config(&notify), &sites)
        .await
        .expect("run should complete");
    assert_eq!(outcome.status_code, 200);
}

#[tokio::test]
async fn test_report_lists_sites_in_input_order() {
    let first = dead_site_url();
    let second = dead_site_url();

    let notify = Server::run();
    let first_clone = first.clone();
    let second_clone = second.clone();
    notify.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/notify"),
            request::body(url_decoded(contains((
                "message",
                matches(format!(
                    "(?s)Sites checked: 2\n.*{}.*{}",
                    regex_escape(&first_clone),
                    regex_escape(&second_clone)
                )),
            )))),
        ])
        .times(1)
        .respond_with(status_code(200)),
    );

    let sites = SiteCheckConfig {
        line_token: "test-token".to_string(),
        websites: vec![first, second],
        basic_auth: None,
    };

    let outcome = run_checks(&test_config(&notify), &sites)
        .await
        .expect("run should complete");
    assert_eq!(outcome.status_code, 200);
}

#[tokio::test]
async fn test_notification_failure_does_not_change_run_outcome() {
    let notify = Server::run();
    notify.expect(
        Expectation::matching(request::method_path("POST", "/notify"))
            .times(1)
            .respond_with(status_code(500)),
    );

    let sites = SiteCheckConfig {
        line_token: "test-token".to_string(),
        websites: Vec::new(),
        basic_auth: None,
    };

    let outcome = run_checks(&test_config(&notify), &sites)
        .await
        .expect("delivery failure must not escalate");
    assert_eq!(outcome.status_code, 200);
    assert_eq!(outcome.body, "Website check completed.");
}

#[tokio::test]
async fn test_invalid_website_entries_are_skipped() {
    let notify = Server::run();
    notify.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/notify"),
            request::body(url_decoded(contains((
                "message",
                matches("Sites checked: 0\n"),
            )))),
        ])
        .times(1)
        .respond_with(status_code(200)),
    );

    let sites = SiteCheckConfig {
        line_token: "test-token".to_string(),
        websites: vec!["not a url at all!!!".to_string()],
        basic_auth: None,
    };

    let outcome = run_checks(&test_config(&notify), &sites)
        .await
        .expect("run should complete");
    assert_eq!(outcome.status_code, 200);
}

/// Escapes regex metacharacters in a literal string (ports etc. are dynamic).
fn regex_escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if ".^$*+?()[]{}|\\/".contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
