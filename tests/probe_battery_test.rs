//! Battery execution tests against a scripted transport

mod common;

use kambio_ops::probe::{
    authenticate, default_battery, run_battery, run_scenario, ExpectedOutcome, ProbeConfig,
    ProbeError, ScenarioOutcome, TransportError, Verdict,
};
use serde_json::json;

use common::ScriptedTransport;

const LOGIN_OK: &str = r#"{"success":true,"data":{"access_token":"tok-123"}}"#;

fn scenario(name: &str, expected: ExpectedOutcome) -> kambio_ops::probe::Scenario {
    kambio_ops::probe::Scenario {
        name: name.to_string(),
        payload: json!({"from": "USD", "to": "AOA", "amount": 100}),
        expected,
    }
}

#[test]
fn test_authenticate_extracts_the_token() {
    let transport = ScriptedTransport::new(vec![ScriptedTransport::ok(LOGIN_OK)]);
    let config = ProbeConfig::default();

    let token = authenticate(&transport, &config).unwrap();

    assert_eq!(token, "tok-123");
    let requests = transport.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, "http://localhost:3000/api/v1/auth/login");
    assert_eq!(requests[0].1, None, "login itself carries no bearer token");
    assert_eq!(requests[0].2["email"], json!("demo@example.com"));
}

#[test]
fn test_authenticate_rejects_non_200() {
    let transport = ScriptedTransport::new(vec![ScriptedTransport::status(401)]);

    let result = authenticate(&transport, &ProbeConfig::default());

    match result {
        Err(ProbeError::Auth(msg)) => assert!(msg.contains("401"), "got: {}", msg),
        other => panic!("expected Auth error, got {:?}", other),
    }
}

#[test]
fn test_authenticate_rejects_missing_token_field() {
    let transport = ScriptedTransport::new(vec![ScriptedTransport::ok(
        r#"{"success":true,"data":{}}"#,
    )]);

    let result = authenticate(&transport, &ProbeConfig::default());

    match result {
        Err(ProbeError::Auth(msg)) => {
            assert!(msg.contains("access_token"), "got: {}", msg)
        }
        other => panic!("expected Auth error, got {:?}", other),
    }
}

#[test]
fn test_authenticate_rejects_non_json_body() {
    let transport =
        ScriptedTransport::new(vec![ScriptedTransport::ok("<html>login page</html>")]);

    let result = authenticate(&transport, &ProbeConfig::default());

    assert!(matches!(result, Err(ProbeError::Auth(_))));
}

#[test]
fn test_accepted_invalid_payload_is_reported_as_vulnerability() {
    let transport = ScriptedTransport::new(vec![ScriptedTransport::ok(
        r#"{"success":true,"data":{"converted":83000}}"#,
    )]);
    let config = ProbeConfig::default();

    let report = run_scenario(
        &transport,
        &config,
        "tok-123",
        &scenario("negative amount", ExpectedOutcome::Error),
    );

    match report.outcome {
        ScenarioOutcome::Classified {
            status, verdict, ..
        } => {
            assert_eq!(status, 200);
            assert_eq!(verdict, Verdict::Vulnerability);
        }
        other => panic!("expected Classified, got {:?}", other),
    }

    let requests = transport.requests.borrow();
    assert_eq!(requests[0].0, "http://localhost:3000/api/v1/conversion");
    assert_eq!(requests[0].1.as_deref(), Some("tok-123"));
}

#[test]
fn test_unparsable_body_degrades_to_truncated_text() {
    let long_html = format!("<html>{}</html>", "x".repeat(500));
    let transport = ScriptedTransport::new(vec![Ok(kambio_ops::probe::ProbeResponse {
        status: 502,
        body: long_html,
    })]);
    let config = ProbeConfig {
        body_preview: 20,
        ..ProbeConfig::default()
    };

    let report = run_scenario(
        &transport,
        &config,
        "tok-123",
        &scenario("sanity", ExpectedOutcome::Success),
    );

    match report.outcome {
        ScenarioOutcome::Classified {
            status,
            verdict,
            body,
        } => {
            // Parse failure never blocks status-code classification
            assert_eq!(status, 502);
            assert_eq!(verdict, Verdict::Unexpected(502));
            assert_eq!(body.chars().count(), 20);
            assert!(body.starts_with("<html>"));
        }
        other => panic!("expected Classified, got {:?}", other),
    }
}

#[test]
fn test_connection_failure_does_not_stop_the_battery() {
    let battery = default_battery();
    assert_eq!(battery.len(), 8);

    // Scenario 3 of 8 hits a dead server; the rest still run.
    let mut responses = Vec::new();
    for idx in 0..8 {
        if idx == 2 {
            responses.push(Err(TransportError::Connection(
                "connection refused".to_string(),
            )));
        } else {
            responses.push(ScriptedTransport::status(400));
        }
    }
    let transport = ScriptedTransport::new(responses);
    let config = ProbeConfig::default();

    let reports = run_battery(&transport, &config, "tok-123", &battery);

    assert_eq!(reports.len(), 8);
    assert_eq!(transport.requests.borrow().len(), 8);
    assert!(matches!(
        reports[2].outcome,
        ScenarioOutcome::ConnectionFailed(_)
    ));
    for (idx, report) in reports.iter().enumerate() {
        if idx != 2 {
            assert!(
                matches!(report.outcome, ScenarioOutcome::Classified { .. }),
                "scenario {} should have completed",
                idx + 1
            );
        }
    }
}

#[test]
fn test_battery_preserves_scenario_order() {
    let battery = default_battery();
    let transport = ScriptedTransport::new(
        (0..battery.len())
            .map(|_| ScriptedTransport::status(422))
            .collect(),
    );

    let reports = run_battery(&transport, &ProbeConfig::default(), "tok-123", &battery);

    let reported: Vec<&str> = reports.iter().map(|r| r.scenario.name.as_str()).collect();
    let expected: Vec<&str> = battery.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(reported, expected);
}

#[test]
fn test_other_transport_errors_are_isolated_too() {
    let battery = vec![
        scenario("first", ExpectedOutcome::Error),
        scenario("second", ExpectedOutcome::Error),
    ];
    let transport = ScriptedTransport::new(vec![
        Err(TransportError::Other("timeout reading response".to_string())),
        ScriptedTransport::status(400),
    ]);

    let reports = run_battery(&transport, &ProbeConfig::default(), "tok-123", &battery);

    assert!(matches!(reports[0].outcome, ScenarioOutcome::ScriptError(_)));
    assert!(matches!(
        reports[1].outcome,
        ScenarioOutcome::Classified {
            verdict: Verdict::Blocked,
            ..
        }
    ));
}
