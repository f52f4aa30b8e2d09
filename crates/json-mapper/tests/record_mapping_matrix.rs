//! Record-level marshalling scenarios over generated types.

use connect_sdk_json_mapper::{
    from_json_str, from_json_str_with, json_enum, json_record, to_json_string,
    to_json_string_with, CodecSettings, IndexMap, JsonStreamError, MapperError, OffsetDateTime,
    Record, TimestampFormat,
};
use serde_json::Value;

json_enum! {
    pub enum Comparison {
        Lt => "LT",
    }
}

json_record! {
    pub struct Threshold {
        comparison: Comparison => "Comparison",
        threshold_value: f64 => "ThresholdValue",
    }
}

json_record! {
    pub struct Metric {
        name: String => "Name",
        threshold: Threshold => "Threshold",
        values: Vec<f64> => "Values",
    }
}

json_record! {
    pub struct Report {
        id: String => "Id",
        metrics: Vec<Metric> => "Metrics",
        labels: IndexMap<String, Vec<String>> => "Labels",
        generated_at: OffsetDateTime => "GeneratedAt",
        enabled: bool => "Enabled",
    }
}

fn parse(json: &str) -> Report {
    from_json_str(json)
        .expect("valid document")
        .expect("object document")
}

#[test]
fn sparse_output_matrix() {
    let cases: Vec<(Report, &str)> = vec![
        (Report::default(), "{}"),
        (
            Report {
                enabled: Some(false),
                ..Default::default()
            },
            r#"{"Enabled":false}"#,
        ),
        (
            Report {
                id: Some(String::new()),
                metrics: Some(vec![]),
                ..Default::default()
            },
            r#"{"Id":"","Metrics":[]}"#,
        ),
        (
            Report {
                metrics: Some(vec![Metric {
                    threshold: Some(Threshold::default()),
                    ..Default::default()
                }]),
                ..Default::default()
            },
            r#"{"Metrics":[{"Threshold":{}}]}"#,
        ),
    ];
    for (report, expected) in cases {
        let json = to_json_string(&report).unwrap();
        assert_eq!(json, expected);
        assert_eq!(parse(&json), report, "round trip of {expected}");
    }
}

#[test]
fn nested_document_round_trip() {
    let json = r#"{"Id":"r-1","Metrics":[{"Name":"CONTACTS_QUEUED","Threshold":{"Comparison":"LT","ThresholdValue":20.5},"Values":[1.0,2.5]}],"Labels":{"team":["a","b"]},"GeneratedAt":1552867200.5,"Enabled":true}"#;
    let report = parse(json);
    assert_eq!(to_json_string(&report).unwrap(), json);
    let metric = &report.metrics.as_ref().unwrap()[0];
    assert_eq!(
        metric.threshold.as_ref().and_then(|t| t.comparison.clone()),
        Some(Comparison::Lt)
    );
    assert_eq!(metric.values, Some(vec![1.0, 2.5]));
}

#[test]
fn marshalling_is_idempotent() {
    let input = r#"{"Enabled":"TRUE","Unknown":{"deep":[{"x":null}]},"Id":7,"Labels":{"k":null,"j":[]}}"#;
    let once = to_json_string(&parse(input)).unwrap();
    let twice = to_json_string(&parse(&once)).unwrap();
    assert_eq!(once, r#"{"Id":"7","Labels":{"j":[]},"Enabled":true}"#);
    assert_eq!(once, twice);
}

#[test]
fn unknown_properties_are_ignored_matrix() {
    let extras = [
        r#""Extra":1"#,
        r#""Extra":"s""#,
        r#""Extra":null"#,
        r#""Extra":[1,[2,[3]],{"a":{}}]"#,
        r#""Extra":{"Id":"shadow","Metrics":[{"Name":"x"}]}"#,
        r#""id":"lowercase-is-different""#,
    ];
    let base = Report {
        id: Some("r".to_owned()),
        enabled: Some(true),
        ..Default::default()
    };
    for extra in extras {
        for json in [
            format!(r#"{{{extra},"Id":"r","Enabled":true}}"#),
            format!(r#"{{"Id":"r",{extra},"Enabled":true}}"#),
            format!(r#"{{"Id":"r","Enabled":true,{extra}}}"#),
        ] {
            assert_eq!(parse(&json), base, "{json}");
        }
    }
}

#[test]
fn null_and_scalar_containers_read_as_absent() {
    for value in ["null", "1", r#""text""#, "true", "[]", "[{}]"] {
        let json = format!(r#"{{"Metrics":[{{"Threshold":{value},"Name":"n"}}]}}"#);
        let report = parse(&json);
        let metric = &report.metrics.as_ref().unwrap()[0];
        assert_eq!(metric.threshold, None, "{json}");
        assert_eq!(metric.name.as_deref(), Some("n"));
    }
    for root in ["null", "42", r#""x""#, "[1]"] {
        assert_eq!(from_json_str::<Report>(root).unwrap(), None, "{root}");
    }
}

#[test]
fn malformed_documents_are_errors() {
    for json in [r#"{"Id":"a""#, r#"{"Id" "a"}"#, r#"{"Id":"a",}"#, "{} {}"] {
        assert!(from_json_str::<Report>(json).is_err(), "{json}");
    }
    assert!(from_json_str::<Report>(r#"{"Enabled":"maybe"}"#).is_err());
}

#[test]
fn nesting_under_unknown_property() {
    let wrap = |depth: usize| {
        format!(
            r#"{{"Id":"a","Unknown":{}{},"Enabled":true}}"#,
            "[".repeat(depth),
            "]".repeat(depth)
        )
    };
    let report = parse(&wrap(100));
    assert_eq!(report.id.as_deref(), Some("a"));
    assert_eq!(report.enabled, Some(true));

    for depth in [200, 200_000] {
        let err = from_json_str::<Report>(&wrap(depth)).unwrap_err();
        assert!(
            matches!(
                err,
                MapperError::Stream(JsonStreamError::DepthLimitExceeded { limit: 128, .. })
            ),
            "{depth}: {err}"
        );
    }
}

#[test]
fn non_json_number_forms_are_errors() {
    for json in [
        r#"{"Metrics":[{"Values":[01]}]}"#,
        r#"{"Metrics":[{"Values":[1.]}]}"#,
        r#"{"Metrics":[{"Threshold":{"ThresholdValue":-.5}}]}"#,
        r#"{"GeneratedAt":1e}"#,
        r#"{"Unknown":[00],"Id":"a"}"#,
        "{\"Id\":\"tab\there\"}",
    ] {
        assert!(
            matches!(
                from_json_str::<Report>(json),
                Err(MapperError::Stream(JsonStreamError::Invalid(_)))
            ),
            "{json}"
        );
    }
}

#[test]
fn out_of_range_timestamps_are_errors() {
    for value in ["1e30", "-1e30", r#""1e300""#, "99999999999999999"] {
        let json = format!(r#"{{"GeneratedAt":{value}}}"#);
        assert!(
            matches!(
                from_json_str::<Report>(&json),
                Err(MapperError::InvalidTimestamp(_))
            ),
            "{json}"
        );
    }
}

#[test]
fn timestamp_setting_applies_to_nested_fields() {
    let report = parse(r#"{"GeneratedAt":"2019-03-18T00:00:00.250Z"}"#);
    let settings = CodecSettings::new().with_timestamp_format(TimestampFormat::Rfc3339);
    let rfc = to_json_string_with(&report, settings).unwrap();
    assert_eq!(rfc, r#"{"GeneratedAt":"2019-03-18T00:00:00.25Z"}"#);
    assert_eq!(
        to_json_string(&report).unwrap(),
        r#"{"GeneratedAt":1552867200.25}"#
    );
    let back: Report = from_json_str_with(&rfc, settings).unwrap().unwrap();
    assert_eq!(back, report);
}

#[test]
fn output_is_valid_json_in_declaration_order() {
    let report = parse(r#"{"Enabled":true,"Labels":{"z":["1"]},"Id":"x"}"#);
    let json = to_json_string(&report).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["Id", "Labels", "Enabled"]);
    assert_eq!(
        Report::SCHEMA.wire_names().collect::<Vec<_>>(),
        ["Id", "Metrics", "Labels", "GeneratedAt", "Enabled"]
    );
}
