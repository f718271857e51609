//! Error-policy behavior of the load step, end to end.

use std::io::Write;

use ingest::{load, ConsistencyReport, FileSource, LoadConfig, MemorySource, Source};
use integration_tests::fixtures;
use pipeline::process_sources;

#[test]
fn no_sources_is_empty_table_with_message() {
    let outcome = process_sources(&[], &LoadConfig::default(), None);
    assert!(outcome.table.is_empty());
    assert!(outcome.loaded.is_empty());
    assert!(outcome.consistency.is_none());
    assert_eq!(outcome.message.as_deref(), Some("no sources found"));
}

#[test]
fn unreadable_source_fails_the_precheck() {
    let sources: Vec<Box<dyn Source>> = vec![
        Box::new(MemorySource::new(
            "input_1",
            fixtures::line("visitor_1", "www.s_1.com", "www.s_1.com/a", 1_600_000_000),
        )),
        Box::new(FileSource::new("/no/such/dir/input_2.csv")),
    ];

    let outcome = process_sources(&sources, &LoadConfig::default(), None);
    assert!(outcome.table.is_empty());
    assert!(outcome.loaded.is_empty());
    let message = outcome.message.as_deref().expect("diagnostic message");
    assert!(message.contains("input_2.csv"), "message: {message}");
}

#[test]
fn file_sources_load_like_memory_sources() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "visitor_1,www.s_1.com,www.s_1.com/a,1600000000").expect("write");
    writeln!(file, "visitor_1,www.s_1.com,www.s_1.com/b,1600000100").expect("write");

    let sources: Vec<Box<dyn Source>> = vec![
        Box::new(FileSource::new(file.path())),
        Box::new(MemorySource::new(
            "input_2",
            fixtures::line("visitor_2", "www.s_1.com", "www.s_1.com/a", 1_600_000_000),
        )),
    ];

    let outcome = process_sources(&sources, &LoadConfig::default(), None);
    assert_eq!(outcome.table.len(), 3);
    assert_eq!(outcome.loaded.len(), 2);
    assert!(outcome.consistency.as_ref().expect("pre-check ran").is_consistent());
}

#[test]
fn mismatched_field_counts_are_advisory() {
    let sources: Vec<Box<dyn Source>> = vec![
        Box::new(MemorySource::new(
            "input_1",
            "visitor_1,www.s_1.com,www.s_1.com/a,1600000000\n",
        )),
        Box::new(MemorySource::new(
            "input_2",
            "visitor_2,www.s_1.com,www.s_1.com/b,1600000100,tracking_tag\n",
        )),
    ];

    let outcome = process_sources(&sources, &LoadConfig::default(), None);
    let report = outcome.consistency.as_ref().expect("pre-check ran");
    match report {
        ConsistencyReport::Mismatched(counts) => {
            assert_eq!(counts.len(), 2);
            let rendered = report.to_string();
            assert!(rendered.contains("input_1: 4 fields"));
            assert!(rendered.contains("input_2: 5 fields"));
        }
        ConsistencyReport::Consistent => panic!("expected mismatch"),
    }
    // Both sources still count as loaded; only the malformed rows drop.
    assert_eq!(outcome.loaded, vec!["input_1", "input_2"]);
    assert_eq!(outcome.table.len(), 1);
    assert!(outcome.message.is_none());
}

#[test]
fn malformed_records_drop_without_failing_the_source() {
    let dropped_before = telemetry::metrics().records_dropped.get();

    let text = "visitor_1,www.s_1.com,www.s_1.com/a,1600000000\n\
                ,www.s_1.com,www.s_1.com/missing-visitor,1600000100\n\
                visitor_1,www.s_1.com,www.s_1.com/b,yesterday\n\
                visitor_1,www.s_1.com,www.s_1.com/c,1600000200\n";
    let outcome = load(
        &[Box::new(MemorySource::new("input_1", text)) as Box<dyn Source>],
        &LoadConfig::default(),
    );

    assert_eq!(outcome.loaded, vec!["input_1"]);
    assert_eq!(outcome.events.len(), 2);

    // The loss is counted, just not surfaced per record. Counters are
    // process-wide, so only the monotonic delta is ours to assert.
    assert!(telemetry::metrics().records_dropped.get() >= dropped_before + 2);
}

#[test]
fn exact_duplicates_collapse_across_sources() {
    let duplicate = fixtures::line("visitor_1", "www.s_1.com", "www.s_1.com/a", 1_600_000_000);
    let sources: Vec<Box<dyn Source>> = vec![
        Box::new(MemorySource::new("input_1", format!("{duplicate}\n"))),
        Box::new(MemorySource::new("input_2", format!("{duplicate}\n"))),
    ];

    let outcome = process_sources(&sources, &LoadConfig::default(), None);
    assert_eq!(outcome.table.len(), 1);
}

#[test]
fn alternate_delimiter_loads_via_config() {
    let config = LoadConfig {
        delimiter: '\t',
        ..LoadConfig::default()
    };
    let text = "visitor_1\twww.s_1.com\twww.s_1.com/a\t1600000000\n";
    let outcome = load(
        &[Box::new(MemorySource::new("input_1", text)) as Box<dyn Source>],
        &config,
    );
    assert_eq!(outcome.events.len(), 1);
    assert_eq!(outcome.events[0].site_url, "www.s_1.com");
}
