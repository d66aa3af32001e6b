use pprof_triage::goroutine::{classify_dump, sniff_dump, DumpKind};
use pprof_triage::utils::error::ClassifyError;
use pretty_assertions::assert_eq;

const DUMP: &str = "\
goroutine 1 [running]:
main.main()
\t/app/main.go:12 +0x1f

goroutine 17 [select]:
database/sql.(*DB).connectionOpener(0xc0000a2000)
\t/usr/local/go/src/database/sql/sql.go:1126 +0x87

goroutine 18 [IO wait, 12 minutes]:
internal/poll.runtime_pollWait(0x7f3c, 0x72)
\t/usr/local/go/src/runtime/netpoll.go:306 +0x89

goroutine 19 [IO wait]:
internal/poll.runtime_pollWait(0x7f3d, 0x72)
\t/usr/local/go/src/runtime/netpoll.go:306 +0x89
";

#[test]
fn test_total_matches_marker_count() {
    let summary = classify_dump(DUMP).unwrap();
    assert_eq!(summary.total, 4);
}

#[test]
fn test_three_running_markers() {
    let dump = "\
goroutine 1 [running]:
main.a()

goroutine 2 [running]:
main.b()

goroutine 3 [running]:
main.c()
";
    let summary = classify_dump(dump).unwrap();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.states["running"], 3);
}

#[test]
fn test_states_merge_wait_durations() {
    let summary = classify_dump(DUMP).unwrap();

    // "IO wait, 12 minutes" and "IO wait" land in the same bucket
    assert_eq!(summary.states["IO wait"], 2);
    assert_eq!(summary.states["running"], 1);
    assert_eq!(summary.states["select"], 1);
}

#[test]
fn test_signature_is_innermost_frame() {
    let summary = classify_dump(DUMP).unwrap();

    assert_eq!(
        summary.signatures["internal/poll.runtime_pollWait(0x7f3c, 0x72)"],
        1
    );
    assert_eq!(summary.signatures["main.main()"], 1);
}

#[test]
fn test_percentages_sum_to_hundred() {
    let summary = classify_dump(DUMP).unwrap();
    let total_pct: f64 = summary.ranked_states().iter().map(|(_, _, pct)| pct).sum();
    assert!((total_pct - 100.0).abs() < 0.001);
}

#[test]
fn test_empty_input_is_no_stacks() {
    assert!(matches!(classify_dump(""), Err(ClassifyError::NoStacksFound)));
    assert!(matches!(
        classify_dump("some unrelated text\n"),
        Err(ClassifyError::NoStacksFound)
    ));
}

#[test]
fn test_binary_blob_is_not_classified() {
    // pprof protobuf data must be routed to the renderer instead
    assert_eq!(sniff_dump(&[0x0a, 0x20, 0xff, 0x00]), DumpKind::Binary);
}

#[test]
fn test_text_dump_round_trip_through_sniffer() {
    match sniff_dump(DUMP.as_bytes()) {
        DumpKind::Text(text) => {
            let summary = classify_dump(&text).unwrap();
            assert_eq!(summary.total, 4);
        }
        DumpKind::Binary => panic!("expected text dump"),
    }
}
