//! Tests for stack frame and SQL formatting.

use pretty_assertions::assert_eq;
use query_trace_studio::formatter::{format_sql, TraceFormatter};
use query_trace_studio::parser::StackFrame;

fn site_packages_formatter() -> TraceFormatter {
    TraceFormatter::with_replacements(vec![
        (
            "/home/dev/envs/planning/lib/python3.4/site-packages/".to_string(),
            String::new(),
        ),
        (
            "/home/dev/src/planning-view/app/".to_string(),
            "app/".to_string(),
        ),
    ])
}

#[test]
fn frame_key_format() {
    let formatter = TraceFormatter::new();
    let frame = StackFrame::new("/a/b.py", 10, "f");
    assert_eq!(formatter.format_frame(&frame), "/a/b.py:10>f");
}

#[test]
fn installation_prefix_is_stripped() {
    let formatter = site_packages_formatter();
    let frame = StackFrame::new(
        "/home/dev/envs/planning/lib/python3.4/site-packages/django/db/models/query.py",
        1024,
        "_fetch_all",
    );
    assert_eq!(
        formatter.format_frame(&frame),
        "django/db/models/query.py:1024>_fetch_all"
    );
}

#[test]
fn source_root_is_aliased() {
    let formatter = site_packages_formatter();
    let frame = StackFrame::new("/home/dev/src/planning-view/app/views.py", 42, "list_plans");
    assert_eq!(formatter.format_frame(&frame), "app/views.py:42>list_plans");
}

#[test]
fn formatting_is_idempotent() {
    // An already-formatted path contains no raw prefixes to replace
    let formatter = site_packages_formatter();
    let frame = StackFrame::new("/home/dev/src/planning-view/app/views.py", 42, "list_plans");
    let once = formatter.format_frame(&frame);

    let reformatted = StackFrame::new(once.split(':').next().unwrap(), 42, "list_plans");
    let twice = formatter.format_frame(&reformatted);
    assert_eq!(twice, once);
}

#[test]
fn identical_frames_after_stripping_share_a_key() {
    // Two raw frames differing only in the stripped prefix must collapse to
    // the same tree edge
    let formatter = TraceFormatter::with_replacements(vec![
        ("/env-a/site-packages/".to_string(), String::new()),
        ("/env-b/site-packages/".to_string(), String::new()),
    ]);

    let a = StackFrame::new("/env-a/site-packages/django/db.py", 5, "execute");
    let b = StackFrame::new("/env-b/site-packages/django/db.py", 5, "execute");
    assert_eq!(formatter.format_frame(&a), formatter.format_frame(&b));
}

#[test]
fn sql_quote_stripping() {
    assert_eq!(
        format_sql("SELECT \"plans\".\"id\" FROM \"plans\""),
        "SELECT plans.id FROM plans"
    );
    assert_eq!(format_sql("SELECT 1"), "SELECT 1");
    assert_eq!(format_sql(""), "");
}
