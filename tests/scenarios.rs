//! End-to-end scenarios exercising the facade.
//!
//! Each section wraps a value, runs it through logged stages, and checks the
//! resulting trail and its rendering.

use logtrail::logging::capture::{capture, capturing, emit};
use logtrail::{
    ColorMode, LineMode, LogEntry, LogTrail, Payload, PayloadKind, RenderConfig, Severity,
    TaggedValue, TrailError, declare, display, render_trail,
};

fn render(value: &TaggedValue, threshold: Severity) -> String {
    let mut out = Vec::new();
    display(&mut out, value, threshold, ColorMode::Never).expect("vec writes never fail");
    String::from_utf8(out).expect("utf-8")
}

fn shout(payload: &Payload) -> TaggedValue {
    let upper = payload.as_str().unwrap_or_default().to_uppercase();
    TaggedValue::wrap(upper).logged(Severity::Ok, "done")
}

// ============================================================================
// Scenario 1: wrap, log, transform, render
// ============================================================================

/// Verifies the greeting pipeline's payload and full rendering.
#[test]
fn greeting_is_shouted_with_full_history() {
    let greeting = TaggedValue::wrap("hello").logged(Severity::Info, "start");

    let shouted = greeting.apply(shout).expect("string kind preserved");

    assert_eq!(shouted.kind(), PayloadKind::Str);
    assert_eq!(shouted.payload().as_str(), Some("HELLO"));
    assert_eq!(render(&shouted, Severity::Ok), "[INFO ] start\n[OKAY ] done\n");
}

/// Verifies that an `Info` threshold hides the `Ok` entry because `Ok`
/// ranks lowest.
#[test]
fn info_threshold_hides_done() {
    let greeting = TaggedValue::wrap("hello").logged(Severity::Info, "start");
    let shouted = greeting.apply(shout).expect("string kind preserved");

    assert_eq!(render(&shouted, Severity::Info), "[INFO ] start\n");
    assert_eq!(shouted.trail().len(), 2);
}

/// Verifies that the input value is untouched by a borrowing transformation.
#[test]
fn input_value_survives_transformation() {
    let greeting = TaggedValue::wrap("hello").logged(Severity::Info, "start");
    let _ = greeting.apply(shout).expect("string kind preserved");

    assert_eq!(greeting.payload().as_str(), Some("hello"));
    assert_eq!(render(&greeting, Severity::Ok), "[INFO ] start\n");
}

// ============================================================================
// Scenario 2: filtering
// ============================================================================

/// Verifies that filtering at `Warn` keeps exactly `Warn` and `Error`.
#[test]
fn filter_keeps_warn_and_error() {
    let mut trail: LogTrail = Severity::ALL
        .into_iter()
        .map(|severity| LogEntry::new(severity, severity.as_str()))
        .collect();

    let removed = trail.filter(Severity::Warn);

    assert_eq!(removed, 3);
    assert_eq!(
        trail.iter().map(LogEntry::severity).collect::<Vec<_>>(),
        [Severity::Warn, Severity::Error]
    );
}

/// Verifies that `Debug` outranks `Info` when filtering.
#[test]
fn filter_at_info_keeps_debug() {
    let mut value = TaggedValue::wrap(0u64);
    value.debug("detail");
    value.info("summary");
    value.ok("fine");

    value.trail_mut().filter(Severity::Info);

    assert_eq!(
        value.trail().messages().collect::<Vec<_>>(),
        ["detail", "summary"]
    );
}

// ============================================================================
// Scenario 3: clear and restart
// ============================================================================

/// Verifies that a cleared trail holds only entries logged afterwards.
#[test]
fn clear_then_log_leaves_one_entry() {
    let mut value = TaggedValue::wrap(1.0f64);
    for severity in Severity::ALL {
        value.log(severity, "old");
    }
    assert_eq!(value.trail().len(), 5);

    value.trail_mut().clear();
    value.log(Severity::Ok, "restarted");

    assert_eq!(render(&value, Severity::Ok), "[OKAY ] restarted\n");
}

// ============================================================================
// Scenario 4: composition
// ============================================================================

/// Verifies three composed stages yield three entries in call order.
#[test]
fn three_stages_yield_three_entries() {
    let stage = |label: &'static str| {
        move |payload: &Payload| {
            TaggedValue::wrap(payload.as_int().unwrap_or_default() * 2).logged(Severity::Info, label)
        }
    };

    let result = TaggedValue::wrap(1i32)
        .and_then(stage("first"))
        .and_then(|v| v.and_then(stage("second")))
        .and_then(|v| v.and_then(stage("third")))
        .expect("int kind preserved");

    assert_eq!(result.payload().as_int(), Some(8));
    assert_eq!(
        render(&result, Severity::Ok),
        "[INFO ] first\n[INFO ] second\n[INFO ] third\n"
    );
}

/// Verifies that a stage declaring the wrong kind is rejected before it runs.
#[test]
fn declared_kind_mismatch_is_reported() {
    let value = TaggedValue::wrap(3u64).logged(Severity::Info, "loaded");
    let stage = declare(PayloadKind::Str, |_: &Payload| {
        unreachable!("stage must not run when its declared kind mismatches")
    });

    let err = value.apply_stage(stage).expect_err("kinds differ");

    assert_eq!(
        err,
        TrailError::KindMismatch {
            expected: PayloadKind::U64,
            found: PayloadKind::Str,
        }
    );
    assert_eq!(value.trail().len(), 1);
}

// ============================================================================
// Configuration and capture together
// ============================================================================

/// Verifies a pipeline whose helpers emit through the capture buffer and
/// whose output is shaped by render tokens.
#[test]
fn captured_helpers_render_through_config() {
    fn checked_half(n: u64) -> u64 {
        if n % 2 == 1 {
            emit(Severity::Warn, format!("{n} is odd, rounding down"));
        }
        n / 2
    }

    let value = TaggedValue::wrap(9u64).logged(Severity::Info, "received");
    let halved = value
        .apply(capturing(|payload: &Payload| {
            checked_half(payload.as_u64().unwrap_or_default())
        }))
        .expect("u64 kind preserved");

    let mut config = RenderConfig::default();
    config
        .apply_tokens("threshold=warn,color=never,newline=true")
        .expect("valid tokens");
    assert_eq!(config.line_mode, LineMode::WithNewline);

    let mut sink = config.sink(Vec::new());
    sink.write_value(&halved).expect("vec writes never fail");

    assert_eq!(halved.payload().as_u64(), Some(4));
    assert_eq!(
        String::from_utf8(sink.into_inner()).expect("utf-8"),
        "[WARN ] 9 is odd, rounding down\n"
    );
}

/// Verifies that a bare capture collects entries without a value.
#[test]
fn capture_collects_free_standing_entries() {
    let (sum, trail) = capture(|| {
        emit(Severity::Debug, "adding");
        2 + 2
    });

    assert_eq!(sum, 4);
    assert_eq!(
        render_trail(&trail, Severity::Ok, ColorMode::Never),
        "[DEBUG] adding\n"
    );
}
