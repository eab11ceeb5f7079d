use super::*;

fn trail_of(entries: &[(Severity, &str)]) -> LogTrail {
    entries
        .iter()
        .map(|&(severity, message)| LogEntry::new(severity, message))
        .collect()
}

fn messages(trail: &LogTrail) -> Vec<&str> {
    trail.messages().collect()
}

#[test]
fn log_appends_in_call_order() {
    let mut trail = LogTrail::new();
    trail.log(Severity::Info, "one");
    trail.log(Severity::Error, "two");
    trail.log(Severity::Ok, "three");

    assert_eq!(messages(&trail), ["one", "two", "three"]);
    assert_eq!(trail.last().map(LogEntry::severity), Some(Severity::Ok));
}

#[test]
fn append_copy_leaves_source_intact() {
    let mut dest = trail_of(&[(Severity::Info, "a")]);
    let source = trail_of(&[(Severity::Warn, "b"), (Severity::Error, "c")]);

    dest.append_copy(&source);

    assert_eq!(messages(&dest), ["a", "b", "c"]);
    assert_eq!(messages(&source), ["b", "c"]);
}

#[test]
fn append_copy_into_empty_trail_becomes_source() {
    let mut dest = LogTrail::new();
    let source = trail_of(&[(Severity::Warn, "b")]);

    dest.append_copy(&source);

    assert_eq!(dest, source);
}

#[test]
fn append_move_splices_entries() {
    let mut dest = trail_of(&[(Severity::Info, "a")]);
    let source = trail_of(&[(Severity::Warn, "b"), (Severity::Error, "c")]);

    dest.append_move(source);

    assert_eq!(messages(&dest), ["a", "b", "c"]);
}

#[test]
fn append_from_empties_source() {
    let mut dest = LogTrail::new();
    let mut source = trail_of(&[(Severity::Warn, "b"), (Severity::Error, "c")]);

    dest.append_from(&mut source);

    assert_eq!(messages(&dest), ["b", "c"]);
    assert!(source.is_empty());
}

#[test]
fn prepend_copy_places_source_first() {
    let mut dest = trail_of(&[(Severity::Info, "c"), (Severity::Info, "d")]);
    let source = trail_of(&[(Severity::Ok, "a"), (Severity::Debug, "b")]);

    dest.prepend_copy(&source);

    assert_eq!(messages(&dest), ["a", "b", "c", "d"]);
    assert_eq!(messages(&source), ["a", "b"]);
}

#[test]
fn prepend_move_places_source_first() {
    let mut dest = trail_of(&[(Severity::Info, "c")]);
    let source = trail_of(&[(Severity::Ok, "a"), (Severity::Debug, "b")]);

    dest.prepend_move(source);

    assert_eq!(messages(&dest), ["a", "b", "c"]);
}

#[test]
fn prepend_from_modifies_destination_and_empties_source() {
    let mut dest = trail_of(&[(Severity::Info, "c")]);
    let mut source = trail_of(&[(Severity::Ok, "a"), (Severity::Debug, "b")]);

    dest.prepend_from(&mut source);

    assert_eq!(messages(&dest), ["a", "b", "c"]);
    assert!(source.is_empty());
}

#[test]
fn prepend_into_empty_trail() {
    let mut dest = LogTrail::new();
    dest.prepend_copy(&trail_of(&[(Severity::Ok, "a")]));
    assert_eq!(messages(&dest), ["a"]);

    let mut dest = LogTrail::new();
    dest.prepend_move(trail_of(&[(Severity::Ok, "b")]));
    assert_eq!(messages(&dest), ["b"]);
}

#[test]
fn filter_keeps_entries_at_or_above_threshold() {
    let mut trail = trail_of(&[
        (Severity::Ok, "ok"),
        (Severity::Info, "info"),
        (Severity::Debug, "debug"),
        (Severity::Warn, "warn"),
        (Severity::Error, "error"),
    ]);

    let removed = trail.filter(Severity::Warn);

    assert_eq!(removed, 3);
    assert_eq!(messages(&trail), ["warn", "error"]);
}

#[test]
fn filter_uses_declaration_order() {
    let mut trail = trail_of(&[(Severity::Debug, "debug"), (Severity::Info, "info")]);

    trail.filter(Severity::Debug);

    assert_eq!(messages(&trail), ["debug"]);
}

#[test]
fn filter_removes_leading_and_interleaved_entries() {
    let mut trail = trail_of(&[
        (Severity::Ok, "a"),
        (Severity::Ok, "b"),
        (Severity::Error, "c"),
        (Severity::Info, "d"),
        (Severity::Warn, "e"),
        (Severity::Ok, "f"),
    ]);

    trail.filter(Severity::Warn);

    assert_eq!(messages(&trail), ["c", "e"]);
}

#[test]
fn filter_on_empty_trail_is_a_no_op() {
    let mut trail = LogTrail::new();
    assert_eq!(trail.filter(Severity::Error), 0);
    assert!(trail.is_empty());
}

#[test]
fn filter_at_lowest_threshold_keeps_everything() {
    let mut trail = trail_of(&[(Severity::Ok, "a"), (Severity::Error, "b")]);
    assert_eq!(trail.filter(Severity::Ok), 0);
    assert_eq!(trail.len(), 2);
}

#[test]
fn clear_then_log_starts_fresh() {
    let mut trail = trail_of(&[
        (Severity::Ok, "1"),
        (Severity::Info, "2"),
        (Severity::Debug, "3"),
        (Severity::Warn, "4"),
        (Severity::Error, "5"),
    ]);

    trail.clear();
    assert!(trail.is_empty());

    trail.log(Severity::Ok, "restarted");
    assert_eq!(trail.len(), 1);
    assert_eq!(trail.as_slice(), [LogEntry::new(Severity::Ok, "restarted")]);
}

#[test]
fn at_or_above_does_not_mutate() {
    let trail = trail_of(&[
        (Severity::Ok, "a"),
        (Severity::Warn, "b"),
        (Severity::Info, "c"),
    ]);
    let snapshot = trail.clone();

    let visible: Vec<_> = trail
        .at_or_above(Severity::Info)
        .map(LogEntry::message)
        .collect();

    assert_eq!(visible, ["b", "c"]);
    assert_eq!(trail.count_at_or_above(Severity::Warn), 1);
    assert_eq!(trail, snapshot);
}

#[test]
fn highest_severity_uses_ordinal_order() {
    assert_eq!(LogTrail::new().highest_severity(), None);

    let trail = trail_of(&[(Severity::Info, "a"), (Severity::Debug, "b")]);
    assert_eq!(trail.highest_severity(), Some(Severity::Debug));
}

#[test]
fn iterators_agree_with_slice() {
    let trail = trail_of(&[(Severity::Ok, "a"), (Severity::Warn, "b")]);

    assert_eq!(trail.iter().len(), 2);
    assert_eq!(trail.iter().rev().next().map(LogEntry::message), Some("b"));

    let borrowed: Vec<_> = (&trail).into_iter().cloned().collect();
    let owned: Vec<_> = trail.clone().into_iter().collect();
    assert_eq!(borrowed, owned);
    assert_eq!(owned.as_slice(), trail.as_slice());
}

#[test]
fn extend_appends_in_order() {
    let mut trail = trail_of(&[(Severity::Ok, "a")]);
    trail.extend([
        LogEntry::new(Severity::Info, "b"),
        LogEntry::new(Severity::Info, "c"),
    ]);
    assert_eq!(messages(&trail), ["a", "b", "c"]);
}
