//! crates/logging/src/capture.rs
//! Thread-local collection of log entries emitted outside a trail.
//!
//! Helpers deep inside a transformation can call [`emit`] without receiving
//! a trail argument; the surrounding [`capture`] call gathers whatever they
//! emitted. Entries emitted while no capture is active accumulate in the
//! thread's pending buffer until [`drain_trail`] takes them.

use std::cell::RefCell;
use std::fmt;
use std::mem;

use trail::{LogEntry, LogTrail, Payload, Severity, TaggedValue};

thread_local! {
    static PENDING: RefCell<LogTrail> = const { RefCell::new(LogTrail::new()) };
}

/// Records an entry in the current thread's buffer.
pub fn emit(severity: Severity, message: impl Into<String>) {
    push(LogEntry::new(severity, message));
}

/// Records an entry built from preformatted arguments.
pub fn emit_fmt(severity: Severity, args: fmt::Arguments<'_>) {
    push(LogEntry::from_args(severity, args));
}

/// Records an existing entry.
pub fn push(entry: LogEntry) {
    PENDING.with(|pending| pending.borrow_mut().push(entry));
}

/// Number of entries waiting in the current thread's buffer.
#[must_use]
pub fn pending() -> usize {
    PENDING.with(|pending| pending.borrow().len())
}

/// Takes every buffered entry, leaving the buffer empty.
#[must_use]
pub fn drain_trail() -> LogTrail {
    PENDING.with(|pending| mem::take(&mut *pending.borrow_mut()))
}

/// Restores the outer buffer when a capture scope ends, even by unwinding.
struct Scope {
    outer: Option<LogTrail>,
}

impl Scope {
    fn enter() -> Self {
        Self {
            outer: Some(drain_trail()),
        }
    }

    fn exit(mut self) -> LogTrail {
        let captured = drain_trail();
        self.restore();
        captured
    }

    fn restore(&mut self) {
        if let Some(outer) = self.outer.take() {
            PENDING.with(|pending| {
                let mut pending = pending.borrow_mut();
                // Anything left in the scope is dropped on unwind.
                *pending = outer;
            });
        }
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Runs `f` and returns its result with every entry it emitted.
///
/// Entries buffered before the call are set aside and restored afterwards,
/// so captures nest: an inner capture sees only its own entries and the
/// outer capture does not see them.
///
/// # Examples
///
/// ```
/// use logging::capture::{capture, emit};
/// use trail::Severity;
///
/// fn parse(input: &str) -> u64 {
///     emit(Severity::Debug, format!("parsing {input}"));
///     input.parse().unwrap_or_default()
/// }
///
/// let (value, trail) = capture(|| parse("42"));
/// assert_eq!(value, 42);
/// assert_eq!(trail.messages().collect::<Vec<_>>(), ["parsing 42"]);
/// ```
pub fn capture<R, F>(f: F) -> (R, LogTrail)
where
    F: FnOnce() -> R,
{
    let scope = Scope::enter();
    let result = f();
    (result, scope.exit())
}

/// Builds a [`TaggedValue`] from the payload `f` returns and the entries it
/// emitted.
pub fn capture_value<P, F>(f: F) -> TaggedValue
where
    P: Into<Payload>,
    F: FnOnce() -> P,
{
    let (payload, trail) = capture(f);
    TaggedValue::with_trail(payload, trail)
}

/// Adapts a payload function into a stage whose emitted entries become the
/// result's trail.
///
/// The returned closure can be passed to [`TaggedValue::apply`] and the
/// other transformation methods.
///
/// # Examples
///
/// ```
/// use logging::capture::{capturing, emit};
/// use trail::{Payload, Severity, TaggedValue};
///
/// let value = TaggedValue::wrap(2u64).logged(Severity::Info, "loaded");
/// let doubled = value
///     .apply(capturing(|payload: &Payload| {
///         emit(Severity::Ok, "doubled");
///         payload.as_u64().unwrap_or_default() * 2
///     }))
///     .unwrap();
///
/// assert_eq!(doubled.payload().as_u64(), Some(4));
/// assert_eq!(doubled.trail().len(), 2);
/// ```
pub fn capturing<P, F>(f: F) -> impl FnOnce(&Payload) -> TaggedValue
where
    P: Into<Payload>,
    F: FnOnce(&Payload) -> P,
{
    move |payload: &Payload| capture_value(|| f(payload))
}
