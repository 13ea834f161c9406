#![forbid(unsafe_code)]

//! Tracing integration tests.
//!
//! Spans enabled:
//!   cargo test -p orbit-layout --features tracing --test tracing_tests
//!
//! Zero-overhead verification (no feature):
//!   cargo test -p orbit-layout --test tracing_tests -- zero_overhead

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use orbit_layout::{ChildSpec, CircularLayout, MeasureConstraint};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A captured span or event with its fields and parent span name.
#[derive(Debug, Clone)]
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
struct Captured {
    name: String,
    fields: HashMap<String, String>,
    parent_name: Option<String>,
}

#[derive(Default)]
struct Capture {
    spans: Arc<Mutex<Vec<Captured>>>,
    events: Arc<Mutex<Vec<Captured>>>,
}

/// Visitor that extracts span and event fields.
struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        let parent_name = ctx
            .current_span()
            .id()
            .and_then(|id| ctx.span(id))
            .map(|span_ref| span_ref.name().to_string());
        self.spans.lock().unwrap().push(Captured {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
            parent_name,
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        let parent_name = ctx.event_span(event).map(|span| span.name().to_string());
        let fields: HashMap<String, String> = visitor.0.into_iter().collect();
        self.events.lock().unwrap().push(Captured {
            name: fields.get("message").cloned().unwrap_or_default(),
            fields,
            parent_name,
        });
    }
}

/// Set up a tracing subscriber with capture and run a closure.
fn with_capture<F>(f: F) -> (Vec<Captured>, Vec<Captured>)
where
    F: FnOnce(),
{
    let capture = Capture::default();
    let spans = capture.spans.clone();
    let events = capture.events.clone();
    let subscriber = tracing_subscriber::registry().with(capture);
    tracing::subscriber::with_default(subscriber, f);
    let spans = spans.lock().unwrap().clone();
    let events = events.lock().unwrap().clone();
    (spans, events)
}

fn sample_children() -> Vec<ChildSpec> {
    vec![
        ChildSpec::center(80, 80),
        ChildSpec::orbit(40, 40),
        ChildSpec::orbit(40, 40).hidden(),
        ChildSpec::orbit(40, 40).rotated(),
    ]
}

// ============================================================================
// Tests
// ============================================================================

#[test]
#[cfg(feature = "tracing")]
fn measure_and_place_open_spans() {
    let (spans, _) = with_capture(|| {
        let _ = CircularLayout::new().layout(
            &sample_children(),
            MeasureConstraint::Exact(300),
            MeasureConstraint::Exact(300),
            (0, 0),
        );
    });

    let measure = spans
        .iter()
        .find(|s| s.name == "circular_measure")
        .expect("missing circular_measure span");
    assert_eq!(measure.fields.get("children").map(String::as_str), Some("4"));
    assert_eq!(measure.fields.get("width").map(String::as_str), Some("Exact(300)"));

    let place = spans
        .iter()
        .find(|s| s.name == "circular_place")
        .expect("missing circular_place span");
    assert_eq!(place.fields.get("w").map(String::as_str), Some("300"));
    assert_eq!(place.parent_name, None, "place must not nest inside measure");
}

#[test]
#[cfg(feature = "tracing")]
fn completion_events_carry_pass_summary() {
    let (_, events) = with_capture(|| {
        let _ = CircularLayout::new().layout(
            &sample_children(),
            MeasureConstraint::Exact(300),
            MeasureConstraint::Exact(300),
            (0, 0),
        );
    });

    let measured = events
        .iter()
        .find(|e| e.name == "measure complete")
        .expect("missing measure summary");
    assert_eq!(measured.parent_name.as_deref(), Some("circular_measure"));
    assert_eq!(measured.fields.get("orbit").map(String::as_str), Some("2"));
    assert_eq!(measured.fields.get("diameter").map(String::as_str), Some("300"));

    let placed = events
        .iter()
        .find(|e| e.name == "place complete")
        .expect("missing place summary");
    assert_eq!(placed.fields.get("placed").map(String::as_str), Some("3"));

    let skipped = events
        .iter()
        .filter(|e| e.name == "skipping invisible child")
        .count();
    assert_eq!(skipped, 1);
}

#[test]
#[cfg(feature = "tracing")]
fn cut_desired_size_is_reported() {
    let (_, events) = with_capture(|| {
        let _ = CircularLayout::new().measure(
            &sample_children(),
            MeasureConstraint::AtMost(50),
            MeasureConstraint::Unconstrained,
        );
    });
    assert!(events.iter().any(|e| e.name == "desired size cut by constraint"));
}

#[test]
#[cfg(feature = "tracing")]
fn overhanging_orbit_children_are_reported() {
    let (_, events) = with_capture(|| {
        let layout = CircularLayout::new();
        let children = [ChildSpec::orbit(0, 0), ChildSpec::orbit(0, 0)];
        let oversized = |_, _: &ChildSpec, _, _| orbit_layout::Size::new(50, 50);
        let measured = layout.measure_with_measurer(
            &children,
            MeasureConstraint::Exact(40),
            MeasureConstraint::Exact(40),
            oversized,
        );
        let _ = layout.place(measured.pass, orbit_layout::Rect::new(0, 0, 40, 40));
    });
    let overhangs = events
        .iter()
        .filter(|e| e.name == "orbit child overhangs content")
        .count();
    assert_eq!(overhangs, 2);
}

/// Without the feature, no span or event reaches the subscriber.
#[test]
#[cfg(not(feature = "tracing"))]
fn zero_overhead_without_feature() {
    let (spans, events) = with_capture(|| {
        let _ = CircularLayout::new().layout(
            &sample_children(),
            MeasureConstraint::Exact(300),
            MeasureConstraint::Exact(300),
            (0, 0),
        );
    });
    assert!(spans.is_empty(), "unexpected spans: {spans:?}");
    assert!(events.is_empty(), "unexpected events: {events:?}");
}
