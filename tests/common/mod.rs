// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use reskey::domain::{ExtractError, Result};
use reskey::ports::TextSource;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// A text source with scripted content.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct MockTextSource {
    location: PathBuf,
    text: Option<String>,
    fail_with: Option<String>,
    reads: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockTextSource {
    /// A source whose configuration exists with the given text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            location: PathBuf::from("mock/env.json"),
            text: Some(text.into()),
            fail_with: None,
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A source whose configuration does not exist.
    pub fn absent() -> Self {
        Self {
            text: None,
            ..Self::with_text("")
        }
    }

    /// A source whose reads fail with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::absent()
        }
    }

    /// Number of reads performed so far, shared across clones.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl TextSource for MockTextSource {
    fn name(&self) -> &str {
        "mock"
    }

    fn location(&self) -> &Path {
        &self.location
    }

    fn read_text(&self) -> Result<Option<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(message) => Err(ExtractError::SourceError {
                source_name: "mock".to_string(),
                message: message.clone(),
                source: None,
            }),
            None => Ok(self.text.clone()),
        }
    }
}

/// Records every tracing event emitted while it is installed.
#[derive(Clone, Default)]
pub struct EventCapture {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

#[allow(dead_code)]
impl EventCapture {
    /// Messages of all events at exactly `level`.
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Messages of all `WARN` events.
    pub fn warnings(&self) -> Vec<String> {
        self.messages_at(Level::WARN)
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{:?}", value);
        }
    }
}

impl<S: Subscriber> Layer<S> for EventCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.events
            .lock()
            .unwrap()
            .push((*event.metadata().level(), visitor.0));
    }
}

/// Runs `f` with an event-capturing subscriber installed on this thread.
pub fn capture_events<T>(f: impl FnOnce() -> T) -> (T, EventCapture) {
    let capture = EventCapture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, capture)
}

/// Writes `content` to `name` inside `dir` and returns the path.
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
