//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use dessert_clicker::catalog::{Catalog, ItemRecord};
use dessert_clicker::config::Strings;
use dessert_clicker::share::{ShareError, ShareSink};
use dessert_clicker::ui::app::App;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

pub type SpyBuffer = Arc<Mutex<Vec<String>>>;

/// Records every shared text.
pub struct SpySink {
    shared: SpyBuffer,
}

impl SpySink {
    pub fn new() -> (Self, SpyBuffer) {
        let shared = SpyBuffer::default();
        (
            Self {
                shared: Arc::clone(&shared),
            },
            shared,
        )
    }
}

impl ShareSink for SpySink {
    fn share(&mut self, text: &str) -> Result<(), ShareError> {
        self.shared.lock().push(text.to_string());
        Ok(())
    }
}

/// Simulates a host with no sharing facility.
pub struct UnavailableSink;

impl ShareSink for UnavailableSink {
    fn share(&mut self, _text: &str) -> Result<(), ShareError> {
        Err(ShareError::Unavailable("no clipboard".to_string()))
    }
}

/// The three-tier catalog used across tests: A(5, 0), B(10, 5), C(15, 10).
pub fn abc_catalog() -> Catalog {
    Catalog::new(vec![
        ItemRecord::new("A", 5, 0),
        ItemRecord::new("B", 10, 5),
        ItemRecord::new("C", 15, 10),
    ])
    .expect("valid catalog")
}

pub fn make_app_with_sink(sink: Box<dyn ShareSink>) -> App {
    App::new(
        Arc::new(abc_catalog()),
        Strings::default(),
        Duration::from_secs(3),
        sink,
    )
}

pub fn make_app() -> (App, SpyBuffer) {
    let (sink, shared) = SpySink::new();
    (make_app_with_sink(Box::new(sink)), shared)
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    press_key_with(code, KeyModifiers::NONE)
}

pub fn press_key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}
