use crate::catalog::Catalog;
use crate::config::Strings;
use crate::lifecycle::{LifecycleObserver, LifecyclePhase};
use crate::share::{format_share_text, ShareSink};
use crate::snapshot::SessionSnapshot;
use crate::ui::header::share_label;
use crate::ui::layout::{dessert_rect, share_button_rect};
use crate::ui::mvi::Reducer;
use crate::ui::sales::{SalesIntent, SalesReducer, SalesState};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ToastKind {
    Info,
    Error,
}

/// Transient message shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    expires_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    /// Sales progress (MVI pattern).
    sales: SalesState,
    strings: Strings,
    /// Sharing facility (resource, managed outside MVI).
    share_sink: Box<dyn ShareSink>,
    toast: Option<Toast>,
    toast_duration: Duration,
    lifecycle: LifecycleObserver,
}

impl App {
    pub fn new(
        catalog: Arc<Catalog>,
        strings: Strings,
        toast_duration: Duration,
        share_sink: Box<dyn ShareSink>,
    ) -> Self {
        let mut lifecycle = LifecycleObserver::new();
        lifecycle.observe(LifecyclePhase::Create);
        Self {
            should_quit: false,
            size: None,
            sales: SalesState::new(catalog),
            strings,
            share_sink,
            toast: None,
            toast_duration,
            lifecycle,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn sales(&self) -> &SalesState {
        &self.sales
    }

    pub fn strings(&self) -> &Strings {
        &self.strings
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn lifecycle(&self) -> &LifecycleObserver {
        &self.lifecycle
    }

    pub fn lifecycle_mut(&mut self) -> &mut LifecycleObserver {
        &mut self.lifecycle
    }

    /// Dispatch an intent to the sales reducer.
    pub fn dispatch_sales(&mut self, intent: SalesIntent) {
        dispatch_mvi!(self, sales, SalesReducer, intent);
    }

    pub fn on_tap(&mut self) {
        self.dispatch_sales(SalesIntent::Tap);
        let model = self.sales.render_model();
        tracing::trace!(
            units_sold = model.units_sold,
            total_revenue = model.total_revenue,
            image = model.image_ref,
            "Dessert tapped"
        );
    }

    pub fn restore(&mut self, snapshot: SessionSnapshot) {
        tracing::info!(
            units_sold = snapshot.units_sold,
            total_revenue = snapshot.total_revenue,
            "Restoring session"
        );
        self.dispatch_sales(SalesIntent::Restore { snapshot });
    }

    pub fn reset(&mut self) {
        tracing::info!("Session reset");
        self.dispatch_sales(SalesIntent::Reset);
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.sales.snapshot()
    }

    pub fn share_text(&self) -> String {
        format_share_text(
            &self.strings.share_text,
            self.sales.units_sold(),
            self.sales.total_revenue(),
        )
    }

    /// Hand the share text to the sink. Returns whether it was delivered.
    pub fn on_share(&mut self) -> bool {
        let text = self.share_text();
        match self.share_sink.share(&text) {
            Ok(()) => {
                tracing::info!("Shared sales summary");
                let message = self.strings.shared.clone();
                self.show_toast(message, ToastKind::Info);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Share failed");
                let message = self.strings.sharing_not_available.clone();
                self.show_toast(message, ToastKind::Error);
                false
            }
        }
    }

    fn show_toast(&mut self, message: String, kind: ToastKind) {
        self.toast = Some(Toast {
            message,
            kind,
            expires_at: Instant::now() + self.toast_duration,
        });
    }

    pub fn on_tick(&mut self) {
        let now = Instant::now();
        if self.toast.as_ref().is_some_and(|toast| toast.is_expired(now)) {
            self.toast = None;
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Left click on the dessert card taps; on the header share button, shares.
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some((cols, rows)) = self.size else {
            return;
        };
        let area = Rect::new(0, 0, cols, rows);
        let position = Position::new(mouse.column, mouse.row);
        let label_width = share_label(&self.strings).chars().count() as u16;
        if share_button_rect(area, label_width).contains(position) {
            self.on_share();
        } else if dessert_rect(area).contains(position) {
            self.on_tap();
        }
    }

    pub fn on_focus_lost(&mut self) {
        self.lifecycle.backgrounded();
    }

    pub fn on_focus_gained(&mut self) {
        self.lifecycle.foregrounded();
    }
}
