//! Session lifecycle phases, observed and logged.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Create,
    Start,
    Resume,
    Restart,
    Pause,
    Stop,
    Destroy,
}

impl LifecyclePhase {
    pub fn name(self) -> &'static str {
        match self {
            LifecyclePhase::Create => "onCreate",
            LifecyclePhase::Start => "onStart",
            LifecyclePhase::Resume => "onResume",
            LifecyclePhase::Restart => "onRestart",
            LifecyclePhase::Pause => "onPause",
            LifecyclePhase::Stop => "onStop",
            LifecyclePhase::Destroy => "onDestroy",
        }
    }
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Records lifecycle transitions in order and logs each one.
#[derive(Debug, Default)]
pub struct LifecycleObserver {
    history: Vec<LifecyclePhase>,
}

impl LifecycleObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, phase: LifecyclePhase) {
        tracing::debug!(target: "lifecycle", "{} Called", phase);
        self.history.push(phase);
    }

    pub fn current(&self) -> Option<LifecyclePhase> {
        self.history.last().copied()
    }

    pub fn history(&self) -> &[LifecyclePhase] {
        &self.history
    }

    /// Foreground: Create/Restart already happened, now visible and interactive.
    pub fn is_resumed(&self) -> bool {
        self.current() == Some(LifecyclePhase::Resume)
    }

    /// Session came to the foreground for the first time.
    pub fn started(&mut self) {
        self.observe(LifecyclePhase::Start);
        self.observe(LifecyclePhase::Resume);
    }

    /// Session lost the foreground.
    pub fn backgrounded(&mut self) {
        if self.is_resumed() {
            self.observe(LifecyclePhase::Pause);
            self.observe(LifecyclePhase::Stop);
        }
    }

    /// Session returned to the foreground after being stopped.
    pub fn foregrounded(&mut self) {
        if self.current() == Some(LifecyclePhase::Stop) {
            self.observe(LifecyclePhase::Restart);
            self.started();
        }
    }

    /// Session is ending. Emits only the phases not yet reached.
    pub fn destroyed(&mut self) {
        match self.current() {
            Some(LifecyclePhase::Destroy) => return,
            Some(LifecyclePhase::Resume) => {
                self.observe(LifecyclePhase::Pause);
                self.observe(LifecyclePhase::Stop);
            }
            Some(LifecyclePhase::Pause) => self.observe(LifecyclePhase::Stop),
            _ => {}
        }
        self.observe(LifecyclePhase::Destroy);
    }
}
