//! Hero tagline typing animation.
//!
//! [`Typer`] is the pure state machine: each [`Typer::step`] yields the text
//! to display and how long to wait before the next step. [`TypingLoop`]
//! drives it on a [`Scheduler`] until its [`TypingHandle`] is stopped.
//!
//! ```text
//!   deleting ──(char_index == 0, gap)──▶ typing (next role)
//!      ▲                                    │
//!      └──────(char_index == len, hold)─────┘
//! ```

use std::cell::Cell;
use std::rc::Rc;

use folio_types::TyperConfig;

use crate::error::{FolioError, Result};
use crate::scheduler::{Scheduler, TimerId};
use crate::view::TyperView;

/// Output of one animation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    /// Wait before the next step
    pub delay_ms: u32,
}

/// Cursor position in the role cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TyperState {
    pub role_index: usize,
    /// Characters of the current role currently shown
    pub char_index: usize,
    pub deleting: bool,
}

#[derive(Debug, Clone, Copy)]
struct Delays {
    typing: u32,
    deleting: u32,
    hold: u32,
    gap: u32,
}

#[derive(Debug, Clone)]
pub struct Typer {
    roles: Vec<String>,
    state: TyperState,
    delays: Delays,
}

impl Typer {
    /// Starts fully typed on the first role, about to delete it.
    pub fn new(config: &TyperConfig) -> Result<Self> {
        let Some(first) = config.roles.first() else {
            return Err(FolioError::InvalidConfig("typer needs at least one role".to_string()));
        };
        if config.roles.iter().any(|r| r.is_empty()) {
            return Err(FolioError::InvalidConfig("typer roles must not be empty".to_string()));
        }

        Ok(Self {
            state: TyperState {
                role_index: 0,
                char_index: first.chars().count(),
                deleting: true,
            },
            roles: config.roles.clone(),
            delays: Delays {
                typing: config.type_delay_ms,
                deleting: config.delete_delay_ms,
                hold: config.hold_delay_ms,
                gap: config.gap_delay_ms,
            },
        })
    }

    pub fn state(&self) -> TyperState {
        self.state
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Advance one character and report what to show.
    pub fn step(&mut self) -> TypeStep {
        let role = &self.roles[self.state.role_index];
        let len = role.chars().count();

        if self.state.deleting {
            self.state.char_index = self.state.char_index.saturating_sub(1);
        } else {
            self.state.char_index = (self.state.char_index + 1).min(len);
        }
        let text: String = role.chars().take(self.state.char_index).collect();

        let mut delay_ms = if self.state.deleting {
            self.delays.deleting
        } else {
            self.delays.typing
        };

        if !self.state.deleting && self.state.char_index == len {
            delay_ms = self.delays.hold;
            self.state.deleting = true;
        } else if self.state.deleting && self.state.char_index == 0 {
            self.state.deleting = false;
            self.state.role_index = (self.state.role_index + 1) % self.roles.len();
            delay_ms = self.delays.gap;
        }

        TypeStep { text, delay_ms }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Driver
// ─────────────────────────────────────────────────────────────────────────────

struct LoopShared {
    scheduler: Rc<dyn Scheduler>,
    stopped: Cell<bool>,
    pending: Cell<Option<TimerId>>,
    steps: Cell<u64>,
}

/// Stop handle for a running [`TypingLoop`].
///
/// Dropping the handle leaves the loop running; call [`TypingHandle::stop`].
#[derive(Clone)]
pub struct TypingHandle {
    shared: Rc<LoopShared>,
}

impl TypingHandle {
    /// Cancel the pending step. No further text is written.
    pub fn stop(&self) {
        if self.shared.stopped.replace(true) {
            return;
        }
        if let Some(id) = self.shared.pending.take() {
            self.shared.scheduler.cancel(id);
        }
        tracing::debug!(steps = self.shared.steps.get(), "Typing loop stopped");
    }

    pub fn is_running(&self) -> bool {
        !self.shared.stopped.get()
    }

    /// Steps executed so far.
    pub fn steps(&self) -> u64 {
        self.shared.steps.get()
    }
}

pub struct TypingLoop;

impl TypingLoop {
    /// Run `typer` forever, writing each step to `view`. The first step
    /// happens after `start_delay_ms`.
    pub fn start<V: TyperView + 'static>(
        typer: Typer,
        view: V,
        scheduler: Rc<dyn Scheduler>,
        start_delay_ms: u32,
    ) -> TypingHandle {
        let shared = Rc::new(LoopShared {
            scheduler,
            stopped: Cell::new(false),
            pending: Cell::new(None),
            steps: Cell::new(0),
        });
        schedule_step(typer, view, shared.clone(), start_delay_ms);
        TypingHandle { shared }
    }
}

fn schedule_step<V: TyperView + 'static>(
    mut typer: Typer,
    view: V,
    shared: Rc<LoopShared>,
    delay_ms: u32,
) {
    let task_shared = shared.clone();
    let id = shared.scheduler.schedule(
        delay_ms,
        Box::new(move || {
            if task_shared.stopped.get() {
                return;
            }
            let step = typer.step();
            view.show_text(&step.text);
            task_shared.steps.set(task_shared.steps.get() + 1);
            schedule_step(typer, view, task_shared, step.delay_ms);
        }),
    );
    shared.pending.set(Some(id));
}
