//! Behavior of the folio page script, independent of any rendering host.
//!
//! Each component owns its decision state and writes to the page through a
//! view trait from [`view`]; timed work goes through a [`Scheduler`].

pub mod config;
pub mod contact;
pub mod effects;
pub mod error;
pub mod filter;
pub mod nav;
pub mod reveal;
pub mod scheduler;
pub mod typer;
pub mod view;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use config::load_config;
pub use contact::{ContactField, ContactFormBridge, ContactMessage, SubmitEvent};
pub use effects::{ButtonBox, InteractionEffects, RippleGeometry};
pub use error::{FolioError, Result};
pub use filter::ProjectFilter;
pub use nav::NavigationController;
pub use reveal::RevealAnimator;
pub use scheduler::{ManualScheduler, Scheduler, Task, TimerId};
pub use typer::{TypeStep, Typer, TyperState, TypingHandle, TypingLoop};
pub use view::Intersection;
pub use folio_types::FolioConfig;
