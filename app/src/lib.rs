//! WebAssembly entry point for the folio page script.
//!
//! Loaded by the portfolio page as a module. On start it reads the optional
//! page configuration, then initializes each component independently; a
//! component whose markup is missing is skipped without affecting the rest.

mod components;
mod dom;
mod scheduler;
mod views;

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{FolioConfig, Result, Scheduler, TypingHandle, load_config};
use tracing::Level;
use wasm_bindgen::prelude::*;

use crate::scheduler::BrowserScheduler;

/// Id of the optional `<script type="application/json">` configuration block.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

thread_local! {
    static TYPING: RefCell<Option<TypingHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    // Fails only if a subscriber is already installed
    let _ = dioxus_logger::init(level);

    match dom::document() {
        Ok(document) if document.ready_state() == "loading" => {
            if let Err(e) = dom::listen(&document, "DOMContentLoaded", |_| boot()) {
                tracing::warn!(error = %e, "Failed to wait for DOMContentLoaded");
            }
        }
        Ok(_) => boot(),
        Err(e) => tracing::warn!(error = %e, "No document, page script inactive"),
    }
}

/// Stop the hero tagline animation, leaving its current text in place.
#[wasm_bindgen]
pub fn stop_typing() {
    TYPING.with(|typing| {
        if let Some(handle) = typing.borrow_mut().take() {
            handle.stop();
        }
    });
}

fn boot() {
    let config = read_config();
    let scheduler: Rc<dyn Scheduler> = Rc::new(BrowserScheduler::new());

    report("navigation", components::navigation::init(&config));
    report("reveal", components::reveal::init(&config, scheduler.clone()));
    report("filter", components::filter::init(&config, scheduler.clone()));
    report("contact", components::contact::init(&config));
    report("effects", components::effects::init(&config));
    if let Some(handle) = report("hero", components::hero::init(&config, scheduler)) {
        TYPING.with(|typing| *typing.borrow_mut() = Some(handle));
    }
}

fn read_config() -> FolioConfig {
    let source = dom::by_id(CONFIG_ELEMENT_ID)
        .ok()
        .and_then(|el| el.text_content());

    match load_config(source.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring page configuration");
            FolioConfig::default()
        }
    }
}

/// Log a component's startup outcome; missing markup is expected on some pages.
///
/// The skip path has no host test. Check it by loading a page with one
/// section removed: the debug log names the component and the rest still work.
fn report<T>(component: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => {
            tracing::debug!(component, "Initialized");
            Some(value)
        }
        Err(e) if e.is_missing_element() => {
            tracing::debug!(component, error = %e, "Skipped, markup not present");
            None
        }
        Err(e) => {
            tracing::warn!(component, error = %e, "Failed to initialize");
            None
        }
    }
}
