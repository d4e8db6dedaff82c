//! Page components
//!
//! Each module locates its elements, builds the matching `folio-core`
//! component over a DOM view, and wires browser events to it. A component
//! whose required markup is absent returns `FolioError::MissingElement` and
//! leaves the rest of the page untouched.

pub mod contact;
pub mod effects;
pub mod filter;
pub mod hero;
pub mod navigation;
pub mod reveal;

use folio_core::{Intersection, Result};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::js_error;

/// Observe `targets`, delivering each batch as indices into `targets`.
pub(crate) fn observe<F>(targets: Vec<Element>, threshold: f64, mut on_batch: F) -> Result<IntersectionObserver>
where
    F: FnMut(&[Intersection]) + 'static,
{
    let lookup = targets.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let batch: Vec<Intersection> = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry.target();
                    let idx = lookup.iter().position(|el| *el == target)?;
                    Some(Intersection {
                        target: idx,
                        ratio: entry.intersection_ratio(),
                        is_intersecting: entry.is_intersecting(),
                    })
                })
                .collect();
            on_batch(&batch);
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(js_error)?;
    callback.forget();

    for el in &targets {
        observer.observe(el);
    }
    Ok(observer)
}
