//! Hero tagline typing animation.

use std::rc::Rc;

use folio_core::{FolioConfig, Result, Scheduler, Typer, TypingHandle, TypingLoop};

use crate::dom;
use crate::views::TyperDom;

pub fn init(config: &FolioConfig, scheduler: Rc<dyn Scheduler>) -> Result<TypingHandle> {
    let tagline = dom::query(&config.selectors.hero_tagline)?;
    let typer = Typer::new(&config.typer)?;
    Ok(TypingLoop::start(
        typer,
        TyperDom { tagline },
        scheduler,
        config.typer.start_delay_ms,
    ))
}
