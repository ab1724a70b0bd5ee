// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::Display;

use crate::{Error, Options, Tree};

/// A shorthand for [Loader]'s load callback.
pub type OnLoadFn = Box<dyn FnMut()>;

/// A pending fetch.
///
/// Returned by [`Loader::request`] and passed back to [`Loader::resolve`]
/// once the fetch is done.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Ticket {
    /// The fetch generation.
    pub generation: u64,
    /// The requested source.
    pub uri: String,
}

/// SVG markup source state.
///
/// Holds inline markup or markup fetched by the caller.
/// Each fetch is tagged with a generation number and only the response
/// to the latest request is applied. Older responses are dropped,
/// so a slow fetch can't overwrite a newer source.
///
/// The loader doesn't perform any I/O by itself.
pub struct Loader {
    markup: Option<String>,
    generation: u64,
    on_load: Option<OnLoadFn>,
}

impl Loader {
    /// Creates a new loader with optional inline markup.
    pub fn new(markup: Option<String>) -> Self {
        Loader {
            markup,
            generation: 0,
            on_load: None,
        }
    }

    /// Sets a callback that is invoked after a successful fetch was applied.
    pub fn set_on_load<F: FnMut() + 'static>(&mut self, f: F) {
        self.on_load = Some(Box::new(f));
    }

    /// Returns the current markup.
    pub fn markup(&self) -> Option<&str> {
        self.markup.as_deref()
    }

    /// Returns the latest fetch generation.
    ///
    /// Zero when nothing was requested yet.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Sets inline markup.
    ///
    /// Returns `true` when the markup has changed and the tree should be rebuilt.
    pub fn set_markup(&mut self, markup: Option<String>) -> bool {
        if self.markup == markup {
            return false;
        }

        self.markup = markup;
        true
    }

    /// Starts a new fetch.
    ///
    /// Any fetch requested before this one becomes stale.
    pub fn request(&mut self, uri: impl Into<String>) -> Ticket {
        self.generation += 1;
        Ticket {
            generation: self.generation,
            uri: uri.into(),
        }
    }

    /// Applies a fetch response.
    ///
    /// Returns `false` when the ticket is stale and the response was dropped.
    /// A failed fetch clears the markup.
    pub fn resolve<E: Display>(&mut self, ticket: Ticket, response: Result<String, E>) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "Fetch of '{}' was superseded by a newer request. Skipped.",
                ticket.uri
            );
            return false;
        }

        match response {
            Ok(text) => {
                self.markup = Some(text);
                if let Some(ref mut f) = self.on_load {
                    f();
                }
            }
            Err(e) => {
                log::warn!("Failed to fetch '{}' cause {}.", ticket.uri, e);
                self.markup = None;
            }
        }

        true
    }

    /// Builds a tree from the current markup.
    ///
    /// Returns `None` while there is no markup.
    pub fn tree(&self, opt: &Options) -> Result<Option<Tree>, Error> {
        match self.markup {
            Some(ref text) => Tree::from_str(text, opt).map(Some),
            None => Ok(None),
        }
    }
}

impl std::fmt::Debug for Loader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loader")
            .field("markup", &self.markup)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn inline_markup() {
        let mut loader = Loader::new(None);
        assert!(loader.set_markup(Some("<svg/>".to_string())));
        assert!(!loader.set_markup(Some("<svg/>".to_string())));
        assert_eq!(loader.markup(), Some("<svg/>"));
        assert!(loader.set_markup(None));
        assert_eq!(loader.markup(), None);
    }

    #[test]
    fn latest_fetch_wins() {
        let mut loader = Loader::new(None);
        let first = loader.request("a.svg");
        let second = loader.request("b.svg");
        assert_eq!(second.generation, 2);

        assert!(loader.resolve(second, Ok::<_, String>("<svg id='b'/>".to_string())));
        assert!(!loader.resolve(first, Ok::<_, String>("<svg id='a'/>".to_string())));
        assert_eq!(loader.markup(), Some("<svg id='b'/>"));
    }

    #[test]
    fn failed_fetch_clears_markup() {
        let mut loader = Loader::new(Some("<svg/>".to_string()));
        let ticket = loader.request("a.svg");
        assert!(loader.resolve(ticket, Err::<String, _>("not found")));
        assert_eq!(loader.markup(), None);
    }

    #[test]
    fn on_load_only_for_current() {
        let calls = Rc::new(Cell::new(0));
        let mut loader = Loader::new(None);
        {
            let calls = calls.clone();
            loader.set_on_load(move || calls.set(calls.get() + 1));
        }

        let stale = loader.request("a.svg");
        let current = loader.request("a.svg");
        loader.resolve(stale, Ok::<_, String>("<svg/>".to_string()));
        assert_eq!(calls.get(), 0);

        loader.resolve(current, Ok::<_, String>("<svg/>".to_string()));
        assert_eq!(calls.get(), 1);
    }
}
