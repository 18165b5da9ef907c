//! Search input with a debounced suggestion dropdown.
//!
//! State lives in [`SearchState`] and is only touched by three paths: the
//! input handler, the debounced fetch, and the outside-click handler.
//!
//! - Every change to the term re-arms the debounce. Only the timer that
//!   survives the full window issues a fetch, for whatever the term is at
//!   that moment (an empty term fetches `news/`, the unfiltered set).
//! - Typing shows the dropdown immediately. Old suggestions stay visible
//!   under the new term until the fetch resolves.
//! - A pointer event outside the input row and the dropdown resets to idle.
//! - In-flight fetches are never cancelled. Unless `discard_stale` is set, a
//!   slow response for an older term can overwrite a newer one.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use tokio::sync::Notify;
use tracing::{debug, info, instrument, warn};

use crate::api::{NewsApi, TermEncoding, search_path};
use crate::components::card::render_cards;
use crate::config::Settings;
use crate::debounce::Debouncer;
use crate::error::ApiError;
use crate::events::{EventTarget, Listener};
use crate::layout::{Rect, Region};
use crate::models::Article;

const PLACEHOLDER: &str = "Search...";
const DROPDOWN_INDENT: &str = "  ";

/// Snapshot of the search header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Current input value.
    pub term: String,
    /// Articles from the most recent applied search response.
    pub suggestions: Vec<Article>,
    /// Whether the dropdown is shown. Set by any input, cleared by an
    /// outside click.
    pub visible: bool,
}

impl SearchState {
    /// Empty term, no suggestions and a hidden dropdown.
    pub fn is_idle(&self) -> bool {
        self.term.is_empty() && self.suggestions.is_empty() && !self.visible
    }

    fn dropdown_lines(&self) -> Vec<String> {
        if self.visible {
            render_cards(&self.suggestions, DROPDOWN_INDENT)
        } else {
            Vec::new()
        }
    }
}

/// Tunables for [`SearchHeader`]. The default is a 1000 ms debounce,
/// percent-encoded terms and no stale-response guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Quiet period after the last keystroke before a fetch is issued.
    pub debounce: Duration,
    pub term_encoding: TermEncoding,
    /// Drop responses that were superseded by a later fetch or a dismissal.
    pub discard_stale: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(1000),
            term_encoding: TermEncoding::Percent,
            discard_stale: false,
        }
    }
}

impl From<&Settings> for SearchOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            debounce: settings.debounce,
            term_encoding: settings.term_encoding,
            discard_stale: settings.discard_stale,
        }
    }
}

struct Inner {
    state: SearchState,
    mounted: bool,
    /// Bumped for every issued fetch and on dismissal.
    generation: u64,
    anchor: Rect,
}

impl Inner {
    fn region(&self) -> Rect {
        let rows = self.state.dropdown_lines().len();
        self.anchor
            .extend_down(u16::try_from(rows).unwrap_or(u16::MAX))
    }
}

struct Core<A> {
    api: Rc<A>,
    options: SearchOptions,
    redraw: Rc<Notify>,
    inner: RefCell<Inner>,
    debouncer: RefCell<Debouncer>,
}

impl<A: NewsApi + 'static> Core<A> {
    fn input(self: &Rc<Self>, value: &str) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            inner.state.visible = true;
            let changed = inner.state.term != value;
            if changed {
                inner.state.term = value.to_string();
            }
            changed
        };
        if changed {
            self.schedule();
        }
        self.redraw.notify_one();
    }

    fn dismiss(self: &Rc<Self>) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let changed = !inner.state.term.is_empty();
            inner.state = SearchState::default();
            inner.generation += 1;
            changed
        };
        debug!("Pointer outside search region; dropdown dismissed");
        if changed {
            self.schedule();
        }
        self.redraw.notify_one();
    }

    fn schedule(self: &Rc<Self>) {
        let core = Rc::downgrade(self);
        self.debouncer.borrow_mut().schedule(resolve(core));
    }

    fn apply(&self, generation: u64, result: Result<Vec<Article>, ApiError>) {
        let mut inner = self.inner.borrow_mut();
        if !inner.mounted {
            debug!(generation, "Search header unmounted; dropping suggestions");
            return;
        }
        if self.options.discard_stale && generation != inner.generation {
            debug!(
                generation,
                latest = inner.generation,
                "Discarding stale suggestions"
            );
            return;
        }
        match result {
            Ok(articles) => {
                info!(generation, count = articles.len(), "Suggestions updated");
                inner.state.suggestions = articles;
                drop(inner);
                self.redraw.notify_one();
            }
            Err(e) => warn!(generation, error = %e, "Suggestion fetch failed; keeping previous suggestions"),
        }
    }
}

/// Fetch suggestions for the term current at the moment the debounce fires.
#[instrument(level = "debug", skip_all)]
async fn resolve<A: NewsApi + 'static>(core: Weak<Core<A>>) {
    let (api, path, generation) = {
        let Some(core) = core.upgrade() else {
            return;
        };
        let mut inner = core.inner.borrow_mut();
        inner.generation += 1;
        let path = search_path(&inner.state.term, core.options.term_encoding);
        debug!(term = %inner.state.term, %path, generation = inner.generation, "Fetching suggestions");
        (Rc::clone(&core.api), path, inner.generation)
    };

    let result = api.get(&path).await;

    match core.upgrade() {
        Some(core) => core.apply(generation, result),
        None => debug!(generation, "Search header dropped before suggestions arrived"),
    }
}

/// The search box and its suggestion dropdown.
pub struct SearchHeader<A> {
    core: Rc<Core<A>>,
    listener: Option<Listener>,
}

impl<A: NewsApi + 'static> SearchHeader<A> {
    pub fn new(api: Rc<A>, options: SearchOptions, redraw: Rc<Notify>) -> Self {
        Self {
            core: Rc::new(Core {
                api,
                options,
                redraw,
                inner: RefCell::new(Inner {
                    state: SearchState::default(),
                    mounted: false,
                    generation: 0,
                    anchor: Rect::new(0, 0, u16::MAX, 1),
                }),
                debouncer: RefCell::new(Debouncer::new(options.debounce)),
            }),
            listener: None,
        }
    }

    /// Place the input row. The dropdown hangs directly below it.
    pub fn set_anchor(&mut self, anchor: Rect) {
        self.core.inner.borrow_mut().anchor = anchor;
    }

    /// Attach the outside-click listener and arm the initial fetch.
    pub fn mount(&mut self, target: &EventTarget) {
        if self.listener.is_some() {
            debug!("Search header already mounted");
            return;
        }
        self.core.inner.borrow_mut().mounted = true;

        let core = Rc::clone(&self.core);
        self.listener = Some(target.listen(move |event| {
            let inside = core.inner.borrow().region().contains(event.position);
            if !inside {
                core.dismiss();
            }
        }));
        self.core.schedule();
        debug!("Search header mounted");
    }

    /// Detach the listener and cancel a pending debounce. Responses still in
    /// flight are dropped when they arrive.
    pub fn unmount(&mut self) {
        if self.listener.take().is_none() {
            return;
        }
        self.core.inner.borrow_mut().mounted = false;
        self.core.debouncer.borrow_mut().cancel();
        debug!("Search header unmounted");
    }

    /// Handle a change of the input value.
    pub fn input(&self, value: &str) {
        self.core.input(value);
    }

    pub fn state(&self) -> SearchState {
        self.core.inner.borrow().state.clone()
    }

    pub fn region(&self) -> Rect {
        self.core.inner.borrow().region()
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    pub fn debounce_pending(&self) -> bool {
        self.core.debouncer.borrow().is_pending()
    }

    pub fn lines(&self) -> Vec<String> {
        let inner = self.core.inner.borrow();
        let input = if inner.state.term.is_empty() {
            PLACEHOLDER
        } else {
            inner.state.term.as_str()
        };
        let mut lines = vec![format!("> {}", input)];
        lines.extend(inner.state.dropdown_lines());
        lines
    }
}
