//! View components.
//!
//! | Component | Module | State |
//! |-----------|--------|-------|
//! | News card | [`card`] | none, renders one article |
//! | News list | [`news_list`] | [`news_list::ListState`] |
//! | Search header | [`search`] | [`search::SearchState`] |
//! | Root | [`app`] | none, composes the two above |
//!
//! Components render to plain text lines. Stateful components keep their
//! state behind `Rc<RefCell<_>>` so that deferred work spawned on the local
//! task set can update it, and signal a shared [`tokio::sync::Notify`] when
//! the host should redraw.

pub mod app;
pub mod card;
pub mod news_list;
pub mod search;
