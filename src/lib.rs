//! # News Reader
//!
//! A terminal front-end for a JSON news API. It shows the default article
//! list and a search box whose suggestions are fetched after a quiet period
//! following the last keystroke.
//!
//! ## Architecture
//!
//! Everything runs on one thread inside a [`tokio::task::LocalSet`]:
//! 1. **Host** ([`host`]): reads stdin lines and turns them into input and
//!    pointer events, redraws on request
//! 2. **Components** ([`components`]): the news list and the search header,
//!    each owning its own state
//! 3. **Scheduling** ([`debounce`]): single-slot cancelable delayed task
//! 4. **API** ([`api`]): `GET <base>/<path>` decoded into [`models::Article`]s
//!
//! Fetch failures never reach the view: they are logged and the component
//! keeps what it was already showing.

pub mod api;
pub mod cli;
pub mod components;
pub mod config;
pub mod debounce;
pub mod error;
pub mod events;
pub mod host;
pub mod layout;
pub mod models;

#[cfg(test)]
pub(crate) mod testing;
