//! The default article list shown below the search header.
//!
//! The list fetches `news` exactly once, on its first mount. There is no
//! refresh. A failed fetch is logged and leaves the list empty.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tokio::sync::Notify;
use tokio::task;
use tracing::{debug, info, instrument, warn};

use crate::api::{NewsApi, news_path};
use crate::components::card::render_cards;
use crate::models::Article;

/// What the list has to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListState {
    /// Nothing fetched yet, or the fetch failed.
    #[default]
    Empty,
    /// Articles in response order.
    Loaded(Vec<Article>),
}

impl ListState {
    pub fn articles(&self) -> &[Article] {
        match self {
            ListState::Empty => &[],
            ListState::Loaded(articles) => articles,
        }
    }
}

/// Default article list. Owns its state; the in-flight fetch only holds a
/// `Weak` to it, so dropping the list discards a late response.
pub struct NewsList<A> {
    api: Rc<A>,
    state: Rc<RefCell<ListState>>,
    redraw: Rc<Notify>,
    mounted: bool,
}

impl<A: NewsApi + 'static> NewsList<A> {
    pub fn new(api: Rc<A>, redraw: Rc<Notify>) -> Self {
        Self {
            api,
            state: Rc::new(RefCell::new(ListState::Empty)),
            redraw,
            mounted: false,
        }
    }

    /// Issue the one default-list fetch. Later calls do nothing.
    pub fn mount(&mut self) {
        if self.mounted {
            debug!("News list already mounted; not fetching again");
            return;
        }
        self.mounted = true;
        task::spawn_local(load(
            Rc::clone(&self.api),
            Rc::downgrade(&self.state),
            Rc::clone(&self.redraw),
        ));
    }

    pub fn state(&self) -> ListState {
        self.state.borrow().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        render_cards(self.state.borrow().articles(), "")
    }
}

#[instrument(level = "debug", skip_all)]
async fn load<A: NewsApi>(api: Rc<A>, state: Weak<RefCell<ListState>>, redraw: Rc<Notify>) {
    match api.get(&news_path()).await {
        Ok(articles) => {
            let Some(state) = state.upgrade() else {
                debug!("News list dropped before its fetch resolved");
                return;
            };
            info!(count = articles.len(), "Loaded news list");
            *state.borrow_mut() = ListState::Loaded(articles);
            redraw.notify_one();
        }
        Err(e) => warn!(error = %e, "Failed to load news list; keeping it empty"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpNewsApi;
    use crate::testing::{ScriptedApi, article, silent_server, titles};
    use std::time::Duration;
    use tokio::task::LocalSet;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn test_loaded_list_renders_one_card_per_article_in_order() {
        LocalSet::new()
            .run_until(async {
                let api = ScriptedApi::new();
                api.respond("news", vec![article("one"), article("two"), article("three")]);
                let mut list = NewsList::new(Rc::clone(&api), Rc::new(Notify::new()));

                assert_eq!(list.state(), ListState::Empty);
                list.mount();
                sleep(Duration::from_millis(10)).await;

                let state = list.state();
                assert_eq!(titles(state.articles()), vec!["one", "two", "three"]);

                let lines = list.lines();
                assert_eq!(lines.len(), 12);
                assert_eq!(lines[1], "one");
                assert_eq!(lines[2], "Wire - 2025-05-06T14:30:00Z");
                assert_eq!(lines[9], "three");
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_fetch_leaves_list_empty() {
        LocalSet::new()
            .run_until(async {
                let api = ScriptedApi::new();
                api.fail("news", 500);
                let mut list = NewsList::new(Rc::clone(&api), Rc::new(Notify::new()));

                list.mount();
                sleep(Duration::from_millis(10)).await;

                assert_eq!(api.calls(), vec!["news"]);
                assert_eq!(list.state(), ListState::Empty);
                assert!(list.lines().is_empty());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_fetches_only_once() {
        LocalSet::new()
            .run_until(async {
                let api = ScriptedApi::new();
                api.respond("news", vec![article("one")]);
                let mut list = NewsList::new(Rc::clone(&api), Rc::new(Notify::new()));

                list.mount();
                list.mount();
                sleep(Duration::from_millis(10)).await;
                list.mount();
                sleep(Duration::from_millis(10)).await;

                assert_eq!(api.calls(), vec!["news"]);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_load_requests_redraw() {
        LocalSet::new()
            .run_until(async {
                let api = ScriptedApi::new();
                api.respond("news", vec![]);
                let redraw = Rc::new(Notify::new());
                let mut list = NewsList::new(Rc::clone(&api), Rc::clone(&redraw));

                list.mount();
                tokio::time::timeout(Duration::from_millis(100), redraw.notified())
                    .await
                    .expect("redraw was not requested");
                assert_eq!(list.state(), ListState::Loaded(vec![]));
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_result_after_drop_is_discarded() {
        LocalSet::new()
            .run_until(async {
                let api = ScriptedApi::new();
                api.respond_after("news", Duration::from_millis(500), vec![article("late")]);
                let redraw = Rc::new(Notify::new());
                let mut list = NewsList::new(Rc::clone(&api), Rc::clone(&redraw));

                list.mount();
                sleep(Duration::from_millis(10)).await;
                drop(list);

                let woke = tokio::time::timeout(Duration::from_millis(1000), redraw.notified()).await;
                assert!(woke.is_err(), "late response requested a redraw");
                assert_eq!(api.calls(), vec!["news"]);
            })
            .await;
    }

    #[tokio::test]
    async fn test_request_timeout_leaves_list_empty() {
        LocalSet::new()
            .run_until(async {
                let (base, server) = silent_server().await;
                let client = reqwest::Client::builder()
                    .no_proxy()
                    .timeout(Duration::from_millis(200))
                    .build()
                    .unwrap();
                let api = Rc::new(HttpNewsApi::with_client(client, base));
                let redraw = Rc::new(Notify::new());
                let mut list = NewsList::new(api, Rc::clone(&redraw));

                list.mount();
                let woke = tokio::time::timeout(Duration::from_millis(800), redraw.notified()).await;

                assert!(woke.is_err());
                assert_eq!(list.state(), ListState::Empty);
                assert!(list.lines().is_empty());
                server.abort();
            })
            .await;
    }
}
