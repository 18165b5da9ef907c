//! Root composition: the search header above the news list.

use std::rc::Rc;

use tokio::sync::Notify;

use crate::api::NewsApi;
use crate::components::news_list::NewsList;
use crate::components::search::{SearchHeader, SearchOptions};
use crate::events::EventTarget;
use crate::layout::Rect;

/// Root view: the search header above the default list. Both children share
/// one redraw signal.
pub struct App<A> {
    header: SearchHeader<A>,
    list: NewsList<A>,
    redraw: Rc<Notify>,
}

impl<A: NewsApi + 'static> App<A> {
    pub fn new(api: Rc<A>, options: SearchOptions) -> Self {
        let redraw = Rc::new(Notify::new());
        Self {
            header: SearchHeader::new(Rc::clone(&api), options, Rc::clone(&redraw)),
            list: NewsList::new(api, Rc::clone(&redraw)),
            redraw,
        }
    }

    /// Signalled whenever either component changes what it renders.
    pub fn redraw(&self) -> Rc<Notify> {
        Rc::clone(&self.redraw)
    }

    pub fn mount(&mut self, target: &EventTarget) {
        self.header.set_anchor(Rect::new(0, 0, u16::MAX, 1));
        self.header.mount(target);
        self.list.mount();
    }

    pub fn unmount(&mut self) {
        self.header.unmount();
    }

    pub fn header(&self) -> &SearchHeader<A> {
        &self.header
    }

    pub fn list(&self) -> &NewsList<A> {
        &self.list
    }

    /// Header rows first, starting at row 0, then a blank row, then the list.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.header.lines();
        lines.push(String::new());
        lines.extend(self.list.lines());
        lines
    }

    pub fn render(&self) -> String {
        let mut out = self.lines().join("\n");
        out.push('\n');
        out
    }
}
