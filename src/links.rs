//! Renders page links as HTML.

use maud::{Markup, html};

use crate::{
    config::{Bookend, LinkStyle},
    pagination::{PageLink, PageRangeWindow, create_page_links},
    request::LinkBase,
};

/// Creates the markup for each kind of page link.
pub trait LinkFactory {
    /// The marker for the page being shown.
    fn current(&self, page: usize) -> Markup;

    /// A link to `page` with the text `label`.
    fn link(&self, page: usize, label: &str) -> Markup;
}

/// Renders the current page as a `<span>` and other pages as `<a>` links.
pub struct HtmlLinkFactory<'a> {
    base: &'a LinkBase,
    style: &'a LinkStyle,
}

impl<'a> HtmlLinkFactory<'a> {
    /// Create a factory for links that point back to `base`.
    pub fn new(base: &'a LinkBase, style: &'a LinkStyle) -> Self {
        Self { base, style }
    }
}

impl LinkFactory for HtmlLinkFactory<'_> {
    fn current(&self, page: usize) -> Markup {
        html! {
            span class=[self.style.current_class()] { (page) }
        }
    }

    fn link(&self, page: usize, label: &str) -> Markup {
        html! {
            a class=[self.style.link_class()] href=(self.base.href(page)) { (label) }
        }
    }
}

/// The rendered page links, in display order.
#[derive(Debug, Clone, Default)]
pub struct LinkSet {
    links: Vec<Markup>,
}

impl LinkSet {
    /// The number of links, including bookends.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether there are no links.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// The links as HTML strings.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.links.iter().map(|link| link.0.as_str())
    }

    /// Join the links with `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.iter().collect::<Vec<_>>().join(separator)
    }
}

/// Render the links for `window`, with bookend links where the window asks for them.
pub fn build_links(
    window: &PageRangeWindow,
    requested_page: usize,
    style: &LinkStyle,
    factory: &impl LinkFactory,
) -> LinkSet {
    let links = create_page_links(window, requested_page, style.bookend_target())
        .into_iter()
        .map(|link| render_link(link, style.bookend(), factory))
        .collect();

    LinkSet { links }
}

fn render_link(link: PageLink, bookend: Bookend, factory: &impl LinkFactory) -> Markup {
    match link {
        PageLink::Current(page) => factory.current(page),
        PageLink::Page(page) => factory.link(page, &page.to_string()),
        PageLink::Prev(page) => factory.link(page, bookend.prev_label()),
        PageLink::Next(page) => factory.link(page, bookend.next_label()),
    }
}
