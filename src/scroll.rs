//! Smooth in-page scrolling for fragment links.
//!
//! A click on `a[href^="#"]` is intercepted only when the fragment names an
//! element that exists. Everything else (bare `#`, missing targets, invalid
//! selectors) is left to the browser.
//!
//! Browsers without `scroll-behavior` support get an instant jump to the
//! same position instead of the animated scroll. The choice is made once at
//! startup, see [`ScrollMode::detect`].

/// How the page moves to a fragment target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    /// `scrollIntoView({ behavior: "smooth", block: "start" })`.
    Smooth,
    /// `window.scrollTo(0, top)` computed from the target's bounding box.
    Jump,
}

impl ScrollMode {
    pub fn detect(supports_smooth: bool) -> Self {
        if supports_smooth {
            ScrollMode::Smooth
        } else {
            ScrollMode::Jump
        }
    }
}

/// Moves the viewport to an element.
pub trait Scroller<T> {
    fn scroll_to(&self, target: &T);
}

/// Outcome of a click on a fragment link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intercept {
    /// Default navigation must be prevented; the page was scrolled.
    Scrolled,
    /// Leave the click to the browser.
    Ignored,
}

/// The selector for an in-page link, or `None` when the href is not a
/// fragment reference (`None`, empty, or a bare `#`).
pub fn fragment_selector(href: Option<&str>) -> Option<&str> {
    let href = href?;
    if href.starts_with('#') && href.len() > 1 {
        Some(href)
    } else {
        None
    }
}

/// Handle a click on a link with the given href.
///
/// `lookup` resolves a selector to an element; it returns `None` both for
/// missing elements and for selectors the document rejects.
pub fn handle_click<T>(
    href: Option<&str>,
    lookup: impl FnOnce(&str) -> Option<T>,
    scroller: &dyn Scroller<T>,
) -> Intercept {
    let Some(selector) = fragment_selector(href) else {
        return Intercept::Ignored;
    };
    match lookup(selector) {
        Some(target) => {
            scroller.scroll_to(&target);
            Intercept::Scrolled
        }
        None => Intercept::Ignored,
    }
}

/// Document offset of an element for the jump fallback.
///
/// `rect_top` is the element's viewport-relative top, `page_offset` the
/// current vertical scroll position.
pub fn jump_offset(rect_top: f64, page_offset: f64) -> f64 {
    rect_top + page_offset
}
