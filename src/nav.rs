//! Mobile navigation menu.
//!
//! The menu is driven by three click sources: the toggle button, links inside
//! the menu, and the rest of the document. The open state lives on the DOM
//! (`is-open` class) and is mirrored into the toggle's `aria-expanded`.

use tracing::trace;

/// The toggle button and menu container, treated as one unit.
pub trait NavSurface {
    fn is_open(&self) -> bool;

    /// Set the menu's visibility class and the toggle's `aria-expanded`.
    fn set_open(&self, open: bool);
}

/// Where a document-level click landed relative to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    /// The toggle button or one of its descendants.
    Toggle,
    /// The menu container or one of its descendants.
    Menu,
    Outside,
}

/// Toggle button clicked. Returns the new open state.
pub fn toggle(surface: &impl NavSurface) -> bool {
    let open = !surface.is_open();
    surface.set_open(open);
    open
}

/// Click inside the menu. Following a link closes the menu.
pub fn menu_clicked(surface: &impl NavSurface, on_link: bool) {
    if on_link {
        surface.set_open(false);
    }
}

/// Click anywhere in the document. Returns whether the menu was closed.
pub fn document_clicked(surface: &impl NavSurface, origin: ClickOrigin) -> bool {
    if !surface.is_open() || origin != ClickOrigin::Outside {
        return false;
    }
    trace!("closing nav menu on outside click");
    surface.set_open(false);
    true
}
