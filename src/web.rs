//! Browser bindings.
//!
//! Connects the behavior modules to the live DOM through `web-sys`. Every
//! initializer is independent: a missing element turns its feature off, and
//! a failing initializer is logged without affecting the others.
//!
//! Event closures are leaked with [`Closure::forget`]; they live exactly as
//! long as the page.
//!
//! The tests below run against a real DOM in a headless browser:
//!
//! ```text
//! wasm-pack test --headless --chrome --no-default-features
//! ```

use crate::config::{self, BehaviorConfig, ContactConfig, NavConfig, SkillsConfig, ThemeConfig};
use crate::contact::{self, Outcome, Submission};
use crate::nav::{self, ClickOrigin, NavSurface};
use crate::platform::{AccessError, ColorSchemeQuery, PreferenceStore};
use crate::scroll::{self, Intercept, ScrollMode, Scroller};
use crate::skills::{self, RevealMode, SkillBar};
use crate::theme::{Theme, ThemeController, ThemeSurface};
use thiserror::Error;
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, FormData, HtmlElement, HtmlFormElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Node,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Storage, Window,
};

#[derive(Error, Debug)]
pub enum BindError {
    #[error("{0} is missing")]
    Missing(&'static str),
    #[error("{0} has an unexpected element type")]
    WrongElement(&'static str),
    #[error("{context} threw: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

fn js_error(context: &'static str) -> impl FnOnce(JsValue) -> BindError {
    move |value| BindError::Js {
        context,
        message: describe(&value),
    }
}

fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

fn query(document: &Document, selector: &str) -> Result<Option<Element>, BindError> {
    document
        .query_selector(selector)
        .map_err(js_error("querySelector"))
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), BindError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error("addEventListener"))?;
    closure.forget();
    Ok(())
}

// ============================================================================
// Entry point
// ============================================================================

/// Runs once when the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let (config, rejected) = match page_config(&document) {
        Ok(config) => (config, None),
        Err(err) => (BehaviorConfig::default(), Some(err)),
    };
    crate::logging::init_console(config.level_filter());
    if let Some(err) = rejected {
        warn!(%err, "inline config rejected, using defaults");
    }

    init_page(&window, &document, &config);
}

/// Read the inline `<script type="application/toml">` config block, if any.
fn page_config(document: &Document) -> Result<BehaviorConfig, config::ConfigError> {
    let source = document
        .get_element_by_id(config::CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
        .unwrap_or_default();
    config::parse_config(&source)
}

/// Attach every behavior to the page. The theme goes first so it is applied
/// before anything else touches layout.
pub fn init_page(window: &Window, document: &Document, config: &BehaviorConfig) {
    report("theme", init_theme(window, document, &config.theme));
    report("year", stamp_year(document));
    report("nav", init_nav(document, &config.nav));
    report("scroll", init_scroll(window, document));
    report("skills", init_skills(window, document, &config.skills));
    report("contact", init_contact(window, document, &config.contact));
}

fn report(feature: &'static str, result: Result<bool, BindError>) {
    match result {
        Ok(true) => debug!(feature, "enabled"),
        Ok(false) => debug!(feature, "no matching elements, skipped"),
        Err(err) => warn!(feature, %err, "feature disabled"),
    }
}

// ============================================================================
// Footer year
// ============================================================================

fn stamp_year(document: &Document) -> Result<bool, BindError> {
    let Some(element) = document.get_element_by_id("year") else {
        return Ok(false);
    };
    let year = js_sys::Date::new_0().get_full_year();
    element.set_text_content(Some(&year.to_string()));
    Ok(true)
}

// ============================================================================
// Theme
// ============================================================================

struct LocalStorage {
    window: Window,
}

impl LocalStorage {
    fn storage(&self) -> Result<Storage, AccessError> {
        self.window
            .local_storage()
            .map_err(|err| access_failed("localStorage", &err))?
            .ok_or(AccessError::Unavailable("localStorage"))
    }
}

fn access_failed(facility: &'static str, value: &JsValue) -> AccessError {
    AccessError::Failed {
        facility,
        reason: describe(value),
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, AccessError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| access_failed("localStorage", &err))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), AccessError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| access_failed("localStorage", &err))
    }
}

struct MediaQuery {
    window: Window,
}

impl ColorSchemeQuery for MediaQuery {
    fn prefers_light(&self) -> Result<bool, AccessError> {
        let list = self
            .window
            .match_media("(prefers-color-scheme: light)")
            .map_err(|err| access_failed("matchMedia", &err))?
            .ok_or(AccessError::Unavailable("matchMedia"))?;
        Ok(list.matches())
    }
}

struct RootTheme {
    root: Element,
    icon: Option<Element>,
    attribute: String,
}

impl ThemeSurface for RootTheme {
    fn apply(&self, theme: Theme, icon: &str) {
        let marked = match theme {
            Theme::Light => self.root.set_attribute(&self.attribute, "light"),
            Theme::Dark => self.root.remove_attribute(&self.attribute),
        };
        if let Err(err) = marked {
            debug!(err = %describe(&err), "theme attribute not updated");
        }
        if let Some(element) = &self.icon {
            element.set_text_content(Some(icon));
        }
    }
}

fn init_theme(
    window: &Window,
    document: &Document,
    config: &ThemeConfig,
) -> Result<bool, BindError> {
    let root = document
        .document_element()
        .ok_or(BindError::Missing("document element"))?;
    let surface = RootTheme {
        root,
        icon: query(document, ".theme-toggle__icon")?,
        attribute: config.attribute.clone(),
    };
    let store = LocalStorage {
        window: window.clone(),
    };
    let system = MediaQuery {
        window: window.clone(),
    };

    let mut controller = ThemeController::init(store, &system, surface, config);
    info!(theme = %controller.current(), "theme applied");

    if let Some(button) = query(document, ".theme-toggle")? {
        listen(&button, "click", move |_| {
            let theme = controller.toggle();
            debug!(%theme, "theme toggled");
        })?;
    }
    Ok(true)
}

// ============================================================================
// Mobile navigation
// ============================================================================

#[derive(Clone)]
struct NavElements {
    toggle: Element,
    menu: Element,
    open_class: String,
}

impl NavElements {
    fn origin(&self, target: Option<&Node>) -> ClickOrigin {
        if self.toggle.contains(target) {
            ClickOrigin::Toggle
        } else if self.menu.contains(target) {
            ClickOrigin::Menu
        } else {
            ClickOrigin::Outside
        }
    }
}

impl NavSurface for NavElements {
    fn is_open(&self) -> bool {
        self.menu.class_list().contains(&self.open_class)
    }

    fn set_open(&self, open: bool) {
        let classes = self.menu.class_list();
        let updated = if open {
            classes.add_1(&self.open_class)
        } else {
            classes.remove_1(&self.open_class)
        };
        if let Err(err) = updated {
            debug!(err = %describe(&err), "nav class not updated");
        }
        let expanded = if open { "true" } else { "false" };
        if let Err(err) = self.toggle.set_attribute("aria-expanded", expanded) {
            debug!(err = %describe(&err), "aria-expanded not updated");
        }
    }
}

fn init_nav(document: &Document, config: &NavConfig) -> Result<bool, BindError> {
    let (Some(toggle), Some(menu)) = (
        query(document, ".nav-toggle")?,
        document.get_element_by_id("nav-menu"),
    ) else {
        return Ok(false);
    };
    let elements = NavElements {
        toggle: toggle.clone(),
        menu: menu.clone(),
        open_class: config.open_class.clone(),
    };

    let on_toggle = elements.clone();
    listen(&toggle, "click", move |_| {
        nav::toggle(&on_toggle);
    })?;

    let on_menu = elements.clone();
    listen(&menu, "click", move |event| {
        let on_link = event_element(&event)
            .and_then(|element| element.closest("a").ok().flatten())
            .is_some();
        nav::menu_clicked(&on_menu, on_link);
    })?;

    listen(document, "click", move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        nav::document_clicked(&elements, elements.origin(target.as_ref()));
    })?;
    Ok(true)
}

// ============================================================================
// Smooth scroll
// ============================================================================

struct SmoothScroll;

impl Scroller<Element> for SmoothScroll {
    fn scroll_to(&self, target: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

struct JumpScroll {
    window: Window,
}

impl Scroller<Element> for JumpScroll {
    fn scroll_to(&self, target: &Element) {
        let rect_top = target.get_bounding_client_rect().top();
        let page_offset = self.window.page_y_offset().unwrap_or(0.0);
        self.window
            .scroll_to_with_x_and_y(0.0, scroll::jump_offset(rect_top, page_offset));
    }
}

fn supports_smooth_scroll(document: &Document) -> bool {
    document
        .document_element()
        .and_then(|root| root.dyn_into::<HtmlElement>().ok())
        .is_some_and(|root| has_property(root.style().as_ref(), "scrollBehavior"))
}

fn init_scroll(window: &Window, document: &Document) -> Result<bool, BindError> {
    let mode = ScrollMode::detect(supports_smooth_scroll(document));
    let scroller: Box<dyn Scroller<Element>> = match mode {
        ScrollMode::Smooth => Box::new(SmoothScroll),
        ScrollMode::Jump => Box::new(JumpScroll {
            window: window.clone(),
        }),
    };
    debug!(?mode, "scroll capability selected");

    let lookup_root = document.clone();
    listen(document, "click", move |event| {
        let Some(link) = event_element(&event)
            .and_then(|element| element.closest("a[href^=\"#\"]").ok().flatten())
        else {
            return;
        };
        let href = link.get_attribute("href");
        let outcome = scroll::handle_click(
            href.as_deref(),
            |selector| lookup_root.query_selector(selector).ok().flatten(),
            &*scroller,
        );
        if outcome == Intercept::Scrolled {
            event.prevent_default();
        }
    })?;
    Ok(true)
}

// ============================================================================
// Skill bars
// ============================================================================

struct BarElement(HtmlElement);

impl SkillBar for BarElement {
    fn level_attribute(&self) -> Option<String> {
        self.0.get_attribute("data-level")
    }

    fn is_filled(&self) -> bool {
        self.0.get_attribute("data-filled").as_deref() == Some("true")
    }

    fn fill(&self, property: &str, width: &str) {
        if let Err(err) = self.0.style().set_property(property, width) {
            debug!(err = %describe(&err), "bar width not set");
        }
        if let Err(err) = self.0.set_attribute("data-filled", "true") {
            debug!(err = %describe(&err), "bar not marked filled");
        }
    }
}

fn inject_bar_style(document: &Document, property: &str) -> Result<(), BindError> {
    if document.get_element_by_id(skills::STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let head = document.head().ok_or(BindError::Missing("document head"))?;
    let style = document
        .create_element("style")
        .map_err(js_error("createElement"))?;
    style.set_id(skills::STYLE_ELEMENT_ID);
    style.set_text_content(Some(&skills::bar_style_rule(property)));
    head.append_child(&style).map_err(js_error("appendChild"))?;
    Ok(())
}

fn skill_bars(document: &Document) -> Result<Vec<BarElement>, BindError> {
    let list = document
        .query_selector_all(".bar")
        .map_err(js_error("querySelectorAll"))?;
    Ok((0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(BarElement)
        .collect())
}

fn init_skills(
    window: &Window,
    document: &Document,
    config: &SkillsConfig,
) -> Result<bool, BindError> {
    let bars = skill_bars(document)?;
    if let Err(err) = inject_bar_style(document, &config.width_property) {
        warn!(%err, "skill bar style not injected");
    }
    if bars.is_empty() {
        return Ok(false);
    }

    let supports_observer = has_property(window.as_ref(), "IntersectionObserver");
    match RevealMode::detect(supports_observer, config.threshold) {
        RevealMode::Immediate => {
            let filled = skills::fill_all(&bars, &config.width_property);
            info!(filled, "skill bars filled without IntersectionObserver");
        }
        RevealMode::Observe { threshold } => {
            let property = config.width_property.clone();
            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    let entries = entries.iter().filter_map(|entry| {
                        let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                        let intersecting = entry.is_intersecting();
                        entry
                            .target()
                            .dyn_into::<HtmlElement>()
                            .ok()
                            .map(|element| (BarElement(element), intersecting))
                    });
                    skills::on_intersections(entries, &property, |bar| observer.unobserve(&bar.0));
                },
            );
            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(threshold));
            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                    .map_err(js_error("IntersectionObserver"))?;
            callback.forget();

            for bar in &bars {
                observer.observe(&bar.0);
            }
            info!(bars = bars.len(), threshold, "observing skill bars");
        }
    }
    Ok(true)
}

// ============================================================================
// Contact form
// ============================================================================

fn read_submission(form: &HtmlFormElement) -> Result<Submission, BindError> {
    let data = FormData::new_with_form(form).map_err(js_error("FormData"))?;
    Ok(Submission::read(|name| data.get(name).as_string()))
}

fn init_contact(
    window: &Window,
    document: &Document,
    config: &ContactConfig,
) -> Result<bool, BindError> {
    let Some(element) = document.get_element_by_id("contactForm") else {
        return Ok(false);
    };
    let form = element
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| BindError::WrongElement("#contactForm"))?;

    let window = window.clone();
    let config = config.clone();
    let target = form.clone();
    listen(&target, "submit", move |event| {
        event.prevent_default();

        let submission = match read_submission(&form) {
            Ok(submission) => submission,
            Err(err) => {
                warn!(%err, "contact form unreadable");
                return;
            }
        };

        match contact::submit(&submission, &config) {
            Outcome::Rejected { message, missing } => {
                debug!(?missing, "contact form incomplete");
                if let Err(err) = window.alert_with_message(&message) {
                    debug!(err = %describe(&err), "alert failed");
                }
            }
            Outcome::Navigate(uri) => {
                info!("opening mail client");
                if let Err(err) = window.location().set_href(&uri) {
                    warn!(err = %describe(&err), "mailto navigation failed");
                }
            }
        }
    })?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;
    use web_sys::EventInit;

    wasm_bindgen_test_configure!(run_in_browser);

    const FIXTURE_ID: &str = "web-test-fixture";

    fn window() -> Window {
        web_sys::window().unwrap()
    }

    /// Put `html` at the top of the body, replacing the previous fixture.
    /// The rest of the body belongs to the test runner and is left alone.
    fn fixture(html: &str) -> Document {
        let document = window().document().unwrap();
        if let Some(previous) = document.get_element_by_id(FIXTURE_ID) {
            previous.remove();
        }
        let container = document.create_element("div").unwrap();
        container.set_id(FIXTURE_ID);
        container.set_inner_html(html);
        let body = document.body().unwrap();
        body.insert_before(&container, body.first_child().as_ref()).unwrap();
        document
    }

    fn element(document: &Document, id: &str) -> HtmlElement {
        document
            .get_element_by_id(id)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
    }

    fn node(element: &HtmlElement) -> &Node {
        element.as_ref()
    }

    fn cancelable(kind: &str) -> Event {
        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        Event::new_with_event_init_dict(kind, &init).unwrap()
    }

    /// Replace `window.alert` with a recorder and return the recorded messages.
    fn capture_alerts() -> js_sys::Array {
        let calls = js_sys::Array::new();
        let record = js_sys::Function::new_with_args("message", "this.push(message);").bind(&calls);
        js_sys::Reflect::set(window().as_ref(), &JsValue::from_str("alert"), &record).unwrap();
        calls
    }

    async fn sleep(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            window()
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }

    // =========================================================================
    // Footer year
    // =========================================================================

    #[wasm_bindgen_test]
    fn year_is_stamped_into_footer() {
        let document = fixture(r#"<footer>© <span id="year"></span></footer>"#);
        assert!(stamp_year(&document).unwrap());

        let expected = js_sys::Date::new_0().get_full_year().to_string();
        assert_eq!(element(&document, "year").text_content(), Some(expected));
    }

    #[wasm_bindgen_test]
    fn year_without_element_is_skipped() {
        let document = fixture("<footer>no year here</footer>");
        assert!(!stamp_year(&document).unwrap());
    }

    // =========================================================================
    // Theme
    // =========================================================================

    const THEME: &str = r#"<button class="theme-toggle" id="theme-button">
        <span class="theme-toggle__icon" id="theme-icon"></span>
    </button>"#;

    fn stored_theme(config: &ThemeConfig) -> Option<String> {
        let storage = window().local_storage().unwrap().unwrap();
        storage.get_item(&config.storage_key).unwrap()
    }

    fn reset_theme(config: &ThemeConfig, stored: Option<&str>) {
        let storage = window().local_storage().unwrap().unwrap();
        match stored {
            Some(value) => storage.set_item(&config.storage_key, value).unwrap(),
            None => storage.remove_item(&config.storage_key).unwrap(),
        }
        let root = window().document().unwrap().document_element().unwrap();
        root.remove_attribute(&config.attribute).unwrap();
    }

    #[wasm_bindgen_test]
    fn stored_light_theme_marks_root() {
        let config = ThemeConfig::default();
        reset_theme(&config, Some("light"));
        let document = fixture(THEME);

        assert!(init_theme(&window(), &document, &config).unwrap());

        let root = document.document_element().unwrap();
        assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));
        assert_eq!(
            element(&document, "theme-icon").text_content().as_deref(),
            Some(config.icon(Theme::Light))
        );
        reset_theme(&config, None);
    }

    #[wasm_bindgen_test]
    fn theme_toggle_flips_root_and_persists() {
        let config = ThemeConfig::default();
        reset_theme(&config, None);
        let document = fixture(THEME);
        let root = document.document_element().unwrap();

        assert!(init_theme(&window(), &document, &config).unwrap());
        // Nothing stored: the headless browser's color-scheme hint decides.
        let initial = match root.get_attribute("data-theme").as_deref() {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        };

        element(&document, "theme-button").click();

        let toggled = initial.toggled();
        assert_eq!(stored_theme(&config).as_deref(), Some(toggled.as_str()));
        let expected_mark = (toggled == Theme::Light).then_some("light");
        assert_eq!(root.get_attribute("data-theme").as_deref(), expected_mark);
        assert_eq!(
            element(&document, "theme-icon").text_content().as_deref(),
            Some(config.icon(toggled))
        );

        element(&document, "theme-button").click();
        assert_eq!(stored_theme(&config).as_deref(), Some(initial.as_str()));
        reset_theme(&config, None);
    }

    // =========================================================================
    // Mobile navigation
    // =========================================================================

    const NAV: &str = r##"<button class="nav-toggle" id="nav-button" aria-expanded="false">
        <span id="nav-label">Menu</span>
    </button>
    <ul id="nav-menu">
        <li><a href="#nav-section"><span id="nav-link-text">Section</span></a></li>
        <li id="nav-item">plain</li>
    </ul>
    <p id="nav-outside">outside</p>"##;

    #[wasm_bindgen_test]
    fn click_origin_follows_containment() {
        let document = fixture(NAV);
        let elements = NavElements {
            toggle: document.query_selector(".nav-toggle").unwrap().unwrap(),
            menu: document.get_element_by_id("nav-menu").unwrap(),
            open_class: "is-open".into(),
        };

        let label = element(&document, "nav-label");
        let item = element(&document, "nav-item");
        let outside = element(&document, "nav-outside");
        assert_eq!(elements.origin(Some(node(&label))), ClickOrigin::Toggle);
        assert_eq!(elements.origin(Some(node(&item))), ClickOrigin::Menu);
        assert_eq!(elements.origin(Some(node(&outside))), ClickOrigin::Outside);
        assert_eq!(elements.origin(None), ClickOrigin::Outside);
    }

    #[wasm_bindgen_test]
    fn outside_click_on_closed_menu_keeps_aria_false() {
        let document = fixture(NAV);
        assert!(init_nav(&document, &NavConfig::default()).unwrap());

        element(&document, "nav-outside").click();

        let button = element(&document, "nav-button");
        assert_eq!(button.get_attribute("aria-expanded").as_deref(), Some("false"));
        assert!(!element(&document, "nav-menu").class_list().contains("is-open"));
    }

    #[wasm_bindgen_test]
    fn menu_opens_and_closes_on_link_and_outside_clicks() {
        let document = fixture(NAV);
        assert!(init_nav(&document, &NavConfig::default()).unwrap());
        let button = element(&document, "nav-button");
        let menu = element(&document, "nav-menu");
        let is_open = || menu.class_list().contains("is-open");
        let expanded = || button.get_attribute("aria-expanded");

        // A click on the toggle's child counts as a toggle click.
        element(&document, "nav-label").click();
        assert!(is_open());
        assert_eq!(expanded().as_deref(), Some("true"));

        element(&document, "nav-item").click();
        assert!(is_open(), "non-link clicks inside the menu keep it open");

        element(&document, "nav-link-text").click();
        assert!(!is_open());
        assert_eq!(expanded().as_deref(), Some("false"));

        element(&document, "nav-label").click();
        element(&document, "nav-outside").click();
        assert!(!is_open());
        assert_eq!(expanded().as_deref(), Some("false"));
    }

    // =========================================================================
    // Smooth scroll
    // =========================================================================

    #[wasm_bindgen_test]
    fn only_resolved_fragment_links_are_intercepted() {
        let document = fixture(
            r##"<a href="#scroll-target" id="to-target"><span id="to-target-text">go</span></a>
            <a href="#scroll-absent" id="to-absent">gone</a>
            <a href="#" id="to-top">top</a>
            <a href="#1st" id="to-invalid">invalid</a>
            <div id="scroll-target">target</div>"##,
        );
        assert!(supports_smooth_scroll(&document));
        assert!(init_scroll(&window(), &document).unwrap());

        // `dispatchEvent` returns false once a listener prevented the default.
        let dispatch = |id: &str| {
            element(&document, id)
                .dispatch_event(&cancelable("click"))
                .unwrap()
        };
        assert!(!dispatch("to-target"));
        assert!(!dispatch("to-target-text"));
        assert!(dispatch("to-absent"));
        assert!(dispatch("to-top"));
        assert!(dispatch("to-invalid"));
    }

    // =========================================================================
    // Skill bars
    // =========================================================================

    fn bar_width(bar: &HtmlElement) -> String {
        bar.style().get_property_value("--bar-width").unwrap()
    }

    #[wasm_bindgen_test]
    fn bars_fill_once_to_clamped_width() {
        let document = fixture(
            r#"<div class="bar" id="bar-over" data-level="150"></div>
            <div class="bar" id="bar-none"></div>
            <div class="bar" id="bar-half" data-level=" 49.5 "></div>"#,
        );
        let config = SkillsConfig::default();
        let bars = skill_bars(&document).unwrap();
        assert_eq!(bars.len(), 3);

        assert_eq!(skills::fill_all(&bars, &config.width_property), 3);
        assert_eq!(skills::fill_all(&bars, &config.width_property), 0);

        let over = element(&document, "bar-over");
        assert_eq!(bar_width(&over), "100%");
        assert_eq!(over.get_attribute("data-filled").as_deref(), Some("true"));
        assert_eq!(bar_width(&element(&document, "bar-none")), "0%");
        assert_eq!(bar_width(&element(&document, "bar-half")), "50%");
    }

    #[wasm_bindgen_test]
    fn bar_style_is_injected_once() {
        let document = fixture("");
        inject_bar_style(&document, "--bar-width").unwrap();
        inject_bar_style(&document, "--bar-width").unwrap();

        let selector = format!("#{}", skills::STYLE_ELEMENT_ID);
        let styles = document.query_selector_all(&selector).unwrap();
        assert_eq!(styles.length(), 1);
        let rule = styles.item(0).unwrap().text_content();
        assert_eq!(rule, Some(skills::bar_style_rule("--bar-width")));
    }

    #[wasm_bindgen_test]
    async fn visible_bar_fills_through_observer() {
        let document = fixture(r#"<div class="bar" id="bar-seen" data-level="66.6"></div>"#);
        let bar = element(&document, "bar-seen");
        bar.style().set_property("height", "20px").unwrap();

        assert!(init_skills(&window(), &document, &SkillsConfig::default()).unwrap());
        // Observer callbacks arrive with the next rendering frame.
        sleep(250).await;

        assert_eq!(bar.get_attribute("data-filled").as_deref(), Some("true"));
        assert_eq!(bar_width(&bar), "67%");
    }

    // =========================================================================
    // Contact form
    // =========================================================================

    fn form(document: &Document) -> HtmlFormElement {
        document
            .get_element_by_id("contactForm")
            .unwrap()
            .dyn_into::<HtmlFormElement>()
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn form_fields_are_read_and_trimmed() {
        let document = fixture(
            r#"<form id="contactForm">
                <input name="name" value="  Ada ">
                <input name="email" value="ada@example.org">
                <textarea name="message">Bonjour</textarea>
            </form>"#,
        );
        let submission = read_submission(&form(&document)).unwrap();
        assert_eq!(
            submission,
            Submission::from_fields(Some("Ada"), Some("ada@example.org"), Some("Bonjour"))
        );
    }

    #[wasm_bindgen_test]
    fn blank_form_is_rejected_with_alert() {
        let alerts = capture_alerts();
        let document = fixture(
            r#"<form id="contactForm">
                <input name="name" value="Ada">
                <input name="email" value="   ">
                <textarea name="message"></textarea>
            </form>"#,
        );
        let window = window();
        let before = window.location().href().unwrap();
        assert!(init_contact(&window, &document, &ContactConfig::default()).unwrap());

        let not_prevented = form(&document).dispatch_event(&cancelable("submit")).unwrap();

        assert!(!not_prevented);
        let messages: Vec<String> = alerts.iter().filter_map(|m| m.as_string()).collect();
        assert_eq!(messages, vec!["Merci de remplir tous les champs.".to_string()]);
        assert_eq!(window.location().href().unwrap(), before);
    }

    #[wasm_bindgen_test]
    fn contact_form_of_wrong_type_is_an_error() {
        let document = fixture(r#"<div id="contactForm"></div>"#);
        let result = init_contact(&window(), &document, &ContactConfig::default());
        assert!(matches!(result, Err(BindError::WrongElement("#contactForm"))));
    }
}
