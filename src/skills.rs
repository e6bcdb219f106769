//! Skill-bar reveal.
//!
//! Each `.bar` carries a `data-level` between 0 and 100. When the bar scrolls
//! into view its width variable is set to that level, exactly once. Browsers
//! without `IntersectionObserver` fill every bar at load.

use tracing::trace;

/// Id of the injected `<style>` element, so the rule is only added once.
pub const STYLE_ELEMENT_ID: &str = "portfolio-bar-style";

/// A skill bar element.
pub trait SkillBar {
    /// Raw `data-level` attribute.
    fn level_attribute(&self) -> Option<String>;

    /// Whether the bar carries the filled marker.
    fn is_filled(&self) -> bool;

    /// Set `property` to `width` and mark the bar filled.
    fn fill(&self, property: &str, width: &str);
}

impl<T: SkillBar + ?Sized> SkillBar for &T {
    fn level_attribute(&self) -> Option<String> {
        (**self).level_attribute()
    }

    fn is_filled(&self) -> bool {
        (**self).is_filled()
    }

    fn fill(&self, property: &str, width: &str) {
        (**self).fill(property, width)
    }
}

/// How bars are revealed, chosen once from the browser's capabilities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealMode {
    /// Fill each bar the first time it intersects the viewport.
    Observe { threshold: f64 },
    /// Fill every bar immediately.
    Immediate,
}

impl RevealMode {
    pub fn detect(supports_observer: bool, threshold: f64) -> Self {
        if supports_observer {
            RevealMode::Observe { threshold }
        } else {
            RevealMode::Immediate
        }
    }
}

/// Target fill level in percent.
///
/// Absent, blank, or non-numeric values give 0. Numbers are clamped to
/// `0..=100` and rounded to the nearest integer.
pub fn parse_level(raw: Option<&str>) -> u8 {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return 0;
    };
    match raw.parse::<f64>() {
        Ok(level) if level.is_finite() => level.clamp(0.0, 100.0).round() as u8,
        _ => 0,
    }
}

/// Fill a bar unless it was already filled. Returns whether it was filled now.
pub fn fill_bar(bar: &impl SkillBar, property: &str) -> bool {
    if bar.is_filled() {
        return false;
    }
    let level = parse_level(bar.level_attribute().as_deref());
    trace!(level, "filling skill bar");
    bar.fill(property, &format!("{level}%"));
    true
}

/// Fill every bar right away. Returns the number of bars filled.
pub fn fill_all<'a, B: SkillBar + 'a>(
    bars: impl IntoIterator<Item = &'a B>,
    property: &str,
) -> usize {
    bars.into_iter().filter(|bar| fill_bar(*bar, property)).count()
}

/// Process a batch of intersection entries.
///
/// Each intersecting bar is filled and then handed to `unobserve`, so it
/// never re-animates. Non-intersecting entries are ignored.
pub fn on_intersections<B: SkillBar>(
    entries: impl IntoIterator<Item = (B, bool)>,
    property: &str,
    mut unobserve: impl FnMut(&B),
) -> usize {
    let mut filled = 0;
    for (bar, intersecting) in entries {
        if !intersecting {
            continue;
        }
        if fill_bar(&bar, property) {
            filled += 1;
        }
        unobserve(&bar);
    }
    filled
}

/// The rule binding each bar's decorative pseudo-element to its width
/// variable.
pub fn bar_style_rule(property: &str) -> String {
    format!(".bar::after{{width:var({property},0%);}}")
}
