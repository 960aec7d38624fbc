//! Scroll observer feeding the hero fade.
//!
//! A `ScrollSubscription` listens for window scroll/resize events and
//! publishes a normalized `ScrollProgress`; `HeroTransform::at` turns that
//! into the hero's opacity and scale.

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

/// Scroll progress range over which the hero fades out.
pub const HERO_FADE_RANGE: (f64, f64) = (0.0, 0.2);
pub const HERO_OPACITY_RANGE: (f64, f64) = (1.0, 0.0);
pub const HERO_SCALE_RANGE: (f64, f64) = (1.0, 0.95);

const WATCHED_EVENTS: [&str; 2] = ["scroll", "resize"];

#[derive(Debug, Error)]
pub enum ScrollError {
    #[error("no global window available")]
    NoWindow,
    #[error("document has no root element")]
    NoDocumentElement,
    #[error("dom call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for ScrollError {
    fn from(value: JsValue) -> Self {
        ScrollError::Dom(format!("{:?}", value))
    }
}

/// Fraction of the total scrollable distance traversed, always in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    pub fn new(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self(0.0);
        }
        Self(fraction.clamp(0.0, 1.0))
    }

    /// Progress for a vertical `offset` into a document of `scroll_height`
    /// seen through a viewport of `viewport_height`.
    pub fn from_offsets(offset: f64, scroll_height: f64, viewport_height: f64) -> Self {
        let scrollable = scroll_height - viewport_height;
        if scrollable <= 0.0 {
            return Self(0.0);
        }
        Self::new(offset / scrollable)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Linear map of `input` from `from` onto `to`, clamped to the endpoints of
/// `to` when `input` falls outside `from`.
pub fn interpolate(input: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let (in_start, in_end) = from;
    let (out_start, out_end) = to;
    if in_end == in_start {
        return if input < in_start { out_start } else { out_end };
    }
    let t = ((input - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroTransform {
    pub opacity: f64,
    pub scale: f64,
}

impl Default for HeroTransform {
    fn default() -> Self {
        Self::at(ScrollProgress::default())
    }
}

impl HeroTransform {
    pub fn at(progress: ScrollProgress) -> Self {
        let p = progress.value();
        Self {
            opacity: interpolate(p, HERO_FADE_RANGE, HERO_OPACITY_RANGE),
            scale: interpolate(p, HERO_FADE_RANGE, HERO_SCALE_RANGE),
        }
    }

    pub fn style(&self) -> String {
        format!("opacity: {:.4}; transform: scale({:.4});", self.opacity, self.scale)
    }
}

/// Live window listener. Removes itself from the window when dropped.
pub struct ScrollSubscription {
    window: Window,
    listener: Closure<dyn Fn()>,
}

impl ScrollSubscription {
    /// Publishes the current progress immediately, then again on every
    /// scroll or resize of the window.
    pub fn attach<F>(on_progress: F) -> Result<Self, ScrollError>
    where
        F: Fn(ScrollProgress) + 'static,
    {
        let window = web_sys::window().ok_or(ScrollError::NoWindow)?;
        on_progress(read_progress(&window)?);

        let listener_window = window.clone();
        let listener = Closure::<dyn Fn()>::new(move || match read_progress(&listener_window) {
            Ok(progress) => on_progress(progress),
            Err(err) => warn!("Skipping scroll update: {}", err),
        });

        for event in WATCHED_EVENTS {
            window.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
        }
        debug!("Scroll subscription attached");
        Ok(Self { window, listener })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        for event in WATCHED_EVENTS {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback(event, self.listener.as_ref().unchecked_ref())
            {
                warn!("Failed to remove {} listener: {:?}", event, err);
            }
        }
        debug!("Scroll subscription detached");
    }
}

fn read_progress(window: &Window) -> Result<ScrollProgress, ScrollError> {
    let offset = window.scroll_y()?;
    let viewport_height = window.inner_height()?.as_f64().unwrap_or(0.0);
    let root = window
        .document()
        .and_then(|document| document.document_element())
        .ok_or(ScrollError::NoDocumentElement)?;
    Ok(ScrollProgress::from_offsets(
        offset,
        f64::from(root.scroll_height()),
        viewport_height,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn hero_is_at_rest_before_scrolling() {
        for p in [-1.0, -0.01, 0.0] {
            let hero = HeroTransform::at(ScrollProgress::new(p));
            assert_eq!(hero.opacity, 1.0);
            assert_eq!(hero.scale, 1.0);
        }
    }

    #[test]
    fn hero_is_fully_faded_past_fade_range() {
        for p in [0.2, 0.21, 0.5, 1.0, 7.0] {
            let hero = HeroTransform::at(ScrollProgress::new(p));
            assert!(hero.opacity.abs() < EPS, "opacity at {} was {}", p, hero.opacity);
            assert!((hero.scale - 0.95).abs() < EPS, "scale at {} was {}", p, hero.scale);
        }
    }

    #[test]
    fn hero_varies_linearly_inside_fade_range() {
        let mid = HeroTransform::at(ScrollProgress::new(0.1));
        assert!((mid.opacity - 0.5).abs() < EPS);
        assert!((mid.scale - 0.975).abs() < EPS);

        let quarter = HeroTransform::at(ScrollProgress::new(0.05));
        assert!((quarter.opacity - 0.75).abs() < EPS);
        assert!((quarter.scale - 0.9875).abs() < EPS);
    }

    #[test]
    fn hero_is_monotonic_across_fade_range() {
        let mut previous = HeroTransform::at(ScrollProgress::new(0.0));
        for step in 1..=40 {
            let current = HeroTransform::at(ScrollProgress::new(step as f64 * 0.005));
            assert!(current.opacity < previous.opacity);
            assert!(current.scale < previous.scale);
            previous = current;
        }
    }

    #[test]
    fn progress_is_normalized_against_scrollable_height() {
        assert_eq!(ScrollProgress::from_offsets(0.0, 3000.0, 1000.0).value(), 0.0);
        assert_eq!(ScrollProgress::from_offsets(500.0, 3000.0, 1000.0).value(), 0.25);
        assert_eq!(ScrollProgress::from_offsets(2000.0, 3000.0, 1000.0).value(), 1.0);
        // rubber-band overscroll
        assert_eq!(ScrollProgress::from_offsets(2100.0, 3000.0, 1000.0).value(), 1.0);
        assert_eq!(ScrollProgress::from_offsets(-40.0, 3000.0, 1000.0).value(), 0.0);
    }

    #[test]
    fn progress_is_zero_when_page_does_not_scroll() {
        assert_eq!(ScrollProgress::from_offsets(0.0, 800.0, 800.0).value(), 0.0);
        assert_eq!(ScrollProgress::from_offsets(10.0, 600.0, 800.0).value(), 0.0);
        assert_eq!(ScrollProgress::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn interpolate_handles_descending_outputs_and_empty_inputs() {
        assert_eq!(interpolate(0.5, (0.0, 1.0), (10.0, 0.0)), 5.0);
        assert_eq!(interpolate(-3.0, (0.0, 1.0), (10.0, 0.0)), 10.0);
        assert_eq!(interpolate(0.3, (0.3, 0.3), (1.0, 2.0)), 2.0);
        assert_eq!(interpolate(0.2, (0.3, 0.3), (1.0, 2.0)), 1.0);
    }

    #[test]
    fn style_renders_both_properties() {
        let style = HeroTransform::default().style();
        assert_eq!(style, "opacity: 1.0000; transform: scale(1.0000);");
    }
}
