//! Keyframe timelines for the logo.
//!
//! A timeline is plain data: one-shot reveals per glyph plus one infinite
//! loop. `Timeline::stylesheet` compiles it to CSS keyframes so the browser
//! clock drives playback, and `Timeline::pose_at` samples the same curves in
//! Rust.

use std::fmt::Write;

/// Timing curve, expressed as a CSS cubic-bezier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    /// Overshoots the target slightly before settling.
    Spring,
}

impl Easing {
    fn control_points(self) -> (f64, f64, f64, f64) {
        match self {
            Easing::Linear => (0.0, 0.0, 1.0, 1.0),
            Easing::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => (0.42, 0.0, 0.58, 1.0),
            Easing::Spring => (0.34, 1.56, 0.64, 1.0),
        }
    }

    pub fn css(self) -> String {
        let (x1, y1, x2, y2) = self.control_points();
        format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
    }

    /// Eased value for linear `progress` in [0, 1].
    pub fn apply(self, progress: f64) -> f64 {
        let x = progress.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        let (x1, y1, x2, y2) = self.control_points();
        // x(t) is monotonic for control x values in [0, 1]; bisect for t.
        let (mut lo, mut hi) = (0.0, 1.0);
        for _ in 0..48 {
            let mid = (lo + hi) / 2.0;
            if cubic(mid, x1, x2) < x {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        cubic((lo + hi) / 2.0, y1, y2)
    }
}

fn cubic(t: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Glyph {
    Wave,
    Microphone,
    PlayCurve,
    Ring,
    Gem,
    Sparkles,
}

impl Glyph {
    pub fn name(self) -> &'static str {
        match self {
            Glyph::Wave => "wave",
            Glyph::Microphone => "mic",
            Glyph::PlayCurve => "play",
            Glyph::Ring => "ring",
            Glyph::Gem => "gem",
            Glyph::Sparkles => "sparkles",
        }
    }

    /// Class the logo markup puts on this glyph's element.
    pub fn class(self) -> String {
        format!("ido-{}", self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Property {
    Opacity,
    TranslateY,
    Scale,
    Rotate,
    /// Visible fraction of a stroked path.
    PathLength,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    pub property: Property,
    pub from: f64,
    pub to: f64,
}

const fn track(property: Property, from: f64, to: f64) -> Track {
    Track { property, from, to }
}

/// Plays once, `delay` seconds after mount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub glyph: Glyph,
    pub delay: f64,
    pub duration: f64,
    pub easing: Easing,
    pub tracks: &'static [Track],
}

impl Reveal {
    pub fn end(&self) -> f64 {
        self.delay + self.duration
    }
}

/// Runs forever with a fixed period: `from` -> `to` over the first half,
/// back to `from` over the second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Loop {
    pub glyph: Glyph,
    pub period: f64,
    pub easing: Easing,
    pub tracks: &'static [Track],
}

/// Visual state of one glyph. Defaults to the resting pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotate: f64,
    pub path_length: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_y: 0.0,
            scale: 1.0,
            rotate: 0.0,
            path_length: 1.0,
        }
    }
}

impl Pose {
    fn set(&mut self, property: Property, value: f64) {
        match property {
            Property::Opacity => self.opacity = value,
            Property::TranslateY => self.translate_y = value,
            Property::Scale => self.scale = value,
            Property::Rotate => self.rotate = value,
            Property::PathLength => self.path_length = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timeline {
    pub reveals: &'static [Reveal],
    pub sparkle: Loop,
}

pub const LOGO_TIMELINE: Timeline = Timeline {
    reveals: &[
        Reveal {
            glyph: Glyph::Wave,
            delay: 0.0,
            duration: 1.5,
            easing: Easing::EaseInOut,
            tracks: &[
                track(Property::PathLength, 0.0, 1.0),
                track(Property::Opacity, 0.0, 0.2),
            ],
        },
        Reveal {
            glyph: Glyph::Microphone,
            delay: 0.1,
            duration: 0.6,
            easing: Easing::EaseOut,
            tracks: &[
                track(Property::TranslateY, -20.0, 0.0),
                track(Property::Opacity, 0.0, 1.0),
            ],
        },
        Reveal {
            glyph: Glyph::PlayCurve,
            delay: 0.3,
            duration: 0.6,
            easing: Easing::Spring,
            tracks: &[
                track(Property::Scale, 0.0, 1.0),
                track(Property::Opacity, 0.0, 1.0),
            ],
        },
        Reveal {
            glyph: Glyph::Ring,
            delay: 0.6,
            duration: 0.8,
            easing: Easing::EaseOut,
            tracks: &[
                track(Property::Rotate, -45.0, 0.0),
                track(Property::Opacity, 0.0, 1.0),
            ],
        },
        Reveal {
            glyph: Glyph::Gem,
            delay: 1.0,
            duration: 0.5,
            easing: Easing::Spring,
            tracks: &[
                track(Property::Scale, 0.0, 1.0),
                track(Property::TranslateY, -10.0, 0.0),
            ],
        },
    ],
    sparkle: Loop {
        glyph: Glyph::Sparkles,
        period: 2.0,
        easing: Easing::EaseInOut,
        tracks: &[
            track(Property::Opacity, 0.6, 1.0),
            track(Property::Scale, 0.9, 1.1),
        ],
    },
};

impl Timeline {
    /// Seconds after mount at which every reveal has finished.
    pub fn settle_time(&self) -> f64 {
        self.reveals.iter().map(Reveal::end).fold(0.0, f64::max)
    }

    /// Glyphs in the order their reveals start.
    pub fn reveal_order(&self) -> Vec<Glyph> {
        let mut reveals: Vec<&Reveal> = self.reveals.iter().collect();
        reveals.sort_by(|a, b| a.delay.total_cmp(&b.delay));
        reveals.into_iter().map(|reveal| reveal.glyph).collect()
    }

    /// Pose of `glyph` at `t` seconds after mount.
    pub fn pose_at(&self, glyph: Glyph, t: f64) -> Pose {
        let mut pose = Pose::default();
        if glyph == self.sparkle.glyph {
            let start = self.settle_time();
            if t < start {
                for track in self.sparkle.tracks {
                    pose.set(track.property, track.from);
                }
                return pose;
            }
            // Phase comes from absolute time, never from an accumulated delta.
            let phase = (t - start).rem_euclid(self.sparkle.period) / self.sparkle.period;
            let (leg, forward) = if phase < 0.5 {
                (phase * 2.0, true)
            } else {
                ((phase - 0.5) * 2.0, false)
            };
            let eased = self.sparkle.easing.apply(leg);
            for track in self.sparkle.tracks {
                let (a, b) = if forward {
                    (track.from, track.to)
                } else {
                    (track.to, track.from)
                };
                pose.set(track.property, a + (b - a) * eased);
            }
            return pose;
        }

        for reveal in self.reveals.iter().filter(|reveal| reveal.glyph == glyph) {
            let linear = if reveal.duration <= 0.0 {
                if t >= reveal.delay { 1.0 } else { 0.0 }
            } else {
                (t - reveal.delay) / reveal.duration
            };
            let eased = reveal.easing.apply(linear);
            for track in reveal.tracks {
                pose.set(track.property, track.from + (track.to - track.from) * eased);
            }
        }
        pose
    }

    /// CSS for every glyph, scoped under `.ido-logo`.
    pub fn stylesheet(&self) -> String {
        let mut css = String::new();
        for reveal in self.reveals {
            let name = format!("ido-reveal-{}", reveal.glyph.name());
            let _ = write!(
                css,
                "@keyframes {name} {{ from {{ {from} }} to {{ {to} }} }}\n\
                 .ido-logo .{class} {{ animation: {name} {duration}s {easing} {delay}s both; {origin} }}\n",
                name = name,
                from = declarations(reveal.tracks.iter().map(|t| (t.property, t.from))),
                to = declarations(reveal.tracks.iter().map(|t| (t.property, t.to))),
                class = reveal.glyph.class(),
                duration = reveal.duration,
                easing = reveal.easing.css(),
                delay = reveal.delay,
                origin = TRANSFORM_ORIGIN,
            );
        }

        let sparkle = &self.sparkle;
        let name = format!("ido-loop-{}", sparkle.glyph.name());
        let rest = declarations(sparkle.tracks.iter().map(|t| (t.property, t.from)));
        let _ = write!(
            css,
            "@keyframes {name} {{ 0%, 100% {{ {rest} }} 50% {{ {peak} }} }}\n\
             .ido-logo .{class} {{ {rest} animation: {name} {period}s {easing} {start}s infinite; {origin} }}\n",
            name = name,
            rest = rest,
            peak = declarations(sparkle.tracks.iter().map(|t| (t.property, t.to))),
            class = sparkle.glyph.class(),
            period = sparkle.period,
            easing = sparkle.easing.css(),
            start = self.settle_time(),
            origin = TRANSFORM_ORIGIN,
        );
        css
    }
}

const TRANSFORM_ORIGIN: &str = "transform-box: fill-box; transform-origin: center;";

fn declarations(values: impl Iterator<Item = (Property, f64)>) -> String {
    let mut out = String::new();
    let mut transforms = Vec::new();
    for (property, value) in values {
        match property {
            Property::Opacity => {
                let _ = write!(out, "opacity: {}; ", value);
            }
            Property::PathLength => {
                let _ = write!(out, "stroke-dashoffset: {}; ", 1.0 - value);
            }
            Property::TranslateY => transforms.push(format!("translateY({}px)", value)),
            Property::Scale => transforms.push(format!("scale({})", value)),
            Property::Rotate => transforms.push(format!("rotate({}deg)", value)),
        }
    }
    if !transforms.is_empty() {
        let _ = write!(out, "transform: {}; ", transforms.join(" "));
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn poses_close(a: Pose, b: Pose) -> bool {
        close(a.opacity, b.opacity)
            && close(a.translate_y, b.translate_y)
            && close(a.scale, b.scale)
            && close(a.rotate, b.rotate)
            && close(a.path_length, b.path_length)
    }

    #[test]
    fn easings_pin_their_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut, Easing::Spring] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-2.0), 0.0);
            assert_eq!(easing.apply(3.0), 1.0);
        }
        assert!(close(Easing::Linear.apply(0.3), 0.3));
        assert!(close(Easing::EaseInOut.apply(0.5), 0.5));
    }

    #[test]
    fn spring_overshoots_before_settling() {
        let peak = (1..100)
            .map(|i| Easing::Spring.apply(i as f64 / 100.0))
            .fold(0.0, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn reveals_start_in_glyph_order_with_increasing_delays() {
        assert_eq!(
            LOGO_TIMELINE.reveal_order(),
            vec![Glyph::Wave, Glyph::Microphone, Glyph::PlayCurve, Glyph::Ring, Glyph::Gem]
        );
        let delays: Vec<f64> = LOGO_TIMELINE.reveals.iter().map(|r| r.delay).collect();
        assert!(delays.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn mount_pose_matches_reveal_start_values() {
        let mic = LOGO_TIMELINE.pose_at(Glyph::Microphone, 0.0);
        assert_eq!(mic.opacity, 0.0);
        assert_eq!(mic.translate_y, -20.0);

        let wave = LOGO_TIMELINE.pose_at(Glyph::Wave, 0.0);
        assert_eq!(wave.path_length, 0.0);
        assert_eq!(wave.opacity, 0.0);

        let ring = LOGO_TIMELINE.pose_at(Glyph::Ring, 0.0);
        assert_eq!(ring.rotate, -45.0);

        let gem = LOGO_TIMELINE.pose_at(Glyph::Gem, 0.99);
        assert_eq!(gem.scale, 0.0);
    }

    #[test]
    fn every_glyph_rests_after_settling() {
        let settled = LOGO_TIMELINE.settle_time();
        assert!(close(settled, 1.5));

        let wave = LOGO_TIMELINE.pose_at(Glyph::Wave, settled);
        assert!(close(wave.opacity, 0.2));
        assert!(close(wave.path_length, 1.0));

        for glyph in [Glyph::Microphone, Glyph::PlayCurve, Glyph::Ring, Glyph::Gem] {
            assert!(poses_close(LOGO_TIMELINE.pose_at(glyph, settled + 5.0), Pose::default()));
        }
    }

    #[test]
    fn sparkles_hold_rest_pose_until_reveal_settles() {
        for t in [0.0, 0.5, 1.49] {
            let pose = LOGO_TIMELINE.pose_at(Glyph::Sparkles, t);
            assert_eq!(pose.opacity, 0.6);
            assert_eq!(pose.scale, 0.9);
        }
    }

    #[test]
    fn sparkle_loop_is_periodic_without_drift() {
        let start = LOGO_TIMELINE.settle_time();
        let period = LOGO_TIMELINE.sparkle.period;

        let peak = LOGO_TIMELINE.pose_at(Glyph::Sparkles, start + period / 2.0);
        assert!(close(peak.opacity, 1.0));
        assert!(close(peak.scale, 1.1));

        for offset in [0.0, 0.37, 0.9, 1.25, 1.999] {
            let first = LOGO_TIMELINE.pose_at(Glyph::Sparkles, start + offset);
            let much_later = LOGO_TIMELINE.pose_at(Glyph::Sparkles, start + offset + period * 500.0);
            assert!(poses_close(first, much_later), "drifted at offset {}", offset);
        }
    }

    #[test]
    fn sampling_is_deterministic() {
        for glyph in [Glyph::Wave, Glyph::Gem, Glyph::Sparkles] {
            assert_eq!(LOGO_TIMELINE.pose_at(glyph, 0.77), LOGO_TIMELINE.pose_at(glyph, 0.77));
        }
        assert_eq!(LOGO_TIMELINE.stylesheet(), LOGO_TIMELINE.stylesheet());
    }

    #[test]
    fn stylesheet_has_keyframes_for_every_glyph() {
        let css = LOGO_TIMELINE.stylesheet();
        for reveal in LOGO_TIMELINE.reveals {
            assert!(css.contains(&format!("@keyframes ido-reveal-{}", reveal.glyph.name())));
            assert!(css.contains(&format!(".ido-logo .{} ", reveal.glyph.class())));
        }
        assert!(css.contains("@keyframes ido-loop-sparkles"));
        assert!(css.contains("2s cubic-bezier(0.42, 0, 0.58, 1) 1.5s infinite"));
        assert!(css.contains("transform: rotate(-45deg);"));
        assert!(css.contains("stroke-dashoffset: 1;"));
    }
}
