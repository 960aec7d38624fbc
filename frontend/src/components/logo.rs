use yew::prelude::*;

use crate::animation::timeline::{Glyph, LOGO_TIMELINE};

pub const GEM_FACETS_MASK: &str = "ido-gem-facets";
pub const RING_CUTOUT_MASK: &str = "ido-ring-cutout";

const VIEW_WIDTH: u32 = 300;
const VIEW_HEIGHT: u32 = 150;

const WAVE_PATH: &str = "M20 75 C 60 75, 80 40, 120 40 C 160 40, 180 110, 220 110 C 260 110, 280 75, 300 75";
const MIC_GRILL_Y: [u32; 4] = [40, 45, 50, 55];
const PLAY_CURVE_PATH: &str = "M110 35 C 160 35, 170 75, 170 75 C 170 75, 160 115, 110 115";
const GEM_PATH: &str = "M210 40 L218 25 L242 25 L250 40 L230 65 Z";
const GEM_SHADOW_PATH: &str = "M208 38 L252 38 L230 68 Z";
/// Girdle, crown and pavilion cuts, subtracted from the gem fill.
const GEM_FACET_CUTS: [&str; 6] = [
    "M210 40 L250 40",
    "M218 25 L230 40 L242 25",
    "M230 25 L230 40",
    "M230 65 L223 40",
    "M230 65 L237 40",
    "M230 65 L230 40",
];
const SPARKLE_PATHS: [&str; 2] = [
    "M195 35 Q 200 35, 200 30 Q 200 35, 205 35 Q 200 35, 200 40 Q 200 35, 195 35",
    "M260 30 Q 265 30, 265 25 Q 265 30, 270 30 Q 265 30, 265 35 Q 265 30, 260 30",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogoSize {
    /// Stretch to the parent's box.
    #[default]
    Fill,
    Px(u32),
}

impl LogoSize {
    fn style(self) -> String {
        match self {
            LogoSize::Fill => "display: block; width: 100%; height: 100%;".to_string(),
            LogoSize::Px(width) => format!(
                "display: block; width: {}px; height: {}px;",
                width,
                width * VIEW_HEIGHT / VIEW_WIDTH
            ),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IdoLogoProps {
    #[prop_or_default]
    pub size: LogoSize,
    #[prop_or(AttrValue::Static("currentColor"))]
    pub color: AttrValue,
}

/// Microphone "I", play-curve "D" and ring-with-gem "O".
///
/// Every glyph carries a class from `Glyph::class`; the embedded stylesheet
/// compiled from `LOGO_TIMELINE` animates them on mount and keeps the
/// sparkles looping for as long as the element exists.
#[function_component(IdoLogo)]
pub fn ido_logo(props: &IdoLogoProps) -> Html {
    let color = props.color.clone();
    let stylesheet = use_memo(|_| LOGO_TIMELINE.stylesheet(), ());

    html! {
        <svg
            class="ido-logo"
            viewBox={format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)}
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
            style={props.size.style()}
            role="img"
            aria-label="IDO Logo"
        >
            <style>{ (*stylesheet).clone() }</style>
            <defs>
                <mask id={GEM_FACETS_MASK}>
                    <rect x="0" y="0" width={VIEW_WIDTH.to_string()} height={VIEW_HEIGHT.to_string()} fill="white" />
                    <g stroke="black" stroke-width="1.5" fill="none">
                        { for GEM_FACET_CUTS.iter().map(|d| html! { <path d={*d} /> }) }
                    </g>
                </mask>
                <mask id={RING_CUTOUT_MASK}>
                    <rect x="0" y="0" width={VIEW_WIDTH.to_string()} height={VIEW_HEIGHT.to_string()} fill="white" />
                    <path d={GEM_SHADOW_PATH} fill="black" stroke="black" stroke-width="4" />
                </mask>
            </defs>

            <path
                class={Glyph::Wave.class()}
                d={WAVE_PATH}
                stroke={color.clone()}
                stroke-width="2"
                fill="none"
                pathLength="1"
                stroke-dasharray="1"
            />

            <g class={Glyph::Microphone.class()}>
                <rect x="55" y="35" width="20" height="30" rx="10" stroke={color.clone()} stroke-width="3" fill="none" />
                { for MIC_GRILL_Y.iter().map(|y| html! {
                    <path d={format!("M60 {y} L70 {y}", y = y)} stroke={color.clone()} stroke-width="1" opacity="0.5" />
                }) }
                <rect x="62" y="65" width="6" height="50" rx="2" fill={color.clone()} />
                <rect x="50" y="115" width="30" height="4" rx="2" fill={color.clone()} />
            </g>

            <g class={Glyph::PlayCurve.class()}>
                <path d="M110 35 L110 115" stroke={color.clone()} stroke-width="6" stroke-linecap="round" />
                <path d={PLAY_CURVE_PATH} stroke={color.clone()} stroke-width="6" fill="none" stroke-linecap="round" />
                <path d="M125 55 L155 75 L125 95 Z" fill={color.clone()} opacity="0.8" />
            </g>

            <g class={Glyph::Ring.class()}>
                <circle
                    cx="230"
                    cy="80"
                    r="35"
                    stroke={color.clone()}
                    stroke-width="7"
                    fill="none"
                    mask={format!("url(#{})", RING_CUTOUT_MASK)}
                />
                <g class={Glyph::Gem.class()}>
                    <path d={GEM_PATH} fill={color.clone()} mask={format!("url(#{})", GEM_FACETS_MASK)} />
                    <g class={Glyph::Sparkles.class()}>
                        { for SPARKLE_PATHS.iter().map(|d| html! { <path d={*d} fill={color.clone()} /> }) }
                    </g>
                </g>
            </g>
        </svg>
    }
}
