use yew::prelude::*;

/// Line icons drawn on a 24x24 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Play,
    Pause,
    Check,
    Music,
    Heart,
    Star,
    Mail,
    ArrowDown,
}

impl IconKind {
    pub fn name(self) -> &'static str {
        match self {
            IconKind::Play => "play",
            IconKind::Pause => "pause",
            IconKind::Check => "check",
            IconKind::Music => "music",
            IconKind::Heart => "heart",
            IconKind::Star => "star",
            IconKind::Mail => "mail",
            IconKind::ArrowDown => "arrow-down",
        }
    }

    fn shapes(self) -> Html {
        match self {
            IconKind::Play => html! {
                <polygon points="6 3 20 12 6 21 6 3" />
            },
            IconKind::Pause => html! {
                <>
                    <rect x="14" y="4" width="4" height="16" rx="1" />
                    <rect x="6" y="4" width="4" height="16" rx="1" />
                </>
            },
            IconKind::Check => html! {
                <path d="M20 6 9 17l-5-5" />
            },
            IconKind::Music => html! {
                <>
                    <path d="M9 18V5l12-2v13" />
                    <circle cx="6" cy="18" r="3" />
                    <circle cx="18" cy="16" r="3" />
                </>
            },
            IconKind::Heart => html! {
                <path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" />
            },
            IconKind::Star => html! {
                <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
            },
            IconKind::Mail => html! {
                <>
                    <rect x="2" y="4" width="20" height="16" rx="2" />
                    <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
                </>
            },
            IconKind::ArrowDown => html! {
                <>
                    <path d="M12 5v14" />
                    <path d="m19 12-7 7-7-7" />
                </>
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_default]
    pub class: Classes,
    /// Fill the shape with the current color as well as stroking it.
    #[prop_or_default]
    pub filled: bool,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let fill = if props.filled { "currentColor" } else { "none" };
    html! {
        <svg
            class={classes!("icon", format!("icon-{}", props.kind.name()), props.class.clone())}
            viewBox="0 0 24 24"
            fill={fill}
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { props.kind.shapes() }
        </svg>
    }
}
