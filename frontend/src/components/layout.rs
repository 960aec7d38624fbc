use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "cta-button--primary",
            ButtonVariant::Outline => "cta-button--outline",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub class: Classes,
}

/// Pill-shaped call to action. Nothing is wired to it yet; booking lives
/// outside this page.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            type="button"
            class={classes!("cta-button", props.variant.class(), props.class.clone())}
        >
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section class={classes!("content-section", props.class.clone())}>
            { for props.children.iter() }
        </section>
    }
}

/// Styles for `Section` and `Button`, mounted once by the page.
pub const LAYOUT_CSS: &str = r#"
    .content-section {
        padding: 6rem 1.5rem;
        max-width: 80rem;
        margin: 0 auto;
    }
    .cta-button {
        padding: 1rem 2rem;
        border-radius: 9999px;
        font-size: 0.875rem;
        font-weight: 500;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .cta-button--primary {
        background: #fff;
        color: #000;
        border: 1px solid #fff;
    }
    .cta-button--primary:hover {
        background: #e5e7eb;
        transform: scale(1.05);
    }
    .cta-button--outline {
        background: transparent;
        color: #fff;
        border: 1px solid rgba(255, 255, 255, 0.2);
    }
    .cta-button--outline:hover {
        background: rgba(255, 255, 255, 0.1);
        border-color: rgba(255, 255, 255, 0.4);
    }
    .cta-button.compact {
        padding: 0.5rem 1.5rem;
        font-size: 0.75rem;
    }
    .cta-button.full-width {
        width: 100%;
    }
    @media (min-width: 768px) {
        .content-section {
            padding-left: 3rem;
            padding-right: 3rem;
        }
    }
"#;
