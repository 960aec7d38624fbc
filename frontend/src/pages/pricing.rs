use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::layout::{Button, ButtonVariant, Section};
use crate::pages::content::{PricingTier, PRICING_TIERS};

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub tier: PricingTier,
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let tier = props.tier;
    let variant = if tier.is_featured {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    };

    html! {
        <div class={classes!("pricing-card", tier.is_featured.then(|| "featured"))}>
            {
                if tier.is_featured {
                    html! { <div class="pricing-badge">{"Most Popular"}</div> }
                } else {
                    html! {}
                }
            }
            <div class="pricing-heading">
                <h3 class="serif">{ tier.name }</h3>
                <div class="pricing-price">{ tier.price_display }</div>
                <p class="pricing-description">{ tier.description }</p>
            </div>
            <ul class="pricing-features">
                {
                    for tier.features.iter().map(|feature| html! {
                        <li>
                            <Icon kind={IconKind::Check} />
                            <span>{ *feature }</span>
                        </li>
                    })
                }
            </ul>
            <Button {variant} class={classes!("full-width")}>{"Select Plan"}</Button>
        </div>
    }
}

#[function_component(PricingGrid)]
pub fn pricing_grid() -> Html {
    html! {
        <Section>
            <style>{ PRICING_CSS }</style>
            <div id="pricing" class="pricing-intro">
                <h2 class="serif">{"Investment"}</h2>
                <p class="muted">
                    {"Choose the perfect arrangement for your wedding budget. \
                      All tiers include full ownership rights and high-quality digital delivery."}
                </p>
            </div>
            <div class="pricing-grid">
                {
                    for PRICING_TIERS.iter().map(|tier| html! {
                        <PricingCard key={tier.name} tier={*tier} />
                    })
                }
            </div>
        </Section>
    }
}

const PRICING_CSS: &str = r#"
    .pricing-intro {
        text-align: center;
        max-width: 48rem;
        margin: 0 auto 5rem;
    }
    .pricing-intro h2 {
        font-size: 2.25rem;
        margin-bottom: 1.5rem;
    }
    .pricing-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
    }
    .pricing-card {
        position: relative;
        display: flex;
        flex-direction: column;
        padding: 2rem;
        border-radius: 1rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: transparent;
    }
    .pricing-card.featured {
        background: rgba(255, 255, 255, 0.05);
        border-color: rgba(255, 255, 255, 0.2);
    }
    .pricing-badge {
        position: absolute;
        top: -1rem;
        left: 50%;
        transform: translateX(-50%);
        padding: 0.25rem 1rem;
        background: #fff;
        color: #000;
        font-size: 0.75rem;
        font-weight: 700;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        border-radius: 9999px;
        white-space: nowrap;
    }
    .pricing-heading {
        margin-bottom: 2rem;
    }
    .pricing-heading h3 {
        font-size: 1.5rem;
        margin-bottom: 0.5rem;
    }
    .pricing-price {
        font-size: 1.875rem;
        font-weight: 300;
        margin-bottom: 1rem;
    }
    .pricing-description {
        font-size: 0.875rem;
        line-height: 1.6;
        color: rgba(255, 255, 255, 0.5);
        min-height: 60px;
    }
    .pricing-features {
        list-style: none;
        padding: 0;
        margin: 0 0 2rem;
        flex-grow: 1;
    }
    .pricing-features li {
        display: flex;
        align-items: flex-start;
        gap: 0.75rem;
        margin-bottom: 1rem;
        font-size: 0.875rem;
        color: rgba(255, 255, 255, 0.8);
    }
    .pricing-features .icon {
        width: 1rem;
        height: 1rem;
        margin-top: 0.125rem;
        flex-shrink: 0;
        color: rgba(255, 255, 255, 0.4);
    }
    @media (min-width: 768px) {
        .pricing-intro h2 {
            font-size: 3rem;
        }
        .pricing-grid {
            grid-template-columns: repeat(3, 1fr);
        }
    }
"#;
