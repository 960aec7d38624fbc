use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::layout::{Button, ButtonVariant};
use crate::pages::content::{PortfolioItem, PORTFOLIO_ITEMS};

/// Which sample card currently shows "pause". Nothing actually plays; the
/// card only swaps its icon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActivePortfolio {
    current: Option<u32>,
}

pub enum PortfolioAction {
    CardClicked(u32),
}

impl ActivePortfolio {
    pub fn current(&self) -> Option<u32> {
        self.current
    }

    pub fn is_active(&self, id: u32) -> bool {
        self.current == Some(id)
    }

    /// State after a click on card `id`.
    pub fn toggled(&self, id: u32) -> Self {
        if self.is_active(id) {
            self.cleared()
        } else {
            self.with_active(id)
        }
    }

    fn with_active(&self, id: u32) -> Self {
        Self { current: Some(id) }
    }

    fn cleared(&self) -> Self {
        Self { current: None }
    }
}

impl Reducible for ActivePortfolio {
    type Action = PortfolioAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            PortfolioAction::CardClicked(id) => {
                let next = self.toggled(id);
                debug!("Portfolio card {} clicked, active is now {:?}", id, next.current);
                Rc::new(next)
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PortfolioCardProps {
    pub item: PortfolioItem,
    pub active: bool,
    pub on_toggle: Callback<u32>,
}

#[function_component(PortfolioCard)]
pub fn portfolio_card(props: &PortfolioCardProps) -> Html {
    let item = props.item;
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(item.id))
    };
    let icon = if props.active {
        html! { <Icon kind={IconKind::Pause} filled={true} /> }
    } else {
        html! { <Icon kind={IconKind::Play} filled={true} class={classes!("nudge-right")} /> }
    };

    html! {
        <div class={classes!("portfolio-card", props.active.then(|| "active"))} {onclick}>
            <div class="portfolio-artwork">
                <img src={item.image_url} alt={item.title} referrerpolicy="no-referrer" />
                <div class="portfolio-overlay">
                    <div class="play-toggle">
                        { icon }
                    </div>
                </div>
            </div>
            <h3 class="portfolio-title">{ item.title }</h3>
            <p class="portfolio-couple">{ item.couple_names }</p>
            <div class="portfolio-meta">
                <span class="portfolio-genre">{ item.genre }</span>
                <span class="meta-dot"></span>
                <span class="portfolio-duration">{ item.duration_display }</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PortfolioGridProps {
    pub active: Option<u32>,
    pub on_toggle: Callback<u32>,
}

#[function_component(PortfolioGrid)]
pub fn portfolio_grid(props: &PortfolioGridProps) -> Html {
    html! {
        <section id="portfolio" class="portfolio-section">
            <style>{ PORTFOLIO_CSS }</style>
            <div class="portfolio-inner">
                <div class="portfolio-header">
                    <div>
                        <h2 class="serif">{"Featured Stories"}</h2>
                        <p class="muted">{"Listen to the love stories we've already told."}</p>
                    </div>
                    <Button variant={ButtonVariant::Outline} class={classes!("desktop-only")}>
                        {"View All Archive"}
                    </Button>
                </div>
                <div class="portfolio-grid">
                    {
                        for PORTFOLIO_ITEMS.iter().map(|item| html! {
                            <PortfolioCard
                                key={item.id.to_string()}
                                item={*item}
                                active={props.active == Some(item.id)}
                                on_toggle={props.on_toggle.clone()}
                            />
                        })
                    }
                </div>
            </div>
        </section>
    }
}

const PORTFOLIO_CSS: &str = r#"
    .portfolio-section {
        padding: 6rem 0;
        background: #0a0a0a;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
    }
    .portfolio-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .portfolio-header {
        display: flex;
        justify-content: space-between;
        align-items: flex-end;
        margin-bottom: 4rem;
    }
    .portfolio-header h2 {
        font-size: 2.25rem;
        margin-bottom: 1rem;
    }
    .portfolio-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
    }
    .portfolio-card {
        cursor: pointer;
    }
    .portfolio-artwork {
        position: relative;
        aspect-ratio: 1 / 1;
        border-radius: 0.75rem;
        overflow: hidden;
        margin-bottom: 1.5rem;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
    }
    .portfolio-artwork img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        opacity: 0.8;
        transition: transform 0.7s ease, opacity 0.7s ease;
    }
    .portfolio-card:hover .portfolio-artwork img {
        transform: scale(1.05);
        opacity: 1;
    }
    .portfolio-overlay {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(0, 0, 0, 0.2);
        transition: background 0.3s ease;
    }
    .portfolio-card:hover .portfolio-overlay {
        background: rgba(0, 0, 0, 0.4);
    }
    .play-toggle {
        width: 4rem;
        height: 4rem;
        border-radius: 9999px;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(12px);
        border: 1px solid rgba(255, 255, 255, 0.2);
        transition: transform 0.3s ease;
    }
    .portfolio-card:hover .play-toggle {
        transform: scale(1.1);
    }
    .play-toggle .icon {
        width: 1.5rem;
        height: 1.5rem;
        color: #fff;
    }
    .play-toggle .nudge-right {
        margin-left: 0.25rem;
    }
    .portfolio-title {
        font-family: Georgia, "Times New Roman", serif;
        font-size: 1.5rem;
        margin-bottom: 0.25rem;
    }
    .portfolio-couple {
        font-size: 0.875rem;
        color: rgba(255, 255, 255, 0.6);
        text-transform: uppercase;
        letter-spacing: 0.05em;
        margin-bottom: 0.5rem;
    }
    .portfolio-meta {
        display: flex;
        align-items: center;
        gap: 1rem;
        font-size: 0.75rem;
        color: rgba(255, 255, 255, 0.4);
    }
    .meta-dot {
        width: 0.25rem;
        height: 0.25rem;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.2);
    }
    @media (min-width: 768px) {
        .portfolio-inner {
            padding: 0 3rem;
        }
        .portfolio-grid {
            grid-template-columns: repeat(3, 1fr);
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_html;

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn clicking_idle_card_activates_it() {
        let state = ActivePortfolio::default().toggled(1);
        assert_eq!(state.current(), Some(1));
    }

    #[test]
    fn clicking_active_card_clears_it() {
        let state = ActivePortfolio::default().toggled(1).toggled(1);
        assert_eq!(state.current(), None);
    }

    #[test]
    fn clicking_another_card_moves_the_pause_icon() {
        let state = ActivePortfolio::default().toggled(1).toggled(2);
        assert_eq!(state.current(), Some(2));
        assert!(!state.is_active(1));
        assert!(state.is_active(2));
    }

    #[test]
    fn reducer_applies_card_clicks() {
        let state = Rc::new(ActivePortfolio::default());
        let state = state.reduce(PortfolioAction::CardClicked(3));
        assert_eq!(state.current(), Some(3));
        let state = state.reduce(PortfolioAction::CardClicked(3));
        assert_eq!(state.current(), None);
    }

    #[test]
    fn at_most_one_card_is_ever_active() {
        let clicks = [1, 2, 2, 3, 1, 1, 3, 2];
        let mut state = ActivePortfolio::default();
        for id in clicks {
            state = state.toggled(id);
            let active = PORTFOLIO_ITEMS.iter().filter(|item| state.is_active(item.id)).count();
            assert!(active <= 1);
        }
    }

    #[tokio::test]
    async fn grid_renders_items_in_configured_order() {
        let html = render_html::<PortfolioGrid, _>(|| PortfolioGridProps {
            active: None,
            on_toggle: Callback::from(|_: u32| ()),
        })
        .await;

        let mut last = 0;
        for item in PORTFOLIO_ITEMS {
            let at = html.find(item.title).expect("title rendered");
            assert!(at > last, "{} out of order", item.title);
            last = at;
            assert!(html.contains(item.genre));
            assert!(html.contains(item.duration_display));
            assert!(html.contains(item.image_url));
        }
        // `&` in couple names is escaped in markup
        assert!(html.contains("Sarah &amp; James"));
        assert!(html.contains("Michael &amp; David"));
        assert!(html.contains("Elena &amp; Thomas"));
        assert_eq!(count(&html, r#"class="portfolio-card""#), 3);
    }

    #[tokio::test]
    async fn idle_grid_shows_only_play_icons() {
        let html = render_html::<PortfolioGrid, _>(|| PortfolioGridProps {
            active: None,
            on_toggle: Callback::from(|_: u32| ()),
        })
        .await;
        assert_eq!(count(&html, "icon-play"), 3);
        assert_eq!(count(&html, "icon-pause"), 0);
    }

    #[tokio::test]
    async fn active_card_shows_pause_icon() {
        let html = render_html::<PortfolioGrid, _>(|| PortfolioGridProps {
            active: Some(2),
            on_toggle: Callback::from(|_: u32| ()),
        })
        .await;
        assert_eq!(count(&html, "icon-play"), 2);
        assert_eq!(count(&html, "icon-pause"), 1);

        let cards: Vec<&str> = html.split(r#"class="portfolio-card"#).skip(1).collect();
        assert_eq!(cards.len(), 3);
        assert!(cards[1].starts_with(" active"));
        assert!(cards[1].contains("icon-pause"));
        assert!(!cards[0].contains("icon-pause"));
        assert!(!cards[2].contains("icon-pause"));
    }
}
