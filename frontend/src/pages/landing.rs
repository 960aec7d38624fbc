use chrono::{Datelike, Local, NaiveDate};
use log::warn;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::layout::{Button, ButtonVariant, Section, LAYOUT_CSS};
use crate::components::logo::{IdoLogo, LogoSize};
use crate::config;
use crate::pages::content::{
    PROCESS_IMAGE_URL, PROCESS_QUOTE, PROCESS_QUOTE_AUTHOR, PROCESS_STEPS,
};
use crate::pages::portfolio::{ActivePortfolio, PortfolioAction, PortfolioGrid};
use crate::pages::pricing::PricingGrid;
use crate::scroll::{HeroTransform, ScrollSubscription};

#[derive(Properties, PartialEq)]
pub struct LandingPageProps {
    /// Date used for the footer year. Defaults to the local date at render.
    #[prop_or_default]
    pub today: Option<NaiveDate>,
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let hero = use_state_eq(HeroTransform::default);
    let portfolio = use_reducer(ActivePortfolio::default);

    // Hero fade follows the scroll position for as long as the page is mounted
    {
        let hero = hero.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = match ScrollSubscription::attach(move |progress| {
                    hero.set(HeroTransform::at(progress));
                }) {
                    Ok(subscription) => Some(subscription),
                    Err(err) => {
                        warn!("Hero scroll effect disabled: {}", err);
                        None
                    }
                };
                move || drop(subscription)
            },
            (),
        );
    }

    let on_portfolio_toggle = use_callback(
        |id: u32, dispatcher: &UseReducerDispatcher<ActivePortfolio>| {
            dispatcher.dispatch(PortfolioAction::CardClicked(id));
        },
        portfolio.dispatcher(),
    );

    let year = props
        .today
        .unwrap_or_else(|| Local::now().date_naive())
        .year();

    html! {
        <div class="landing-page">
            <style>{ LAYOUT_CSS }</style>
            <style>{ PAGE_CSS }</style>
            <NavBar />
            <Hero transform={*hero} />
            <ProcessSection />
            <PortfolioGrid active={portfolio.current()} on_toggle={on_portfolio_toggle} />
            <PricingGrid />
            <ClosingCall {year} />
        </div>
    }
}

#[function_component(NavBar)]
fn nav_bar() -> Html {
    html! {
        <nav class="top-nav">
            <div class="nav-logo">
                <IdoLogo size={LogoSize::Px(48)} color="white" />
            </div>
            <div class="nav-links">
                <a href="#how-it-works">{"Process"}</a>
                <a href="#portfolio">{"Portfolio"}</a>
                <a href="#pricing">{"Pricing"}</a>
            </div>
            <Button variant={ButtonVariant::Outline} class={classes!("compact")}>{"Book Now"}</Button>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    transform: HeroTransform,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    html! {
        <section class="hero" style={props.transform.style()}>
            <div class="hero-glow"></div>
            <div class="hero-logo">
                <div class="hero-logo-inner">
                    <IdoLogo color="#ffffff" />
                </div>
            </div>
            <div class="hero-copy">
                <h1 class="serif">
                    {"Your Vows,"}<br />
                    <span class="soft">{"Composed."}</span>
                </h1>
                <p class="hero-lead">
                    {"We transform your unique love story into a bespoke musical masterpiece. \
                      The perfect soundtrack for your walk down the aisle and your life together."}
                </p>
                <div class="hero-actions">
                    <Button>{"Start Your Song"}</Button>
                    <Button variant={ButtonVariant::Outline}>{"Listen to Samples"}</Button>
                </div>
            </div>
            <div class="scroll-hint">
                <Icon kind={IconKind::ArrowDown} />
            </div>
        </section>
    }
}

#[function_component(ProcessSection)]
fn process_section() -> Html {
    html! {
        <Section class={classes!("bordered-top")}>
            <div id="how-it-works" class="process-layout">
                <div>
                    <h2 class="serif">{"From Heart"}<br />{"to Harmony"}</h2>
                    <p class="muted process-intro">
                        {"Every couple has a sound. Whether it's the song that was playing when you met, \
                          or the rhythm of your heartbeat when you're together. We capture that essence."}
                    </p>
                    <div class="process-steps">
                        {
                            for PROCESS_STEPS.iter().map(|step| html! {
                                <div class="process-step" key={step.title}>
                                    <div class="step-icon">
                                        <Icon kind={step.icon} />
                                    </div>
                                    <div>
                                        <h3 class="serif">{ step.title }</h3>
                                        <p class="step-description">{ step.description }</p>
                                    </div>
                                </div>
                            })
                        }
                    </div>
                </div>
                <div class="process-visual">
                    <img src={PROCESS_IMAGE_URL} alt="Composer at piano" referrerpolicy="no-referrer" />
                    <div class="process-shade"></div>
                    <div class="process-quote">
                        <p class="serif quote">{ PROCESS_QUOTE }</p>
                        <p class="quote-author">{ PROCESS_QUOTE_AUTHOR }</p>
                    </div>
                </div>
            </div>
        </Section>
    }
}

#[derive(Properties, PartialEq)]
struct ClosingCallProps {
    year: i32,
}

#[function_component(ClosingCall)]
fn closing_call(props: &ClosingCallProps) -> Html {
    html! {
        <section class="closing-call">
            <div class="closing-inner">
                <div class="closing-logo">
                    <IdoLogo size={LogoSize::Px(96)} color="white" />
                </div>
                <h2 class="serif">{"Ready to say \"I Do\"?"}</h2>
                <p class="muted">
                    {"Limited commission slots available for the upcoming wedding season. \
                      Reserve your composition today."}
                </p>
                <div class="closing-actions">
                    <Button>{"Book Consultation"}</Button>
                    <a href={config::contact_mailto()} class="mail-link">
                        <Icon kind={IconKind::Mail} />
                        { config::CONTACT_EMAIL }
                    </a>
                </div>
                <Footer year={props.year} />
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub year: i32,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="site-footer">
            <p>{ copyright_line(props.year) }</p>
            <div class="footer-links">
                <a href="#">{"Instagram"}</a>
                <a href="#">{"Spotify"}</a>
                <a href="#">{"Terms"}</a>
            </div>
        </footer>
    }
}

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}", year, config::COMPANY_NAME)
}

const PAGE_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        background: #050505;
        color: #fff;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .landing-page ::selection {
        background: rgba(255, 255, 255, 0.2);
    }
    .landing-page a {
        color: inherit;
        text-decoration: none;
    }
    .serif {
        font-family: Georgia, "Times New Roman", serif;
        font-weight: 400;
    }
    .muted {
        color: rgba(255, 255, 255, 0.5);
        line-height: 1.6;
    }
    .soft {
        color: rgba(255, 255, 255, 0.8);
    }
    .desktop-only {
        display: none;
    }

    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1.5rem;
        mix-blend-mode: difference;
        backdrop-filter: blur(4px);
        background: rgba(0, 0, 0, 0.2);
    }
    .nav-logo {
        width: 3rem;
        height: 3rem;
        display: flex;
        align-items: center;
    }
    .nav-links {
        display: none;
        gap: 2rem;
        font-size: 0.75rem;
        font-weight: 500;
        text-transform: uppercase;
        letter-spacing: 0.2em;
        color: rgba(255, 255, 255, 0.8);
    }
    .nav-links a:hover {
        color: #fff;
    }

    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        padding: 5rem 1.5rem 0;
        overflow: hidden;
        transform-origin: center;
        will-change: opacity, transform;
    }
    .hero-glow {
        position: absolute;
        inset: 0;
        background: radial-gradient(circle at center, rgba(255, 255, 255, 0.05), transparent 70%);
        opacity: 0.5;
        pointer-events: none;
    }
    .hero-logo {
        width: 100%;
        max-width: 48rem;
        aspect-ratio: 16 / 9;
        display: flex;
        align-items: center;
        justify-content: center;
        margin-bottom: 3rem;
    }
    .hero-logo-inner {
        width: 100%;
        height: 100%;
        max-width: 32rem;
    }
    .hero-copy {
        position: relative;
        z-index: 10;
        text-align: center;
        max-width: 42rem;
        animation: hero-rise 0.8s ease 0.5s both;
    }
    .hero-copy h1 {
        font-size: 3rem;
        font-style: italic;
        line-height: 1.25;
        margin-bottom: 1.5rem;
    }
    .hero-lead {
        font-size: 1rem;
        font-weight: 300;
        line-height: 1.6;
        color: rgba(255, 255, 255, 0.6);
        max-width: 32rem;
        margin: 0 auto 2.5rem;
    }
    .hero-actions,
    .closing-actions {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        justify-content: center;
        align-items: center;
    }
    .scroll-hint {
        position: absolute;
        bottom: 3rem;
        left: 0;
        right: 0;
        display: flex;
        justify-content: center;
        color: rgba(255, 255, 255, 0.3);
        animation: fade-in 1s ease 1.5s both, bounce 1s infinite;
    }
    .scroll-hint .icon {
        width: 1.5rem;
        height: 1.5rem;
    }
    @keyframes hero-rise {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes fade-in {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes bounce {
        0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
        50% { transform: none; animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
    }

    .bordered-top {
        border-top: 1px solid rgba(255, 255, 255, 0.05);
    }
    .process-layout {
        display: grid;
        grid-template-columns: 1fr;
        gap: 4rem;
        align-items: center;
    }
    .process-layout h2 {
        font-size: 2.25rem;
        margin-bottom: 2rem;
    }
    .process-intro {
        margin-bottom: 2rem;
    }
    .process-step {
        display: flex;
        gap: 1.5rem;
        margin-bottom: 2rem;
    }
    .process-step h3 {
        font-size: 1.25rem;
        margin-bottom: 0.5rem;
    }
    .step-icon {
        width: 3rem;
        height: 3rem;
        flex-shrink: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        color: rgba(255, 255, 255, 0.8);
    }
    .step-icon .icon {
        width: 1.25rem;
        height: 1.25rem;
    }
    .step-description {
        font-size: 0.875rem;
        color: rgba(255, 255, 255, 0.5);
    }
    .process-visual {
        position: relative;
        aspect-ratio: 4 / 5;
        border-radius: 1rem;
        overflow: hidden;
        background: rgba(255, 255, 255, 0.05);
    }
    .process-visual img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        opacity: 0.6;
        transition: opacity 0.7s ease;
    }
    .process-visual img:hover {
        opacity: 0.8;
    }
    .process-shade {
        position: absolute;
        inset: 0;
        background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent);
        pointer-events: none;
    }
    .process-quote {
        position: absolute;
        bottom: 2rem;
        left: 2rem;
        right: 2rem;
    }
    .process-quote .quote {
        font-size: 1.5rem;
        font-style: italic;
    }
    .quote-author {
        font-size: 0.75rem;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        margin-top: 0.5rem;
        opacity: 0.6;
    }

    .closing-call {
        padding: 8rem 1.5rem;
        text-align: center;
        background: #0a0a0a;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
    }
    .closing-inner {
        max-width: 42rem;
        margin: 0 auto;
    }
    .closing-logo {
        display: flex;
        justify-content: center;
        margin-bottom: 3rem;
    }
    .closing-inner h2 {
        font-size: 2.25rem;
        margin-bottom: 2rem;
    }
    .closing-inner .muted {
        margin-bottom: 3rem;
    }
    .mail-link {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-size: 0.875rem;
        color: rgba(255, 255, 255, 0.6);
        transition: color 0.3s ease;
    }
    .mail-link:hover {
        color: #fff;
    }
    .mail-link .icon {
        width: 1rem;
        height: 1rem;
    }
    .site-footer {
        margin-top: 6rem;
        padding-top: 3rem;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        align-items: center;
        gap: 1rem;
        font-size: 0.75rem;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        color: rgba(255, 255, 255, 0.2);
    }
    .footer-links {
        display: flex;
        gap: 2rem;
    }
    .footer-links a:hover {
        color: rgba(255, 255, 255, 0.4);
    }

    @media (min-width: 768px) {
        .desktop-only {
            display: block;
        }
        .nav-links {
            display: flex;
        }
        .hero-copy h1 {
            font-size: 4.5rem;
        }
        .hero-lead {
            font-size: 1.125rem;
        }
        .hero-actions,
        .closing-actions {
            flex-direction: row;
        }
        .closing-actions {
            gap: 1.5rem;
        }
        .process-layout {
            grid-template-columns: repeat(2, 1fr);
        }
        .process-layout h2,
        .closing-inner h2 {
            font-size: 3rem;
        }
        .site-footer {
            flex-direction: row;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::content::{PORTFOLIO_ITEMS, PRICING_TIERS};
    use crate::test_support::render_html;

    fn fixed_day(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        Some(NaiveDate::from_ymd_opt(year, month, day).expect("valid date"))
    }

    #[test]
    fn copyright_names_year_and_company() {
        assert_eq!(copyright_line(2031), "© 2031 IDO Production Company");
    }

    #[tokio::test]
    async fn footer_year_comes_from_render_date() {
        let html = render_html::<LandingPage, _>(|| LandingPageProps {
            today: fixed_day(2027, 1, 1),
        })
        .await;
        assert!(html.contains("© 2027 IDO Production Company"));
        assert!(!html.contains("© 2026"));
    }

    #[tokio::test]
    async fn footer_defaults_to_current_year() {
        let html = render_html::<LandingPage, _>(|| LandingPageProps { today: None }).await;
        let expected = copyright_line(Local::now().year());
        assert!(html.contains(&expected));
    }

    #[tokio::test]
    async fn sections_render_in_page_order() {
        let html = render_html::<LandingPage, _>(|| LandingPageProps {
            today: fixed_day(2027, 1, 1),
        })
        .await;
        let markers = [
            r#"class="top-nav""#,
            r#"class="hero""#,
            r#"id="how-it-works""#,
            r#"id="portfolio""#,
            r#"id="pricing""#,
            r#"class="closing-call""#,
            r#"class="site-footer""#,
        ];
        let positions: Vec<usize> = markers
            .iter()
            .map(|marker| html.find(marker).unwrap_or_else(|| panic!("missing {}", marker)))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn page_starts_with_hero_at_rest_and_no_card_playing() {
        let html = render_html::<LandingPage, _>(|| LandingPageProps {
            today: fixed_day(2027, 1, 1),
        })
        .await;
        assert!(html.contains(&HeroTransform::default().style()));
        assert_eq!(html.matches("icon-play").count(), PORTFOLIO_ITEMS.len());
        assert_eq!(html.matches("icon-pause").count(), 0);
        assert_eq!(html.matches("Most Popular").count(), 1);
        for tier in PRICING_TIERS {
            assert!(html.contains(tier.name));
        }
    }

    #[tokio::test]
    async fn contact_and_placeholder_links_are_present() {
        let html = render_html::<LandingPage, _>(|| LandingPageProps {
            today: fixed_day(2027, 1, 1),
        })
        .await;
        assert!(html.contains(r#"href="mailto:hello@ido-music.com""#));
        assert_eq!(html.matches(r##"href="#""##).count(), 3);
        assert_eq!(html.matches(r#"class="ido-logo""#).count(), 3);
    }
}
