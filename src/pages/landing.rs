use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use chrono::Datelike;

use crate::components::contact::ContactForm;
use crate::components::cursor::CursorGlow;
use crate::components::nav::NavBar;
use crate::state::cards::CardInteraction;
use crate::state::sections::{ActiveSectionTracker, SectionRegistry};
use crate::state::theme::Theme;
use crate::state::viewport::Viewport;

const SERVICES: [(&str, &str, &str); 6] = [
    (
        "🚀",
        "Social Media Management",
        "Daily posting, scheduling and channel care across every platform your audience lives on.",
    ),
    (
        "🎨",
        "Content Creation",
        "Short-form video, photography and copy produced in-house and tuned to your brand voice.",
    ),
    (
        "🌟",
        "Influencer Campaigns",
        "Creator matchmaking, briefs and end-to-end campaign delivery with transparent reporting.",
    ),
    (
        "💡",
        "Brand Strategy",
        "Positioning, tone and rollout plans that make the next quarter's story obvious.",
    ),
    (
        "📊",
        "Analytics & Reporting",
        "Weekly dashboards that tie reach and engagement back to the numbers you actually care about.",
    ),
    (
        "🤝",
        "Community Engagement",
        "Replies, moderation and outreach so your accounts feel alive around the clock.",
    ),
];

const PORTFOLIO: [(&str, &str, &str); 6] = [
    ("work-verve", "Verve Sneakers", "Launch campaign"),
    ("work-halo", "Halo Coffee", "Rebrand & content"),
    ("work-atlas", "Atlas Travel", "Creator series"),
    ("work-mint", "Mint Banking", "Community build"),
    ("work-forma", "Forma Fitness", "Paid social"),
    ("work-loop", "Loop Records", "Release rollout"),
];

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "Studioz took our launch from a quiet post to a week-long conversation. The numbers spoke for themselves.",
        "John Doe",
        "CEO, TechCorp",
    ),
    (
        "They understand the platforms better than anyone we've worked with, and the reporting is genuinely useful.",
        "Jane Smith",
        "Marketing Director, FashionBrand",
    ),
    (
        "Briefs are clear, feedback is fast, and the content always lands. My favorite agency to collaborate with.",
        "Alex Johnson",
        "Influencer",
    ),
];

const PLANS: [(&str, &str, &str, &str, bool); 3] = [
    (
        "plan-starter",
        "Starter",
        "$490/mo",
        "2 channels · 12 posts a month · monthly report",
        false,
    ),
    (
        "plan-studio",
        "Studio",
        "$1,490/mo",
        "4 channels · daily posting · community care · weekly report",
        true,
    ),
    (
        "plan-agency",
        "Agency",
        "$3,900/mo",
        "Everything in Studio · creator campaigns · dedicated strategist",
        false,
    ),
];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let viewport = use_state_eq(Viewport::default);
    let active = use_state_eq(|| None::<AttrValue>);
    let cards = use_state_eq(CardInteraction::new);
    let menu_open = use_state_eq(|| false);

    let vp_cell = use_mut_ref(Viewport::default);
    let registry = use_mut_ref(SectionRegistry::new);
    let tracker = use_mut_ref(ActiveSectionTracker::new);

    let home_ref = use_node_ref();
    let about_ref = use_node_ref();
    let services_ref = use_node_ref();
    let portfolio_ref = use_node_ref();
    let testimonials_ref = use_node_ref();
    let pricing_ref = use_node_ref();
    let contact_ref = use_node_ref();

    let section_refs: Vec<(&'static str, NodeRef)> = vec![
        ("home", home_ref.clone()),
        ("about", about_ref.clone()),
        ("services", services_ref.clone()),
        ("portfolio", portfolio_ref.clone()),
        ("testimonials", testimonials_ref.clone()),
        ("pricing", pricing_ref.clone()),
        ("contact", contact_ref.clone()),
    ];

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    {
        let scroll_viewport = viewport.clone();
        let pointer_viewport = viewport.clone();
        let scroll_vp = vp_cell.clone();
        let pointer_vp = vp_cell.clone();
        let active = active.clone();
        let scroll_registry = registry.clone();
        let cleanup_registry = registry.clone();
        let tracker = tracker.clone();
        let measured_refs = section_refs.clone();
        let cleanup_refs = section_refs.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let scroll_window = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = scroll_window.scroll_y().unwrap_or(0.0);
                    {
                        let mut vp = scroll_vp.borrow_mut();
                        vp.on_scroll(offset);
                        scroll_viewport.set(*vp);
                    }

                    // Offsets are re-read from the live layout on every pass;
                    // content above a section can change height on reflow.
                    let mut reg = scroll_registry.borrow_mut();
                    for (id, node) in &measured_refs {
                        if let Some(el) = node.cast::<HtmlElement>() {
                            reg.register(id, el.offset_top() as f64, el.offset_height() as f64);
                        }
                    }
                    let current = tracker
                        .borrow_mut()
                        .on_scroll(&reg, offset)
                        .map(|id| AttrValue::from(id.to_string()));
                    active.set(current);
                }) as Box<dyn FnMut()>);

                let pointer_callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                    let mut vp = pointer_vp.borrow_mut();
                    vp.on_pointer(e.client_x() as f64, e.client_y() as f64);
                    pointer_viewport.set(*vp);
                }) as Box<dyn FnMut(_)>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                window
                    .add_event_listener_with_callback(
                        "mousemove",
                        pointer_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // Initial check so the highlight is right before any scroll
                scroll_callback
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL)
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    window
                        .remove_event_listener_with_callback(
                            "mousemove",
                            pointer_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    let mut reg = cleanup_registry.borrow_mut();
                    for (id, _) in &cleanup_refs {
                        reg.unregister(id);
                    }
                }
            },
            (),
        );
    }

    let on_select = {
        let menu_open = menu_open.clone();
        Callback::from(move |id: &'static str| {
            // Navigating always closes the mobile menu, open or not.
            menu_open.set(false);
            // Unknown ids are a quiet no-op.
            if let Some((_, node)) = section_refs.iter().find(|(sid, _)| *sid == id) {
                if let Some(el) = node.cast::<HtmlElement>() {
                    let mut options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    el.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
        })
    };

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| {
            menu_open.set(!*menu_open);
        })
    };

    let card_handlers = |id: &'static str| {
        let enter = {
            let cards = cards.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*cards).clone();
                next.hover_start(id);
                cards.set(next);
            })
        };
        let leave = {
            let cards = cards.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*cards).clone();
                next.hover_end(id);
                cards.set(next);
            })
        };
        let down = {
            let cards = cards.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*cards).clone();
                next.press_start(id);
                cards.set(next);
            })
        };
        let up = {
            let cards = cards.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*cards).clone();
                next.press_end(id);
                cards.set(next);
            })
        };
        (enter, leave, down, up)
    };

    let vp = *viewport;
    let hero_layer_style = format!(
        "transform: scale({:.4}); opacity: {:.4};",
        1.0 + vp.scroll_offset * 0.0005,
        (1.0 - vp.scroll_offset * 0.002).max(0.0)
    );
    let circle_fill = if props.theme.is_dark() {
        ("rgba(30, 58, 138, 0.10)", "rgba(30, 58, 138, 0.15)", "rgba(30, 58, 138, 0.20)")
    } else {
        ("rgba(59, 130, 246, 0.10)", "rgba(59, 130, 246, 0.15)", "rgba(59, 130, 246, 0.20)")
    };
    let year = chrono::Local::now().year();

    let go_contact = {
        let on_select = on_select.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_select.emit("contact");
        })
    };

    html! {
        <div class={classes!("landing-page", props.theme.page_class())}>
            <div class="page-overlay"></div>
            <CursorGlow x={vp.pointer_x} y={vp.pointer_y} theme={props.theme} />

            <NavBar
                active={(*active).clone()}
                theme={props.theme}
                menu_open={*menu_open}
                on_toggle_menu={on_toggle_menu}
                on_toggle_theme={props.on_toggle_theme.clone()}
                on_select={on_select.clone()}
            />

            <main>
                <section ref={home_ref.clone()} id="home" class="hero">
                    <div class="hero-backdrop" style={hero_layer_style}>
                        <svg viewBox="0 0 1920 1080" xmlns="http://www.w3.org/2000/svg">
                            <circle cx="960" cy="540" r="400" fill={circle_fill.0} />
                            <circle cx="960" cy="540" r="300" fill={circle_fill.1} />
                            <circle cx="960" cy="540" r="200" fill={circle_fill.2} />
                        </svg>
                    </div>
                    <div class="hero-content">
                        <h1>{"Welcome to Social Studioz"}</h1>
                        <p>{"Crafting Digital Experiences That Inspire"}</p>
                        <button class="hero-cta" onclick={go_contact.clone()}>{"Get Started"}</button>
                    </div>
                    <div class="scroll-hint">{"⌄"}</div>
                </section>

                <section ref={about_ref.clone()} id="about" class="about-section alt">
                    <h2>{"About Us"}</h2>
                    <p class="about-copy">
                        {"Social Studioz is a digital agency specializing in immersive social media \
                          experiences. Our team of creative minds and tech wizards brings your \
                          brand's vision to life in the digital realm."}
                    </p>
                </section>

                <section ref={services_ref.clone()} id="services" class="services-section">
                    <h2>{"Our Services"}</h2>
                    <div class="card-grid">
                        { for SERVICES.iter().copied().map(|(icon, title, blurb)| html! {
                            <div class="service-card">
                                <div class="service-icon">{icon}</div>
                                <h3>{title}</h3>
                                <p>{blurb}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section ref={portfolio_ref.clone()} id="portfolio" class="portfolio-section alt">
                    <h2>{"Our Portfolio"}</h2>
                    <div class="card-grid">
                        { for PORTFOLIO.iter().copied().map(|(id, title, tag)| {
                            let (enter, leave, down, up) = card_handlers(id);
                            let class = classes!(
                                "work-card",
                                (cards.hovered() == Some(id)).then(|| "lifted"),
                                (cards.pressed() == Some(id)).then(|| "pressed"),
                            );
                            html! {
                                <div
                                    {class}
                                    onmouseenter={enter}
                                    onmouseleave={leave}
                                    onmousedown={down}
                                    onmouseup={up}
                                >
                                    <span class="work-title">{title}</span>
                                    <span class="work-tag">{tag}</span>
                                </div>
                            }
                        }) }
                    </div>
                </section>

                <section ref={testimonials_ref.clone()} id="testimonials" class="testimonials-section">
                    <h2>{"What Our Clients Say"}</h2>
                    <div class="card-grid">
                        { for TESTIMONIALS.iter().copied().map(|(quote, name, role)| html! {
                            <div class="testimonial-card">
                                <p class="quote">{format!("\u{201c}{}\u{201d}", quote)}</p>
                                <div class="who">{name}</div>
                                <div class="role">{role}</div>
                            </div>
                        }) }
                    </div>
                </section>

                <section ref={pricing_ref.clone()} id="pricing" class="pricing-section alt">
                    <h2>{"Pricing"}</h2>
                    <div class="card-grid">
                        { for PLANS.iter().copied().map(|(id, name, price, includes, featured)| {
                            let (enter, leave, down, up) = card_handlers(id);
                            let class = classes!(
                                "plan-card",
                                featured.then(|| "featured"),
                                (cards.hovered() == Some(id)).then(|| "lifted"),
                                (cards.pressed() == Some(id)).then(|| "pressed"),
                            );
                            html! {
                                <div
                                    {class}
                                    onmouseenter={enter}
                                    onmouseleave={leave}
                                    onmousedown={down}
                                    onmouseup={up}
                                >
                                    if featured {
                                        <span class="plan-badge">{"Most popular"}</span>
                                    }
                                    <h3>{name}</h3>
                                    <div class="plan-price">{price}</div>
                                    <p class="plan-includes">{includes}</p>
                                    <button class="plan-cta" onclick={go_contact.clone()}>{"Let's Talk"}</button>
                                </div>
                            }
                        }) }
                    </div>
                </section>

                <section ref={contact_ref.clone()} id="contact" class="contact-section">
                    <h2>{"Get In Touch"}</h2>
                    <ContactForm />
                </section>
            </main>

            <footer>
                <div class="footer-row">
                    <span class="footer-logo">{"Social Studioz"}</span>
                    <div class="footer-social">
                        <a href="https://instagram.com" target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                        <a href="https://twitter.com" target="_blank" rel="noopener noreferrer">{"Twitter"}</a>
                        <a href="https://linkedin.com" target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                    </div>
                </div>
                <div class="footer-note">
                    {format!("© {} Social Studioz. All rights reserved.", year)}
                </div>
            </footer>

            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        position: relative;
                        overflow-x: hidden;
                        font-family: 'Segoe UI', system-ui, sans-serif;
                        transition: background 0.3s ease, color 0.3s ease;
                    }
                    .landing-page.theme-dark {
                        background: linear-gradient(135deg, #000 0%, #000 55%, #1e3a8a 100%);
                        color: #fff;
                    }
                    .landing-page.theme-light {
                        background: linear-gradient(135deg, #dbeafe 0%, #bfdbfe 55%, #fff 100%);
                        color: #1f2937;
                    }

                    .page-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 10;
                        pointer-events: none;
                        background: #000;
                        opacity: 0.4;
                    }
                    .theme-light .page-overlay {
                        opacity: 0.2;
                    }

                    .cursor-layer {
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                        transition: opacity 0.3s ease;
                    }
                    .cursor-shade { z-index: 20; }
                    .cursor-glow { z-index: 30; }

                    main {
                        position: relative;
                        z-index: 40;
                    }

                    section {
                        padding: 5rem 1.5rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    section h2 {
                        font-size: 2.5rem;
                        font-weight: 700;
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .theme-dark section.alt {
                        background: rgba(0, 0, 0, 0.8);
                    }
                    .theme-light section.alt {
                        background: rgba(219, 234, 254, 0.8);
                    }

                    /* Hero */
                    .hero {
                        min-height: 100vh;
                        max-width: none;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        position: relative;
                        overflow: hidden;
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }
                    .hero-backdrop svg {
                        width: 100%;
                        height: 100%;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        text-align: center;
                    }
                    .hero-content h1 {
                        font-size: 3.75rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .hero-content p {
                        font-size: 1.25rem;
                        margin-bottom: 2rem;
                    }
                    .hero-cta {
                        border: none;
                        border-radius: 8px;
                        padding: 0.9rem 2.2rem;
                        font-size: 1.1rem;
                        font-weight: 600;
                        cursor: pointer;
                        background: #3B82F6;
                        color: #fff;
                        transition: background 0.2s ease, transform 0.2s ease;
                    }
                    .hero-cta:hover {
                        background: #2563EB;
                        transform: translateY(-2px);
                    }
                    .scroll-hint {
                        position: absolute;
                        bottom: 2.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        font-size: 2.5rem;
                        animation: bob 1.5s ease-in-out infinite;
                    }
                    @keyframes bob {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, 10px); }
                    }

                    /* About */
                    .about-copy {
                        font-size: 1.1rem;
                        line-height: 1.8;
                        text-align: center;
                        max-width: 42rem;
                        margin: 0 auto;
                    }

                    /* Shared card grid */
                    .card-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    @media (max-width: 950px) {
                        .card-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 640px) {
                        .card-grid {
                            grid-template-columns: 1fr;
                        }
                        .hero-content h1 {
                            font-size: 2.4rem;
                        }
                    }

                    /* Services */
                    .service-card {
                        padding: 1.5rem;
                        border-radius: 12px;
                        backdrop-filter: blur(4px);
                        background: rgba(30, 58, 138, 0.2);
                        transition: box-shadow 0.3s ease;
                    }
                    .theme-light .service-card {
                        background: #fff;
                    }
                    .service-card:hover {
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);
                    }
                    .service-icon {
                        font-size: 2.5rem;
                        margin-bottom: 1rem;
                    }
                    .service-card h3 {
                        font-size: 1.25rem;
                        margin-bottom: 0.5rem;
                    }
                    .service-card p {
                        color: #9ca3af;
                        line-height: 1.6;
                    }
                    .theme-light .service-card p {
                        color: #4b5563;
                    }

                    /* Portfolio */
                    .work-card {
                        aspect-ratio: 16 / 9;
                        border-radius: 12px;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        cursor: pointer;
                        background: #1e3a8a;
                        color: #fff;
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .theme-light .work-card {
                        background: #bfdbfe;
                        color: #1f2937;
                    }
                    .work-card.lifted {
                        transform: translateY(-6px) scale(1.02);
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.35);
                    }
                    .work-card.pressed {
                        transform: scale(0.98);
                        box-shadow: none;
                    }
                    .work-title {
                        font-size: 1.4rem;
                        font-weight: 600;
                    }
                    .work-tag {
                        font-size: 0.9rem;
                        opacity: 0.7;
                    }

                    /* Testimonials */
                    .testimonial-card {
                        padding: 1.5rem;
                        border-radius: 12px;
                        backdrop-filter: blur(4px);
                        background: rgba(30, 58, 138, 0.2);
                    }
                    .theme-light .testimonial-card {
                        background: #fff;
                    }
                    .testimonial-card .quote {
                        color: #d1d5db;
                        line-height: 1.7;
                        margin-bottom: 1rem;
                    }
                    .theme-light .testimonial-card .quote {
                        color: #4b5563;
                    }
                    .testimonial-card .who {
                        font-weight: 600;
                    }
                    .testimonial-card .role {
                        font-size: 0.9rem;
                        color: #9ca3af;
                    }

                    /* Pricing */
                    .plan-card {
                        position: relative;
                        padding: 2rem 1.5rem;
                        border-radius: 12px;
                        text-align: center;
                        background: rgba(30, 58, 138, 0.2);
                        border: 1px solid transparent;
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .theme-light .plan-card {
                        background: #fff;
                    }
                    .plan-card.featured {
                        border-color: #3B82F6;
                    }
                    .plan-card.lifted {
                        transform: translateY(-6px);
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.35);
                    }
                    .plan-card.pressed {
                        transform: scale(0.98);
                        box-shadow: none;
                    }
                    .plan-badge {
                        position: absolute;
                        top: -0.8rem;
                        left: 50%;
                        transform: translateX(-50%);
                        background: #3B82F6;
                        color: #fff;
                        font-size: 0.8rem;
                        padding: 0.2rem 0.8rem;
                        border-radius: 999px;
                    }
                    .plan-card h3 {
                        font-size: 1.3rem;
                        margin-bottom: 0.5rem;
                    }
                    .plan-price {
                        font-size: 2rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .plan-includes {
                        color: #9ca3af;
                        line-height: 1.6;
                        margin-bottom: 1.5rem;
                    }
                    .theme-light .plan-includes {
                        color: #4b5563;
                    }
                    .plan-cta {
                        border: 1px solid #3B82F6;
                        border-radius: 8px;
                        padding: 0.6rem 1.6rem;
                        font-size: 1rem;
                        cursor: pointer;
                        background: none;
                        color: inherit;
                        transition: background 0.2s ease;
                    }
                    .plan-cta:hover {
                        background: #3B82F6;
                        color: #fff;
                    }

                    /* Footer */
                    footer {
                        position: relative;
                        z-index: 40;
                        padding: 2rem 1.5rem;
                        background: rgba(0, 0, 0, 0.8);
                    }
                    .theme-light footer {
                        background: #bfdbfe;
                    }
                    .footer-row {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }
                    .footer-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .footer-social {
                        display: flex;
                        gap: 1rem;
                    }
                    .footer-social a {
                        color: inherit;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .footer-social a:hover {
                        color: #3B82F6;
                    }
                    .footer-note {
                        margin-top: 2rem;
                        text-align: center;
                        font-size: 0.9rem;
                        color: #9ca3af;
                    }
                    .theme-light .footer-note {
                        color: #4b5563;
                    }
                "#}
            </style>
        </div>
    }
}
