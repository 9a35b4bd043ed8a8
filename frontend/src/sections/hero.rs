use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{HERO_REVEAL_DELAY_MS, HERO_SPRING};
use crate::content::{anchor, HERO_PERSONAS};
use crate::hooks::{use_mouse_tilt, use_scroll_progress, MouseTilt};
use crate::scroll::{interpolate, ScrollRange};

#[function_component(Hero)]
pub fn hero() -> Html {
    let node = use_node_ref();
    let progress = use_scroll_progress(node.clone(), ScrollRange::LEAVING, HERO_SPRING);
    let MouseTilt { tilt, on_move, on_leave } = use_mouse_tilt(5.0);
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(HERO_REVEAL_DELAY_MS, move || revealed.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    // parallax layers
    let text_y = interpolate(progress, &[0.0, 1.0], &[0.0, -250.0]);
    let sub_y = interpolate(progress, &[0.0, 1.0], &[0.0, -150.0]);
    let watermark_scale = interpolate(progress, &[0.0, 1.0], &[1.0, 1.15]);
    let opacity = interpolate(progress, &[0.0, 0.6], &[1.0, 0.0]);

    html! {
        <section
            ref={node}
            class={classes!("hero", (*revealed).then(|| "revealed"))}
            onmousemove={on_move}
            onmouseleave={on_leave}
        >
            <div class="hero-atmosphere">
                <div class="light-leak light-leak--blue"></div>
                <div class="light-leak light-leak--purple"></div>
                <div class="hud-grid"></div>
            </div>

            <div class="hero-stage" style={tilt.css()}>
                <div class="hud-badge">
                    <span class="hud-badge__live">{"System Active"}</span>
                    <span class="hud-badge__divider"></span>
                    <span class="hud-badge__id">{"Titan_P01 // 2026"}</span>
                </div>

                <div class="hero-title" style={format!("transform: translateY({:.1}px); opacity: {:.3};", text_y, opacity)}>
                    <h1>
                        {"Beyond"}<br/>
                        <span class="hero-title__fade">{"Limits."}</span>
                    </h1>
                    <span class="hero-title__vertical">{"Engineering Perfection"}</span>
                </div>

                <div class="hero-narrative" style={format!("transform: translateY({:.1}px); opacity: {:.3};", sub_y, opacity)}>
                    <p>
                        {"Forged in the intersection of "}
                        <span>{"Vanguard Gaming"}</span>{", "}
                        <span>{"Cinema Science"}</span>{", and "}
                        <span>{"Architectural Precision"}</span>{"."}
                    </p>
                    <div class="hero-actions">
                        <a href={format!("#{}", anchor::BUY)} class="hero-cta">{"Acquire Titan"}</a>
                        <a href={format!("#{}", anchor::FEATURES)} class="hero-specs">
                            <span>{"Full Specs"}</span>
                            <span class="hero-specs__line"></span>
                        </a>
                    </div>
                </div>
            </div>

            <div class="hero-personas" style={format!("opacity: {:.3};", opacity)}>
                {
                    HERO_PERSONAS.iter().map(|persona| html! {
                        <div class="hero-persona" key={persona.label}>
                            <span class="hero-persona__label">{persona.label}</span>
                            <p>{persona.value}</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>

            <div
                class="hero-watermark"
                style={format!("transform: translate(-50%, {:.1}px) scale({:.3});", text_y, watermark_scale)}
            >
                {"TITAN"}
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 125vh;
                    background: #010102;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    opacity: 0;
                    transition: opacity 1.5s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .hero.revealed {
                    opacity: 1;
                }
                .hero-atmosphere {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }
                .light-leak {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(200px);
                }
                .light-leak--blue {
                    top: -20%;
                    left: -10%;
                    width: 70vw;
                    height: 70vw;
                    background: rgba(37, 99, 235, 0.03);
                }
                .light-leak--purple {
                    bottom: -20%;
                    right: -10%;
                    width: 60vw;
                    height: 60vw;
                    background: rgba(147, 51, 234, 0.03);
                }
                .hud-grid {
                    position: absolute;
                    inset: 0;
                    opacity: 0.05;
                    background-image: radial-gradient(#ffffff10 1px, transparent 1px);
                    background-size: 40px 40px;
                }
                .hero-stage {
                    position: relative;
                    z-index: 1;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    padding: 0 1.5rem;
                }
                .hud-badge {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    padding: 0.75rem 2rem;
                    margin-bottom: 4rem;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    background: rgba(255, 255, 255, 0.02);
                    backdrop-filter: blur(64px);
                    font-family: monospace;
                    font-size: 9px;
                    text-transform: uppercase;
                    letter-spacing: 0.6em;
                }
                .hud-badge__live { color: #3b82f6; }
                .hud-badge__id { color: rgba(255, 255, 255, 0.4); }
                .hud-badge__divider {
                    width: 1px;
                    height: 1rem;
                    background: rgba(255, 255, 255, 0.1);
                }
                .hero-title {
                    position: relative;
                    margin-bottom: 6rem;
                }
                .hero-title h1 {
                    font-size: clamp(6rem, 15vw, 15rem);
                    font-weight: 700;
                    color: #fff;
                    letter-spacing: -0.05em;
                    line-height: 0.75;
                    text-transform: uppercase;
                    margin: 0;
                }
                .hero-title__fade {
                    font-style: italic;
                    font-weight: 200;
                    background: linear-gradient(to bottom, #fff, rgba(255, 255, 255, 0.1));
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .hero-title__vertical {
                    position: absolute;
                    right: -3rem;
                    top: 50%;
                    transform: translateY(-50%) rotate(90deg);
                    font-family: monospace;
                    font-size: 10px;
                    color: rgba(255, 255, 255, 0.1);
                    letter-spacing: 1em;
                    white-space: nowrap;
                }
                .hero-narrative {
                    max-width: 48rem;
                }
                .hero-narrative p {
                    color: rgba(255, 255, 255, 0.3);
                    font-size: 1.5rem;
                    font-weight: 300;
                    line-height: 1.6;
                    margin-bottom: 5rem;
                }
                .hero-narrative p span { color: rgba(255, 255, 255, 0.8); }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: center;
                    gap: 3rem;
                }
                .hero-cta {
                    padding: 1.5rem 4rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 999px;
                    color: #fff;
                    font-size: 1.125rem;
                    text-decoration: none;
                    transition: all 0.7s;
                }
                .hero-cta:hover {
                    background: #fff;
                    color: #000;
                    transform: scale(1.05);
                }
                .hero-specs {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    color: rgba(255, 255, 255, 0.4);
                    font-family: monospace;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.4em;
                    text-decoration: none;
                }
                .hero-specs:hover { color: #fff; }
                .hero-specs__line {
                    width: 3rem;
                    height: 1px;
                    background: rgba(255, 255, 255, 0.2);
                }
                .hero-personas {
                    position: absolute;
                    bottom: 5rem;
                    width: 100%;
                    padding: 3rem 5rem 0;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 6rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    box-sizing: border-box;
                }
                .hero-persona { cursor: crosshair; }
                .hero-persona__label {
                    display: block;
                    margin-bottom: 0.75rem;
                    font-family: monospace;
                    font-size: 9px;
                    color: rgba(255, 255, 255, 0.2);
                    text-transform: uppercase;
                    letter-spacing: 0.5em;
                    transition: color 0.3s;
                }
                .hero-persona:hover .hero-persona__label { color: #3b82f6; }
                .hero-persona p {
                    margin: 0;
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.75rem;
                    font-weight: 300;
                    letter-spacing: 0.1em;
                }
                .hero-watermark {
                    position: absolute;
                    bottom: -10%;
                    left: 50%;
                    font-size: 38vw;
                    font-weight: 900;
                    color: rgba(255, 255, 255, 0.01);
                    letter-spacing: -0.05em;
                    pointer-events: none;
                    user-select: none;
                }
                @media (max-width: 1024px) {
                    .hero-personas { display: none; }
                    .hero-title__vertical { display: none; }
                }
                "#}
            </style>
        </section>
    }
}
