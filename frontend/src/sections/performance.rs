use log::error;
use yew::prelude::*;

use crate::config::PERFORMANCE_SPRING;
use crate::content::{self, anchor, PERFORMANCE_STATS};
use crate::hooks::{use_scroll_stages, StageView};
use crate::scroll::{interpolate, ScrollRange, StageSet};

/// "Raw Power. Refined." section. Pins a chip visual while the page scrolls
/// through the Velocity, Precision and Intelligence stages.
#[function_component(Performance)]
pub fn performance() -> Html {
    let stages = use_memo(|_| content::performance_stages().and_then(StageSet::new), ());

    {
        let stages = stages.clone();
        use_effect_with_deps(
            move |_| {
                if let Err(err) = &*stages {
                    error!("Performance stages unavailable: {}", err);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <section id={anchor::PERFORMANCE} class="performance">
            {
                match &*stages {
                    Ok(stages) => html! { <StagedShowcase stages={stages.clone()} /> },
                    Err(_) => html! { <PerformanceHeader /> },
                }
            }
            <div class="performance-stats">
                {
                    PERFORMANCE_STATS.iter().map(|card| html! {
                        <div class="stat-card" key={card.label}>
                            <span class="stat-card__label">{card.label}</span>
                            <h4>{card.value}</h4>
                            <p>{card.sub}</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .performance {
                    position: relative;
                    background: #010102;
                }
                .performance-runway {
                    position: relative;
                    height: 300vh;
                }
                .performance-pin {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .performance-glow {
                    position: absolute;
                    width: 60vw;
                    height: 60vw;
                    border-radius: 50%;
                    filter: blur(120px);
                    transition: background 1s ease;
                    pointer-events: none;
                }
                .performance-layout {
                    position: relative;
                    z-index: 1;
                    width: 100%;
                    max-width: 80rem;
                    padding: 0 2rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    align-items: center;
                    gap: 6rem;
                    box-sizing: border-box;
                }
                .performance-header {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 10rem 2rem 4rem;
                }
                .performance-header__eyebrow,
                .performance-stage__subtitle {
                    font-family: monospace;
                    font-size: 10px;
                    text-transform: uppercase;
                    letter-spacing: 0.5em;
                    color: rgba(255, 255, 255, 0.3);
                }
                .performance-header h2 {
                    margin: 1.5rem 0 0;
                    font-size: clamp(3rem, 7vw, 6rem);
                    font-weight: 700;
                    color: #fff;
                    letter-spacing: -0.04em;
                    line-height: 0.9;
                }
                .performance-header h2 span {
                    font-style: italic;
                    font-weight: 200;
                    color: rgba(255, 255, 255, 0.2);
                }
                .performance-chip {
                    position: relative;
                    aspect-ratio: 1;
                    border-radius: 2.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    background: linear-gradient(135deg, #0d0d12, #040406);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: box-shadow 1s ease;
                }
                .performance-chip__core {
                    width: 40%;
                    aspect-ratio: 1;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.12);
                    background-image:
                        linear-gradient(rgba(255, 255, 255, 0.05) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(255, 255, 255, 0.05) 1px, transparent 1px);
                    background-size: 12px 12px;
                }
                .performance-stage {
                    animation: stage-in 0.7s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .performance-stage.from-above {
                    animation-name: stage-in-reverse;
                }
                @keyframes stage-in {
                    from { opacity: 0; transform: translateY(40px); }
                    to { opacity: 1; transform: none; }
                }
                @keyframes stage-in-reverse {
                    from { opacity: 0; transform: translateY(-40px); }
                    to { opacity: 1; transform: none; }
                }
                .performance-stage__title {
                    margin: 1.5rem 0 2rem;
                    font-size: clamp(3rem, 6vw, 5.5rem);
                    font-weight: 700;
                    letter-spacing: -0.04em;
                    line-height: 0.9;
                    transition: color 0.8s ease;
                }
                .performance-stage__stat {
                    display: block;
                    margin-bottom: 1.5rem;
                    font-family: monospace;
                    font-size: 2rem;
                    color: #fff;
                }
                .performance-stage__detail {
                    max-width: 26rem;
                    color: rgba(255, 255, 255, 0.45);
                    font-size: 1.125rem;
                    font-weight: 300;
                    line-height: 1.7;
                }
                .performance-pips {
                    display: flex;
                    gap: 0.75rem;
                    margin-top: 3rem;
                }
                .performance-pip {
                    width: 2rem;
                    height: 2px;
                    background: rgba(255, 255, 255, 0.1);
                    transition: all 0.6s ease;
                }
                .performance-pip.active {
                    width: 4rem;
                }
                .performance-track {
                    position: absolute;
                    left: 0;
                    bottom: 0;
                    height: 1px;
                    background: rgba(255, 255, 255, 0.3);
                }
                .performance-stats {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 8rem 2rem 12rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .stat-card {
                    padding: 3rem;
                    border-radius: 2rem;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    background: rgba(255, 255, 255, 0.02);
                    transition: border-color 0.5s;
                }
                .stat-card:hover { border-color: rgba(255, 255, 255, 0.15); }
                .stat-card__label {
                    font-family: monospace;
                    font-size: 10px;
                    color: rgba(255, 255, 255, 0.3);
                    text-transform: uppercase;
                    letter-spacing: 0.4em;
                }
                .stat-card h4 {
                    margin: 1.5rem 0 1rem;
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: #fff;
                    letter-spacing: -0.03em;
                }
                .stat-card p {
                    margin: 0;
                    color: rgba(255, 255, 255, 0.4);
                    font-weight: 300;
                    line-height: 1.6;
                }
                @media (max-width: 1024px) {
                    .performance-layout { grid-template-columns: 1fr; gap: 3rem; }
                    .performance-chip { max-width: 20rem; margin: 0 auto; }
                    .performance-stats { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(PerformanceHeader)]
fn performance_header() -> Html {
    html! {
        <div class="performance-header">
            <span class="performance-header__eyebrow">{"Silicon"}</span>
            <h2>{"Raw Power."}<br/><span>{"Refined."}</span></h2>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StagedShowcaseProps {
    pub stages: StageSet,
}

#[function_component(StagedShowcase)]
pub fn staged_showcase(props: &StagedShowcaseProps) -> Html {
    let node = use_node_ref();
    let view = use_scroll_stages(node.clone(), ScrollRange::PINNED, props.stages.clone(), PERFORMANCE_SPRING);

    let body = match view {
        Ok(view) => stage_body(&view),
        Err(err) => {
            error!("Performance controller rejected its configuration: {}", err);
            html! {}
        }
    };

    html! {
        <>
            <PerformanceHeader />
            <div ref={node} class="performance-runway">
                <div class="performance-pin">{body}</div>
            </div>
        </>
    }
}

fn stage_body(view: &StageView) -> Html {
    let stage = view.active();
    let smoothed = view.frame.snapshot.smoothed_progress;
    let chip_y = interpolate(smoothed, &[0.0, 1.0], &[40.0, -40.0]);
    let chip_rotate = interpolate(smoothed, &[0.0, 1.0], &[-6.0, 6.0]);

    html! {
        <>
            <div
                class="performance-glow"
                style={format!(
                    "background: radial-gradient(circle, {} 0%, transparent 70%);",
                    stage.accent.css_alpha(0.18)
                )}
            ></div>
            <div class="performance-layout">
                <div
                    class="performance-chip"
                    style={format!(
                        "transform: translateY({:.1}px) rotate({:.2}deg); box-shadow: 0 0 120px {};",
                        chip_y,
                        chip_rotate,
                        stage.accent.css_alpha(0.25)
                    )}
                >
                    <div class="performance-chip__core"></div>
                </div>
                <div class={classes!("performance-stage", view.direction.class())} key={stage.id.clone()}>
                    <span class="performance-stage__subtitle">{stage.subtitle.clone()}</span>
                    <h3 class="performance-stage__title" style={format!("color: {};", stage.accent.css())}>
                        {stage.title.clone()}
                    </h3>
                    <span class="performance-stage__stat">{stage.stat.clone()}</span>
                    <p class="performance-stage__detail">{stage.detail.clone()}</p>
                    <div class="performance-pips">
                        {
                            view.frame.stages.iter().enumerate().map(|(i, pip)| {
                                let active = i == view.frame.snapshot.index;
                                let color = if active { pip.accent.css() } else { String::from("rgba(255, 255, 255, 0.1)") };
                                html! {
                                    <span
                                        key={pip.id.clone()}
                                        class={classes!("performance-pip", active.then(|| "active"))}
                                        style={format!("background: {};", color)}
                                    ></span>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
            <div
                class="performance-track"
                style={format!("width: {:.2}%; background: {};", smoothed * 100.0, stage.accent.css())}
            ></div>
        </>
    }
}
