use yew::prelude::*;

use crate::content::{anchor, PORTS};

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id={anchor::FEATURES} class="features">
            <div class="features-header">
                <span class="features-header__eyebrow">{"Engineering"}</span>
                <h2>{"Every detail,"}<br/><span>{"considered."}</span></h2>
            </div>

            <div class="bento">
                <div class="bento-card bento-card--wide">
                    <span class="bento-card__label accent-blue">{"Thermals"}</span>
                    <h3>{"Vapor chamber cooling"}</h3>
                    <p>{"Full-length vapor chamber and tri-fan design keep sustained loads quiet and cool."}</p>
                    <div class="radar">
                        <div class="radar__ring"></div>
                        <div class="radar__ring radar__ring--inner"></div>
                        <div class="radar__sweep"></div>
                    </div>
                </div>
                <div class="bento-card bento-card--tall">
                    <span class="bento-card__label accent-purple">{"Audio"}</span>
                    <h3>{"Six-speaker array"}</h3>
                    <p>{"Dolby Atmos tuned force-cancelling woofers."}</p>
                    <div class="equalizer">
                        {
                            (0..12).map(|bar| html! {
                                <span key={bar} style={format!("animation-delay: -{:.2}s;", bar as f64 * 0.13)}></span>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
                <div class="bento-card">
                    <span class="bento-card__label accent-emerald">{"Battery"}</span>
                    <h3>{"96Wh"}</h3>
                    <p>{"All-day endurance with 100W USB-C fast charging."}</p>
                </div>
                <div class="bento-card">
                    <span class="bento-card__label accent-blue">{"Chassis"}</span>
                    <h3>{"CNC aluminium"}</h3>
                    <p>{"1.4kg unibody, milled from a single block."}</p>
                </div>
                <div class="bento-card">
                    <span class="bento-card__label accent-purple">{"Security"}</span>
                    <h3>{"IR face unlock"}</h3>
                    <p>{"Windows Hello and a physical webcam shutter."}</p>
                </div>
            </div>

            <div class="ports">
                {
                    PORTS.iter().map(|port| html! {
                        <div class="port" key={port.label}>
                            <span class="port__label">{port.label}</span>
                            <span class="port__value">{port.value}</span>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .features {
                    background: #010102;
                    padding: 12rem 2rem;
                }
                .features-header,
                .bento,
                .ports {
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .features-header { margin-bottom: 6rem; }
                .features-header__eyebrow {
                    font-family: monospace;
                    font-size: 10px;
                    color: rgba(255, 255, 255, 0.3);
                    text-transform: uppercase;
                    letter-spacing: 0.6em;
                }
                .features-header h2 {
                    margin: 1.5rem 0 0;
                    font-size: clamp(3rem, 7vw, 6rem);
                    font-weight: 700;
                    color: #fff;
                    letter-spacing: -0.04em;
                    line-height: 0.9;
                }
                .features-header h2 span {
                    font-style: italic;
                    font-weight: 200;
                    color: rgba(255, 255, 255, 0.2);
                }
                .bento {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    grid-auto-rows: minmax(16rem, auto);
                    gap: 1.5rem;
                }
                .bento-card {
                    position: relative;
                    padding: 2.5rem;
                    border-radius: 2rem;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    background: rgba(255, 255, 255, 0.02);
                    overflow: hidden;
                    transition: border-color 0.5s, transform 0.5s;
                }
                .bento-card:hover {
                    border-color: rgba(255, 255, 255, 0.15);
                    transform: translateY(-4px);
                }
                .bento-card--wide { grid-column: span 2; }
                .bento-card--tall { grid-row: span 2; }
                .bento-card__label {
                    font-family: monospace;
                    font-size: 10px;
                    text-transform: uppercase;
                    letter-spacing: 0.4em;
                }
                .bento-card h3 {
                    margin: 1.5rem 0 1rem;
                    font-size: 2rem;
                    font-weight: 700;
                    color: #fff;
                    letter-spacing: -0.03em;
                }
                .bento-card p {
                    max-width: 22rem;
                    margin: 0;
                    color: rgba(255, 255, 255, 0.4);
                    font-weight: 300;
                    line-height: 1.6;
                }
                .accent-blue { color: #3b82f6; }
                .accent-purple { color: #a855f7; }
                .accent-emerald { color: #10b981; }
                .radar {
                    position: absolute;
                    right: 2rem;
                    bottom: 2rem;
                    width: 10rem;
                    height: 10rem;
                }
                .radar__ring {
                    position: absolute;
                    inset: 0;
                    border-radius: 50%;
                    border: 1px solid rgba(59, 130, 246, 0.25);
                }
                .radar__ring--inner { inset: 25%; }
                .radar__sweep {
                    position: absolute;
                    inset: 0;
                    border-radius: 50%;
                    background: conic-gradient(rgba(59, 130, 246, 0.35), transparent 30%);
                    animation: radar-sweep 4s linear infinite;
                }
                @keyframes radar-sweep {
                    to { transform: rotate(360deg); }
                }
                .equalizer {
                    position: absolute;
                    left: 2.5rem;
                    right: 2.5rem;
                    bottom: 2.5rem;
                    height: 8rem;
                    display: flex;
                    align-items: flex-end;
                    gap: 6px;
                }
                .equalizer span {
                    flex: 1;
                    height: 20%;
                    border-radius: 2px;
                    background: linear-gradient(to top, rgba(168, 85, 247, 0.6), rgba(168, 85, 247, 0.1));
                    animation: equalizer-bar 1.4s ease-in-out infinite alternate;
                }
                @keyframes equalizer-bar {
                    from { height: 15%; }
                    to { height: 100%; }
                }
                .ports {
                    margin-top: 6rem;
                    padding-top: 3rem;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }
                .port__label {
                    display: block;
                    margin-bottom: 0.75rem;
                    font-family: monospace;
                    font-size: 9px;
                    color: rgba(255, 255, 255, 0.25);
                    text-transform: uppercase;
                    letter-spacing: 0.4em;
                }
                .port__value {
                    color: rgba(255, 255, 255, 0.75);
                    font-size: 0.875rem;
                }
                @media (max-width: 1024px) {
                    .bento { grid-template-columns: 1fr; }
                    .bento-card--wide, .bento-card--tall { grid-column: auto; grid-row: auto; }
                    .ports { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
