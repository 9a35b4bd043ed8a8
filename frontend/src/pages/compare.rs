use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{Persona, COMPARISON};
use crate::sections::footer::Footer;
use crate::Route;

const COLUMNS: [(&str, Persona); 3] = [
    ("The Vanguard", Persona::Vanguard),
    ("The Studio", Persona::Cinema),
    ("The Architect", Persona::Architect),
];

#[function_component(Compare)]
pub fn compare() -> Html {
    html! {
        <main class="compare">
            <div class="compare-header">
                <span class="compare-header__eyebrow">{"Comparison Matrix"}</span>
                <h1>{"Find your"}<br/><span>{"configuration."}</span></h1>
            </div>

            <div class="compare-matrix">
                <div class="compare-row compare-row--head">
                    <span></span>
                    {
                        COLUMNS.iter().map(|(name, persona)| html! {
                            <span key={*name} class={persona.class()}>{*name}</span>
                        }).collect::<Html>()
                    }
                </div>
                {
                    COMPARISON.iter().map(|row| html! {
                        <div class="compare-row" key={row.feature}>
                            <span class="compare-row__feature">{row.feature}</span>
                            <span>{row.vanguard}</span>
                            <span>{row.cinema}</span>
                            <span>{row.architect}</span>
                        </div>
                    }).collect::<Html>()
                }
            </div>

            <div class="compare-back">
                <Link<Route> to={Route::Home} classes="compare-back__link">
                    {"Back to Titan"}
                </Link<Route>>
            </div>

            <Footer />
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #010102;
                    color: #fff;
                    font-family: "Inter", -apple-system, BlinkMacSystemFont, sans-serif;
                }
                .compare {
                    min-height: 100vh;
                    padding-top: 10rem;
                }
                .compare-header,
                .compare-matrix,
                .compare-back {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 2rem;
                }
                .compare-header__eyebrow {
                    font-family: monospace;
                    font-size: 10px;
                    color: rgba(255, 255, 255, 0.3);
                    text-transform: uppercase;
                    letter-spacing: 0.6em;
                }
                .compare-header h1 {
                    margin: 1.5rem 0 6rem;
                    font-size: clamp(3rem, 7vw, 6rem);
                    font-weight: 700;
                    letter-spacing: -0.04em;
                    line-height: 0.9;
                }
                .compare-header h1 span {
                    font-style: italic;
                    font-weight: 200;
                    color: rgba(255, 255, 255, 0.2);
                }
                .compare-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr 1fr 1fr;
                    gap: 2rem;
                    padding: 2rem 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 0.95rem;
                }
                .compare-row--head {
                    font-family: monospace;
                    font-size: 10px;
                    text-transform: uppercase;
                    letter-spacing: 0.4em;
                }
                .compare-row__feature {
                    color: rgba(255, 255, 255, 0.3);
                    font-family: monospace;
                    font-size: 11px;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                }
                .accent-blue { color: #3b82f6; }
                .accent-purple { color: #a855f7; }
                .accent-emerald { color: #10b981; }
                .compare-back {
                    margin-top: 5rem;
                    margin-bottom: 8rem;
                }
                .compare-back__link {
                    color: rgba(255, 255, 255, 0.5);
                    font-family: monospace;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.4em;
                    text-decoration: none;
                }
                .compare-back__link:hover { color: #fff; }
                @media (max-width: 768px) {
                    .compare-row { grid-template-columns: 1fr; gap: 0.5rem; }
                    .compare-row--head { display: none; }
                }
                "#}
            </style>
        </main>
    }
}
