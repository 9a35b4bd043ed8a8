use yew::prelude::*;

use crate::config::DISPLAY_SPRING;
use crate::content::anchor;
use crate::hooks::use_scroll_progress;
use crate::scroll::{interpolate, ScrollRange};

#[function_component(LuminaDisplay)]
pub fn lumina_display() -> Html {
    let node = use_node_ref();
    let progress = use_scroll_progress(node.clone(), ScrollRange::PINNED, DISPLAY_SPRING);

    let scale = interpolate(progress, &[0.0, 1.0], &[0.8, 1.0]);
    let brightness = interpolate(progress, &[0.0, 0.2, 0.5], &[0.2, 1.2, 1.0]);
    let contrast = interpolate(progress, &[0.0, 0.5], &[0.8, 1.1]);
    let grid_opacity = interpolate(progress, &[0.1, 0.4], &[0.4, 0.0]);
    let text_y = interpolate(progress, &[0.0, 1.0], &[0.0, 100.0]);
    let left_x = interpolate(progress, &[0.2, 0.5], &[-100.0, 0.0]);
    let right_x = interpolate(progress, &[0.2, 0.5], &[100.0, 0.0]);
    let card_opacity = interpolate(progress, &[0.2, 0.4], &[0.0, 1.0]);

    html! {
        <section ref={node} id={anchor::DISPLAY} class="display">
            <div class="display-pin">
                <div class="display-glow" style={format!("opacity: {:.3};", progress)}></div>

                <div class="display-heading" style={format!("transform: translateY({:.1}px);", text_y)}>
                    <span>{"Lumina Pro OLED"}</span>
                    <h2>{"Infinite"}<br/><em>{"Contrast."}</em></h2>
                </div>

                <div
                    class="display-panel"
                    style={format!(
                        "transform: scale({:.3}); filter: brightness({:.3}) contrast({:.3});",
                        scale, brightness, contrast
                    )}
                >
                    <div class="display-panel__image"></div>
                    <div class="display-panel__grid" style={format!("opacity: {:.3};", grid_opacity)}></div>
                </div>

                <div class="display-cards">
                    <div
                        class="display-card"
                        style={format!("transform: translateX({:.1}px); opacity: {:.3};", left_x, card_opacity)}
                    >
                        <span class="display-card__label">{"Peak Brightness"}</span>
                        <strong>{"1100 nits"}</strong>
                        <p>{"True HDR highlights that hold detail in direct light."}</p>
                    </div>
                    <div
                        class="display-card"
                        style={format!("transform: translateX({:.1}px); opacity: {:.3};", right_x, card_opacity)}
                    >
                        <span class="display-card__label">{"Colour Volume"}</span>
                        <strong>{"100% DCI-P3"}</strong>
                        <p>{"Factory calibrated to Delta E < 1 for grading on the go."}</p>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .display {
                    position: relative;
                    height: 250vh;
                    background: #000;
                }
                .display-pin {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .display-glow {
                    position: absolute;
                    width: 80vw;
                    height: 40vw;
                    border-radius: 50%;
                    background: radial-gradient(circle, rgba(59, 130, 246, 0.12), transparent 70%);
                    filter: blur(100px);
                    pointer-events: none;
                }
                .display-heading {
                    position: absolute;
                    top: 10vh;
                    text-align: center;
                    z-index: 2;
                }
                .display-heading span {
                    font-family: monospace;
                    font-size: 10px;
                    color: rgba(255, 255, 255, 0.4);
                    text-transform: uppercase;
                    letter-spacing: 0.6em;
                }
                .display-heading h2 {
                    margin: 1rem 0 0;
                    font-size: clamp(3rem, 7vw, 6rem);
                    font-weight: 700;
                    color: #fff;
                    letter-spacing: -0.04em;
                    line-height: 0.9;
                }
                .display-heading em {
                    font-weight: 200;
                    color: rgba(255, 255, 255, 0.25);
                }
                .display-panel {
                    position: relative;
                    width: min(70vw, 64rem);
                    aspect-ratio: 16 / 10;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    box-shadow: 0 40px 120px rgba(0, 0, 0, 0.8);
                }
                .display-panel__image {
                    position: absolute;
                    inset: 0;
                    background: url("/gallery/img4.jpg") center / cover no-repeat, #050507;
                }
                .display-panel__grid {
                    position: absolute;
                    inset: 0;
                    background-image:
                        linear-gradient(rgba(255, 255, 255, 0.2) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(255, 255, 255, 0.2) 1px, transparent 1px);
                    background-size: 3px 3px;
                    mix-blend-mode: overlay;
                }
                .display-cards {
                    position: absolute;
                    bottom: 8vh;
                    width: 100%;
                    max-width: 80rem;
                    padding: 0 2rem;
                    display: flex;
                    justify-content: space-between;
                    box-sizing: border-box;
                }
                .display-card {
                    max-width: 18rem;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(24px);
                }
                .display-card__label {
                    font-family: monospace;
                    font-size: 9px;
                    color: rgba(255, 255, 255, 0.35);
                    text-transform: uppercase;
                    letter-spacing: 0.4em;
                }
                .display-card strong {
                    display: block;
                    margin: 1rem 0 0.5rem;
                    font-size: 2rem;
                    color: #fff;
                }
                .display-card p {
                    margin: 0;
                    color: rgba(255, 255, 255, 0.45);
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                @media (max-width: 1024px) {
                    .display-panel { width: 90vw; }
                    .display-cards { display: none; }
                }
                "#}
            </style>
        </section>
    }
}
