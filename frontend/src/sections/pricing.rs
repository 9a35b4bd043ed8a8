use yew::prelude::*;

use crate::content::{anchor, MODELS, PROMISES};

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let hovered = use_state(|| None::<usize>);

    html! {
        <section id={anchor::BUY} class="pricing">
            <div class="pricing-offer">
                <span class="pricing-offer__tag">{"Launch Offer"}</span>
                <p>{"Up to ₹12,000 instant savings with select bank cards. No-cost EMI from 6 months."}</p>
            </div>

            <div class="pricing-header">
                <h2>{"Choose your"}<br/><span>{"Titan."}</span></h2>
            </div>

            <div class="pricing-grid">
                {
                    MODELS.iter().enumerate().map(|(i, model)| {
                        let on_enter = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(Some(i)))
                        };
                        let on_leave = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(None))
                        };
                        // another card under the pointer dims this one
                        let dimmed = matches!(*hovered, Some(h) if h != i);
                        html! {
                            <div
                                key={model.name}
                                class={classes!(
                                    "model-card",
                                    model.recommended.then(|| "recommended"),
                                    dimmed.then(|| "dimmed"),
                                )}
                                onmouseenter={on_enter}
                                onmouseleave={on_leave}
                            >
                                if model.recommended {
                                    <span class="model-card__badge">{"Most Popular"}</span>
                                }
                                <span class="model-card__tagline">{model.tagline}</span>
                                <h3>{model.name}</h3>
                                <ul class="model-card__specs">
                                    {
                                        model.specs().iter().map(|spec| html! {
                                            <li key={spec.label}>
                                                <span>{spec.label}</span>
                                                <span>{spec.value}</span>
                                            </li>
                                        }).collect::<Html>()
                                    }
                                </ul>
                                <div class="model-card__price">
                                    <strong>{model.price}</strong>
                                    <s>{model.mrp}</s>
                                </div>
                                <span class="model-card__emi">{format!("or {} with no-cost EMI", model.emi)}</span>
                                <button class="model-card__buy">{"Buy Now"}</button>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>

            <div class="promises">
                {
                    PROMISES.iter().map(|promise| html! {
                        <div class="promise" key={promise.label}>
                            <strong>{promise.label}</strong>
                            <span>{promise.value}</span>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .pricing {
                    background: #010102;
                    padding: 10rem 2rem 12rem;
                }
                .pricing-offer,
                .pricing-header,
                .pricing-grid,
                .promises {
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .pricing-offer {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                    padding: 1.25rem 2rem;
                    border-radius: 999px;
                    border: 1px solid rgba(59, 130, 246, 0.2);
                    background: rgba(59, 130, 246, 0.05);
                }
                .pricing-offer__tag {
                    font-family: monospace;
                    font-size: 10px;
                    color: #3b82f6;
                    text-transform: uppercase;
                    letter-spacing: 0.4em;
                    white-space: nowrap;
                }
                .pricing-offer p {
                    margin: 0;
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.875rem;
                }
                .pricing-header { margin-top: 8rem; margin-bottom: 5rem; }
                .pricing-header h2 {
                    margin: 0;
                    font-size: clamp(3rem, 7vw, 6rem);
                    font-weight: 700;
                    color: #fff;
                    letter-spacing: -0.04em;
                    line-height: 0.9;
                }
                .pricing-header h2 span {
                    font-style: italic;
                    font-weight: 200;
                    color: rgba(255, 255, 255, 0.2);
                }
                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .model-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    padding: 3rem 2.5rem;
                    border-radius: 2rem;
                    border: 1px solid rgba(255, 255, 255, 0.06);
                    background: rgba(255, 255, 255, 0.02);
                    transition: opacity 0.5s, transform 0.5s, border-color 0.5s;
                }
                .model-card.recommended {
                    border-color: rgba(59, 130, 246, 0.4);
                    background: linear-gradient(to bottom, rgba(59, 130, 246, 0.08), rgba(255, 255, 255, 0.02));
                }
                .model-card:hover { transform: translateY(-6px); }
                .model-card.dimmed { opacity: 0.45; }
                .model-card__badge {
                    position: absolute;
                    top: -0.75rem;
                    left: 2.5rem;
                    padding: 0.25rem 1rem;
                    border-radius: 999px;
                    background: #3b82f6;
                    color: #fff;
                    font-size: 10px;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                }
                .model-card__tagline {
                    font-family: monospace;
                    font-size: 10px;
                    color: rgba(255, 255, 255, 0.35);
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                }
                .model-card h3 {
                    margin: 1rem 0 2rem;
                    font-size: 1.75rem;
                    color: #fff;
                }
                .model-card__specs {
                    list-style: none;
                    margin: 0 0 2.5rem;
                    padding: 0;
                }
                .model-card__specs li {
                    display: flex;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 0.75rem 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    font-size: 0.875rem;
                }
                .model-card__specs li span:first-child { color: rgba(255, 255, 255, 0.35); }
                .model-card__specs li span:last-child { color: rgba(255, 255, 255, 0.8); text-align: right; }
                .model-card__price {
                    display: flex;
                    align-items: baseline;
                    gap: 1rem;
                    margin-top: auto;
                }
                .model-card__price strong { font-size: 2rem; color: #fff; }
                .model-card__price s { color: rgba(255, 255, 255, 0.3); }
                .model-card__emi {
                    margin: 0.5rem 0 2rem;
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 0.75rem;
                }
                .model-card__buy {
                    padding: 1rem;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: transparent;
                    color: #fff;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: background 0.4s, color 0.4s;
                }
                .model-card__buy:hover,
                .model-card.recommended .model-card__buy {
                    background: #fff;
                    color: #000;
                }
                .promises {
                    margin-top: 6rem;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .promise strong {
                    display: block;
                    color: #fff;
                    font-size: 0.875rem;
                }
                .promise span {
                    color: rgba(255, 255, 255, 0.35);
                    font-size: 0.75rem;
                }
                @media (max-width: 1024px) {
                    .pricing-offer { flex-direction: column; border-radius: 1.5rem; text-align: center; }
                    .pricing-grid { grid-template-columns: 1fr; }
                    .promises { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
