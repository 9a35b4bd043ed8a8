use yew::prelude::*;

use crate::config::GALLERY_SPRING;
use crate::content::GALLERY;
use crate::hooks::{use_mouse_tilt, use_scroll_progress, MouseTilt};
use crate::scroll::{interpolate, ScrollRange};

#[function_component(Gallery)]
pub fn gallery() -> Html {
    html! {
        <section class="gallery">
            <div class="gallery-intro">
                <span class="gallery-intro__eyebrow">{"Field Notes"}</span>
                <h2>{"Three lives."}<br/><span>{"One machine."}</span></h2>
            </div>
            {
                (0..GALLERY.len()).map(|index| html! {
                    <GalleryCard key={index} {index} />
                }).collect::<Html>()
            }
            <style>
                {r#"
                .gallery {
                    position: relative;
                    background: #010102;
                    padding: 12rem 0;
                    overflow: hidden;
                }
                .gallery-intro {
                    max-width: 80rem;
                    margin: 0 auto 10rem;
                    padding: 0 2rem;
                }
                .gallery-intro__eyebrow {
                    font-family: monospace;
                    font-size: 10px;
                    color: rgba(255, 255, 255, 0.3);
                    text-transform: uppercase;
                    letter-spacing: 0.6em;
                }
                .gallery-intro h2 {
                    margin: 1.5rem 0 0;
                    font-size: clamp(3rem, 7vw, 6rem);
                    font-weight: 700;
                    color: #fff;
                    letter-spacing: -0.04em;
                    line-height: 0.9;
                }
                .gallery-intro h2 span {
                    font-style: italic;
                    font-weight: 200;
                    color: rgba(255, 255, 255, 0.2);
                }
                .gallery-card {
                    max-width: 80rem;
                    margin: 0 auto 16rem;
                    padding: 0 2rem;
                    display: flex;
                    align-items: center;
                    gap: 6rem;
                }
                .gallery-card.reverse { flex-direction: row-reverse; }
                .gallery-card__frame {
                    position: relative;
                    flex: 1.3;
                    aspect-ratio: 16 / 10;
                    border-radius: 2rem;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    background: #0a0a0c;
                    transition: border-color 0.7s;
                }
                .gallery-card.hovered .gallery-card__frame {
                    border-color: rgba(255, 255, 255, 0.15);
                }
                .gallery-card__frame img {
                    position: absolute;
                    inset: -10% 0;
                    width: 100%;
                    height: 120%;
                    object-fit: cover;
                    filter: grayscale(0.4) brightness(0.8);
                    transition: filter 1s;
                }
                .gallery-card.hovered .gallery-card__frame img {
                    filter: grayscale(0) brightness(1);
                }
                .gallery-card__copy {
                    flex: 1;
                }
                .gallery-card__subtitle {
                    display: inline-block;
                    margin-bottom: 2rem;
                    font-family: monospace;
                    font-size: 10px;
                    text-transform: uppercase;
                    letter-spacing: 0.5em;
                }
                .gallery-card__copy h3 {
                    margin: 0 0 2rem;
                    font-size: clamp(2.5rem, 5vw, 4.5rem);
                    font-weight: 700;
                    color: #fff;
                    letter-spacing: -0.04em;
                    line-height: 0.95;
                }
                .gallery-card__copy h3 span {
                    display: block;
                    font-style: italic;
                    font-weight: 200;
                    color: rgba(255, 255, 255, 0.25);
                }
                .gallery-card__copy p {
                    max-width: 28rem;
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 1.125rem;
                    font-weight: 300;
                    line-height: 1.7;
                }
                .accent-blue { color: #3b82f6; }
                .accent-purple { color: #a855f7; }
                .accent-emerald { color: #10b981; }
                @media (max-width: 1024px) {
                    .gallery-card, .gallery-card.reverse {
                        flex-direction: column;
                        gap: 3rem;
                        margin-bottom: 8rem;
                    }
                    .gallery-card__frame { width: 100%; }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryCardProps {
    pub index: usize,
}

#[function_component(GalleryCard)]
pub fn gallery_card(props: &GalleryCardProps) -> Html {
    let feature = &GALLERY[props.index];
    let node = use_node_ref();
    let progress = use_scroll_progress(node.clone(), ScrollRange::ENTER_EXIT, GALLERY_SPRING);
    let MouseTilt { tilt, on_move, on_leave } = use_mouse_tilt(7.0);
    let hovered = use_state(|| false);

    let image_y = interpolate(progress, &[0.0, 1.0], &[-60.0, 60.0]);
    let text_scale = interpolate(progress, &[0.3, 0.5], &[0.8, 1.0]);
    let opacity = interpolate(progress, &[0.2, 0.4, 0.6, 0.8], &[0.0, 1.0, 1.0, 0.0]);

    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |e: MouseEvent| {
            hovered.set(false);
            on_leave.emit(e);
        })
    };

    html! {
        <div
            ref={node}
            class={classes!(
                "gallery-card",
                (props.index % 2 == 1).then(|| "reverse"),
                (*hovered).then(|| "hovered"),
            )}
            style={format!("opacity: {:.3};", opacity)}
        >
            <div
                class="gallery-card__frame"
                style={tilt.css()}
                onmouseenter={on_enter}
                onmousemove={on_move}
                onmouseleave={on_leave}
            >
                <img
                    src={feature.image}
                    alt={feature.subtitle}
                    style={format!("transform: translateY({:.1}px);", image_y)}
                />
            </div>
            <div class="gallery-card__copy" style={format!("transform: scale({:.3});", text_scale)}>
                <span class={classes!("gallery-card__subtitle", feature.persona.class())}>
                    {feature.subtitle}
                </span>
                <h3>{feature.title}<span>{feature.title_muted}</span></h3>
                <p>{feature.description}</p>
            </div>
        </div>
    }
}
