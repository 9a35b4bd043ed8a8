use yew::prelude::*;

use crate::content::anchor;
use crate::sections::{
    display::LuminaDisplay,
    features::Features,
    footer::Footer,
    gallery::Gallery,
    hero::Hero,
    performance::Performance,
    pricing::Pricing,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home">
            <div id={anchor::OVERVIEW}>
                <Hero />
            </div>
            <div id={anchor::GALLERY}>
                <Gallery />
            </div>
            <Performance />
            <LuminaDisplay />
            <Features />
            <Pricing />
            <Footer />
            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    background: #010102;
                    color: #fff;
                    font-family: "Inter", -apple-system, BlinkMacSystemFont, sans-serif;
                    -webkit-font-smoothing: antialiased;
                }
                .home {
                    overflow-x: hidden;
                }
                "#}
            </style>
        </main>
    }
}
