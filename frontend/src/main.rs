use yew::prelude::*;
use yew_hooks::use_window_scroll;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;

mod browser;
mod config;
mod content;
mod hooks;
mod scroll;
mod sections {
    pub mod display;
    pub mod features;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod performance;
    pub mod pricing;
}
mod pages {
    pub mod compare;
    pub mod home;
}

use config::NAV_SCROLL_THRESHOLD;
use content::anchor;
use pages::{compare::Compare, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/compare")]
    Compare,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Compare => {
            info!("Rendering Compare page");
            html! { <Compare /> }
        },
    }
}

const NAV_LINKS: [(&str, &str); 6] = [
    ("Overview", anchor::OVERVIEW),
    ("Gallery", anchor::GALLERY),
    ("Performance", anchor::PERFORMANCE),
    ("Display", anchor::DISPLAY),
    ("Features", anchor::FEATURES),
    ("Buy", anchor::BUY),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let hovered = use_state(|| None::<usize>);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > NAV_SCROLL_THRESHOLD;
    let comparing = use_route::<Route>() == Some(Route::Compare);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"TITAN"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class} onmouseleave={{
                    let hovered = hovered.clone();
                    Callback::from(move |_: MouseEvent| hovered.set(None))
                }}>
                    {
                        if comparing {
                            html! {}
                        } else {
                            NAV_LINKS.iter().enumerate().map(|(i, (label, target))| {
                                let on_enter = {
                                    let hovered = hovered.clone();
                                    Callback::from(move |_: MouseEvent| hovered.set(Some(i)))
                                };
                                html! {
                                    <a
                                        key={*label}
                                        href={format!("#{}", target)}
                                        class={classes!("nav-link", (*hovered == Some(i)).then(|| "hovered"))}
                                        onmouseenter={on_enter}
                                        onclick={close_menu.clone()}
                                    >
                                        {*label}
                                    </a>
                                }
                            }).collect::<Html>()
                        }
                    }
                    <div onclick={close_menu.clone()}>
                        if comparing {
                            <Link<Route> to={Route::Home} classes="nav-compare active">
                                {"Close Compare"}
                            </Link<Route>>
                        } else {
                            <Link<Route> to={Route::Compare} classes="nav-compare">
                                {"Compare"}
                            </Link<Route>>
                        }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    display: flex;
                    justify-content: center;
                    padding: 1.5rem 2rem;
                    transition: padding 0.6s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .top-nav.scrolled {
                    padding: 0.75rem 2rem;
                }
                .nav-content {
                    width: 100%;
                    max-width: 80rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0.75rem 1.5rem;
                    border-radius: 999px;
                    border: 1px solid transparent;
                    transition: all 0.6s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .top-nav.scrolled .nav-content {
                    max-width: 48rem;
                    background: rgba(10, 10, 12, 0.7);
                    border-color: rgba(255, 255, 255, 0.08);
                    backdrop-filter: blur(24px);
                }
                .nav-logo {
                    color: #fff;
                    font-weight: 900;
                    letter-spacing: 0.4em;
                    text-decoration: none;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 0.8rem;
                    text-decoration: none;
                    transition: color 0.3s;
                }
                .nav-link.hovered {
                    color: #fff;
                }
                .nav-compare {
                    padding: 0.5rem 1.25rem;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: #fff;
                    font-size: 0.8rem;
                    text-decoration: none;
                    transition: background 0.3s, color 0.3s;
                }
                .nav-compare:hover,
                .nav-compare.active {
                    background: #fff;
                    color: #000;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 20px;
                    height: 1px;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 1rem;
                        right: 1rem;
                        flex-direction: column;
                        padding: 2rem;
                        border-radius: 1.5rem;
                        background: rgba(10, 10, 12, 0.95);
                    }
                    .nav-links.mobile-menu-open { display: flex; }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    // only fails when a logger is already installed
    let _ = console_log::init_with_level(config::log_level());

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_cover_every_section_in_order() {
        let targets: Vec<_> = NAV_LINKS.iter().map(|(_, target)| *target).collect();
        assert_eq!(targets, anchor::ALL);
    }
}
