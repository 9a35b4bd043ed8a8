use chrono::Datelike;
use yew::prelude::*;

use crate::content::FOOTER_COLUMNS;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-columns">
                {
                    FOOTER_COLUMNS.iter().map(|column| html! {
                        <div class="footer-column" key={column.title}>
                            <h4 class={classes!(column.persona.map(|p| p.class()))}>{column.title}</h4>
                            <ul>
                                {
                                    column.links.iter().map(|link| html! {
                                        <li key={*link}><a href="#">{*link}</a></li>
                                    }).collect::<Html>()
                                }
                            </ul>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <div class="footer-bottom">
                <span class="footer-mark">{"TITAN"}</span>
                <span>{format!("© {} Titan Systems. All rights reserved.", year)}</span>
                <div class="footer-legal">
                    <a href="#">{"Privacy"}</a>
                    <a href="#">{"Terms"}</a>
                    <a href="#">{"Cookies"}</a>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #000;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    padding: 8rem 2rem 3rem;
                }
                .footer-columns,
                .footer-bottom {
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .footer-columns {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 3rem;
                }
                .footer-column h4 {
                    margin: 0 0 2rem;
                    font-family: monospace;
                    font-size: 10px;
                    font-weight: 400;
                    color: rgba(255, 255, 255, 0.5);
                    text-transform: uppercase;
                    letter-spacing: 0.4em;
                }
                .footer-column h4.accent-blue { color: #3b82f6; }
                .footer-column h4.accent-purple { color: #a855f7; }
                .footer-column h4.accent-emerald { color: #10b981; }
                .footer-column ul {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .footer-column li { margin-bottom: 1rem; }
                .footer-column a,
                .footer-legal a {
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 0.875rem;
                    text-decoration: none;
                    transition: color 0.3s;
                }
                .footer-column a:hover,
                .footer-legal a:hover { color: #fff; }
                .footer-bottom {
                    margin-top: 6rem;
                    padding-top: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    color: rgba(255, 255, 255, 0.3);
                    font-size: 0.75rem;
                }
                .footer-mark {
                    font-weight: 900;
                    color: #fff;
                    letter-spacing: 0.4em;
                }
                .footer-legal {
                    display: flex;
                    gap: 2rem;
                }
                @media (max-width: 768px) {
                    .footer-columns { grid-template-columns: repeat(2, 1fr); }
                    .footer-bottom { flex-direction: column; text-align: center; }
                }
                "#}
            </style>
        </footer>
    }
}
