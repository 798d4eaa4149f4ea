use crate::layout::global_context::use_portfolio;
use crate::shared::icons::icon;
use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_portfolio();
    let (name, socials) = ctx
        .config
        .with_value(|c| (c.owner.name.clone(), c.socials.clone()));
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <div class="container footer-content">
                <p class="footer-text">{format!("© {} {}. All rights reserved.", year, name)}</p>
                <div class="footer-socials">
                    {socials
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.url
                                    class="social-link"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.label.clone()
                                    title=link.label
                                >
                                    {icon(&link.icon)}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
