pub mod footer;
pub mod global_context;
pub mod navbar;

use crate::shared::effects::{CustomCursor, PageLoader};
use footer::Footer;
use leptos::prelude::*;
use navbar::Navbar;

/// Одностраничный каркас сайта.
///
/// ```text
/// +------------------------------------------+
/// |  PageLoader (поверх всего, пока грузится) |
/// +------------------------------------------+
/// |              Navbar                       |
/// +------------------------------------------+
/// |   <main>: секции страницы                 |
/// +------------------------------------------+
/// |              Footer                       |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <PageLoader />
        <CustomCursor />
        <Navbar />
        <main class="app-main">{children()}</main>
        <Footer />
    }
}
