// =============================================================================
// Contact Site - Navigation Bar
// =============================================================================
// In-page links plus the hamburger trigger for the mobile menu.
// Open/closed state is a marker class applied by the controller.
// =============================================================================

use leptos::prelude::*;
use crate::config::SiteConfig;

/// An in-page section reachable from the navigation bar.
#[derive(Clone, Copy, Debug)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

/// Sections linked from the navigation bar, in page order.
pub const SECTIONS: [Section; 4] = [
    Section { id: "home", label: "Home" },
    Section { id: "about", label: "About" },
    Section { id: "services", label: "Services" },
    Section { id: "contact", label: "Contact" },
];

/// Top navigation bar.
#[component]
pub fn NavBar() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let link_class = config.nav_link_class.clone();

    let links = SECTIONS
        .iter()
        .map(|section| {
            view! {
                <li class="nav-item">
                    <a href=format!("#{}", section.id) class=link_class.clone()>{section.label}</a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar">
            <div class="nav-container">
                <a href="#home" class="nav-logo">"Welcome"</a>

                <ul id=config.ids.menu.clone() class="nav-menu">
                    {links}
                </ul>

                // Hamburger (mobile only)
                <div id=config.ids.menu_trigger.clone() class="hamburger" aria-label="Toggle menu">
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </div>
        </nav>
    }
}
