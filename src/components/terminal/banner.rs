//! One-time introductory banner, hidden after the first clear.

use leptos::prelude::*;

use crate::config::{APP_VERSION, ASCII_BANNER};

stylance::import_crate_style!(css, "src/components/terminal/banner.module.css");

#[component]
pub fn Banner() -> impl IntoView {
    view! {
        <div class=css::banner data-testid="banner">
            <pre class=format!("{} glow", css::ascii)>{ASCII_BANNER}</pre>
            <p>{format!("version {APP_VERSION}")}</p>
            <p>
                "type "<span class=css::keyword>"help"</span>
                " for a list of available commands"
            </p>
            <p>"type "<span class=css::keyword>"fetch"</span>" to display summary"</p>
        </div>
    }
}
