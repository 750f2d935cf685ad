use leptos::prelude::*;
use termfolio::app::App;
use termfolio::{config, utils};
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    utils::logger::init();

    let profile = config::load_profile().expect("config.toml must be a valid profile");
    log::info!("starting terminal for {}", profile.name);

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, move || view! { <App profile=profile.clone() /> }).forget();
}
