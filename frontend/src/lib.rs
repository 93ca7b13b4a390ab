use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod utils;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;

use pages::schedule::SchedulePage;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("starting shiftboard frontend (wasm)");

    mount_to_body(|| {
        provide_meta_context();
        view! {
            <Router>
                <Routes>
                    <Route path="/" view=SchedulePage/>
                </Routes>
            </Router>
        }
    });
}
