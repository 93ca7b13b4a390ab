use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

mod api;
mod components;
mod config;
mod pages;
mod state;
mod utils;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_support;

use pages::schedule::SchedulePage;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("starting shiftboard frontend");

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
