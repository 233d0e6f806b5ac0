mod app;
mod countdown;
mod models;
mod notify;

use app::PomodoroApp;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("starting ducktimer");
    yew::Renderer::<PomodoroApp>::new().render();
}
