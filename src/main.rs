mod app_config;
mod app_router;
mod reveal_dom;
mod reveal_section;
mod sections;
mod yew_app;

fn main() {
    yew_app::run();
}
