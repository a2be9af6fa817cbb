use std::rc::Rc;

use folio_core::{HeaderState, NavSection, PROFILE};
use gloo::events::{EventListener, EventListenerOptions};
use yew::prelude::*;

use crate::app_config;
use crate::app_router;
use crate::sections::{ContactSection, EducationSection, HeroSection, ProjectsSection, SkillsSection};

#[derive(Clone, Copy, PartialEq)]
struct HeaderModel(HeaderState);

enum HeaderAction {
    Scroll(f64),
    ToggleMenu,
    Navigate(NavSection),
}

impl Reducible for HeaderModel {
    type Action = HeaderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0;
        match action {
            HeaderAction::Scroll(offset) => {
                if !next.on_scroll(offset) {
                    return self;
                }
            }
            HeaderAction::ToggleMenu => {
                next.toggle_menu();
            }
            HeaderAction::Navigate(section) => {
                next.navigate(section);
            }
        }
        Rc::new(Self(next))
    }
}

fn nav_links(header: &UseReducerHandle<HeaderModel>, link_class: &'static str) -> Html {
    NavSection::ALL
        .into_iter()
        .map(|section| {
            let header = header.clone();
            let onclick = Callback::from(move |event: MouseEvent| {
                event.prevent_default();
                header.dispatch(HeaderAction::Navigate(section));
                app_router::scroll_to_section(section);
            });
            html! {
                <a key={section.anchor()} href={section.href()} class={link_class} {onclick}>
                    { section.label() }
                </a>
            }
        })
        .collect()
}

#[function_component(SiteHeader)]
fn site_header() -> Html {
    let header = use_reducer(|| HeaderModel(HeaderState::new(app_config::site_config().header_scroll_offset)));
    {
        let header = header.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                let target = window.clone();
                let initial = window.scroll_y().unwrap_or(0.0);
                header.dispatch(HeaderAction::Scroll(initial));
                EventListener::new_with_options(
                    &target,
                    "scroll",
                    EventListenerOptions { passive: true, ..Default::default() },
                    move |_| {
                        let offset = window.scroll_y().unwrap_or(0.0);
                        header.dispatch(HeaderAction::Scroll(offset));
                    },
                )
            });
            move || drop(listener)
        });
    }
    let toggle = {
        let header = header.clone();
        Callback::from(move |_: MouseEvent| header.dispatch(HeaderAction::ToggleMenu))
    };
    let state = header.0;
    let home = {
        let header = header.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            header.dispatch(HeaderAction::Navigate(NavSection::Home));
            app_router::scroll_to_section(NavSection::Home);
        })
    };
    html! {
        <header class={classes!("site-header", state.scrolled().then_some("scrolled"))}>
            <div class="header-bar">
                <a href={NavSection::Home.href()} class="brand text-gradient" onclick={home}>{ PROFILE.name }</a>
                <nav class="desktop-nav">
                    { nav_links(&header, "link-underline") }
                    <a href={PROFILE.resume_url} target="_blank" rel="noopener noreferrer" class="button gradient">
                        {"Resume"}
                    </a>
                </nav>
                <button class="menu-toggle" aria-label="Toggle menu" onclick={toggle}>
                    { if state.menu_open() { "Close" } else { "Menu" } }
                </button>
            </div>
            <div class={classes!("mobile-nav", state.menu_open().then_some("open"))}>
                <nav>
                    { nav_links(&header, "mobile-link") }
                    <a href={PROFILE.resume_url} target="_blank" rel="noopener noreferrer" class="button gradient">
                        {"Resume"}
                    </a>
                </nav>
            </div>
        </header>
    }
}

#[function_component(App)]
fn app() -> Html {
    use_effect_with((), |_| {
        app_router::scroll_to_location_hash();
        || ()
    });
    html! {
        <>
            <SiteHeader />
            <main>
                <HeroSection />
                <SkillsSection />
                <EducationSection />
                <ProjectsSection />
            </main>
            <ContactSection />
        </>
    }
}

pub(crate) fn run() {
    gloo::console::log!("folio: mounting", PROFILE.name);
    yew::Renderer::<App>::new().render();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn scroll_reducer_keeps_identity_when_unchanged() {
        let model = Rc::new(HeaderModel(HeaderState::new(50.0)));
        let same = model.clone().reduce(HeaderAction::Scroll(10.0));
        assert!(Rc::ptr_eq(&model, &same));
        let scrolled = same.reduce(HeaderAction::Scroll(80.0));
        assert!(scrolled.0.scrolled());
    }

    #[wasm_bindgen_test]
    fn navigate_closes_open_menu() {
        let model = Rc::new(HeaderModel(HeaderState::default()));
        let open = model.reduce(HeaderAction::ToggleMenu);
        assert!(open.0.menu_open());
        let closed = open.reduce(HeaderAction::Navigate(NavSection::Education));
        assert!(!closed.0.menu_open());
    }
}
