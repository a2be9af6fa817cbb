use std::cell::RefCell;

use folio_core::{Registration, RevealController};
use gloo::console;
use web_sys::Element;
use yew::prelude::*;

use crate::app_config;
use crate::reveal_dom::{collect_reveal_keys, mark_revealed, DomViewportObserver, RevealVariant};

type SectionController = RevealController<String, DomViewportObserver>;

#[derive(Properties, PartialEq)]
pub(crate) struct RevealSectionProps {
    pub(crate) id: AttrValue,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) variant: RevealVariant,
    /// Bumped by the owner whenever the set of `data-reveal` children changes.
    #[prop_or_default]
    pub(crate) revision: AttrValue,
    #[prop_or_default]
    pub(crate) children: Html,
}

/// A page section whose `data-reveal` descendants fade in the first time they
/// scroll into view. One controller per mounted section.
#[function_component(RevealSection)]
pub(crate) fn reveal_section(props: &RevealSectionProps) -> Html {
    let root = use_node_ref();
    let controller = use_mut_ref(|| None::<SectionController>);
    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(controller) = controller.borrow_mut().take() {
                    controller.teardown();
                }
            }
        });
    }
    {
        let root = root.clone();
        let controller = controller.clone();
        let variant = props.variant.clone();
        let section_id = props.id.clone();
        use_effect_with(props.revision.clone(), move |_| {
            if let Some(root) = root.cast::<Element>() {
                sync_section(&root, &controller, &variant, &section_id);
            }
            || ()
        });
    }
    html! {
        <section id={props.id.clone()} class={props.class.clone()} ref={root}>
            { props.children.clone() }
        </section>
    }
}

fn sync_section(
    root: &Element,
    slot: &RefCell<Option<SectionController>>,
    variant: &RevealVariant,
    section_id: &str,
) {
    let mut slot = slot.borrow_mut();
    let controller = slot.get_or_insert_with(|| {
        let hook_root = root.clone();
        let hook_variant = variant.clone();
        RevealController::new(DomViewportObserver::new(root.clone()), move |key: &String| {
            mark_revealed(&hook_root, key, &hook_variant);
        })
    });
    let keys = collect_reveal_keys(root);
    match controller.register_or_reveal_all(keys.iter().cloned(), app_config::site_config().reveal) {
        Ok(Registration::Observing { .. }) => {}
        Ok(Registration::Degraded { revealed }) => {
            console::warn!(
                "reveal: viewport observation unavailable, showing section",
                section_id,
                revealed as u32
            );
        }
        Err(err) => {
            console::warn!("reveal: registration rejected", section_id, err.to_string());
        }
    }
    // Re-rendered nodes for handles revealed earlier start without the class.
    for key in &keys {
        if controller.is_revealed(key) {
            mark_revealed(root, key, variant);
        }
    }
}
