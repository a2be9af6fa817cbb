use folio_core::{IntersectionEntry, RevealError, RevealSink, Threshold, ViewportObserver};
use gloo::console;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub(crate) const REVEAL_ATTR: &str = "data-reveal";

type IntersectionCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Visual effect applied to an element once it is revealed.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RevealVariant {
    pub(crate) active_class: &'static str,
    /// `(selector, class)` pairs applied to descendants of the revealed element.
    pub(crate) descendants: &'static [(&'static str, &'static str)],
}

impl RevealVariant {
    pub(crate) const FADE: RevealVariant = RevealVariant {
        active_class: "active",
        descendants: &[],
    };

    pub(crate) const SKILL_BARS: RevealVariant = RevealVariant {
        active_class: "active",
        descendants: &[(".skill-bar-fill", "animate")],
    };
}

impl Default for RevealVariant {
    fn default() -> Self {
        Self::FADE
    }
}

pub(crate) fn observation_supported() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

pub(crate) fn find_reveal_element(root: &Element, key: &str) -> Option<Element> {
    let selector = format!("[{REVEAL_ATTR}=\"{key}\"]");
    root.query_selector(&selector).ok().flatten()
}

/// Keys of every reveal-eligible element under `root`, in document order.
pub(crate) fn collect_reveal_keys(root: &Element) -> Vec<String> {
    let Ok(nodes) = root.query_selector_all(&format!("[{REVEAL_ATTR}]")) else {
        return Vec::new();
    };
    let mut keys = Vec::with_capacity(nodes.length() as usize);
    for idx in 0..nodes.length() {
        let Some(element) = nodes.item(idx).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        if let Some(key) = element.get_attribute(REVEAL_ATTR) {
            if !key.is_empty() && !keys.contains(&key) {
                keys.push(key);
            }
        }
    }
    keys
}

pub(crate) fn mark_revealed(root: &Element, key: &str, variant: &RevealVariant) {
    let Some(element) = find_reveal_element(root, key) else {
        return;
    };
    let _ = element.class_list().add_1(variant.active_class);
    for (selector, class) in variant.descendants {
        let Ok(nodes) = element.query_selector_all(selector) else {
            continue;
        };
        for idx in 0..nodes.length() {
            if let Some(child) = nodes.item(idx).and_then(|node| node.dyn_into::<Element>().ok()) {
                let _ = child.class_list().add_1(class);
            }
        }
    }
}

/// `IntersectionObserver` host scoped to one section subtree. Handles are the
/// `data-reveal` keys of the section's elements.
pub(crate) struct DomViewportObserver {
    root: Element,
    supported: bool,
    callback: Option<IntersectionCallback>,
    observers: Vec<(Threshold, IntersectionObserver)>,
}

impl DomViewportObserver {
    pub(crate) fn new(root: Element) -> Self {
        Self {
            root,
            supported: observation_supported(),
            callback: None,
            observers: Vec::new(),
        }
    }

    fn observer_for(&mut self, threshold: Threshold) -> Result<IntersectionObserver, RevealError> {
        if let Some((_, observer)) = self.observers.iter().find(|(value, _)| *value == threshold) {
            return Ok(observer.clone());
        }
        let Some(callback) = self.callback.as_ref() else {
            return Err(RevealError::ObservationUnsupported);
        };
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold.value()));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|err| {
                console::warn!("reveal: intersection observer construction failed", err);
                RevealError::ObservationUnsupported
            })?;
        self.observers.push((threshold, observer.clone()));
        Ok(observer)
    }
}

impl ViewportObserver<String> for DomViewportObserver {
    fn attach(&mut self, sink: RevealSink<String>) {
        let callback = IntersectionCallback::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let batch: Vec<IntersectionEntry<String>> = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let key = entry.target().get_attribute(REVEAL_ATTR)?;
                    Some(IntersectionEntry {
                        target: key,
                        ratio: entry.intersection_ratio(),
                        is_intersecting: entry.is_intersecting(),
                    })
                })
                .collect();
            sink.deliver(batch);
        });
        self.callback = Some(callback);
    }

    fn is_supported(&self) -> bool {
        self.supported
    }

    fn observe(&mut self, target: &String, threshold: Threshold) -> Result<(), RevealError> {
        let Some(element) = find_reveal_element(&self.root, target) else {
            return Ok(());
        };
        let observer = self.observer_for(threshold)?;
        observer.observe(&element);
        Ok(())
    }

    fn disconnect(&mut self) {
        for (_, observer) in self.observers.drain(..) {
            observer.disconnect();
        }
        self.callback = None;
    }
}

impl Drop for DomViewportObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use folio_core::{Registration, RevealController, RevealOptions};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn section_fixture() -> Element {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document");
        let root = document.create_element("section").expect("section");
        root.set_inner_html(
            r#"<h2 class="reveal" data-reveal="title">Skills</h2>
               <div class="reveal" data-reveal="skill:0">
                 <div class="skill-bar-fill"></div>
                 <div class="skill-bar-fill"></div>
               </div>
               <p data-reveal="title">duplicate</p>
               <span class="plain"></span>"#,
        );
        root
    }

    #[wasm_bindgen_test]
    fn collects_unique_keys_in_document_order() {
        let root = section_fixture();
        assert_eq!(collect_reveal_keys(&root), vec!["title", "skill:0"]);
    }

    #[wasm_bindgen_test]
    fn skill_variant_marks_descendants() {
        let root = section_fixture();
        mark_revealed(&root, "skill:0", &RevealVariant::SKILL_BARS);
        let card = find_reveal_element(&root, "skill:0").expect("card");
        assert!(card.class_list().contains("active"));
        let bars = card.query_selector_all(".skill-bar-fill.animate").expect("bars");
        assert_eq!(bars.length(), 2);

        mark_revealed(&root, "title", &RevealVariant::FADE);
        let title = find_reveal_element(&root, "title").expect("title");
        assert!(title.class_list().contains("active"));
    }

    #[wasm_bindgen_test]
    fn controller_observes_section_keys() {
        let root = section_fixture();
        let fired = Rc::new(RefCell::new(Vec::new()));
        let fired_hook = fired.clone();
        let mut controller = RevealController::new(
            DomViewportObserver::new(root.clone()),
            move |key: &String| fired_hook.borrow_mut().push(key.clone()),
        );
        let outcome = controller
            .register_or_reveal_all(collect_reveal_keys(&root), RevealOptions::default())
            .expect("valid threshold");
        assert_eq!(outcome, Registration::Observing { added: 2 });
        assert!(fired.borrow().is_empty());
        controller.teardown();
    }
}
