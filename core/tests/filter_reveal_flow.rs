//! A gallery section: the filter decides which handles are live, the reveal
//! controller is fed the live handles after every selection.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{
    CollectionFilter, FilterKey, FilterableRecord, IntersectionEntry, RevealController,
    RevealError, RevealOptions, RevealPhase, RevealSink, Threshold, ViewportObserver,
};

#[derive(Default)]
struct Viewport {
    observed: Rc<RefCell<Vec<String>>>,
}

impl ViewportObserver<String> for Viewport {
    fn attach(&mut self, _sink: RevealSink<String>) {}

    fn is_supported(&self) -> bool {
        true
    }

    fn observe(&mut self, target: &String, _threshold: Threshold) -> Result<(), RevealError> {
        self.observed.borrow_mut().push(target.clone());
        Ok(())
    }

    fn disconnect(&mut self) {}
}

fn live_handles(filter: &CollectionFilter<&'static str>) -> Vec<String> {
    filter
        .current_view()
        .map(|record| format!("project:{}", record.payload()))
        .collect()
}

#[test]
fn filter_change_rearms_only_newly_shown_records() {
    let mut filter = CollectionFilter::new(vec![
        FilterableRecord::new(["web"], "a").unwrap(),
        FilterableRecord::new(["web", "frontend"], "b").unwrap(),
        FilterableRecord::new(["frontend"], "c").unwrap(),
    ]);
    let observed = Rc::new(RefCell::new(Vec::new()));
    let viewport = Viewport {
        observed: observed.clone(),
    };
    let fired = Rc::new(RefCell::new(Vec::new()));
    let fired_hook = fired.clone();
    let mut controller = RevealController::new(viewport, move |key: &String| {
        fired_hook.borrow_mut().push(key.clone());
    });
    let sink = controller.sink();

    filter.set_filter(FilterKey::tag("web")).unwrap();
    controller
        .register(live_handles(&filter), RevealOptions::default())
        .unwrap();
    sink.deliver([IntersectionEntry::new("project:a".to_string(), 0.5)]);
    assert_eq!(*fired.borrow(), vec!["project:a".to_string()]);

    observed.borrow_mut().clear();
    filter.set_filter(FilterKey::tag("frontend")).unwrap();
    let added = controller
        .register(live_handles(&filter), RevealOptions::default())
        .unwrap();
    assert_eq!(added, 1);
    assert_eq!(
        *observed.borrow(),
        vec!["project:b".to_string(), "project:c".to_string()]
    );

    filter.set_filter(FilterKey::All).unwrap();
    controller
        .register(live_handles(&filter), RevealOptions::default())
        .unwrap();
    assert_eq!(
        controller.phase(&"project:a".to_string()),
        Some(RevealPhase::Revealed)
    );
    assert_eq!(
        controller.phase(&"project:c".to_string()),
        Some(RevealPhase::Hidden)
    );
    assert_eq!(fired.borrow().len(), 1);
}
