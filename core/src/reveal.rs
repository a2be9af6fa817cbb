//! One-shot reveal state machine driven by viewport intersection reports.
//!
//! A [`RevealController`] owns a set of reveal targets keyed by an opaque
//! handle. The host environment (a DOM `IntersectionObserver`, a test double)
//! implements [`ViewportObserver`] and pushes intersection batches back through
//! the [`RevealSink`] it receives on attach. Each target moves
//! `Hidden -> Revealed` at most once for the lifetime of the controller.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::{Rc, Weak};

use crate::error::RevealError;

pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.1;

/// Fraction of an element's bounding box that must be on screen.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(value: f64) -> Result<Self, RevealError> {
        if value.is_nan() || !(0.0..=1.0).contains(&value) {
            return Err(RevealError::InvalidConfiguration { threshold: value });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_VISIBILITY_THRESHOLD)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub visibility_threshold: f64,
}

impl RevealOptions {
    pub fn with_threshold(visibility_threshold: f64) -> Self {
        Self {
            visibility_threshold,
        }
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealPhase {
    Hidden,
    Revealed,
}

#[derive(Clone, Debug)]
struct RevealTarget<K> {
    handle: K,
    phase: RevealPhase,
    threshold: Threshold,
}

impl<K> RevealTarget<K> {
    fn new(handle: K, threshold: Threshold) -> Self {
        Self {
            handle,
            phase: RevealPhase::Hidden,
            threshold,
        }
    }

    fn is_revealed(&self) -> bool {
        self.phase == RevealPhase::Revealed
    }

    /// Returns `true` only on the transition; `Revealed` is terminal.
    fn reveal(&mut self) -> bool {
        if self.phase == RevealPhase::Revealed {
            return false;
        }
        self.phase = RevealPhase::Revealed;
        true
    }
}

/// One intersection report for an observed handle.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry<K> {
    pub target: K,
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl<K> IntersectionEntry<K> {
    /// Report with `is_intersecting` derived from a positive ratio.
    pub fn new(target: K, ratio: f64) -> Self {
        Self {
            target,
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }
}

/// Host side of the controller: the capability that watches handles and
/// reports intersections through the attached sink.
pub trait ViewportObserver<K> {
    fn attach(&mut self, sink: RevealSink<K>);
    fn is_supported(&self) -> bool;
    /// Observing an already observed handle must be harmless.
    fn observe(&mut self, target: &K, threshold: Threshold) -> Result<(), RevealError>;
    /// Stops every subscription. No report may reach the sink afterwards.
    fn disconnect(&mut self);
}

/// Outcome of [`RevealController::register_or_reveal_all`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Registration {
    Observing { added: usize },
    Degraded { revealed: usize },
}

type RevealHook<K> = Rc<dyn Fn(&K)>;

struct RevealState<K> {
    targets: Vec<RevealTarget<K>>,
    index: HashMap<K, usize>,
    on_reveal: RevealHook<K>,
    released: bool,
}

/// Weak push handle given to the host. Outlives nothing: once the controller
/// is torn down or dropped every delivery is ignored.
pub struct RevealSink<K> {
    state: Weak<RefCell<RevealState<K>>>,
}

impl<K> Clone for RevealSink<K> {
    fn clone(&self) -> Self {
        Self {
            state: Weak::clone(&self.state),
        }
    }
}

impl<K: Clone + Eq + Hash> RevealSink<K> {
    /// Applies a batch of reports in any order. Returns how many targets were
    /// newly revealed by this batch.
    pub fn deliver<I>(&self, entries: I) -> usize
    where
        I: IntoIterator<Item = IntersectionEntry<K>>,
    {
        let Some(state) = self.state.upgrade() else {
            return 0;
        };
        let (revealed, hook) = {
            let mut state = state.borrow_mut();
            if state.released {
                return 0;
            }
            let mut revealed = Vec::new();
            for entry in entries {
                let Some(&slot) = state.index.get(&entry.target) else {
                    continue;
                };
                let target = &mut state.targets[slot];
                if !entry.is_intersecting || entry.ratio < target.threshold.value() {
                    continue;
                }
                if target.reveal() {
                    revealed.push(entry.target);
                }
            }
            (revealed, Rc::clone(&state.on_reveal))
        };
        for key in &revealed {
            hook(key);
        }
        revealed.len()
    }

    pub fn is_live(&self) -> bool {
        self.state
            .upgrade()
            .map(|state| !state.borrow().released)
            .unwrap_or(false)
    }
}

pub struct RevealController<K, O>
where
    K: Clone + Eq + Hash + 'static,
    O: ViewportObserver<K>,
{
    state: Rc<RefCell<RevealState<K>>>,
    observer: Option<O>,
}

impl<K, O> RevealController<K, O>
where
    K: Clone + Eq + Hash + 'static,
    O: ViewportObserver<K>,
{
    pub fn new<F>(mut observer: O, on_reveal: F) -> Self
    where
        F: Fn(&K) + 'static,
    {
        let state = Rc::new(RefCell::new(RevealState {
            targets: Vec::new(),
            index: HashMap::new(),
            on_reveal: Rc::new(on_reveal),
            released: false,
        }));
        observer.attach(RevealSink {
            state: Rc::downgrade(&state),
        });
        Self {
            state,
            observer: Some(observer),
        }
    }

    pub fn sink(&self) -> RevealSink<K> {
        RevealSink {
            state: Rc::downgrade(&self.state),
        }
    }

    /// Starts observing every handle not registered yet. Handles already
    /// registered and still hidden are offered to the host again; revealed
    /// ones are left alone.
    pub fn register<I>(&mut self, elements: I, options: RevealOptions) -> Result<usize, RevealError>
    where
        I: IntoIterator<Item = K>,
    {
        let threshold = Threshold::new(options.visibility_threshold)?;
        let mut pending = Vec::new();
        let mut added = 0;
        {
            let mut state = self.state.borrow_mut();
            for handle in elements {
                let existing = state.index.get(&handle).copied();
                match existing {
                    Some(slot) => {
                        let target = &state.targets[slot];
                        let threshold = target.threshold;
                        if !target.is_revealed() && !pending.iter().any(|(key, _)| key == &handle) {
                            pending.push((handle, threshold));
                        }
                    }
                    None => {
                        let slot = state.targets.len();
                        state.targets.push(RevealTarget::new(handle.clone(), threshold));
                        state.index.insert(handle.clone(), slot);
                        pending.push((handle, threshold));
                        added += 1;
                    }
                }
            }
        }
        let Some(observer) = self.observer.as_mut() else {
            return Err(RevealError::ObservationUnsupported);
        };
        if !observer.is_supported() {
            return Err(RevealError::ObservationUnsupported);
        }
        for (handle, threshold) in &pending {
            observer.observe(handle, *threshold)?;
        }
        Ok(added)
    }

    /// Reveals every hidden target at once, firing the hook for each.
    pub fn reveal_all(&mut self) -> usize {
        let (revealed, hook) = {
            let mut state = self.state.borrow_mut();
            if state.released {
                return 0;
            }
            let revealed: Vec<K> = state
                .targets
                .iter_mut()
                .filter_map(|target| target.reveal().then(|| target.handle.clone()))
                .collect();
            (revealed, Rc::clone(&state.on_reveal))
        };
        for key in &revealed {
            hook(key);
        }
        revealed.len()
    }

    /// [`Self::register`] with graceful degradation: when the host cannot
    /// observe, everything registered so far is revealed immediately.
    pub fn register_or_reveal_all<I>(
        &mut self,
        elements: I,
        options: RevealOptions,
    ) -> Result<Registration, RevealError>
    where
        I: IntoIterator<Item = K>,
    {
        match self.register(elements, options) {
            Ok(added) => Ok(Registration::Observing { added }),
            Err(RevealError::ObservationUnsupported) => Ok(Registration::Degraded {
                revealed: self.reveal_all(),
            }),
            Err(err) => Err(err),
        }
    }

    pub fn phase(&self, key: &K) -> Option<RevealPhase> {
        let state = self.state.borrow();
        state.index.get(key).map(|&slot| state.targets[slot].phase)
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.phase(key) == Some(RevealPhase::Revealed)
    }

    pub fn len(&self) -> usize {
        self.state.borrow().targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn revealed_count(&self) -> usize {
        self.state
            .borrow()
            .targets
            .iter()
            .filter(|target| target.is_revealed())
            .count()
    }

    /// Stops all observation. Equivalent to dropping the controller.
    pub fn teardown(mut self) {
        self.release();
    }

    fn release(&mut self) {
        self.state.borrow_mut().released = true;
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

impl<K, O> Drop for RevealController<K, O>
where
    K: Clone + Eq + Hash + 'static,
    O: ViewportObserver<K>,
{
    fn drop(&mut self) {
        self.release();
    }
}
