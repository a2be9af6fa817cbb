pub mod catalog;
pub mod error;
pub mod filter;
pub mod nav;
pub mod reveal;

pub use catalog::{project_filter, project_records, ProjectEntry, PROFILE, PROJECTS};
pub use error::{FilterError, RevealError};
pub use filter::{CollectionFilter, FilterKey, FilterableRecord, ALL_KEY};
pub use nav::{HeaderState, NavSection};
pub use reveal::{
    IntersectionEntry, Registration, RevealController, RevealOptions, RevealPhase, RevealSink,
    Threshold, ViewportObserver,
};
