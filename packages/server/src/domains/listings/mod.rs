pub mod machines;
pub mod models;

// Re-export models (domain models)
pub use models::listing::{Freshness, Listing};

// Re-export the view state machine
pub use machines::store::{MemoryViewStateStore, ViewStateStore};
pub use machines::{
    DerivedPage, SortDirection, SortKey, ViewEvent, ViewKind, ViewMode, ViewState, PAGE_SIZE,
};
