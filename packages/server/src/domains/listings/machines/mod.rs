//! Listing view state machine
//!
//! Pure decision logic - NO IO. Holds the client-side table state (sort,
//! style filter, page, view mode) and deterministically derives the visible
//! page from a fixed in-memory listing array. Persistence goes through the
//! `ViewStateStore` port, namespaced per view kind so the home page and the
//! city pages keep separate preferences.

pub mod store;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::common::utils::collate;
use crate::domains::listings::models::Listing;
use store::ViewStateStore;

/// Fixed page size of the listing table.
pub const PAGE_SIZE: usize = 20;

/// Version stamp on persisted state; bump when the persisted shape changes
/// so legacy entries are rejected instead of shape-guessed.
const STATE_VERSION: u32 = 1;

// =============================================================================
// State vocabulary
// =============================================================================

/// Closed set of sortable columns. Each key maps to a typed accessor in the
/// comparator, so an invalid key cannot exist at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Name,
    City,
    Rating,
    Price,
    SingleClassPrice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Direction only reorders non-null values; null handling happens
    /// before this is applied.
    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Table,
    Cards,
}

/// Which logical view this state belongs to. Determines the persistence
/// namespace, the default sort, and which sort keys are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// Whole-directory view (home page, all cities).
    Directory,
    /// Single-city view; has no city column.
    City,
}

impl ViewKind {
    pub fn namespace(&self) -> &'static str {
        match self {
            ViewKind::Directory => "listing-view:directory",
            ViewKind::City => "listing-view:city",
        }
    }

    /// Home view ranks best-rated schools first; the city view reads as an
    /// alphabetical index.
    fn default_sort(&self) -> (SortKey, SortDirection) {
        match self {
            ViewKind::Directory => (SortKey::Rating, SortDirection::Descending),
            ViewKind::City => (SortKey::Name, SortDirection::Ascending),
        }
    }

    fn allows(&self, key: SortKey) -> bool {
        !(matches!(self, ViewKind::City) && matches!(key, SortKey::City))
    }
}

// =============================================================================
// State machine
// =============================================================================

/// The persisted subset of the state tuple. `current_page` is deliberately
/// not part of it; a fresh navigation always starts on page 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedViewState {
    version: u32,
    selected_style: Option<String>,
    sort_key: SortKey,
    sort_direction: SortDirection,
    view_mode: ViewMode,
}

#[derive(Debug, Clone)]
pub struct ViewState {
    pub kind: ViewKind,
    /// `None` is the "all styles" sentinel.
    pub selected_style: Option<String>,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    /// 1-based.
    pub current_page: usize,
    pub view_mode: ViewMode,
}

#[derive(Debug, Clone)]
pub enum ViewEvent {
    StyleSelected(Option<String>),
    SortKeyChanged(SortKey),
    SortDirectionChanged(SortDirection),
    PageChanged(usize),
    ViewModeChanged(ViewMode),
}

/// Result of one derivation run.
#[derive(Debug)]
pub struct DerivedPage<'a> {
    pub visible: Vec<&'a Listing>,
    pub total_filtered: usize,
    pub total_pages: usize,
}

impl ViewState {
    pub fn new(kind: ViewKind, narrow_viewport: bool) -> Self {
        let (sort_key, sort_direction) = kind.default_sort();
        Self {
            kind,
            selected_style: None,
            sort_key,
            sort_direction,
            current_page: 1,
            view_mode: if narrow_viewport {
                ViewMode::Cards
            } else {
                ViewMode::Table
            },
        }
    }

    /// Restore persisted state for this view. Malformed entries (parse
    /// failure, version mismatch, unknown sort key, city sort in a
    /// city-scoped view) are silently discarded in favor of defaults -
    /// never surfaced as an error.
    pub fn restore(kind: ViewKind, narrow_viewport: bool, store: &dyn ViewStateStore) -> Self {
        let state = Self::new(kind, narrow_viewport);
        let Some(raw) = store.load(kind.namespace()) else {
            return state;
        };
        let Ok(persisted) = serde_json::from_str::<PersistedViewState>(&raw) else {
            return state;
        };
        if persisted.version != STATE_VERSION || !kind.allows(persisted.sort_key) {
            return state;
        }

        Self {
            selected_style: persisted.selected_style,
            sort_key: persisted.sort_key,
            sort_direction: persisted.sort_direction,
            view_mode: persisted.view_mode,
            ..state
        }
    }

    /// Persist the state tuple into this view's namespace.
    pub fn persist(&self, store: &dyn ViewStateStore) {
        let persisted = PersistedViewState {
            version: STATE_VERSION,
            selected_style: self.selected_style.clone(),
            sort_key: self.sort_key,
            sort_direction: self.sort_direction,
            view_mode: self.view_mode,
        };
        if let Ok(raw) = serde_json::to_string(&persisted) {
            store.save(self.kind.namespace(), &raw);
        }
    }

    /// Reducer. Filter and sort changes restart pagination; the view mode
    /// is purely cosmetic and leaves the page alone.
    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::StyleSelected(style) => {
                self.selected_style = style;
                self.current_page = 1;
            }
            ViewEvent::SortKeyChanged(key) => {
                self.sort_key = key;
                self.current_page = 1;
            }
            ViewEvent::SortDirectionChanged(direction) => {
                self.sort_direction = direction;
                self.current_page = 1;
            }
            ViewEvent::PageChanged(page) => {
                self.current_page = page.max(1);
            }
            ViewEvent::ViewModeChanged(mode) => {
                self.view_mode = mode;
            }
        }
    }

    /// Derivation pipeline: filter -> sort -> paginate. Re-run whenever the
    /// state or the input array changes. Also re-validates state against
    /// the input: a selected style no longer present anywhere resets to
    /// "all", and the page is clamped to the recomputed page count.
    pub fn derive<'a>(&mut self, listings: &'a [Listing]) -> DerivedPage<'a> {
        let stale_selection = match &self.selected_style {
            Some(selected) => !listings
                .iter()
                .any(|l| l.styles.iter().any(|s| s == selected)),
            None => false,
        };
        if stale_selection {
            self.selected_style = None;
            self.current_page = 1;
        }

        let mut filtered: Vec<&Listing> = listings
            .iter()
            .filter(|l| match &self.selected_style {
                Some(style) => l.styles.iter().any(|s| s == style),
                None => true,
            })
            .collect();

        filtered.sort_by(|a, b| compare_listings(a, b, self.sort_key, self.sort_direction));

        let total_filtered = filtered.len();
        let total_pages = total_filtered.div_ceil(PAGE_SIZE).max(1);
        if self.current_page > total_pages {
            self.current_page = total_pages;
        }

        let start = (self.current_page - 1) * PAGE_SIZE;
        let visible = filtered.into_iter().skip(start).take(PAGE_SIZE).collect();

        DerivedPage {
            visible,
            total_filtered,
            total_pages,
        }
    }
}

// =============================================================================
// Comparator
// =============================================================================

fn compare_listings(a: &Listing, b: &Listing, key: SortKey, direction: SortDirection) -> Ordering {
    let ordering = match key {
        SortKey::Name => direction.apply(collate::compare(&a.school.name, &b.school.name)),
        SortKey::City => direction.apply(collate::compare(&a.school.city, &b.school.city)),
        SortKey::Rating => compare_numbers(a.school.rating, b.school.rating, direction),
        SortKey::Price => compare_numbers(a.school.price, b.school.price, direction),
        SortKey::SingleClassPrice => compare_numbers(
            a.school.single_class_price,
            b.school.single_class_price,
            direction,
        ),
    };

    // Ties fall through to the completeness score (descending), then to the
    // name under Polish collation.
    ordering
        .then_with(|| completeness(b).cmp(&completeness(a)))
        .then_with(|| collate::compare(&a.school.name, &b.school.name))
}

/// Null values sort after every non-null value, regardless of direction;
/// direction only reorders the non-null values.
fn compare_numbers(a: Option<f64>, b: Option<f64>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
        (Some(x), Some(y)) => direction.apply(x.partial_cmp(&y).unwrap_or(Ordering::Equal)),
    }
}

/// Completeness score: +4 price, +2 rating, +1 phone, +1 single-class
/// price. Rewards more fully populated listings on ties.
fn completeness(listing: &Listing) -> u32 {
    let school = &listing.school;
    let mut score = 0;
    if school.price.is_some() {
        score += 4;
    }
    if school.rating.is_some() {
        score += 2;
    }
    if school.phone.is_some() {
        score += 1;
    }
    if school.single_class_price.is_some() {
        score += 1;
    }
    score
}
