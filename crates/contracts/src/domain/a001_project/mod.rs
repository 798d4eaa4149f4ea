pub mod aggregate;
pub mod card;
pub mod catalog;
pub mod detail;
pub mod filter;

pub use aggregate::{ExtendedDetail, ProjectId, ProjectRecord, NO_LINK};
pub use card::{is_activation_key, CardInteraction, CardTarget, CardView, CardVisibility, LinkAffordance};
pub use catalog::{CatalogError, CatalogStore};
pub use detail::{DetailEvent, DetailPanel, DetailState, DetailView};
pub use filter::{filter, CategoryFilter, FilterOutcome, ALL_CATEGORIES};
