//! Фильтрация списков витрины по рубрике и строке поиска
//! и синхронизация фильтра с адресной строкой.

pub mod filter;
pub mod query;
pub mod synchronizer;

pub use filter::{filter_items, FilterState, Searchable};
pub use query::ListingQuery;
pub use synchronizer::{ListingSynchronizer, LocationOutcome, NavigationRequest};
