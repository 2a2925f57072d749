//! 인메모리 캐시.

pub mod history;

pub use history::HistoryCache;
