mod atomic_file;
mod json_cache_store;
mod pattern_list_store;

pub use atomic_file::write_atomic;
pub use json_cache_store::JsonCacheStore;
pub use pattern_list_store::PatternListStore;
