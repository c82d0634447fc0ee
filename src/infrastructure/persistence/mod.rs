pub mod local_store;
pub mod memory;

pub use local_store::JsonPreferenceStore;
pub use memory::InMemoryPreferenceStore;
