//! Analytics adapters: the in-memory tracking store, mock fixture
//! generation, and mock lead enrichment.

mod enrichment;
mod mock;
mod store;

pub use enrichment::MockLeadEnricher;
pub use mock::MockDataGenerator;
pub use store::TrackingStore;
