pub mod import;
pub mod memory;
pub mod repository;
pub mod utils;

pub use import::load_snapshot;
pub use memory::SnapshotStore;
pub use repository::{HoldingRepository, QuoteRepository, TransactionRepository};
