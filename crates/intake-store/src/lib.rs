//! intake-store
//!
//! The repository: exclusive owner of the assessment-type and response
//! collections. Assigns identifiers, gates mutations by role, cascades
//! deletes, and writes a snapshot after every mutation.

pub mod error;
pub mod ids;
pub mod snapshot;
pub mod store;

pub use error::StoreError;
pub use snapshot::{JsonFileSnapshot, NullSnapshot, Snapshot, StoreState};
pub use store::Store;
