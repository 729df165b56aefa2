pub mod keys;
pub mod serialization;
pub mod storage;
pub mod store;
pub mod traits;

pub use serialization::*;
pub use storage::Storage;
pub use store::*;
pub use traits::*;
