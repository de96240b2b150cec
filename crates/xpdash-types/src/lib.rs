mod progress;
mod transaction;
mod user;

pub use progress::ProgressRecord;
pub use transaction::{Transaction, TransactionKind};
pub use user::{UserAttrs, UserProfile};
