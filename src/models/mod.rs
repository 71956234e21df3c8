mod amount;
mod category;
mod transaction;

pub use amount::Amount;
pub use category::Category;
pub use transaction::{Transaction, TransactionKind};
