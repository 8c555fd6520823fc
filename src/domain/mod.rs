pub mod common;
pub mod filters;
pub mod seed;
pub mod transaction;

pub use common::{Displayable, Identifiable};
pub use filters::{DateWindow, FilterCriteria, Period};
pub use transaction::{
    parse_amount, parse_occurred_on, Transaction, TransactionKind, TransactionRecord,
};
