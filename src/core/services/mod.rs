pub mod filter_service;
pub mod summary_service;
pub mod transaction_service;

pub use filter_service::FilterService;
pub use summary_service::{
    CategoryBreakdown, CategoryShare, CategoryTotal, MonthlyTotals, SummaryReport, SummaryService,
};
pub use transaction_service::{TransactionDraft, TransactionService};
