pub mod error;
pub mod record;
pub mod violation;

pub use error::{ProviderFault, ScanError};
pub use record::{
    DocKind, Ingredient, InvoiceItem, InvoiceRecord, ItemStatus, RecipeRecord, ScanRecord,
};
pub use violation::Violation;
