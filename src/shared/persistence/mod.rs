/// Persistence boundary shared by the mall and store modules
pub mod unit_of_work;

pub use unit_of_work::{Transaction, TransactionWork, UnitOfWork};
