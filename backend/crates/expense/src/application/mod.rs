pub mod add_expense;
pub mod delete_expense;
pub mod list_expenses;
pub mod summarize_expenses;
pub mod update_expense;

pub use add_expense::{AddExpenseInput, AddExpenseUseCase};
pub use delete_expense::DeleteExpenseUseCase;
pub use list_expenses::ListExpensesUseCase;
pub use summarize_expenses::SummarizeExpensesUseCase;
pub use update_expense::{UpdateExpenseInput, UpdateExpenseUseCase};
