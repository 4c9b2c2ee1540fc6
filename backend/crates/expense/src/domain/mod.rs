//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Expense, NewExpense, ExpensePatch)
//! - Domain value objects (Amount, Category, dates)
//! - Domain services (filter interpretation, category summary)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
