pub use super::account::Entity as Account;
