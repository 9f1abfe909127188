pub mod prelude;

pub mod account;
