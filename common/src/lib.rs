pub mod currency;
pub mod fetch;
pub mod order;
pub mod profile;
pub mod share;
pub mod validate;
