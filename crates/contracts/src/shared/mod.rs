pub mod connectivity;
pub mod error;
pub mod month_names;
pub mod number_format;
pub mod settings;
