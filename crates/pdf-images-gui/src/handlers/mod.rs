pub mod convert;
pub mod files;
