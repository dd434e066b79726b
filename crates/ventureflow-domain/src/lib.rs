//! ventureflow-domain
//!
//! Pure listing models (categories, subcategories, form fields, values, packages).
//! No I/O, no CLI, no storage. Only data types, the built-in catalog and core enums.

pub mod builtin;
pub mod catalog;
pub mod field;
pub mod package;
pub mod user;
pub mod value;

pub use catalog::*;
pub use field::*;
pub use package::*;
pub use user::*;
pub use value::*;
