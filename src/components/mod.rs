//! Reusable UI components

mod input;
mod list;

pub use input::TextInput;
pub use list::ListCursor;
