// Command implementations.

mod list;

pub use list::run_list;
