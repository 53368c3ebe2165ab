//! Command implementations for story-cli

pub mod list;
pub mod mdx;
pub mod resolve;

pub use list::run_list;
pub use mdx::run_mdx_options;
pub use resolve::run_resolve;
