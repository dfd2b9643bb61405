//! CLI command implementations

pub mod browse;
pub mod layout;
pub mod visit;

pub use browse::browse_command;
pub use layout::layout_command;
pub use visit::visit_command;
