pub mod attrs;
pub mod ordering;

pub mod assign;
pub mod clean;
pub mod create;
pub mod delete;
pub mod info;
pub mod mover;
pub mod presets;

pub use assign::*;
pub use clean::*;
pub use create::*;
pub use delete::*;
pub use info::*;
pub use mover::*;
pub use presets::*;
