//! Domain model: hooks, the closed category set, and badge tones.

pub mod badge;
pub mod category;
pub mod hook;

pub use badge::BadgeTone;
pub use category::{Category, CategoryFilter};
pub use hook::Hook;
