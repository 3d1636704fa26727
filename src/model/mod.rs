//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `DomainState` - Business/data state (patents, generation, history)
//! - `Feature` - The fixed set of document-generation modes
//! - `ModalStack` - Modal overlay management

pub mod domain;
pub mod feature;
pub mod generation;
pub mod history;
pub mod modal;
pub mod ui;

// Re-export commonly used types
pub use feature::Feature;
pub use generation::{GenerationOutput, GenerationStatus};
pub use history::GenerationHistoryEntry;
