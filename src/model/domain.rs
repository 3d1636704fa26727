//! Domain state - business/data state separate from UI concerns

use super::generation::GenerationOutput;
use super::history::GenerationHistoryEntry;

/// Domain state containing all business data
#[derive(Default)]
pub struct DomainState {
    /// Patent filenames fetched from the file service
    pub patents: Vec<String>,

    /// Currently selected patent filename
    pub selected_patent: Option<String>,

    /// Free-text additional information sent with generation requests
    pub additional_info: String,

    /// Current generation output (if any)
    pub generation: Option<GenerationOutput>,

    /// Generation history entries
    pub history: Vec<GenerationHistoryEntry>,
}

impl DomainState {
    /// Create a new domain state with default values
    pub fn new() -> Self {
        Self {
            patents: Vec::new(),
            selected_patent: None,
            additional_info: String::new(),
            generation: None,
            history: Vec::new(),
        }
    }
}
