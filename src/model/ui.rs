//! UI state - presentation state separate from domain data

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Setup,
    Running,
}

/// Page shown while the app is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Generation page: feature list, patent selection, output
    #[default]
    Generate,
    /// Upload page: patent submission form
    Upload,
}

impl Page {
    pub fn name(&self) -> &str {
        match self {
            Page::Generate => "Generate",
            Page::Upload => "Upload",
        }
    }
}
