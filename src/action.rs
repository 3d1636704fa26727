//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations/updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,
    /// Transition from splash to main app
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Pages
    // ─────────────────────────────────────────────────────────────────────────
    /// Switch to the upload page
    OpenUploadPage,
    /// Switch back to the generation page
    OpenGeneratePage,

    // ─────────────────────────────────────────────────────────────────────────
    // Feature Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next feature in the sidebar
    NextFeature,
    /// Move to previous feature in the sidebar
    PrevFeature,
    /// Jump to first feature
    FirstFeature,
    /// Jump to last feature
    LastFeature,

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    /// Scroll up one line
    ScrollUp,
    /// Scroll down one line
    ScrollDown,
    /// Scroll up one page
    PageUp,
    /// Scroll down one page
    PageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open patent selection dialog
    OpenPatentSelector,
    /// Open generation output overlay
    OpenOutput,
    /// Open generation history overlay
    OpenHistory,
    /// Open configured service info overlay
    OpenServiceInfo,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Confirm the current modal action
    ConfirmModal,
    /// Navigate up in modal (e.g., previous option)
    ModalUp,
    /// Navigate down in modal (e.g., next option)
    ModalDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Additional Info Editing
    // ─────────────────────────────────────────────────────────────────────────
    /// Enter additional-info editing mode
    EnterInfoMode,
    /// Exit additional-info editing mode
    ExitInfoMode,
    /// Add character to the additional-info text
    InfoInput(char),
    /// Remove last character from the additional-info text
    InfoBackspace,

    // ─────────────────────────────────────────────────────────────────────────
    // Service Requests
    // ─────────────────────────────────────────────────────────────────────────
    /// Refresh the patent list from the file service
    RefreshPatents,
    /// Request generated text for the selected patent and feature
    Generate,
    /// Save the last generated result to the download directory
    DownloadResult,
    /// Upload the file at the given path to the file service
    SubmitUpload(String),

    // ─────────────────────────────────────────────────────────────────────────
    // Setup Wizard
    // ─────────────────────────────────────────────────────────────────────────
    /// Confirm setup configuration
    SetupConfirm,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::OpenUploadPage => write!(f, "OpenUploadPage"),
            Action::OpenGeneratePage => write!(f, "OpenGeneratePage"),
            Action::NextFeature => write!(f, "NextFeature"),
            Action::PrevFeature => write!(f, "PrevFeature"),
            Action::FirstFeature => write!(f, "FirstFeature"),
            Action::LastFeature => write!(f, "LastFeature"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenPatentSelector => write!(f, "OpenPatentSelector"),
            Action::OpenOutput => write!(f, "OpenOutput"),
            Action::OpenHistory => write!(f, "OpenHistory"),
            Action::OpenServiceInfo => write!(f, "OpenServiceInfo"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
            Action::EnterInfoMode => write!(f, "EnterInfoMode"),
            Action::ExitInfoMode => write!(f, "ExitInfoMode"),
            Action::InfoInput(c) => write!(f, "InfoInput('{}')", c),
            Action::InfoBackspace => write!(f, "InfoBackspace"),
            Action::RefreshPatents => write!(f, "RefreshPatents"),
            Action::Generate => write!(f, "Generate"),
            Action::DownloadResult => write!(f, "DownloadResult"),
            Action::SubmitUpload(path) => write!(f, "SubmitUpload({})", path),
            Action::SetupConfirm => write!(f, "SetupConfirm"),
        }
    }
}
