//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod generate;
pub mod help_dialog;
pub mod history_dialog;
pub mod layout;
pub mod output_dialog;
pub mod patent_selector;
pub mod quit_dialog;
pub mod service_info;
pub mod setup;
pub mod splash;
pub mod upload;

pub use generate::{draw_generate_screen, GenerateComponent, GenerateRenderContext};
pub use help_dialog::HelpDialog;
pub use history_dialog::HistoryDialog;
pub use layout::{calculate_generate_layout, centered_popup};
pub use output_dialog::OutputDialog;
pub use patent_selector::PatentSelectorDialog;
pub use quit_dialog::QuitDialog;
pub use service_info::ServiceInfoDialog;
pub use setup::SetupComponent;
pub use splash::SplashComponent;
pub use upload::UploadComponent;
