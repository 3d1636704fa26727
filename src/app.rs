//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App is intentionally lean - it coordinates between components but
//! does not contain business logic itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_generate_screen, GenerateComponent, GenerateRenderContext, HelpDialog, HistoryDialog,
    OutputDialog, PatentSelectorDialog, QuitDialog, ServiceInfoDialog, SetupComponent,
    SplashComponent, UploadComponent,
};
use crate::config::Config;
use crate::model::domain::DomainState;
use crate::model::history::{GenerationHistory, GenerationHistoryEntry};
use crate::model::modal::{Modal, ModalStack};
use crate::model::ui::{AppMode, Page};
use crate::model::{GenerationOutput, GenerationStatus};
use crate::services::{save_generated_text, ApiClient, JobRunner, ProcessRequest};
use anyhow::Result;
use chrono::Local;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use std::path::PathBuf;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Next mode to transition to after splash
    pub next_mode_after_splash: AppMode,

    /// Page shown while running
    pub page: Page,

    /// Domain state (business data)
    pub domain: DomainState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Background runner for patent list requests
    pub patents_runner: JobRunner<Vec<String>>,

    /// Background runner for generation requests
    pub generate_runner: JobRunner<String>,

    /// Background runner for upload requests
    pub upload_runner: JobRunner<String>,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub generate: GenerateComponent,
    pub upload: UploadComponent,
    pub quit_dialog: QuitDialog,
    pub patent_selector: PatentSelectorDialog,
    pub output_dialog: OutputDialog,
    pub history_dialog: HistoryDialog,
    pub service_info_dialog: ServiceInfoDialog,
    pub setup: SetupComponent,
    pub help_dialog: HelpDialog,

    /// Active config
    pub config: Config,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App instance
    pub fn new() -> App {
        if let Some(config) = Config::load() {
            let mut app = Self::create_app(AppMode::Running, config);
            app.domain.history = GenerationHistory::load();
            app.refresh_patents();
            app
        } else {
            // No config exists, show splash then setup screen
            let mut app = Self::create_app(AppMode::Setup, Config::default());
            app.domain.history = GenerationHistory::load();
            app
        }
    }

    fn create_app(next_mode: AppMode, config: Config) -> App {
        App {
            mode: AppMode::Splash,
            next_mode_after_splash: next_mode,
            page: Page::Generate,
            domain: DomainState::new(),
            modals: ModalStack::new(),
            patents_runner: JobRunner::new(),
            generate_runner: JobRunner::new(),
            upload_runner: JobRunner::new(),
            should_quit: false,
            error: None,
            status_message: None,
            // Components
            splash: SplashComponent::new(),
            generate: GenerateComponent::new(),
            upload: UploadComponent::new(),
            quit_dialog: QuitDialog,
            patent_selector: PatentSelectorDialog::new(),
            output_dialog: OutputDialog::default(),
            history_dialog: HistoryDialog::default(),
            service_info_dialog: ServiceInfoDialog::new(),
            setup: SetupComponent::new(),
            help_dialog: HelpDialog::default(),
            config,
        }
    }

    /// Fetch the patent list on a background thread
    fn refresh_patents(&mut self) {
        if self.patents_runner.is_running() {
            return;
        }
        let client = ApiClient::from_config(&self.config);
        self.patents_runner
            .spawn(move || client.list_uploads().map_err(|e| e.to_string()));
    }

    /// Start a generation request for the selected patent and feature
    fn start_generation(&mut self) {
        if self.generate_runner.is_running() {
            self.status_message = Some("A generation request is already running".to_string());
            return;
        }

        let patent = match self.domain.selected_patent.clone() {
            Some(p) => p,
            None => {
                self.error = Some("Select a patent first (press 'p')".to_string());
                return;
            }
        };

        let feature = self.generate.selected_feature();
        self.error = None;
        self.status_message = None;
        self.domain.generation = Some(GenerationOutput::new(patent.clone(), feature));

        let request = ProcessRequest {
            // The backend resolves paths relative to its upload folder
            file_path: format!("uploads/{}", patent),
            document_type: feature.key().to_string(),
            embedding_model_name: self.config.embedding_model.clone(),
            persist_directory: self.config.persist_directory.clone(),
            model_name: self.config.model_name.clone(),
            additional_info: self.domain.additional_info.clone(),
        };

        let client = ApiClient::from_config(&self.config);
        self.generate_runner
            .spawn(move || client.generate(&request).map_err(|e| e.to_string()));

        self.output_dialog.scroll_offset = 0;
        self.modals.push(Modal::Output);
    }

    /// Apply a finished generation result to the tracked output
    ///
    /// On success the generated text replaces the placeholder verbatim.
    /// The request duration is captured here; measuring it when the output
    /// modal closes would count the time the modal stayed open.
    fn finish_generation(&mut self, result: Result<String, String>) {
        let elapsed = self
            .generate_runner
            .start_instant()
            .map(|i| i.elapsed().as_secs_f64());

        if let Some(ref mut output) = self.domain.generation {
            if output.status == GenerationStatus::Running {
                output.duration_secs = elapsed;
                match result {
                    Ok(text) => {
                        output.status = GenerationStatus::Success;
                        output.text = text;
                    }
                    Err(e) => {
                        output.status = GenerationStatus::Failed;
                        output.text = "Failed to generate result. Please try again.".to_string();
                        self.error = Some(e);
                    }
                }
            }
        }
    }

    /// Start uploading the validated file path
    fn start_upload(&mut self, path: String) {
        if self.upload_runner.is_running() {
            return;
        }
        self.upload.uploading = true;
        self.status_message = None;

        let client = ApiClient::from_config(&self.config);
        self.upload_runner.spawn(move || {
            client
                .upload_file(PathBuf::from(path).as_path())
                .map_err(|e| e.to_string())
        });
    }

    /// Apply a finished upload result
    fn finish_upload(&mut self, result: Result<String, String>) {
        self.upload.uploading = false;
        match result {
            Ok(filename) => {
                self.upload.clear();
                self.status_message = Some(format!("Patent uploaded successfully: {}", filename));
                self.domain.selected_patent = Some(filename);
                self.page = Page::Generate;
                self.refresh_patents();
            }
            Err(e) => {
                self.upload.error = Some("Upload failed. Please try again.".to_string());
                self.error = Some(e);
            }
        }
    }

    /// Save the last generated text to the download directory
    fn download_result(&mut self) {
        let output = match &self.domain.generation {
            Some(o) if o.status == GenerationStatus::Success => o,
            _ => {
                self.error = Some("No successful generation to download".to_string());
                return;
            }
        };

        match save_generated_text(
            &self.config.download_path(),
            &output.patent,
            output.feature,
            &output.text,
        ) {
            Ok(path) => {
                self.error = None;
                self.status_message = Some(format!("Saved to {}", path.display()));
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
    }

    /// Save the finished generation to history when its output closes
    ///
    /// The runner is cleared here, which also guards against saving the
    /// same result twice.
    fn save_to_history(&mut self) {
        let start_instant = match self.generate_runner.start_instant() {
            Some(i) => i,
            None => return,
        };

        if let Some(ref output) = self.domain.generation {
            if output.status != GenerationStatus::Running {
                let entry = GenerationHistoryEntry {
                    timestamp: Local::now(),
                    patent: output.patent.clone(),
                    feature: output.feature.key().to_string(),
                    status: output.status,
                    output: output.text.clone(),
                    duration_secs: output
                        .duration_secs
                        .unwrap_or_else(|| start_instant.elapsed().as_secs_f64()),
                };

                self.domain.history.insert(0, entry);
                if self.domain.history.len() > 100 {
                    self.domain.history.truncate(100);
                }
                if let Err(e) = GenerationHistory::save(&self.domain.history) {
                    self.error = Some(e);
                }
                self.generate_runner.clear();
            }
        }
    }

    /// Poll all background runners for finished requests
    fn poll_runners(&mut self) {
        if let Some(result) = self.patents_runner.poll() {
            self.patents_runner.clear();
            match result {
                Ok(files) => {
                    self.domain.patents = files;
                    // Drop a selection that no longer exists on the server
                    if let Some(ref selected) = self.domain.selected_patent {
                        if !self.domain.patents.contains(selected) {
                            self.domain.selected_patent = None;
                        }
                    }
                    if matches!(self.modals.top(), Some(Modal::PatentSelector { .. })) {
                        self.patent_selector.set_patents(
                            &self.domain.patents,
                            self.domain.selected_patent.as_deref(),
                        );
                    }
                }
                Err(e) => {
                    self.error = Some(format!("Failed to fetch patents: {}", e));
                }
            }
        }

        if let Some(result) = self.generate_runner.poll() {
            self.finish_generation(result);
        }

        if let Some(result) = self.upload_runner.poll() {
            self.upload_runner.clear();
            self.finish_upload(result);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Setup => self.setup.handle_key_event(key),
            AppMode::Running => {
                if let Some(modal) = self.modals.top().cloned() {
                    self.handle_modal_key_event(&modal, key)
                } else {
                    match self.page {
                        Page::Generate => self.generate.handle_key_event(key),
                        Page::Upload => self.upload.handle_key_event(key),
                    }
                }
            }
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash && self.splash.is_complete() {
                    return Ok(Some(Action::SplashComplete));
                }
                self.poll_runners();
            }
            Action::SplashComplete => {
                self.mode = self.next_mode_after_splash;
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Pages
            // ─────────────────────────────────────────────────────────────────
            Action::OpenUploadPage => {
                self.page = Page::Upload;
            }
            Action::OpenGeneratePage => {
                self.page = Page::Generate;
            }

            // ─────────────────────────────────────────────────────────────────
            // Feature Navigation (delegate to GenerateComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextFeature | Action::PrevFeature | Action::FirstFeature
            | Action::LastFeature => {
                self.generate.update(action)?;
            }

            // ─────────────────────────────────────────────────────────────────
            // Scrolling
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp | Action::ScrollDown | Action::PageUp | Action::PageDown => {
                match self.modals.top() {
                    Some(Modal::History { .. }) => {
                        self.history_dialog.update(action)?;
                    }
                    Some(Modal::Output) => {
                        self.output_dialog.update(action)?;
                    }
                    _ => {
                        self.generate.update(action)?;
                    }
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenPatentSelector => {
                self.patent_selector
                    .set_patents(&self.domain.patents, self.domain.selected_patent.as_deref());
                self.modals.push(Modal::PatentSelector {
                    selected_index: self.patent_selector.selected_index,
                });
            }
            Action::OpenOutput => {
                if self.domain.generation.is_some() {
                    self.output_dialog.scroll_offset = 0;
                    self.modals.push(Modal::Output);
                } else {
                    self.error = Some("Nothing has been generated yet".to_string());
                }
            }
            Action::OpenHistory => {
                self.history_dialog.selected_index = 0;
                self.history_dialog.detail_scroll = 0;
                if matches!(self.modals.top(), Some(Modal::History { .. })) {
                    self.modals.pop();
                } else {
                    self.modals.push(Modal::History {
                        selected_index: 0,
                        detail_scroll: 0,
                    });
                }
            }
            Action::OpenServiceInfo => {
                self.service_info_dialog
                    .set_service_info(&self.config, self.domain.patents.len());
                self.modals.push(Modal::ServiceInfo);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help { scroll_offset: 0 });
            }
            Action::CloseModal => {
                if matches!(self.modals.top(), Some(Modal::Output)) {
                    self.save_to_history();
                }
                self.modals.pop();
            }
            Action::ConfirmModal => {
                if let Some(modal) = self.modals.top().cloned() {
                    match modal {
                        Modal::QuitConfirm => {
                            self.should_quit = true;
                        }
                        Modal::PatentSelector { .. } => {
                            if let Some(patent) = self.patent_selector.get_selected_patent() {
                                self.domain.selected_patent = Some(patent.to_string());
                                self.error = None;
                            }
                            self.modals.pop();
                        }
                        _ => {}
                    }
                }
            }
            Action::ModalUp => {
                if matches!(self.modals.top(), Some(Modal::History { .. })) {
                    self.history_dialog.update(Action::ModalUp)?;
                    if let Some(Modal::History { selected_index, .. }) = self.modals.top_mut() {
                        *selected_index = self.history_dialog.selected_index;
                    }
                } else if let Some(Modal::PatentSelector { selected_index }) = self.modals.top_mut()
                {
                    // The selector adjusts itself in handle_key_event
                    *selected_index = self.patent_selector.selected_index;
                }
            }
            Action::ModalDown => {
                if matches!(self.modals.top(), Some(Modal::History { .. })) {
                    // Clamp before incrementing
                    let max = self.domain.history.len().saturating_sub(1);
                    if self.history_dialog.selected_index < max {
                        self.history_dialog.update(Action::ModalDown)?;
                    }
                    if let Some(Modal::History { selected_index, .. }) = self.modals.top_mut() {
                        *selected_index = self.history_dialog.selected_index;
                    }
                } else if let Some(Modal::PatentSelector { selected_index }) = self.modals.top_mut()
                {
                    *selected_index = self.patent_selector.selected_index;
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Additional Info Editing
            // ─────────────────────────────────────────────────────────────────
            Action::EnterInfoMode | Action::ExitInfoMode => {
                self.generate.update(action)?;
            }
            Action::InfoInput(c) => {
                self.domain.additional_info.push(c);
            }
            Action::InfoBackspace => {
                self.domain.additional_info.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Service Requests
            // ─────────────────────────────────────────────────────────────────
            Action::RefreshPatents => {
                self.refresh_patents();
            }
            Action::Generate => {
                self.start_generation();
            }
            Action::DownloadResult => {
                self.download_result();
            }
            Action::SubmitUpload(path) => {
                self.start_upload(path);
            }

            // ─────────────────────────────────────────────────────────────────
            // Setup
            // ─────────────────────────────────────────────────────────────────
            Action::SetupConfirm => {
                if let Some(config) = self.setup.get_config() {
                    self.config = config.clone();
                    self.mode = AppMode::Running;
                    self.refresh_patents();
                }
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Setup => self.setup.draw(frame, area)?,
            AppMode::Running => {
                match self.page {
                    Page::Generate => {
                        let ctx = GenerateRenderContext {
                            patents: &self.domain.patents,
                            selected_patent: self.domain.selected_patent.as_deref(),
                            additional_info: &self.domain.additional_info,
                            generation: self.domain.generation.as_ref(),
                            error: self.error.as_deref(),
                            status_message: self.status_message.as_deref(),
                        };
                        draw_generate_screen(frame, area, &mut self.generate, &ctx)?;
                    }
                    Page::Upload => {
                        self.upload.draw(frame, area)?;
                    }
                }

                // Draw modal overlay if active
                if let Some(modal) = self.modals.top().cloned() {
                    self.draw_modal(frame, area, &modal)?;
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::PatentSelector { .. } => self.patent_selector.handle_key_event(key),
            Modal::Output => self.output_dialog.handle_key_event(key),
            Modal::History { .. } => self.history_dialog.handle_key_event(key),
            Modal::ServiceInfo => self.service_info_dialog.handle_key_event(key),
            Modal::Help { .. } => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::PatentSelector { .. } => self.patent_selector.draw(frame, area)?,
            Modal::Output => {
                if let Some(ref output) = self.domain.generation {
                    self.output_dialog.draw_with_output(frame, area, output)?;
                }
            }
            Modal::History { .. } => {
                self.history_dialog
                    .draw_with_history(frame, area, &self.domain.history)?;
            }
            Modal::ServiceInfo => self.service_info_dialog.draw(frame, area)?,
            Modal::Help { .. } => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Feature;

    fn running_app() -> App {
        let mut app = App::create_app(AppMode::Running, Config::default());
        app.mode = AppMode::Running;
        app
    }

    #[test]
    fn test_generate_without_patent_sets_error_and_spawns_nothing() {
        let mut app = running_app();
        app.update(Action::Generate).unwrap();

        assert!(app.error.as_deref().unwrap().contains("Select a patent"));
        assert!(!app.generate_runner.is_running());
        assert!(app.domain.generation.is_none());
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_finish_generation_replaces_placeholder_verbatim() {
        let mut app = running_app();
        app.domain.generation = Some(GenerationOutput::new(
            "foo.pdf".to_string(),
            Feature::ElevatorPitch,
        ));

        let generated = "Line one.\n\nLine two with  double spaces.".to_string();
        app.finish_generation(Ok(generated.clone()));

        let output = app.domain.generation.as_ref().unwrap();
        assert_eq!(output.status, GenerationStatus::Success);
        assert_eq!(output.text, generated);
    }

    #[test]
    fn test_finish_generation_failure_shows_generic_text_and_detail() {
        let mut app = running_app();
        app.domain.generation = Some(GenerationOutput::new(
            "foo.pdf".to_string(),
            Feature::Brochure,
        ));

        app.finish_generation(Err("process request failed with status 500".to_string()));

        let output = app.domain.generation.as_ref().unwrap();
        assert_eq!(output.status, GenerationStatus::Failed);
        assert_eq!(output.text, "Failed to generate result. Please try again.");
        assert!(app.error.as_deref().unwrap().contains("status 500"));
    }

    #[test]
    fn test_feature_navigation_through_actions() {
        let mut app = running_app();
        assert_eq!(app.generate.selected_feature(), Feature::ElevatorPitch);

        app.update(Action::NextFeature).unwrap();
        app.update(Action::NextFeature).unwrap();
        assert_eq!(app.generate.selected_feature(), Feature::SalesPitch);

        app.update(Action::LastFeature).unwrap();
        assert_eq!(app.generate.selected_feature(), Feature::MarketPlace);
    }

    #[test]
    fn test_pages_switch() {
        let mut app = running_app();
        assert_eq!(app.page, Page::Generate);
        app.update(Action::OpenUploadPage).unwrap();
        assert_eq!(app.page, Page::Upload);
        app.update(Action::OpenGeneratePage).unwrap();
        assert_eq!(app.page, Page::Generate);
    }

    #[test]
    fn test_patent_selection_confirms_into_domain() {
        let mut app = running_app();
        app.domain.patents = vec!["a.pdf".to_string(), "b.pdf".to_string()];

        app.update(Action::OpenPatentSelector).unwrap();
        assert!(matches!(
            app.modals.top(),
            Some(Modal::PatentSelector { .. })
        ));

        app.update(Action::ConfirmModal).unwrap();
        assert_eq!(app.domain.selected_patent.as_deref(), Some("a.pdf"));
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_open_output_without_generation_sets_error() {
        let mut app = running_app();
        app.update(Action::OpenOutput).unwrap();
        assert!(app.modals.is_empty());
        assert!(app.error.is_some());
    }

    #[test]
    fn test_info_input_edits_additional_info() {
        let mut app = running_app();
        app.update(Action::InfoInput('h')).unwrap();
        app.update(Action::InfoInput('i')).unwrap();
        assert_eq!(app.domain.additional_info, "hi");
        app.update(Action::InfoBackspace).unwrap();
        assert_eq!(app.domain.additional_info, "h");
    }

    #[test]
    fn test_history_duration_reflects_completion_not_modal_close() {
        use std::time::Duration;

        let mut app = running_app();
        app.domain.generation = Some(GenerationOutput::new(
            "foo.pdf".to_string(),
            Feature::ElevatorPitch,
        ));
        app.generate_runner.spawn(|| Ok("done".to_string()));

        for _ in 0..200 {
            if let Some(result) = app.generate_runner.poll() {
                app.finish_generation(result);
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        let output = app.domain.generation.as_ref().unwrap();
        assert_eq!(output.status, GenerationStatus::Success);

        // Keep the output open for a while before saving
        std::thread::sleep(Duration::from_millis(300));
        app.save_to_history();

        let entry = &app.domain.history[0];
        assert!(
            entry.duration_secs < 0.25,
            "recorded duration {}s includes time after completion",
            entry.duration_secs
        );
    }

    #[test]
    fn test_history_is_capped_at_100_newest_first() {
        let mut app = running_app();
        for i in 0..100 {
            app.domain.history.push(GenerationHistoryEntry {
                timestamp: Local::now(),
                patent: format!("old_{}.pdf", i),
                feature: Feature::ElevatorPitch.key().to_string(),
                status: GenerationStatus::Success,
                output: String::new(),
                duration_secs: 0.0,
            });
        }

        app.generate_runner.spawn(|| Ok(String::new()));
        let mut output = GenerationOutput::new("newest.pdf".to_string(), Feature::SwotAnalysis);
        output.status = GenerationStatus::Success;
        output.text = "text".to_string();
        output.duration_secs = Some(0.1);
        app.domain.generation = Some(output);

        app.save_to_history();

        assert_eq!(app.domain.history.len(), 100);
        assert_eq!(app.domain.history[0].patent, "newest.pdf");
        assert_eq!(app.domain.history[99].patent, "old_98.pdf");
    }

    #[test]
    fn test_download_without_success_sets_error() {
        let mut app = running_app();
        app.update(Action::DownloadResult).unwrap();
        assert!(app
            .error
            .as_deref()
            .unwrap()
            .contains("No successful generation"));
    }
}
