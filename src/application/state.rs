//! Application state management for the trade partner portal.
//!
//! This module contains the main application state: the two-step
//! application wizard, the dashboard view selection, and the
//! developer-annotation overlay.

use std::path::PathBuf;

use crate::domain::{
    validate_step, AnnotationBoard, ApplicationForm, DashboardRecord, FieldKind, FormField,
    FormStep, RoleKey, ValidationErrors, NOTE_TEMPLATES,
};

/// Top-level screen, switched from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The trade application wizard
    Application,
    /// The mock customer dashboard
    Dashboard,
}

/// Represents the current input mode of the application.
///
/// The application can be in different modes that determine how user input
/// is interpreted and what UI elements are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Navigation mode - move between fields, views and annotations
    Normal,
    /// A form field is being typed into
    FieldEdit,
    /// An annotation's content is being typed into
    AnnotationEdit,
    /// The annotation template menu is open
    TemplateMenu,
    /// The invite-a-friend email is being typed into
    InviteEdit,
    /// CSV export filename dialog is open
    ExportCsv,
    /// Help screen is displayed
    Help,
}

/// Lifecycle of the application wizard.
///
/// `Submitted` is terminal until the explicit reset action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Step1,
    Step2,
    Submitting,
    Submitted,
}

impl WizardState {
    /// The form step being edited, if any.
    pub fn step(&self) -> Option<FormStep> {
        match self {
            WizardState::Step1 => Some(FormStep::Step1),
            WizardState::Step2 => Some(FormStep::Step2),
            WizardState::Submitting | WizardState::Submitted => None,
        }
    }
}

/// Dashboard sections reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    Dashboard,
    History,
    Tracking,
    Rewards,
    Address,
    Settings,
}

impl DashboardView {
    pub fn label(&self) -> &'static str {
        match self {
            DashboardView::Dashboard => "Dashboard",
            DashboardView::History => "Order History",
            DashboardView::Tracking => "Order Tracking",
            DashboardView::Rewards => "My Rewards",
            DashboardView::Address => "Address Book",
            DashboardView::Settings => "Account Settings",
        }
    }
}

/// Which lookup tab of the order-tracking view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingMethod {
    OrderNumber,
    TrackingNumber,
}

/// State of the invite-a-friend flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InviteStatus {
    Idle,
    /// The preview modal is open awaiting confirm/cancel
    Preview,
}

/// Main application state.
///
/// # Examples
///
/// ```
/// use tradeport::application::{App, WizardState, Screen};
///
/// let app = App::default();
/// assert_eq!(app.screen, Screen::Application);
/// assert_eq!(app.wizard, WizardState::Step1);
/// ```
#[derive(Debug)]
pub struct App {
    pub screen: Screen,
    pub mode: AppMode,
    /// The application form being filled in
    pub form: ApplicationForm,
    /// Wizard lifecycle state
    pub wizard: WizardState,
    /// Messages from the last failed advance or submit attempt
    pub errors: ValidationErrors,
    /// Index into the current step's visible fields
    pub selected_field: usize,
    /// Field being edited while in `FieldEdit` mode
    pub editing_field: Option<FormField>,
    /// Shared text input buffer for edit modes
    pub input: String,
    /// Cursor position within the input buffer
    pub cursor_position: usize,
    /// Temporary status message shown in the status bar
    pub status_message: Option<String>,
    /// The annotation overlay collection
    pub board: AnnotationBoard,
    /// Whether the annotation overlay is shown and receiving input
    pub overlay_active: bool,
    pub selected_annotation: Option<u64>,
    /// Highlighted entry in the template menu
    pub template_index: usize,
    /// Role selected in the role switcher
    pub role: RoleKey,
    pub dashboard_view: DashboardView,
    pub tracking_method: TrackingMethod,
    /// Whether the quarterly-rewards rules panel is expanded
    pub show_rules: bool,
    pub invite_email: String,
    pub invite_status: InviteStatus,
    /// Input buffer for the CSV export filename dialog
    pub filename_input: String,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Directory draft files are read from and written to
    pub draft_dir: PathBuf,
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::Application,
            mode: AppMode::Normal,
            form: ApplicationForm::default(),
            wizard: WizardState::Step1,
            errors: ValidationErrors::default(),
            selected_field: 0,
            editing_field: None,
            input: String::new(),
            cursor_position: 0,
            status_message: None,
            board: AnnotationBoard::default(),
            overlay_active: false,
            selected_annotation: None,
            template_index: 0,
            role: RoleKey::Trade,
            dashboard_view: DashboardView::Dashboard,
            tracking_method: TrackingMethod::OrderNumber,
            show_rules: false,
            invite_email: String::new(),
            invite_status: InviteStatus::Idle,
            filename_input: String::new(),
            help_scroll: 0,
            draft_dir: PathBuf::from("."),
        }
    }
}

impl App {
    // --- Wizard -----------------------------------------------------------

    pub fn current_step(&self) -> Option<FormStep> {
        self.wizard.step()
    }

    /// Fields rendered for the current step. `SourceOther` appears only
    /// while the referral source is set to "other".
    pub fn visible_fields(&self) -> Vec<FormField> {
        let Some(step) = self.current_step() else {
            return Vec::new();
        };
        step.fields()
            .iter()
            .copied()
            .filter(|f| *f != FormField::SourceOther || self.form.source == "other")
            .collect()
    }

    pub fn selected_form_field(&self) -> Option<FormField> {
        self.visible_fields().get(self.selected_field).copied()
    }

    pub fn select_next_field(&mut self) {
        let count = self.visible_fields().len();
        if count > 0 && self.selected_field + 1 < count {
            self.selected_field += 1;
        }
    }

    pub fn select_prev_field(&mut self) {
        self.selected_field = self.selected_field.saturating_sub(1);
    }

    fn clamp_selected_field(&mut self) {
        let count = self.visible_fields().len();
        if count == 0 {
            self.selected_field = 0;
        } else if self.selected_field >= count {
            self.selected_field = count - 1;
        }
    }

    /// Switches to field-edit mode for the selected text field.
    ///
    /// Select and checkbox fields are changed in place and never enter edit
    /// mode.
    pub fn start_field_edit(&mut self) {
        let Some(field) = self.selected_form_field() else {
            return;
        };
        if field.kind() != FieldKind::Text {
            return;
        }
        self.mode = AppMode::FieldEdit;
        self.editing_field = Some(field);
        self.input = self.form.value(field).to_string();
        self.cursor_position = self.input.len();
    }

    /// Commits the input buffer into the edited field and leaves edit mode.
    ///
    /// Returns the typed email when the commit was a business-email blur on
    /// step 1, so the caller can look up a saved draft.
    pub fn finish_field_edit(&mut self) -> Option<String> {
        let field = self.editing_field.take()?;
        let value = std::mem::take(&mut self.input);
        self.update_field(field, value);
        self.mode = AppMode::Normal;
        self.cursor_position = 0;

        if field == FormField::BusinessEmail
            && self.wizard == WizardState::Step1
            && !self.form.business_email.is_empty()
        {
            Some(self.form.business_email.clone())
        } else {
            None
        }
    }

    /// Abandons the edit without touching the field.
    pub fn cancel_field_edit(&mut self) {
        self.mode = AppMode::Normal;
        self.editing_field = None;
        self.input.clear();
        self.cursor_position = 0;
    }

    /// Sets a field's value and clears that field's validation error, if
    /// present. Other errors are left intact.
    pub fn update_field(&mut self, field: FormField, value: String) {
        self.form.set_value(field, value);
        self.errors.clear_field(field);
        self.clamp_selected_field();
    }

    /// Flips the selected checkbox and clears its validation error.
    pub fn toggle_selected(&mut self) {
        if let Some(field) = self.selected_form_field() {
            if field.kind() == FieldKind::Checkbox {
                self.form.toggle(field);
                self.errors.clear_field(field);
            }
        }
    }

    /// Steps the selected select field through its option list. An empty
    /// value starts at the first option.
    pub fn cycle_selected(&mut self, forward: bool) {
        let Some(field) = self.selected_form_field() else {
            return;
        };
        let FieldKind::Select(options) = field.kind() else {
            return;
        };
        let current = self.form.value(field).to_string();
        let index = options.iter().position(|o| o.value == current);
        let next = match (index, forward) {
            (Some(i), true) => (i + 1) % options.len(),
            (Some(i), false) => (i + options.len() - 1) % options.len(),
            (None, _) => 0,
        };
        self.update_field(field, options[next].value.to_string());
    }

    /// Runs full validation for the current step, replacing the error set.
    ///
    /// On failure the selection jumps to the first invalid field so the
    /// error region is in view.
    pub fn validate_current_step(&mut self) -> bool {
        let Some(step) = self.current_step() else {
            return false;
        };
        self.errors = validate_step(&self.form, step);
        if self.errors.is_empty() {
            return true;
        }
        if let Some(first) = self.errors.first_in(step) {
            let fields = self.visible_fields();
            if let Some(index) = fields.iter().position(|f| *f == first) {
                self.selected_field = index;
            }
        }
        false
    }

    /// Moves to the next step. Validation and draft persistence are the
    /// caller's responsibility; errors are cleared by the successful
    /// transition.
    pub fn advance_step(&mut self) {
        if self.wizard == WizardState::Step1 {
            self.wizard = WizardState::Step2;
            self.errors = ValidationErrors::default();
            self.selected_field = 0;
        }
    }

    /// Moves to the previous step unconditionally, floored at step 1.
    pub fn retreat_step(&mut self) {
        if self.wizard == WizardState::Step2 {
            self.wizard = WizardState::Step1;
            self.selected_field = 0;
        }
    }

    /// Validates step 2 and enters the submitting state on success.
    pub fn begin_submit(&mut self) -> bool {
        if self.wizard != WizardState::Step2 {
            return false;
        }
        if !self.validate_current_step() {
            return false;
        }
        self.wizard = WizardState::Submitting;
        true
    }

    /// Processes the result of a submission.
    ///
    /// Success reaches the terminal `Submitted` state; failure drops back
    /// to step 2 with a status message.
    pub fn set_submit_result(&mut self, result: Result<String, String>) {
        match result {
            Ok(_) => {
                self.wizard = WizardState::Submitted;
                self.status_message = Some("Application received".to_string());
            }
            Err(error) => {
                self.wizard = WizardState::Step2;
                self.status_message = Some(format!("Submission failed: {}", error));
            }
        }
    }

    /// Processes the result of a best-effort draft save. Failure is only
    /// reported, never blocks the step transition.
    pub fn set_draft_save_result(&mut self, result: Result<String, String>) {
        match result {
            Ok(_) => {
                self.status_message =
                    Some(format!("Draft saved for {}", self.form.business_email));
            }
            Err(error) => {
                self.status_message = Some(format!("Draft not saved: {}", error));
            }
        }
    }

    /// Replaces the whole form with a stored draft, keeping the just-typed
    /// email.
    pub fn restore_draft(&mut self, draft: ApplicationForm) {
        let email = std::mem::take(&mut self.form.business_email);
        self.form = draft;
        self.form.business_email = email;
        self.clamp_selected_field();
        self.status_message = Some("Draft restored".to_string());
    }

    /// Returns from the submitted confirmation to a blank step 1.
    pub fn reset_wizard(&mut self) {
        self.form = ApplicationForm::default();
        self.errors = ValidationErrors::default();
        self.wizard = WizardState::Step1;
        self.selected_field = 0;
        self.status_message = None;
    }

    /// Progress-bar fill for the wizard header.
    pub fn wizard_progress_percent(&self) -> u16 {
        match self.wizard {
            WizardState::Step1 => 50,
            _ => 100,
        }
    }

    // --- Annotation overlay -----------------------------------------------

    /// Shows or hides the overlay. Hiding releases any in-flight drag or
    /// edit so the board is quiescent while invisible.
    pub fn toggle_overlay(&mut self) {
        self.overlay_active = !self.overlay_active;
        if !self.overlay_active {
            self.board.end_drag();
            self.board.end_edit();
            if matches!(self.mode, AppMode::AnnotationEdit | AppMode::TemplateMenu) {
                self.mode = AppMode::Normal;
                self.input.clear();
                self.cursor_position = 0;
            }
        }
    }

    pub fn add_annotation(&mut self) {
        let id = self.board.add();
        self.selected_annotation = Some(id);
    }

    pub fn duplicate_selected_annotation(&mut self) {
        let Some(id) = self.selected_annotation else {
            return;
        };
        match self.board.duplicate(id) {
            Ok(new_id) => self.selected_annotation = Some(new_id),
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    pub fn delete_selected_annotation(&mut self) {
        if let Some(id) = self.selected_annotation.take() {
            self.board.remove(id);
            self.selected_annotation = self.board.ids().last().copied();
        }
    }

    pub fn select_next_annotation(&mut self) {
        let ids = self.board.ids();
        if ids.is_empty() {
            self.selected_annotation = None;
            return;
        }
        let next = match self.selected_annotation.and_then(|id| ids.iter().position(|x| *x == id))
        {
            Some(i) => ids[(i + 1) % ids.len()],
            None => ids[0],
        };
        self.selected_annotation = Some(next);
    }

    /// Opens the content editor for the selected annotation.
    pub fn start_annotation_edit(&mut self) {
        let Some(id) = self.selected_annotation else {
            return;
        };
        match self.board.begin_edit(id) {
            Ok(()) => {
                self.mode = AppMode::AnnotationEdit;
                self.input = self
                    .board
                    .get(id)
                    .map(|a| a.content.clone())
                    .unwrap_or_default();
                self.cursor_position = self.input.len();
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    /// Blur: commits the edited content (only when changed) and closes the
    /// editor.
    pub fn finish_annotation_edit(&mut self) {
        if let Some(id) = self.board.editing() {
            self.board.update_content(id, &self.input);
        }
        self.board.end_edit();
        self.mode = AppMode::Normal;
        self.input.clear();
        self.cursor_position = 0;
    }

    pub fn open_template_menu(&mut self) {
        if self.selected_annotation.is_some() {
            self.mode = AppMode::TemplateMenu;
            self.template_index = 0;
        }
    }

    pub fn close_template_menu(&mut self) {
        self.mode = AppMode::Normal;
    }

    pub fn template_menu_next(&mut self) {
        if self.template_index + 1 < NOTE_TEMPLATES.len() {
            self.template_index += 1;
        }
    }

    pub fn template_menu_prev(&mut self) {
        self.template_index = self.template_index.saturating_sub(1);
    }

    /// Applies the highlighted template to the selected annotation
    /// immediately and closes the menu.
    pub fn apply_selected_template(&mut self) {
        if let Some(id) = self.selected_annotation {
            let template = &NOTE_TEMPLATES[self.template_index];
            if let Err(e) = self.board.apply_template(id, template) {
                self.status_message = Some(e.to_string());
            }
        }
        self.mode = AppMode::Normal;
    }

    // --- Dashboard --------------------------------------------------------

    /// The static record for the selected role.
    pub fn record(&self) -> DashboardRecord {
        DashboardRecord::for_role(self.role)
    }

    /// Sidebar entries for the selected role, in display order. General
    /// customers get the account-centric menu without the trade dashboard.
    pub fn sidebar_views(&self) -> &'static [DashboardView] {
        if self.record().user.tier.has_dashboard() {
            &[
                DashboardView::Dashboard,
                DashboardView::History,
                DashboardView::Tracking,
                DashboardView::Rewards,
                DashboardView::Address,
                DashboardView::Settings,
            ]
        } else {
            &[
                DashboardView::Settings,
                DashboardView::Address,
                DashboardView::History,
                DashboardView::Tracking,
                DashboardView::Rewards,
            ]
        }
    }

    /// Switches the dashboard section. The trade dashboard is not available
    /// to General customers; that selection fails closed to account
    /// settings.
    pub fn select_view(&mut self, view: DashboardView) {
        if view == DashboardView::Dashboard && !self.record().user.tier.has_dashboard() {
            self.dashboard_view = DashboardView::Settings;
            self.status_message =
                Some("The dashboard is available to Trade members only".to_string());
            return;
        }
        self.dashboard_view = view;
    }

    /// Steps the role switcher, re-applying the dashboard access rule for
    /// the new role.
    pub fn cycle_role(&mut self) {
        self.role = self.role.next();
        if self.dashboard_view == DashboardView::Dashboard
            && !self.record().user.tier.has_dashboard()
        {
            self.dashboard_view = DashboardView::Settings;
        }
    }

    pub fn toggle_rules(&mut self) {
        self.show_rules = !self.show_rules;
    }

    pub fn toggle_tracking_method(&mut self) {
        self.tracking_method = match self.tracking_method {
            TrackingMethod::OrderNumber => TrackingMethod::TrackingNumber,
            TrackingMethod::TrackingNumber => TrackingMethod::OrderNumber,
        };
    }

    pub fn start_invite_edit(&mut self) {
        self.mode = AppMode::InviteEdit;
    }

    /// Opens the preview modal when an address has been typed.
    pub fn finish_invite_edit(&mut self) {
        self.mode = AppMode::Normal;
        if !self.invite_email.is_empty() {
            self.invite_status = InviteStatus::Preview;
        }
    }

    pub fn cancel_invite_edit(&mut self) {
        self.mode = AppMode::Normal;
        self.invite_email.clear();
    }

    pub fn dismiss_invite_preview(&mut self) {
        self.invite_status = InviteStatus::Idle;
    }

    /// Confirms the previewed invitation. The mock service always succeeds.
    pub fn confirm_invite(&mut self) {
        self.status_message = Some(format!("Invitation sent to {}", self.invite_email));
        self.invite_email.clear();
        self.invite_status = InviteStatus::Idle;
    }

    // --- CSV export dialog ------------------------------------------------

    /// Switches to the export dialog with a default CSV filename.
    pub fn start_csv_export(&mut self) {
        self.mode = AppMode::ExportCsv;
        self.filename_input = "orders.csv".to_string();
        self.cursor_position = self.filename_input.len();
        self.status_message = None;
    }

    pub fn get_csv_export_filename(&self) -> String {
        if self.filename_input.is_empty() {
            "orders.csv".to_string()
        } else {
            self.filename_input.clone()
        }
    }

    pub fn set_csv_export_result(&mut self, result: Result<String, String>) {
        match result {
            Ok(filename) => {
                self.status_message = Some(format!("Exported to {}", filename));
            }
            Err(error) => {
                self.status_message = Some(format!("Export failed: {}", error));
            }
        }
        self.mode = AppMode::Normal;
        self.filename_input.clear();
        self.cursor_position = 0;
    }

    pub fn cancel_filename_input(&mut self) {
        self.mode = AppMode::Normal;
        self.filename_input.clear();
        self.cursor_position = 0;
    }
}
