use crate::application::{App, AppMode, DashboardView, InviteStatus, Screen, WizardState};
use crate::domain::{sample_orders, FieldKind, Position};
use crate::infrastructure::{DraftStore, OrderExporter, SubmissionService};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::FieldEdit => Self::handle_field_edit_mode(app, key),
            AppMode::AnnotationEdit => Self::handle_annotation_edit_mode(app, key),
            AppMode::TemplateMenu => Self::handle_template_menu_mode(app, key),
            AppMode::InviteEdit => Self::handle_invite_edit_mode(app, key),
            AppMode::ExportCsv => Self::handle_filename_input_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    /// Mouse input drives the annotation overlay: press picks up an anchor
    /// or note header under the pointer, motion moves it by the delta from
    /// the press point, release commits.
    pub fn handle_mouse_event(app: &mut App, event: MouseEvent) {
        if !app.overlay_active {
            return;
        }
        let pointer = Position::new(event.column as i32, event.row as i32);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some((id, target)) = app.board.hit_test(pointer) {
                    app.selected_annotation = Some(id);
                    if let Err(e) = app.board.begin_drag(target, id, pointer) {
                        app.status_message = Some(e.to_string());
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                app.board.drag_to(pointer);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                app.board.end_drag();
            }
            _ => {}
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('n') => {
                    Self::wizard_forward(app);
                    return;
                }
                KeyCode::Char('b') => {
                    app.retreat_step();
                    return;
                }
                KeyCode::Char('e') => {
                    if app.screen == Screen::Dashboard
                        && app.dashboard_view == DashboardView::History
                    {
                        app.start_csv_export();
                    }
                    return;
                }
                _ => {}
            }
        }

        // The invite preview modal captures confirm/cancel before anything
        // else.
        if app.invite_status == InviteStatus::Preview {
            match key {
                KeyCode::Enter => app.confirm_invite(),
                KeyCode::Esc => app.dismiss_invite_preview(),
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.mode = AppMode::Help;
                app.help_scroll = 0;
                return;
            }
            KeyCode::F(2) => {
                app.toggle_overlay();
                return;
            }
            _ => {}
        }

        // While the overlay is shown its keys take precedence over the
        // underlying screen.
        if app.overlay_active && Self::handle_overlay_keys(app, key) {
            return;
        }

        match key {
            KeyCode::Tab if !app.overlay_active => {
                app.screen = match app.screen {
                    Screen::Application => Screen::Dashboard,
                    Screen::Dashboard => Screen::Application,
                };
                app.status_message = None;
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => match app.screen {
                Screen::Application => Self::handle_application_keys(app, key),
                Screen::Dashboard => Self::handle_dashboard_keys(app, key),
            },
        }
    }

    /// Keys consumed by the annotation overlay. Returns false for keys the
    /// overlay does not use so they fall through to the active screen.
    fn handle_overlay_keys(app: &mut App, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('a') => {
                app.add_annotation();
                true
            }
            KeyCode::Char('d') => {
                app.duplicate_selected_annotation();
                true
            }
            KeyCode::Char('x') => {
                app.delete_selected_annotation();
                true
            }
            KeyCode::Tab => {
                app.select_next_annotation();
                true
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                app.start_annotation_edit();
                true
            }
            KeyCode::Char('t') => {
                app.open_template_menu();
                true
            }
            _ => false,
        }
    }

    fn handle_application_keys(app: &mut App, key: KeyCode) {
        if app.wizard == WizardState::Submitted {
            if key == KeyCode::Enter {
                app.reset_wizard();
            }
            return;
        }

        match key {
            KeyCode::Up => {
                app.select_prev_field();
            }
            KeyCode::Down => {
                app.select_next_field();
            }
            KeyCode::Enter => match app.selected_form_field().map(|f| f.kind()) {
                Some(FieldKind::Text) => app.start_field_edit(),
                Some(FieldKind::Checkbox) => app.toggle_selected(),
                Some(FieldKind::Select(_)) => app.cycle_selected(true),
                None => {}
            },
            KeyCode::Char(' ') => {
                app.toggle_selected();
            }
            KeyCode::Right => {
                app.cycle_selected(true);
            }
            KeyCode::Left => {
                app.cycle_selected(false);
            }
            _ => {}
        }
    }

    /// Advances the wizard: validate, persist the draft on leaving step 1,
    /// submit from step 2.
    fn wizard_forward(app: &mut App) {
        match app.wizard {
            WizardState::Step1 => {
                if !app.validate_current_step() {
                    return;
                }
                // Draft persistence is best effort and never blocks the
                // step change.
                if !app.form.business_email.is_empty() {
                    let store = DraftStore::new(&app.draft_dir);
                    let result = store.save_draft(&app.form.business_email, &app.form);
                    app.set_draft_save_result(result);
                }
                app.advance_step();
            }
            WizardState::Step2 => {
                if app.begin_submit() {
                    let service = SubmissionService::default();
                    let result = service.submit(&app.form);
                    app.set_submit_result(result);
                }
            }
            WizardState::Submitting | WizardState::Submitted => {}
        }
    }

    fn handle_dashboard_keys(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                if let Some(view) = app.sidebar_views().get(index).copied() {
                    app.select_view(view);
                }
            }
            KeyCode::Char('r') => {
                app.cycle_role();
            }
            KeyCode::Char('c') => {
                Self::copy_discount_code(app);
            }
            KeyCode::Char('v') => {
                if app.dashboard_view == DashboardView::Rewards {
                    app.toggle_rules();
                }
            }
            KeyCode::Char('m') => {
                if app.dashboard_view == DashboardView::Tracking {
                    app.toggle_tracking_method();
                }
            }
            KeyCode::Char('i') => {
                if app.dashboard_view == DashboardView::Dashboard {
                    app.start_invite_edit();
                }
            }
            _ => {}
        }
    }

    /// Copies the active discount code to the system clipboard.
    fn copy_discount_code(app: &mut App) {
        let Some(code) = app.record().quarterly.discount_code else {
            app.status_message = Some("No discount code for this account".to_string());
            return;
        };
        let result = arboard::Clipboard::new().and_then(|mut c| c.set_text(code.to_string()));
        match result {
            Ok(()) => app.status_message = Some(format!("Copied {}", code)),
            Err(e) => app.status_message = Some(format!("Clipboard error: {}", e)),
        }
    }

    fn handle_field_edit_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                if let Some(email) = app.finish_field_edit() {
                    // Email blur: an existing draft for this address
                    // repopulates the form, keeping what was just typed.
                    let store = DraftStore::new(&app.draft_dir);
                    if let Some(draft) = store.load_draft(&email) {
                        app.restore_draft(draft);
                    }
                }
            }
            KeyCode::Esc => {
                app.cancel_field_edit();
            }
            KeyCode::Backspace => {
                delete_char_before(&mut app.input, &mut app.cursor_position);
            }
            KeyCode::Delete => {
                delete_char_at(&mut app.input, app.cursor_position);
            }
            KeyCode::Left => {
                move_cursor_left(&app.input, &mut app.cursor_position);
            }
            KeyCode::Right => {
                move_cursor_right(&app.input, &mut app.cursor_position);
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.input.len();
            }
            KeyCode::Char(c) => {
                insert_char(&mut app.input, &mut app.cursor_position, c);
            }
            _ => {}
        }
    }

    /// Annotation notes are multiline, so Enter inserts a line break and
    /// Esc acts as the blur that commits the edit.
    fn handle_annotation_edit_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                app.finish_annotation_edit();
            }
            KeyCode::Enter => {
                insert_char(&mut app.input, &mut app.cursor_position, '\n');
            }
            KeyCode::Backspace => {
                delete_char_before(&mut app.input, &mut app.cursor_position);
            }
            KeyCode::Delete => {
                delete_char_at(&mut app.input, app.cursor_position);
            }
            KeyCode::Left => {
                move_cursor_left(&app.input, &mut app.cursor_position);
            }
            KeyCode::Right => {
                move_cursor_right(&app.input, &mut app.cursor_position);
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.input.len();
            }
            KeyCode::Char(c) => {
                insert_char(&mut app.input, &mut app.cursor_position, c);
            }
            _ => {}
        }
    }

    fn handle_template_menu_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                app.close_template_menu();
            }
            KeyCode::Up => {
                app.template_menu_prev();
            }
            KeyCode::Down => {
                app.template_menu_next();
            }
            KeyCode::Enter => {
                app.apply_selected_template();
            }
            _ => {}
        }
    }

    fn handle_invite_edit_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                app.finish_invite_edit();
            }
            KeyCode::Esc => {
                app.cancel_invite_edit();
            }
            KeyCode::Backspace => {
                app.invite_email.pop();
            }
            KeyCode::Char(c) => {
                app.invite_email.push(c);
            }
            _ => {}
        }
    }

    fn handle_filename_input_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                let filename = app.get_csv_export_filename();
                let result = OrderExporter::export_orders(sample_orders(), &filename);
                app.set_csv_export_result(result);
            }
            KeyCode::Esc => {
                app.cancel_filename_input();
            }
            KeyCode::Backspace => {
                delete_char_before(&mut app.filename_input, &mut app.cursor_position);
            }
            KeyCode::Delete => {
                delete_char_at(&mut app.filename_input, app.cursor_position);
            }
            KeyCode::Left => {
                move_cursor_left(&app.filename_input, &mut app.cursor_position);
            }
            KeyCode::Right => {
                move_cursor_right(&app.filename_input, &mut app.cursor_position);
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.filename_input.len();
            }
            KeyCode::Char(c) => {
                insert_char(&mut app.filename_input, &mut app.cursor_position, c);
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Normal;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}

// Cursor positions are byte offsets into the edited string and always sit
// on a character boundary, so edits around multibyte input move by the
// character's UTF-8 width rather than a single byte.

fn insert_char(text: &mut String, cursor: &mut usize, c: char) {
    text.insert(*cursor, c);
    *cursor += c.len_utf8();
}

fn delete_char_before(text: &mut String, cursor: &mut usize) {
    if let Some((index, _)) = text[..*cursor].char_indices().next_back() {
        text.remove(index);
        *cursor = index;
    }
}

fn delete_char_at(text: &mut String, cursor: usize) {
    if cursor < text.len() {
        text.remove(cursor);
    }
}

fn move_cursor_left(text: &str, cursor: &mut usize) {
    if let Some((index, _)) = text[..*cursor].char_indices().next_back() {
        *cursor = index;
    }
}

fn move_cursor_right(text: &str, cursor: &mut usize) {
    if let Some(c) = text[*cursor..].chars().next() {
        *cursor += c.len_utf8();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{App, AppMode, DashboardView, Screen, WizardState};
    use crate::domain::{FormField, RoleKey};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_tab_switches_screens() {
        let mut app = App::default();
        assert_eq!(app.screen, Screen::Application);
        InputHandler::handle_key_event(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.screen, Screen::Dashboard);
        InputHandler::handle_key_event(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.screen, Screen::Application);
    }

    #[test]
    fn test_ctrl_n_blocks_on_invalid_step() {
        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(app.wizard, WizardState::Step1);
        assert!(!app.errors.is_empty());
    }

    #[test]
    fn test_enter_on_checkbox_toggles_instead_of_editing() {
        let mut app = App::default();
        app.wizard = WizardState::Step2;
        let index = app
            .visible_fields()
            .iter()
            .position(|f| *f == FormField::AgreeToTerms)
            .unwrap();
        app.selected_field = index;
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.form.agree_to_terms);
    }

    #[test]
    fn test_enter_on_text_field_starts_editing() {
        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.mode, AppMode::FieldEdit);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('a'), KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('b'), KeyModifiers::NONE);
        assert_eq!(app.input, "ab");
        InputHandler::handle_key_event(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.form.business_email, "");
    }

    #[test]
    fn test_arrow_keys_cycle_select_field() {
        let mut app = App::default();
        app.wizard = WizardState::Step2;
        app.selected_field = 0; // Country
        InputHandler::handle_key_event(&mut app, KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(app.form.country, "CA");
        InputHandler::handle_key_event(&mut app, KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(app.form.country, "US");
    }

    #[test]
    fn test_overlay_keys_take_precedence() {
        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, KeyCode::F(2), KeyModifiers::NONE);
        assert!(app.overlay_active);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(app.board.len(), 1);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('d'), KeyModifiers::NONE);
        assert_eq!(app.board.len(), 2);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(app.board.len(), 1);
    }

    #[test]
    fn test_mouse_drag_moves_note_box() {
        let mut app = App::default();
        app.toggle_overlay();
        app.add_annotation();
        let id = app.selected_annotation.unwrap();
        let start = app.board.get(id).unwrap().box_pos;

        // Press on the note header, drag right and down, release.
        let (x, y) = (start.x as u16 + 2, start.y as u16);
        InputHandler::handle_mouse_event(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), x, y),
        );
        assert!(app.board.drag_active());
        InputHandler::handle_mouse_event(
            &mut app,
            mouse(MouseEventKind::Drag(MouseButton::Left), x + 10, y + 3),
        );
        InputHandler::handle_mouse_event(
            &mut app,
            mouse(MouseEventKind::Up(MouseButton::Left), x + 10, y + 3),
        );

        let moved = app.board.get(id).unwrap().box_pos;
        assert_eq!(moved.x, start.x + 10);
        assert_eq!(moved.y, start.y + 3);
        assert!(!app.board.drag_active());
    }

    #[test]
    fn test_mouse_ignored_while_overlay_hidden() {
        let mut app = App::default();
        app.toggle_overlay();
        app.add_annotation();
        app.toggle_overlay();
        let id = app.selected_annotation.unwrap();
        let pos = app.board.get(id).unwrap().box_pos;
        InputHandler::handle_mouse_event(
            &mut app,
            mouse(
                MouseEventKind::Down(MouseButton::Left),
                pos.x as u16,
                pos.y as u16,
            ),
        );
        assert!(!app.board.drag_active());
    }

    #[test]
    fn test_dashboard_number_keys_select_views() {
        let mut app = App::default();
        app.screen = Screen::Dashboard;
        InputHandler::handle_key_event(&mut app, KeyCode::Char('2'), KeyModifiers::NONE);
        assert_eq!(app.dashboard_view, DashboardView::History);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('4'), KeyModifiers::NONE);
        assert_eq!(app.dashboard_view, DashboardView::Rewards);
    }

    #[test]
    fn test_dashboard_key_one_redirects_general_role() {
        let mut app = App::default();
        app.screen = Screen::Dashboard;
        app.role = RoleKey::General;
        InputHandler::handle_key_event(&mut app, KeyCode::Char('1'), KeyModifiers::NONE);
        // First sidebar entry for General is account settings, not the
        // trade dashboard.
        assert_eq!(app.dashboard_view, DashboardView::Settings);
    }

    #[test]
    fn test_csv_export_only_from_history_view() {
        let mut app = App::default();
        app.screen = Screen::Dashboard;
        InputHandler::handle_key_event(&mut app, KeyCode::Char('e'), KeyModifiers::CONTROL);
        assert_eq!(app.mode, AppMode::Normal);
        app.select_view(DashboardView::History);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('e'), KeyModifiers::CONTROL);
        assert_eq!(app.mode, AppMode::ExportCsv);
        assert_eq!(app.filename_input, "orders.csv");
    }

    #[test]
    fn test_invite_edit_and_preview_flow() {
        let mut app = App::default();
        app.screen = Screen::Dashboard;
        InputHandler::handle_key_event(&mut app, KeyCode::Char('i'), KeyModifiers::NONE);
        assert_eq!(app.mode, AppMode::InviteEdit);
        for c in "pal@example.com".chars() {
            InputHandler::handle_key_event(&mut app, KeyCode::Char(c), KeyModifiers::NONE);
        }
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.invite_status, InviteStatus::Preview);
        // Esc backs out of the preview without sending.
        InputHandler::handle_key_event(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.invite_status, InviteStatus::Idle);
        assert_eq!(app.invite_email, "pal@example.com");
    }

    #[test]
    fn test_annotation_edit_enter_inserts_newline() {
        let mut app = App::default();
        app.toggle_overlay();
        app.add_annotation();
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.mode, AppMode::AnnotationEdit);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('a'), KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('b'), KeyModifiers::NONE);
        assert_eq!(app.input, "a\nb");
        InputHandler::handle_key_event(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.mode, AppMode::Normal);
        let id = app.selected_annotation.unwrap();
        assert_eq!(app.board.get(id).unwrap().content, "a\nb");
    }

    #[test]
    fn test_template_menu_navigation() {
        let mut app = App::default();
        app.toggle_overlay();
        app.add_annotation();
        InputHandler::handle_key_event(&mut app, KeyCode::Char('t'), KeyModifiers::NONE);
        assert_eq!(app.mode, AppMode::TemplateMenu);
        InputHandler::handle_key_event(&mut app, KeyCode::Down, KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(app.template_index, 2);
        InputHandler::handle_key_event(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_help_mode_entry_and_exit() {
        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, KeyCode::Char('?'), KeyModifiers::NONE);
        assert_eq!(app.mode, AppMode::Help);
        InputHandler::handle_key_event(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_enter_resets_after_submission() {
        let mut app = App::default();
        app.wizard = WizardState::Submitted;
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.wizard, WizardState::Step1);
    }

    #[test]
    fn test_field_edit_handles_multibyte_characters() {
        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.mode, AppMode::FieldEdit);
        for c in "résumé".chars() {
            InputHandler::handle_key_event(&mut app, KeyCode::Char(c), KeyModifiers::NONE);
        }
        assert_eq!(app.input, "résumé");

        // Backspace removes the final two-byte character whole.
        InputHandler::handle_key_event(&mut app, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.input, "résum");

        // Arrow keys land on character boundaries, so inserting mid-word
        // after a multibyte character stays well formed.
        InputHandler::handle_key_event(&mut app, KeyCode::Left, KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Left, KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(app.input, "résxum");

        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.form.business_email, "résxum");
    }

    #[test]
    fn test_annotation_edit_handles_multibyte_characters() {
        let mut app = App::default();
        app.toggle_overlay();
        app.add_annotation();
        InputHandler::handle_key_event(&mut app, KeyCode::Char('e'), KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('é'), KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('x'), KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Backspace, KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(app.input, "é");
        InputHandler::handle_key_event(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        let id = app.selected_annotation.unwrap();
        assert_eq!(app.board.get(id).unwrap().content, "é");
    }

    #[test]
    fn test_filename_input_handles_multibyte_characters() {
        let mut app = App::default();
        app.screen = Screen::Dashboard;
        app.select_view(DashboardView::History);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('e'), KeyModifiers::CONTROL);
        assert_eq!(app.mode, AppMode::ExportCsv);
        InputHandler::handle_key_event(&mut app, KeyCode::Home, KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('ü'), KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Right, KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('-'), KeyModifiers::NONE);
        assert_eq!(app.filename_input, "üo-rders.csv");
    }

    #[test]
    fn test_draft_round_trip_through_store_on_email_blur() {
        let dir = tempfile::tempdir().unwrap();

        // First session: fill step 1 and advance, which saves the draft.
        let mut app = App::default();
        app.draft_dir = dir.path().to_path_buf();
        app.update_field(FormField::BusinessEmail, "design@studio.com".to_string());
        app.update_field(FormField::FirstName, "Alex".to_string());
        app.update_field(FormField::LastName, "Designer".to_string());
        app.update_field(FormField::CompanyName, "Studio A".to_string());
        InputHandler::handle_key_event(&mut app, KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(app.wizard, WizardState::Step2);

        // Second session: typing the same email on step 1 restores the
        // persisted snapshot, keeping the typed email.
        let mut fresh = App::default();
        fresh.draft_dir = dir.path().to_path_buf();
        InputHandler::handle_key_event(&mut fresh, KeyCode::Enter, KeyModifiers::NONE);
        for c in "design@studio.com".chars() {
            InputHandler::handle_key_event(&mut fresh, KeyCode::Char(c), KeyModifiers::NONE);
        }
        InputHandler::handle_key_event(&mut fresh, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(fresh.form.business_email, "design@studio.com");
        assert_eq!(fresh.form.first_name, "Alex");
        assert_eq!(fresh.form.company_name, "Studio A");
    }
}
