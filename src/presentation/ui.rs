use crate::application::{
    App, AppMode, DashboardView, InviteStatus, Screen, TrackingMethod, WizardState,
};
use crate::domain::{
    connector_points, discount_rows, next_milestone, progress_percent, sample_addresses,
    sample_orders, sample_points_history, Annotation, FieldKind, FormField, QUARTERLY_GOAL,
    BOX_HEIGHT, BOX_WIDTH, NOTE_TEMPLATES,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Gauge, List, ListItem, Paragraph, Row, Table, Wrap},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    match app.screen {
        Screen::Application => render_application(f, app, chunks[1]),
        Screen::Dashboard => render_dashboard(f, app, chunks[1]),
    }
    render_status_bar(f, app, chunks[2]);

    if app.overlay_active {
        render_overlay(f, app, chunks[1]);
    }
    if matches!(app.mode, AppMode::TemplateMenu) {
        render_template_menu(f, app);
    }
    if app.invite_status == InviteStatus::Preview {
        render_invite_preview(f, app);
    }
    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let screen_name = match app.screen {
        Screen::Application => "Trade Application",
        Screen::Dashboard => "Dashboard",
    };
    let overlay = if app.overlay_active { " | overlay ON" } else { "" };
    let header = Paragraph::new(format!(
        "tradeport - Trade Partner Portal | {}{}",
        screen_name, overlay
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

// --- Application wizard ----------------------------------------------------

fn render_application(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let (step_label, title) = match app.wizard {
        WizardState::Step1 => ("Step 1 of 2", "Account Access"),
        WizardState::Step2 => ("Step 2 of 2", "Business Info"),
        WizardState::Submitting => ("Submitting", "Please wait"),
        WizardState::Submitted => ("Complete", "Application received"),
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Trade Program Application"))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(app.wizard_progress_percent())
        .label(format!("{}: {}", step_label, title));
    f.render_widget(gauge, chunks[0]);

    match app.wizard {
        WizardState::Step1 | WizardState::Step2 => render_form(f, app, chunks[1]),
        WizardState::Submitting => {
            let notice = Paragraph::new("Submitting your application...")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(notice, chunks[1]);
        }
        WizardState::Submitted => render_confirmation(f, chunks[1]),
    }
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let fields = app.visible_fields();
    let mut lines: Vec<Line> = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let selected = index == app.selected_field;
        let marker = if selected { "> " } else { "  " };
        let label_style = if selected {
            Style::default().fg(Color::Black).bg(Color::LightBlue)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let value = field_display_value(app, *field);
        let value_span = if app.mode == AppMode::FieldEdit && app.editing_field == Some(*field) {
            Span::styled(format!("{}_", app.input), Style::default().fg(Color::Green))
        } else {
            Span::raw(value)
        };

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{:<24}", field.label()), label_style),
            value_span,
        ]));

        if let Some(message) = app.errors.message(*field) {
            lines.push(Line::from(Span::styled(
                format!("    {}", message),
                Style::default().fg(Color::Red),
            )));
        }
    }

    // Keep the selected field in view on small terminals.
    let visible = area.height.saturating_sub(2) as usize;
    let skip = if lines.len() > visible && app.selected_field * 2 > visible / 2 {
        (app.selected_field * 2).saturating_sub(visible / 2)
    } else {
        0
    };
    let text: Vec<Line> = lines.into_iter().skip(skip).collect();

    let block_title = match app.wizard {
        WizardState::Step1 => "Account Access",
        _ => "Business Info",
    };
    let form = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(block_title));
    f.render_widget(form, area);
}

fn field_display_value(app: &App, field: FormField) -> String {
    match field.kind() {
        FieldKind::Text => {
            let value = app.form.value(field);
            if value.is_empty() {
                "-".to_string()
            } else {
                value.to_string()
            }
        }
        FieldKind::Select(options) => {
            let value = app.form.value(field);
            options
                .iter()
                .find(|o| o.value == value)
                .map(|o| format!("{} <Left/Right>", o.label))
                .unwrap_or_else(|| "(select) <Left/Right>".to_string())
        }
        FieldKind::Checkbox => {
            if app.form.is_checked(field) {
                "[x]".to_string()
            } else {
                "[ ]".to_string()
            }
        }
    }
}

fn render_confirmation(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Thank you for applying!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Your trade program application has been received."),
        Line::from("Our team will review it and reach out within 2 business days."),
        Line::from(""),
        Line::from("Press Enter to start a new application."),
    ];
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Application Received"));
    f.render_widget(widget, area);
}

// --- Dashboard -------------------------------------------------------------

fn render_dashboard(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(0)])
        .split(area);

    render_sidebar(f, app, chunks[0]);

    match app.dashboard_view {
        DashboardView::Dashboard => render_trade_dashboard(f, app, chunks[1]),
        DashboardView::History => render_order_history(f, chunks[1]),
        DashboardView::Tracking => render_order_tracking(f, app, chunks[1]),
        DashboardView::Rewards => render_rewards(f, app, chunks[1]),
        DashboardView::Address => render_addresses(f, chunks[1]),
        DashboardView::Settings => render_settings(f, app, chunks[1]),
    }
}

fn render_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let record = app.record();
    let mut items: Vec<ListItem> = vec![
        ListItem::new(Line::from(Span::styled(
            record.user.name,
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        ListItem::new(format!("{} · {}", record.user.tier.name(), record.user.vip_status)),
        ListItem::new(""),
    ];
    for (index, view) in app.sidebar_views().iter().enumerate() {
        let style = if *view == app.dashboard_view {
            Style::default().fg(Color::Black).bg(Color::LightBlue)
        } else {
            Style::default()
        };
        items.push(ListItem::new(Span::styled(
            format!("{}. {}", index + 1, view.label()),
            style,
        )));
    }
    items.push(ListItem::new(""));
    items.push(ListItem::new(Span::styled(
        "r: switch role",
        Style::default().fg(Color::DarkGray),
    )));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("My Account"));
    f.render_widget(list, area);
}

fn render_trade_dashboard(f: &mut Frame, app: &App, area: Rect) {
    let record = app.record();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(area);

    let percent = progress_percent(record.quarterly.current_spend);
    let progress = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Quarterly Spend: ${} / ${}",
            record.quarterly.current_spend, QUARTERLY_GOAL
        )))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(percent / 100.0);
    f.render_widget(progress, chunks[0]);

    let milestone_line = match next_milestone(record.quarterly.current_spend) {
        Some(m) => format!(
            "Spend ${} more to reach {} and unlock {}",
            m.threshold - record.quarterly.current_spend,
            m.tier.name(),
            m.reward
        ),
        None => "Top tier reached. Enjoy the best pricing we offer.".to_string(),
    };
    let code_line = match record.quarterly.discount_code {
        Some(code) => format!("Active code: {} ({}% off)  [c: copy]", code, record.quarterly.current_discount),
        None => "No active discount code".to_string(),
    };
    let summary = Paragraph::new(vec![Line::from(milestone_line), Line::from(code_line)])
        .block(Block::default().borders(Borders::ALL).title("This Quarter"));
    f.render_widget(summary, chunks[1]);

    let rows: Vec<Row> = discount_rows(record.user.tier)
        .iter()
        .map(|row| {
            let code = match row.code {
                Some(code) => code.to_string(),
                None => "Locked".to_string(),
            };
            let style = if row.code.is_none() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(row.order_value),
                Cell::from(format!("{}%", row.percent)),
                Cell::from(code),
            ])
            .style(style)
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(20),
            Constraint::Length(8),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new(vec!["Order Value", "Discount", "Code"])
            .style(Style::default().fg(Color::Yellow)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Current Discounts  [i: invite a friend]"),
    );
    f.render_widget(table, chunks[2]);
}

fn render_order_history(f: &mut Frame, area: Rect) {
    let rows: Vec<Row> = sample_orders()
        .iter()
        .map(|order| {
            Row::new(vec![order.number, order.date, order.status, order.total])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(11),
            Constraint::Length(11),
        ],
    )
    .header(
        Row::new(vec!["Order #", "Date", "Status", "Total"])
            .style(Style::default().fg(Color::Yellow)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Order History  [Ctrl+E: export CSV]"),
    );
    f.render_widget(table, area);
}

fn render_order_tracking(f: &mut Frame, app: &App, area: Rect) {
    let (order_tab, tracking_tab) = match app.tracking_method {
        TrackingMethod::OrderNumber => (
            Style::default().fg(Color::Black).bg(Color::LightBlue),
            Style::default().fg(Color::DarkGray),
        ),
        TrackingMethod::TrackingNumber => (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::Black).bg(Color::LightBlue),
        ),
    };
    let hint = match app.tracking_method {
        TrackingMethod::OrderNumber => "Look up a shipment by its order number and billing ZIP.",
        TrackingMethod::TrackingNumber => "Look up a shipment by its carrier tracking number.",
    };
    let text = vec![
        Line::from(vec![
            Span::styled(" Order Number ", order_tab),
            Span::raw("  "),
            Span::styled(" Tracking Number ", tracking_tab),
            Span::raw("   [m: switch]"),
        ]),
        Line::from(""),
        Line::from(hint),
        Line::from(""),
        Line::from(Span::styled(
            "Tracking lookups are handled by the order desk in this build.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Order Tracking"));
    f.render_widget(widget, area);
}

fn render_rewards(f: &mut Frame, app: &App, area: Rect) {
    let record = app.record();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let balance = Paragraph::new(format!("{} points", record.user.points))
        .block(Block::default().borders(Borders::ALL).title("Points Balance"));
    f.render_widget(balance, chunks[0]);

    if app.show_rules {
        let rules = Paragraph::new(vec![
            Line::from("How points work:"),
            Line::from("- Earn 1 point per dollar on every order."),
            Line::from("- Referral bonuses are credited when your referral's first order ships."),
            Line::from("- Points expire 12 months after they are earned."),
            Line::from(""),
            Line::from("[v: back to history]"),
        ])
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Program Rules"));
        f.render_widget(rules, chunks[1]);
    } else {
        let rows: Vec<Row> = sample_points_history()
            .iter()
            .map(|entry| {
                Row::new(vec![
                    Cell::from(entry.date),
                    Cell::from(entry.activity),
                    Cell::from(format!("+{}", entry.points)),
                ])
            })
            .collect();
        let table = Table::new(
            rows,
            [
                Constraint::Length(14),
                Constraint::Length(24),
                Constraint::Length(8),
            ],
        )
        .header(
            Row::new(vec!["Date", "Activity", "Points"])
                .style(Style::default().fg(Color::Yellow)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Points History  [v: program rules]"),
        );
        f.render_widget(table, chunks[1]);
    }
}

fn render_addresses(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for entry in sample_addresses() {
        let mut title = vec![Span::styled(
            entry.name,
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if entry.is_default {
            title.push(Span::styled(
                "  (default)",
                Style::default().fg(Color::Green),
            ));
        }
        lines.push(Line::from(title));
        for address_line in entry.lines.iter().filter(|l| !l.is_empty()) {
            lines.push(Line::from(format!("  {}", address_line)));
        }
        lines.push(Line::from(""));
    }
    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Address Book"));
    f.render_widget(widget, area);
}

fn render_settings(f: &mut Frame, app: &App, area: Rect) {
    let record = app.record();
    let text = vec![
        Line::from(format!("Name:        {}", record.user.name)),
        Line::from(format!("Membership:  {}", record.user.tier.name())),
        Line::from(format!("Status:      {}", record.user.vip_status)),
        Line::from(""),
        Line::from(Span::styled(
            "Profile changes are handled by your account manager in this build.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Account Settings"));
    f.render_widget(widget, area);
}

// --- Annotation overlay ----------------------------------------------------

fn render_overlay(f: &mut Frame, app: &App, area: Rect) {
    // Connectors first so note cards draw over them.
    for annotation in app.board.iter() {
        render_connector(f, annotation, area);
    }
    for annotation in app.board.iter() {
        render_anchor(f, annotation, area);
    }
    for annotation in app.board.iter() {
        render_note_card(f, app, annotation, area);
    }
}

fn render_connector(f: &mut Frame, annotation: &Annotation, area: Rect) {
    let buf = f.buffer_mut();
    for point in connector_points(annotation.anchor_pos, annotation.box_pos, 40) {
        if point.x < area.x as i32
            || point.y < area.y as i32
            || point.x >= (area.x + area.width) as i32
            || point.y >= (area.y + area.height) as i32
        {
            continue;
        }
        if let Some(cell) = buf.cell_mut((point.x as u16, point.y as u16)) {
            cell.set_char('·');
            cell.set_style(Style::default().fg(Color::Magenta));
        }
    }
}

fn render_anchor(f: &mut Frame, annotation: &Annotation, area: Rect) {
    let pos = annotation.anchor_pos;
    if pos.x < area.x as i32
        || pos.y < area.y as i32
        || pos.x >= (area.x + area.width) as i32
        || pos.y >= (area.y + area.height) as i32
    {
        return;
    }
    let buf = f.buffer_mut();
    if let Some(cell) = buf.cell_mut((pos.x as u16, pos.y as u16)) {
        cell.set_char('●');
        cell.set_style(Style::default().fg(Color::Magenta));
    }
}

fn render_note_card(f: &mut Frame, app: &App, annotation: &Annotation, area: Rect) {
    let pos = annotation.box_pos;
    if pos.x >= (area.x + area.width) as i32 || pos.y >= (area.y + area.height) as i32 {
        return;
    }
    let x = pos.x.max(area.x as i32) as u16;
    let y = pos.y.max(area.y as i32) as u16;
    let width = (BOX_WIDTH as u16).min(area.x + area.width - x);
    let height = (BOX_HEIGHT as u16).min(area.y + area.height - y);
    if width < 3 || height < 3 {
        return;
    }
    let card_area = Rect { x, y, width, height };

    let selected = app.selected_annotation == Some(annotation.id);
    let editing = app.board.editing() == Some(annotation.id);
    let border_style = if editing {
        Style::default().fg(Color::Green)
    } else if selected {
        Style::default().fg(Color::LightBlue)
    } else {
        Style::default().fg(Color::Magenta)
    };

    let content = if editing {
        format!("{}_", app.input)
    } else if annotation.content.is_empty() {
        "(empty note)".to_string()
    } else {
        annotation.content.clone()
    };

    f.render_widget(Clear, card_area);
    let card = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!("Note {}", annotation.id)),
        );
    f.render_widget(card, card_area);
}

fn render_template_menu(f: &mut Frame, app: &App) {
    let area = f.area();
    let width = area.width.min(40);
    let height = area.height.min(NOTE_TEMPLATES.len() as u16 + 2);
    let popup_area = Rect {
        x: (area.width - width) / 2,
        y: (area.height - height) / 2,
        width,
        height,
    };

    f.render_widget(Clear, popup_area);
    let items: Vec<ListItem> = NOTE_TEMPLATES
        .iter()
        .enumerate()
        .map(|(index, template)| {
            let style = if index == app.template_index {
                Style::default().fg(Color::Black).bg(Color::LightBlue)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(template.label, style))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Insert Template (Enter to apply, Esc to close)"),
    );
    f.render_widget(list, popup_area);
}

fn render_invite_preview(f: &mut Frame, app: &App) {
    let area = f.area();
    let width = area.width.min(50);
    let height = area.height.min(7);
    let popup_area = Rect {
        x: (area.width - width) / 2,
        y: (area.height - height) / 2,
        width,
        height,
    };

    f.render_widget(Clear, popup_area);
    let text = vec![
        Line::from("You are about to send an invitation to:"),
        Line::from(Span::styled(
            app.invite_email.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Enter: send | Esc: cancel"),
    ];
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Invite a Friend"));
    f.render_widget(widget, popup_area);
}

// --- Status bar and help ---------------------------------------------------

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let input_text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else if app.overlay_active {
                "Overlay: a: add | d: duplicate | x: delete | Tab: next | e: edit | t: template | mouse: drag | F2: hide".to_string()
            } else {
                match app.screen {
                    Screen::Application => {
                        "Tab: dashboard | ↑↓: field | Enter: edit | Ctrl+N: next/submit | Ctrl+B: back | F2: overlay | F1/?: help | q: quit".to_string()
                    }
                    Screen::Dashboard => {
                        "Tab: application | 1-6: section | r: role | c: copy code | F2: overlay | F1/?: help | q: quit".to_string()
                    }
                }
            }
        }
        AppMode::FieldEdit => format!("Editing: {} (Enter to save, Esc to cancel)", app.input),
        AppMode::AnnotationEdit => {
            "Editing note (Enter: new line, Esc: done)".to_string()
        }
        AppMode::TemplateMenu => "↑↓: choose template | Enter: apply | Esc: close".to_string(),
        AppMode::InviteEdit => format!(
            "Invite email: {} (Enter to preview, Esc to cancel)",
            app.invite_email
        ),
        AppMode::ExportCsv => format!(
            "Export CSV as: {} (Enter to export, Esc to cancel)",
            app.filename_input
        ),
        AppMode::Help => {
            "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string()
        }
    };

    let input = Paragraph::new(input_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::FieldEdit => Style::default().fg(Color::Green),
            AppMode::AnnotationEdit => Style::default().fg(Color::Green),
            AppMode::TemplateMenu => Style::default().fg(Color::Magenta),
            AppMode::InviteEdit => Style::default().fg(Color::Yellow),
            AppMode::ExportCsv => Style::default().fg(Color::Magenta),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(input, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!("tradeport Help (Line {}/{})", start_line + 1, help_lines.len()))
            .style(Style::default().fg(Color::Cyan)))
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"TRADEPORT KEY REFERENCE

=== GLOBAL ===
Tab             Switch between the application form and the dashboard
F2              Show or hide the annotation overlay
F1 or ?         Show this help (scroll with ↑↓, PgUp/PgDn, Home)
q               Quit (normal mode only)

=== TRADE APPLICATION ===
↑ / ↓           Move between form fields
Enter           Edit the selected text field / toggle checkbox / cycle select
Space           Toggle the selected checkbox
← / →           Cycle the selected dropdown's options
Ctrl+N          Validate and continue (step 1) or submit (step 2)
Ctrl+B          Go back to step 1 (entered values are kept)

The form validates a whole step at once: every missing field on the
current step is flagged together, and fixing a field clears only that
field's message. Leaving step 1 saves a draft keyed by your business
email; typing the same email later offers the draft back.

=== DASHBOARD ===
1-6             Open a sidebar section
r               Switch the demo role (General / Trade / Plus / Elite)
c               Copy the active discount code to the clipboard
i               Invite a friend (dashboard section)
m               Switch tracking lookup method (tracking section)
v               Show program rules (rewards section)
Ctrl+E          Export order history to CSV (history section)

The trade dashboard itself is only available to Trade-tier roles;
General customers land on account settings instead.

=== ANNOTATION OVERLAY ===
a               Add a note at the default position
d               Duplicate the selected note (offset down-right)
x               Delete the selected note
Tab             Select the next note
e or Enter      Edit the selected note's text
t               Insert a review template
Mouse drag      Move a note (drag its title row) or its anchor point

Notes keep an anchor point connected to the card by a curved
connector. Dragging the card leaves the anchor in place, so you can
point at the exact widget a note refers to.
"#
    .to_string()
}
