use super::status_display::{render_mint_panel, render_receipt_panel};
use super::utils::split_ascii_art;
use crate::app::{App, MessageType};
use crate::constants::POSTERMINT_FRAMES;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::time::{SystemTime, UNIX_EPOCH};
use textwrap;

/// Render the main application UI
pub fn draw_main(f: &mut Frame, app: &mut App) {
    let time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    // Connected theme: tech cool colors
    let base_color = Color::Cyan;
    let highlight_color = Color::LightBlue;
    let dim_color = Color::DarkGray;

    // Full screen border
    let main_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(base_color));
    f.render_widget(main_block, f.size());

    // Main layout structure
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(8), // POSTERMINT ASCII art
            Constraint::Length(3), // System status indicators
            Constraint::Min(8),    // Main content
            Constraint::Length(3), // Message area
            Constraint::Length(3), // Control information
        ])
        .split(f.size());

    // Banner animation
    let animation_frame = (time % 3) as usize;
    let banner = Paragraph::new(split_ascii_art(
        POSTERMINT_FRAMES[animation_frame],
        highlight_color,
    ))
    .alignment(Alignment::Center);
    f.render_widget(banner, main_layout[0]);

    // System status indicators
    let status_indicators = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(main_layout[1]);

    let network_status = format!(
        "[■■■■■□□□□□] NETWORK: {} (chain {})",
        app.chain_state.get_current_name().to_uppercase(),
        app.chain_state.chain_id()
    );
    let network_info = Paragraph::new(network_status)
        .style(Style::default().fg(base_color))
        .alignment(Alignment::Center);
    f.render_widget(network_info, status_indicators[0]);

    let system_block = Block::default()
        .title("SYSTEM")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(base_color));
    let system_text = Paragraph::new(app.get_status_animation())
        .style(Style::default().fg(base_color))
        .alignment(Alignment::Center)
        .block(system_block);
    f.render_widget(system_text, status_indicators[1]);

    let wallet_status = format!("[■■■■■■■□□□] WALLET: {}", app.wallet_address_display());
    let wallet_info = Paragraph::new(wallet_status)
        .style(Style::default().fg(base_color))
        .alignment(Alignment::Center);
    f.render_widget(wallet_info, status_indicators[2]);

    // Split main content area into left and right sections
    let content_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Account panel
            Constraint::Percentage(60), // Mint and receipt panels
        ])
        .split(main_layout[2]);

    render_account_panel(f, app, content_layout[0], base_color, highlight_color, dim_color);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(content_layout[1]);

    render_mint_panel(f, app, right_chunks[0], time);
    render_receipt_panel(f, app, right_chunks[1]);

    // Message area
    let message_area_width = main_layout[3].width.saturating_sub(4).max(20) as usize;
    let message_line = if let Some(error) = &app.error_message {
        let wrapped = textwrap::fill(error, message_area_width);
        Line::from(vec![Span::styled(
            wrapped,
            Style::default().fg(if app.message_type == MessageType::Info {
                Color::Yellow
            } else {
                Color::Red
            }),
        )])
    } else if let Some(success) = &app.success_message {
        Line::from(vec![Span::styled(
            success.clone(),
            Style::default().fg(Color::Green),
        )])
    } else {
        Line::from(vec![Span::styled(
            "Press M to mint the poster edition",
            Style::default().fg(dim_color),
        )])
    };
    let message_widget = Paragraph::new(message_line).alignment(Alignment::Center);
    f.render_widget(message_widget, main_layout[3]);

    // Controls
    let controls = Paragraph::new(Line::from(vec![
        Span::styled("M", Style::default().fg(highlight_color)),
        Span::styled(" mint  ", Style::default().fg(dim_color)),
        Span::styled("D", Style::default().fg(highlight_color)),
        Span::styled(" disconnect  ", Style::default().fg(dim_color)),
        Span::styled("N", Style::default().fg(highlight_color)),
        Span::styled(" network  ", Style::default().fg(dim_color)),
        Span::styled("Q", Style::default().fg(highlight_color)),
        Span::styled(" quit", Style::default().fg(dim_color)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(dim_color)),
    );
    f.render_widget(controls, main_layout[4]);
}

fn render_account_panel(
    f: &mut Frame,
    app: &App,
    area: ratatui::layout::Rect,
    base_color: Color,
    highlight_color: Color,
    dim_color: Color,
) {
    let account = app.account();
    let connector = app
        .wallet
        .as_ref()
        .map(|w| w.kind().display_name())
        .unwrap_or("-");

    let account_block = Block::default()
        .title(" ACCOUNT ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(base_color));

    let account_info = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("STATUS: ", Style::default().fg(dim_color)),
            Span::styled(
                account.status_label().to_uppercase(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ])
        .alignment(Alignment::Center),
        Line::from(vec![
            Span::styled("CONNECTOR: ", Style::default().fg(dim_color)),
            Span::styled(connector, Style::default().fg(highlight_color)),
        ])
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            Span::styled("ADDRESS: ", Style::default().fg(dim_color)),
            Span::styled(app.wallet_address_display(), Style::default().fg(highlight_color)),
        ])
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            Span::styled("◈ ", Style::default().fg(highlight_color)),
            Span::styled(
                app.balance_display(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ◈", Style::default().fg(highlight_color)),
        ])
        .alignment(Alignment::Center),
    ];

    let account_widget = Paragraph::new(account_info)
        .alignment(Alignment::Center)
        .block(account_block);
    f.render_widget(account_widget, area);
}
