use super::utils::split_ascii_art;
use crate::app::{App, MessageType};
use crate::constants::POSTERMINT_FRAMES;
use crate::wallet::ConnectorKind;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};
use std::time::{SystemTime, UNIX_EPOCH};

/// Renders the wallet connect screen
pub fn draw_connect(f: &mut Frame, app: &mut App) {
    let base_color = Color::Magenta;
    let highlight_color = Color::LightRed;
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
            Constraint::Min(5),    // Connector list
            Constraint::Length(3), // Message area
            Constraint::Length(3), // Control information
        ])
        .split(f.size());

    // Banner animation
    let time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
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
        "[■■■■■□□□□□] NETWORK: {}",
        app.chain_state.get_current_name().to_uppercase()
    );
    let network_info = Paragraph::new(network_status)
        .style(Style::default().fg(base_color))
        .alignment(Alignment::Center);
    f.render_widget(network_info, status_indicators[0]);

    let build_on_base = Paragraph::new("╔══════╡ BUILD ON BASE ╞══════╗")
        .style(Style::default().fg(base_color))
        .alignment(Alignment::Center);
    f.render_widget(build_on_base, status_indicators[1]);

    let account = app.account();
    let wallet_status = format!("[■□□□□□□□□□] STATUS: {}", account.status_label().to_uppercase());
    let wallet_info = Paragraph::new(wallet_status)
        .style(Style::default().fg(base_color))
        .alignment(Alignment::Center);
    f.render_widget(wallet_info, status_indicators[2]);

    // Connector selection
    let connector_block = Block::default()
        .title(" << SELECT CONNECTOR >> ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(base_color));

    if app.is_switching_network {
        let switch_text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "SWITCH NETWORK",
                Style::default().fg(highlight_color).add_modifier(Modifier::BOLD),
            )])
            .alignment(Alignment::Center),
            Line::from(""),
            Line::from(vec![Span::styled(
                app.get_network_options(),
                Style::default().fg(base_color),
            )])
            .alignment(Alignment::Center),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Press the number of the target network, N to cancel",
                Style::default().fg(dim_color),
            )])
            .alignment(Alignment::Center),
        ];
        let switch_widget = Paragraph::new(switch_text)
            .alignment(Alignment::Center)
            .block(connector_block);
        f.render_widget(switch_widget, main_layout[2]);
    } else {
        let items: Vec<ListItem> = ConnectorKind::ALL
            .iter()
            .map(|kind| {
                ListItem::new(Line::from(vec![
                    Span::styled("◈ ", Style::default().fg(dim_color)),
                    Span::styled(kind.display_name(), Style::default().fg(base_color)),
                ]))
            })
            .collect();

        let connector_list = List::new(items)
            .block(connector_block)
            .highlight_style(
                Style::default()
                    .fg(highlight_color)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(" >> ");
        f.render_stateful_widget(connector_list, main_layout[2], &mut app.connector_state);
    }

    // Message area
    let message_line = if app.is_connecting {
        Line::from(vec![Span::styled(
            "Connecting... approve the request in your wallet",
            Style::default().fg(Color::Yellow),
        )])
    } else if let Some(error) = &app.error_message {
        Line::from(vec![Span::styled(
            error.clone(),
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
            "Select a connector and press ENTER to connect",
            Style::default().fg(dim_color),
        )])
    };
    let message_widget = Paragraph::new(message_line).alignment(Alignment::Center);
    f.render_widget(message_widget, main_layout[3]);

    // Controls
    let controls = Paragraph::new(Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(highlight_color)),
        Span::styled(" select  ", Style::default().fg(dim_color)),
        Span::styled("ENTER", Style::default().fg(highlight_color)),
        Span::styled(" connect  ", Style::default().fg(dim_color)),
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
