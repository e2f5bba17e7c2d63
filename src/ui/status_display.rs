use crate::app::App;
use crate::constants::{EDITION_DESCRIPTION, EDITION_NAME, EDITION_SYMBOL};
use crate::receipt::ReceiptStatus;
use crate::submission::{MintState, SubmissionId};
use crate::utils::shorten_id;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Renders the mint panel: the edition being created and where the
/// current submission is.
pub fn render_mint_panel(f: &mut Frame, app: &mut App, area: Rect, time: u64) {
    let highlight_color = Color::LightBlue;
    let dim_color = Color::DarkGray;
    let animation_frame = (time % 4) as usize;

    let mint_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .title(" MINT EDITION ")
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(Color::Cyan));

    let mut mint_info = vec![
        Line::from("").alignment(Alignment::Center),
        Line::from(vec![
            Span::raw("╭─"),
            Span::styled("EDITION", Style::default().fg(highlight_color)),
            Span::raw("─╮"),
        ])
        .alignment(Alignment::Center),
        Line::from(vec![Span::styled(
            format!("{} ({})", EDITION_NAME, EDITION_SYMBOL),
            Style::default().fg(highlight_color).add_modifier(Modifier::BOLD),
        )])
        .alignment(Alignment::Center),
        Line::from(vec![Span::styled(
            EDITION_DESCRIPTION,
            Style::default().fg(dim_color),
        )])
        .alignment(Alignment::Center),
        Line::from(vec![
            Span::raw("╰"),
            Span::styled("──────", Style::default().fg(dim_color)),
            Span::raw("╯"),
        ])
        .alignment(Alignment::Center),
        Line::from("").alignment(Alignment::Center),
    ];

    if app.is_confirming {
        mint_info.extend(vec![
            Line::from(vec![Span::styled(
                "Mint this edition?",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )])
            .alignment(Alignment::Center),
            Line::from(vec![
                Span::styled("Y", Style::default().fg(highlight_color)),
                Span::styled(" confirm   ", Style::default().fg(dim_color)),
                Span::styled("N", Style::default().fg(highlight_color)),
                Span::styled(" cancel", Style::default().fg(dim_color)),
            ])
            .alignment(Alignment::Center),
        ]);
    } else if app.is_switching_network {
        mint_info.extend(vec![
            Line::from(vec![Span::styled(
                "SWITCH NETWORK",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )])
            .alignment(Alignment::Center),
            Line::from(vec![Span::styled(
                app.get_network_options(),
                Style::default().fg(highlight_color),
            )])
            .alignment(Alignment::Center),
            Line::from(vec![Span::styled(
                "Switching drops the wallet session",
                Style::default().fg(dim_color),
            )])
            .alignment(Alignment::Center),
        ]);
    } else {
        match app.mint.state() {
            MintState::Idle => {
                mint_info.push(
                    Line::from(vec![
                        Span::styled("Press ", Style::default().fg(dim_color)),
                        Span::styled("M", Style::default().fg(highlight_color)),
                        Span::styled(" to mint", Style::default().fg(dim_color)),
                    ])
                    .alignment(Alignment::Center),
                );
            }
            MintState::Submitting => {
                let spinner = ["◐", "◓", "◑", "◒"][animation_frame];
                mint_info.push(
                    Line::from(vec![
                        Span::styled(spinner, Style::default().fg(Color::Yellow)),
                        Span::styled(
                            " waiting for the wallet...",
                            Style::default().fg(Color::Yellow),
                        ),
                    ])
                    .alignment(Alignment::Center),
                );
            }
            MintState::Succeeded(id) => {
                let path = match id {
                    SubmissionId::Direct(_) => "direct",
                    SubmissionId::Batched(_) => "batched",
                };
                mint_info.extend(vec![
                    Line::from(vec![
                        Span::styled("SUBMITTED VIA: ", Style::default().fg(dim_color)),
                        Span::styled(path, Style::default().fg(Color::Green)),
                    ])
                    .alignment(Alignment::Center),
                    Line::from(vec![
                        Span::styled("ID: ", Style::default().fg(dim_color)),
                        Span::styled(
                            shorten_id(&id.to_string()),
                            Style::default().fg(highlight_color),
                        ),
                    ])
                    .alignment(Alignment::Center),
                ]);
            }
            MintState::Failed(reason) => {
                mint_info.extend(vec![
                    Line::from(vec![Span::styled(
                        "SUBMISSION FAILED",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )])
                    .alignment(Alignment::Center),
                    Line::from(vec![Span::styled(
                        textwrap::fill(reason, area.width.saturating_sub(6).max(20) as usize),
                        Style::default().fg(Color::Red),
                    )])
                    .alignment(Alignment::Center),
                ]);
            }
        }
    }

    let mint_widget = Paragraph::new(mint_info)
        .alignment(Alignment::Center)
        .block(mint_block);
    f.render_widget(mint_widget, area);
}

/// Renders the receipt panel fed by the canonical transaction hash.
pub fn render_receipt_panel(f: &mut Frame, app: &mut App, area: Rect) {
    let highlight_color = Color::LightBlue;
    let dim_color = Color::DarkGray;

    let receipt_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .title(" RECEIPT ")
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(Color::Cyan));

    let mut receipt_info = vec![Line::from("").alignment(Alignment::Center)];

    if let Some(hash) = app.receipt.hash() {
        receipt_info.push(
            Line::from(vec![
                Span::styled("TX: ", Style::default().fg(dim_color)),
                Span::styled(shorten_id(&hash.to_string()), Style::default().fg(highlight_color)),
            ])
            .alignment(Alignment::Center),
        );
    }

    match app.receipt.status() {
        ReceiptStatus::NoHash => {
            receipt_info.push(
                Line::from(vec![Span::styled(
                    "◈ No transaction to track ⦿",
                    Style::default().fg(dim_color),
                )])
                .alignment(Alignment::Center),
            );
        }
        ReceiptStatus::Pending => {
            receipt_info.push(
                Line::from(vec![Span::styled(
                    "Waiting for confirmation...",
                    Style::default().fg(Color::Yellow),
                )])
                .alignment(Alignment::Center),
            );
        }
        ReceiptStatus::Confirmed(receipt) => {
            let (label, color) = if receipt.success {
                ("CONFIRMED", Color::Green)
            } else {
                ("REVERTED", Color::Red)
            };
            receipt_info.extend(vec![
                Line::from(vec![Span::styled(
                    label,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )])
                .alignment(Alignment::Center),
                Line::from(vec![
                    Span::styled("BLOCK: ", Style::default().fg(dim_color)),
                    Span::styled(
                        receipt
                            .block_number
                            .map(|n| n.to_string())
                            .unwrap_or_else(|| "?".to_string()),
                        Style::default().fg(highlight_color),
                    ),
                    Span::styled("   GAS: ", Style::default().fg(dim_color)),
                    Span::styled(
                        receipt.gas_used.to_string(),
                        Style::default().fg(highlight_color),
                    ),
                ])
                .alignment(Alignment::Center),
            ]);
        }
        ReceiptStatus::LookupFailed(reason) => {
            receipt_info.extend(vec![
                Line::from(vec![Span::styled(
                    "LOOKUP FAILED",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )])
                .alignment(Alignment::Center),
                Line::from(vec![Span::styled(
                    textwrap::fill(reason, area.width.saturating_sub(6).max(20) as usize),
                    Style::default().fg(Color::Red),
                )])
                .alignment(Alignment::Center),
            ]);
        }
    }

    let receipt_widget = Paragraph::new(receipt_info)
        .alignment(Alignment::Center)
        .block(receipt_block);
    f.render_widget(receipt_widget, area);
}
