//! Custom TUI widgets

use crate::scanner::{DecoderState, FocusClassification, ScanDecoder};
use crate::ui::app::ScanRecord;
use crate::ui::theme::ThemeColors;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

/// Live decoder status: state, current token, pulse, gating inputs
pub struct DecoderPanel<'a> {
    decoder: &'a ScanDecoder,
    classification: FocusClassification,
    echo: &'a str,
    colors: ThemeColors,
}

impl<'a> DecoderPanel<'a> {
    pub fn new(
        decoder: &'a ScanDecoder,
        classification: FocusClassification,
        echo: &'a str,
        colors: ThemeColors,
    ) -> Self {
        Self {
            decoder,
            classification,
            echo,
            colors,
        }
    }

    fn state_span(&self) -> Span<'static> {
        let (label, color) = if !self.decoder.is_enabled() {
            ("DISABLED", self.colors.err)
        } else {
            match self.decoder.state() {
                DecoderState::Gated => ("PAUSED (input focused)", self.colors.warn),
                DecoderState::Accumulating => ("ACCUMULATING", self.colors.accent),
                DecoderState::Idle => ("LISTENING", self.colors.ok),
            }
        };
        Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD))
    }

    fn classification_label(&self) -> &'static str {
        match self.classification {
            FocusClassification::TextEntry => "text entry",
            FocusClassification::Other => "other",
            FocusClassification::None => "none",
        }
    }
}

impl<'a> Widget for DecoderPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Decoder ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.colors.dim));

        let inner = block.inner(area);
        block.render(area, buf);

        let label_style = Style::default().fg(self.colors.dim);
        let value_style = Style::default().fg(self.colors.fg);

        let token_line = match self.decoder.current_token() {
            Some(token) => Line::from(vec![
                Span::styled("Last token: ", label_style),
                Span::styled(
                    token.to_string(),
                    Style::default()
                        .fg(self.colors.fg)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            None => Line::from(vec![
                Span::styled("Last token: ", label_style),
                Span::styled("-", Style::default().fg(self.colors.dim)),
            ]),
        };

        let pulse_line = if self.decoder.is_scanning() {
            Line::from(Span::styled(
                "** SCANNING **",
                Style::default()
                    .fg(self.colors.pulse)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled("", Style::default()))
        };

        let lines = [
            Line::from(vec![Span::styled("State: ", label_style), self.state_span()]),
            token_line,
            pulse_line,
            Line::from(vec![
                Span::styled("Focused control: ", label_style),
                Span::styled(self.classification_label().to_string(), value_style),
            ]),
            Line::from(vec![
                Span::styled("Passthrough: ", label_style),
                Span::styled(self.echo.to_string(), value_style),
            ]),
        ];

        for (i, line) in lines.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            buf.set_line(inner.x, y, line, inner.width);
        }
    }
}

/// Scrolling list of completed scans, newest at the top
pub struct ScanLogPanel<'a> {
    records: &'a [ScanRecord],
    colors: ThemeColors,
}

impl<'a> ScanLogPanel<'a> {
    pub fn new(records: &'a [ScanRecord], colors: ThemeColors) -> Self {
        Self { records, colors }
    }
}

impl<'a> Widget for ScanLogPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Scan log ({}) ", self.records.len());
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.colors.dim));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut y = inner.y;
        for record in self.records.iter().rev() {
            if y >= inner.y + inner.height {
                break;
            }

            let line = Line::from(vec![
                Span::styled(
                    record.at.format("%H:%M:%S ").to_string(),
                    Style::default().fg(self.colors.dim),
                ),
                Span::styled(
                    record.token.clone(),
                    Style::default().fg(self.colors.fg),
                ),
                Span::styled(
                    format!("  ({} chars)", record.token.chars().count()),
                    Style::default().fg(self.colors.dim),
                ),
            ]);

            buf.set_line(inner.x, y, &line, inner.width);
            y += 1;
        }

        if self.records.is_empty() {
            buf.set_string(
                inner.x,
                inner.y,
                "No scans yet - fire a scanner at the terminal",
                Style::default().fg(self.colors.dim),
            );
        }
    }
}

/// The demo notes field: a real text-entry control that gates the decoder
pub struct NotesField<'a> {
    content: &'a str,
    focused: bool,
    colors: ThemeColors,
}

impl<'a> NotesField<'a> {
    pub fn new(content: &'a str, focused: bool, colors: ThemeColors) -> Self {
        Self {
            content,
            focused,
            colors,
        }
    }
}

impl<'a> Widget for NotesField<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            self.colors.accent
        } else {
            self.colors.dim
        };
        let block = Block::default()
            .title(if self.focused {
                " Notes [focused] "
            } else {
                " Notes "
            })
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut style = Style::default().fg(self.colors.fg);
        if self.focused {
            style = style.bg(self.colors.field_focus);
        }

        // Show the tail when the content is wider than the field
        let width = inner.width as usize;
        let cursor = if self.focused { "_" } else { "" };
        let shown: String = self
            .content
            .chars()
            .rev()
            .take(width.saturating_sub(1))
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        buf.set_string(inner.x, inner.y, format!("{}{}", shown, cursor), style);
    }
}

/// Widget for the help screen
pub struct HelpPanel;

impl Widget for HelpPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Help - Scanwedge")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        block.render(area, buf);

        let help_text = vec![
            "",
            " CONTROLS",
            " -----------",
            " Tab              : Move focus between scan pane and notes field",
            " Ctrl+E           : Enable/disable the decoder",
            " Ctrl+R           : Reset the decoder (clear buffer and token)",
            " Ctrl+L           : Clear the scan log",
            " F1 / Ctrl+H      : Toggle this help",
            " Esc / Ctrl+C     : Quit",
            "",
            " HOW IT WORKS",
            " -----------",
            " A barcode scanner types a whole code in a few milliseconds and",
            " then goes quiet. The decoder buffers characters and emits a",
            " token once no key arrives for the configured silence gap",
            " (default 50 ms). Slow human typing never survives the length",
            " check and is dropped.",
            "",
            " While the notes field is focused the decoder pauses, so typed",
            " text lands in the field instead of being swallowed as a scan.",
            " Unfocus the terminal or press Tab to see the gating change.",
            "",
            " Configuration lives in scanwedge/config.toml in the platform",
            " config directory.",
        ];

        for (i, line) in help_text.iter().enumerate() {
            if i as u16 >= inner.height {
                break;
            }
            let style = if line.starts_with(" ") && line.contains("---") {
                Style::default().fg(Color::DarkGray)
            } else if line.starts_with(" ")
                && line.chars().nth(1).map(|c| c.is_uppercase()).unwrap_or(false)
            {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            buf.set_string(inner.x, inner.y + i as u16, line, style);
        }
    }
}

/// Status bar widget
pub struct StatusBar<'a> {
    state: &'a str,
    focus: &'a str,
    elapsed: &'a str,
    keys: u64,
    message: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a str, focus: &'a str, elapsed: &'a str, keys: u64) -> Self {
        Self {
            state,
            focus,
            elapsed,
            keys,
            message: None,
        }
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.x..area.x + area.width {
            buf.set_string(x, area.y, " ", bg_style);
        }

        // Left side: decoder state and focused control
        let left = format!(" {} | {} ", self.state, self.focus);
        buf.set_string(area.x, area.y, &left, bg_style.add_modifier(Modifier::BOLD));

        // Center: message if any
        if let Some(msg) = self.message {
            let msg_style = Style::default().bg(Color::DarkGray).fg(Color::Yellow);
            let msg_x = area.x + (area.width / 2).saturating_sub(msg.len() as u16 / 2);
            buf.set_string(msg_x, area.y, msg, msg_style);
        }

        // Right side: elapsed time and keystroke count
        let right = format!(" {} | Keys: {} ", self.elapsed, self.keys);
        let right_x = area.x + area.width.saturating_sub(right.len() as u16);
        buf.set_string(right_x, area.y, &right, bg_style);
    }
}

/// Tab bar widget
pub struct TabBar<'a> {
    tabs: &'a [&'a str],
    selected: usize,
}

impl<'a> TabBar<'a> {
    pub fn new(tabs: &'a [&'a str], selected: usize) -> Self {
        Self { tabs, selected }
    }
}

impl<'a> Widget for TabBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut x = area.x;

        for (i, tab) in self.tabs.iter().enumerate() {
            let is_selected = i == self.selected;

            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White).bg(Color::DarkGray)
            };

            let label = format!(" {} ", tab);
            let width = label.len() as u16;

            if x + width <= area.x + area.width {
                buf.set_string(x, area.y, &label, style);
                x += width;

                // Separator
                if i < self.tabs.len() - 1 && x < area.x + area.width {
                    buf.set_string(x, area.y, "|", Style::default().fg(Color::DarkGray));
                    x += 1;
                }
            }
        }

        // Fill rest with background
        for fill_x in x..area.x + area.width {
            buf.set_string(fill_x, area.y, " ", Style::default().bg(Color::DarkGray));
        }
    }
}
