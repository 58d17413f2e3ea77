//! Field styling
//!
//! A small bundle of ratatui styles consumed by the widget. Hosts with
//! their own theme systems can map into this; the default is legible on
//! both dark and light terminals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Styles for rendering a [`NumberField`](crate::NumberField)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTheme {
    /// Entered text
    pub text: Style,
    /// Placeholder shown while the field is empty
    pub placeholder: Style,
    /// Border while unfocused
    pub border: Style,
    /// Border while focused
    pub focused_border: Style,
    /// Border shape for the default block
    pub border_type: BorderType,
}

impl Default for FieldTheme {
    fn default() -> Self {
        Self {
            text: Style::default(),
            placeholder: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            border: Style::default().fg(Color::DarkGray),
            focused_border: Style::default().fg(Color::Cyan),
            border_type: BorderType::Rounded,
        }
    }
}
