//! Rendering surface for the numeric field
//!
//! `NumberInput` draws a [`NumberField`] into a rectangle: a bordered block
//! whose title doubles as the field's label, placeholder text while empty,
//! and the hardware terminal cursor when focused. Presentation knobs are
//! builder methods; everything stateful lives on the field itself.

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::field::{cursor, NumberField};
use crate::theme::FieldTheme;

/// View over a [`NumberField`]
///
/// ```ignore
/// let input = NumberInput::new().label("Amount").placeholder("0.00").focused(true);
/// terminal.draw(|f| input.render(f, area, &field))?;
/// field.after_render();
/// ```
#[derive(Debug, Clone, Default)]
pub struct NumberInput<'a> {
    block: Option<Block<'a>>,
    label: Option<&'a str>,
    placeholder: Option<&'a str>,
    theme: FieldTheme,
    focused: bool,
}

impl<'a> NumberInput<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default bordered block entirely
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Title for the default block; serves as the field's visible label
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Text shown while the field is empty
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn theme(mut self, theme: FieldTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Focused fields get the highlight border and the terminal cursor
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Render the field into `area`.
    ///
    /// The display is scrolled horizontally so the cursor always stays
    /// visible in narrow areas.
    pub fn render(&self, f: &mut Frame, area: Rect, field: &NumberField) {
        let block = self.block.clone().unwrap_or_else(|| {
            let border_style = if self.focused {
                self.theme.focused_border
            } else {
                self.theme.border
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(self.theme.border_type)
                .border_style(border_style);
            match self.label {
                Some(label) => block.title(label),
                None => block,
            }
        });

        let inner = block.inner(area);
        f.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let width = inner.width as usize;
        let cursor_col = cursor::prefix_width(field.display(), field.cursor());
        // Scroll just enough to keep the cursor inside the visible window.
        let scroll = if cursor_col >= width {
            cursor_col + 1 - width
        } else {
            0
        };

        if field.display().is_empty() {
            if let Some(placeholder) = self.placeholder {
                let hint = Paragraph::new(placeholder).style(self.theme.placeholder);
                f.render_widget(hint, inner);
            }
        } else {
            let text = Paragraph::new(field.display())
                .style(self.theme.text)
                .scroll((0, scroll as u16));
            f.render_widget(text, inner);
        }

        if self.focused {
            let x = inner.x + (cursor_col - scroll) as u16;
            f.set_cursor_position((x, inner.y));
        }
    }
}
