//! numfield - formatted numeric input field for ratatui terminal UIs
//!
//! A single-line text field that accepts free-form numeric entry,
//! normalizes it into a canonical decimal value, and shows a
//! separator-formatted display string.
//!
//! Architecture:
//! - Format engine ([`parse`]/[`format`]): abbreviation expansion (k/m/b/t),
//!   separator handling, precision limits, overflow guarding
//! - Interaction controller ([`NumberField`]): edit state machine, keyboard
//!   stepping, cursor reconciliation after every reformat
//! - Widget ([`NumberInput`]): ratatui rendering surface
//!
//! ```no_run
//! use numfield::{FormatConfig, NumberField, NumberInput};
//!
//! let config = FormatConfig { decimal_limit: 2, ..FormatConfig::default() };
//! let mut field = NumberField::new(config)
//!     .with_value("1233.45")
//!     .on_change(|res| println!("{} = {}", res.raw, res.numeric));
//!
//! // in the event loop: feed key events, render, then settle the cursor
//! // field.handle_key(key);
//! // terminal.draw(|f| NumberInput::new().focused(true).render(f, area, &field))?;
//! // field.after_render();
//! ```

pub mod config;
pub mod field;
pub mod format;
pub mod theme;
pub mod widget;

pub use config::{FormatConfig, MAX_DECIMAL_LIMIT};
pub use field::{FieldState, Handled, NumberField};
pub use format::{format, parse, FormatResult, RawValue};
pub use theme::FieldTheme;
pub use widget::NumberInput;
