// Demo harness for the numeric input field
//
// Renders a single NumberField in the middle of the terminal with a status
// panel echoing every change callback. All FormatConfig knobs are exposed
// as CLI flags so separator styles can be tried interactively:
//
//   cargo run --bin demo -- --thousand-separator . --decimal-separator , --allow-negative
//
// Keys: Tab focuses/blurs the field, Enter blurs, Up/Down step the value,
// q (while blurred) or Ctrl+C quits.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use numfield::{FieldState, FormatConfig, FormatResult, NumberField, NumberInput};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame, Terminal,
};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Interactive showcase for the numfield widget
#[derive(Parser)]
#[command(name = "numfield-demo")]
#[command(version, about = "Formatted numeric input field demo", long_about = None)]
struct Cli {
    /// Separator inserted every three integer digits
    #[arg(long, default_value = ",")]
    thousand_separator: char,

    /// Separator between integer and fractional parts
    #[arg(long, default_value = ".")]
    decimal_separator: char,

    /// Max digits kept after the decimal separator (clamped to 0..=15)
    #[arg(long, default_value_t = 2)]
    decimal_limit: u8,

    /// Honor a leading minus sign
    #[arg(long)]
    allow_negative: bool,

    /// Lower bound for arrow-key stepping
    #[arg(long)]
    min: Option<f64>,

    /// Upper bound for arrow-key stepping
    #[arg(long)]
    max: Option<f64>,

    /// Increment applied by Up/Down
    #[arg(long, default_value_t = 1.0)]
    step: f64,

    /// Initial value (canonical form, e.g. 1233.45)
    #[arg(long)]
    value: Option<String>,

    /// Placeholder text shown while empty
    #[arg(long, default_value = "Enter a number")]
    placeholder: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs default to warn so they never garble the alternate screen;
    // RUST_LOG=numfield=trace shows every edit commit.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "numfield=warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = FormatConfig {
        thousand_separator: cli.thousand_separator,
        decimal_separator: cli.decimal_separator,
        decimal_limit: cli.decimal_limit,
        allow_negative: cli.allow_negative,
        min: cli.min,
        max: cli.max,
        step: cli.step,
    };

    // Last callback triple, shared with the status panel.
    let last_change: Rc<RefCell<Option<FormatResult>>> = Rc::new(RefCell::new(None));
    let sink = last_change.clone();

    let mut field = NumberField::new(config).on_change(move |res: &FormatResult| {
        *sink.borrow_mut() = Some(res.clone());
    });
    if let Some(value) = &cli.value {
        field.set_value(value.as_str());
    }

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut field, &cli.placeholder, &last_change);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Synchronous event loop: draw, settle the deferred cursor, poll keys.
///
/// The `after_render` call sits between draw and poll on purpose: the
/// cursor fix must land after the frame commits and before the next input
/// event is processed.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    field: &mut NumberField,
    placeholder: &str,
    last_change: &Rc<RefCell<Option<FormatResult>>>,
) -> Result<()> {
    let mut focused = true;

    loop {
        terminal
            .draw(|f| draw(f, field, placeholder, focused, &last_change.borrow()))
            .context("Failed to draw terminal")?;
        field.after_render();

        if !event::poll(Duration::from_millis(200)).unwrap_or(false) {
            continue;
        }
        let Ok(Event::Key(key)) = event::read() else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Global handlers first, field second, fallbacks last.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(());
        }
        if key.code == KeyCode::Tab {
            focused = !focused;
            if !focused {
                field.blur();
            }
            continue;
        }

        if focused {
            if field.handle_key(key).was_handled() {
                continue;
            }
            if key.code == KeyCode::Esc {
                focused = false;
                field.blur();
            }
        } else {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Enter => focused = true,
                _ => {}
            }
        }
    }
}

fn draw(
    f: &mut Frame,
    field: &NumberField,
    placeholder: &str,
    focused: bool,
    last_change: &Option<FormatResult>,
) {
    let area = centered(f.area(), 46, 10);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // input field
            Constraint::Length(6), // status panel
            Constraint::Length(1), // key hints
        ])
        .split(area);

    let input = NumberInput::new()
        .label("Amount")
        .placeholder(placeholder)
        .focused(focused);
    input.render(f, chunks[0], field);

    let dim = Style::default().fg(Color::DarkGray);
    let mut status = vec![
        Line::from(format!("state:   {:?}", field.state())),
        Line::from(format!("value:   {:?}", field.value().unwrap_or(""))),
    ];
    match last_change {
        Some(res) if res.is_overflow() => {
            status.push(Line::styled("change:  overflow", Style::default().fg(Color::Red)));
        }
        Some(res) => {
            status.push(Line::from(format!("raw:     {:?}", res.raw)));
            status.push(Line::from(format!("numeric: {}", res.numeric)));
            status.push(Line::from(format!("display: {:?}", res.display)));
        }
        None => status.push(Line::styled("no edits yet", dim)),
    }
    f.render_widget(Paragraph::new(status), chunks[1]);

    let hints = if focused {
        "Tab/Enter blur - Up/Down step - Ctrl+C quit"
    } else if field.state() == FieldState::Blurred {
        "Enter edit - q quit"
    } else {
        "Tab focus - q quit"
    };
    f.render_widget(Paragraph::new(Line::styled(hints, dim)), chunks[2]);
}

/// Center a fixed-size box inside `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
