//! Terminal preview of the overlay.
//!
//! Simulates an editor viewport over a small source snippet. One text row is
//! one line of `LINE_HEIGHT` pixels and one column is `CELL_WIDTH` pixels, so
//! the canvas can paint engine output in its own pixel space.

use anyhow::Result;
use bracket_overlay_engine::{
    BracketHighlightInput, BracketHighlightResult, BracketPair, Elbow, Frame, HighlightStyle,
    Position, compute_bracket_highlight,
};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame as TerminalFrame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Rectangle},
    },
};
use std::io::{Stdout, stdout};

const CELL_WIDTH: f64 = 8.0;
const LINE_HEIGHT: f64 = 16.0;
/// Columns reserved left of the text, so the margin line has room.
const GUTTER_COLUMNS: usize = 4;
/// Where the simulated overlay window sits on the simulated screen.
const WINDOW_ORIGIN: Position = Position { x: 300.0, y: 120.0 };

const SOURCE: &[&str] = &[
    "fn main() {",
    "    let items = vec![1, 2, 3];",
    "    for item in items {",
    "        if item > 1 {",
    "            println!(\"{item}\");",
    "        }",
    "    }",
    "",
    "    let total: i32 = [4, 5, 6].iter().sum();",
    "    println!(\"{total}\");",
    "}",
];

/// Row and column of a bracket glyph in `SOURCE`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TextPosition {
    row: usize,
    column: usize,
}

const fn at(row: usize, column: usize) -> TextPosition {
    TextPosition { row, column }
}

const PAIRS: &[(TextPosition, TextPosition)] = &[
    (at(2, 22), at(6, 4)),
    (at(0, 10), at(10, 0)),
    (at(3, 20), at(5, 8)),
    (at(1, 20), at(1, 28)),
];

struct PreviewApp {
    style: HighlightStyle,
    pair_index: usize,
    scroll_rows: usize,
    elbow_enabled: bool,
    elbow_left_most: bool,
    bottom_line_top: bool,
}

impl PreviewApp {
    fn new(style: HighlightStyle) -> Self {
        Self {
            style,
            pair_index: 0,
            scroll_rows: 0,
            elbow_enabled: true,
            elbow_left_most: false,
            bottom_line_top: false,
        }
    }

    fn scroll_down(&mut self) {
        if self.scroll_rows + 1 < SOURCE.len() {
            self.scroll_rows += 1;
        }
    }

    fn scroll_up(&mut self) {
        self.scroll_rows = self.scroll_rows.saturating_sub(1);
    }

    fn next_pair(&mut self) {
        self.pair_index = (self.pair_index + 1) % PAIRS.len();
    }

    /// Local frame of a glyph, or `None` if it is outside the viewport.
    fn glyph_frame(&self, position: TextPosition, viewport_height: f64) -> Option<Frame> {
        let frame = Frame::from_xywh(
            (GUTTER_COLUMNS + position.column) as f64 * CELL_WIDTH,
            (position.row as f64 - self.scroll_rows as f64) * LINE_HEIGHT,
            CELL_WIDTH,
            LINE_HEIGHT,
        );
        let visible = frame.min_y() >= 0.0 && frame.max_y() <= viewport_height;
        visible.then_some(frame)
    }

    /// Left-most text column between the rows after the opening bracket and the closing one.
    fn elbow_x(&self, opening: TextPosition, closing: TextPosition) -> f64 {
        let left_most = SOURCE[opening.row + 1..=closing.row]
            .iter()
            .filter_map(|line| line.find(|c: char| !c.is_whitespace()))
            .chain([closing.column])
            .min()
            .unwrap_or(closing.column);
        (GUTTER_COLUMNS + left_most) as f64 * CELL_WIDTH
    }

    /// Builds the locator update in simulated screen coordinates.
    fn input(&self, viewport_height: f64) -> BracketHighlightInput {
        let (opening, closing) = PAIRS[self.pair_index];
        let brackets = BracketPair::new(
            self.glyph_frame(opening, viewport_height),
            self.glyph_frame(closing, viewport_height),
        );

        let elbow = (self.elbow_enabled && opening.row != closing.row).then(|| {
            let elbow_y = match brackets.last {
                Some(last) => last.min_y(),
                None => viewport_height,
            };
            Elbow {
                origin: Position::new(self.elbow_x(opening, closing), elbow_y),
                origin_x_left_most: self.elbow_left_most,
                bottom_line_top: self.bottom_line_top,
            }
            .to_global(&WINDOW_ORIGIN)
        });

        BracketHighlightInput {
            brackets: brackets.map(|frame| frame.to_global(&WINDOW_ORIGIN)),
            reference_origin: WINDOW_ORIGIN,
            viewport_height,
            elbow,
        }
    }
}

pub fn run(style: HighlightStyle) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = PreviewApp::new(style);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut PreviewApp) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                KeyCode::Tab => app.next_pair(),
                KeyCode::Char('e') => app.elbow_enabled = !app.elbow_enabled,
                KeyCode::Char('l') => app.elbow_left_most = !app.elbow_left_most,
                KeyCode::Char('b') => app.bottom_line_top = !app.bottom_line_top,
                _ => {}
            }
        }
    }
}

fn ui(f: &mut TerminalFrame, app: &PreviewApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)].as_ref())
        .split(f.area());

    let block = Block::default().borders(Borders::ALL).title("Overlay");
    let viewport = block.inner(chunks[0]);
    let viewport_width = f64::from(viewport.width) * CELL_WIDTH;
    let viewport_height = f64::from(viewport.height) * LINE_HEIGHT;

    let input = app.input(viewport_height);
    let result = compute_bracket_highlight(&input, &app.style);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, viewport_width])
        .y_bounds([0.0, viewport_height])
        .paint(|ctx| {
            for (row, text) in SOURCE.iter().enumerate().skip(app.scroll_rows) {
                let top = (row - app.scroll_rows) as f64 * LINE_HEIGHT;
                if top + LINE_HEIGHT > viewport_height {
                    break;
                }
                ctx.print(
                    GUTTER_COLUMNS as f64 * CELL_WIDTH,
                    viewport_height - top - LINE_HEIGHT / 2.0,
                    Span::styled(text.to_string(), Style::default().fg(Color::Gray)),
                );
            }
            ctx.layer();
            for (frame, color) in painted_frames(&result) {
                ctx.draw(&to_canvas_rect(frame, viewport_height, color));
            }
        });
    f.render_widget(canvas, chunks[0]);

    render_status(f, chunks[1], app);
}

fn painted_frames(result: &BracketHighlightResult) -> impl Iterator<Item = (Frame, Color)> {
    let lines = result.guide_lines().map(|frame| (frame, Color::Yellow));
    let boxes = result.boxes().map(|frame| (frame, Color::Cyan));
    lines.chain(boxes)
}

/// Canvas space is y-up; overlay space is y-down.
fn to_canvas_rect(frame: Frame, viewport_height: f64, color: Color) -> Rectangle {
    Rectangle {
        x: frame.origin.x,
        y: viewport_height - frame.max_y(),
        width: frame.size.width,
        height: frame.size.height,
        color,
    }
}

fn render_status(f: &mut TerminalFrame, area: Rect, app: &PreviewApp) {
    let on_off = |flag: bool| if flag { "on" } else { "off" };
    let status = Line::from(vec![
        Span::raw(format!("pair {}/{} | ", app.pair_index + 1, PAIRS.len())),
        Span::raw(format!("elbow: {} | ", on_off(app.elbow_enabled))),
        Span::raw(format!("left-most: {} | ", on_off(app.elbow_left_most))),
        Span::raw(format!("bottom-line-top: {}", on_off(app.bottom_line_top))),
    ]);
    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Scroll | "),
        Span::raw("Tab: Next pair | "),
        Span::raw("e: Elbow | l: Left-most | b: Bottom line top"),
    ]);

    f.render_widget(Paragraph::new(vec![status, help]), area);
}
