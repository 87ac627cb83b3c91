//! Terminal demo using crossterm.
//!
//! This example demonstrates how to wire cursor_mini into a terminal application:
//! a tiny vi-style mode machine drives a resolver, and the resolved shape is
//! applied with `SetCursorStyle` after every key press.
//! Run with: cargo run --example modal_cursor

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::{
    cursor::{MoveTo, SetCursorStyle},
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    style::Print,
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use cursor_mini::{
    CursorShape, ShapeResolver,
    traits::CursorContext,
    types::{EditingMode, InputMode},
};

/// Demo host state implementing `CursorContext`.
struct DemoApp {
    editing_mode: EditingMode,
    input_mode: InputMode,
}

impl CursorContext for DemoApp {
    fn editing_mode(&self) -> EditingMode {
        self.editing_mode
    }

    fn input_mode(&self) -> InputMode {
        self.input_mode
    }
}

/// Map a symbolic shape to the crossterm escape sequence command.
fn cursor_style(shape: CursorShape) -> SetCursorStyle {
    match shape {
        CursorShape::Block => SetCursorStyle::SteadyBlock,
        CursorShape::Beam => SetCursorStyle::SteadyBar,
        CursorShape::Underline => SetCursorStyle::SteadyUnderScore,
        CursorShape::BlinkingBlock => SetCursorStyle::BlinkingBlock,
        CursorShape::BlinkingBeam => SetCursorStyle::BlinkingBar,
        CursorShape::BlinkingUnderline => SetCursorStyle::BlinkingUnderScore,
    }
}

fn draw(stdout: &mut io::Stdout, app: &DemoApp, shape: CursorShape) -> io::Result<()> {
    execute!(
        stdout,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print("cursor_mini demo"),
        MoveTo(0, 2),
        Print(format!(
            "editing mode: {:?}   input mode: {:?}   shape: {:?}",
            app.editing_mode, app.input_mode, shape
        )),
        MoveTo(0, 4),
        Print("i: insert   R: replace   Esc: navigation   e: toggle emacs/vi"),
        MoveTo(0, 5),
        Print("o: toggle fixed override   q: quit"),
        MoveTo(0, 7),
        cursor_style(shape),
    )?;
    stdout.flush()
}

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let mut app = DemoApp {
        editing_mode: EditingMode::Vi,
        input_mode: InputMode::Navigation,
    };

    // The deferred resolver re-reads this flag on every resolution, so
    // toggling it retargets the cursor without replacing the resolver.
    let override_fixed = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&override_fixed);
    let resolver = ShapeResolver::deferred(move || {
        if flag.load(Ordering::Relaxed) {
            ShapeResolver::fixed(CursorShape::BlinkingBlock)
        } else {
            ShapeResolver::mode_adaptive()
        }
    });

    draw(&mut stdout, &app, resolver.resolve(&app))?;

    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => break,
                KeyCode::Char('i') => app.input_mode = InputMode::Insert,
                KeyCode::Char('R') => app.input_mode = InputMode::Replace,
                KeyCode::Esc => app.input_mode = InputMode::Navigation,
                KeyCode::Char('e') => {
                    app.editing_mode = match app.editing_mode {
                        EditingMode::Emacs => EditingMode::Vi,
                        EditingMode::Vi => EditingMode::Emacs,
                    };
                }
                KeyCode::Char('o') => {
                    override_fixed.fetch_xor(true, Ordering::Relaxed);
                }
                _ => {}
            }
            draw(&mut stdout, &app, resolver.resolve(&app))?;
        }
    }

    execute!(stdout, SetCursorStyle::DefaultUserShape, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}
