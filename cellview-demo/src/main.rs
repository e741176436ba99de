mod error;
mod paths;

use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use cellscreen::{Color, Event, Key, Rect, Terminal, TextAlign};
use cellview::{Table, TableCell, TableConfig, Widget};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::DemoError;

const LOREM: &str = "Lorem ipsum dolor sit amet, consetetur sadipscing elitr, sed diam nonumy \
    eirmod tempor invidunt ut labore et dolore magna aliquyam erat, sed diam voluptua. At vero \
    eos et accusam et justo duo dolores et ea rebum. Stet clita kasd gubergren, no sea takimata \
    sanctus est Lorem ipsum dolor sit amet.";

const ROWS: usize = 40;
const COLUMNS: usize = 20;

fn open_log(path: &Path) -> Result<File, DemoError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| DemoError::LogDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    File::create(path).map_err(|source| DemoError::LogFile {
        path: path.to_path_buf(),
        source,
    })
}

fn init_logging() -> Result<(), DemoError> {
    let path = paths::log_file();
    let file = open_log(&path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), file)?;
    log::info!("logging to {}", path.display());
    Ok(())
}

fn build_table(quit: Arc<AtomicBool>) -> Table {
    let config = TableConfig::new().fixed(1, 1).selectable(true, false);
    let table = Table::new().with_config(&config);
    table.set_frame_border(true);
    table.set_title("Table (Esc quits, Enter selects, b toggles borders, +/- scroll)");

    let words: Vec<&str> = LOREM.split_whitespace().collect();
    let mut word = 0;
    for row in 0..ROWS {
        for column in 0..COLUMNS {
            let color = if row < 1 || column < 1 {
                Color::hex(0xffff00)
            } else {
                Color::hex(0xffffff)
            };
            let mut cell = TableCell::new(format!("r{},c{},{}", row, column, words[word]))
                .with_align(TextAlign::Center);
            cell.set_text_color(color);
            table.set_cell(row, column, cell);
            word = (word + 1) % words.len();
        }
    }
    table.select(0, 0);

    let handle = table.clone();
    table.set_selected_func(move |row, column| {
        handle.update_cell(row, column, |cell| cell.set_text_color(Color::hex(0xff0000)));
        handle.set_selectable(false, false);
    });

    let handle = table.clone();
    table.set_done_func(move |key| match key {
        Key::Escape => quit.store(true, Ordering::SeqCst),
        Key::Enter => handle.set_selectable(true, true),
        _ => {}
    });

    table
}

fn run() -> Result<(), DemoError> {
    init_logging()?;

    let quit = Arc::new(AtomicBool::new(false));
    let table = build_table(Arc::clone(&quit));
    let mut terminal = Terminal::new()?;

    while !quit.load(Ordering::SeqCst) {
        let (width, height) = terminal.size();
        table.set_rect(Rect::from_size(width, height));
        terminal.draw(|buffer| table.draw(buffer))?;

        for event in terminal.poll(Some(Duration::from_millis(250)))? {
            match event {
                Event::Key {
                    key: Key::Char('b'),
                    modifiers,
                } if modifiers.none() => {
                    let bordered = table.with_state(|state| state.borders());
                    table.set_borders(!bordered);
                }
                Event::Key {
                    key: Key::Char(c @ ('+' | '-')),
                    ..
                } => {
                    let x = table.x_scroll().unwrap_or(0);
                    let x = if c == '+' { x + 1 } else { x.saturating_sub(1) };
                    table.set_x_scroll(x);
                }
                Event::Key { key, modifiers } => {
                    table.handle_key(key, modifiers);
                }
                Event::Mouse { action, x, y, .. } => {
                    table.handle_mouse(action, x, y);
                }
                Event::Resize { width, height } => {
                    log::debug!("resize to {}x{}", width, height);
                }
            }
        }
    }

    log::info!("demo finished");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
