use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{ExecutableCommand, QueueableCommand};
use maze_runner::solve::shortest_path;
use maze_runner::{Cell, CellState, Direction, MoveError, Session, Settings};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Stdout, Write};
use std::sync::Mutex;
use unicode_width::UnicodeWidthStr;

const CELL_W: usize = 2;
const PLAYER_NAME: &str = "terminal";

#[derive(Clone, Copy, PartialEq)]
enum Glyph {
    Player,
    Wall,
    Empty,
    Exit,
    Hint,
}

#[derive(Clone, Copy, PartialEq)]
struct Tile {
    glyph: Glyph,
    color: Color,
}

struct Renderer {
    last: Vec<Tile>,
    last_hud: String,
    last_status: String,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    fn new(size: usize) -> Self {
        Self {
            last: vec![
                Tile {
                    glyph: Glyph::Empty,
                    color: Color::Reset,
                };
                size * size
            ],
            last_hud: String::new(),
            last_status: String::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 1,
        }
    }
}

struct Screen {
    status: String,
    hint: HashSet<Cell>,
    show_hint: bool,
}

fn main() -> io::Result<()> {
    init_logging();
    let settings = Settings::from_env()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    let mut session = Session::new(settings);

    if std::env::var_os("MAZE_DUMP").is_some() {
        let json = serde_json::to_string_pretty(&session.state()).map_err(io::Error::from)?;
        println!("{json}");
        return Ok(());
    }

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout, &mut session);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

/// Logs go to the file named by `MAZE_LOG`; the terminal belongs to the game.
fn init_logging() {
    let Some(path) = std::env::var_os("MAZE_LOG") else {
        return;
    };
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("cannot open log file {}: {err}", path.to_string_lossy());
            return;
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "maze_runner=info".into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn run(stdout: &mut Stdout, session: &mut Session) -> io::Result<()> {
    let mut renderer = Renderer::new(session.maze().grid.size());
    let mut screen = Screen {
        status: String::from("Find the exit."),
        hint: HashSet::new(),
        show_hint: false,
    };
    render(stdout, session, &screen, &mut renderer)?;

    loop {
        let key = match event::read()? {
            Event::Key(key) => key,
            Event::Resize(_, _) => {
                renderer.needs_full = true;
                render(stdout, session, &screen, &mut renderer)?;
                continue;
            }
            _ => continue,
        };
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            continue;
        }
        let dir = match key.code {
            KeyCode::Char('q') => return Ok(()),
            KeyCode::Char('r') => {
                session.reset();
                screen.status = String::from("New maze. Find the exit.");
                screen.hint.clear();
                screen.show_hint = false;
                renderer.needs_full = true;
                render(stdout, session, &screen, &mut renderer)?;
                continue;
            }
            KeyCode::Char('?') => {
                screen.show_hint = !screen.show_hint;
                refresh_hint(session, &mut screen);
                render(stdout, session, &screen, &mut renderer)?;
                continue;
            }
            KeyCode::Char('k') | KeyCode::Up => Direction::Up,
            KeyCode::Char('j') | KeyCode::Down => Direction::Down,
            KeyCode::Char('h') | KeyCode::Left => Direction::Left,
            KeyCode::Char('l') | KeyCode::Right => Direction::Right,
            _ => continue,
        };

        screen.status = match session.step(dir, Some(PLAYER_NAME)) {
            Ok(outcome) if outcome.win => String::from("You escaped! (r for a new maze, q to quit)"),
            Ok(_) => String::new(),
            Err(MoveError::GameOver) => String::from("Game is over. (r for a new maze, q to quit)"),
            Err(err) => format!("{err}! You died."),
        };
        refresh_hint(session, &mut screen);
        render(stdout, session, &screen, &mut renderer)?;
    }
}

fn refresh_hint(session: &Session, screen: &mut Screen) {
    screen.hint.clear();
    if !screen.show_hint {
        return;
    }
    let maze = session.maze();
    let Some(path) = shortest_path(&maze.grid, session.player(), maze.exit) else {
        return;
    };
    let size = maze.grid.size();
    let mut pos = session.player();
    for dir in path {
        let Some(next) = pos.step(dir, size) else {
            break;
        };
        screen.hint.insert(next);
        pos = next;
    }
}

fn render(
    stdout: &mut Stdout,
    session: &Session,
    screen: &Screen,
    renderer: &mut Renderer,
) -> io::Result<()> {
    let size = session.maze().grid.size();
    let needed_h = (size + 3) as u16;
    let needed_w = (size * CELL_W) as u16;

    stdout.queue(MoveTo(0, 0))?;

    let (term_w, term_h) = terminal::size()?;
    if term_w < needed_w || term_h < needed_h {
        stdout.queue(Clear(ClearType::All))?;
        let msg = format!(
            "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
            needed_w, needed_h, term_w, term_h
        );
        stdout.queue(Print(msg))?;
        stdout.flush()?;
        renderer.needs_full = true;
        return Ok(());
    }

    let origin_x = (term_w - needed_w) / 2;
    let origin_y = (term_h - needed_h) / 2 + 1;
    if origin_x != renderer.origin_x || origin_y != renderer.origin_y {
        renderer.origin_x = origin_x;
        renderer.origin_y = origin_y;
        renderer.needs_full = true;
    }
    if renderer.needs_full {
        stdout.queue(Clear(ClearType::All))?;
    }

    let hud = format!(
        "Deaths: {}  Moves: {}  (hjkl/arrows move, ? hint, r reset, q quit)",
        session.death_count(),
        session.move_history().len()
    );
    if renderer.needs_full || hud != renderer.last_hud {
        stdout.queue(MoveTo(renderer.origin_x, renderer.origin_y - 1))?;
        stdout.queue(SetForegroundColor(Color::White))?;
        stdout.queue(Clear(ClearType::CurrentLine))?;
        stdout.queue(Print(&hud))?;
        stdout.queue(ResetColor)?;
        renderer.last_hud = hud;
    }

    for y in 0..size {
        for x in 0..size {
            let pos = Cell { x, y };
            let tile = tile_for(session, screen, pos);
            let idx = y * size + x;
            if renderer.needs_full || tile != renderer.last[idx] {
                renderer.last[idx] = tile;
                draw_tile(stdout, renderer, x, y, tile)?;
            }
        }
    }

    if renderer.needs_full || screen.status != renderer.last_status {
        stdout.queue(MoveTo(renderer.origin_x, renderer.origin_y + size as u16))?;
        stdout.queue(Clear(ClearType::CurrentLine))?;
        stdout.queue(SetForegroundColor(Color::Yellow))?;
        stdout.queue(Print(&screen.status))?;
        stdout.queue(ResetColor)?;
        renderer.last_status = screen.status.clone();
    }
    renderer.needs_full = false;

    stdout.flush()?;
    Ok(())
}

fn tile_for(session: &Session, screen: &Screen, pos: Cell) -> Tile {
    if pos == session.player() {
        return Tile {
            glyph: Glyph::Player,
            color: Color::Yellow,
        };
    }
    match session.maze().grid.get(pos) {
        CellState::Wall => Tile {
            glyph: Glyph::Wall,
            color: Color::Blue,
        },
        CellState::Exit => Tile {
            glyph: Glyph::Exit,
            color: Color::Green,
        },
        CellState::Empty if screen.hint.contains(&pos) => Tile {
            glyph: Glyph::Hint,
            color: Color::DarkGrey,
        },
        CellState::Empty => Tile {
            glyph: Glyph::Empty,
            color: Color::Reset,
        },
    }
}

fn draw_tile(stdout: &mut Stdout, renderer: &Renderer, x: usize, y: usize, tile: Tile) -> io::Result<()> {
    let text = match tile.glyph {
        Glyph::Player => "😃",
        Glyph::Wall => "██",
        Glyph::Empty => "  ",
        Glyph::Exit => "🚪",
        Glyph::Hint => "· ",
    };
    let x_pos = renderer.origin_x + (x * CELL_W) as u16;
    let y_pos = renderer.origin_y + y as u16;
    stdout.queue(MoveTo(x_pos, y_pos))?;
    stdout.queue(SetForegroundColor(tile.color))?;
    stdout.queue(Print(text))?;
    let w = UnicodeWidthStr::width(text);
    if w < CELL_W {
        for _ in 0..(CELL_W - w) {
            stdout.queue(Print(' '))?;
        }
    }
    stdout.queue(ResetColor)?;
    Ok(())
}
