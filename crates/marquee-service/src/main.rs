//! Marquee ticketing console.
//!
//! Interactive front end over the ticketing flows. Commands map to the
//! flows one to one, and every piece of state lives in the store, so
//! quitting and restarting on the same data directory resumes where
//! things left off.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marquee_core::{MovieId, SeatCode, SeatGrid, MAX_TICKETS_PER_MOVIE};
use marquee_service::{AppState, SeatSelection, SeatToggle, ServiceConfig, SystemClock};
use marquee_store::{keys, RocksKv};

const PROMPT: &str = "marquee> ";
const SEATS_PROMPT: &str = "seats> ";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,marquee_service=debug,marquee_store=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting marquee console");

    let config = ServiceConfig::from_env();
    tracing::info!(
        data_dir = %config.data_dir,
        seats = config.grid.seat_count(),
        "Service configuration loaded"
    );

    let store = RocksKv::open(&config.data_dir)?;
    let state = AppState::new(Arc::new(store), Arc::new(SystemClock), config);

    state.watcher.subscribe(|key| {
        tracing::debug!(key, "Storage updated");
    });

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    run(&state, &mut input, &mut out)?;
    Ok(())
}

fn run<R, W>(state: &AppState, input: &mut R, out: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "marquee ticketing console. Type `help` for commands.")?;

    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut parts = trimmed.split_whitespace();
        let command = parts.next().unwrap_or_default();

        match command {
            "quit" | "exit" => return Ok(()),
            "help" => write_help(out)?,
            "movies" => list_movies(state, out)?,
            "signup" => sign_up(state, parts.next(), parts.next(), out)?,
            "login" => log_in(state, parts.next(), parts.next(), out)?,
            "logout" => log_out(state, out)?,
            "whoami" => whoami(state, out)?,
            "seats" => seats(state, parts.next(), input, out)?,
            "tickets" => list_tickets(state, out)?,
            "cancel" => cancel(state, parts.next(), input, out)?,
            _ => writeln!(out, "unknown command `{command}`; type `help`")?,
        }
    }
}

fn list_movies<W: Write>(state: &AppState, out: &mut W) -> io::Result<()> {
    for movie in state.box_office.movies() {
        writeln!(out, "{:>3}  {}", movie.id, movie.title)?;
    }
    Ok(())
}

fn sign_up<W: Write>(
    state: &AppState,
    email: Option<&str>,
    password: Option<&str>,
    out: &mut W,
) -> io::Result<()> {
    let (email, password) = match email.zip(password) {
        Some(pair) => pair,
        None => return writeln!(out, "usage: signup <email> <password>"),
    };

    match state.sessions.sign_up(email, password) {
        Ok(()) => {
            state.watcher.notify(keys::USERS);
            writeln!(out, "Account created. Log in to buy tickets.")
        }
        Err(e) => writeln!(out, "error: {e}"),
    }
}

fn log_in<W: Write>(
    state: &AppState,
    email: Option<&str>,
    password: Option<&str>,
    out: &mut W,
) -> io::Result<()> {
    let (email, password) = match email.zip(password) {
        Some(pair) => pair,
        None => return writeln!(out, "usage: login <email> <password>"),
    };

    match state.sessions.log_in(email, password) {
        Ok(_) => {
            state.watcher.notify(keys::CURRENT_USER);
            writeln!(out, "Logged in as {email}.")
        }
        Err(e) => writeln!(out, "error: {e}"),
    }
}

fn log_out<W: Write>(state: &AppState, out: &mut W) -> io::Result<()> {
    match state.sessions.log_out() {
        Ok(()) => {
            state.watcher.notify(keys::CURRENT_USER);
            writeln!(out, "Logged out.")
        }
        Err(e) => writeln!(out, "error: {e}"),
    }
}

fn whoami<W: Write>(state: &AppState, out: &mut W) -> io::Result<()> {
    match state.sessions.session() {
        Ok(session) => match session.email() {
            Some(email) => writeln!(out, "Logged in as {email}."),
            None => writeln!(out, "Not logged in."),
        },
        Err(e) => writeln!(out, "error: {e}"),
    }
}

fn seats<R, W>(
    state: &AppState,
    movie_id: Option<&str>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let movie_id = match movie_id.and_then(|raw| raw.parse::<MovieId>().ok()) {
        Some(id) => id,
        None => return writeln!(out, "usage: seats <movie-id>"),
    };

    let mut selection = match state.box_office.start_selection(movie_id) {
        Ok(selection) => selection,
        Err(e) => return writeln!(out, "error: {e}"),
    };

    render_seats(&selection, state.config.grid, out)?;
    writeln!(out, "Commands: toggle <seat>, confirm, refresh, map, back")?;

    let mut line = String::new();
    loop {
        write!(out, "{SEATS_PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let trimmed = line.trim();
        let mut parts = trimmed.split_whitespace();
        let command = parts.next().unwrap_or_default();

        match command {
            "" => {}
            "back" => return Ok(()),
            "map" => render_seats(&selection, state.config.grid, out)?,
            "refresh" => match selection.refresh() {
                Ok(()) => render_seats(&selection, state.config.grid, out)?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            "toggle" => {
                let seat = match parts.next() {
                    Some(code) => SeatCode::new(code),
                    None => {
                        writeln!(out, "usage: toggle <seat>")?;
                        continue;
                    }
                };

                if !state.config.grid.contains(&seat) {
                    writeln!(out, "unknown seat `{seat}`")?;
                    continue;
                }

                match selection.toggle_seat(&seat) {
                    Ok(SeatToggle::Selected) => writeln!(out, "Selected {seat}.")?,
                    Ok(SeatToggle::Deselected) => writeln!(out, "Deselected {seat}.")?,
                    Ok(SeatToggle::Ignored) => writeln!(out, "Seat {seat} is taken.")?,
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            "confirm" => match selection.confirm() {
                Ok(ticket) => {
                    state
                        .watcher
                        .notify(&keys::occupied_seats_key(ticket.movie_id));
                    if let Some(email) = current_email(state) {
                        state.watcher.notify(&keys::tickets_key(&email));
                    }

                    writeln!(
                        out,
                        "Purchase confirmed: {} on {}, seats {}.",
                        ticket.movie_title,
                        ticket.purchase_date,
                        join_seats(&ticket.seats)
                    )?;
                }
                Err(e) => writeln!(out, "error: {e}")?,
            },
            _ => writeln!(out, "unknown command `{command}`")?,
        }
    }
}

fn render_seats<W: Write>(
    selection: &SeatSelection<'_>,
    grid: SeatGrid,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{} (x taken, * selected)", selection.movie().title)?;

    let mut codes = grid.seat_codes();
    for _ in 0..grid.rows {
        let mut cells = Vec::new();
        for _ in 0..grid.cols {
            if let Some(code) = codes.next() {
                let marker = if selection.is_occupied(&code) {
                    "x"
                } else if selection.is_selected(&code) {
                    "*"
                } else {
                    ""
                };
                cells.push(format!("{:<5}", format!("{code}{marker}")));
            }
        }
        writeln!(out, "{}", cells.join(" ").trim_end())?;
    }

    writeln!(
        out,
        "Selected: {} | Owned for this movie: {} of {MAX_TICKETS_PER_MOVIE}",
        join_seats(selection.selected()),
        selection.owned(),
    )
}

fn list_tickets<W: Write>(state: &AppState, out: &mut W) -> io::Result<()> {
    let email = match current_email(state) {
        Some(email) => email,
        None => return writeln!(out, "Not logged in."),
    };

    match state.box_office.tickets_for(&email) {
        Ok(tickets) if tickets.is_empty() => writeln!(out, "No tickets."),
        Ok(tickets) => {
            for (index, ticket) in tickets.iter().enumerate() {
                writeln!(
                    out,
                    "{:>3}  {} | {} | seats {}",
                    index + 1,
                    ticket.movie_title,
                    ticket.purchase_date,
                    join_seats(&ticket.seats)
                )?;
            }
            Ok(())
        }
        Err(e) => writeln!(out, "error: {e}"),
    }
}

fn cancel<R, W>(
    state: &AppState,
    index: Option<&str>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let email = match current_email(state) {
        Some(email) => email,
        None => return writeln!(out, "Not logged in."),
    };

    let index = match index.and_then(|raw| raw.parse::<usize>().ok()) {
        Some(index) if index >= 1 => index,
        _ => return writeln!(out, "usage: cancel <ticket-number>"),
    };

    let tickets = match state.box_office.tickets_for(&email) {
        Ok(tickets) => tickets,
        Err(e) => return writeln!(out, "error: {e}"),
    };

    let ticket = match tickets.get(index - 1) {
        Some(ticket) => ticket.clone(),
        None => return writeln!(out, "no ticket number {index}; see `tickets`"),
    };

    write!(
        out,
        "Cancel {} ({}, seats {})? [y/N] ",
        ticket.movie_title,
        ticket.purchase_date,
        join_seats(&ticket.seats)
    )?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    if !answer.trim().eq_ignore_ascii_case("y") {
        return writeln!(out, "Kept.");
    }

    match state.box_office.cancel_purchase(&email, &ticket) {
        Ok(()) => {
            state.watcher.notify(&keys::tickets_key(&email));
            state
                .watcher
                .notify(&keys::occupied_seats_key(ticket.movie_id));
            writeln!(out, "Purchase cancelled and seats released.")
        }
        Err(e) => writeln!(out, "error: {e}"),
    }
}

fn current_email(state: &AppState) -> Option<String> {
    state
        .sessions
        .session()
        .ok()
        .and_then(|s| s.email().map(str::to_string))
}

fn join_seats(seats: &[SeatCode]) -> String {
    if seats.is_empty() {
        return "none".to_string();
    }

    seats
        .iter()
        .map(SeatCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Commands:\n\
         \n\
         movies                     List the catalog\n\
         signup <email> <password>  Register an account\n\
         login <email> <password>   Log in\n\
         logout                     Log out\n\
         whoami                     Show the current session\n\
         seats <movie-id>           Open the seat map for a movie\n\
         tickets                    List your tickets\n\
         cancel <ticket-number>     Cancel a purchase\n\
         help                       Show this help\n\
         quit                       Exit\n",
    )
}
