//! Single binary console frontend: interactive menu over the tournament core.
//! Run with: cargo run --bin cli
//! Preloads a starter roster so the menu is usable immediately.
//! Override with env: ROSTER (comma-separated names; set empty to start with
//! no players).

use std::io::{self, Write};
use std::process;

use chess_tournament_cli::{
    pair_round, record_round_results, standings, Outcome, Player, Tournament, TournamentError,
    WithdrawStatus,
};
use crossterm::style::Stylize;

/// Roster loaded at startup when ROSTER is not set.
const DEFAULT_ROSTER: &[&str] = &["Magnus", "Hikaru", "Fabiano", "Anish", "Alireza"];

fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let mut tournament = Tournament::new();
    for name in roster_from_env() {
        let id = tournament.register_player(&name);
        log::info!("Preloaded player '{}' with ID {}", name, id);
    }

    loop {
        print_menu();
        let choice = match read_input("Enter your choice: ")? {
            Some(line) => line,
            None => break,
        };
        match choice.as_str() {
            "1" => add_player(&mut tournament)?,
            "2" => withdraw_player(&mut tournament)?,
            "3" => print_standings(&tournament),
            "4" => pair_next_round(&mut tournament),
            "5" => enter_results(&mut tournament),
            "6" => reset_tournament(&mut tournament)?,
            "7" => break,
            _ => println!(
                "{} Please select a valid option.",
                "Invalid choice.".red()
            ),
        }
    }
    println!("Exiting tournament manager. Goodbye!");
    Ok(())
}

/// Starter roster: ROSTER env var (comma-separated, may be empty) or the
/// built-in default.
fn roster_from_env() -> Vec<String> {
    match std::env::var("ROSTER") {
        Ok(value) => value
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect(),
        Err(_) => DEFAULT_ROSTER.iter().map(|&n| n.to_string()).collect(),
    }
}

fn print_menu() {
    println!("\n{}", "--- Chess Tournament Menu ---".magenta());
    println!("1. Add Player");
    println!("2. Withdraw Player");
    println!("3. View Standings");
    println!("4. Start Next Round & Generate Pairings");
    println!("5. Enter Round Results");
    println!("6. Reset Tournament");
    println!("7. Exit");
    println!("{}", "-".repeat(29));
}

/// Print `prompt` and read one trimmed line. None on end of input.
fn read_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn add_player(tournament: &mut Tournament) -> io::Result<()> {
    let Some(name) = read_input("Enter player name: ")? else {
        return Ok(());
    };
    if name.is_empty() {
        println!("{} Player name cannot be empty.", "Error:".red());
        return Ok(());
    }
    let id = tournament.register_player(&name);
    println!(
        "{} Added player '{}' with ID {}.",
        "Success:".green(),
        name,
        id
    );
    Ok(())
}

fn withdraw_player(tournament: &mut Tournament) -> io::Result<()> {
    let Some(raw) = read_input("Enter player ID to withdraw: ")? else {
        return Ok(());
    };
    let id = match raw.parse() {
        Ok(id) => id,
        Err(_) => {
            println!("{} Invalid ID. Please enter a number.", "Error:".red());
            return Ok(());
        }
    };
    match tournament.withdraw_player(id) {
        Ok(WithdrawStatus::Withdrawn) => {
            let name = tournament.player(id).map(|p| p.name.clone()).unwrap_or_default();
            println!(
                "{} Player {} has been withdrawn from the tournament.",
                "Success:".green(),
                name
            );
        }
        Ok(WithdrawStatus::AlreadyWithdrawn) => {
            let name = tournament.player(id).map(|p| p.name.clone()).unwrap_or_default();
            println!("{} Player {} is already withdrawn.", "Info:".yellow(), name);
        }
        Err(e) => println!("{} {}.", "Error:".red(), e),
    }
    Ok(())
}

fn print_standings(tournament: &Tournament) {
    println!(
        "\n--- {} ---",
        format!(
            "Tournament Standings after Round {}",
            tournament.current_round
        )
        .magenta()
        .bold()
    );
    println!(
        "{:<5} {:<5} {:<20} {:<12} {:<8} {:<8}",
        "Rank", "ID", "Name", "Status", "Score", "Rating"
    );
    println!("{}", "-".repeat(60));
    for row in standings(tournament) {
        // Pad before coloring so the escape codes do not skew the column.
        let status = if row.withdrawn {
            format!("{:<12}", "Withdrawn").red()
        } else {
            format!("{:<12}", "Active").green()
        };
        println!(
            "{:<5} {:<5} {:<20} {} {:<8.1} {:<8}",
            row.rank, row.id, row.name, status, row.score, row.rating
        );
    }
    println!("{}", "-".repeat(60));
}

fn pair_next_round(tournament: &mut Tournament) {
    match pair_round(tournament) {
        Ok(()) => {
            if let Some(id) = tournament.bye_player {
                let name = tournament.player(id).map(|p| p.name.clone()).unwrap_or_default();
                println!(
                    "{} {} receives a bye and 1 point.",
                    "INFO:".blue(),
                    name
                );
            }
            println!(
                "\n--- {} ---",
                format!("Pairings for Round {}", tournament.current_round).magenta()
            );
            for pairing in &tournament.pairings {
                let white = tournament.player(pairing.white).map(|p| p.name.as_str()).unwrap_or("?");
                let black = tournament.player(pairing.black).map(|p| p.name.as_str()).unwrap_or("?");
                println!("{} vs {}", white.blue(), black.blue());
            }
            println!("{}", "-".repeat(30));
        }
        Err(TournamentError::InvalidState) => println!(
            "{} Cannot pair a new round until results for the current round are entered.",
            "Error:".red()
        ),
        Err(TournamentError::NoValidPairing) => {
            println!("{} No valid pairings could be made.", "Warning:".yellow())
        }
        Err(e) => println!("{} {}.", "Error:".red(), e),
    }
}

fn enter_results(tournament: &mut Tournament) {
    if !tournament.round_pending() {
        println!(
            "{} No pairings exist for the current round.",
            "Error:".red()
        );
        return;
    }
    println!(
        "\n--- {} ---",
        format!("Enter Results for Round {}", tournament.current_round).magenta()
    );
    let round = tournament.current_round;
    match record_round_results(tournament, &mut prompt_outcome) {
        Ok(()) => println!(
            "\n{} All results for Round {} have been recorded.",
            "Success:".green(),
            round
        ),
        Err(e) => println!("{} {}.", "Error:".red(), e),
    }
}

/// Ask for one board's result, re-asking until the token is 1, 0, or 0.5.
fn prompt_outcome(white: &Player, black: &Player) -> Outcome {
    loop {
        let prompt = format!(
            "Match: {} vs {}. Enter result (1 for {} win, 0 for {} win, 0.5 for draw): ",
            white.name.as_str().blue(),
            black.name.as_str().blue(),
            white.name,
            black.name
        );
        match read_input(&prompt) {
            Ok(Some(token)) => match token.as_str() {
                "1" => return Outcome::WhiteWins,
                "0" => return Outcome::BlackWins,
                "0.5" => return Outcome::Draw,
                _ => println!("{} Please enter 1, 0, or 0.5.", "Invalid input.".red()),
            },
            Ok(None) | Err(_) => {
                println!("\nInput closed mid-round. Exiting tournament manager.");
                process::exit(0);
            }
        }
    }
}

fn reset_tournament(tournament: &mut Tournament) -> io::Result<()> {
    let confirm = read_input(&format!(
        "{}",
        "Are you sure you want to reset all scores and rounds? (yes/no): ".yellow()
    ))?;
    match confirm.as_deref().map(str::to_lowercase).as_deref() {
        Some("yes") => {
            tournament.reset();
            log::info!("Tournament reset requested and applied");
            println!(
                "{} Tournament has been reset. Scores and rounds are cleared.",
                "Success:".green()
            );
        }
        _ => println!("Reset cancelled."),
    }
    Ok(())
}
