//! Terminal blackjack against the house.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use termjack::log::{DEFAULT_LOG_FILE, GameLog};
use termjack::render::{card_lines, render_hand};
use termjack::{
    Action, ActionError, Card, DoubleRule, GameState, Outcome, RoundResult, Table, TableOptions,
    TieRule,
};
use tracing::Level;

const RULE: &str = "=========================================";

/// CLI flags
#[derive(Parser, Debug)]
#[command(name = "termjack", about = "Blackjack against the house in your terminal")]
struct Args {
    /// File that results are appended to
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Also log every hand's cards after each round
    #[arg(long)]
    detailed_log: bool,

    /// Seed for the shoe (defaults to the wall clock)
    #[arg(long)]
    seed: Option<u64>,

    /// How ties with the house are settled
    #[arg(long, value_enum, default_value_t = TieArg::House)]
    tie_rule: TieArg,

    /// Which two-card hands may double down
    #[arg(long, value_enum, default_value_t = DoubleArg::Any)]
    double_rule: DoubleArg,

    /// Starting balance
    #[arg(long, default_value_t = 100.0)]
    balance: f64,

    /// Smallest accepted bet
    #[arg(long, default_value_t = 5.0)]
    min_bet: f64,

    /// Print shoe usage after every round
    #[arg(long)]
    shoe_status: bool,

    /// Print debug events on stderr
    #[arg(long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TieArg {
    /// Ties go to the dealer
    House,
    /// Ties return the bet
    Push,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DoubleArg {
    /// Any first two cards
    Any,
    /// Hard 9-11 or soft 16-18 only
    Restricted,
}

impl Args {
    fn table_options(&self) -> TableOptions {
        let tie_rule = match self.tie_rule {
            TieArg::House => TieRule::HouseWins,
            TieArg::Push => TieRule::Push,
        };
        let double_rule = match self.double_rule {
            DoubleArg::Any => DoubleRule::AnyTwoCards,
            DoubleArg::Restricted => DoubleRule::Restricted,
        };

        TableOptions::default()
            .with_tie_rule(tie_rule)
            .with_double_rule(double_rule)
            .with_initial_balance(self.balance)
            .with_min_bet(self.min_bet)
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    print_welcome();
    if !game_menu()? {
        println!("Exiting the game. See you next time!");
        return Ok(());
    }

    let options = args.table_options();
    let Some(players) = prompt_players(&options)? else {
        return Ok(());
    };

    let mut table = match args.seed {
        Some(seed) => Table::new(options, players, seed),
        None => Table::from_clock(options, players),
    };
    let mut log = GameLog::open(&args.log_file);

    loop {
        if !play_round(&mut table, &mut log, &args)? {
            break;
        }
        print_statistics(&table);
        if args.shoe_status {
            print_shoe_status(&table);
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "seat counts are tiny"
        )]
        let round_minimum = table.options.min_bet * table.seat_count() as f64;
        if table.ledger().balance() < round_minimum {
            println!("You are out of money. Game over.");
            break;
        }

        match prompt_line("Play again? (y/n): ")? {
            Some(answer) if answer.eq_ignore_ascii_case("n") => break,
            Some(_) => {}
            None => break,
        }
    }

    table.clear_round();
    print_history(&table);
    print_balance_report(&table);
    print_goodbye();

    Ok(())
}

fn prompt_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn print_welcome() {
    println!("{RULE}");
    println!("        Welcome to the Blackjack Game!   ");
    println!("{RULE}");
    println!("Rules: The objective is to have a higher hand value than the dealer");
    println!("without exceeding 21.");
    println!("The dealer must hit if under 17. Ties go to the dealer.");
    println!("Up to three players are allowed.");
    println!("{RULE}");
    println!();
}

fn print_rules() {
    println!("{RULE}");
    println!("              Game Rules                ");
    println!("{RULE}");
    println!("- Try to beat the house by getting as close to 21 as possible without going over.");
    println!("- Aces count as 1 or 11, face cards as 10, and cards 2-10 are face value.");
    println!("- Place your bets before each round.");
    println!("- You can double down on your initial two-card hand (double bet, one card only).");
    println!("- You can split if your initial two cards have the same rank, forming two hands.");
    println!("- The house draws until it has at least 17.");
    println!("{RULE}");
    println!();
}

fn print_goodbye() {
    println!("{RULE}");
    println!("      Thank you for playing Blackjack!   ");
    println!("{RULE}");
}

/// Shows the pre-game menu. Returns `false` when the player chose to exit.
fn game_menu() -> Result<bool> {
    println!("Game Options:");
    println!("1. Start a new game");
    println!("2. View game rules");
    println!("3. Exit the game");

    let Some(choice) = prompt_line("Please enter your choice (1-3): ")? else {
        return Ok(false);
    };

    match choice.as_str() {
        "1" => println!("Starting a new game...\n"),
        "2" => print_rules(),
        "3" => return Ok(false),
        _ => println!("Invalid choice. Starting a new game by default.\n"),
    }
    Ok(true)
}

fn prompt_players(options: &TableOptions) -> Result<Option<usize>> {
    let prompt = format!("Enter the number of players (1-{}): ", options.max_players);
    let Some(input) = prompt_line(&prompt)? else {
        return Ok(None);
    };

    let requested = input.parse::<usize>().unwrap_or(0);
    let players = options.seat_count(requested);
    if players != requested {
        println!("Invalid number of players. Starting with 1 player.");
    }
    Ok(Some(players))
}

/// Prompts every seat for a bet. Returns `false` if the session should end.
fn take_bets(table: &mut Table) -> Result<bool> {
    let min_bet = table.options.min_bet;

    for seat in 0..table.seat_count() {
        let max_bet = table.max_bet(seat);
        if max_bet < min_bet {
            println!("Not enough balance for Player {} to bet.", seat + 1);
            return Ok(false);
        }

        println!("Current balance: ${:.2}", table.ledger().balance());
        let mut prompt = format!("Player {}, place your bet: ", seat + 1);

        loop {
            let Some(input) = prompt_line(&prompt)? else {
                return Ok(false);
            };
            let amount = input.parse::<f64>().unwrap_or(0.0);
            match table.place_bet(seat, amount) {
                Ok(()) => break,
                Err(err) => {
                    tracing::debug!(%err, seat, "bet rejected");
                    prompt = format!(
                        "Invalid bet. Enter a valid amount (min ${min_bet:.2}, max ${max_bet:.2}): "
                    );
                }
            }
        }
    }

    Ok(true)
}

/// Plays one round. Returns `false` if input ended or betting could not
/// complete.
fn play_round(table: &mut Table, log: &mut GameLog, args: &Args) -> Result<bool> {
    table.start_round();
    if !take_bets(table)? {
        table.clear_round();
        return Ok(false);
    }

    let reshuffles = table.shoe.reshuffles();
    table.deal().context("failed to deal the opening cards")?;

    for (seat, player) in table.seats().iter().enumerate() {
        if let Some(hand) = player.hand(0) {
            println!("Player {}'s initial hand:", seat + 1);
            println!("{}", render_hand(hand, false));
        }
    }
    println!("House's hand:");
    println!("{}", render_hand(table.house(), true));

    if !play_turns(table)? {
        return Ok(false);
    }

    println!("House reveals second card.");
    println!("{}", render_hand(table.house(), false));
    for card in table.house_play().context("house failed to play")? {
        println!("House dealt card:");
        print_card(card);
    }
    if table.house().len() > 2 {
        println!("{}", render_hand(table.house(), false));
    }

    if table.shoe.reshuffles() > reshuffles {
        println!("Reshuffling the deck...");
    }

    if args.detailed_log {
        log.detailed_state(table.seats());
    }

    let result = table.showdown().context("failed to settle the round")?;
    narrate(&result, log);

    Ok(true)
}

/// Runs every player decision. Returns `false` if input ended.
fn play_turns(table: &mut Table) -> Result<bool> {
    while table.state() == GameState::PlayerTurn {
        let turn = table.current_turn();
        let Some(hand) = table.current_hand() else {
            break;
        };

        println!("Player {}'s hand {}:", turn.seat + 1, turn.hand + 1);
        println!("{}", render_hand(hand, false));

        let actions = table.available_actions();
        println!("Available actions:");
        for (index, action) in actions.iter().enumerate() {
            println!("{}. {action}", index + 1);
        }

        let Some(input) = prompt_line(&format!("Choose an action (1-{}): ", actions.len()))?
        else {
            return Ok(false);
        };
        let Some(action) = input
            .parse::<usize>()
            .ok()
            .and_then(|choice| termjack::decision::choose(&actions, choice))
        else {
            println!("Invalid choice. Try again.");
            continue;
        };

        match table.play(action) {
            Ok(drawn) => narrate_action(table, turn.seat, turn.hand, action, drawn),
            Err(ActionError::InsufficientFunds) => match action {
                Action::Split => println!("Not enough balance to split! Action not taken."),
                _ => println!("Not enough balance to double down! Action not taken."),
            },
            Err(err) => println!("Action error: {err}"),
        }
    }

    Ok(true)
}

fn narrate_action(table: &Table, seat: usize, hand_index: usize, action: Action, drawn: Option<Card>) {
    let Some(hand) = table.seat(seat).and_then(|player| player.hand(hand_index)) else {
        return;
    };

    if action == Action::Double {
        println!("Doubling down! New bet: ${:.2}", hand.stake());
    }
    if action == Action::Split {
        println!("Player splits the hand into two hands!");
        return;
    }

    if let Some(card) = drawn {
        println!("Dealt card:");
        print_card(card);
        println!("Sorted hand:");
        println!("{}", render_hand(hand, false));
        if hand.is_bust() {
            println!("Player busts this hand!");
        }
    }
}

fn print_card(card: Card) {
    for line in card_lines(card) {
        println!("{line}");
    }
}

fn narrate(result: &RoundResult, log: &mut GameLog) {
    for seat in &result.seats {
        for hand in &seat.hands {
            let label = format!("Player {} hand {}", seat.seat + 1, hand.hand_index + 1);
            let resolution = &hand.resolution;
            match resolution.outcome {
                Outcome::PlayerWin => {
                    println!("{label}: {}!", resolution.description);
                    println!("Player wins ${:.2}", resolution.payout);
                }
                Outcome::HouseWin | Outcome::Tie => {
                    println!("{label}: {}.", resolution.description);
                }
            }
            log.result(resolution.description, hand.balance);
        }
    }
}

fn print_statistics(table: &Table) {
    let stats = table.ledger().statistics();
    println!("Game Statistics:");
    println!("Total games played: {}", stats.total);
    println!(
        "Player wins: {} ({:.2}%)",
        stats.player_wins,
        stats.percentage(stats.player_wins)
    );
    println!(
        "House wins: {} ({:.2}%)",
        stats.house_wins,
        stats.percentage(stats.house_wins)
    );
    println!("Ties: {} ({:.2}%)", stats.ties, stats.percentage(stats.ties));
}

fn print_shoe_status(table: &Table) {
    println!("Deck status:");
    println!("Total unique cards used: {}", table.shoe.unique_ranks_used());
    println!("Current card counts:");
    for (rank, count) in table.shoe.remaining_by_rank() {
        println!("Card {rank}: {count}");
    }
}

fn print_history(table: &Table) {
    println!("Game History:");
    for (index, code) in table.ledger().history().codes().enumerate() {
        let text = match Outcome::from_code(code) {
            Outcome::PlayerWin => "Player wins",
            Outcome::HouseWin => "House wins",
            Outcome::Tie => "Tie",
        };
        println!("Game {}: {text}", index + 1);
    }
}

fn print_balance_report(table: &Table) {
    let ledger = table.ledger();
    println!("Current balance report: ${:.2}", ledger.balance());
    println!("Initial balance: ${:.2}", ledger.initial_balance());
    println!("Net earnings: ${:.2}", ledger.net());
}
