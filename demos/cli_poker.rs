//! CLI poker example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use dprs::{Card, Game, GameOptions, HandResolution, Suit};

fn main() {
    println!("Solo draw poker CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let mut game = Game::new(options, seed);
    game.start();

    loop {
        if game.is_game_over() {
            println!("Game over. Score: {}", game.score());
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    game.reset();
                    continue;
                }
                _ => {
                    println!("Goodbye.");
                    break;
                }
            }
        }

        print_table(&game);

        let Some(index) = prompt_index(&game) else {
            println!("Goodbye.");
            break;
        };

        let outcome = match game.select_card(index) {
            Ok(outcome) => outcome,
            Err(err) => {
                println!("Selection error: {err}");
                continue;
            }
        };

        if let Some(drawn) = outcome.drawn {
            println!("Drew {}.", format_card(&drawn));
        }

        if let Some(batch) = outcome.batch {
            // Play the host-scheduler role for the evaluation trigger.
            thread::sleep(Duration::from_millis(game.options.evaluation_delay_millis));
            match game.evaluate(&batch) {
                Ok(resolution) => print_resolution(&resolution),
                Err(err) => println!("Evaluation error: {err}"),
            }
        }

        // Play the host-scheduler role for the selection debounce.
        thread::sleep(Duration::from_millis(game.options.selection_lock_millis));
        game.release_selection_lock();
    }
}

fn print_resolution(resolution: &HandResolution) {
    match resolution.category {
        Some(category) => println!(
            "{} for {} point(s)! Total score: {}",
            category,
            resolution.points,
            resolution.score
        ),
        None => println!("No hand."),
    }

    if resolution.round_cleared {
        println!("Round cleared! A fresh deck has been shuffled.");
    }

    if resolution.game_over {
        println!("game over!");
    }
}

fn print_table(game: &Game) {
    println!(
        "\nScore: {} | Deck: {} cards remaining",
        game.score(),
        game.cards_remaining()
    );

    println!("Selected: {}", format_cards(game.selected()));

    let hand = game
        .hand()
        .iter()
        .enumerate()
        .map(|(index, card)| format!("[{index}]{}", format_card(card)))
        .collect::<Vec<_>>()
        .join(" ");
    println!("Hand: {hand}");
}

fn prompt_index(game: &Game) -> Option<usize> {
    loop {
        let input = prompt_line(&format!("Select a card (0-{}): ", game.hand().len().saturating_sub(1)));
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a card index."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(none)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        0..=8 => (card.rank + 2).to_string(),
        9 => "J".to_string(),
        10 => "Q".to_string(),
        11 => "K".to_string(),
        _ => "A".to_string(),
    };

    format!("{}{}", colorize(&rank, color_code), colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
