use clap::Parser;
use esteira::board::BoardSnapshot;
use esteira::prelude::*;
use std::time::Instant;

/// A card-pipeline read-model inspector: loads a board dump, derives the
/// view for one card and prints it the way an editor panel would render it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the board JSON file (flows, cards, history)
    board_path: Option<String>,

    /// Id of the card to inspect; defaults to the first card in the file
    #[arg(short, long)]
    card: Option<String>,

    /// Flow id to treat as the board currently open in the UI
    #[arg(short, long)]
    flow: Option<String>,

    /// Optional path to write a bincode snapshot of the resolved flows to
    #[arg(long)]
    snapshot: Option<String>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. File loading ---
    let sample = match &cli.board_path {
        Some(path) => SampleBoard::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load board from '{}': {}", path, e))
        }),
        None => {
            println!("No board file provided. Using the built-in mock board.");
            SampleBoard::default()
        }
    };

    // --- 2. Conversion to the canonical model ---
    let board = sample
        .into_board()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert board: {}", e)));

    let card = match &cli.card {
        Some(id) => board
            .card(id)
            .cloned()
            .unwrap_or_else(|| exit_with_error(&format!("Card '{}' not found", id))),
        None => board
            .cards
            .first()
            .cloned()
            .unwrap_or_else(|| exit_with_error("Board file contains no cards")),
    };

    let open_flow_id = cli.flow.clone().unwrap_or_else(|| card.flow_id.clone());
    let supplied = board
        .flow(&open_flow_id)
        .map(|flow| flow.steps.clone())
        .unwrap_or_default();

    if let Some(path) = &cli.snapshot {
        let snapshot = BoardSnapshot::new(board.flows.clone());
        snapshot
            .save(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to write snapshot: {}", e)));
        println!("Saved flow snapshot to '{}'", path);
    }

    // --- 3. Derivation ---
    let derive_start = Instant::now();
    let service = InMemoryBoard::new(board);
    let view = CardView::derive(&card, &supplied, Some(open_flow_id.as_str()), &service);
    let derive_duration = derive_start.elapsed();

    // --- 4. Report ---
    println!("\nCard '{}' ({})", card.title, card.id);
    println!(
        "  Step:      {}",
        view.current_step
            .as_ref()
            .map(|s| s.title.as_str())
            .unwrap_or("<not on this board>")
    );
    println!("  Progress:  {:.0}%", view.progress_percentage);
    println!(
        "  Flags:     frozen={} read-only={} disabled={}",
        view.is_frozen, view.is_read_only, view.is_disabled
    );
    match (&view.previous_step, &view.next_step) {
        (Some(prev), Some(next)) => println!("  Neighbors: {} <- * -> {}", prev.title, next.title),
        (Some(prev), None) => println!("  Neighbors: {} <- * (last step)", prev.title),
        (None, Some(next)) => println!("  Neighbors: (first step) * -> {}", next.title),
        (None, None) => println!("  Neighbors: none"),
    }

    if view.is_move_disabled {
        if view.unmet.is_empty() {
            println!("  Move:      disabled");
        } else {
            println!("  Move:      blocked by {}", view.unmet.join(", "));
        }
    } else {
        println!("  Move:      ready");
    }

    if let Some(assignee) = &view.form.assigned_to {
        println!("  Assignee:  {}", assignee);
    }
    if let Some(team) = &view.form.assigned_team_id {
        println!("  Team:      {}", team);
    }
    if !view.form.agents.is_empty() {
        println!(
            "  Agents:    {}",
            view.form.agents.iter().cloned().collect::<Vec<_>>().join(", ")
        );
    }

    println!("\n--- Timeline ({} entries) ---", view.timeline.len());
    for entry in &view.timeline {
        let marker = if entry.backward {
            "<-"
        } else if entry.synthesized {
            ".."
        } else {
            "->"
        };
        println!(
            "  {} {}  {}  {}",
            marker,
            entry.moved_at.format("%Y-%m-%d %H:%M"),
            entry.step_title,
            entry.actor.as_deref().unwrap_or("-")
        );
    }
    if let Some(last) = view.last_history_update {
        println!("Last update: {}", last.format("%Y-%m-%d %H:%M"));
    }

    println!("\n--- Performance Summary ---");
    println!("Derivation:      {:?}", derive_duration);
    println!("Total Execution: {:?}", total_start.elapsed());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
