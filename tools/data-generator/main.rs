use chrono::{Duration, Utc};
use clap::Parser;
use esteira::wire::{WireBoard, WireCard, WireField, WireFlow, WireHistoryEntry, WireStep};
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;

/// A CLI tool to generate randomized sample boards for the esteira engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_board.json")]
    output: String,

    /// The number of steps in the generated flow
    #[arg(long, default_value_t = 5)]
    steps: usize,

    /// The number of cards to scatter across the flow
    #[arg(long, default_value_t = 8)]
    cards: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.steps < 2 {
        eprintln!("Error: --steps ({}) must be at least 2", cli.steps);
        std::process::exit(1);
    }

    println!(
        "Generating a board with {} steps and {} cards...",
        cli.steps, cli.cards
    );

    let steps = generate_steps(&mut rng, cli.steps);
    let cards = generate_cards(&mut rng, &steps, cli.cards);
    let history = generate_history(&mut rng, &steps, &cards);

    let board = WireBoard {
        flows: vec![WireFlow {
            id: "flow-demo".to_string(),
            name: "Demo pipeline".to_string(),
            steps,
        }],
        cards,
        history,
    };

    let json_output = serde_json::to_string_pretty(&board)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved board to '{}'",
        cli.output
    );

    Ok(())
}

const STEP_TITLES: [&str; 8] = [
    "Intake",
    "Screening",
    "Analysis",
    "Proposal",
    "Negotiation",
    "Approval",
    "Delivery",
    "Review",
];

const COLORS: [&str; 4] = ["#1e90ff", "#ffa500", "#9370db", "#2e8b57"];

fn generate_steps(rng: &mut ThreadRng, count: usize) -> Vec<WireStep> {
    let mut steps = Vec::with_capacity(count);
    // Positions increase but are deliberately non-contiguous.
    let mut position = 0;
    for index in 0..count {
        position += rng.random_range(1..=3);
        let is_last = index == count - 1;
        let title = STEP_TITLES[index % STEP_TITLES.len()];
        steps.push(WireStep {
            id: format!("step-{}", index + 1),
            flow_id: "flow-demo".to_string(),
            position,
            title: title.to_string(),
            color: Some(COLORS[index % COLORS.len()].to_string()),
            step_type: if is_last { "finisher" } else { "normal" }.to_string(),
            fields: generate_fields(rng, index),
            default_assignee: None,
            default_team: None,
        });
    }
    println!("-> Generated {} steps.", steps.len());
    steps
}

fn generate_fields(rng: &mut ThreadRng, step_index: usize) -> Vec<WireField> {
    let mut fields = vec![];
    if rng.random_range(0..100) < 70 {
        fields.push(WireField {
            id: format!("field-note-{}", step_index),
            label: "Notes".to_string(),
            slug: None,
            field_type: "text".to_string(),
            required: rng.random_range(0..100) < 40,
            items: None,
            text_variant: Some("long".to_string()),
            identifier_kind: None,
        });
    }
    if rng.random_range(0..100) < 40 {
        fields.push(WireField {
            id: format!("field-check-{}", step_index),
            label: "Checklist".to_string(),
            slug: None,
            field_type: "checklist".to_string(),
            required: true,
            items: Some(vec![
                "First item".to_string(),
                "Second item".to_string(),
                "Third item".to_string(),
            ]),
            text_variant: None,
            identifier_kind: None,
        });
    }
    if step_index == 0 {
        fields.push(WireField {
            id: "field-owner".to_string(),
            label: "Responsável".to_string(),
            slug: Some("assigned_to".to_string()),
            field_type: "user_select".to_string(),
            required: false,
            items: None,
            text_variant: None,
            identifier_kind: None,
        });
    }
    fields
}

const CARD_TITLES: [&str; 6] = [
    "Acme renewal",
    "Globex onboarding",
    "Initech audit",
    "Umbrella claim",
    "Stark retrofit",
    "Wayne expansion",
];

const ACTORS: [&str; 4] = ["ana", "bruno", "carla", "diego"];

fn generate_cards(rng: &mut ThreadRng, steps: &[WireStep], count: usize) -> Vec<WireCard> {
    let mut cards = Vec::with_capacity(count);
    for index in 0..count {
        let step = &steps[rng.random_range(0..steps.len())];
        cards.push(WireCard {
            id: format!("card-{}", index + 1),
            flow_id: "flow-demo".to_string(),
            step_id: step.id.clone(),
            title: format!(
                "{} #{}",
                CARD_TITLES[index % CARD_TITLES.len()],
                index + 1
            ),
            kind: None,
            fields: Default::default(),
            checklists: Default::default(),
            parent_id: None,
            assignee_id: if rng.random_range(0..100) < 50 {
                Some(ACTORS[rng.random_range(0..ACTORS.len())].to_string())
            } else {
                None
            },
            team_id: None,
            agent_ids: vec![],
            created_at: Utc::now() - Duration::days(rng.random_range(1..30)),
            value: if rng.random_range(0..100) < 30 {
                Some(rng.random_range(100.0..10_000.0))
            } else {
                None
            },
            product_id: None,
        });
    }
    println!("-> Generated {} cards.", cards.len());
    cards
}

/// Walks each card from the first step up to its current one, emitting one
/// movement record per hop. Roughly a third of the cards keep no recorded
/// history at all, exercising the fallback synthesis downstream.
fn generate_history(
    rng: &mut ThreadRng,
    steps: &[WireStep],
    cards: &[WireCard],
) -> Vec<WireHistoryEntry> {
    let mut entries = vec![];
    let mut seq = 0;
    for card in cards {
        if rng.random_range(0..100) < 33 {
            continue;
        }
        let Some(target) = steps.iter().position(|s| s.id == card.step_id) else {
            continue;
        };
        for hop in 0..target {
            let from = &steps[hop];
            let to = &steps[hop + 1];
            seq += 1;
            entries.push(WireHistoryEntry {
                id: format!("mov-{}", seq),
                card_id: card.id.clone(),
                from_step_id: Some(from.id.clone()),
                to_step_id: Some(to.id.clone()),
                moved_at: card.created_at + Duration::hours((hop as i64 + 1) * 6),
                actor: Some(ACTORS[rng.random_range(0..ACTORS.len())].to_string()),
                action: Some("move".to_string()),
                from_position: Some(from.position),
                to_position: Some(to.position),
                from_title: Some(from.title.clone()),
                to_title: Some(to.title.clone()),
                backward: None,
            });
        }
    }
    println!("-> Generated {} history entries.", entries.len());
    entries
}
