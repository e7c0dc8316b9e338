//! Interactive browser over the Seaview room catalog engine.
//!
//! Loads the room collection once (from a REST backend or a local JSON
//! fixture), then drives the filter/sort pipeline from a small prompt.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin seaview-catalog -- --base-url http://localhost:8080
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use rustyline::{error::ReadlineError, DefaultEditor};

use seaview_catalog::domain::{
    FilterCriteria, RoomProvider, RoomType, SortOrder, DEFAULT_LANGUAGE,
};
use seaview_catalog::infrastructure::{FixedRoomProvider, HttpRoomProvider};
use seaview_catalog::logger::setup_logger;
use seaview_catalog::view::{self, CatalogBody};
use seaview_catalog::Catalog;

#[derive(Debug, Parser)]
#[command(name = "seaview-catalog", about = "Browse the Seaview room catalog")]
struct Args {
    /// Base URL of the room backend (e.g. http://localhost:8080)
    #[arg(long)]
    base_url: Option<String>,

    /// JSON file with a room collection in the wire format (offline mode)
    #[arg(long, conflicts_with = "base_url")]
    fixture: Option<PathBuf>,

    /// Session language for name resolution
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    lang: String,
}

#[tokio::main]
async fn main() {
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    if let Err(e) = run().await {
        tracing::error!("catalog browser error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let provider: Arc<dyn RoomProvider> = match (&args.fixture, &args.base_url) {
        (Some(path), _) => {
            let json = std::fs::read_to_string(path)?;
            Arc::new(FixedRoomProvider::from_json(&json)?)
        }
        (None, Some(url)) => Arc::new(HttpRoomProvider::new(url.clone())),
        (None, None) => return Err("either --base-url or --fixture is required".into()),
    };

    let mut catalog = Catalog::with_language(provider, &args.lang);

    // A failed load degrades to an empty, still-usable catalog.
    if let Err(e) = catalog.load().await {
        println!("! {e}");
    }
    print_catalog(&catalog);

    let mut editor = DefaultEditor::new()?;
    let mut criteria = FilterCriteria::default();

    loop {
        match editor.readline("catalog> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                editor.add_history_entry(line).ok();
                if !dispatch(line, &mut catalog, &mut criteria) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

/// Handle one prompt line; returns `false` on quit.
fn dispatch(line: &str, catalog: &mut Catalog, criteria: &mut FilterCriteria) -> bool {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let rest: Vec<&str> = parts.collect();

    match command {
        "list" => print_catalog(catalog),
        "search" => {
            criteria.search = rest.join(" ");
            apply(catalog, criteria);
        }
        "type" => {
            criteria.room_type = match rest.first() {
                None | Some(&"-") => None,
                Some(code) => Some(RoomType::from_code(&code.to_uppercase())),
            };
            apply(catalog, criteria);
        }
        "price" => {
            criteria.price_min = rest.first().and_then(|v| v.parse().ok());
            criteria.price_max = rest.get(1).and_then(|v| v.parse().ok());
            apply(catalog, criteria);
        }
        "capacity" => {
            criteria.capacity = rest.first().and_then(|v| v.parse().ok());
            apply(catalog, criteria);
        }
        "amenity" => {
            match rest.first().copied() {
                Some("wifi") => criteria.required.wifi = !criteria.required.wifi,
                Some("tv") => criteria.required.tv = !criteria.required.tv,
                Some("minibar") => criteria.required.minibar = !criteria.required.minibar,
                Some("balcony") => criteria.required.balcony = !criteria.required.balcony,
                Some("seaview") => criteria.required.sea_view = !criteria.required.sea_view,
                _ => {
                    println!("amenities: wifi, tv, minibar, balcony, seaview");
                    return true;
                }
            }
            apply(catalog, criteria);
        }
        "sort" => {
            let code = rest.first().map(|v| v.to_uppercase()).unwrap_or_default();
            match SortOrder::from_code(&code) {
                Some(sort) => {
                    criteria.sort = sort;
                    apply(catalog, criteria);
                }
                None => println!(
                    "sort orders: popular, price_asc, price_desc, area_desc, rating_desc"
                ),
            }
        }
        "reset" => {
            *criteria = FilterCriteria::default();
            catalog.reset_filters();
            print_catalog(catalog);
        }
        "details" => match rest.first() {
            Some(id) => match catalog.open_details(id) {
                Ok(detail) => print_detail(&detail),
                Err(e) => println!("! {e}"),
            },
            None => println!("usage: details <room-id>"),
        },
        "book" => match rest.first() {
            Some(id) => match catalog.open_booking(id) {
                Ok(target) => println!(
                    "booking room {} — {} ({})",
                    target.room_id, target.name, target.price_label
                ),
                Err(e) => println!("! {e}"),
            },
            None => println!("usage: book <room-id>"),
        },
        "help" => print_help(),
        "quit" | "exit" => return false,
        other => println!("unknown command '{other}', try 'help'"),
    }

    true
}

fn apply(catalog: &mut Catalog, criteria: &FilterCriteria) {
    catalog.apply_filters(criteria.clone());
    print_catalog(catalog);
}

fn print_catalog(catalog: &Catalog) {
    let rendered = view::render(catalog.rooms(), catalog.language());
    println!("{}", rendered.count_label);
    match rendered.body {
        CatalogBody::Empty => println!("  {}", view::catalog::EMPTY_STATE_LABEL),
        CatalogBody::Cards(cards) => {
            for card in cards {
                println!(
                    "  [{}] {} — {}, {}, {}, {}",
                    card.id,
                    card.name,
                    card.type_label,
                    card.price_label,
                    card.area_label,
                    card.capacity_label
                );
            }
        }
    }
}

fn print_detail(detail: &seaview_catalog::view::RoomDetailView) {
    println!("{} ({})", detail.name, detail.type_label);
    if !detail.description.is_empty() {
        println!("  {}", detail.description);
    }
    println!(
        "  {} | {} м² | вместимость: {}",
        detail.price_label, detail.area_sqm, detail.capacity
    );
    if !detail.amenities.is_empty() {
        println!("  удобства: {}", detail.amenities.join(", "));
    }
    for (i, photo) in detail.photos.iter().enumerate() {
        let marker = if i == detail.initial_photo { "*" } else { " " };
        println!("  {marker} {}", photo.url);
    }
}

fn print_help() {
    println!("commands:");
    println!("  list                      show the current working set");
    println!("  search <text>             text filter (empty to clear)");
    println!("  type <code|->             room type filter (standard, deluxe, ...)");
    println!("  price <min> <max>         inclusive price bounds ('-' to clear one)");
    println!("  capacity <n|->            guest count (5 means 5 or more)");
    println!("  amenity <name>            toggle a required amenity");
    println!("  sort <order>              popular, price_asc, price_desc, area_desc, rating_desc");
    println!("  reset                     clear all criteria");
    println!("  details <room-id>         open the detail view");
    println!("  book <room-id>            open the booking flow");
    println!("  quit");
}
