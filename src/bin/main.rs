use quiz_core::config::Config;
use quiz_core::core::catalog::{Catalog, ItemSource};
use quiz_core::core::challenge::Challenge;
use quiz_core::core::types::Outcome;
use quiz_core::CatalogRegistry;
use std::fs;
use std::io::{stdin, stdout, Write};
use std::path::Path;

const CONFIG_PATH: &str = "config.json";
// The terminal front end only ever has one participant.
const LOCAL_PLAYER: u64 = 1;

fn main() {
    env_logger::init();

    let config = match Config::load_or_init(Path::new(CONFIG_PATH)) {
        Ok(Some(config)) => config,
        Ok(None) => {
            println!("{} created. Please fill it out.", CONFIG_PATH);
            return;
        }
        Err(e) => {
            eprintln!("[ERROR] Could not read {}: {}", CONFIG_PATH, e);
            return;
        }
    };

    let mut registry = CatalogRegistry::new();
    let catalog = match registry.get_or_create(&config.picture_path, load_images) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("[ERROR] Could not load catalog: {}", e);
            return;
        }
    };

    let mut rng = rand::thread_rng();
    let mut challenge = match catalog.start_round(LOCAL_PLAYER, &mut rng) {
        Ok(challenge) => challenge,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            return;
        }
    };

    println!("Picture quiz. Answer with 1-4, 'exit' to quit.");
    loop {
        print_round(catalog, &challenge);

        let mut input = String::new();
        stdin().read_line(&mut input).unwrap();
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            s => {
                let slot = match s.parse::<usize>() {
                    Ok(n) if (1..=4).contains(&n) => n - 1,
                    _ => continue,
                };
                // Re-picking a marked slot is filtered here, not in the core.
                if challenge.outcome(slot) != Some(Outcome::Unanswered) {
                    continue;
                }
                match catalog.pick_option(&mut challenge, slot, &mut rng) {
                    Ok(pick) => {
                        if let Some(next) = pick.next {
                            println!("Correct! Score: {} 🚀", pick.score);
                            challenge = next;
                        } else {
                            println!("Wrong. Score: {} 🚀", pick.score);
                        }
                    }
                    Err(e) => eprintln!("[ERROR] {}", e),
                }
            }
        }
    }

    if let Some(player) = catalog.player(LOCAL_PLAYER) {
        println!("Final score: {}", player.score());
    }
}

/// Enumerates `<path>/images/*.jpeg` as catalog entries, keyed by filename.
fn load_images(path: &str) -> std::io::Result<Vec<ItemSource>> {
    let dir = Path::new(path).join("images");
    let mut sources = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let entry = entry?;
        let file = entry.file_name().to_string_lossy().into_owned();
        if file.ends_with(".jpeg") {
            sources.push(ItemSource {
                file,
                source: entry.path(),
            });
        }
    }
    sources.sort_by(|a, b| a.file.cmp(&b.file));
    Ok(sources)
}

fn print_round(catalog: &Catalog, challenge: &Challenge) {
    let target = &catalog.items()[challenge.target];
    println!("\nWho is this? -> {}", target.source.display());
    let names = catalog.option_names(challenge);
    for (slot, name) in names.iter().enumerate() {
        let marker = match challenge.outcome(slot) {
            Some(Outcome::Correct) => "✅",
            Some(Outcome::Incorrect) => "❌",
            _ => " ",
        };
        println!("  {}: {} {} {}", slot + 1, marker, name, marker);
    }
    print!("> ");
    stdout().flush().unwrap();
}
