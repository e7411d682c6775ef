use clap::{Parser, Subcommand};

use hamming_codec::{Hamming74, MembershipTable};
use hamming_config::{ToolConfig, toml_config};
use hamming_core::{HammingErr, debug};

mod render;
mod trick;

use render::Renderer;

/// Load configuration file, or defaults when none is given
fn load_config(cfg_path: Option<&str>) -> ToolConfig {
    let Some(cfg_path) = cfg_path else {
        return ToolConfig::default();
    };
    match toml_config::from_file(cfg_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration from {}: {}", cfg_path, e);
            std::process::exit(1);
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Hamming(7,4) mind-reading tool",
    long_about = "Encodes values 1..15 into 7 cards, builds the card lists, and finds the single lying card in a selection"
)]
struct Args {
    #[arg(short = 'c', long = "config", help = "Optional TOML config with output and lesson settings")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a value into the cards that show it
    Encode {
        #[arg(help = "Value to encode: 1..15")]
        value: u8,
    },
    /// Decode a selection of cards, locating a single wrong card
    Decode {
        #[arg(help = "Selected cards, e.g. \"2,5,7\" or \"0100101\"")]
        selection: String,
    },
    /// List the values that appear on a card
    Invitees {
        #[arg(help = "Card position: 1..7")]
        position: u8,
    },
    /// Decode a selection and tell whether the wrong card was left out or added
    Classify {
        #[arg(help = "Selected cards, e.g. \"2,5,7\" or \"0100101\"")]
        selection: String,
    },
    /// Print all seven card lists
    Table,
    /// Pick a value, maybe lie about one card, and let the decoder reveal it
    Trick {
        #[arg(short = 's', long = "seed", help = "Seed for a reproducible game")]
        seed: Option<u64>,

        #[arg(short = 'l', long = "lie-chance", default_value_t = 0.5, help = "Probability of one lying card: 0.0..1.0")]
        lie_chance: f64,
    },
}

fn run(command: Command, renderer: &Renderer) -> Result<(), HammingErr> {
    let codec = Hamming74;
    match command {
        Command::Encode { value } => renderer.print_encode(&codec, value),
        Command::Decode { selection } => renderer.print_decode(&codec, &selection),
        Command::Invitees { position } => renderer.print_invitees(&codec, position),
        Command::Classify { selection } => renderer.print_classify(&codec, &selection),
        Command::Table => {
            renderer.print_table(&MembershipTable::build());
            Ok(())
        }
        Command::Trick { seed, lie_chance } => {
            let game = trick::play(seed, lie_chance);
            renderer.print_trick(&codec, &game)
        }
    }
}

fn main() {
    eprintln!("[+] Hamming(7,4) mind-reading tool");

    let args = Args::parse();
    let cfg = load_config(args.config.as_deref());
    let _log_guard = debug::setup_logging_default(cfg.debug_log.clone());

    let renderer = Renderer::new(&cfg);
    if let Err(e) = run(args.command, &renderer) {
        tracing::debug!("command failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
