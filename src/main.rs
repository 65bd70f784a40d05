use hangman::cli::{CliInterface, parse_cli};
use hangman::logging::{default_log_path, init_logging};
use hangman::session::game_loop;
use hangman::tui::TuiInterface;
use hangman::wordbank::load_words;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();

    // Never log to stderr underneath the full-screen interface
    let log_path = cli.log_file.clone().or_else(default_log_path);
    let logging = match (log_path.as_deref(), cli.tui) {
        (Some(path), _) => init_logging(Some(path)),
        (None, false) => init_logging(None),
        (None, true) => Ok(()),
    };
    if let Err(e) = logging {
        eprintln!("Logging disabled, could not open log file: {e}");
    }

    let words = load_words(&cli.words_path);

    let mut rng = match cli.seed {
        Some(seed) => {
            log::info!("Using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    if cli.tui {
        let mut interface = match TuiInterface::new() {
            Ok(interface) => interface,
            Err(e) => {
                log::error!("Failed to initialise terminal: {e}");
                eprintln!("Failed to initialise terminal: {e}");
                return ExitCode::FAILURE;
            }
        };
        game_loop(&words, &mut rng, &mut interface);
    } else {
        let mut interface = CliInterface::new(io::stdin().lock());
        game_loop(&words, &mut rng, &mut interface);
    }

    log::info!("Exiting");
    ExitCode::SUCCESS
}
