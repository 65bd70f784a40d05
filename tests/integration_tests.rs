// Integration tests for the hangman game
// These tests verify that word loading, the game rules and the console session work together

use hangman::cli::CliInterface;
use hangman::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::rngs::mock::StepRng;
use std::io::Cursor;

fn single_word(word: &str) -> WordList {
    WordList::new(vec![word.to_string()]).unwrap()
}

fn play(words: &WordList, input: &str) -> GameState {
    let mut interface = CliInterface::new(Cursor::new(input.to_string()));
    game_loop(words, &mut StepRng::new(0, 0), &mut interface)
}

#[test]
fn test_console_session_win_by_letters() {
    // T, E, S, (repeat T), I, N, G
    let input = "1\nt\n1\ne\n1\ns\n1\nt\n1\ni\n1\nn\n1\ng\nq\n";
    let game = play(&single_word("testing"), input);

    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.revealed_letters(), "T E S T I N G");
    assert_eq!(game.guesses_left(), 4);
}

#[test]
fn test_console_session_win_by_word() {
    let input = "1\nz\n2\nTesting\nq\n";
    let game = play(&single_word("testing"), input);

    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.incorrect_letters(), "Z");
    assert_eq!(game.guesses_left(), 8);
}

#[test]
fn test_console_session_loss() {
    let mut input = String::new();
    for c in "QwRyUoPlKj".chars() {
        input.push_str(&format!("1\n{c}\n"));
    }
    input.push_str("q\n");
    let game = play(&single_word("bathe"), &input);

    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.incorrect_letters(), "Q W R Y U O P L K J");
    assert_eq!(game.guesses_left(), 0);
}

#[test]
fn test_console_session_words_then_letters() {
    let mut input = String::new();
    for _ in 0..5 {
        input.push_str("2\nQwRyU\n");
    }
    for c in "oPlKj".chars() {
        input.push_str(&format!("1\n{c}\n"));
    }
    let game = play(&single_word("bathe"), &input);

    assert_eq!(game.guesses_left(), 0);
    assert_eq!(game.status(), GameStatus::Lost);
}

#[test]
fn test_console_session_invalid_input_is_harmless() {
    let input = "x\n1\n8\n1\n,\n1\nab\n2\nc4t\n2\n\nq\n";
    let game = play(&single_word("cat"), input);

    assert_eq!(game.status(), GameStatus::Active);
    assert_eq!(game.guesses_left(), 10);
    assert_eq!(game.incorrect_letters(), "");
    assert_eq!(game.revealed_letters(), "_ _ _");
}

#[test]
fn test_console_session_new_game_after_win() {
    let input = "2\ncat\n1\n1\nx\nq\n";
    let game = play(&single_word("cat"), input);

    assert_eq!(game.status(), GameStatus::Active);
    assert_eq!(game.incorrect_letters(), "X");
    assert_eq!(game.guesses_left(), 9);
}

#[test]
fn test_console_session_end_of_input_quits() {
    let game = play(&single_word("cat"), "1\nc\n");
    assert_eq!(game.revealed_letters(), "C _ _");
    assert_eq!(game.status(), GameStatus::Active);
}

#[test]
fn test_word_file_to_game() {
    use std::fs::File;
    use std::io::Write;

    let path = std::env::temp_dir().join("hangman_integration_words.txt");
    {
        let mut file = File::create(&path).unwrap();
        write!(file, "Rust,").unwrap();
    }

    let words = load_words(&path);
    assert_eq!(words.words(), ["Rust"]);

    let game = play(&words, "1\nr\n1\nu\n1\ns\n1\nt\nq\n");
    assert_eq!(game.secret_word(), "RUST");
    assert_eq!(game.status(), GameStatus::Won);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_word_file_still_playable() {
    let words = load_words("no/such/dir/Words.txt");
    assert_eq!(words.len(), FALLBACK_WORDS.len());

    let mut rng = StdRng::seed_from_u64(2024);
    let game = GameState::new(&words, &mut rng);
    let secret = game.secret_word();
    assert!(
        FALLBACK_WORDS
            .iter()
            .any(|w| w.to_uppercase() == secret)
    );
    assert_eq!(game.revealed_letters().len(), secret.len() * 2 - 1);
}

#[test]
fn test_every_fallback_word_can_be_chosen() {
    let words = WordList::fallback();
    let mut rng = StdRng::seed_from_u64(1);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..500 {
        seen.insert(GameState::new(&words, &mut rng).secret_word());
    }
    assert_eq!(seen.len(), FALLBACK_WORDS.len());
}
