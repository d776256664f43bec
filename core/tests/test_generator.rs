use std::time::{Duration, Instant};

use cruciverbal_core::{generator, scanner, DictionaryIndex, Dictionary, GeneratorConfig};

fn sample_dictionary() -> Dictionary {
    [
        "anchor", "rope", "note", "car", "cat", "tar", "ear", "are", "era", "oar", "ore", "net",
        "ten", "nope", "pond", "pant", "neat", "rant", "tear", "rate", "east", "seat", "sane",
        "earn", "sear", "star", "rats", "arts", "tars", "tons", "note", "tone", "tore",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

#[test]
fn test_basic_generator_usage() {
    let dictionary = sample_dictionary();
    let index = DictionaryIndex::build(&dictionary);
    let config = GeneratorConfig {
        grid_len: 15,
        n_words: 10,
        time_budget: Duration::from_millis(200),
        seed: Some(1),
    };

    let grid = generator::generate(&dictionary, &index, &config).expect("seeding should succeed");
    let words = scanner::scan(&grid);

    assert!(!words.is_empty(), "generated grid should contain at least the seed word");
    for record in &words {
        assert!(
            dictionary.contains(&record.word),
            "word \"{}\" found on the grid is not in the dictionary",
            record.word
        );
    }
    println!("generated {} words from a {} grid", words.len(), config.grid_len);
}

#[test]
fn test_default_config_dimensions() {
    let config = GeneratorConfig::default();
    assert_eq!(config.grid_len, 15);
    assert_eq!(config.n_words, 35);
    assert_eq!(config.time_budget, Duration::from_secs(5));
    assert_eq!(config.seed, None);
}

/// S5 — time-budget exit: an unreachable word-count target must still
/// return promptly, and the partial result must satisfy dictionary closure.
#[test]
fn test_time_budget_bounds_generation() {
    let dictionary = sample_dictionary();
    let index = DictionaryIndex::build(&dictionary);
    let config = GeneratorConfig {
        grid_len: 15,
        n_words: usize::MAX,
        time_budget: Duration::from_millis(50),
        seed: Some(2),
    };

    let start = Instant::now();
    let grid = generator::generate(&dictionary, &index, &config).unwrap();
    let elapsed = start.elapsed();

    assert!(elapsed < Duration::from_secs(1), "loop overran its time budget: {elapsed:?}");
    for record in scanner::scan(&grid) {
        assert!(dictionary.contains(&record.word));
    }
}

/// S6 — reproducibility: identical seed and dictionary must produce
/// byte-identical renders, independent of process RNG state.
#[test]
fn test_reproducibility_across_independent_runs() {
    let dictionary = sample_dictionary();
    let index = DictionaryIndex::build(&dictionary);
    let config = GeneratorConfig {
        grid_len: 15,
        n_words: 8,
        time_budget: Duration::from_millis(200),
        seed: Some(42),
    };

    let first = generator::generate(&dictionary, &index, &config).unwrap();
    let second = generator::generate(&dictionary, &index, &config).unwrap();
    assert_eq!(first.render(), second.render());
}

#[test]
fn test_small_dictionary_still_seeds() {
    let dictionary: Dictionary = ["anchor"].iter().map(|w| w.to_string()).collect();
    let index = DictionaryIndex::build(&dictionary);
    let config = GeneratorConfig {
        grid_len: 15,
        n_words: 1,
        time_budget: Duration::from_millis(100),
        seed: Some(5),
    };

    let grid = generator::generate(&dictionary, &index, &config).unwrap();
    let words = scanner::scan(&grid);
    assert!(!words.is_empty());
    assert!(words.iter().all(|w| w.word == "anchor"));
}

#[test]
fn test_performance_with_timing() {
    let dictionary = sample_dictionary();
    let index = DictionaryIndex::build(&dictionary);
    let config = GeneratorConfig {
        grid_len: 15,
        n_words: 20,
        time_budget: Duration::from_millis(300),
        seed: Some(9),
    };

    let start = Instant::now();
    let grid = generator::generate(&dictionary, &index, &config).unwrap();
    let elapsed = start.elapsed();

    println!("generated {} words in {elapsed:?}", scanner::scan(&grid).len());
    assert!(elapsed < Duration::from_secs(5), "generation took too long: {elapsed:?}");
}
