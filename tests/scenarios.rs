//! End-to-end runs over the public API.

use mcsim::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn two_fair_dice_five_rolls() {
    init();
    let mut game = Game::with_rng([d6(), d6()], ChaCha8Rng::seed_from_u64(2024)).unwrap();
    game.play(5).unwrap();

    let wide = game.results(ResultsFormat::Wide).into_wide().unwrap();
    assert_eq!(wide.shape(), (5, 2));

    let analyzer = Analyzer::new(&game);
    let jackpots = analyzer.jackpot_count();
    assert!(jackpots <= 5);

    let counts = analyzer.face_counts();
    assert_eq!(counts.shape(), (5, 6));
    assert_eq!(counts.faces(), d6().faces());
    assert!(counts.rows().all(|r| r.iter().sum::<usize>() == 2));

    assert_eq!(analyzer.combo_counts().total(), 5);
    assert_eq!(analyzer.permutations().total(), 5);
}

#[test]
fn narrow_and_wide_hold_the_same_outcomes() {
    init();
    let mut game = Game::seeded([d4(), d4(), d4()], 17).unwrap();
    game.play(40).unwrap();

    let wide = game.wide();
    let narrow = game
        .results("narrow".parse().unwrap())
        .into_narrow()
        .unwrap();
    assert_eq!(narrow.len(), 40 * 3);

    let mut a: Vec<_> = wide.values().to_vec();
    let mut b: Vec<_> = narrow.values().copied().collect();
    a.sort();
    b.sort();
    assert_eq!(a, b);

    for row in &narrow {
        assert_eq!(wide.get(row.roll, row.die), Some(&row.value));
    }
}

#[test]
fn unknown_format_is_rejected() {
    let err = "bogus_format".parse::<ResultsFormat>().unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn duplicate_faces_are_rejected() {
    let err = Die::new([1, 1, 2]).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn unknown_face_weight_is_not_found() {
    let mut die = coin();
    let err = die.set_weight(&"edge", 0.01).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn negative_weight_is_rejected() {
    let mut die = d6();
    let err = die.set_weight(&2, -0.5).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert_eq!(die.snapshot()[&2], 1.0);
}

#[test]
fn analyzer_follows_replays() {
    init();
    let game = Game::seeded([coin(), coin()], 5).unwrap();
    let mut analyzer = Analyzer::new(game);
    assert_eq!(analyzer.jackpot_count(), 0);

    analyzer.game_mut().play(12).unwrap();
    assert_eq!(analyzer.face_counts().rolls(), 12);

    analyzer.game_mut().play(3).unwrap();
    assert_eq!(analyzer.combo_counts().total(), 3);
    assert_eq!(analyzer.into_inner().rolls(), 3);
}

#[test]
fn loaded_dice_always_jackpot() {
    let mut loaded = d6();
    for face in 1..=5 {
        loaded.set_weight(&face, 0).unwrap();
    }
    let mut game = Game::seeded([loaded.clone(), loaded], 8).unwrap();
    game.play(25).unwrap();

    let analyzer = Analyzer::new(&game);
    assert_eq!(analyzer.jackpot_count(), 25);
    assert_eq!(analyzer.combo_counts().get(&[6, 6]), Some(25));
    assert_eq!(analyzer.face_counts().totals(), vec![0, 0, 0, 0, 0, 50]);
}

#[test]
fn string_faces_work_like_numbers() {
    let suits = || Die::new(["clubs", "diamonds", "hearts", "spades"]).unwrap();
    let game = Simulation::builder()
        .rolls(200)
        .seed(99)
        .build()
        .run([suits(), suits(), suits()])
        .unwrap();

    let analyzer = Analyzer::new(&game);
    let combos = analyzer.combo_counts();
    let perms = analyzer.permutations();
    assert!(combos.len() <= perms.len());
    assert!(combos.keys().all(|k| k.windows(2).all(|w| w[0] <= w[1])));
    assert_eq!(combos.total(), 200);
}

#[test]
fn all_zero_weights_cannot_play() {
    let mut die = coin();
    die.set_weight(&"H", 0).unwrap();
    die.set_weight(&"T", 0).unwrap();

    let mut game = Game::seeded([&die], 1).unwrap();
    let err = game.play(4).unwrap_err();
    assert!(matches!(err, Error::InconsistentState(_)));
    assert!(!game.has_results());
}
