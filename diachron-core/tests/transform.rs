use diachron_core::{Alignment, CorpusError, Sampler, TransitionTable};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;

/// Helper writing `contents` to a corpus file in a fresh temporary directory
fn corpus(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("words.txt");
	fs::write(&path, contents).unwrap();
	(dir, path)
}

#[test]
fn test_corpus_file_to_transformed_word() {
	let (_dir, path) = corpus("terra-firma earth-solid\n");
	let (table, report) = TransitionTable::from_path(&path, Alignment::Strict).unwrap();
	assert_eq!(report.pairs, 2);

	let sampler = Sampler::new(&table);
	let mut rng = StdRng::seed_from_u64(3);
	for _ in 0..8 {
		assert_eq!(sampler.transform("terra-firma", &mut rng), "earthsolid");
	}
	assert_eq!(sampler.transform("firma-terra-nova", &mut rng), "solidearthnova");
}

#[test]
fn test_missing_corpus_is_fatal() {
	let dir = tempfile::tempdir().unwrap();
	let result = TransitionTable::from_path(dir.path().join("words.txt"), Alignment::Strict);
	assert!(matches!(result, Err(CorpusError::Io { .. })));
}

#[test]
fn test_imperfect_corpus_still_builds() {
	let (_dir, path) = corpus("a-gricola a-farmer\nbroken\nin-ter-ra on-earth\n\nmare sea\n");

	let (strict, report) = TransitionTable::from_path(&path, Alignment::Strict).unwrap();
	assert_eq!(report.skipped, 2);
	assert!(!strict.contains("in"));

	let (lenient, report) = TransitionTable::from_path(&path, Alignment::Lockstep).unwrap();
	assert_eq!(report.skipped, 2);
	assert_eq!(lenient.len(), strict.len());
}

#[test]
fn test_lockstep_keeps_trailing_target() {
	let (table, _) = TransitionTable::from_lines(["terra-firma earth-so-lid"], Alignment::Lockstep);
	let sampler = Sampler::new(&table);
	assert_eq!(sampler.transform_with("terra-firma", || 0.5), "earthso-lid");
}

#[test]
fn test_all_unknown_root_loses_only_hyphens() {
	let (table, _) = TransitionTable::from_lines(["terra-firma earth-solid"], Alignment::Strict);
	let sampler = Sampler::new(&table);
	let mut rng = StdRng::seed_from_u64(11);
	assert_eq!(sampler.transform("in-ter-rupt-io", &mut rng), "interruptio");
}

#[test]
fn test_table_is_rebuilt_identically() {
	let (_dir, path) = corpus("a-gricola a-farmer\na-quila a-eagle\nterra-mare land-sea\na-mare a-sea\n");
	let (first, _) = TransitionTable::from_path(&path, Alignment::Strict).unwrap();
	let (second, _) = TransitionTable::from_path(&path, Alignment::Strict).unwrap();
	assert_eq!(first, second);

	let mut left = StdRng::seed_from_u64(5);
	let mut right = StdRng::seed_from_u64(5);
	let left_words = Sampler::new(&first).transform_many("terra-a-mare", 10, &mut left);
	let right_words = Sampler::new(&second).transform_many("terra-a-mare", 10, &mut right);
	assert_eq!(left_words, right_words);
}
