use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use subbench_lib::models::Segment;
use subbench_lib::{
    build, score, BoundaryPolicy, ScoringConfig, SegmentationConfig, SegmentationResult, WordToken,
};

const SEEDS: u64 = 64;
const ALPHABET: [&str; 12] = [
    "台", "積", "電", "漲", "股", "市", "，", "。", "NVIDIA", " ", "比特幣", "今天",
];
const SPEAKERS: [&str; 2] = ["A", "B"];

fn random_words(rng: &mut StdRng) -> Vec<WordToken> {
    let count = rng.gen_range(0..80);
    let mut t = 0.0;
    (0..count)
        .map(|_| {
            let text = if rng.gen_bool(0.05) {
                "超".repeat(rng.gen_range(20..45))
            } else {
                ALPHABET[rng.gen_range(0..ALPHABET.len())].to_string()
            };
            let start = t + rng.gen_range(0.0..0.3);
            let end = start + rng.gen_range(0.0..0.8);
            t = end;
            let word = WordToken::new(text, start, end);
            if rng.gen_bool(0.3) {
                word.with_speaker(SPEAKERS[rng.gen_range(0..SPEAKERS.len())])
            } else {
                word
            }
        })
        .collect()
}

fn configs() -> Vec<SegmentationConfig> {
    vec![
        SegmentationConfig::length_only(18),
        SegmentationConfig::with_duration(25, 3.0),
        SegmentationConfig::punctuation_aware(15),
        SegmentationConfig {
            max_chars: 20,
            max_duration: Some(2.5),
            policy: BoundaryPolicy::punctuation(),
        },
    ]
}

#[test]
fn every_token_lands_in_exactly_one_segment_in_order() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let words = random_words(&mut rng);
        let expected: String = words.iter().map(|w| w.trimmed()).collect();
        let expected_count = words.iter().filter(|w| !w.trimmed().is_empty()).count();

        for config in configs() {
            let result = build(&words, &config).expect("generated streams are valid");
            assert_eq!(result.joined_text(), expected, "seed {}", seed);
            let packed: usize = result.iter().map(|s| s.word_count).sum();
            assert_eq!(packed, expected_count, "seed {}", seed);
        }
    }
}

#[test]
fn segments_are_ordered_and_non_overlapping() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let words = random_words(&mut rng);

        for config in configs() {
            let result = build(&words, &config).unwrap();
            for segment in result.iter() {
                assert!(segment.end >= segment.start, "seed {}", seed);
            }
            for pair in result.segments.windows(2) {
                assert!(
                    pair[1].start >= pair[0].end,
                    "seed {}: {:?} overlaps {:?}",
                    seed,
                    pair[1],
                    pair[0]
                );
            }
        }
    }
}

#[test]
fn length_policy_respects_max_chars_except_single_tokens() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let words = random_words(&mut rng);
        let config = SegmentationConfig::length_only(18);

        let result = build(&words, &config).unwrap();
        for segment in result.iter() {
            assert!(
                segment.length <= config.max_chars || segment.word_count == 1,
                "seed {}: {:?}",
                seed,
                segment.text
            );
        }
    }
}

#[test]
fn punctuation_policy_respects_stretched_limit_except_single_tokens() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let words = random_words(&mut rng);

        for config in configs() {
            let BoundaryPolicy::Punctuation { hysteresis, .. } = &config.policy else {
                continue;
            };
            let limit = (config.max_chars as f64 * *hysteresis).floor() as usize;

            let result = build(&words, &config).unwrap();
            for segment in result.iter() {
                assert!(
                    segment.length <= limit || segment.word_count == 1,
                    "seed {}: {} > {} in {:?}",
                    seed,
                    segment.length,
                    limit,
                    segment.text
                );
            }
        }
    }
}

#[test]
fn segments_never_mix_speakers() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let words: Vec<WordToken> = random_words(&mut rng)
            .into_iter()
            .filter(|w| !w.trimmed().is_empty())
            .collect();

        for config in configs() {
            let result = build(&words, &config).unwrap();
            let mut remaining = words.iter();
            for segment in result.iter() {
                for word in remaining.by_ref().take(segment.word_count) {
                    assert_eq!(word.speaker, segment.speaker, "seed {}", seed);
                }
            }
        }
    }
}

#[test]
fn scoring_is_deterministic() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let words = random_words(&mut rng);
        let text: String = words.iter().map(|w| w.trimmed()).collect();
        let result = build(&words, &SegmentationConfig::length_only(18)).unwrap();
        let config = ScoringConfig::balanced();

        let first = score(&result, &text, &config);
        let second = score(&result, &text, &config);
        assert_eq!(first, second);
        assert!((0.0..=100.0).contains(&first.score));
    }
}

#[test]
fn splitting_a_severe_segment_into_ideal_ones_never_hurts() {
    let config = ScoringConfig::default();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..SEEDS {
        let mut lengths: Vec<usize> = (0..rng.gen_range(0..10))
            .map(|_| rng.gen_range(1..60))
            .collect();
        lengths.push(rng.gen_range(41..70));

        let before = segmentation_of(&lengths);
        let mut split = lengths.clone();
        split.pop();
        split.push(20);
        split.push(20);
        let after = segmentation_of(&split);

        let before = score(&before, "", &config);
        let after = score(&after, "", &config);
        assert!(
            after.segment_score >= before.segment_score,
            "{:?}: {} -> {}",
            lengths,
            before.segment_score,
            after.segment_score
        );
    }
}

fn segmentation_of(lengths: &[usize]) -> SegmentationResult {
    SegmentationResult::new(
        lengths
            .iter()
            .enumerate()
            .map(|(i, len)| Segment::new("字".repeat(*len), i as f64, i as f64 + 1.0))
            .collect(),
    )
}

#[test]
fn malformed_streams_are_rejected_whole() {
    let words = vec![
        WordToken::new("a", 0.0, 0.2),
        WordToken::new("b", 0.2, 0.4),
        WordToken::new("c", 0.6, 0.5),
    ];
    let err = build(&words, &SegmentationConfig::length_only(18)).unwrap_err();
    assert!(err.is_input_error());
    assert!(!err.is_config_error());

    let overlapping = vec![WordToken::new("ab", 0.0, 2.0), WordToken::new("c", 0.5, 0.6)];
    let err = build(&overlapping, &SegmentationConfig::length_only(2)).unwrap_err();
    assert!(err.is_input_error());
}
