use moodly_core::models::dimension::DimensionTag;
use moodly_core::models::response::{CompletedResponses, ITEM_COUNT, Rating, ResponseVector};
use moodly_core::models::score::{ScoreTriple, SeverityBand};
use moodly_instruments::instruments::dass21::DIMENSION_MAP;
use moodly_instruments::scoring::{score, score_vector};
use moodly_instruments::severity::classify;

fn completed(values: [i64; ITEM_COUNT]) -> CompletedResponses {
    CompletedResponses::from_values(&values).unwrap()
}

/// Deterministic spread of vectors covering every rating at every index.
fn generated_vectors() -> Vec<[i64; ITEM_COUNT]> {
    let mut vectors = Vec::new();
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    for _ in 0..500 {
        let mut values = [0i64; ITEM_COUNT];
        for value in values.iter_mut() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            *value = (state % 4) as i64;
        }
        vectors.push(values);
    }
    for rating in 0..=3 {
        vectors.push([rating; ITEM_COUNT]);
    }
    vectors
}

#[test]
fn all_zero_scores_zero() {
    assert_eq!(score(&completed([0; ITEM_COUNT])), ScoreTriple::default());
}

#[test]
fn all_three_scores_maximum_everywhere() {
    assert_eq!(
        score(&completed([3; ITEM_COUNT])),
        ScoreTriple {
            depression: 42,
            anxiety: 42,
            stress: 42,
        }
    );
}

#[test]
fn dimension_sum_equals_twice_total() {
    for values in generated_vectors() {
        let triple = score(&completed(values));
        let raw_total: i64 = values.iter().sum();
        assert_eq!(i64::from(triple.total()), 2 * raw_total, "{values:?}");
    }
}

#[test]
fn scoring_is_deterministic() {
    for values in generated_vectors() {
        let responses = completed(values);
        assert_eq!(score(&responses), score(&responses));
    }
}

#[test]
fn one_dimension_at_maximum_leaves_others_at_zero() {
    for dimension in DimensionTag::ALL {
        let mut values = [0i64; ITEM_COUNT];
        for (value, tag) in values.iter_mut().zip(DIMENSION_MAP.iter()) {
            if *tag == dimension {
                *value = 3;
            }
        }
        let triple = score(&completed(values));
        for other in DimensionTag::ALL {
            let expected = if other == dimension { 42 } else { 0 };
            assert_eq!(triple.get(other), expected, "{dimension} -> {other}");
        }
        assert_eq!(
            classify(i32::from(triple.get(dimension)), dimension).unwrap(),
            SeverityBand::ExtremelySevere
        );
    }
}

#[test]
fn single_item_contributes_double_to_its_dimension() {
    // Q3 ("no positive feeling") is a depression item.
    let mut values = [0i64; ITEM_COUNT];
    values[2] = 2;
    assert_eq!(
        score(&completed(values)),
        ScoreTriple {
            depression: 4,
            anxiety: 0,
            stress: 0,
        }
    );
}

#[test]
fn incomplete_vector_is_not_scored() {
    let mut responses = ResponseVector::new();
    for i in 0..ITEM_COUNT - 1 {
        responses.set(i, Rating::MAX).unwrap();
    }
    let err = score_vector(&responses).unwrap_err();
    assert_eq!(err.missing, vec![ITEM_COUNT - 1]);

    responses.set(ITEM_COUNT - 1, Rating::MIN).unwrap();
    assert!(score_vector(&responses).is_ok());
}
