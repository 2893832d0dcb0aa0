use log::debug;
use rand::Rng;

use crate::error::GenerateError;
use crate::models::{CountryCapitalPair, Question, QuestionKind, NUM_OPTIONS};

use super::shuffle;

/// Smallest dataset that still yields three distinct distractors per question.
pub const MIN_DATASET_SIZE: usize = NUM_OPTIONS;

/// Builds one question per pair, half asking for capitals and half for countries.
///
/// The dataset is shuffled and split at `len / 2`: the first half becomes
/// `CapitalOf` questions, the rest `CountryOf`. The combined list is shuffled
/// again so both kinds are interleaved.
pub fn generate<R: Rng + ?Sized>(
    dataset: &[CountryCapitalPair],
    rng: &mut R,
) -> Result<Vec<Question>, GenerateError> {
    if dataset.len() < MIN_DATASET_SIZE {
        return Err(GenerateError::InsufficientData {
            found: dataset.len(),
            required: MIN_DATASET_SIZE,
        });
    }

    let order = shuffle(dataset, rng);
    let (first_half, second_half) = order.split_at(order.len() / 2);

    let mut questions = Vec::with_capacity(dataset.len());
    for pair in first_half {
        questions.push(build_question(QuestionKind::CapitalOf, pair, dataset, rng)?);
    }
    for pair in second_half {
        questions.push(build_question(QuestionKind::CountryOf, pair, dataset, rng)?);
    }

    debug!(
        "Generated {} questions ({} capital, {} country)",
        questions.len(),
        first_half.len(),
        second_half.len()
    );

    Ok(shuffle(&questions, rng))
}

fn build_question<R: Rng + ?Sized>(
    kind: QuestionKind,
    pair: &CountryCapitalPair,
    dataset: &[CountryCapitalPair],
    rng: &mut R,
) -> Result<Question, GenerateError> {
    let (subject, correct, prompt) = match kind {
        QuestionKind::CapitalOf => (
            &pair.country,
            &pair.capital,
            format!("¿Cuál es la capital de {}?", pair.country),
        ),
        QuestionKind::CountryOf => (
            &pair.capital,
            &pair.country,
            format!("La capital {} corresponde a qué país?", pair.capital),
        ),
    };

    let pool: Vec<&String> = dataset
        .iter()
        .map(|candidate| answer_field(kind, candidate))
        .filter(|value| *value != correct)
        .collect();

    let mut distractors: Vec<&String> = Vec::with_capacity(NUM_OPTIONS - 1);
    for value in shuffle(&pool, rng) {
        if !distractors.contains(&value) {
            distractors.push(value);
        }
        if distractors.len() == NUM_OPTIONS - 1 {
            break;
        }
    }

    let mut candidates = Vec::with_capacity(NUM_OPTIONS);
    candidates.push(correct.clone());
    candidates.extend(distractors.into_iter().cloned());

    let options: [String; NUM_OPTIONS] = shuffle(&candidates, rng)
        .try_into()
        .map_err(|short: Vec<String>| GenerateError::InsufficientData {
            found: short.len(),
            required: NUM_OPTIONS,
        })?;

    Ok(Question {
        kind,
        prompt,
        correct_answer: correct.clone(),
        options,
        subject: subject.clone(),
    })
}

fn answer_field(kind: QuestionKind, pair: &CountryCapitalPair) -> &String {
    match kind {
        QuestionKind::CapitalOf => &pair.capital,
        QuestionKind::CountryOf => &pair.country,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::data::asia_dataset;

    fn small_dataset() -> Vec<CountryCapitalPair> {
        vec![
            CountryCapitalPair::new("A", "a"),
            CountryCapitalPair::new("B", "b"),
            CountryCapitalPair::new("C", "c"),
            CountryCapitalPair::new("D", "d"),
        ]
    }

    fn assert_well_formed(question: &Question) {
        let unique: HashSet<&String> = question.options.iter().collect();
        assert_eq!(unique.len(), NUM_OPTIONS, "options must be unique: {:?}", question);
        let hits = question
            .options
            .iter()
            .filter(|o| **o == question.correct_answer)
            .count();
        assert_eq!(hits, 1, "correct answer must appear once: {:?}", question);
    }

    #[test]
    fn test_generates_one_question_per_pair() {
        let dataset = asia_dataset().unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        let questions = generate(&dataset, &mut rng).unwrap();

        assert_eq!(questions.len(), dataset.len());
        for question in &questions {
            assert_well_formed(question);
        }
    }

    #[test]
    fn test_kind_split_is_balanced() {
        let dataset = asia_dataset().unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        let questions = generate(&dataset, &mut rng).unwrap();
        let capital = questions
            .iter()
            .filter(|q| q.kind == QuestionKind::CapitalOf)
            .count();

        assert_eq!(capital, dataset.len() / 2);
        assert_eq!(questions.len() - capital, dataset.len() - dataset.len() / 2);
    }

    #[test]
    fn test_each_pair_is_used_once() {
        let dataset = asia_dataset().unwrap();
        let mut rng = StdRng::seed_from_u64(99);

        let questions = generate(&dataset, &mut rng).unwrap();
        let covered: HashSet<String> = questions
            .iter()
            .map(|q| match q.kind {
                QuestionKind::CapitalOf => q.subject.clone(),
                QuestionKind::CountryOf => q.correct_answer.clone(),
            })
            .collect();

        assert_eq!(covered.len(), dataset.len());
    }

    #[test]
    fn test_subject_matches_answer() {
        let dataset = small_dataset();
        let mut rng = StdRng::seed_from_u64(2);

        for question in generate(&dataset, &mut rng).unwrap() {
            let pair = dataset
                .iter()
                .find(|p| p.country == question.subject || p.capital == question.subject)
                .unwrap();
            match question.kind {
                QuestionKind::CapitalOf => {
                    assert_eq!(question.subject, pair.country);
                    assert_eq!(question.correct_answer, pair.capital);
                    assert!(question.prompt.contains(&pair.country));
                }
                QuestionKind::CountryOf => {
                    assert_eq!(question.subject, pair.capital);
                    assert_eq!(question.correct_answer, pair.country);
                    assert!(question.prompt.contains(&pair.capital));
                }
            }
        }
    }

    #[test]
    fn test_minimum_dataset_uses_every_other_value() {
        let dataset = small_dataset();
        let mut rng = StdRng::seed_from_u64(8);

        let questions = generate(&dataset, &mut rng).unwrap();

        assert_eq!(questions.len(), 4);
        for question in &questions {
            assert_well_formed(question);
            let mut options = question.options.to_vec();
            options.sort();
            match question.kind {
                QuestionKind::CapitalOf => assert_eq!(options, ["a", "b", "c", "d"]),
                QuestionKind::CountryOf => assert_eq!(options, ["A", "B", "C", "D"]),
            }
        }
    }

    #[test]
    fn test_odd_dataset_split() {
        let mut dataset = small_dataset();
        dataset.push(CountryCapitalPair::new("E", "e"));
        let mut rng = StdRng::seed_from_u64(4);

        let questions = generate(&dataset, &mut rng).unwrap();
        let capital = questions
            .iter()
            .filter(|q| q.kind == QuestionKind::CapitalOf)
            .count();

        assert_eq!(capital, 2);
        assert_eq!(questions.len(), 5);
    }

    #[test]
    fn test_insufficient_data() {
        let dataset = small_dataset();
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            generate(&dataset[..3], &mut rng),
            Err(GenerateError::InsufficientData {
                found: 3,
                required: 4
            })
        );
    }

    #[test]
    fn test_dataset_is_not_mutated() {
        let dataset = small_dataset();
        let snapshot = dataset.clone();
        let mut rng = StdRng::seed_from_u64(6);

        let _ = generate(&dataset, &mut rng).unwrap();

        assert_eq!(dataset, snapshot);
    }
}
