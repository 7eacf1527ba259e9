use burn::tensor::{backend::Backend, Int, Tensor};

use indexmap::IndexMap;

use crate::labels::TargetMeta;

use super::{DocPrediction, FormatError};

/// Format document-level predictions `[batch]` with scores `[batch, classes]`
pub fn format<'a, B: Backend>(
    predictions: Tensor<B, 1, Int>,
    scores: Tensor<B, 2>,
    target_meta: &'a TargetMeta,
) -> Result<impl Iterator<Item = DocPrediction> + 'a, FormatError> {
    let [batch_size] = predictions.dims();
    let [scored, n_classes] = scores.dims();

    if scored != batch_size {
        return Err(FormatError::LengthMismatch {
            field: "scores",
            expected: batch_size,
            actual: scored,
        });
    }

    check_class_count(target_meta, n_classes)?;

    let class_ids = class_ids(predictions, target_meta)?;
    let scores = score_values(scores);
    let names = target_meta.vocab.itos();

    Ok(class_ids.into_iter().enumerate().map(move |(i, class_id)| {
        let row = &scores[i * n_classes..(i + 1) * n_classes];

        DocPrediction::new(names[class_id].clone(), score_with_name(names, row))
    }))
}

/// Make sure the score width matches the number of named classes
pub(crate) fn check_class_count(target_meta: &TargetMeta, n_classes: usize) -> Result<(), FormatError> {
    let vocab_size = target_meta.vocab.len();

    if n_classes != vocab_size {
        return Err(FormatError::ClassCountMismatch {
            expected: vocab_size,
            actual: n_classes,
        });
    }

    Ok(())
}

/// Read predicted class indexes off the device, rejecting any without a name
pub(crate) fn class_ids<B: Backend, const D: usize>(
    predictions: Tensor<B, D, Int>,
    target_meta: &TargetMeta,
) -> Result<Vec<usize>, FormatError> {
    let size = target_meta.vocab.len();

    predictions
        .into_data()
        .convert::<i64>()
        .value
        .into_iter()
        .map(|index| match usize::try_from(index) {
            Ok(class_id) if class_id < size => Ok(class_id),
            _ => Err(FormatError::UnknownClass { index, size }),
        })
        .collect()
}

/// Read scores off the device as a flat, row-major list
pub(crate) fn score_values<B: Backend, const D: usize>(scores: Tensor<B, D>) -> Vec<f32> {
    scores.into_data().convert::<f32>().value
}

/// Pair every class name with its score
pub(crate) fn score_with_name(names: &[String], row: &[f32]) -> IndexMap<String, f32> {
    names.iter().cloned().zip(row.iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use burn::backend::NdArray;
    use pretty_assertions::assert_eq;

    use crate::labels::Vocab;

    use super::*;

    type TestBackend = NdArray;

    fn sentiment() -> TargetMeta {
        TargetMeta::new(["POS", "NEG"].into_iter().collect::<Vocab>())
    }

    #[test]
    fn test_format_single_prediction() {
        let device = Default::default();
        let meta = sentiment();

        let predictions = Tensor::<TestBackend, 1, Int>::from_ints([0], &device);
        let scores = Tensor::<TestBackend, 2>::from_floats([[0.9, 0.1]], &device);

        let records: Vec<_> = format(predictions, scores, &meta).unwrap().collect();

        assert_eq!(
            records,
            vec![DocPrediction::new(
                "POS".to_string(),
                IndexMap::from([("POS".to_string(), 0.9), ("NEG".to_string(), 0.1)]),
            )]
        );

        let json = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "prediction": "POS", "score": { "POS": 0.9_f32, "NEG": 0.1_f32 } })
        );
    }

    #[test]
    fn test_format_batch() {
        let device = Default::default();
        let meta = sentiment();

        let predictions = Tensor::<TestBackend, 1, Int>::from_ints([1, 0, 1], &device);
        let scores = Tensor::<TestBackend, 2>::from_floats(
            [[0.3, 0.7], [0.6, 0.4], [0.2, 0.8]],
            &device,
        );

        let records: Vec<_> = format(predictions, scores, &meta).unwrap().collect();

        let names: Vec<_> = records.iter().map(|r| r.prediction.as_str()).collect();
        assert_eq!(names, vec!["NEG", "POS", "NEG"]);

        for record in &records {
            assert_eq!(record.score.len(), meta.vocab.len());
        }
        assert_eq!(records[2].score["NEG"], 0.8);
    }

    #[test]
    fn test_scores_keep_vocabulary_order() {
        let device = Default::default();
        let names = ["h", "e", "a", "b", "d", "f", "c", "g"];
        let meta = TargetMeta::new(names.into_iter().collect::<Vocab>());

        let predictions = Tensor::<TestBackend, 1, Int>::from_ints([2], &device);
        let scores = Tensor::<TestBackend, 2>::from_floats(
            [[0.0, 0.0625, 0.5, 0.125, 0.0, 0.25, 0.0, 0.0625]],
            &device,
        );

        let records: Vec<_> = format(predictions, scores, &meta).unwrap().collect();

        let keys: Vec<_> = records[0].score.keys().map(String::as_str).collect();
        assert_eq!(keys, names.to_vec());

        assert_eq!(
            serde_json::to_string(&records[0]).unwrap(),
            r#"{"prediction":"a","score":{"h":0.0,"e":0.0625,"a":0.5,"b":0.125,"d":0.0,"f":0.25,"c":0.0,"g":0.0625}}"#
        );
    }

    #[test]
    fn test_length_mismatch() {
        let device = Default::default();
        let meta = sentiment();

        let predictions = Tensor::<TestBackend, 1, Int>::from_ints([0, 1], &device);
        let scores = Tensor::<TestBackend, 2>::from_floats([[0.9, 0.1]], &device);

        let result = format(predictions, scores, &meta).map(|records| records.count());

        assert_eq!(
            result,
            Err(FormatError::LengthMismatch {
                field: "scores",
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_class_count_mismatch() {
        let device = Default::default();
        let meta = sentiment();

        let predictions = Tensor::<TestBackend, 1, Int>::from_ints([0], &device);
        let scores = Tensor::<TestBackend, 2>::from_floats([[0.5, 0.3, 0.2]], &device);

        let result = format(predictions, scores, &meta).map(|records| records.count());

        assert_eq!(
            result,
            Err(FormatError::ClassCountMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_unknown_class() {
        let device = Default::default();
        let meta = sentiment();

        let predictions = Tensor::<TestBackend, 1, Int>::from_ints([2], &device);
        let scores = Tensor::<TestBackend, 2>::from_floats([[0.5, 0.5]], &device);

        let result = format(predictions, scores, &meta).map(|records| records.count());

        assert_eq!(result, Err(FormatError::UnknownClass { index: 2, size: 2 }));
    }
}
