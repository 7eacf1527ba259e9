use burn::tensor::{backend::Backend, Int, Tensor};

use crate::labels::TargetMeta;

use super::{
    doc::{check_class_count, score_values, score_with_name},
    FormatError, TokenRange, WordPrediction,
};

/// Format token-level predictions `[batch, seq]` with scores `[batch, seq, classes]`.
///
/// Each example yields one record per token range. Predicted positions past an example's last
/// token are padding and are skipped.
pub fn format<'a, B: Backend>(
    predictions: Tensor<B, 2, Int>,
    scores: Tensor<B, 3>,
    token_ranges: &'a [Vec<TokenRange>],
    target_meta: &'a TargetMeta,
) -> Result<impl Iterator<Item = Vec<WordPrediction>> + 'a, FormatError> {
    let [batch_size, seq_len] = predictions.dims();
    let [scored, scored_len, n_classes] = scores.dims();

    if scored != batch_size {
        return Err(FormatError::LengthMismatch {
            field: "scores",
            expected: batch_size,
            actual: scored,
        });
    }

    if token_ranges.len() != batch_size {
        return Err(FormatError::LengthMismatch {
            field: "token_ranges",
            expected: batch_size,
            actual: token_ranges.len(),
        });
    }

    if scored_len != seq_len {
        return Err(FormatError::SequenceMismatch {
            field: "scores",
            expected: seq_len,
            actual: scored_len,
        });
    }

    check_class_count(target_meta, n_classes)?;

    if let Some((example, ranges)) = token_ranges
        .iter()
        .enumerate()
        .find(|(_, ranges)| ranges.len() > seq_len)
    {
        return Err(FormatError::TokenOverflow {
            example,
            tokens: ranges.len(),
            positions: seq_len,
        });
    }

    // Padding positions may hold any index, so only positions under a token are checked
    let size = target_meta.vocab.len();
    let ids = predictions.into_data().convert::<i64>().value;
    for (example, ranges) in token_ranges.iter().enumerate() {
        for &index in &ids[example * seq_len..example * seq_len + ranges.len()] {
            if usize::try_from(index).map_or(true, |class_id| class_id >= size) {
                return Err(FormatError::UnknownClass { index, size });
            }
        }
    }

    let scores = score_values(scores);
    let names = target_meta.vocab.itos();

    Ok(token_ranges
        .iter()
        .enumerate()
        .map(move |(example, ranges)| {
            ranges
                .iter()
                .enumerate()
                .map(|(token, range)| {
                    let position = example * seq_len + token;
                    let class_id = ids[position] as usize;
                    let row = &scores[position * n_classes..(position + 1) * n_classes];

                    WordPrediction::new(
                        names[class_id].clone(),
                        score_with_name(names, row),
                        *range,
                    )
                })
                .collect()
        }))
}
