use crate::core::types::{ClassificationResult, EditOp, EditTag, ErrorPair};

/// Classify every entry of an edit script as a correct, added, removed or replaced word.
///
/// A single left-to-right pass:
///
/// - `Match` counts as correct.
/// - An `Insert` directly followed by a `Delete`, or a `Delete` directly followed
///   by an `Insert`, is one replaced word. The pair is recorded with the
///   reference (deleted) token first, and both entries are consumed.
/// - Any other `Insert` is an added word, any other `Delete` a removed word.
///
/// Mismatches in the last two positions of the script are not counted at all.
/// Scores computed on legacy data carry the same undercount, so it is kept for
/// parity.
#[must_use]
pub fn classify(ops: &[EditOp<'_>]) -> ClassificationResult {
    let n = ops.len();
    let mut result = ClassificationResult::default();
    let mut skip_next = false;

    for (i, op) in ops.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }

        if op.tag == EditTag::Match {
            result.correct += 1;
            continue;
        }

        if i + 2 >= n {
            continue;
        }

        let next = &ops[i + 1];
        if op.tag.opposite() == Some(next.tag) {
            let (reference, hypothesis) = if op.tag == EditTag::Delete {
                (op, next)
            } else {
                (next, op)
            };
            result
                .error_pairs
                .push(ErrorPair::new(reference.token, hypothesis.token));
            skip_next = true;
        } else if op.tag == EditTag::Insert {
            result.added += 1;
        } else {
            result.removed += 1;
        }
    }

    result
}
