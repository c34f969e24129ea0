use thiserror::Error;

use crate::core::types::{EditOp, EditTag};
use crate::utils::validation::check_token_limit;

#[derive(Error, Debug)]
pub enum AlignError {
    #[error("{side} {message}")]
    SequenceTooLong { side: &'static str, message: String },
}

/// Align a reference and a hypothesis token sequence, then apply the tail trim.
///
/// This is [`edit_script`] followed by [`tail_trim`].
///
/// # Errors
///
/// Returns `AlignError::SequenceTooLong` if either sequence exceeds the token limit.
pub fn align<'a, R, H>(
    reference: &'a [R],
    hypothesis: &'a [H],
) -> Result<Vec<EditOp<'a>>, AlignError>
where
    R: AsRef<str>,
    H: AsRef<str>,
{
    let mut ops = edit_script(reference, hypothesis)?;
    tail_trim(&mut ops);
    Ok(ops)
}

/// Compute a minimal match/insert/delete script using longest common subsequence.
///
/// Tokens are compared by exact string equality. The script walks both sequences
/// left to right; at a mismatch it deletes from the reference whenever that keeps
/// the common subsequence as long as inserting from the hypothesis would, so
/// within a differing region deletions come before insertions.
///
/// Concatenating the `Match` and `Delete` tokens reproduces `reference`;
/// concatenating the `Match` and `Insert` tokens reproduces `hypothesis`.
///
/// # Errors
///
/// Returns `AlignError::SequenceTooLong` if either sequence exceeds the token limit.
pub fn edit_script<'a, R, H>(
    reference: &'a [R],
    hypothesis: &'a [H],
) -> Result<Vec<EditOp<'a>>, AlignError>
where
    R: AsRef<str>,
    H: AsRef<str>,
{
    if let Some(message) = check_token_limit(reference.len()) {
        return Err(AlignError::SequenceTooLong {
            side: "reference",
            message,
        });
    }
    if let Some(message) = check_token_limit(hypothesis.len()) {
        return Err(AlignError::SequenceTooLong {
            side: "hypothesis",
            message,
        });
    }

    let n = reference.len();
    let m = hypothesis.len();
    let width = m + 1;

    // suffix[i * width + j] = LCS length of reference[i..] and hypothesis[j..]
    let mut suffix = vec![0u32; (n + 1) * width];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            suffix[i * width + j] = if reference[i].as_ref() == hypothesis[j].as_ref() {
                suffix[(i + 1) * width + j + 1] + 1
            } else {
                suffix[(i + 1) * width + j].max(suffix[i * width + j + 1])
            };
        }
    }

    let mut ops = Vec::with_capacity(n + m);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        let r = reference[i].as_ref();
        let h = hypothesis[j].as_ref();
        if r == h {
            ops.push(EditOp::matched(r));
            i += 1;
            j += 1;
        } else if suffix[(i + 1) * width + j] >= suffix[i * width + j + 1] {
            ops.push(EditOp::delete(r));
            i += 1;
        } else {
            ops.push(EditOp::insert(h));
            j += 1;
        }
    }
    ops.extend(reference[i..].iter().map(|t| EditOp::delete(t.as_ref())));
    ops.extend(hypothesis[j..].iter().map(|t| EditOp::insert(t.as_ref())));

    Ok(ops)
}

/// Drop a trailing run of same-tag mismatches from an edit script.
///
/// If the last entry is an insertion (or deletion), every consecutive insertion
/// (or deletion) at the end is removed. A trailing match leaves the script
/// unchanged, so no `Match` is ever removed. This discards words at the end of a
/// reading pass where the recognizer stopped early or ran on.
pub fn tail_trim(ops: &mut Vec<EditOp<'_>>) {
    let Some(tail_tag) = ops.last().map(|op| op.tag) else {
        return;
    };
    if tail_tag == EditTag::Match {
        return;
    }
    while ops.last().is_some_and(|op| op.tag == tail_tag) {
        ops.pop();
    }
}
