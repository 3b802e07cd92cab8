//! Approximate string matching used to score transcripts against intent text.
//!
//! Scores are dissimilarities in [0, 1]: 0.0 is an exact match, 1.0 means
//! nothing useful lines up.

/// Shared edit-distance table. With `anywhere` set, the first row is all
/// zeros and the answer is the minimum of the last row, so `pattern` may
/// align with any contiguous run of `text`.
fn edit_table(pattern: &[char], text: &[char], anywhere: bool) -> usize {
    let m = pattern.len();
    let n = text.len();

    let mut prev: Vec<usize> = if anywhere {
        vec![0; n + 1]
    } else {
        (0..=n).collect()
    };
    let mut curr = vec![0usize; n + 1];

    for (i, pc) in pattern.iter().enumerate() {
        curr[0] = i + 1;
        for (j, tc) in text.iter().enumerate() {
            let substitute = prev[j] + usize::from(pc != tc);
            curr[j + 1] = substitute.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    if anywhere {
        prev.into_iter().min().unwrap_or(m)
    } else {
        prev[n]
    }
}

/// Fewest edits turning `a` into `b`.
fn edit_distance(a: &[char], b: &[char]) -> usize {
    edit_table(a, b, false)
}

/// Fewest edits turning `pattern` into *some* contiguous substring of `text`.
pub fn substring_distance(pattern: &[char], text: &[char]) -> usize {
    if pattern.is_empty() {
        return 0;
    }
    edit_table(pattern, text, true)
}

/// `[start, end)` char ranges of the whitespace-separated words in `text`.
fn word_spans(text: &[char]) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;
    for (i, c) in text.iter().enumerate() {
        match (c.is_whitespace(), start) {
            (false, None) => start = Some(i),
            (true, Some(s)) => {
                spans.push((s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, text.len()));
    }
    spans
}

/// Fewest edits turning `field` into a run of whole words of `query`.
fn whole_word_distance(field: &[char], query: &[char]) -> usize {
    let spans = word_spans(query);
    let mut best = field.len();
    for (i, &(start, _)) in spans.iter().enumerate() {
        for &(_, end) in &spans[i..] {
            // Edits are at least the length difference; longer runs only get worse.
            if end - start > field.len() + best {
                break;
            }
            best = best.min(edit_distance(field, &query[start..end]));
        }
    }
    best
}

/// Dissimilarity between a query and one piece of intent text, both
/// already lowercased and split into chars.
///
/// The query is searched for anywhere inside the field. A field shorter
/// than the query is also compared against every run of whole words in the
/// query, so a keyword spoken inside a longer utterance still scores well
/// while a keyword hidden inside an unrelated word does not. Each direction
/// is normalized by the length of the side being searched for.
///
/// Returns `None` when either side is shorter than `min_len` characters.
pub fn match_score(query: &[char], field: &[char], min_len: usize) -> Option<f64> {
    let min_len = min_len.max(1);
    if query.len() < min_len || field.len() < min_len {
        return None;
    }

    let forward = substring_distance(query, field) as f64 / query.len() as f64;
    let reverse = if field.len() < query.len() {
        whole_word_distance(field, query) as f64 / field.len() as f64
    } else {
        1.0
    };

    Some(forward.min(reverse).min(1.0))
}
