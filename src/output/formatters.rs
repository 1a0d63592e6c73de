//! Plain string formatting
//!
//! Pure formatting helpers, kept free of color and terminal access so they
//! stay deterministic under test. Coloring happens in `display`.

use rustc_hash::FxHashMap;

/// Spaces between words in a wrapped candidate listing.
pub const WORD_SPACING: usize = 2;

/// Lay out `words` in rows that fit within `columns` terminal cells, with
/// [`WORD_SPACING`] spaces between entries.
///
/// At least one word goes on each row even when the terminal is narrower
/// than a single word.
#[must_use]
pub fn wrap_words(words: &[String], word_length: usize, columns: usize) -> String {
    let mut rows: Vec<Vec<&str>> = Vec::new();

    for word in words {
        match rows.last_mut() {
            Some(row) if (row.len() + 1) * (word_length + WORD_SPACING) < columns => {
                row.push(word);
            }
            _ => rows.push(vec![word]),
        }
    }

    rows.iter()
        .map(|row| row.join(&" ".repeat(WORD_SPACING)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a letter histogram as bar rows, widest first.
///
/// Each row is `letter bar count`, the bar scaled so the most common letter
/// fills `width` cells. Ties order alphabetically.
#[must_use]
pub fn histogram_rows(histogram: &FxHashMap<char, usize>, width: usize) -> Vec<String> {
    let mut entries: Vec<(char, usize)> = histogram.iter().map(|(&c, &n)| (c, n)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let Some(&(_, max)) = entries.first() else {
        return Vec::new();
    };

    entries
        .into_iter()
        .map(|(letter, count)| {
            let filled = ((count * width) / max).max(1);
            format!(
                "{letter} {}{} {count}",
                "█".repeat(filled),
                " ".repeat(width - filled.min(width))
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn wrap_fits_words_to_columns() {
        let list = words(&["darts", "pants", "patas", "tapas"]);
        // 5-letter words plus spacing need 7 cells each; 22 columns fit three
        // per row under the strict-inequality rule.
        assert_eq!(
            wrap_words(&list, 5, 22),
            "darts  pants  patas\ntapas"
        );
    }

    #[test]
    fn wrap_single_row_when_wide() {
        let list = words(&["darts", "pants", "patas"]);
        assert_eq!(wrap_words(&list, 5, 120), "darts  pants  patas");
    }

    #[test]
    fn wrap_one_word_per_row_when_narrow() {
        let list = words(&["darts", "pants"]);
        assert_eq!(wrap_words(&list, 5, 3), "darts\npants");
    }

    #[test]
    fn wrap_empty_list() {
        assert_eq!(wrap_words(&[], 5, 80), "");
    }

    #[test]
    fn histogram_rows_scale_and_sort() {
        let mut histogram = FxHashMap::default();
        histogram.insert('e', 4);
        histogram.insert('s', 2);
        histogram.insert('a', 2);
        histogram.insert('z', 1);

        let rows = histogram_rows(&histogram, 8);
        assert_eq!(
            rows,
            vec![
                "e ████████ 4",
                "a ████     2",
                "s ████     2",
                "z ██       1",
            ]
        );
    }

    #[test]
    fn histogram_rows_keep_a_sliver_for_rare_letters() {
        let mut histogram = FxHashMap::default();
        histogram.insert('e', 100);
        histogram.insert('q', 1);

        let rows = histogram_rows(&histogram, 10);
        // 1/100 of 10 cells rounds to zero; a bar must still be visible.
        assert!(rows[1].starts_with("q █"));
    }

    #[test]
    fn histogram_rows_empty() {
        assert!(histogram_rows(&FxHashMap::default(), 10).is_empty());
    }
}
