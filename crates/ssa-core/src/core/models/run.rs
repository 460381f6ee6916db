/// A maximal span of identical secondary structure codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub code: char,
    pub start: usize,  // Index of the first residue of the run
    pub length: usize, // Number of residues, always >= 1
}

impl Run {
    /// Index one past the last residue of the run.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Iterator over the maximal runs of a label sequence.
pub struct Runs<I: Iterator<Item = char>> {
    chars: std::iter::Peekable<I>,
    index: usize,
}

impl<I: Iterator<Item = char>> Iterator for Runs<I> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let code = self.chars.next()?;
        let start = self.index;
        let mut length = 1;
        while self.chars.next_if_eq(&code).is_some() {
            length += 1;
        }
        self.index += length;
        Some(Run {
            code,
            start,
            length,
        })
    }
}

/// Lazily groups consecutive identical codes into runs.
pub fn runs<I: IntoIterator<Item = char>>(labels: I) -> Runs<I::IntoIter> {
    Runs {
        chars: labels.into_iter().peekable(),
        index: 0,
    }
}

/// Partitions a label string into its maximal runs.
pub fn segment_runs(labels: &str) -> Vec<Run> {
    runs(labels.chars()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(labels: &str) -> Vec<(char, usize)> {
        segment_runs(labels)
            .into_iter()
            .map(|r| (r.code, r.length))
            .collect()
    }

    #[test]
    fn groups_consecutive_codes() {
        assert_eq!(summary(">>----aaa"), vec![('>', 2), ('-', 4), ('a', 3)]);
    }

    #[test]
    fn single_code_is_one_run() {
        assert_eq!(summary("0"), vec![('0', 1)]);
    }

    #[test]
    fn empty_sequence_has_no_runs() {
        assert!(segment_runs("").is_empty());
    }

    #[test]
    fn run_starts_follow_label_changes() {
        let runs = segment_runs("LLLSSSSSLLLLLHHHHHHHHLLLHHHHHHHHLLLLLLLLLSSSSSSLLLL");
        let codes: String = runs.iter().map(|r| r.code).collect();
        let starts: Vec<usize> = runs.iter().map(|r| r.start).collect();

        assert_eq!(runs.len(), 9);
        assert_eq!(codes, "LSLHLHLSL");
        assert_eq!(starts, vec![0, 3, 8, 13, 21, 24, 32, 41, 47]);
        assert_eq!(runs.last().map(Run::end), Some(51));
    }

    #[test]
    fn runs_cover_the_sequence_without_gaps() {
        let labels = "HHLLLEEEEEH";
        let runs = segment_runs(labels);
        let mut expected_start = 0;
        for run in &runs {
            assert_eq!(run.start, expected_start);
            assert!(run.length >= 1);
            expected_start = run.end();
        }
        assert_eq!(expected_start, labels.chars().count());
    }

    #[test]
    fn works_with_multibyte_codes() {
        assert_eq!(summary("ααβ"), vec![('α', 2), ('β', 1)]);
    }
}
