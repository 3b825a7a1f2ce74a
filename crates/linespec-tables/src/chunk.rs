//! Blank-line-delimited sectioning of the raw table.

use std::iter::Enumerate;
use std::str::Lines;

/// One non-blank table line with its 1-based source line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Lazy iterator over chunks: maximal runs of non-blank lines. A blank line
/// yields the accumulated chunk even when it is empty; at end of input the
/// final chunk is yielded only if non-empty, so trailing blank lines do not
/// fabricate an extra section.
pub struct Chunks<'a> {
    lines: Enumerate<Lines<'a>>,
    done: bool,
}

pub fn chunks(input: &str) -> Chunks<'_> {
    Chunks {
        lines: input.lines().enumerate(),
        done: false,
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Vec<Line<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut chunk = Vec::new();
        loop {
            match self.lines.next() {
                Some((idx, raw)) => {
                    let text = raw.trim();
                    if text.is_empty() {
                        return Some(chunk);
                    }
                    chunk.push(Line {
                        number: idx + 1,
                        text,
                    });
                }
                None => {
                    self.done = true;
                    return if chunk.is_empty() { None } else { Some(chunk) };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(chunk: &'a [Line<'a>]) -> Vec<&'a str> {
        chunk.iter().map(|l| l.text).collect()
    }

    #[test]
    fn splits_on_blank_lines() {
        let got: Vec<_> = chunks("a\nb\n\nc\n").collect();
        assert_eq!(got.len(), 2);
        assert_eq!(texts(&got[0]), ["a", "b"]);
        assert_eq!(texts(&got[1]), ["c"]);
    }

    #[test]
    fn blank_line_yields_empty_chunk() {
        let got: Vec<_> = chunks("a\n\n\nb\n").collect();
        assert_eq!(got.len(), 3);
        assert_eq!(texts(&got[0]), ["a"]);
        assert!(got[1].is_empty());
        assert_eq!(texts(&got[2]), ["b"]);
    }

    #[test]
    fn leading_blank_yields_empty_first_chunk() {
        let got: Vec<_> = chunks("\na\n").collect();
        assert_eq!(got.len(), 2);
        assert!(got[0].is_empty());
        assert_eq!(texts(&got[1]), ["a"]);
    }

    #[test]
    fn final_chunk_without_trailing_newline() {
        let got: Vec<_> = chunks("a\n\nb").collect();
        assert_eq!(got.len(), 2);
        assert_eq!(texts(&got[1]), ["b"]);
    }

    #[test]
    fn trailing_blanks_produce_no_extra_chunk() {
        let got: Vec<_> = chunks("a\n\n").collect();
        assert_eq!(got.len(), 1);
    }

    #[test]
    fn whitespace_only_line_is_blank() {
        let got: Vec<_> = chunks("a\n   \t\nb\n").collect();
        assert_eq!(got.len(), 2);
    }

    #[test]
    fn line_numbers_are_one_based() {
        let got: Vec<_> = chunks("a\n\nb\nc\n").collect();
        assert_eq!(got[0][0].number, 1);
        assert_eq!(got[1][0].number, 3);
        assert_eq!(got[1][1].number, 4);
    }

    #[test]
    fn empty_input() {
        assert_eq!(chunks("").count(), 0);
    }
}
