//! Reading-time estimation
//!
//! Counts words the way the blog front-end always has: split on single
//! spaces, no trimming, no punctuation handling. Consecutive spaces count as
//! words. This is an approximation, not a tokenizer.

use super::post::ContentBlock;

/// Average reading speed used for the estimate
const WORDS_PER_MINUTE: u64 = 200;

/// Estimate the reading time of a post body in whole minutes, rounded up.
///
/// An empty body yields 0; a single word yields 1.
pub fn estimate(blocks: &[ContentBlock]) -> u64 {
    let total_words: u64 = blocks
        .iter()
        .map(|block| word_count(&block.heading) + word_count(&block.body.as_text()))
        .sum();

    total_words.div_ceil(WORDS_PER_MINUTE)
}

/// Naive space-delimited word count
fn word_count(text: &str) -> u64 {
    text.split(' ').count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::richtext::{NodeKind, RichText, TextNode};

    /// A string that counts as exactly `n` words
    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    fn block(heading: &str, body: &str) -> ContentBlock {
        ContentBlock {
            heading: heading.to_string(),
            body: RichText(vec![TextNode {
                kind: NodeKind::Paragraph,
                text: body.to_string(),
            }]),
        }
    }

    #[test]
    fn test_empty_content_is_zero_minutes() {
        assert_eq!(estimate(&[]), 0);
    }

    #[test]
    fn test_single_word_rounds_up_to_one_minute() {
        // heading "word" + body "word" = 2 words, still under a minute
        assert_eq!(estimate(&[block("word", "word")]), 1);
    }

    #[test]
    fn test_exactly_200_words_is_one_minute() {
        assert_eq!(estimate(&[block(&words(100), &words(100))]), 1);
    }

    #[test]
    fn test_201_words_is_two_minutes() {
        assert_eq!(estimate(&[block(&words(100), &words(101))]), 2);
    }

    #[test]
    fn test_sums_across_blocks() {
        let blocks = vec![
            block(&words(50), &words(150)),
            block(&words(100), &words(100)),
            block(&words(2), &words(99)),
        ];
        // 501 words total, ceiling of 501/200
        assert_eq!(estimate(&blocks), 3);
    }

    #[test]
    fn test_monotonic_in_word_count() {
        let mut last = 0;
        for n in [1, 50, 200, 201, 399, 400, 1000] {
            let minutes = estimate(&[block("heading words here", &words(n))]);
            assert!(minutes >= last, "estimate went down at {} words", n);
            last = minutes;
        }
    }

    #[test]
    fn test_consecutive_spaces_count_as_words() {
        // "a  b" splits into three tokens; the approximation is accepted
        assert_eq!(estimate(&[block("a  b", &words(197))]), 1);
        assert_eq!(estimate(&[block("a  b", &words(198))]), 2);
    }
}
