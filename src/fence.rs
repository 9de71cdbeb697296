//! Fence Splitter — separates prose from a fenced code block.
//!
//! Model output often wraps the interesting part in triple backticks with
//! some commentary around it. `split_code_fences` pulls out (prefix, code,
//! suffix) for display; with no fence the whole trimmed input is the code.
//!
//! When the text contains several fenced blocks, only the first one is
//! extracted; later blocks stay in the suffix. Legacy behavior, kept as-is.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FENCE_RE: Regex =
        Regex::new(r"(?s)^(.*?)```[a-zA-Z]*\n?(.*?)\n?```(.*)$").unwrap();
}

/// A block of text split around its fenced code segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSplit {
    pub prefix: Option<String>,
    pub code: String,
    pub suffix: Option<String>,
}

/// Split `text` into prose before the fence, the fenced code, and prose after.
///
/// Empty prefix/suffix normalize to `None`. Pure and stateless.
pub fn split_code_fences(text: &str) -> FenceSplit {
    let trimmed = text.trim();

    let Some(caps) = FENCE_RE.captures(trimmed) else {
        // No code fence found, treat the full string as code
        return FenceSplit {
            prefix: None,
            code: trimmed.to_string(),
            suffix: None,
        };
    };

    let non_empty = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    };

    FenceSplit {
        prefix: non_empty(&caps[1]),
        code: caps[2].trim().to_string(),
        suffix: non_empty(&caps[3]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_fence_returns_whole_input_as_code() {
        let split = split_code_fences("no fence here");
        assert_eq!(split.prefix, None);
        assert_eq!(split.code, "no fence here");
        assert_eq!(split.suffix, None);
    }

    #[test]
    fn fence_with_language_tag_and_surrounding_prose() {
        let split = split_code_fences("intro\n```python\nprint(1)\n```\noutro");
        assert_eq!(split.prefix.as_deref(), Some("intro"));
        assert_eq!(split.code, "print(1)");
        assert_eq!(split.suffix.as_deref(), Some("outro"));
    }

    #[test]
    fn bare_fence_only() {
        let split = split_code_fences("```\nx=1\n```");
        assert_eq!(split.prefix, None);
        assert_eq!(split.code, "x=1");
        assert_eq!(split.suffix, None);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let split = split_code_fences("\n\n  intro\n```\ncode\n```  \n");
        assert_eq!(split.prefix.as_deref(), Some("intro"));
        assert_eq!(split.code, "code");
        assert_eq!(split.suffix, None);
    }

    #[test]
    fn multiline_code_survives_intact() {
        let split = split_code_fences("```python\nfor i in range(3):\n    print(i)\n```");
        assert_eq!(split.code, "for i in range(3):\n    print(i)");
    }

    #[test]
    fn multiple_fences_keep_first_block_rest_is_suffix() {
        // Legacy pairing per the lazy body group: the first opening fence
        // closes at the earliest closing fence, everything after is suffix.
        let split = split_code_fences("```\na\n```\nmiddle\n```\nb\n```");
        assert_eq!(split.prefix, None);
        assert_eq!(split.code, "a");
        assert_eq!(split.suffix.as_deref(), Some("middle\n```\nb\n```"));
    }

    #[test]
    fn empty_input_yields_empty_code() {
        let split = split_code_fences("   ");
        assert_eq!(split.prefix, None);
        assert_eq!(split.code, "");
        assert_eq!(split.suffix, None);
    }
}
