//! Batch language definition
//!
//! Holds the ordered rule table and decides which files it applies to.

use std::path::Path;

use log::trace;
use regex::Regex;

use super::rules::{Highlight, Rule, RuleKind};
use crate::error::Result;

/// `%NAME%` or `!NAME!`; the name may not contain `%`
const VARIABLE_PATTERN: &str = r"[!%]([^%]+)[!%]";

/// `%1`, `%*`, `%~dp0`, `%%i` and friends
const ARGUMENT_PATTERN: &str = r"%(%*[*_~a-zA-Z0-9]*)";

/// Case-sensitive on purpose: `REM ` lines are left plain
const COMMENT_MARKER: &str = "rem ";

/// Syntax definition for DOS/Windows batch files
pub struct BatchSyntax {
    /// File extensions, lowercase, without the dot
    pub extensions: Vec<String>,
    /// Rules in evaluation order
    rules: Vec<Rule>,
}

impl BatchSyntax {
    /// Build the batch rule table
    pub fn new() -> Result<Self> {
        let rules = vec![
            Rule::new("label", RuleKind::Label),
            Rule::new("comment", RuleKind::Comment(COMMENT_MARKER)),
            Rule::new("variable", RuleKind::Variable(Regex::new(VARIABLE_PATTERN)?)),
            Rule::new("argument", RuleKind::Argument(Regex::new(ARGUMENT_PATTERN)?)),
        ];

        Ok(Self {
            extensions: vec!["bat".to_string(), "cmd".to_string()],
            rules,
        })
    }

    /// Whether files with this path's extension are batch files
    pub fn handles(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        let ext = ext.to_lowercase();
        self.extensions.iter().any(|e| *e == ext)
    }

    /// Classify one line
    ///
    /// Total over every input: a line no rule claims is `Plain`, or `Blank`
    /// if it is empty once trimmed.
    pub fn classify(&self, raw: &str) -> Highlight {
        let trimmed = raw.trim();

        for rule in &self.rules {
            if let Some(highlight) = rule.apply(raw, trimmed) {
                trace!("rule {} matched {:?}", rule.name, raw);
                return highlight;
            }
        }

        if trimmed.is_empty() {
            Highlight::Blank
        } else {
            Highlight::Plain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenType;

    fn syntax() -> BatchSyntax {
        BatchSyntax::new().unwrap()
    }

    fn texts(highlight: &Highlight, line: &str) -> Vec<String> {
        highlight
            .segments(line)
            .iter()
            .map(|s| s.text.to_string())
            .collect()
    }

    #[test]
    fn test_handles_extensions() {
        let batch = syntax();
        assert!(batch.handles(Path::new("build.bat")));
        assert!(batch.handles(Path::new("BUILD.BAT")));
        assert!(batch.handles(Path::new("dir/setup.Cmd")));
        assert!(!batch.handles(Path::new("script.sh")));
        assert!(!batch.handles(Path::new("bat")));
        assert!(!batch.handles(Path::new("archive.bat.txt")));
    }

    #[test]
    fn test_label_up_to_first_space() {
        let batch = syntax();
        let line = ":loop  rest of it  ";
        let highlight = batch.classify(line);
        assert_eq!(highlight, Highlight::Label { split: 5 });
        assert_eq!(texts(&highlight, line), vec![":loop", "  rest of it"]);
    }

    #[test]
    fn test_label_without_space_is_trimmed_line() {
        let batch = syntax();
        let line = ":eof\t";
        let highlight = batch.classify(line);
        assert_eq!(texts(&highlight, line), vec![":eof", ""]);
    }

    #[test]
    fn test_label_beats_comment() {
        let batch = syntax();
        assert!(matches!(batch.classify(":: rem not a comment"), Highlight::Label { .. }));
    }

    #[test]
    fn test_indented_label_splits_at_leading_space() {
        let batch = syntax();
        let line = "  :sub";
        assert_eq!(batch.classify(line), Highlight::Label { split: 0 });
        assert_eq!(texts(&batch.classify(line), line), vec!["", "  :sub"]);
    }

    #[test]
    fn test_comment_split_at_first_lowercase_rem() {
        let batch = syntax();
        let line = "echo x & rem say %X% rem again";
        let highlight = batch.classify(line);
        assert_eq!(highlight, Highlight::Comment { start: 9 });
        assert_eq!(texts(&highlight, line), vec!["echo x & ", "rem say %X% rem again"]);
    }

    #[test]
    fn test_uppercase_rem_is_not_a_comment() {
        let batch = syntax();
        assert_eq!(batch.classify("REM just text"), Highlight::Plain);
        assert_eq!(batch.classify("Rem just text"), Highlight::Plain);
        // no trailing space after rem
        assert_eq!(batch.classify("echo rem"), Highlight::Plain);
    }

    #[test]
    fn test_delayed_expansion_variable() {
        let batch = syntax();
        let line = "set !X!=1";
        let highlight = batch.classify(line);
        assert_eq!(highlight, Highlight::VariableRef { start: 4, name: 5..6, end: 7 });

        let segments = highlight.segments(line);
        assert_eq!(segments[1].text, "!");
        assert_eq!(segments[1].token, TokenType::VariableSymbol);
        assert_eq!(segments[2].text, "X");
        assert_eq!(segments[2].token, TokenType::VariableName);
        assert_eq!(segments[3].text, "!");
        assert_eq!(segments[4].text, "=1");
    }

    #[test]
    fn test_percent_variable_first_match_only() {
        let batch = syntax();
        let line = "copy %SRC% %DST%";
        let highlight = batch.classify(line);
        assert_eq!(texts(&highlight, line), vec!["copy ", "%", "SRC", "%", " %DST%"]);
    }

    #[test]
    fn test_positional_argument() {
        let batch = syntax();
        let line = "echo %~dp0";
        let highlight = batch.classify(line);
        assert_eq!(highlight, Highlight::PositionalArg { start: 5, end: 10 });

        let segments = highlight.segments(line);
        assert_eq!(segments[1].text, "%");
        assert_eq!(segments[2].text, "~dp0");
        assert_eq!(segments[2].token, TokenType::VariableName);
        assert_eq!(segments[3].text, "");
    }

    #[test]
    fn test_other_arguments() {
        let batch = syntax();
        let cases = [
            ("shift %1 later", "1"),
            ("call %*", "*"),
            ("for %%i in (*) do echo", "%i"),
            ("echo 100%", ""),
        ];
        for (line, token) in cases {
            let highlight = batch.classify(line);
            assert!(matches!(highlight, Highlight::PositionalArg { .. }), "{line}");
            assert_eq!(highlight.segments(line)[2].text, token, "{line}");
        }
    }

    #[test]
    fn test_unclosed_delimiter_falls_through() {
        let batch = syntax();
        // `%` never closes, so the argument rule picks it up with an empty token
        assert_eq!(
            batch.classify("echo 50% off"),
            Highlight::PositionalArg { start: 7, end: 8 }
        );
        assert_eq!(batch.classify("echo !oops"), Highlight::Plain);
        // either delimiter closes either kind
        assert_eq!(
            batch.classify("echo !a %b"),
            Highlight::VariableRef { start: 5, name: 6..8, end: 9 }
        );
    }

    #[test]
    fn test_plain_and_blank() {
        let batch = syntax();
        assert_eq!(batch.classify("@echo off"), Highlight::Plain);
        assert_eq!(batch.classify(""), Highlight::Blank);
        assert_eq!(batch.classify(" \t "), Highlight::Blank);
        assert_eq!(texts(&Highlight::Blank, " \t "), vec!["  "]);
    }

    #[test]
    fn test_segments_rebuild_trimmed_line() {
        let batch = syntax();
        let lines = [
            ":label here   ",
            ":label",
            "  rem indented comment  ",
            "set !X!=1",
            "if \"%~1\"==\"\" goto :usage  ",
            "echo %~dp0\t",
            "xcopy /s /y src dst ",
            "echo %",
            "caf\u{e9} %na\u{ef}ve% ok",
        ];
        for line in lines {
            let joined: String = batch
                .classify(line)
                .segments(line)
                .iter()
                .map(|s| s.text)
                .collect();
            assert_eq!(joined, line.trim_end(), "{line:?}");
        }
    }
}
