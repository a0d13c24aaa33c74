//! Request line splitting.
//!
//! A request line is split once, at its first whitespace character. The verb
//! is everything before it; the arguments are everything from it onward, so
//! script operations see their argument string with the leading separator
//! intact (`"PUTSCRIPT foo"` yields `" foo"`).
//!
//! A line without any whitespace is a bare verb: the whole line becomes the
//! verb and the arguments are empty. Splitting never fails.

/// A request line split into verb token and raw arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request<'line> {
    verb: &'line str,
    arguments: &'line str,
}

impl<'line> Request<'line> {
    /// Splits a request line at its first whitespace character.
    ///
    /// The line is expected without its line terminator. No other trimming
    /// takes place.
    #[must_use]
    pub fn parse(line: &'line str) -> Self {
        let (verb, arguments) = match line.find(char::is_whitespace) {
            Some(separator) => line.split_at(separator),
            None => (line, ""),
        };
        Self { verb, arguments }
    }

    /// Leading token, exactly as received.
    #[must_use]
    pub const fn verb(&self) -> &'line str {
        self.verb
    }

    /// Remainder of the line, including its leading separator.
    #[must_use]
    pub const fn arguments(&self) -> &'line str {
        self.arguments
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::single_argument("GETSCRIPT \"vacation\"", "GETSCRIPT", " \"vacation\"")]
    #[case::many_arguments(
        "RENAMESCRIPT \"old\" \"new\"",
        "RENAMESCRIPT",
        " \"old\" \"new\""
    )]
    #[case::bare_verb("CAPABILITY", "CAPABILITY", "")]
    #[case::trailing_separator("LISTSCRIPTS ", "LISTSCRIPTS", " ")]
    #[case::tab_separator("HAVESPACE\t\"x\" 10", "HAVESPACE", "\t\"x\" 10")]
    #[case::doubled_separator("SETACTIVE  \"x\"", "SETACTIVE", "  \"x\"")]
    #[case::leading_separator(" NOOP", "", " NOOP")]
    #[case::empty_line("", "", "")]
    fn splits_at_first_whitespace(
        #[case] line: &str,
        #[case] verb: &str,
        #[case] arguments: &str,
    ) {
        let request = Request::parse(line);
        assert_eq!(request.verb(), verb);
        assert_eq!(request.arguments(), arguments);
    }

    #[test]
    fn preserves_case_of_verb_token() {
        assert_eq!(Request::parse("putscript foo").verb(), "putscript");
    }

    #[test]
    fn splits_after_multibyte_verb() {
        let request = Request::parse("ÉCRIRE x");
        assert_eq!(request.verb(), "ÉCRIRE");
        assert_eq!(request.arguments(), " x");
    }
}
