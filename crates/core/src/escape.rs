//! Escaping for embedding arbitrary text inside a back-quoted template literal

/// Escape text so it can sit between the backticks of a JS/TS template
/// literal without terminating it or opening an interpolation.
///
/// Two passes, in this order:
/// 1. Every `` ` `` becomes `` \` ``
/// 2. Every `${` becomes `\${`
///
/// Neither pass can produce input for the other, so the output never contains
/// double escapes. Backslashes already in the source are left alone, which
/// means a source containing `` \` `` or `\${` comes out mis-escaped (the
/// pre-existing backslash escapes the inserted one). That's a known
/// limitation; the files we inline don't contain those sequences.
///
/// ```
/// use inliner_core::escape_template_literal;
///
/// assert_eq!(
///     escape_template_literal("const s = `${a}`;"),
///     r"const s = \`\${a}\`;",
/// );
/// ```
pub fn escape_template_literal(text: &str) -> String {
    text.replace('`', "\\`").replace("${", "\\${")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::empty("", "")]
    #[case::plain("const x = 1;", "const x = 1;")]
    #[case::backticks("`hello`", r"\`hello\`")]
    #[case::interpolation("${name}", r"\${name}")]
    #[case::interpolation_in_literal("`Hi ${name}!`", r"\`Hi \${name}!\`")]
    // A dollar sign or brace on its own is harmless
    #[case::lone_dollar("cost: $5 {x}", "cost: $5 {x}")]
    #[case::dollar_space_brace("$ {x}", "$ {x}")]
    #[case::multiline(
        "const a = `x`;\nconst b = `${a}`;\n",
        "const a = \\`x\\`;\nconst b = \\`\\${a}\\`;\n"
    )]
    #[case::unicode("const 名前 = `é`;", r"const 名前 = \`é\`;")]
    fn test_escape(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_template_literal(input), expected);
    }

    /// Pre-existing backslashes aren't escaped. The output here would read as
    /// an escaped backslash followed by a bare backtick inside a template
    /// literal. This pins the behavior so it doesn't change by accident.
    #[rstest]
    #[case::backslash_backtick(r"\`", r"\\`")]
    #[case::backslash_interpolation(r"\${", r"\\${")]
    fn test_escape_existing_backslash(
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(escape_template_literal(input), expected);
    }

    /// Every backtick in the output is preceded by a backslash, and so is
    /// every `${`
    #[test]
    fn test_escape_no_bare_specials() {
        let input = "``${${`a${b}`}";
        let escaped = escape_template_literal(input);
        for (i, _) in escaped.match_indices('`') {
            assert!(escaped[..i].ends_with('\\'), "Bare backtick at {i}");
        }
        for (i, _) in escaped.match_indices("${") {
            assert!(escaped[..i].ends_with('\\'), "Bare `${{` at {i}");
        }
    }
}
