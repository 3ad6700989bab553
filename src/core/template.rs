//! Template rendering
//!
//! Copies a template to an output line by line, substituting placeholder
//! tokens. Line terminators are preserved exactly, so text without
//! placeholders passes through byte for byte.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use super::replacements::Replacements;

/// Shape of a placeholder token
pub const TOKEN_PATTERN: &str = r"@[A-Z0-9_]+@";

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is valid"))
}

/// Whether a string is exactly one well-formed placeholder token
pub fn is_valid_token(token: &str) -> bool {
    token_regex()
        .find(token)
        .is_some_and(|m| m.start() == 0 && m.end() == token.len())
}

/// Render failure, split by which side of the copy failed
#[derive(Error, Debug)]
pub enum RenderError {
    /// Reading the template failed (including non-UTF-8 content)
    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    /// Writing the output failed
    #[error("write failed: {0}")]
    Write(#[source] io::Error),
}

/// Outcome of a render
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderStats {
    /// Lines written
    pub lines: usize,
    /// Placeholder occurrences replaced
    pub substitutions: usize,
    /// Placeholder-shaped tokens left in the output, with the first line (1-based) each appeared on
    pub unresolved: BTreeMap<String, usize>,
}

/// Render `input` into `output`, writing each line as soon as it is rewritten
pub fn render<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    replacements: &Replacements,
) -> Result<RenderStats, RenderError> {
    let mut stats = RenderStats::default();
    let mut line = String::new();

    loop {
        line.clear();
        if input.read_line(&mut line).map_err(RenderError::Read)? == 0 {
            break;
        }
        stats.lines += 1;

        let (rendered, count) = replacements.apply(&line);
        stats.substitutions += count;

        for m in token_regex().find_iter(&rendered) {
            stats
                .unresolved
                .entry(m.as_str().to_string())
                .or_insert(stats.lines);
        }

        output
            .write_all(rendered.as_bytes())
            .map_err(RenderError::Write)?;
    }

    output.flush().map_err(RenderError::Write)?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::MIN_PROPTEST_ITERATIONS;
    use crate::core::manifest::DependencyManifest;
    use crate::core::scheme::JoinStyle;
    use crate::test_utils::generators::{package_name, placeholder_token, plain_text};
    use proptest::prelude::*;

    fn render_str(template: &str, replacements: &Replacements) -> String {
        let mut out = Vec::with_capacity(template.len());
        render(template.as_bytes(), &mut out, replacements).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample_replacements(style: JoinStyle) -> Replacements {
        let manifest = DependencyManifest {
            required: vec!["foo".into(), "bar".into()],
            suggested: vec!["baz".into()],
        };
        let mut r = Replacements::from_manifest(&manifest, style);
        r.insert("@MD5@", "5eb63bbbe01eeed093cb22bb8f5acdc3");
        r
    }

    #[test]
    fn test_render_depends_line() {
        let out = render_str("depends=(@DEPENDS@)\n", &sample_replacements(JoinStyle::Space));
        assert_eq!(out, "depends=(foo bar)\n");
    }

    #[test]
    fn test_render_pkgbuild_template() {
        let template = "\
pkgname=kdevelop-git
depends=(@DEPENDS@)
optdepends=(@OPTDEPENDS@)
md5sums=('@MD5@')
";
        let mut out = Vec::new();
        let stats = render(
            template.as_bytes(),
            &mut out,
            &sample_replacements(JoinStyle::Space),
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\
pkgname=kdevelop-git
depends=(foo bar)
optdepends=(baz)
md5sums=('5eb63bbbe01eeed093cb22bb8f5acdc3')
"
        );
        assert_eq!(stats.lines, 4);
        assert_eq!(stats.substitutions, 3);
        assert!(stats.unresolved.is_empty());
    }

    #[test]
    fn test_render_indented_lists() {
        let out = render_str(
            "depends=(\n    @DEPENDS@\n)\n",
            &sample_replacements(JoinStyle::Indented),
        );
        assert_eq!(out, "depends=(\n    foo\n    bar\n)\n");
    }

    #[test]
    fn test_render_preserves_line_endings() {
        let r = sample_replacements(JoinStyle::Space);
        assert_eq!(render_str("a\r\n@OPTDEPENDS@\r\n", &r), "a\r\nbaz\r\n");
        assert_eq!(render_str("no newline @OPTDEPENDS@", &r), "no newline baz");
        assert_eq!(render_str("", &r), "");
    }

    #[test]
    fn test_render_reports_unresolved_tokens() {
        let mut out = Vec::new();
        let stats = render(
            "pkgver=@PKGVER@\ndepends=(@DEPENDS@)\n# @PKGVER@\n".as_bytes(),
            &mut out,
            &sample_replacements(JoinStyle::Space),
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "pkgver=@PKGVER@\ndepends=(foo bar)\n# @PKGVER@\n"
        );
        assert_eq!(stats.unresolved.len(), 1);
        assert_eq!(stats.unresolved.get("@PKGVER@"), Some(&1));
    }

    #[test]
    fn test_render_ignores_email_addresses() {
        let mut out = Vec::new();
        let stats = render(
            "# Maintainer: Jane <jane@example.org>\n".as_bytes(),
            &mut out,
            &Replacements::new(),
        )
        .unwrap();
        assert!(stats.unresolved.is_empty());
    }

    #[test]
    fn test_render_rejects_non_utf8_template() {
        let mut out = Vec::new();
        let result = render(&[b'a', b'\n', 0xff, b'\n'][..], &mut out, &Replacements::new());
        assert!(matches!(result, Err(RenderError::Read(_))));
        assert_eq!(out, b"a\n");
    }

    #[test]
    fn test_is_valid_token() {
        assert!(is_valid_token("@DEPENDS@"));
        assert!(is_valid_token("@SHA256_2@"));
        assert!(!is_valid_token("DEPENDS"));
        assert!(!is_valid_token("@depends@"));
        assert!(!is_valid_token("@DEPENDS@ "));
        assert!(!is_valid_token("@@"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(MIN_PROPTEST_ITERATIONS))]

        /// Text without placeholders is copied unchanged
        #[test]
        fn prop_plain_text_passes_through(text in plain_text()) {
            let out = render_str(&text, &sample_replacements(JoinStyle::Space));
            prop_assert_eq!(out, text);
        }

        /// Rendering the same input twice yields identical bytes
        #[test]
        fn prop_render_is_idempotent(
            text in plain_text(),
            names in proptest::collection::vec(package_name(), 0..5),
        ) {
            let manifest = DependencyManifest { required: names, suggested: vec![] };
            let r = Replacements::from_manifest(&manifest, JoinStyle::Space);
            let template = format!("{text}\ndepends=(@DEPENDS@)\n");
            prop_assert_eq!(render_str(&template, &r), render_str(&template, &r));
        }

        /// A depends line renders to the space-joined names
        #[test]
        fn prop_depends_line(names in proptest::collection::vec(package_name(), 0..8)) {
            let manifest = DependencyManifest { required: names.clone(), suggested: vec![] };
            let r = Replacements::from_manifest(&manifest, JoinStyle::Space);
            prop_assert_eq!(
                render_str("depends=(@DEPENDS@)\n", &r),
                format!("depends=({})\n", names.join(" "))
            );
        }

        /// A mapped token is substituted; an unmapped one is kept and reported
        #[test]
        fn prop_token_resolution(token in placeholder_token(), value in package_name()) {
            let template = format!("# header\nvalue={token}\n");

            let mut mapped = Replacements::new();
            mapped.insert(token.clone(), value.clone());
            let mut out = Vec::new();
            let stats = render(template.as_bytes(), &mut out, &mapped).unwrap();
            prop_assert_eq!(String::from_utf8(out).unwrap(), format!("# header\nvalue={value}\n"));
            prop_assert_eq!(stats.substitutions, 1);
            prop_assert!(stats.unresolved.is_empty());

            let mut out = Vec::new();
            let stats = render(template.as_bytes(), &mut out, &Replacements::new()).unwrap();
            prop_assert_eq!(String::from_utf8(out).unwrap(), template);
            prop_assert_eq!(stats.unresolved.get(&token), Some(&2));
        }
    }
}
