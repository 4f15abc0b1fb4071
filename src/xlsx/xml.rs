//! XML helpers.

/// Escape XML special characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_the_five_entities() {
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(
            escape_xml("<t>\"x\" 'y'</t>"),
            "&lt;t&gt;&quot;x&quot; &apos;y&apos;&lt;/t&gt;"
        );
    }
}
