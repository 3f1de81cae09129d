//! Go syntax helpers shared by the render passes.

/// Go keywords, which are never valid identifiers.
const KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range", "return",
    "select", "struct", "switch", "type", "var",
];

/// Returns true if `name` is a valid Go identifier.
///
/// ## Examples
///
/// ```
/// use reader_gen::codegen::go::is_identifier;
///
/// assert!(is_identifier("NextToken"));
/// assert!(is_identifier("ec2"));
/// assert!(!is_identifier("2fa"));
/// assert!(!is_identifier("type"));
/// assert!(!is_identifier(""));
/// ```
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
        && !KEYWORDS.contains(&name)
}

/// Returns true if `path` is a dot-separated chain of Go identifiers, such
/// as `DistributionList.Items` or `ec2.Instance`.
///
/// ## Examples
///
/// ```
/// use reader_gen::codegen::go::is_selector;
///
/// assert!(is_selector("Instances"));
/// assert!(is_selector("DistributionList.NextMarker"));
/// assert!(!is_selector("Reservations#Instances"));
/// assert!(!is_selector("Items."));
/// ```
pub fn is_selector(path: &str) -> bool {
    path.split('.').all(is_identifier)
}

/// Renders documentation text as Go line comments with the given indent.
///
/// Lines that are already comments are kept as they are (after trimming),
/// blank lines become a bare `//`, and leading/trailing blank lines are
/// dropped. Empty documentation renders nothing.
///
/// ## Examples
///
/// ```
/// use reader_gen::codegen::go::comment_lines;
///
/// assert_eq!(
///     comment_lines("GetVpcs returns all VPCs\n\nDeprecated: use GetVPCs", "\t"),
///     "\t// GetVpcs returns all VPCs\n\t//\n\t// Deprecated: use GetVPCs\n"
/// );
/// assert_eq!(comment_lines("// already a comment", ""), "// already a comment\n");
/// assert_eq!(comment_lines("   ", "\t"), "");
/// ```
pub fn comment_lines(text: &str, indent: &str) -> String {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let Some(first) = lines.iter().position(|line| !line.is_empty()) else {
        return String::new();
    };
    let last = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .unwrap_or(first);

    let mut out = String::new();
    for line in &lines[first..=last] {
        out.push_str(indent);
        if line.is_empty() {
            out.push_str("//");
        } else if line.starts_with("//") {
            out.push_str(line);
        } else {
            out.push_str("// ");
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}
