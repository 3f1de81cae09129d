//! Generated-file marker and package clause.
//!
//! The marker comes first so Go tooling recognizes the file as generated.

use crate::config::GeneratorConfig;
use crate::errors::{GeneratorError, RenderSection};

/// Renders the file preamble.
///
/// ## Errors
///
/// Returns `RenderFailed` if the package name is not a Go identifier.
///
/// ## Examples
///
/// ```
/// use reader_gen::codegen::render_preamble;
/// use reader_gen::config::GeneratorConfig;
///
/// let preamble = render_preamble(&GeneratorConfig::default()).unwrap();
/// assert_eq!(
///     preamble,
///     "// Code generated by reader-gen; DO NOT EDIT.\n\npackage reader\n"
/// );
/// ```
pub fn render_preamble(config: &GeneratorConfig) -> Result<String, GeneratorError> {
    if !super::go::is_identifier(&config.package) {
        return Err(GeneratorError::render(
            RenderSection::Preamble,
            "",
            format!("package '{}' is not a Go identifier", config.package),
        ));
    }

    Ok(format!(
        "// Code generated by {}; DO NOT EDIT.\n\npackage {}\n",
        config.generator, config.package
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_configured_package_and_generator() {
        let config = GeneratorConfig::default()
            .with_package("awsreader")
            .with_generator("github.com/acme/reader/cmd");

        let preamble = render_preamble(&config).unwrap();
        assert!(
            preamble.starts_with("// Code generated by github.com/acme/reader/cmd; DO NOT EDIT.\n")
        );
        assert!(preamble.ends_with("\npackage awsreader\n"));
    }

    #[test]
    fn marker_precedes_package_clause() {
        let preamble = render_preamble(&GeneratorConfig::default()).unwrap();
        let first_code_line = preamble
            .lines()
            .find(|line| !line.is_empty() && !line.starts_with("//"))
            .unwrap();

        assert_eq!(first_code_line, "package reader");
        assert!(preamble.find("DO NOT EDIT.").unwrap() < preamble.find("package").unwrap());
    }

    #[test]
    fn rejects_invalid_package() {
        let config = GeneratorConfig::default().with_package("aws-reader");
        let err = render_preamble(&config).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::RenderFailed {
                section: RenderSection::Preamble,
                ..
            }
        ));
    }
}
