//! The interface declaration listing every accessor.
//!
//! The interface always declares `GetAccountID` and `GetRegion` first,
//! followed by one method per plan in the order the plans are given.
//! Duplicate names are declared as given.

use tracing::debug;

use super::go::comment_lines;
use crate::config::GeneratorConfig;
use crate::derive::FunctionPlan;
use crate::errors::{GeneratorError, RenderSection};

/// Contract shared by every method, rendered above the interface.
const INTERFACE_CONTRACT: &str = "\
The next behavior commented in the below paragraph, applies to every method
which clearly match what's explained, for the sake of not repeating the same,
over and over.
The most of the methods defined by this interface, return their results in a
map. Those maps, have as keys, the region which have been requested and
the values are the items returned by the provider for such region.
Because the methods may make calls to different regions, in case that there
is an error on a region, the returned map won't have any entry for such
region and such errors will be reported by the returned error, nonetheless
the items, got from the successful requests to other regions, will be
returned, with the meaning that the methods will return partial results, in
case of errors.
For avoiding by the callers the problem of if the returned map may be nil,
the function will always return a map instance, which will be of length 0
in case that there is not any successful request.";

/// Renders the interface declaration.
///
/// ## Errors
///
/// Returns `RenderFailed` (section `interface`) for the first plan with an
/// empty entity or a signature that is empty or spans several lines.
///
/// ## Examples
///
/// ```
/// use reader_gen::codegen::render_interface;
/// use reader_gen::config::GeneratorConfig;
///
/// let interface = render_interface(&GeneratorConfig::default(), &[]).unwrap();
/// assert!(interface.contains("type Reader interface {"));
/// assert!(interface.contains("\tGetAccountID() string\n"));
/// assert!(interface.contains("\tGetRegion() string\n"));
/// ```
pub fn render_interface(
    config: &GeneratorConfig,
    plans: &[FunctionPlan],
) -> Result<String, GeneratorError> {
    let mut out = String::new();

    out.push_str(&format!(
        "// {} is the interface defining all methods that need to be implemented\n//\n",
        config.interface
    ));
    out.push_str(&comment_lines(INTERFACE_CONTRACT, ""));
    out.push_str(&format!("type {} interface {{\n", config.interface));
    out.push_str("\t// GetAccountID returns the current ID for the account used\n");
    out.push_str("\tGetAccountID() string\n\n");
    out.push_str("\t// GetRegion returns the currently used region for the Connector\n");
    out.push_str("\tGetRegion() string\n");

    for plan in plans {
        check_declaration(plan)?;
        debug!(method = %plan.name, "Declaring interface method");

        out.push('\n');
        out.push_str(&comment_lines(&plan.documentation, "\t"));
        out.push('\t');
        out.push_str(plan.signature.trim());
        out.push('\n');
    }

    out.push_str("}\n");
    Ok(out)
}

fn check_declaration(plan: &FunctionPlan) -> Result<(), GeneratorError> {
    if plan.entity.trim().is_empty() {
        return Err(GeneratorError::render(
            RenderSection::Interface,
            &plan.entity,
            "entity is empty",
        ));
    }

    let signature = plan.signature.trim();
    if signature.is_empty() {
        return Err(GeneratorError::render(
            RenderSection::Interface,
            &plan.entity,
            "signature is empty",
        ));
    }
    if signature.contains('\n') {
        return Err(GeneratorError::render(
            RenderSection::Interface,
            &plan.entity,
            "signature spans several lines",
        ));
    }

    Ok(())
}
