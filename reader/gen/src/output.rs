//! Output assembly for generated code.
//!
//! Runs the derivation engine over a descriptor list and concatenates the
//! three render passes into one Go source buffer:
//!
//! ```text
//! // Code generated by reader-gen; DO NOT EDIT.
//!
//! package reader
//!
//! // Reader is the interface ...
//! type Reader interface { ... }
//!
//! func (c *connector) GetInstances(...) (...) { ... }
//!
//! func (c *connector) GetVpcs(...) (...) { ... }
//! ```
//!
//! The buffer is returned as-is. Writing it to disk and running a Go
//! formatter over it are left to the caller. A render failure on any
//! descriptor fails the whole run; no partial buffer is returned.

use reader_define::Descriptor;
use tracing::{debug, info, instrument};

use crate::codegen::{render_function, render_interface, render_preamble};
use crate::config::GeneratorConfig;
use crate::derive::{FunctionPlan, plan};
use crate::errors::GeneratorError;

/// Derives a [`FunctionPlan`] for every descriptor, in list order.
pub fn plan_all(descriptors: &[Descriptor]) -> Vec<FunctionPlan> {
    descriptors
        .iter()
        .map(|descriptor| {
            let plan = plan(descriptor);
            debug!(
                entity = %descriptor.entity,
                method = %plan.name,
                shape = %plan.shape,
                "Derived plan"
            );
            plan
        })
        .collect()
}

/// Generates the complete Go source for a descriptor list.
///
/// ## Errors
///
/// Returns `ConfigError` for an invalid configuration and `RenderFailed`
/// for the first descriptor that cannot be rendered.
///
/// ## Examples
///
/// ```
/// use reader_define::Descriptor;
/// use reader_gen::config::GeneratorConfig;
/// use reader_gen::output::generate;
///
/// let descriptors = vec![Descriptor::new("Instances").with_service("ec2", "Describe")];
/// let code = generate(&descriptors, &GeneratorConfig::default()).unwrap();
///
/// assert!(code.contains("\npackage reader\n"));
/// assert!(code.contains("\tGetInstances(ctx context.Context, input *ec2.DescribeInstancesInput) ([]*ec2.Instance, error)\n"));
/// assert!(code.contains("func (c *connector) GetInstances("));
/// ```
#[instrument(skip_all, fields(descriptors = descriptors.len(), package = %config.package))]
pub fn generate(
    descriptors: &[Descriptor],
    config: &GeneratorConfig,
) -> Result<String, GeneratorError> {
    config.validate()?;

    let plans = plan_all(descriptors);

    let mut code = render_preamble(config)?;
    info!("Rendered preamble");

    code.push('\n');
    code.push_str(&render_interface(config, &plans)?);
    info!(methods = plans.len() + 2, "Rendered interface");

    let mut bodies = 0;
    for plan in &plans {
        if let Some(body) = render_function(config, plan)? {
            code.push('\n');
            code.push_str(&body);
            bodies += 1;
        }
    }
    info!(bodies, skipped = plans.len() - bodies, "Rendered function bodies");

    Ok(code)
}

/// Serializes the derived plans as pretty-printed JSON.
///
/// ## Errors
///
/// Returns `Serialize` if JSON serialization fails.
pub fn inspect(descriptors: &[Descriptor]) -> Result<String, GeneratorError> {
    let plans = plan_all(descriptors);
    Ok(serde_json::to_string_pretty(&plans)?)
}
