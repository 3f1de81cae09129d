//! Paginated method bodies.
//!
//! Every generated method follows the same shape:
//!
//! ```text
//! func (c *connector) <signature> {
//!     [owner filter]
//!     [lazy client creation]
//!     [accumulator]
//!     hasMorePages := true
//!     for hasMorePages {
//!         [page request]
//!         [pagination]
//!         [merge]
//!     }
//!     return opt, nil
//! }
//! ```
//!
//! A failing page request returns `nil, err`; pages merged before the
//! failure are dropped.

use tracing::{debug, trace};

use super::go::{is_identifier, is_selector};
use crate::config::GeneratorConfig;
use crate::derive::{FunctionPlan, MergeStrategy, Pagination};
use crate::errors::{GeneratorError, RenderSection};
use reader_define::ShapeMode;

/// Renders the method implementing `plan`, or `None` when the plan opts out
/// of body generation.
///
/// ## Errors
///
/// Returns `RenderFailed` (section `function`) when the service, input type,
/// owner filter, access path or pagination fields cannot be written as Go
/// selectors, or when a flattening path does not have exactly two segments.
///
/// ## Examples
///
/// ```
/// use reader_define::Descriptor;
/// use reader_gen::codegen::render_function;
/// use reader_gen::config::GeneratorConfig;
/// use reader_gen::derive::plan;
///
/// let vpcs = plan(&Descriptor::new("Vpcs").with_service("ec2", "Describe"));
/// let body = render_function(&GeneratorConfig::default(), &vpcs).unwrap().unwrap();
///
/// assert!(body.starts_with("func (c *connector) GetVpcs(ctx context.Context"));
/// assert!(body.contains("o, err := c.svc.ec2.DescribeVpcsWithContext(ctx, input)"));
/// assert!(body.contains("opt = append(opt, o.Vpcs...)"));
/// ```
pub fn render_function(
    config: &GeneratorConfig,
    plan: &FunctionPlan,
) -> Result<Option<String>, GeneratorError> {
    if !plan.generate_body {
        debug!(method = %plan.name, "Skipping body generation");
        return Ok(None);
    }

    check_plan(plan)?;
    trace!(merge = ?plan.merge, pagination = ?plan.pagination, "Rendering method body");

    let mut out = String::new();
    out.push_str(&format!(
        "func (c *{}) {} {{\n",
        config.receiver,
        plan.signature.trim()
    ));

    if let Some(field) = &plan.owner_filter {
        push_input_alloc(&mut out, "\t", &plan.input_type);
        out.push_str(&format!(
            "\tinput.{field} = append(input.{field}, c.accountID)\n\n"
        ));
    }

    let service = &plan.service;
    out.push_str(&format!("\tif c.svc.{service} == nil {{\n"));
    out.push_str(&format!("\t\tc.svc.{service} = {service}.New(c.svc.session)\n"));
    out.push_str("\t}\n\n");

    out.push_str(&accumulator(plan));
    out.push('\n');

    out.push_str("\thasMorePages := true\n");
    out.push_str("\tfor hasMorePages {\n");
    out.push_str(&format!(
        "\t\to, err := c.svc.{service}.{}WithContext(ctx, input)\n",
        plan.service_call
    ));
    out.push_str("\t\tif err != nil {\n");
    out.push_str("\t\t\treturn nil, err\n");
    out.push_str("\t\t}\n");

    match &plan.pagination {
        Some(pagination) => push_pagination(&mut out, &plan.input_type, pagination),
        None => out.push_str("\t\thasMorePages = false\n"),
    }
    out.push('\n');

    push_merge(&mut out, &plan.merge);

    out.push_str("\t}\n\n");
    out.push_str("\treturn opt, nil\n");
    out.push_str("}\n");

    Ok(Some(out))
}

fn accumulator(plan: &FunctionPlan) -> String {
    match plan.shape {
        ShapeMode::Single => format!("\tvar opt {}\n", plan.output_type),
        ShapeMode::Map => format!("\topt := make({})\n", plan.output_type),
        ShapeMode::Sequence => format!("\topt := make({}, 0)\n", plan.output_type),
    }
}

fn push_input_alloc(out: &mut String, indent: &str, input_type: &str) {
    out.push_str(&format!("{indent}if input == nil {{\n"));
    out.push_str(&format!("{indent}\tinput = &{input_type}{{}}\n"));
    out.push_str(&format!("{indent}}}\n"));
}

fn push_pagination(out: &mut String, input_type: &str, pagination: &Pagination) {
    push_input_alloc(out, "\t\t", input_type);
    out.push_str(&format!(
        "\t\tinput.{} = o.{}\n",
        pagination.input_field, pagination.output_field
    ));
    out.push_str(&format!(
        "\t\thasMorePages = o.{} != nil\n",
        pagination.output_field
    ));
}

fn push_merge(out: &mut String, merge: &MergeStrategy) {
    match merge {
        MergeStrategy::Flatten { outer, inner } => {
            out.push_str(&format!("\t\tfor _, v := range o.{outer} {{\n"));
            out.push_str(&format!("\t\t\topt = append(opt, v.{inner}...)\n"));
            out.push_str("\t\t}\n");
        }
        MergeStrategy::Assign { field } => {
            out.push_str(&format!("\t\topt = o.{field}\n"));
        }
        MergeStrategy::Append { field } => {
            out.push_str(&format!("\t\topt = append(opt, o.{field}...)\n"));
        }
    }
}

/// Checks every value substituted into the body as Go syntax.
fn check_plan(plan: &FunctionPlan) -> Result<(), GeneratorError> {
    let fail =
        |reason: String| GeneratorError::render(RenderSection::Function, &plan.entity, reason);

    if plan.entity.trim().is_empty() {
        return Err(fail("entity is empty".to_string()));
    }
    if plan.signature.trim().is_empty() {
        return Err(fail("signature is empty".to_string()));
    }
    if !is_identifier(&plan.service) {
        return Err(fail(format!(
            "service '{}' is not a Go identifier",
            plan.service
        )));
    }
    if !is_identifier(&plan.service_call) {
        return Err(fail(format!(
            "service call '{}' is not a Go identifier",
            plan.service_call
        )));
    }
    if !is_selector(&plan.input_type) {
        return Err(fail(format!(
            "input type '{}' is not a Go type name",
            plan.input_type
        )));
    }
    if let Some(field) = &plan.owner_filter {
        if !is_selector(field) {
            return Err(fail(format!("owner filter '{field}' is not a Go selector")));
        }
    }

    if matches!(plan.merge, MergeStrategy::Flatten { .. }) && plan.access_path.len() != 2 {
        return Err(fail(format!(
            "attribute path '{}' must have exactly two segments",
            plan.access_path.join("#")
        )));
    }
    for segment in &plan.access_path {
        if !is_selector(segment) {
            return Err(fail(format!(
                "attribute path segment '{segment}' is not a Go selector"
            )));
        }
    }

    if let Some(pagination) = &plan.pagination {
        for field in [&pagination.output_field, &pagination.input_field] {
            if !is_selector(field) {
                return Err(fail(format!(
                    "pagination field '{field}' is not a Go selector"
                )));
            }
        }
    }

    Ok(())
}
