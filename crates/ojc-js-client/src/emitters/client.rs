use std::collections::HashSet;

use log::warn;
use minijinja::{Environment, Value, context};
use ojc_core::ir::OperationPlan;
use ojc_core::parse::document::Document;
use ojc_core::transform::plan_document;

use super::{escape_jsdoc, method};

/// Emit the complete client module for a parsed document.
pub fn emit_module(document: &Document, base_url: &str) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_filter("escape_jsdoc", escape_jsdoc);
    env.add_template("client.js.j2", include_str!("../../templates/client.js.j2"))?;
    let template = env.get_template("client.js.j2")?;

    let plans = plan_document(document);
    warn_on_collisions(&plans);
    let methods: Vec<Value> = plans.iter().map(method::build_method_context).collect();

    template.render(context! {
        title => document.info.title.clone(),
        version => document.info.version.clone(),
        description => document.info.description.clone(),
        base_url => base_url,
        methods => methods,
    })
}

/// Colliding names are all emitted; assignment order means the later
/// definition wins at runtime.
fn warn_on_collisions(plans: &[OperationPlan]) {
    let mut seen = HashSet::new();
    for plan in plans {
        if !seen.insert(plan.name.as_str()) {
            warn!(
                "method name {} is defined more than once, the later definition wins",
                plan.name
            );
        }
    }
}
