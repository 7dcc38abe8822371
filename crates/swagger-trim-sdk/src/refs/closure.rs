use super::extract::{collect_refs, definition_name};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::{BTreeSet, HashSet};
use swagger_trim_core::{IssueSeverity, JsonPointer, StructuredIssue};
use tracing::{debug, warn};

/// What to do when a definition reaches itself through `$ref` edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePolicy {
    /// Keep every member of the cycle, stop following the back edge, warn.
    #[default]
    Break,
    /// Abort with [`ClosureError::CyclicReference`].
    Reject,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ClosureError {
    #[error("cyclic definition reference detected: {}", .cycle.join(" -> "))]
    CyclicReference { cycle: Vec<String> },
}

/// Definition names reachable from one fragment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceClosure {
    /// Unique names in first-discovery order, including dangling ones.
    pub names: Vec<String>,
    /// Every `$ref` string visited, repeats included.
    pub occurrences: usize,
    pub dangling: BTreeSet<String>,
    pub cycles: Vec<Vec<String>>,
    pub issues: Vec<StructuredIssue>,
}

impl ReferenceClosure {
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|entry| entry == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefinitionClosure {
    pub definitions: Map<String, Value>,
    pub reachable: BTreeSet<String>,
    pub dangling: BTreeSet<String>,
    pub cycles: Vec<Vec<String>>,
    pub reference_count: usize,
    pub issues: Vec<StructuredIssue>,
}

pub fn extract_reference_closure(
    definitions: &Map<String, Value>,
    fragment: &Value,
    policy: CyclePolicy,
) -> Result<ReferenceClosure, ClosureError> {
    let mut walker = ClosureWalker::new(definitions, policy);
    walker.visit_fragment(fragment, &JsonPointer::root())?;
    Ok(walker.finish())
}

/// Collects every definition reachable from the given path items.
///
/// The first pass walks each path item and follows references transitively.
/// The second pass re-scans every definition picked up by the first one and
/// unions in anything it references; with a transitive first pass this only
/// confirms the result.
pub fn build_definition_closure(
    paths: &Map<String, Value>,
    definitions: &Map<String, Value>,
    policy: CyclePolicy,
) -> Result<DefinitionClosure, ClosureError> {
    let mut walker = ClosureWalker::new(definitions, policy);
    for (key, item) in paths {
        walker.visit_fragment(item, &JsonPointer::from_keys(["paths", key.as_str()]))?;
    }

    let reference_count = walker.out.occurrences;
    let first_pass = walker.resolved_names();
    for name in &first_pass {
        let Some(definition) = definitions.get(name) else {
            continue;
        };
        let base = JsonPointer::from_keys(["definitions", name.as_str()]);
        for occurrence in collect_refs(definition, &base) {
            if let Ok(target) = definition_name(occurrence.target.as_str()) {
                walker.union_reference(target, &occurrence.location)?;
            }
        }
    }
    let found = walker.finish();

    let mut closure = DefinitionClosure {
        reference_count,
        dangling: found.dangling,
        cycles: found.cycles,
        issues: found.issues,
        ..DefinitionClosure::default()
    };
    for name in found.names {
        if let Some(definition) = definitions.get(&name) {
            closure.definitions.insert(name.clone(), definition.clone());
            closure.reachable.insert(name);
        }
    }
    debug!(
        first_pass = first_pass.len(),
        reachable = closure.reachable.len(),
        "definition closure built"
    );
    Ok(closure)
}

struct ClosureWalker<'a> {
    definitions: &'a Map<String, Value>,
    policy: CyclePolicy,
    expanded: HashSet<String>,
    stack: Vec<String>,
    seen: HashSet<String>,
    out: ReferenceClosure,
}

impl<'a> ClosureWalker<'a> {
    fn new(definitions: &'a Map<String, Value>, policy: CyclePolicy) -> Self {
        Self {
            definitions,
            policy,
            expanded: HashSet::new(),
            stack: Vec::new(),
            seen: HashSet::new(),
            out: ReferenceClosure::default(),
        }
    }

    fn resolved_names(&self) -> Vec<String> {
        self.out
            .names
            .iter()
            .filter(|name| self.definitions.contains_key(name.as_str()))
            .cloned()
            .collect()
    }

    fn visit_fragment(&mut self, fragment: &Value, base: &JsonPointer) -> Result<(), ClosureError> {
        for occurrence in collect_refs(fragment, base) {
            self.out.occurrences += 1;
            let name = match definition_name(occurrence.target.as_str()) {
                Ok(name) => name,
                Err(error) => {
                    self.out.issues.push(
                        StructuredIssue::new(
                            "reference",
                            IssueSeverity::Info,
                            occurrence.location,
                            error.to_string(),
                        )
                        .with_reference("ref.unsupported_target"),
                    );
                    continue;
                }
            };
            self.union_reference(name, &occurrence.location)?;
        }
        Ok(())
    }

    fn union_reference(
        &mut self,
        name: String,
        referenced_at: &JsonPointer,
    ) -> Result<(), ClosureError> {
        if self.seen.insert(name.clone()) {
            self.out.names.push(name.clone());
        }
        self.visit_definition(name.as_str(), referenced_at)
    }

    fn visit_definition(
        &mut self,
        name: &str,
        referenced_at: &JsonPointer,
    ) -> Result<(), ClosureError> {
        if self.expanded.contains(name) {
            return Ok(());
        }
        if let Some(start) = self.stack.iter().position(|entry| entry == name) {
            let mut cycle = self.stack[start..].to_vec();
            cycle.push(name.to_string());
            return self.on_cycle(cycle, referenced_at);
        }
        let definitions = self.definitions;
        let Some(definition) = definitions.get(name) else {
            if self.out.dangling.insert(name.to_string()) {
                debug!(
                    definition = name,
                    location = %referenced_at,
                    "dangling definition reference"
                );
                self.out.issues.push(
                    StructuredIssue::new(
                        "reference",
                        IssueSeverity::Warning,
                        referenced_at.clone(),
                        format!("reference to missing definition `{name}`"),
                    )
                    .with_reference("ref.dangling"),
                );
            }
            return Ok(());
        };

        self.stack.push(name.to_string());
        let base = JsonPointer::from_keys(["definitions", name]);
        self.visit_fragment(definition, &base)?;
        self.stack.pop();
        self.expanded.insert(name.to_string());
        Ok(())
    }

    fn on_cycle(
        &mut self,
        cycle: Vec<String>,
        referenced_at: &JsonPointer,
    ) -> Result<(), ClosureError> {
        match self.policy {
            CyclePolicy::Reject => Err(ClosureError::CyclicReference { cycle }),
            CyclePolicy::Break => {
                let rendered = cycle.join(" -> ");
                warn!(cycle = %rendered, "breaking cyclic definition reference");
                self.out.issues.push(
                    StructuredIssue::new(
                        "reference",
                        IssueSeverity::Warning,
                        referenced_at.clone(),
                        format!("cyclic definition reference: {rendered}"),
                    )
                    .with_reference("ref.cycle")
                    .with_related(json!({ "cycle": cycle })),
                );
                self.out.cycles.push(cycle);
                Ok(())
            }
        }
    }

    fn finish(mut self) -> ReferenceClosure {
        StructuredIssue::sort_stable(&mut self.out.issues);
        self.out
    }
}

#[cfg(test)]
#[path = "closure_test.rs"]
mod tests;
