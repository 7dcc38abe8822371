mod closure;
mod extract;

pub use closure::{
    build_definition_closure, extract_reference_closure, ClosureError, CyclePolicy,
    DefinitionClosure, ReferenceClosure,
};
pub use extract::{
    collect_refs, definition_name, definition_ref, RefOccurrence, ReferenceError,
    DEFINITIONS_REF_PREFIX,
};
