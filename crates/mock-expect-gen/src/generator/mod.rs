pub mod ast;
pub(crate) mod codegen;
pub mod errors;
pub mod orchestrator;
pub mod postprocess;
pub(crate) mod validation;
