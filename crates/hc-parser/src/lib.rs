mod document;
mod yaml;

pub use document::{
    ApplicationDoc, CallDoc, CallSpecDoc, CategoryDoc, CategoryOrScriptDoc, DocumentationUrlsDoc,
    FunctionDoc, ScriptDoc, ScriptingDefinitionDoc,
};
pub use yaml::parse_catalog_document;
