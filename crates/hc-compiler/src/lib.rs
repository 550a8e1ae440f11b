mod category_builder;
mod function_compiler;
mod pipeline;
mod project_info;
mod script_compiler;
mod scripting_definition;

pub use category_builder::CategoryTreeBuilder;
pub use function_compiler::{FunctionTemplateCompiler, TemplateCompiler};
pub use pipeline::parse_application;
pub use project_info::{
    parse_project_information, HOMEPAGE_URL_KEY, NAME_KEY, REPOSITORY_URL_KEY, VERSION_KEY,
};
pub use script_compiler::{parse_code, parse_script};
pub use scripting_definition::{format_date, parse_scripting_definition};
