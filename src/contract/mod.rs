pub mod model;
pub mod parser;

pub use model::{
    MediaTypeSpec, OperationSpec, ParameterLocation, ParameterSpec, RequestBodySpec,
    ResponseSpec,
};
pub use parser::ContractParser;
