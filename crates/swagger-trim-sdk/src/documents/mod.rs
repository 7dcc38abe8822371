mod schema;
mod swagger;

pub use schema::{
    Operation, Parameter, PropertyItems, Response, SchemaDefinition, SchemaProperty, SchemaRef,
};
pub use swagger::{Info, SecurityScheme, SwaggerDocument, SWAGGER_VERSION_2_0};
