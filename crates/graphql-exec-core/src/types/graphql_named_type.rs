/// Accessors shared by every named type in a schema.
pub trait GraphQLNamedType {
    fn name(&self) -> &str;
    fn description(&self) -> Option<&str>;
}
