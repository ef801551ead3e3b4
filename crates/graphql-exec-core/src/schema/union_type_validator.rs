use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::UnionType;

pub(super) struct UnionTypeValidator<'a> {
    schema: &'a Schema,
    type_: &'a UnionType,
}
impl<'a> UnionTypeValidator<'a> {
    pub fn new(type_: &'a UnionType, schema: &'a Schema) -> Self {
        Self { schema, type_ }
    }

    pub fn validate(self) -> Vec<TypeValidationError> {
        let mut errors = vec![];
        for member_name in self.type_.member_names() {
            match self.schema.get_type(member_name) {
                Some(GraphQLType::Object(_)) => (),
                Some(_) => errors.push(TypeValidationError::InvalidUnionMemberTypeKind {
                    member_type_name: member_name.to_string(),
                    union_type_name: self.type_.name.to_string(),
                }),
                None => errors.push(TypeValidationError::UndefinedTypeName {
                    referenced_by: self.type_.name.to_string(),
                    undefined_type_name: member_name.to_string(),
                }),
            }
        }
        errors
    }
}
