use crate::resolver::ResolveInfo;
use crate::resolver::TypeResolveFn;
use crate::schema::SchemaBuildError;
use crate::types::UnionType;
use crate::Value;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Builds a [`UnionType`].
#[derive(Debug)]
pub struct UnionTypeBuilder {
    name: String,
    description: Option<String>,
    members: Vec<String>,
    resolve_type: Option<TypeResolveFn>,
}

impl UnionTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            members: vec![],
            resolve_type: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn member(mut self, type_name: impl Into<String>) -> Self {
        self.members.push(type_name.into());
        self
    }

    pub fn resolve_type<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value, &ResolveInfo<'_>) -> Option<String> + Send + Sync + 'static,
    {
        self.resolve_type = Some(TypeResolveFn::new(f));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn build(self) -> Result<UnionType> {
        if self.members.is_empty() {
            return Err(SchemaBuildError::EmptyUnion { type_name: self.name });
        }
        for (i, member) in self.members.iter().enumerate() {
            if self.members[..i].contains(member) {
                return Err(SchemaBuildError::DuplicatedUnionMember {
                    type_name: self.name.clone(),
                    member_name: member.clone(),
                });
            }
        }
        Ok(UnionType {
            name: self.name,
            description: self.description,
            members: self.members,
            resolve_type: self.resolve_type,
        })
    }
}
