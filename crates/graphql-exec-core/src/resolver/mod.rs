//! The callbacks a schema attaches to its types: field resolvers,
//! subscription sources and abstract-type resolution.

mod bind;
mod is_type_of_fn;
mod resolve_fn;
mod resolve_info;
mod resolve_params;
mod resolved;
mod subscribe_fn;
mod type_resolve_fn;

pub use bind::bind;
pub use is_type_of_fn::IsTypeOfFn;
pub use resolve_fn::ResolveFn;
pub use resolve_info::ResolveInfo;
pub use resolve_params::ResolveParams;
pub use resolved::Resolved;
pub use subscribe_fn::EventStream;
pub use subscribe_fn::SubscribeFn;
pub use type_resolve_fn::TypeResolveFn;
