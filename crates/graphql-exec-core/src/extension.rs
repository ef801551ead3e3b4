use crate::error::BoxError;
use crate::error::FormattedError;
use crate::request_context::RequestContext;
use crate::resolver::ResolveInfo;
use crate::Value;
use graphql_exec_parser::SyntaxError;

/// Observes the stages of every request run against a schema.
///
/// Extensions are registered on the schema with
/// [`SchemaBuilder::extension()`](crate::schema::SchemaBuilder::extension)
/// and shared between concurrent requests; any per-request state should be
/// keyed off the [`RequestContext`]. Every hook defaults to doing nothing.
///
/// An extension that returns `Some` from [`Extension::result()`] adds an
/// entry under its [`Extension::name()`] to the response's `extensions`
/// map.
pub trait Extension: Send + Sync {
    fn name(&self) -> &str;

    /// Called once per request, before parsing.
    fn init(&self, _context: &RequestContext) {}

    fn parse_did_start(&self, _context: &RequestContext) {}

    fn parse_ended(&self, _context: &RequestContext, _error: Option<&SyntaxError>) {}

    fn validation_did_start(&self, _context: &RequestContext) {}

    fn validation_ended(&self, _context: &RequestContext, _errors: &[FormattedError]) {}

    fn execution_did_start(&self, _context: &RequestContext) {}

    fn execution_ended(&self, _context: &RequestContext) {}

    fn resolve_field_did_start(&self, _context: &RequestContext, _info: &ResolveInfo<'_>) {}

    /// Called once the field's resolver (and any thunk it returned) has
    /// finished, before the value is completed.
    fn resolve_field_ended(
        &self,
        _context: &RequestContext,
        _info: &ResolveInfo<'_>,
        _result: Result<&Value, &BoxError>,
    ) {}

    /// Data to report under this extension's name in the response.
    fn result(&self, _context: &RequestContext) -> Option<Value> {
        None
    }
}
