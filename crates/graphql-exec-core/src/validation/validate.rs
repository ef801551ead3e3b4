use crate::error::ValidationError;
use crate::schema::Schema;
use crate::validation::specified_rules;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use graphql_exec_parser::ast;
use graphql_exec_parser::visitor::visit;
use graphql_exec_parser::visitor::visit_in_parallel;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;

/// Checks `document` against `schema` using `rules` (the specified rules
/// when `None`), in a single traversal.
///
/// Errors are returned in the order the traversal found them; an empty
/// list means the document is valid.
pub fn validate(
    schema: &Schema,
    document: &ast::Document,
    rules: Option<&[ValidationRule]>,
) -> Vec<ValidationError> {
    let rules = rules.unwrap_or(specified_rules());
    let context = ValidationContext::new(schema, document);
    {
        let mut rule_visitors: Vec<RuleVisitor<'_, '_>> = rules
            .iter()
            .map(|rule| RuleVisitor {
                name: rule.name,
                context: &context,
                inner: (rule.factory)(&context),
            })
            .collect();
        let parallel = visit_in_parallel(
            rule_visitors
                .iter_mut()
                .map(|visitor| visitor as &mut dyn Visitor<'_>)
                .collect(),
        );
        visit(
            Node::from(document),
            TypeInfoVisitor { context: &context, visitor: parallel },
            None,
        );
    }
    let errors = context.into_errors();
    log::debug!("validation finished with {} error(s)", errors.len());
    errors
}

/// Attributes errors reported while a rule's callbacks run to that rule.
struct RuleVisitor<'c, 'a> {
    name: &'static str,
    context: &'c ValidationContext<'a>,
    inner: Box<dyn Visitor<'a> + 'c>,
}

impl<'a> Visitor<'a> for RuleVisitor<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        self.context.current_rule.set(self.name);
        self.inner.enter(node, cx)
    }

    fn leave(&mut self, node: &Node<'a>, cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        self.context.current_rule.set(self.name);
        self.inner.leave(node, cx)
    }
}

/// Keeps the context's type information in step with the traversal:
/// entered before the wrapped visitor sees a node and left after it.
struct TypeInfoVisitor<'c, 'a, V> {
    context: &'c ValidationContext<'a>,
    visitor: V,
}

impl<'a, V: Visitor<'a>> Visitor<'a> for TypeInfoVisitor<'_, 'a, V> {
    fn enter(&mut self, node: &Node<'a>, cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        self.context.type_info.borrow_mut().enter(node);
        let action = self.visitor.enter(node, cx);
        match &action {
            VisitAction::Skip | VisitAction::Remove =>
                self.context.type_info.borrow_mut().leave(node),
            VisitAction::Update(replacement) => {
                let mut type_info = self.context.type_info.borrow_mut();
                type_info.leave(node);
                type_info.enter(replacement);
            },
            VisitAction::NoChange | VisitAction::Break => (),
        }
        action
    }

    fn leave(&mut self, node: &Node<'a>, cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        let action = self.visitor.leave(node, cx);
        self.context.type_info.borrow_mut().leave(node);
        action
    }
}
