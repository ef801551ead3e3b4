use crate::error::locations_of;
use crate::error::ValidationError;
use crate::schema::Schema;
use crate::type_info::TypeInfo;
use crate::types::Directive;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputValue;
use crate::types::TypeAnnotation;
use crate::validation::VariableUsage;
use graphql_exec_parser::ast;
use graphql_exec_parser::visitor::visit;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;
use std::borrow::Cow;
use std::cell::Cell;
use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::HashSet;

/// State shared by the rules of one validation pass.
///
/// Rules hold a shared reference to the context for the whole pass; the
/// [`TypeInfo`] it wraps is advanced by the runner before each rule sees a
/// node.
pub struct ValidationContext<'a> {
    schema: &'a Schema,
    document: &'a ast::Document,
    fragments: HashMap<&'a str, &'a ast::FragmentDefinition>,
    pub(super) type_info: RefCell<TypeInfo<'a>>,
    pub(super) current_rule: Cell<&'static str>,
    errors: RefCell<Vec<ValidationError>>,
}

impl<'a> ValidationContext<'a> {
    pub fn new(schema: &'a Schema, document: &'a ast::Document) -> Self {
        let mut fragments = HashMap::new();
        for fragment in document.fragments() {
            fragments.entry(fragment.name.as_str()).or_insert(fragment);
        }
        Self {
            schema,
            document,
            fragments,
            type_info: RefCell::new(TypeInfo::new(schema)),
            current_rule: Cell::new(""),
            errors: RefCell::new(vec![]),
        }
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn document(&self) -> &'a ast::Document {
        self.document
    }

    /// The first fragment definition with the given name.
    pub fn fragment(&self, name: &str) -> Option<&'a ast::FragmentDefinition> {
        self.fragments.get(name).copied()
    }

    /// Records a violation of the rule currently being run.
    pub fn report_error<'l>(
        &self,
        message: impl Into<String>,
        locs: impl IntoIterator<Item = Option<&'l ast::Loc>>,
    ) {
        self.errors.borrow_mut().push(ValidationError {
            rule: self.current_rule.get(),
            message: message.into(),
            locations: locations_of(locs),
        });
    }

    pub(super) fn into_errors(self) -> Vec<ValidationError> {
        self.errors.into_inner()
    }

    // =========================================================================
    // Type information at the current node
    // =========================================================================

    pub fn type_(&self) -> Option<TypeAnnotation> {
        self.type_info.borrow().type_().cloned()
    }

    pub fn parent_type(&self) -> Option<&'a GraphQLType> {
        self.type_info.borrow().parent_type()
    }

    pub fn input_type(&self) -> Option<TypeAnnotation> {
        self.type_info.borrow().input_type().cloned()
    }

    pub fn field_def(&self) -> Option<&'a Field> {
        self.type_info.borrow().field_def()
    }

    pub fn directive(&self) -> Option<&'a Directive> {
        self.type_info.borrow().directive()
    }

    pub fn argument(&self) -> Option<&'a InputValue> {
        self.type_info.borrow().argument()
    }

    // =========================================================================
    // Fragment and variable reachability
    // =========================================================================

    /// The fragment spreads within `selection_set` in document order,
    /// including those nested in fields and inline fragments but not those
    /// inside the spread fragments themselves.
    pub fn fragment_spreads(
        &self,
        selection_set: &'a ast::SelectionSet,
    ) -> Vec<&'a ast::FragmentSpread> {
        let mut spreads = vec![];
        let mut pending: Vec<&'a ast::Selection> = selection_set.selections.iter().rev().collect();
        while let Some(selection) = pending.pop() {
            match selection {
                ast::Selection::FragmentSpread(spread) => spreads.push(spread),
                ast::Selection::Field(field) => {
                    if let Some(sub_selection) = &field.selection_set {
                        pending.extend(sub_selection.selections.iter().rev());
                    }
                },
                ast::Selection::InlineFragment(inline) =>
                    pending.extend(inline.selection_set.selections.iter().rev()),
            }
        }
        spreads
    }

    /// Every fragment reachable from `operation` through spreads, each
    /// listed once. Unknown fragment names are ignored.
    pub fn recursively_referenced_fragments(
        &self,
        operation: &'a ast::OperationDefinition,
    ) -> Vec<&'a ast::FragmentDefinition> {
        let mut fragments = vec![];
        let mut collected = HashSet::new();
        let mut sets_to_visit = vec![&operation.selection_set];
        while let Some(set) = sets_to_visit.pop() {
            for spread in self.fragment_spreads(set) {
                let name = spread.name.as_str();
                if !collected.insert(name) {
                    continue;
                }
                if let Some(fragment) = self.fragment(name) {
                    fragments.push(fragment);
                    sets_to_visit.push(&fragment.selection_set);
                }
            }
        }
        fragments
    }

    /// The variables referenced within `node` (an operation or fragment
    /// definition), each paired with the input type expected where it's
    /// used.
    pub fn variable_usages(&self, node: Node<'a>) -> Vec<VariableUsage<'a>> {
        let mut collector = VariableUsageCollector {
            type_info: TypeInfo::new(self.schema),
            usages: vec![],
        };
        visit(node, &mut collector, None);
        collector.usages
    }

    /// The variable usages of `operation` and of every fragment it reaches.
    pub fn recursive_variable_usages(
        &self,
        operation: &'a ast::OperationDefinition,
    ) -> Vec<VariableUsage<'a>> {
        let mut usages = self.variable_usages(Node::from(operation));
        for fragment in self.recursively_referenced_fragments(operation) {
            usages.extend(self.variable_usages(Node::from(fragment)));
        }
        usages
    }
}

struct VariableUsageCollector<'a> {
    type_info: TypeInfo<'a>,
    usages: Vec<VariableUsage<'a>>,
}

impl<'a> Visitor<'a> for VariableUsageCollector<'a> {
    fn enter(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        if let Node::VariableDefinition(_) = node {
            return VisitAction::Skip;
        }
        self.type_info.enter(node);
        if let Node::Variable(Cow::Borrowed(variable)) = node {
            self.usages.push(VariableUsage {
                variable: *variable,
                type_: self.type_info.input_type().cloned(),
            });
        }
        VisitAction::NoChange
    }

    fn leave(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        self.type_info.leave(node);
        VisitAction::NoChange
    }
}
