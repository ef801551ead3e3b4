use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::validation::ValidationContext;
use graphql_exec_parser::ast;
use graphql_exec_parser::print_value;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::rc::Rc;

/// Fields selected under the same response name, possibly through
/// fragments, can be merged into one response entry without ambiguity.
struct OverlappingFieldsCanBeMerged<'c, 'a> {
    context: &'c ValidationContext<'a>,
    /// Field pairs already compared, stored in both orders.
    compared: HashSet<(*const ast::Field, *const ast::Field)>,
    cached_fragment_fields: HashMap<&'a str, Rc<[SelectedField<'a>]>>,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(OverlappingFieldsCanBeMerged {
        context,
        compared: HashSet::new(),
        cached_fragment_fields: HashMap::new(),
    })
}

#[derive(Clone, Copy)]
struct SelectedField<'a> {
    parent_type: Option<&'a GraphQLType>,
    field: &'a ast::Field,
    def: Option<&'a Field>,
}

enum SelectionItem<'a> {
    Field(SelectedField<'a>),
    Spread(&'a str),
}

/// A fragment whose fields are being gathered.
struct FragmentFrame<'a> {
    fragment_name: &'a str,
    items: std::vec::IntoIter<SelectionItem<'a>>,
    fields: Vec<SelectedField<'a>>,
    /// Field nodes already in `fields`.
    seen: HashSet<*const ast::Field>,
}

impl<'a> FragmentFrame<'a> {
    fn add(&mut self, field: SelectedField<'a>) {
        if self.seen.insert(field.field as *const ast::Field) {
            self.fields.push(field);
        }
    }
}

/// Selected fields grouped by response name, in name order.
type FieldMap<'a> = BTreeMap<&'a str, Vec<SelectedField<'a>>>;

struct Conflict<'a> {
    response_name: &'a str,
    reason: ConflictReason<'a>,
    fields: Vec<&'a ast::Field>,
}

enum ConflictReason<'a> {
    Message(String),
    Subfields(Vec<Conflict<'a>>),
}

impl ConflictReason<'_> {
    fn describe(&self) -> String {
        match self {
            Self::Message(message) => message.clone(),
            Self::Subfields(conflicts) => conflicts
                .iter()
                .map(|conflict| format!(
                    "subfields \"{}\" conflict because {}",
                    conflict.response_name,
                    conflict.reason.describe(),
                ))
                .collect::<Vec<_>>()
                .join(" and "),
        }
    }
}

impl<'a> OverlappingFieldsCanBeMerged<'_, 'a> {
    /// Adds the fields of `selection_set` to `field_map` in document order,
    /// with each fragment spread expanded once.
    fn collect_fields(
        &mut self,
        parent_type: Option<&'a GraphQLType>,
        selection_set: &'a ast::SelectionSet,
        visited_fragments: &mut HashSet<&'a str>,
        field_map: &mut FieldMap<'a>,
    ) {
        for item in self.selection_items(parent_type, selection_set) {
            match item {
                SelectionItem::Field(field) => {
                    field_map.entry(field.field.response_key()).or_default().push(field);
                },
                SelectionItem::Spread(fragment_name) => {
                    if !visited_fragments.insert(fragment_name) {
                        continue;
                    }
                    for field in self.fragment_fields(fragment_name).iter() {
                        field_map.entry(field.field.response_key()).or_default().push(*field);
                    }
                },
            }
        }
    }

    /// Flattens inline fragments of `selection_set`, leaving named spreads
    /// unexpanded.
    fn selection_items(
        &self,
        parent_type: Option<&'a GraphQLType>,
        selection_set: &'a ast::SelectionSet,
    ) -> Vec<SelectionItem<'a>> {
        let schema = self.context.schema();
        let mut items = vec![];
        let mut pending = vec![(parent_type, selection_set.selections.iter())];
        while let Some((parent_type, selections)) = pending.last_mut() {
            let parent_type = *parent_type;
            let Some(selection) = selections.next() else {
                pending.pop();
                continue;
            };
            match selection {
                ast::Selection::Field(field) => {
                    let def = parent_type
                        .filter(|parent| matches!(
                            parent,
                            GraphQLType::Object(_) | GraphQLType::Interface(_),
                        ))
                        .and_then(|parent| schema.field_def(parent.name(), field.name.as_str()));
                    items.push(SelectionItem::Field(SelectedField {
                        parent_type,
                        field,
                        def,
                    }));
                },
                ast::Selection::InlineFragment(inline) => {
                    let fragment_type = match &inline.type_condition {
                        Some(cond) => schema.get_type(cond.name.as_str()),
                        None => parent_type,
                    };
                    pending.push((fragment_type, inline.selection_set.selections.iter()));
                },
                ast::Selection::FragmentSpread(spread) => {
                    items.push(SelectionItem::Spread(spread.name.as_str()));
                },
            }
        }
        items
    }

    /// Every field reachable from the named fragment, spreads expanded in
    /// document order. Results are cached per fragment so long spread chains
    /// are walked once; spreads that loop back are dropped.
    fn fragment_fields(&mut self, fragment_name: &'a str) -> Rc<[SelectedField<'a>]> {
        if let Some(fields) = self.cached_fragment_fields.get(fragment_name) {
            return Rc::clone(fields);
        }
        let mut in_progress = HashSet::new();
        let mut stack: Vec<FragmentFrame<'a>> = self
            .fragment_frame(fragment_name, &mut in_progress)
            .into_iter()
            .collect();
        let mut finished: Rc<[SelectedField<'a>]> = Rc::from(vec![]);
        while let Some(frame) = stack.last_mut() {
            let Some(item) = frame.items.next() else {
                let Some(frame) = stack.pop() else {
                    break;
                };
                let fields: Rc<[SelectedField<'a>]> = Rc::from(frame.fields);
                self.cached_fragment_fields.insert(frame.fragment_name, Rc::clone(&fields));
                match stack.last_mut() {
                    Some(parent) => fields.iter().for_each(|field| parent.add(*field)),
                    None => finished = fields,
                }
                continue;
            };
            match item {
                SelectionItem::Field(field) => frame.add(field),
                SelectionItem::Spread(spread_name) => {
                    if let Some(fields) = self.cached_fragment_fields.get(spread_name) {
                        fields.iter().for_each(|field| frame.add(*field));
                    } else if let Some(child) = self.fragment_frame(spread_name, &mut in_progress) {
                        stack.push(child);
                    }
                },
            }
        }
        finished
    }

    fn fragment_frame(
        &self,
        fragment_name: &'a str,
        in_progress: &mut HashSet<&'a str>,
    ) -> Option<FragmentFrame<'a>> {
        if !in_progress.insert(fragment_name) {
            return None;
        }
        let fragment = self.context.fragment(fragment_name)?;
        let fragment_type = self.context.schema().get_type(fragment.type_condition.name.as_str());
        Some(FragmentFrame {
            fragment_name,
            items: self.selection_items(fragment_type, &fragment.selection_set).into_iter(),
            fields: vec![],
            seen: HashSet::new(),
        })
    }

    fn find_conflicts(
        &mut self,
        parents_exclusive: bool,
        field_map: &FieldMap<'a>,
    ) -> Vec<Conflict<'a>> {
        let mut conflicts = vec![];
        for (response_name, fields) in field_map {
            for (i, field_a) in fields.iter().enumerate() {
                for field_b in &fields[i + 1..] {
                    if let Some(conflict) =
                        self.find_conflict(parents_exclusive, *response_name, field_a, field_b) {
                        conflicts.push(conflict);
                    }
                }
            }
        }
        conflicts
    }

    fn find_conflict(
        &mut self,
        parents_exclusive: bool,
        response_name: &'a str,
        field_a: &SelectedField<'a>,
        field_b: &SelectedField<'a>,
    ) -> Option<Conflict<'a>> {
        let (ast_a, ast_b) = (field_a.field, field_b.field);
        let (ptr_a, ptr_b) = (ast_a as *const ast::Field, ast_b as *const ast::Field);
        if ptr_a == ptr_b || !self.compared.insert((ptr_a, ptr_b)) {
            return None;
        }
        self.compared.insert((ptr_b, ptr_a));

        // Fields on two distinct object types are never both in a response
        // object, so only their result shapes have to agree.
        let exclusive = parents_exclusive
            || match (field_a.parent_type, field_b.parent_type) {
                (Some(GraphQLType::Object(a)), Some(GraphQLType::Object(b))) =>
                    a.name() != b.name(),
                _ => false,
            };
        let conflict = |reason: String| Conflict {
            response_name,
            reason: ConflictReason::Message(reason),
            fields: vec![ast_a, ast_b],
        };

        let (name_a, name_b) = (ast_a.name.as_str(), ast_b.name.as_str());
        if !exclusive && name_a != name_b {
            return Some(conflict(format!("{name_a} and {name_b} are different fields")));
        }
        let type_a = field_a.def.map(Field::type_annotation);
        let type_b = field_b.def.map(Field::type_annotation);
        if let (Some(type_a), Some(type_b)) = (type_a, type_b)
            && self.types_conflict(type_a, type_b) {
            return Some(conflict(format!("they return differing types {type_a} and {type_b}")));
        }
        if !exclusive {
            if !same_arguments(&ast_a.arguments, &ast_b.arguments) {
                return Some(conflict("they have differing arguments".to_string()));
            }
            if !same_directives(&ast_a.directives, &ast_b.directives) {
                return Some(conflict("they have differing directives".to_string()));
            }
        }

        let (Some(set_a), Some(set_b)) = (&ast_a.selection_set, &ast_b.selection_set) else {
            return None;
        };
        let schema = self.context.schema();
        let mut visited_fragments = HashSet::new();
        let mut subfield_map = FieldMap::new();
        self.collect_fields(
            type_a.and_then(|annot| schema.get_type(annot.innermost_name())),
            set_a,
            &mut visited_fragments,
            &mut subfield_map,
        );
        self.collect_fields(
            type_b.and_then(|annot| schema.get_type(annot.innermost_name())),
            set_b,
            &mut visited_fragments,
            &mut subfield_map,
        );
        let sub_conflicts = self.find_conflicts(exclusive, &subfield_map);
        if sub_conflicts.is_empty() {
            return None;
        }
        let mut fields = vec![ast_a, ast_b];
        for sub_conflict in &sub_conflicts {
            fields.extend(sub_conflict.fields.iter().copied());
        }
        Some(Conflict {
            response_name,
            reason: ConflictReason::Subfields(sub_conflicts),
            fields,
        })
    }

    /// Whether two field types would produce differently shaped results.
    /// Composite types are compared through their subfields instead.
    fn types_conflict(&self, type_a: &TypeAnnotation, type_b: &TypeAnnotation) -> bool {
        if type_a.nullable() != type_b.nullable() {
            return true;
        }
        match (type_a.list_item(), type_b.list_item()) {
            (Some(item_a), Some(item_b)) => return self.types_conflict(item_a, item_b),
            (None, None) => (),
            _ => return true,
        }
        let schema = self.context.schema();
        let is_leaf = |annot: &TypeAnnotation| schema
            .get_type(annot.innermost_name())
            .is_some_and(GraphQLType::is_leaf);
        if is_leaf(type_a) || is_leaf(type_b) {
            return type_a.innermost_name() != type_b.innermost_name();
        }
        false
    }
}

fn same_arguments(args_a: &[ast::Argument], args_b: &[ast::Argument]) -> bool {
    args_a.len() == args_b.len()
        && args_a.iter().all(|arg_a| {
            args_b
                .iter()
                .find(|arg_b| arg_b.name.value == arg_a.name.value)
                .is_some_and(|arg_b| print_value(&arg_a.value) == print_value(&arg_b.value))
        })
}

fn same_directives(directives_a: &[ast::Directive], directives_b: &[ast::Directive]) -> bool {
    directives_a.len() == directives_b.len()
        && directives_a.iter().all(|directive_a| {
            directives_b
                .iter()
                .find(|directive_b| directive_b.name.value == directive_a.name.value)
                .is_some_and(|directive_b| {
                    same_arguments(&directive_a.arguments, &directive_b.arguments)
                })
        })
}

impl<'a> Visitor<'a> for OverlappingFieldsCanBeMerged<'_, 'a> {
    fn leave(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        let Node::SelectionSet(Cow::Borrowed(selection_set)) = node else {
            return VisitAction::NoChange;
        };
        let parent_type = self.context.parent_type();
        let mut field_map = FieldMap::new();
        self.collect_fields(
            parent_type,
            *selection_set,
            &mut HashSet::new(),
            &mut field_map,
        );
        for conflict in self.find_conflicts(false, &field_map) {
            self.context.report_error(
                format!(
                    "Fields \"{}\" conflict because {}.",
                    conflict.response_name,
                    conflict.reason.describe(),
                ),
                conflict.fields.iter().map(|field| field.loc.as_ref()),
            );
        }
        VisitAction::NoChange
    }
}
