//! Attribute tree builder.

use stateview_types::{AttributeRecord, AttributeSetNode};

use crate::subject::{SubjectHandle, SubjectQuery};

/// Group attributes by owning attribute-set type, one group per
/// distinct set name in first-seen order. A subject carrying two
/// instances of the same set type folds into one group.
pub fn build_attribute_tree(query: &SubjectQuery, subject: SubjectHandle) -> Vec<AttributeSetNode> {
    let mut groups: Vec<AttributeSetNode> = Vec::new();

    for set in query.list_attribute_sets(subject) {
        let attributes = set.attributes.into_iter().map(|attr| AttributeRecord {
            name: attr.name,
            base_value: attr.base_value,
            current_value: attr.current_value,
        });

        match groups.iter_mut().find(|g| g.set_name == set.set_name) {
            Some(group) => group.attributes.extend(attributes),
            None => groups.push(AttributeSetNode {
                set_name: set.set_name,
                attributes: attributes.collect(),
            }),
        }
    }

    groups
}
