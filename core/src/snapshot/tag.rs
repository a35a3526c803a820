//! Tag tree builder.
//!
//! Turns a flat list of dotted tag strings into a group/leaf hierarchy.
//! Two tags sharing a path prefix share the same group node within one
//! snapshot. Owned and blocked collections use the same builder but
//! produce fully independent trees.

use stateview_types::TagNode;

/// Build a tag tree from a flat tag list. Malformed entries (empty
/// string, or empty segments from leading/trailing/double dots) are
/// skipped with a warning; one bad tag never aborts the build.
pub fn build_tag_tree(tags: &[String]) -> TagNode {
    let mut root = TagNode::root();
    for tag in tags {
        if !insert_tag(&mut root, tag) {
            tracing::warn!(tag = %tag, "skipping malformed tag");
        }
    }
    root
}

fn insert_tag(root: &mut TagNode, tag: &str) -> bool {
    if tag.is_empty() {
        return false;
    }
    let segments: Vec<&str> = tag.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return false;
    }

    let mut node = root;
    for segment in &segments[..segments.len() - 1] {
        node = find_or_create_group(node, segment);
    }

    let TagNode::Group { children, .. } = node else {
        return false;
    };
    let exists = children
        .iter()
        .any(|c| matches!(c, TagNode::Leaf { tag: t } if t == tag));
    if !exists {
        children.push(TagNode::Leaf {
            tag: tag.to_string(),
        });
    }
    true
}

/// Find the child group with a matching segment at this depth, or
/// create it. Leaves with the same name are left alone: a leaf never
/// grows children.
fn find_or_create_group<'a>(node: &'a mut TagNode, segment: &str) -> &'a mut TagNode {
    match node {
        TagNode::Group {
            full_path,
            children,
            ..
        } => {
            let existing = children
                .iter()
                .position(|c| matches!(c, TagNode::Group { segment: s, .. } if s == segment));
            if let Some(idx) = existing {
                return &mut children[idx];
            }

            let path = if full_path.is_empty() {
                segment.to_string()
            } else {
                format!("{full_path}.{segment}")
            };
            children.push(TagNode::Group {
                segment: segment.to_string(),
                full_path: path,
                children: Vec::new(),
            });
            let idx = children.len() - 1;
            &mut children[idx]
        }
        // insert_tag only ever walks through groups
        TagNode::Leaf { .. } => node,
    }
}

/// Recursively sort sibling nodes alphabetically by display segment.
/// Optional: the builder preserves insertion order by default.
pub fn sort_children(node: &mut TagNode) {
    if let TagNode::Group { children, .. } = node {
        children.sort_by(|a, b| a.segment().cmp(b.segment()));
        for child in children {
            sort_children(child);
        }
    }
}
