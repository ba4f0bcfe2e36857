mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.children_slice() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find the first element (depth-first, document order) carrying `node_ref`.
pub fn find_by_ref<'a>(root: &'a Element, node_ref: &str) -> Option<&'a Element> {
    if root.node_ref.as_deref() == Some(node_ref) {
        return Some(root);
    }

    for child in root.children_slice() {
        if let Some(found) = find_by_ref(child, node_ref) {
            return Some(found);
        }
    }

    None
}

/// Collect every element carrying `node_ref`, in document order.
pub fn find_all_by_ref<'a>(root: &'a Element, node_ref: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_by_ref(root, node_ref, &mut found);
    found
}

fn collect_by_ref<'a>(el: &'a Element, node_ref: &str, out: &mut Vec<&'a Element>) {
    if el.node_ref.as_deref() == Some(node_ref) {
        out.push(el);
    }
    for child in el.children_slice() {
        collect_by_ref(child, node_ref, out);
    }
}
