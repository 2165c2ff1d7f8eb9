use crate::core::Record;
use serde::Serialize;
use std::collections::HashMap;

/// Field names linking a flat record list into a tree
#[derive(Debug, Clone)]
pub struct TreeKeys {
    pub id: String,
    pub parent_id: String,
}

impl TreeKeys {
    pub fn new(id: impl Into<String>, parent_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent_id: parent_id.into(),
        }
    }
}

impl Default for TreeKeys {
    fn default() -> Self {
        Self::new("id", "pid")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    pub data: Record,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Number of nodes in this subtree, itself included
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(TreeNode::size).sum::<usize>()
    }
}

/// Build a forest from a flat list.
///
/// A record becomes the child of the record whose id matches its parent id
/// (ids compare by display text; with duplicate ids the last record wins).
/// Records with no matching parent are roots. Input order is kept among
/// siblings. Records only reachable through a parent cycle are dropped.
pub fn to_tree(records: &[Record], keys: &TreeKeys) -> Vec<TreeNode> {
    let id_index: HashMap<String, usize> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let id = record.get(&keys.id).filter(|v| !v.is_null())?;
            Some((id.to_string(), index))
        })
        .collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
    let mut roots = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let parent = record
            .get(&keys.parent_id)
            .filter(|v| !v.is_null())
            .and_then(|pid| id_index.get(&pid.to_string()));
        match parent {
            Some(&parent) => children[parent].push(index),
            None => roots.push(index),
        }
    }

    let mut visited = vec![false; records.len()];
    roots
        .into_iter()
        .filter_map(|root| build_node(root, records, &children, &mut visited))
        .collect()
}

fn build_node(
    index: usize,
    records: &[Record],
    children: &[Vec<usize>],
    visited: &mut [bool],
) -> Option<TreeNode> {
    if visited[index] {
        return None;
    }
    visited[index] = true;

    let nodes = children[index]
        .iter()
        .filter_map(|&child| build_node(child, records, children, visited))
        .collect();

    Some(TreeNode {
        data: records[index].clone(),
        children: nodes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Value;

    fn node(id: i64, pid: Option<i64>) -> Record {
        let record = Record::new().with("id", id).with("name", format!("n{}", id));
        match pid {
            Some(pid) => record.with("pid", pid),
            None => record,
        }
    }

    #[test]
    fn test_basic_forest() {
        let records = vec![
            node(1, None),
            node(2, Some(1)),
            node(3, Some(1)),
            node(4, Some(2)),
            node(5, Some(99)),
        ];
        let forest = to_tree(&records, &TreeKeys::default());

        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].data.get("id"), Some(&Value::Integer(1)));
        assert_eq!(forest[0].size(), 4);
        assert_eq!(forest[0].children[0].children[0].data.get("id"), Some(&Value::Integer(4)));
        assert_eq!(forest[1].data.get("id"), Some(&Value::Integer(5)));
    }

    #[test]
    fn test_child_before_parent_in_input() {
        let records = vec![node(2, Some(1)), node(1, None)];
        let forest = to_tree(&records, &TreeKeys::default());

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].children.len(), 1);
    }

    #[test]
    fn test_ids_match_by_text() {
        let records = vec![
            Record::new().with("key", "7"),
            Record::new().with("key", "8").with("parent", 7),
        ];
        let forest = to_tree(&records, &TreeKeys::new("key", "parent"));
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].size(), 2);
    }

    #[test]
    fn test_cycle_is_dropped() {
        let records = vec![node(1, None), node(2, Some(3)), node(3, Some(2))];
        let forest = to_tree(&records, &TreeKeys::default());

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].size(), 1);
    }

    #[test]
    fn test_null_parent_is_root() {
        let records = vec![
            Record::new().with("id", Value::Null),
            Record::new().with("id", 1).with("pid", Value::Null),
        ];
        let forest = to_tree(&records, &TreeKeys::default());
        assert_eq!(forest.len(), 2);
    }
}
