use std::collections::VecDeque;

use indexmap::IndexSet;

use super::DecompoundedWord;

/// A node in a [DecompoundingTree]. Each child refines the last fragment of its parent.
#[derive(Debug, Clone)]
pub struct SplitNode {
    value: DecompoundedWord,
    children: Vec<SplitNode>,
}

impl SplitNode {
    pub(crate) fn new(value: DecompoundedWord) -> Self {
        SplitNode {
            value,
            children: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, child: SplitNode) {
        self.children.push(child);
    }

    pub fn value(&self) -> &DecompoundedWord {
        &self.value
    }

    pub fn children(&self) -> &[SplitNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|x| x.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// All candidate splits of one word. The root is the unsplit word.
#[derive(Debug, Clone)]
pub struct DecompoundingTree {
    root: SplitNode,
}

impl DecompoundingTree {
    pub(crate) fn new(root: SplitNode) -> Self {
        DecompoundingTree { root }
    }

    pub fn root(&self) -> &SplitNode {
        &self.root
    }

    /// The length of the longest path from the root to a leaf. Zero if the word was not split at all.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// All distinct splits in breadth-first order, starting with the unsplit word.
    pub fn all_splits(&self) -> Vec<DecompoundedWord> {
        let mut splits = IndexSet::new();
        let mut queue = VecDeque::new();
        queue.push_back(&self.root);

        while let Some(node) = queue.pop_front() {
            splits.insert(node.value.clone());
            queue.extend(node.children.iter());
        }

        splits.into_iter().collect()
    }
}
