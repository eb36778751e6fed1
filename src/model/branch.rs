use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchKind {
    Main,      // The reference branch of the project
    LongLived, // Persistent branch with its own history and settings
    ShortLived, // Ephemeral analysis branch (e.g. a pull request)
}

/// Analysis branch descriptor as reported by the branch listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub kind: BranchKind,
    /// Branch a short-lived branch will be merged into. Absent for main and
    /// long-lived branches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_branch: Option<String>,
}

impl Branch {
    pub fn new_main(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: BranchKind::Main,
            merge_branch: None,
        }
    }

    pub fn new_long_lived(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: BranchKind::LongLived,
            merge_branch: None,
        }
    }

    pub fn new_short_lived(name: impl Into<String>, merge_branch: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: BranchKind::ShortLived,
            merge_branch: Some(merge_branch.into()),
        }
    }

    pub fn is_main(&self) -> bool {
        self.kind == BranchKind::Main
    }

    pub fn is_short_living(&self) -> bool {
        self.kind == BranchKind::ShortLived
    }

    pub fn is_long_living(&self) -> bool {
        self.kind == BranchKind::LongLived
    }

    /// Branch name as it appears in URL queries. The main branch lives at the
    /// bare URL, so it contributes no `branch` key at all.
    pub fn name_for_query(&self) -> Option<&str> {
        if self.is_main() {
            None
        } else {
            Some(&self.name)
        }
    }
}

/// Order branches the way the branch table displays them: main branch first
/// with its short-lived branches nested under it, then each long-lived branch
/// (listing order preserved) with its own short-lived branches. Short-lived
/// siblings are sorted by name.
pub fn sort_branches_as_tree(branches: &[Branch]) -> Vec<Branch> {
    let mut result = Vec::with_capacity(branches.len());

    let nested_short_living = |merge_branch: &str| -> Vec<Branch> {
        let mut found: Vec<Branch> = branches
            .iter()
            .filter(|b| b.is_short_living() && b.merge_branch.as_deref() == Some(merge_branch))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        found
    };

    if let Some(main) = branches.iter().find(|b| b.is_main()) {
        result.push(main.clone());
        result.extend(nested_short_living(&main.name));
    }
    for long_lived in branches.iter().filter(|b| b.is_long_living()) {
        result.push(long_lived.clone());
        result.extend(nested_short_living(&long_lived.name));
    }

    result
}
