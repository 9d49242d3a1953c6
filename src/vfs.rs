use std::cmp::Ordering;
use std::collections::HashMap;

use crate::filetree;

/// One entry of the virtual tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileNode {
    Directory {
        name: String,
        children: HashMap<String, FileNode>,
    },
    File {
        name: String,
        content: String,
        executable: bool,
    },
}

impl FileNode {
    pub fn directory(name: &str) -> Self {
        FileNode::Directory {
            name: name.to_string(),
            children: HashMap::new(),
        }
    }

    pub fn file(name: &str, content: &str) -> Self {
        FileNode::File {
            name: name.to_string(),
            content: content.to_string(),
            executable: false,
        }
    }

    pub fn executable(name: &str, content: &str) -> Self {
        FileNode::File {
            name: name.to_string(),
            content: content.to_string(),
            executable: true,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FileNode::Directory { name, .. } | FileNode::File { name, .. } => name,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, FileNode::Directory { .. })
    }

    pub fn is_executable(&self) -> bool {
        matches!(self, FileNode::File { executable: true, .. })
    }

    pub fn children(&self) -> Option<&HashMap<String, FileNode>> {
        match self {
            FileNode::Directory { children, .. } => Some(children),
            FileNode::File { .. } => None,
        }
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            FileNode::File { content, .. } => Some(content),
            FileNode::Directory { .. } => None,
        }
    }

    /// Glyph shown in front of the entry by `ls` and `tree`.
    pub fn icon(&self) -> &'static str {
        match self {
            FileNode::Directory { .. } => "📁",
            FileNode::File { executable: true, .. } => "⚡",
            FileNode::File { .. } => "📄",
        }
    }

    /// Name with a trailing `/` for directories.
    pub fn display_name(&self) -> String {
        if self.is_directory() {
            format!("{}/", self.name())
        } else {
            self.name().to_string()
        }
    }

    /// Children with directories first, then by name. Empty for files.
    pub fn sorted_children(&self) -> Vec<&FileNode> {
        let mut entries: Vec<&FileNode> = match self.children() {
            Some(children) => children.values().collect(),
            None => Vec::new(),
        };
        entries.sort_by(|a, b| compare_entries(a, b));
        entries
    }
}

fn compare_entries(a: &FileNode, b: &FileNode) -> Ordering {
    b.is_directory()
        .cmp(&a.is_directory())
        .then_with(|| a.name().cmp(b.name()))
}

/// Read-only view over the tree plus the session's working directory.
#[derive(Debug, Clone)]
pub struct FileSystem {
    root: FileNode,
    home: String,
    current_path: String,
}

impl Default for FileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem {
    /// Session over the built-in portfolio tree, starting at home.
    pub fn new() -> Self {
        Self::with_root(filetree::build(), filetree::HOME)
    }

    pub fn with_root(root: FileNode, home: &str) -> Self {
        let home = normalize_path(home);
        Self {
            root,
            current_path: home.clone(),
            home,
        }
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Overwrites the working directory without checking it exists.
    pub fn set_current_path(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
    }

    /// Turns `path` into an absolute, normalized path. Does not check existence.
    pub fn resolve_path(&self, path: &str) -> String {
        let joined = if path.starts_with('/') {
            path.to_string()
        } else if path == "~" {
            self.home.clone()
        } else if let Some(rest) = path.strip_prefix("~/") {
            join_path(&self.home, rest)
        } else if path == ".." {
            parent_path(&self.current_path)
        } else if let Some(rest) = path.strip_prefix("../") {
            join_path(&parent_path(&self.current_path), rest)
        } else if path == "." {
            self.current_path.clone()
        } else {
            join_path(&self.current_path, path)
        };
        normalize_path(&joined)
    }

    pub fn get_node(&self, path: &str) -> Option<&FileNode> {
        let resolved = self.resolve_path(path);
        let mut node = &self.root;
        for segment in resolved.split('/').filter(|s| !s.is_empty()) {
            node = node.children()?.get(segment)?;
        }
        Some(node)
    }

    /// Entries of a directory, directories first. `None` unless `path` is a directory.
    pub fn list_directory(&self, path: &str) -> Option<Vec<&FileNode>> {
        let node = self.get_node(path)?;
        node.is_directory().then(|| node.sorted_children())
    }

    pub fn read_file(&self, path: &str) -> Option<&str> {
        self.get_node(path)?.content()
    }

    pub fn change_directory(&mut self, path: &str) -> bool {
        let resolved = self.resolve_path(path);
        if !self.is_directory(&resolved) {
            return false;
        }
        self.current_path = resolved;
        true
    }

    pub fn exists(&self, path: &str) -> bool {
        self.get_node(path).is_some()
    }

    pub fn is_directory(&self, path: &str) -> bool {
        self.get_node(path).is_some_and(FileNode::is_directory)
    }

    pub fn is_file(&self, path: &str) -> bool {
        self.get_node(path).is_some_and(|n| !n.is_directory())
    }

    pub fn is_executable(&self, path: &str) -> bool {
        self.get_node(path).is_some_and(FileNode::is_executable)
    }

    /// ASCII-art listing of everything below `path`, one line per entry.
    /// Empty when `path` is not a directory.
    pub fn directory_tree(&self, path: &str, prefix: &str) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(node) = self.get_node(path) {
            render_branch(node, prefix, &mut lines);
        }
        lines
    }
}

// pre-order walk; each child picks its own connector
fn render_branch(dir: &FileNode, prefix: &str, lines: &mut Vec<String>) {
    let entries = dir.sorted_children();
    let count = entries.len();
    for (i, entry) in entries.into_iter().enumerate() {
        let last = i + 1 == count;
        let connector = if last { "└── " } else { "├── " };
        lines.push(format!(
            "{}{}{} {}",
            prefix,
            connector,
            entry.icon(),
            entry.display_name()
        ));
        if entry.is_directory() {
            let child_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
            render_branch(entry, &child_prefix, lines);
        }
    }
}

// parent of an absolute path, root stays root
fn parent_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => trimmed[..idx].to_string(),
    }
}

fn join_path(base: &str, relative: &str) -> String {
    if base.ends_with('/') {
        format!("{}{}", base, relative)
    } else {
        format!("{}/{}", base, relative)
    }
}

/// Collapses `.`, `..`, repeated and trailing slashes of an absolute path.
/// `..` at the root stays at the root.
pub fn normalize_path(path: &str) -> String {
    let mut components: Vec<&str> = Vec::new();
    for component in path.split('/') {
        match component {
            "" | "." => continue,
            ".." => {
                components.pop();
            }
            comp => components.push(comp),
        }
    }
    if components.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", components.join("/"))
    }
}
