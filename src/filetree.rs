//! The compiled-in portfolio file tree.
//!
//! Every session starts from a fresh copy of this tree. Nothing at runtime
//! writes to it; commands only read.

use crate::vfs::FileNode;
use std::collections::HashMap;

/// Directory every session starts in, and where `cd` with no argument goes.
pub const HOME: &str = "/home/guest";

/// A file entry of the static tree, addressed by absolute path.
pub struct StaticFile {
    pub path: &'static str,
    pub content: &'static str,
    pub executable: bool,
}

/// Directories that must exist even without files in them.
pub const DIRECTORIES: &[&str] = &[
    "/home/guest/projects",
    "/home/guest/experience",
    "/home/guest/apps",
    "/etc",
    "/var/log",
    "/tmp",
];

const ABOUT: &str = "\
> IDENT: guest-operator
> ROLE:  full-stack engineer / systems tinkerer
> LOC:   somewhere on the grid

I build fast, resilient software for the web and the metal underneath it.
Rust by preference, TypeScript by necessity, C when nobody is watching.

Type 'ls projects' to see what I have been working on.";

const CONTACT: &str = "\
// SECURE CHANNELS
email    : hello@neon-shell.dev
github   : github.com/neon-shell
mastodon : @operator@hachyderm.io

Prefer a call? Run 'calendar' to book a slot.";

const SKILLS: &str = "\
[LANGUAGES]   Rust, TypeScript, Go, Python, SQL
[FRONTEND]    React, WebAssembly, WebGL, Tailwind
[BACKEND]     Axum, Postgres, Redis, gRPC
[INFRA]       Docker, Kubernetes, Terraform, Nix
[PRACTICES]   property testing, observability, incident response";

const RESUME: &str = "[binary: resume.pdf, 184 KB] request a copy via contact.txt";

const PROJECTS_README: &str = "\
Selected work. Each directory holds a short write-up.

  neural-link/          realtime telemetry pipeline
  ghost-protocol/       zero-trust mesh VPN experiment
  synthwave-dashboard   retro-styled metrics dashboard";

const NEURAL_LINK_README: &str = "\
NEURAL-LINK
===========
Realtime telemetry pipeline ingesting 2M events/s from edge sensors.
Lock-free ring buffers on the hot path, columnar storage on the cold one.

STATUS: production";

const NEURAL_LINK_STACK: &str = "\
rust tokio arrow parquet
clickhouse grafana";

const GHOST_PROTOCOL_README: &str = "\
GHOST-PROTOCOL
==============
Zero-trust overlay network built on WireGuard with per-request identity.
Peers negotiate short-lived keys through a gossip control plane.

STATUS: research prototype";

const SYNTHWAVE: &str = "\
# synthwave-dashboard

Metrics dashboard with a CRT aesthetic. Scanlines are optional,
neon is not. Built with WebGL shaders and a tiny reactive core.";

const EXPERIENCE_CURRENT: &str = "\
2023 - present  Staff Engineer, Arcology Systems
  - led the migration of the billing core to Rust
  - cut p99 latency from 480ms to 35ms";

const EXPERIENCE_PREVIOUS: &str = "\
2019 - 2023     Senior Engineer, Night City Networks
  - built the edge caching layer serving 40k req/s
  - on-call lead for the platform team";

const NETWORK_BIN: &str = "[executable] interactive network map. run 'network' to launch";
const SCANNER_BIN: &str = "[executable] radar scanner. run 'scanner' to launch";
const BREACH_BIN: &str = "[executable] code-breach puzzle. run 'breach' to launch";
const CALENDAR_BIN: &str = "[executable] booking calendar. run 'calendar' to launch";

const MOTD: &str = "\
Welcome to NEON-SHELL v2.0.77
All connections are monitored. Have fun.";

const HOSTNAME: &str = "portfolio";

const ACCESS_LOG: &str = "\
[00:00:01] uplink established
[00:00:02] guest session opened
[00:00:03] intrusion countermeasures: nominal";

/// Every file in the tree, with its literal content.
pub const FILES: &[StaticFile] = &[
    StaticFile { path: "/home/guest/about.txt", content: ABOUT, executable: false },
    StaticFile { path: "/home/guest/contact.txt", content: CONTACT, executable: false },
    StaticFile { path: "/home/guest/skills.txt", content: SKILLS, executable: false },
    StaticFile { path: "/home/guest/resume.pdf", content: RESUME, executable: false },
    StaticFile { path: "/home/guest/projects/README.md", content: PROJECTS_README, executable: false },
    StaticFile { path: "/home/guest/projects/neural-link/README.md", content: NEURAL_LINK_README, executable: false },
    StaticFile { path: "/home/guest/projects/neural-link/stack.txt", content: NEURAL_LINK_STACK, executable: false },
    StaticFile { path: "/home/guest/projects/ghost-protocol/README.md", content: GHOST_PROTOCOL_README, executable: false },
    StaticFile { path: "/home/guest/projects/synthwave-dashboard.md", content: SYNTHWAVE, executable: false },
    StaticFile { path: "/home/guest/experience/2023-present.txt", content: EXPERIENCE_CURRENT, executable: false },
    StaticFile { path: "/home/guest/experience/2019-2023.txt", content: EXPERIENCE_PREVIOUS, executable: false },
    StaticFile { path: "/home/guest/apps/network", content: NETWORK_BIN, executable: true },
    StaticFile { path: "/home/guest/apps/scanner", content: SCANNER_BIN, executable: true },
    StaticFile { path: "/home/guest/apps/breach", content: BREACH_BIN, executable: true },
    StaticFile { path: "/home/guest/apps/calendar", content: CALENDAR_BIN, executable: true },
    StaticFile { path: "/etc/motd", content: MOTD, executable: false },
    StaticFile { path: "/etc/hostname", content: HOSTNAME, executable: false },
    StaticFile { path: "/var/log/access.log", content: ACCESS_LOG, executable: false },
];

/// Builds a fresh root node from [`DIRECTORIES`] and [`FILES`].
pub fn build() -> FileNode {
    let mut root = FileNode::directory("/");
    for dir in DIRECTORIES {
        let _ = ensure_directory(&mut root, &segments(dir));
    }
    for file in FILES {
        let parts = segments(file.path);
        let Some((name, parents)) = parts.split_last() else { continue };
        let node = if file.executable {
            FileNode::executable(*name, file.content)
        } else {
            FileNode::file(*name, file.content)
        };
        if let Some(children) = ensure_directory(&mut root, parents) {
            children.insert(name.to_string(), node);
        }
    }
    root
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

// creates missing directories along the way, None if a file is in the path
fn ensure_directory<'a>(
    node: &'a mut FileNode,
    parts: &[&str],
) -> Option<&'a mut HashMap<String, FileNode>> {
    let FileNode::Directory { children, .. } = node else {
        return None;
    };
    match parts.split_first() {
        None => Some(children),
        Some((first, rest)) => {
            let child = children
                .entry(first.to_string())
                .or_insert_with(|| FileNode::directory(*first));
            ensure_directory(child, rest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lookup<'a>(root: &'a FileNode, path: &str) -> Option<&'a FileNode> {
        let mut node = root;
        for part in segments(path) {
            node = node.children()?.get(part)?;
        }
        Some(node)
    }

    #[test]
    fn test_every_static_file_is_built() {
        let root = build();
        for file in FILES {
            let node = lookup(&root, file.path).expect(file.path);
            assert_eq!(node.content(), Some(file.content));
            assert_eq!(node.is_executable(), file.executable);
        }
    }

    #[test]
    fn test_empty_directories_exist() {
        let root = build();
        let tmp = lookup(&root, "/tmp").unwrap();
        assert!(tmp.is_directory());
        assert!(tmp.children().unwrap().is_empty());
    }

    #[test]
    fn test_home_is_a_directory() {
        let root = build();
        assert!(lookup(&root, HOME).unwrap().is_directory());
    }

    #[test]
    fn test_only_projects_starts_with_pro_in_home() {
        let root = build();
        let home = lookup(&root, HOME).unwrap();
        let names: Vec<&str> = home
            .children()
            .unwrap()
            .keys()
            .map(String::as_str)
            .filter(|n| n.starts_with("pro"))
            .collect();
        assert_eq!(names, vec!["projects"]);
    }
}
