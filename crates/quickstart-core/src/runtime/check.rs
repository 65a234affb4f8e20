//! Toolchain detection for Node.js and npm

use anyhow::Result;
use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Run `<program> --version` and report what came back
fn detect_version(name: &'static str, program: &str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    detect_version("Node.js", "node")
}

/// Check if the package manager is available
pub fn check_package_manager(program: &'static str) -> RuntimeInfo {
    detect_version(program, program)
}

/// Check that Node.js and the package manager are installed; fail listing
/// whatever is missing.
pub fn check_toolchain(package_manager: &'static str) -> Result<Vec<RuntimeInfo>> {
    let node = check_node();
    let manager = check_package_manager(package_manager);

    let mut missing = Vec::new();
    if !node.available {
        missing.push("Node.js (install from https://nodejs.org)".to_string());
    }
    if !manager.available {
        missing.push(format!(
            "{} (usually installed together with Node.js)",
            package_manager
        ));
    }

    if !missing.is_empty() {
        anyhow::bail!(
            "Missing required tools:\n{}",
            missing
                .iter()
                .map(|m| format!("  - {}", m))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    Ok(vec![node, manager])
}
