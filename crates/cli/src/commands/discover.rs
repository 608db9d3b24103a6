use anyhow::Result;
use art_explorer_core::ProjectDetector;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub fn discover_command(dir: &Path) -> Result<()> {
    let projects = discover_projects(dir);

    println!("🔍 Found {} art project(s) under {}", projects.len(), dir.display());
    for project in &projects {
        println!("   • {}", project.display());
    }
    Ok(())
}

/// Every directory below `dir` (inclusive) that holds a config file.
/// `node_modules` and hidden directories are not descended into.
pub fn discover_projects(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            match e.file_name().to_str() {
                Some(name) => name != "node_modules" && !name.starts_with('.'),
                None => true,
            }
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir() && ProjectDetector::is_managed_project(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_skips_dependencies_and_hidden_dirs() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        for dir in ["web", "admin", "node_modules/pkg", ".cache/old", "docs"] {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
        fs::write(root.join("art.config.json"), "{}").unwrap();
        fs::write(root.join("web/art.config.json"), "{}").unwrap();
        fs::write(root.join("admin/art.config.toml"), "").unwrap();
        fs::write(root.join("node_modules/pkg/art.config.json"), "{}").unwrap();
        fs::write(root.join(".cache/old/art.config.json"), "{}").unwrap();

        let found = discover_projects(root);
        assert_eq!(
            found,
            vec![root.to_path_buf(), root.join("admin"), root.join("web")]
        );
    }
}
