use anyhow::{Context, Result};
use art_explorer_core::ScaffoldKind;
use serde_json::json;
use std::fs;
use std::path::Path;
use tracing::info;

pub fn init_command(root: &Path, force: bool, toml: bool, kind: &str) -> Result<()> {
    let kind: ScaffoldKind = kind.parse()?;
    let (file_name, contents) = if toml {
        ("art.config.toml", starter_toml(kind))
    } else {
        ("art.config.json", starter_json(kind)?)
    };
    let config_path = root.join(file_name);

    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    fs::write(&config_path, contents)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    info!("Wrote {}", config_path.display());

    println!("✅ Created config: {}", config_path.display());
    println!("\n📌 Add one webpack entry per module under `webpack.entry`,");
    println!("   keyed by its path below `projectVirtualPath`.");
    Ok(())
}

pub fn starter_json(kind: ScaffoldKind) -> Result<String> {
    let config = json!({
        "projectType": kind.type_code(),
        "projectVirtualPath": "/src/modules",
        "webpack": {
            "entry": {
                "/src/modules/home/index.js": "./src/modules/home/index.js"
            }
        }
    });
    Ok(serde_json::to_string_pretty(&config)?)
}

pub fn starter_toml(kind: ScaffoldKind) -> String {
    format!(
        "projectType = \"{}\"\nprojectVirtualPath = \"/src/modules\"\n\n[webpack.entry]\n\"/src/modules/home/index.js\" = \"./src/modules/home/index.js\"\n",
        kind.type_code()
    )
}
