use req2uv::core::path::project_dir_for;
use req2uv::core::{MigrateError, MigrateResult};
use req2uv::di::{ConfigProvider, ManifestTool, ServiceContainer};
use req2uv::requirements::read_direct_dependencies;
use req2uv::tool::display_command;

/// Classify the requirements file and hand every direct dependency to the
/// manifest tool in one batch.
pub fn run(container: &ServiceContainer, dry_run: bool) -> MigrateResult<()> {
    let file = container.config.requirements_file();
    let marker = container.config.manifest_marker();

    println!(
        "🔍 Parsing {} to identify direct dependencies...",
        file.display()
    );
    let direct_deps = read_direct_dependencies(file, marker)?;

    if direct_deps.is_empty() {
        return Err(MigrateError::NoDirectDependencies {
            file: file.to_path_buf(),
            marker: marker.to_string(),
        });
    }

    println!("✅ Found {} direct dependencies:", direct_deps.len());
    for dep in &direct_deps {
        println!("   - {}", dep);
    }

    let tool = &container.tool;
    if dry_run {
        println!(
            "\nDry run, not modifying anything. Would run:\n   {}",
            display_command(tool.program(), &direct_deps)
        );
        return Ok(());
    }

    println!("\n📦 Adding dependencies with `{} add`...", tool.program());
    tool.ensure_available()?;
    let output = tool.add(&direct_deps, &project_dir_for(file))?;

    println!("{}", output.stdout);
    if !output.stderr.is_empty() {
        eprint!("{}", output.stderr);
    }

    println!("✅ Successfully migrated to uv project!");
    println!("\n💡 Next steps:");
    println!("   - Review pyproject.toml");
    println!("   - Run 'uv sync' to ensure everything is locked");
    println!("   - You can delete {} or regenerate it with:", file.display());
    println!("     uv pip compile pyproject.toml -o {}", file.display());

    Ok(())
}
