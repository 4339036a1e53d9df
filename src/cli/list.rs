use req2uv::core::MigrateResult;
use req2uv::di::ConfigProvider;
use req2uv::requirements::{classify_file, Classification, DependencyKind};

/// Print the classification of the requirements file without changing anything.
pub fn run(config: &dyn ConfigProvider, all: bool, json: bool) -> MigrateResult<()> {
    let classification = select(
        classify_file(config.requirements_file(), config.manifest_marker())?,
        all,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&classification)?);
        return Ok(());
    }

    if classification.is_empty() {
        println!("No packages to list");
        return Ok(());
    }

    for classified in &classification.entries {
        if all {
            let kind = match classified.kind {
                DependencyKind::Direct => "direct",
                DependencyKind::Transitive => "transitive",
            };
            println!(
                "{}=={}  ({})",
                classified.entry.name, classified.entry.pinned_version, kind
            );
        } else {
            println!("{}", classified.entry.name);
        }
    }

    Ok(())
}

/// Keep only direct entries unless `all` is set.
fn select(mut classification: Classification, all: bool) -> Classification {
    if !all {
        classification.entries.retain(|e| e.is_direct());
    }
    classification
}
