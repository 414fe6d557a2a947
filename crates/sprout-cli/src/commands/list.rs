//! Implementation of the `sprout list` command.

use serde_json::{Value, json};

use sprout_core::domain::{CiService, Framework, Technology, capabilities::frameworks_using};

use crate::{
    cli::{ListArgs, ListCategory},
    error::CliResult,
    output::OutputManager,
};

const ALL_CATEGORIES: [ListCategory; 3] = [
    ListCategory::Ci,
    ListCategory::Frameworks,
    ListCategory::Deployment,
];

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let categories = match args.category {
        Some(category) => vec![category],
        None => ALL_CATEGORIES.to_vec(),
    };

    if output.is_json() {
        let mut doc = serde_json::Map::new();
        for category in categories {
            doc.insert(key(category).into(), category_json(category));
        }
        output.json(&Value::Object(doc))?;
        return Ok(());
    }

    for (i, category) in categories.into_iter().enumerate() {
        if i > 0 {
            output.print("")?;
        }
        output.header(title(category))?;
        for row in rows(category) {
            output.print(&row)?;
        }
    }
    Ok(())
}

fn key(category: ListCategory) -> &'static str {
    match category {
        ListCategory::Ci => "ci_services",
        ListCategory::Frameworks => "frameworks",
        ListCategory::Deployment => "deployment",
    }
}

fn title(category: ListCategory) -> &'static str {
    match category {
        ListCategory::Ci => "CI services:",
        ListCategory::Frameworks => "Frameworks:",
        ListCategory::Deployment => "Deployment technologies:",
    }
}

fn rows(category: ListCategory) -> Vec<String> {
    match category {
        ListCategory::Ci => CiService::ALL
            .iter()
            .map(|ci| format!("  {:<26} {}", ci.as_str(), ci.display_name()))
            .collect(),
        ListCategory::Frameworks => Framework::ALL
            .iter()
            .map(|fw| {
                let tech = fw.technology().map_or("-", |t| t.as_str());
                format!("  {:<26} deploys as {tech}", fw.as_str())
            })
            .collect(),
        ListCategory::Deployment => Technology::ALL
            .iter()
            .map(|tech| format!("  {:<26} {}", tech.as_str(), framework_names(*tech).join(", ")))
            .collect(),
    }
}

fn category_json(category: ListCategory) -> Value {
    match category {
        ListCategory::Ci => CiService::ALL
            .iter()
            .map(|ci| json!({ "file": ci.as_str(), "name": ci.display_name() }))
            .collect(),
        ListCategory::Frameworks => Framework::ALL
            .iter()
            .map(|fw| {
                json!({
                    "name": fw.as_str(),
                    "technology": fw.technology().map(|t| t.as_str()),
                })
            })
            .collect(),
        ListCategory::Deployment => Technology::ALL
            .iter()
            .map(|tech| {
                json!({
                    "technology": tech.as_str(),
                    "frameworks": framework_names(*tech),
                })
            })
            .collect(),
    }
}

fn framework_names(technology: Technology) -> Vec<&'static str> {
    frameworks_using(technology)
        .into_iter()
        .map(|fw| fw.as_str())
        .collect()
}
