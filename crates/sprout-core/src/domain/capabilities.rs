//! Framework → deployment technology registry.
//!
//! Each framework that ships deployment configuration is described exactly
//! once by a [`DeploymentDef`]. A framework missing from the table is a
//! legitimate "no deployment configuration" outcome, not an error.
//!
//! # Adding a New Mapping
//!
//! 1. Add one [`DeploymentDef`] entry to [`DEPLOYMENT_REGISTRY`]
//! 2. Stage the files under `templates/default/_/deployment/<technology>/`

use crate::domain::value_objects::{Framework, Technology};

/// Deployment technology for one framework.
#[derive(Debug, Clone, Copy)]
pub struct DeploymentDef {
    pub framework: Framework,
    pub technology: Technology,
}

/// Single source of truth for deployment selection.
pub static DEPLOYMENT_REGISTRY: &[DeploymentDef] = &[
    DeploymentDef {
        framework: Framework::Django,
        technology: Technology::Python,
    },
    DeploymentDef {
        framework: Framework::Flask,
        technology: Technology::Python,
    },
    DeploymentDef {
        framework: Framework::PhpGeneric,
        technology: Technology::Php,
    },
];

/// Look up the deployment technology registered for `framework`.
pub fn technology_for(framework: Framework) -> Option<Technology> {
    DEPLOYMENT_REGISTRY
        .iter()
        .find(|def| def.framework == framework)
        .map(|def| def.technology)
}

/// All frameworks sharing `technology`.
pub fn frameworks_using(technology: Technology) -> Vec<Framework> {
    DEPLOYMENT_REGISTRY
        .iter()
        .filter(|def| def.technology == technology)
        .map(|def| def.framework)
        .collect()
}
