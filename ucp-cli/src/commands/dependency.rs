use crate::output::render_dependency;
use crate::types::{DependencyOperation, OutputArgs};
use tracing::warn;

/// Handle dependency commands
pub fn handle_dependency_command(
    operation: &DependencyOperation,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    match operation {
        DependencyOperation::Parse {
            reference,
            package_type,
        } => {
            let dep = ucp_dep::new(reference, package_type)?;
            println!("{}", render_dependency(&dep, output.output)?.trim_end());
        }
        DependencyOperation::Tag {
            reference,
            package_type,
        } => {
            let dep = ucp_dep::new(reference, package_type)?;
            if !is_exact_version(&dep.constraints) {
                warn!(
                    constraints = %dep.constraints,
                    "constraint is not an exact version, the tag will not resolve"
                );
            }
            println!("{}", ucp_dep::img_tag(&dep));
        }
    }
    Ok(())
}

fn is_exact_version(constraints: &str) -> bool {
    !constraints.is_empty()
        && !constraints.contains(['<', '>', '=', '~', '^', '*', ' ', ','])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_versions_are_recognized() {
        assert!(is_exact_version("v1.2.3"));
        assert!(is_exact_version("1.0.0-rc.1"));
        assert!(!is_exact_version(ucp_dep::DEFAULT_VERSION));
        assert!(!is_exact_version("~v1.2"));
        assert!(!is_exact_version(">=v1.0.0, <v2.0.0"));
        assert!(!is_exact_version(""));
    }
}
