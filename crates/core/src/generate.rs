//! Descriptor evaluation: the plugin surface consumed by the orchestrator

use tracing::debug;

use stbuild_descriptor::LibraryDescriptor;

use crate::env::ToolHost;
use crate::plan::{apply, compute_plan};

/// Options recognized by `generate`
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Skip self-registration and contribute only the dependency list.
    /// Defaults to false.
    pub deps_only: bool,
}

/// Evaluate a descriptor against a build environment
///
/// Unless `deps_only` is set, registers the descriptor's library into the
/// build set, then configures each dependency tool in declared order. All
/// effects land on the supplied host; nothing is returned and nothing can
/// fail here. Unresolvable tool names are the host's concern.
pub fn generate(host: &mut dyn ToolHost, descriptor: &LibraryDescriptor, options: &GenerateOptions) {
    let plan = compute_plan(descriptor, options);

    debug!(
        library = %descriptor.name,
        revision = descriptor.revision,
        effects = plan.len(),
        deps_only = options.deps_only,
        "evaluating descriptor"
    );

    apply(&plan, host);
}

/// Existence probe
///
/// Reports whether this descriptor module is usable. Always true, for any
/// host; no state, no side effects.
pub fn exists(_host: &dyn ToolHost) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::BuildEnv;
    use stbuild_descriptor::{Revision, data_subselector};

    #[test]
    fn test_generate_registers_exactly_once() {
        let mut env = BuildEnv::new();
        generate(
            &mut env,
            &data_subselector(Revision::R2),
            &GenerateOptions::default(),
        );

        assert_eq!(env.registration_count("dataSubselector"), 1);
        assert_eq!(env.tool_log().len(), 6);
    }

    #[test]
    fn test_generate_deps_only_skips_registration() {
        let mut env = BuildEnv::new();
        generate(
            &mut env,
            &data_subselector(Revision::R2),
            &GenerateOptions { deps_only: true },
        );

        assert!(!env.is_registered("dataSubselector"));
        assert!(env.libraries().is_empty());
        assert_eq!(env.tool_log().len(), 6);
    }

    #[test]
    fn test_generate_preserves_declared_order_both_revisions() {
        for revision in Revision::ALL {
            let descriptor = data_subselector(revision);
            let mut env = BuildEnv::new();
            generate(&mut env, &descriptor, &GenerateOptions::default());

            assert_eq!(env.tool_log(), descriptor.tools.as_slice());
        }
    }

    #[test]
    fn test_default_options_register() {
        let options = GenerateOptions::default();
        assert!(!options.deps_only);
    }

    #[test]
    fn test_exists_is_always_true() {
        let fresh = BuildEnv::new();
        assert!(exists(&fresh));

        let mut populated = BuildEnv::new();
        generate(
            &mut populated,
            &data_subselector(Revision::R1),
            &GenerateOptions::default(),
        );
        assert!(exists(&populated));
    }
}
