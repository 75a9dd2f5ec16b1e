//! Generate command implementation

use std::path::Path;

use crate::config::Settings;
use crate::error::{ReazyError, Result};
use crate::generator::{self, GeneratorEnv};

/// Run the generator named by `target` (`app` when absent)
pub fn run(settings: &Settings, cwd: &Path, target: Option<&str>) -> Result<i32> {
    let namespace = namespace_for(settings, target)?;
    let env = GeneratorEnv::for_project(settings, cwd);
    env.run(&settings.runtime, cwd, &namespace, generator::default_options())
}

fn namespace_for(settings: &Settings, target: Option<&str>) -> Result<String> {
    match target.unwrap_or("app") {
        name @ ("app" | "service") => Ok(format!("{}:{name}", settings.package)),
        other => Err(ReazyError::UnknownGenerator {
            name: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_app() {
        assert_eq!(
            namespace_for(&Settings::default(), None).unwrap(),
            "reazy:app"
        );
    }

    #[test]
    fn test_service() {
        assert_eq!(
            namespace_for(&Settings::default(), Some("service")).unwrap(),
            "reazy:service"
        );
    }

    #[test]
    fn test_unknown_target() {
        let err = namespace_for(&Settings::default(), Some("hook")).unwrap_err();
        assert_eq!(err.to_string(), "Unknown generator `hook`");
    }
}
