//! Help renderer
//!
//! Turns the result of resolution into the stdout/stderr/exit-code triple.
//! Successful outcomes write only to stdout; every error writes only to
//! stderr.

pub mod config;
mod output;
mod template;

pub use config::{OutputConfig, DEFAULT_BANNER};
pub use output::{ExitStatus, HelpOutput};
pub use template::render_template_help;

use tracing::debug;

use crate::error::ResolveError;
use crate::resolver::{Outcome, ResolutionContext};

/// Render the terminal output of one invocation
pub fn render(
    outcome: Result<Outcome<'_>, ResolveError>,
    ctx: &ResolutionContext,
    config: &OutputConfig,
) -> HelpOutput {
    match outcome {
        Ok(Outcome::Generic) => HelpOutput::success(config.banner_text().to_string()),
        Ok(Outcome::Template(resolution)) => {
            HelpOutput::success(render_template_help(&resolution, config))
        }
        Err(err) => {
            let status = ExitStatus::for_error(&err);
            debug!(error = %err, code = status.code(), "help request failed");
            let line = ctx.command_line(&config.command_name);
            HelpOutput::failure(err.format(&line, &config.source_name), status)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_outcome_prints_banner() {
        let ctx = ResolutionContext::new(["-h"]);
        let out = render(Ok(Outcome::Generic), &ctx, &OutputConfig::default());
        assert_eq!(out.stdout, DEFAULT_BANNER);
        assert!(out.stderr.is_empty());
        assert_eq!(out.exit_code(), 0);
    }

    #[test]
    fn test_empty_banner_falls_back_to_default() {
        let ctx = ResolutionContext::new(["-h"]);
        let config = OutputConfig::new().with_banner("");
        let out = render(Ok(Outcome::Generic), &ctx, &config);
        assert_eq!(out.stdout, DEFAULT_BANNER);
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn test_error_goes_to_stderr_only() {
        let ctx = ResolutionContext::new(["class", "-h"]);
        let err = ResolveError::SelectorNotFound {
            selector: "class".to_string(),
            variant: None,
            index: 0,
            suggestions: vec!["classlib".to_string()],
        };
        let out = render(Err(err), &ctx, &OutputConfig::default());
        assert!(out.stdout.is_empty());
        assert!(out.stderr.contains("No templates found matching: 'class'."));
        assert!(out.stderr.contains("new3 class -h"));
        assert_eq!(out.status, ExitStatus::NotFound);
    }
}
