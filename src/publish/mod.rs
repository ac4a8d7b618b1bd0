//! Posting reports to the repository host
//!
//! The transport is the `gh` CLI, invoked as a subprocess. It sits behind
//! the [`CommentPublisher`] trait so command code and tests can inject
//! their own implementation.

use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::debug;

/// Destination for a rendered report.
pub trait CommentPublisher {
    /// Post `body` as a comment on pull request `pr`.
    fn comment_on_pr(&self, pr: &str, body: &str) -> Result<()>;

    /// Open a new issue titled `title` with `body`.
    fn open_issue(&self, title: &str, body: &str) -> Result<()>;
}

/// Publisher backed by the GitHub CLI.
pub struct GhCli {
    program: String,
}

impl GhCli {
    pub fn new() -> Self {
        Self {
            program: "gh".to_string(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<()> {
        debug!(program = %self.program, ?args, "invoking host CLI");
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .with_context(|| format!("Failed to run '{}'", self.program))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "'{} {}' exited with {}: {}",
                self.program,
                args.first().unwrap_or(&""),
                output.status,
                stderr.trim()
            );
        }
        Ok(())
    }
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentPublisher for GhCli {
    fn comment_on_pr(&self, pr: &str, body: &str) -> Result<()> {
        self.run(&["pr", "comment", pr, "--body", body])
    }

    fn open_issue(&self, title: &str, body: &str) -> Result<()> {
        self.run(&["issue", "create", "--title", title, "--body", body])
    }
}

/// Post `body` as a PR comment when a PR number is known, otherwise open
/// a new issue under `title`.
pub fn publish_report(
    publisher: &dyn CommentPublisher,
    title: &str,
    body: &str,
    pr: Option<&str>,
) -> Result<()> {
    match pr {
        Some(pr) => publisher.comment_on_pr(pr, body),
        None => publisher.open_issue(title, body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPublisher {
        calls: RefCell<Vec<String>>,
    }

    impl CommentPublisher for RecordingPublisher {
        fn comment_on_pr(&self, pr: &str, body: &str) -> Result<()> {
            self.calls.borrow_mut().push(format!("pr {}: {}", pr, body));
            Ok(())
        }

        fn open_issue(&self, title: &str, body: &str) -> Result<()> {
            self.calls
                .borrow_mut()
                .push(format!("issue {}: {}", title, body));
            Ok(())
        }
    }

    #[test]
    fn publishes_to_pr_when_number_known() {
        let publisher = RecordingPublisher::default();
        publish_report(&publisher, "Report", "body", Some("42")).unwrap();
        assert_eq!(*publisher.calls.borrow(), ["pr 42: body"]);
    }

    #[test]
    fn opens_issue_without_pr_number() {
        let publisher = RecordingPublisher::default();
        publish_report(&publisher, "Report", "body", None).unwrap();
        assert_eq!(*publisher.calls.borrow(), ["issue Report: body"]);
    }

    #[test]
    fn missing_binary_is_an_error() {
        let publisher = GhCli {
            program: "definitely-not-a-real-binary".to_string(),
        };
        assert!(publisher.comment_on_pr("1", "body").is_err());
    }
}
