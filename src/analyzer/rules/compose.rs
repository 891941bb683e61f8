//! Docker Compose rule table.

use crate::analyzer::rules::{LineContext, LineRule};
use crate::analyzer::types::{Category, Severity};

pub static LINE_RULES: &[LineRule] = &[
    LineRule {
        name: "docker-socket",
        severity: Severity::Critical,
        category: Category::Security,
        message: "Docker Socket Mounted.",
        suggestion: "This allows the container to delete all other containers. Avoid if possible.",
        matches: mounts_docker_socket,
    },
    LineRule {
        name: "privileged",
        severity: Severity::Critical,
        category: Category::Security,
        message: "Privileged Mode.",
        suggestion: "Container has full host root capabilities. Extremely dangerous.",
        matches: privileged_mode,
    },
    LineRule {
        name: "latest-tag",
        severity: Severity::High,
        category: Category::Reliability,
        message: "Using :latest tag.",
        suggestion: "Pin specific versions for production stability.",
        matches: latest_tag,
    },
    LineRule {
        name: "inline-secrets",
        severity: Severity::High,
        category: Category::Security,
        message: "Inline Environment Secrets.",
        suggestion: "Use an .env file or Docker Secrets.",
        matches: inline_environment_password,
    },
];

fn mounts_docker_socket(ctx: &LineContext<'_>) -> bool {
    ctx.contains("/var/run/docker.sock")
}

fn privileged_mode(ctx: &LineContext<'_>) -> bool {
    ctx.contains("privileged: true")
}

fn latest_tag(ctx: &LineContext<'_>) -> bool {
    ctx.contains("image:") && ctx.contains(":latest")
}

// Looks only one raw line ahead, clamped to the final line.
fn inline_environment_password(ctx: &LineContext<'_>) -> bool {
    ctx.contains("environment:") && ctx.next_line_or_self().to_uppercase().contains("PASSWORD")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matching_at(src: &[&str], index: usize) -> Vec<&'static str> {
        let lines: Vec<String> = src.iter().map(|s| s.to_string()).collect();
        let ctx = LineContext::at(&lines, index).unwrap();
        LINE_RULES
            .iter()
            .filter(|r| (r.matches)(&ctx))
            .map(|r| r.name)
            .collect()
    }

    #[test]
    fn test_docker_socket() {
        assert_eq!(
            matching_at(&["- /var/run/docker.sock:/var/run/docker.sock"], 0),
            vec!["docker-socket"]
        );
    }

    #[test]
    fn test_privileged() {
        assert_eq!(matching_at(&["privileged: true"], 0), vec!["privileged"]);
        assert!(matching_at(&["privileged: false"], 0).is_empty());
    }

    #[test]
    fn test_latest_tag() {
        assert_eq!(matching_at(&["image: nginx:latest"], 0), vec!["latest-tag"]);
        assert!(matching_at(&["image: nginx:1.25"], 0).is_empty());
        // untagged images are not flagged
        assert!(matching_at(&["image: nginx"], 0).is_empty());
    }

    #[test]
    fn test_inline_secret_looks_at_next_line() {
        let src = ["environment:", "  - POSTGRES_PASSWORD=secret"];
        assert_eq!(matching_at(&src, 0), vec!["inline-secrets"]);

        let src = ["environment:", "  - LOG_LEVEL=debug", "  - password=x"];
        assert!(matching_at(&src, 0).is_empty());
    }

    #[test]
    fn test_inline_secret_on_last_line_uses_same_line() {
        assert!(matching_at(&["services:", "environment:"], 1).is_empty());
        assert_eq!(
            matching_at(&["services:", "environment: {PASSWORD: x}"], 1),
            vec!["inline-secrets"]
        );
    }
}
