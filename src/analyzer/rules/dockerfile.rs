//! Dockerfile rule table.
//!
//! Matching is deliberately substring based: `USER` anywhere in an
//! uppercased line counts as a privilege drop, and so on. False positives
//! such as a `RUN useradd` line satisfying the USER check are accepted.

use crate::analyzer::rules::{FileRule, LineContext, LineRule};
use crate::analyzer::types::{Category, Severity};

/// Index of the privilege-drop rule in [`FILE_RULES`].
pub const PRIVILEGE_DROP: usize = 0;
/// Index of the healthcheck rule in [`FILE_RULES`].
pub const HEALTHCHECK: usize = 1;

pub static LINE_RULES: &[LineRule] = &[
    LineRule {
        name: "sudo",
        severity: Severity::Critical,
        category: Category::Security,
        message: "Sudo used in build.",
        suggestion: "Remove 'sudo'. Build as root, drop privileges later.",
        matches: uses_sudo,
    },
    LineRule {
        name: "apk-cache",
        severity: Severity::Medium,
        category: Category::Performance,
        message: "APK Cache not disabled.",
        suggestion: "Use 'apk add --no-cache ...' to reduce image size.",
        matches: apk_without_no_cache,
    },
    LineRule {
        name: "apt-lists",
        severity: Severity::Medium,
        category: Category::Performance,
        message: "APT Lists not cleaned.",
        suggestion: "Add '&& rm -rf /var/lib/apt/lists/*' to the same RUN command.",
        matches: apt_without_cleanup,
    },
    LineRule {
        name: "pip-cache",
        severity: Severity::Low,
        category: Category::Performance,
        message: "Pip cache stored.",
        suggestion: "Use 'pip install --no-cache-dir' to save space.",
        matches: pip_without_no_cache_dir,
    },
    LineRule {
        name: "ssh-port",
        severity: Severity::Critical,
        category: Category::Security,
        message: "SSH Port Exposed.",
        suggestion: "Do not run SSH in containers. Use 'docker exec'.",
        matches: exposes_ssh,
    },
    LineRule {
        name: "hardcoded-secret",
        severity: Severity::Critical,
        category: Category::Security,
        message: "Potential Hardcoded Secret.",
        suggestion: "Use Docker Secrets or run-time ENVs.",
        matches: hardcoded_secret,
    },
];

pub static FILE_RULES: &[FileRule] = &[
    FileRule {
        name: "running-as-root",
        severity: Severity::High,
        category: Category::Security,
        message: "Running as Root.",
        suggestion: "Add 'USER <uid>' instruction.",
        present: drops_privileges,
    },
    FileRule {
        name: "no-healthcheck",
        severity: Severity::Low,
        category: Category::BestPractice,
        message: "No Healthcheck.",
        suggestion: "Add HEALTHCHECK instruction for auto-recovery.",
        present: declares_healthcheck,
    },
];

const SECRET_MARKERS: [&str; 3] = ["AWS_ACCESS_KEY", "SECRET_KEY", "PASSWORD="];

fn drops_privileges(ctx: &LineContext<'_>) -> bool {
    ctx.upper_contains("USER")
}

fn declares_healthcheck(ctx: &LineContext<'_>) -> bool {
    ctx.upper_contains("HEALTHCHECK")
}

fn uses_sudo(ctx: &LineContext<'_>) -> bool {
    ctx.content.to_lowercase().contains("sudo")
}

fn apk_without_no_cache(ctx: &LineContext<'_>) -> bool {
    ctx.contains("apk add") && !ctx.contains("--no-cache")
}

fn apt_without_cleanup(ctx: &LineContext<'_>) -> bool {
    (ctx.contains("apt-get install") || ctx.contains("apt install"))
        && !ctx.contains("rm -rf /var/lib/apt/lists")
}

fn pip_without_no_cache_dir(ctx: &LineContext<'_>) -> bool {
    ctx.contains("pip install") && !ctx.contains("--no-cache-dir")
}

fn exposes_ssh(ctx: &LineContext<'_>) -> bool {
    ctx.upper_contains("EXPOSE 22")
}

// Same-line check only: ARG/ENV pairs split across lines are not followed.
fn hardcoded_secret(ctx: &LineContext<'_>) -> bool {
    SECRET_MARKERS.iter().any(|m| ctx.upper_contains(m))
        && !ctx.contains("ARG")
        && ctx.contains("ENV")
}
