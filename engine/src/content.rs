//! Static page copy.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub blurb: &'static str,
    /// Metric the card's counter climbs to.
    pub metric: u32,
    pub metric_suffix: &'static str,
    pub metric_label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

pub const HERO_TITLE: &str = "Ship to production before your coffee cools";
pub const HERO_SUBTITLE: &str =
    "Push a branch, get a global deployment. Previews, rollbacks and TLS included.";
pub const HERO_METRIC_LABEL: &str = "average deploy time";
pub const DEPLOYING_LABEL: &str = "Deploying...";
pub const DEPLOYED_LABEL: &str = "Deployed";

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Global edge network",
        blurb: "Static assets and functions served from the region closest to every visitor.",
        metric: 275,
        metric_suffix: "+",
        metric_label: "edge locations",
    },
    Feature {
        title: "Preview every pull request",
        blurb: "Each branch gets its own URL so reviewers click instead of checking out.",
        metric: 100,
        metric_suffix: "%",
        metric_label: "of pull requests previewed",
    },
    Feature {
        title: "Instant rollbacks",
        blurb: "Every deployment is immutable. Promote any previous build in one command.",
        metric: 3,
        metric_suffix: "s",
        metric_label: "to roll back",
    },
    Feature {
        title: "Integrations",
        blurb: "Connect your git host, observability stack and chat without glue scripts.",
        metric: 120,
        metric_suffix: "+",
        metric_label: "integrations",
    },
];

pub const STEPS: [Step; 3] = [
    Step {
        title: "Connect your repository",
        description: "Link a GitHub, GitLab or Bitbucket repository. We detect the framework.",
        code: "$ reveal link github.com/acme/storefront\n✓ Detected Next.js\n✓ Linked acme/storefront",
    },
    Step {
        title: "Configure the build",
        description: "Defaults work for most projects. Override the command or output directory.",
        code: "[build]\ncommand = \"npm run build\"\noutput = \".next\"",
    },
    Step {
        title: "Push to deploy",
        description: "Every push builds, previews and, on the main branch, ships to production.",
        code: "$ git push origin main\n→ Building...\n✓ Deployed to https://storefront.acme.dev",
    },
];
