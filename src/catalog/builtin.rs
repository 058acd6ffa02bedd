//! Built-in command catalog shipped with the toolkit

use super::{Command, CommandCatalog, CommandType, DEFAULT_CATEGORY};

/// (name, category, description) for every active command
const ACTIVE: &[(&str, &str, &str)] = &[
    ("xarchitecture", "planning", "System architecture design and analysis"),
    ("xconfig", "configuration", "Configuration management and setup"),
    ("xdebug", "development", "Advanced debugging and troubleshooting"),
    ("xdocs", "documentation", "Documentation generation and management"),
    ("xgit", "development", "Automated Git workflow and version control"),
    ("xpipeline", "deployment", "CI/CD pipeline management"),
    ("xquality", "development", "Code quality analysis and improvement"),
    ("xrefactor", "development", "Code refactoring automation"),
    ("xrelease", "deployment", "Release management and versioning"),
    ("xsecurity", "security", "Security scanning and vulnerability detection"),
    ("xspec", "planning", "Specification generation and validation"),
    ("xtdd", "development", "Test-driven development automation"),
    ("xtest", "development", "Testing automation and management"),
];

/// (name, category, description) for every experimental command.
/// An empty description is derived from the name.
const EXPERIMENTAL: &[(&str, &str, &str)] = &[
    ("xact", DEFAULT_CATEGORY, "GitHub Actions automation"),
    ("xanalytics", DEFAULT_CATEGORY, "Analytics and metrics collection"),
    ("xapi", DEFAULT_CATEGORY, "API development and testing"),
    ("xaws", DEFAULT_CATEGORY, "AWS cloud integration"),
    ("xcicd", DEFAULT_CATEGORY, "Advanced CI/CD workflows"),
    ("xcompliance", "security", "Compliance checking and reporting"),
    ("xconstraints", DEFAULT_CATEGORY, ""),
    ("xcoverage", DEFAULT_CATEGORY, ""),
    ("xdata", DEFAULT_CATEGORY, ""),
    ("xdependencies", DEFAULT_CATEGORY, ""),
    ("xdesign", DEFAULT_CATEGORY, ""),
    ("xdiagram", DEFAULT_CATEGORY, ""),
    ("xdockerfile", DEFAULT_CATEGORY, ""),
    ("xenv", DEFAULT_CATEGORY, ""),
    ("xerrors", DEFAULT_CATEGORY, ""),
    ("xfeature", DEFAULT_CATEGORY, ""),
    ("xfeedback", DEFAULT_CATEGORY, ""),
    ("xhelp", DEFAULT_CATEGORY, ""),
    ("xideas", DEFAULT_CATEGORY, ""),
    ("xinfra", "deployment", "Infrastructure as Code management"),
    ("xintegration", DEFAULT_CATEGORY, ""),
    ("xlicense", DEFAULT_CATEGORY, ""),
    ("xlog", DEFAULT_CATEGORY, ""),
    ("xmetrics", DEFAULT_CATEGORY, ""),
    ("xmigration", DEFAULT_CATEGORY, ""),
    ("xmonitoring", DEFAULT_CATEGORY, "Application monitoring setup"),
    ("xnew", DEFAULT_CATEGORY, ""),
    ("xoptimize", DEFAULT_CATEGORY, ""),
    ("xpatterns", DEFAULT_CATEGORY, ""),
    ("xperformance", DEFAULT_CATEGORY, "Performance optimization"),
    ("xplanning", "planning", "Project planning and management"),
    ("xpolicy", "security", ""),
    ("xproduct", DEFAULT_CATEGORY, ""),
    ("xproject", DEFAULT_CATEGORY, ""),
    ("xred", DEFAULT_CATEGORY, ""),
    ("xrequirements", DEFAULT_CATEGORY, ""),
    ("xresearch", DEFAULT_CATEGORY, ""),
    ("xreview", DEFAULT_CATEGORY, ""),
    ("xrisk", DEFAULT_CATEGORY, "Risk assessment and mitigation"),
    ("xscale", DEFAULT_CATEGORY, ""),
    ("xstatus", DEFAULT_CATEGORY, ""),
    ("xtodo", DEFAULT_CATEGORY, ""),
    ("xupgrade", DEFAULT_CATEGORY, ""),
    ("xvalidation", DEFAULT_CATEGORY, ""),
];

/// Catalog of the commands bundled with the toolkit
#[derive(Debug, Clone)]
pub struct BuiltinCatalog {
    commands: Vec<Command>,
}

impl BuiltinCatalog {
    pub fn new() -> Self {
        let active = ACTIVE
            .iter()
            .map(|&(name, category, description)| {
                build_command(name, CommandType::Active, category, description)
            });
        let experimental = EXPERIMENTAL
            .iter()
            .map(|&(name, category, description)| {
                build_command(name, CommandType::Experimental, category, description)
            });

        Self {
            commands: active.chain(experimental).collect(),
        }
    }

    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }
}

impl Default for BuiltinCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandCatalog for BuiltinCatalog {
    fn commands(&self) -> &[Command] {
        &self.commands
    }
}

fn build_command(
    name: &str,
    command_type: CommandType,
    category: &str,
    description: &str,
) -> Command {
    let description = if description.is_empty() {
        derived_description(name)
    } else {
        description.to_string()
    };

    Command {
        name: name.to_string(),
        command_type,
        category: category.to_string(),
        content: render_content(name, command_type, category, &description),
        description,
    }
}

/// "xtodo" -> "Todo automation and management"
fn derived_description(name: &str) -> String {
    let stem = name.strip_prefix('x').unwrap_or(name);
    let mut chars = stem.chars();
    let title = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    format!("{title} automation and management")
}

fn render_content(
    name: &str,
    command_type: CommandType,
    category: &str,
    description: &str,
) -> String {
    let mut content = format!(
        "# {} Command\n\ndescription: {description}\ncategory: {category}\nstatus: {command_type}\n\n",
        name.to_uppercase()
    );
    if command_type == CommandType::Experimental {
        content.push_str("**EXPERIMENTAL**: This command may change in future versions.\n\n");
    }
    content.push_str(&format!("## Usage\n\n```\n/{name} [options]\n```\n\n"));
    content.push_str(
        "## Parameters\n\n\
         - `--help`: Display help information\n\
         - `--verbose`: Enable verbose output\n\
         - `--dry-run`: Preview changes without applying\n\n",
    );
    content.push_str(&format!(
        "## Implementation\n\nThis command provides {category} automation.\n"
    ));
    content
}
