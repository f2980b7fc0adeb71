//! Command orchestration
//!
//! Wires configuration, the git repository, the registry client and the
//! reporter into one call per subcommand. Kept free of clap parsing and of
//! process exit handling so it can be driven from tests.

use crate::cli::{Cli, Command};
use crate::config::{load_config, Config};
use crate::error::Result;
use crate::gate::is_latest_published;
use crate::git::Git2Repository;
use crate::next_version::{prepare_next_version, PrepareOptions};
use crate::registry::{HttpClient, PackageRegistry, ReqwestClient};
use crate::resolver::resolve_dir;
use crate::ui::Reporter;

/// Load configuration for a parsed command line.
///
/// Registry URL precedence: `--registry-url`, then `PUBVER_REGISTRY_URL`,
/// then the config file, then the built-in default.
pub fn config_for(cli: &Cli) -> Result<Config> {
    Ok(load_config(cli.config.as_deref())?.with_registry_override(cli.registry_url.as_deref()))
}

/// Run a parsed command line against the real registry
pub fn run(cli: &Cli, reporter: &dyn Reporter) -> Result<()> {
    let config = config_for(cli)?;
    let client = ReqwestClient::new(config.registry.timeout(), &config.registry.user_agent)?;
    run_command(&cli.command, &config, client, reporter)
}

/// Run one subcommand with an explicit HTTP client
pub fn run_command<C: HttpClient>(
    command: &Command,
    config: &Config,
    client: C,
    reporter: &dyn Reporter,
) -> Result<()> {
    match command {
        Command::CheckVersion(args) => {
            let version = resolve_dir(&args.input, config)?;
            reporter.success(&format!(
                "Version {} is consistent across manifest, changelog and tag",
                version
            ));
        }
        Command::IsLatestPublished(args) => {
            let repo = Git2Repository::open(&args.input)?;
            let registry = PackageRegistry::new(client, &config.registry.url);
            is_latest_published(&args.input, config, &repo, &registry, reporter)?;
            reporter.success("Local version is not behind the published version");
        }
        Command::PrepareNextVersion(args) => {
            let registry = PackageRegistry::new(client, &config.registry.url);
            let options = PrepareOptions {
                dry_run: args.dry_run,
                update_changelog: args.update_changelog,
            };
            prepare_next_version(
                &args.input.input,
                args.version_increment,
                config,
                &registry,
                reporter,
                options,
            )?;
        }
    }
    Ok(())
}
