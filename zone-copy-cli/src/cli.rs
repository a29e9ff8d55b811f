//! Command line definition

use clap::error::ErrorKind;
use clap::Parser;
use zone_copy_core::types::{ExclusionSet, SyncRequest, ZoneMatch};
use zone_copy_provider::ProviderCredentials;

/// Region used when neither `--region` nor `ZONE_COPY_REGION` is given.
pub const DEFAULT_REGION: &str = "eu-west-1";

/// Copy all DNS record sets from one hosted zone to another.
///
/// Record names under `SOURCE_DOMAIN` are rewritten to `DEST_DOMAIN` (defaults
/// to `SOURCE_DOMAIN`). Every record set is written with UPSERT, so running the
/// copy twice is harmless. Apex records of the excluded types are left out.
#[derive(Debug, Parser)]
#[command(name = "zone-copy", version, about, long_about = None)]
pub struct Cli {
    /// Credentials profile used to read the source zone
    pub source_profile: String,

    /// Credentials profile used to write the destination zone
    pub dest_profile: String,

    /// Domain of the source zone (e.g. example.com)
    pub source_domain: String,

    /// Domain of the destination zone; defaults to the source domain
    pub dest_domain: Option<String>,

    /// Don't make any changes, only report what would be copied
    #[arg(long)]
    pub dry: bool,

    /// Comma separated record types to skip at the zone apex
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "SOA,NS",
        value_name = "TYPES"
    )]
    pub exclude: Vec<String>,

    /// Only accept a zone whose name equals the given domain
    #[arg(long)]
    pub exact_zone: bool,

    /// Provider region
    #[arg(long, env = "ZONE_COPY_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Endpoint override (e.g. a LocalStack URL)
    #[arg(long, env = "ZONE_COPY_ENDPOINT_URL", value_name = "URL")]
    pub endpoint_url: Option<String>,

    /// Log level filter; RUST_LOG takes precedence when set
    #[arg(long, env = "ZONE_COPY_LOG_LEVEL", default_value = "info", value_name = "LEVEL")]
    pub log_level: String,
}

impl Cli {
    pub fn exclusions(&self) -> ExclusionSet {
        ExclusionSet::new(self.exclude.iter().map(String::as_str))
    }

    pub fn zone_match(&self) -> ZoneMatch {
        if self.exact_zone {
            ZoneMatch::Exact
        } else {
            ZoneMatch::FirstCandidate
        }
    }

    pub fn sync_request(&self) -> SyncRequest {
        SyncRequest::new(
            &self.source_profile,
            &self.dest_profile,
            &self.source_domain,
            self.dest_domain.clone(),
        )
        .with_exclusions(self.exclusions())
        .with_dry_run(self.dry)
        .with_zone_match(self.zone_match())
    }

    /// Distinct profiles in first-use order.
    pub fn profiles(&self) -> Vec<&str> {
        let mut profiles = vec![self.source_profile.as_str()];
        if self.dest_profile != self.source_profile {
            profiles.push(self.dest_profile.as_str());
        }
        profiles
    }

    pub fn credentials(&self, profile: &str) -> ProviderCredentials {
        ProviderCredentials::Route53 {
            profile: profile.to_string(),
            region: self.region.clone(),
            endpoint_url: self.endpoint_url.clone(),
        }
    }
}

/// Exit code for a failed parse: 0 for `--help`/`--version`, 1 otherwise.
pub fn parse_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("zone-copy").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn three_positionals_with_defaults() {
        let cli = parse(&["old", "new", "example.com"]).unwrap();
        assert_eq!(cli.source_profile, "old");
        assert_eq!(cli.dest_profile, "new");
        assert_eq!(cli.source_domain, "example.com");
        assert!(cli.dest_domain.is_none());
        assert!(!cli.dry);
        assert_eq!(cli.exclusions(), ExclusionSet::default());
        assert_eq!(cli.zone_match(), ZoneMatch::FirstCandidate);

        let request = cli.sync_request();
        assert_eq!(request.dest_domain, "example.com");
        assert!(!request.dry_run);
    }

    #[test]
    fn fourth_positional_is_dest_domain() {
        let cli = parse(&["--dry", "old", "new", "a.com", "b.com"]).unwrap();
        let request = cli.sync_request();
        assert_eq!(request.source_domain, "a.com");
        assert_eq!(request.dest_domain, "b.com");
        assert!(request.dry_run);
    }

    #[test]
    fn too_few_arguments_exit_with_one() {
        let err = parse(&["old", "new"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(parse_exit_code(&err), 1);
    }

    #[test]
    fn unknown_flag_exits_with_one() {
        let err = parse(&["--frobnicate", "old", "new", "a.com"]).unwrap_err();
        assert_eq!(parse_exit_code(&err), 1);
    }

    #[test]
    fn help_and_version_exit_with_zero() {
        let help = parse(&["--help"]).unwrap_err();
        assert_eq!(help.kind(), ErrorKind::DisplayHelp);
        assert_eq!(parse_exit_code(&help), 0);

        let version = parse(&["--version"]).unwrap_err();
        assert_eq!(version.kind(), ErrorKind::DisplayVersion);
        assert_eq!(parse_exit_code(&version), 0);
    }

    #[test]
    fn exclude_list_replaces_default() {
        let cli = parse(&["--exclude=TXT,MX", "old", "new", "a.com"]).unwrap();
        let set = cli.exclusions();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["MX", "TXT"]);
    }

    #[test]
    fn exclude_may_be_repeated() {
        let cli = parse(&["--exclude", "SOA", "--exclude", "NS,TXT", "old", "new", "a.com"]).unwrap();
        assert_eq!(cli.exclusions().to_string(), "NS,SOA,TXT");
    }

    #[test]
    fn empty_exclude_excludes_nothing() {
        let cli = parse(&["--exclude=", "old", "new", "a.com"]).unwrap();
        assert!(cli.exclusions().is_empty());
    }

    #[test]
    fn exact_zone_flag() {
        let cli = parse(&["--exact-zone", "old", "new", "a.com"]).unwrap();
        assert_eq!(cli.sync_request().zone_match, ZoneMatch::Exact);
    }

    #[test]
    fn profiles_are_deduplicated() {
        let same = parse(&["prod", "prod", "a.com", "b.com"]).unwrap();
        assert_eq!(same.profiles(), vec!["prod"]);

        let two = parse(&["old", "new", "a.com"]).unwrap();
        assert_eq!(two.profiles(), vec!["old", "new"]);
    }

    #[test]
    fn credentials_carry_region_and_endpoint() {
        let cli = parse(&[
            "--region",
            "us-east-1",
            "--endpoint-url",
            "http://localhost:4566",
            "old",
            "new",
            "a.com",
        ])
        .unwrap();
        assert_eq!(
            cli.credentials("old"),
            ProviderCredentials::Route53 {
                profile: "old".to_string(),
                region: "us-east-1".to_string(),
                endpoint_url: Some("http://localhost:4566".to_string()),
            }
        );
    }
}
