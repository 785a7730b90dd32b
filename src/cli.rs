use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::{OutputFormat, RenderOptions, SpecVersion};
use crate::config::{ComponentConfig, ConfigFile, ManufacturerConfig};
use crate::sbom_generation::domain::{Component, ComponentType, Manufacturer, TargetDeclaration};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// Generates a CycloneDX BOM for a CocoaPods project.
///
/// Component metadata is only generated if the component's name, version and
/// type are provided using --name, --version and --type.
#[derive(Parser, Debug, Default)]
#[command(name = "cyclonedx-cocoapods")]
#[command(about = "Generate CycloneDX SBOMs for CocoaPods projects", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Args {
    /// Show verbose debugging output
    #[arg(long)]
    pub verbose: bool,

    /// Path to CocoaPods project directory (default: current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Path to output the BOM file to (default: "bom.xml" or "bom.json")
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: xml or json (default: xml)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Version of the generated BOM (default: 1)
    #[arg(short, long = "bom-version", allow_negative_numbers = true)]
    pub bom_version: Option<i64>,

    /// CycloneDX schema version: 1.4, 1.5 or 1.6 (default: 1.6)
    #[arg(long = "spec-version")]
    pub spec_version: Option<String>,

    /// Eliminate targets whose name contains the word "test"
    #[arg(short = 'x', long = "exclude-test-targets")]
    pub exclude_test_targets: bool,

    /// Trim author, publisher, and purl to <LENGTH> characters; this may
    /// cause data loss but can improve compatibility with other systems
    #[arg(
        short = 's',
        long = "shortened-strings",
        value_name = "LENGTH",
        allow_negative_numbers = true
    )]
    pub shortened_strings: Option<i64>,

    /// (If specified version and type are also required) Name of the
    /// component for which the BOM is generated
    #[arg(short, long, help_heading = "Component Metadata")]
    pub name: Option<String>,

    /// Version of the component for which the BOM is generated
    #[arg(short, long, help_heading = "Component Metadata")]
    pub version: Option<String>,

    /// Type of the component for which the BOM is generated
    #[arg(short = 't', long = "type", help_heading = "Component Metadata")]
    pub component_type: Option<String>,

    /// Group of the component for which the BOM is generated
    #[arg(short, long, help_heading = "Component Metadata")]
    pub group: Option<String>,

    /// The version control system URL of the component
    #[arg(long = "source", value_name = "SOURCE_URL", help_heading = "Component Metadata")]
    pub source: Option<String>,

    /// The build URL of the component
    #[arg(long = "build", value_name = "BUILD_URL", help_heading = "Component Metadata")]
    pub build: Option<String>,

    /// Name of the manufacturer
    #[arg(long = "manufacturer-name", help_heading = "Manufacturer Metadata")]
    pub manufacturer_name: Option<String>,

    /// URL of the manufacturer
    #[arg(long = "manufacturer-url", help_heading = "Manufacturer Metadata")]
    pub manufacturer_url: Option<String>,

    /// Name of the manufacturer contact
    #[arg(long = "manufacturer-contact-name", help_heading = "Manufacturer Metadata")]
    pub manufacturer_contact_name: Option<String>,

    /// Email of the manufacturer contact
    #[arg(long = "manufacturer-email", help_heading = "Manufacturer Metadata")]
    pub manufacturer_email: Option<String>,

    /// Phone number of the manufacturer contact
    #[arg(long = "manufacturer-phone", help_heading = "Manufacturer Metadata")]
    pub manufacturer_phone: Option<String>,

    /// Additional directory to search for <Pod>.podspec.json files
    /// Can be specified multiple times
    #[arg(long = "podspec-dir", value_name = "DIR")]
    pub podspec_dirs: Vec<PathBuf>,

    /// Path to a configuration file (default: cyclonedx-cocoapods.config.yml in the project)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Fully resolved settings of one run
#[derive(Debug)]
pub struct Settings {
    pub project_path: PathBuf,
    pub output: PathBuf,
    pub render: RenderOptions,
    pub exclude_test_targets: bool,
    pub targets: Option<Vec<TargetDeclaration>>,
    pub component: Option<Component>,
    pub manufacturer: Option<Manufacturer>,
    pub podspec_dirs: Vec<PathBuf>,
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn project_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Merges command-line values over `config` and validates the result.
    ///
    /// # Errors
    /// `InvalidArgument` for values that cannot be used, including a
    /// component name given without a version and type.
    pub fn resolve(self, config: Option<ConfigFile>) -> Result<Settings> {
        let config = config.unwrap_or_default();
        let project_path = self.project_path();
        let targets = config.target_declarations();

        let format = match self.format.as_deref().or(config.format.as_deref()) {
            Some(raw) => raw
                .parse::<OutputFormat>()
                .map_err(|reason| SbomError::invalid_argument("output format", raw, reason))?,
            None => OutputFormat::default(),
        };
        let spec_version = match self.spec_version.as_deref().or(config.spec_version.as_deref()) {
            Some(raw) => raw
                .parse::<SpecVersion>()
                .map_err(|reason| SbomError::invalid_argument("spec version", raw, reason))?,
            None => SpecVersion::default(),
        };
        let render = RenderOptions::new(
            self.bom_version.or(config.bom_version).unwrap_or(1),
            self.shortened_strings.or(config.shortened_strings).unwrap_or(0),
            format,
        )?
        .with_spec_version(spec_version);

        let component = self.resolve_component(config.component.unwrap_or_default())?;
        let manufacturer = self.resolve_manufacturer(config.manufacturer.unwrap_or_default())?;

        let mut podspec_dirs: Vec<PathBuf> = config
            .podspec_dirs
            .iter()
            .flatten()
            .map(|dir| project_path.join(dir))
            .collect();
        podspec_dirs.extend(self.podspec_dirs.iter().cloned());

        Ok(Settings {
            output: self
                .output
                .or(config.output)
                .unwrap_or_else(|| PathBuf::from(format.default_file_name())),
            render,
            exclude_test_targets: self.exclude_test_targets
                || config.exclude_test_targets.unwrap_or(false),
            targets,
            component,
            manufacturer,
            podspec_dirs,
            verbose: self.verbose,
            project_path,
        })
    }

    fn resolve_component(&self, config: ComponentConfig) -> Result<Option<Component>> {
        let Some(name) = self.name.clone().or(config.name) else {
            return Ok(None);
        };

        let version = self.version.clone().or(config.version);
        let component_type = self.component_type.clone().or(config.component_type);
        let (Some(version), Some(component_type)) = (version, component_type) else {
            return Err(SbomError::invalid_argument(
                "component metadata",
                name,
                "You must also specify --version and --type if --name is provided",
            )
            .into());
        };

        let component_type: ComponentType = component_type.parse()?;
        let component = Component::new(
            self.group.clone().or(config.group),
            name,
            version,
            component_type,
        )?
        .with_references(
            self.build.clone().or(config.build),
            self.source.clone().or(config.source),
        );
        Ok(Some(component))
    }

    fn resolve_manufacturer(&self, config: ManufacturerConfig) -> Result<Option<Manufacturer>> {
        let name = self.manufacturer_name.clone().or(config.name);
        let url = self.manufacturer_url.clone().or(config.url);
        let contact_name = self.manufacturer_contact_name.clone().or(config.contact_name);
        let email = self.manufacturer_email.clone().or(config.email);
        let phone = self.manufacturer_phone.clone().or(config.phone);

        if [&name, &url, &contact_name, &email, &phone]
            .iter()
            .all(|field| field.is_none())
        {
            return Ok(None);
        }
        Manufacturer::new(name, url, contact_name, email, phone).map(Some)
    }
}
