use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anchored::LayoutHost as _;
use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "anchored", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Place one content rect next to one anchor rect.
    Place(PlaceArgs),
    /// Run every dropdown declared in a scene document and print the written styles.
    Scene(SceneArgs),
}

#[derive(Parser, Debug)]
struct PlaceArgs {
    /// Input placement request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Css,
}

fn default_placement() -> String {
    "bottom".to_string()
}

#[derive(serde::Deserialize, Debug)]
struct PlaceRequest {
    anchor: anchored::DomRect,
    content: anchored::DomRect,
    viewport: anchored::DomRect,
    #[serde(default = "default_placement")]
    placement: String,
    #[serde(default)]
    config: anchored::PlacementConfig,
}

#[derive(serde::Deserialize, Debug)]
struct Scene {
    document: anchored::NodeSpec,
    dropdowns: Vec<SceneDropdown>,
}

#[derive(serde::Deserialize, Debug)]
struct SceneDropdown {
    anchor: String,
    content: String,
    #[serde(default = "default_placement")]
    placement: String,
    #[serde(default)]
    config: anchored::PlacementConfig,
    #[serde(default)]
    root: Option<String>,
    #[serde(default)]
    viewport: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Place(args) => cmd_place(args),
        Command::Scene(args) => cmd_scene(args),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    let r = BufReader::new(f);
    let value = serde_json::from_reader(r).with_context(|| format!("parse {what} JSON"))?;
    Ok(value)
}

fn cmd_place(args: PlaceArgs) -> anyhow::Result<()> {
    let req: PlaceRequest = read_json(&args.in_path, "placement request")?;
    for (name, r) in [
        ("anchor", &req.anchor),
        ("content", &req.content),
        ("viewport", &req.viewport),
    ] {
        r.validate().with_context(|| format!("invalid {name} rect"))?;
    }
    req.config.validate()?;

    let outcome = anchored::compute_placement(
        req.anchor.to_rect(),
        req.content.to_rect(),
        req.viewport.to_rect(),
        anchored::Placement::lenient(&req.placement),
        &req.config,
    );

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        OutputFormat::Css => {
            let mut style = anchored::StyleRecord::absolute(outcome.coords);
            if req.config.keep_anchor_width {
                style = style.with_width(req.anchor.width);
            }
            println!("{style}");
        }
    }
    Ok(())
}

fn cmd_scene(args: SceneArgs) -> anyhow::Result<()> {
    let scene: Scene = read_json(&args.in_path, "scene")?;
    let mut doc = anchored::MemoryDocument::from_spec(&scene.document)?;

    for (idx, d) in scene.dropdowns.iter().enumerate() {
        let options = anchored::DropdownOptions {
            config: d.config,
            root: d.root.as_deref().map(anchored::RootRef::from),
            viewport: d.viewport.as_deref().and_then(|s| doc.query_selector(s)),
        };
        let mut binder = anchored::DropdownBinder::new(
            doc.query_selector(&d.anchor),
            doc.query_selector(&d.content),
            anchored::Placement::lenient(&d.placement),
            options,
        )
        .with_context(|| format!("dropdown #{idx}"))?;

        match binder.update(&mut doc) {
            anchored::Pass::Applied(pass) => {
                println!("{} [{}] {}", d.content, pass.outcome.placement, pass.style);
            }
            anchored::Pass::Skipped(reason) => println!("{} skipped: {reason}", d.content),
            anchored::Pass::Unchanged => {}
        }
    }
    Ok(())
}
