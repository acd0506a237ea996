use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use svgeom::geom::{arc_endpoint_to_center, line_intersect, segment_intersect};
use svgeom::{AnalyticalPath, PathCommand, RoundCfg};
use tracing_subscriber::fmt::SubscriberBuilder;

mod convert;
mod output;

#[derive(Parser)]
#[command(name = "svgeom-cli")]
#[command(about = "Compact SVG path data and query the 2D geometry kernels", version)]
struct Cmd {
    /// Decimal places kept in path data
    #[arg(long, global = true, default_value_t = 4)]
    places: u32,

    /// Print numbers as they are, without rounding
    #[arg(long, global = true)]
    no_round: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Re-emit SVG path data in compacted form
    Compact {
        /// Path data, e.g. "M 0,0 L 10,0"
        #[arg(long, allow_hyphen_values = true, required_unless_present = "input")]
        d: Option<String>,
        /// File holding the path data
        #[arg(long, conflicts_with = "d")]
        input: Option<PathBuf>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Serialize a JSON array of path commands
    Build {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Lower "x,y x,y ..." to path data
    Polyline {
        #[arg(long, allow_hyphen_values = true)]
        points: String,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Intersect the lines (or segments) a and b, each given as "x,y x,y"
    Intersect {
        #[arg(long, allow_hyphen_values = true)]
        a: String,
        #[arg(long, allow_hyphen_values = true)]
        b: String,
        /// Only report hits inside both segments
        #[arg(long)]
        segment: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Center parameterization of an SVG elliptical arc
    ArcCenter {
        #[arg(long, allow_hyphen_values = true)]
        from: String,
        #[arg(long, allow_hyphen_values = true)]
        to: String,
        #[arg(long)]
        rx: f64,
        #[arg(long)]
        ry: f64,
        #[arg(long)]
        large: bool,
        #[arg(long)]
        sweep: bool,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        rotation: f64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

impl Action {
    fn out(&self) -> Option<&Path> {
        match self {
            Action::Compact { out, .. }
            | Action::Build { out, .. }
            | Action::Polyline { out, .. }
            | Action::Intersect { out, .. }
            | Action::ArcCenter { out, .. } => out.as_deref(),
        }
    }
}

impl Cmd {
    fn round_cfg(&self) -> RoundCfg {
        if self.no_round {
            RoundCfg::disabled()
        } else {
            RoundCfg::places(self.places)
        }
    }
}

#[derive(Serialize)]
struct LineHit {
    t_a: f64,
    t_b: f64,
    point: [f64; 2],
}

#[derive(Serialize)]
struct ArcReport {
    center: [f64; 2],
    rx: f64,
    ry: f64,
    start_deg: f64,
    sweep_deg: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let text = run(&cmd)?;
    output::emit(&text, cmd.action.out())
}

fn run(cmd: &Cmd) -> Result<String> {
    let cfg = cmd.round_cfg();
    match &cmd.action {
        Action::Compact { d, input, .. } => compact(d.as_deref(), input.as_deref(), cfg),
        Action::Build { input, .. } => build(input, cfg),
        Action::Polyline { points, .. } => polyline(points, cfg),
        Action::Intersect {
            a, b, segment, ..
        } => intersect(a, b, *segment),
        Action::ArcCenter {
            from,
            to,
            rx,
            ry,
            large,
            sweep,
            rotation,
            ..
        } => arc_center(from, to, *rx, *ry, *large, *sweep, *rotation),
    }
}

fn compact(d: Option<&str>, input: Option<&Path>, cfg: RoundCfg) -> Result<String> {
    let data = match (d, input) {
        (Some(d), _) => d.to_string(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        (None, None) => anyhow::bail!("either --d or --input is required"),
    };
    let path = convert::path_from_data(data.trim(), cfg)?;
    tracing::info!(commands = path.len(), bytes_in = data.len(), bytes_out = path.d().len(), "compact");
    Ok(path.d().to_string())
}

fn build(input: &Path, cfg: RoundCfg) -> Result<String> {
    let raw = fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let cmds: Vec<PathCommand> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing path commands from {}", input.display()))?;
    let path = convert::path_from_commands(cmds, cfg)?;
    tracing::info!(commands = path.len(), "build");
    Ok(path.d().to_string())
}

fn polyline(points: &str, cfg: RoundCfg) -> Result<String> {
    let pts = convert::parse_points(points)?;
    let mut path = AnalyticalPath::with_round_cfg(cfg);
    path.add_polyline(&pts);
    tracing::info!(points = pts.len(), commands = path.len(), "polyline");
    Ok(path.d().to_string())
}

fn intersect(a: &str, b: &str, segment: bool) -> Result<String> {
    let (a1, a2) = convert::parse_pair(a).context("parsing --a")?;
    let (b1, b2) = convert::parse_pair(b).context("parsing --b")?;
    let json = if segment {
        let hit = segment_intersect(a1, a2, b1, b2).map(|p| [p.x, p.y]);
        serde_json::to_string(&hit)?
    } else {
        let hit = line_intersect(a1, a2, b1, b2).map(|h| LineHit {
            t_a: h.t_a,
            t_b: h.t_b,
            point: [h.point.x, h.point.y],
        });
        serde_json::to_string(&hit)?
    };
    tracing::info!(segment, "intersect");
    Ok(json)
}

fn arc_center(
    from: &str,
    to: &str,
    rx: f64,
    ry: f64,
    large: bool,
    sweep: bool,
    rotation: f64,
) -> Result<String> {
    let p0 = convert::parse_point(from).context("parsing --from")?;
    let p1 = convert::parse_point(to).context("parsing --to")?;
    let report = arc_endpoint_to_center(p0, p1, rx, ry, large, sweep, rotation).map(|arc| {
        ArcReport {
            center: [arc.center.x, arc.center.y],
            rx: arc.rx,
            ry: arc.ry,
            start_deg: arc.start_deg,
            sweep_deg: arc.sweep_deg,
        }
    });
    tracing::info!(large, sweep, rotation, "arc-center");
    Ok(serde_json::to_string(&report)?)
}
