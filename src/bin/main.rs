extern crate scanline_tracer as root;

use root::parsing::config::Config;
use root::parsing::load_config;
use root::renderer::{construct_progress, construct_renderer};
use root::selfcheck::{log_self_check, vector_self_check};
use root::shader::SkySphereShader;

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{bail, Context};
use structopt::StructOpt;
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    /// run the vector arithmetic self-check before rendering
    #[structopt(long)]
    pub self_check: bool,
    #[structopt(long, default_value = "warn")]
    pub print_log_level: String,
    #[structopt(long, default_value = "info")]
    pub write_log_level: String,
}

fn parse_log_level(level: &str, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "trace" => LevelFilter::TRACE,
        "error" => LevelFilter::ERROR,
        "debug" => LevelFilter::DEBUG,
        "off" => LevelFilter::OFF,
        _ => default,
    }
}

fn init_logging(opts: &Opt) -> anyhow::Result<()> {
    let term_log_level = parse_log_level(&opts.print_log_level, LevelFilter::WARN);
    let write_log_level = parse_log_level(&opts.write_log_level, LevelFilter::INFO);
    let log_file = File::create("main.log").context("couldn't create main.log")?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(term_log_level),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(log_file))
                .with_filter(write_log_level),
        )
        .init();
    Ok(())
}

fn render_to_file(config: &Config) -> anyhow::Result<()> {
    let (width, height) = (config.resolution.width, config.resolution.height);
    let output = Path::new(&config.output_file);
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("couldn't create {}", parent.display()))?;
    }
    let mut sink = BufWriter::new(
        File::create(output).with_context(|| format!("couldn't create {}", output.display()))?,
    );

    let shader = SkySphereShader::new(config.sphere);
    let renderer = construct_renderer(config);
    let mut progress = construct_progress(config.progress);

    let now = Instant::now();
    let profile = renderer
        .render(
            width,
            height,
            config.camera,
            &shader,
            &mut sink,
            progress.as_mut(),
        )
        .with_context(|| format!("rendering {} failed", output.display()))?;
    let elapsed = now.elapsed().as_secs_f32();

    profile.pretty_print(elapsed, renderer.threads());
    info!("wrote {}", output.display());
    Ok(())
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let config = load_config(&opts.config_file)?;
    info!(
        "resolution {}x{}, renderer {:?}, vertical sampling {:?}",
        config.resolution.width,
        config.resolution.height,
        config.renderer,
        config.camera.vertical_sampling
    );

    if opts.self_check && !log_self_check(&vector_self_check()) {
        bail!("vector self-check failed");
    }

    if !opts.dry_run {
        render_to_file(&config)?;
    }
    Ok(())
}

fn main() {
    let opts = Opt::from_args();
    if let Err(e) = init_logging(&opts) {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(opts) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
