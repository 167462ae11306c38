use std::path::PathBuf;

use structopt::StructOpt;

use mirrorbox::config::RenderConfig;

#[derive(Debug, StructOpt)]
#[structopt(name = "mirrorbox", rename_all = "kebab-case")]
struct Opt {
    /// TOML file with size, max_depth and light
    #[structopt(long, parse(from_os_str))]
    pub config: Option<PathBuf>,
    /// Render one frame to this image file instead of opening a window
    #[structopt(short, long, parse(from_os_str))]
    pub output: Option<PathBuf>,
    #[structopt(long, allow_hyphen_values = true)]
    pub light_x: Option<f64>,
    #[structopt(long, allow_hyphen_values = true)]
    pub light_y: Option<f64>,
    #[structopt(long, allow_hyphen_values = true)]
    pub light_z: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts = Opt::from_args();

    let mut config = match &opts.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    for (axis, value) in [opts.light_x, opts.light_y, opts.light_z].iter().enumerate() {
        if let Some(v) = value {
            config.light[axis] = *v;
        }
    }
    log::debug!("{:?}", config);

    match &opts.output {
        Some(path) => mirrorbox::render_to_file(&config, path),
        None => pollster::block_on(mirrorbox::run(config)),
    }
}
