// src/main.rs

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use pid_plotter::constants::{
    PLOT_HEIGHT, PLOT_HEIGHT_MIN, PLOT_SIZE_MAX, PLOT_WIDTH, PLOT_WIDTH_MIN,
};
use pid_plotter::data_input::log_parser::read_records;
use pid_plotter::data_input::transform::transform;
use pid_plotter::error::PlotterError;
use pid_plotter::plot_framework::RenderOptions;
use pid_plotter::plot_functions::plot_pid_trace::plot_pid_trace;

#[derive(Parser, Debug)]
#[command(
    name = "pid_plotter",
    author,
    version,
    about = "Renders a PID controller CSV log as a dual-axis time-series chart",
    long_about = None
)]
struct CliArgs {
    /// Log with one `time,setpoint,measurement,output,p,i,d` record per line
    #[arg(value_name = "file.csv")]
    input: PathBuf,

    /// Image to write (.png or .svg); defaults to `<stem>_PID_trace.png`
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Image width in pixels
    #[arg(
        long,
        default_value_t = PLOT_WIDTH,
        value_parser = clap::value_parser!(u32).range(PLOT_WIDTH_MIN as i64..=PLOT_SIZE_MAX as i64)
    )]
    width: u32,

    /// Image height in pixels
    #[arg(
        long,
        default_value_t = PLOT_HEIGHT,
        value_parser = clap::value_parser!(u32).range(PLOT_HEIGHT_MIN as i64..=PLOT_SIZE_MAX as i64)
    )]
    height: u32,
}

fn main() -> ExitCode {
    // The bare usage line and status 1 are part of the interface, so this runs before clap.
    if env::args_os().len() < 2 {
        println!("{}", PlotterError::Usage);
        return ExitCode::from(PlotterError::Usage.exit_code());
    }
    let args = CliArgs::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(args: &CliArgs) -> Result<(), PlotterError> {
    let records = read_records(&args.input)?;
    let columns = transform(&records)?;

    let mut options = RenderOptions::for_input(&args.input).with_size(args.width, args.height);
    if let Some(output) = &args.output {
        options = options.with_output(output.clone());
    }
    let written = plot_pid_trace(&columns, &options)?;
    info!("Done: {}", written.display());
    Ok(())
}
