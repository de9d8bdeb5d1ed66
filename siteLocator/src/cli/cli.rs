use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Greedy facility placement on a point grid", long_about = None)]
pub struct Args {
    #[arg(short, long, help = "Points file (.csv with x,y header or .json); repeatable")]
    input: Vec<String>,

    #[arg(long, help = "Generate this many random valid point sets instead of reading input")]
    random: Option<usize>,

    #[arg(long, help = "Random seed for reproducible point sets")]
    seed: Option<u64>,

    #[arg(short, long, help = "JSON placement config; flags below override it")]
    config: Option<String>,

    #[arg(short = 'n', long, help = "Number of points each set must contain [default: 10]")]
    expected_count: Option<usize>,

    #[arg(short = 'k', long, help = "Number of facilities to place [default: 2]")]
    facility_count: Option<usize>,

    #[arg(long, default_value_t = false)]
    sequential: bool,

    #[arg(long, help = "Print an ASCII scatter plot of each result", default_value_t = false)]
    plot: bool,

    #[arg(long, help = "Write an SVG scatter plot of the first result to this file")]
    svg: Option<String>,

    #[arg(short, long, help = "Directory for JSON and CSV reports")]
    output_dir: Option<String>,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,

    #[arg(long, default_value_t = false)]
    debug_logging: bool,
}

impl Args {
    pub fn input(&self) -> &[String] {
        &self.input
    }

    pub fn random(&self) -> Option<usize> {
        self.random
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn config(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn expected_count(&self) -> Option<usize> {
        self.expected_count
    }

    pub fn facility_count(&self) -> Option<usize> {
        self.facility_count
    }

    pub fn parallel(&self) -> bool {
        !self.sequential
    }

    pub fn plot(&self) -> bool {
        self.plot
    }

    pub fn svg(&self) -> Option<&str> {
        self.svg.as_deref()
    }

    pub fn output_dir(&self) -> Option<&str> {
        self.output_dir.as_deref()
    }

    pub fn enable_timing(&self) -> bool {
        self.enable_timing
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }
}
