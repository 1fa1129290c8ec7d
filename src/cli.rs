use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "runtar")]
#[command(version)]
#[command(about = "A Rust untar utility for POSIX tar archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  runtar data.tar -d out         extract all members of data.tar into out/\n  \
  runtar -l data.tar             list archive members\n  \
  runtar data.tar notes.txt      extract only notes.txt")]
pub struct Cli {
    /// Tar archive path
    #[arg(value_name = "ARCHIVE")]
    pub archive: String,

    /// Members to extract (default: all)
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,

    /// List members (short format)
    #[arg(short = 'l')]
    pub list: bool,

    /// List members verbosely
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Extract members into exdir
    #[arg(short = 'd', value_name = "DIR", default_value = ".")]
    pub output_dir: String,

    /// Quiet mode (-qq => quieter)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl Cli {
    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }
}
